//! # Agentdeck Client
//! The client-resident synchronization engine for the agentdeck dashboard:
//! checkpoint discovery with bounded retry, live telemetry consumption,
//! and credit-based seekable replay of recorded runs.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use agentdeck_shared as shared;

mod catalog;
mod client;
mod config;
mod discovery;
mod events;
mod live;
mod playback;

pub use catalog::RunCatalog;
pub use client::Client;
pub use config::ClientConfig;
pub use discovery::{CheckpointDiscovery, DiscoveryState};
pub use events::ClientEvent;
pub use live::LiveStream;
pub use playback::{PlayPhase, PlaybackSession};
