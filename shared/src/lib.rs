//! # Agentdeck Shared
//! Common functionality shared between the agentdeck engine and its hosts.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod error;
mod frame;
mod messages;
mod run;
mod timer;
mod types;

pub use error::ProtocolError;
pub use frame::{LiveFrame, PlaybackFrame};
pub use messages::{
    client_message::ClientMessage, command::LiveCommand, server_message::ServerMessage,
};
pub use run::{PlaybackRun, RunSummary};
pub use timer::Timer;
pub use types::{FrameIndex, Mode, RunId};
