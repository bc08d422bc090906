use serde::{Deserialize, Serialize};

use crate::{
    error::ProtocolError,
    frame::{LiveFrame, PlaybackFrame},
    run::{PlaybackRun, RunSummary},
    types::{FrameIndex, RunId},
};

/// Every message the frame source can deliver to the engine.
///
/// The variant is decided once here, at the protocol boundary — live and
/// playback frame payloads are distinct types, never sniffed per-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Discovery response; replaces the checkpoint set wholesale
    CheckpointsUpdate { checkpoints: Vec<String> },
    /// Catalog refresh, solicited or not
    RunHistoryUpdate { runs: Vec<RunSummary> },
    /// One step of live telemetry
    FrameUpdate(LiveFrame),
    /// Load confirmation for a requested run
    PlaybackLoaded(PlaybackRun),
    /// Seek confirmation carrying the server-validated cursor
    PlaybackSeekOk { cursor: FrameIndex },
    /// One credited frame of the loaded run
    PlaybackFrame {
        frame: PlaybackFrame,
        cursor: FrameIndex,
    },
    /// Playback reached the final frame
    PlaybackEos { cursor: FrameIndex },
    /// Non-fatal playback error, surfaced to the operator
    PlaybackError { message: String },
    /// Export is ready for download
    PlaybackSaveReady { download_url: String, run_id: RunId },
}

impl ServerMessage {
    pub fn from_json(text: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(text).map_err(|err| ProtocolError::MalformedMessage {
            detail: err.to_string(),
        })
    }
}
