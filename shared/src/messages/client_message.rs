use serde::{Deserialize, Serialize};

use crate::{
    error::ProtocolError,
    messages::command::LiveCommand,
    types::{FrameIndex, RunId},
};

/// Every message the engine can emit toward the frame source.
///
/// Wire framing is a JSON object tagged by `type`; the engine queues these
/// and the enclosing transport session drains and delivers them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Discovery poll for the set of loadable checkpoints
    RequestCheckpoints,
    /// Catalog poll for the list of recorded runs
    RequestRunHistory,
    /// Live-mode checkpoint switch
    SelectCheckpoint { checkpoint: String },
    /// Forwarded agent control command
    LiveCommand { command: LiveCommand },
    /// Request to begin playback of a recorded run
    PlaybackLoad { run_id: RunId },
    /// Grant the server one frame credit / continue playing
    PlaybackResume,
    /// Revoke continuous play
    PlaybackPause,
    /// Request a cursor move to `frame`
    PlaybackSeek { frame: FrameIndex },
    /// Return the single frame credit
    PlaybackAck,
    /// Request an export of the loaded run
    PlaybackSave,
}

impl ClientMessage {
    pub fn to_json(&self) -> Result<String, ProtocolError> {
        serde_json::to_string(self).map_err(|err| ProtocolError::EncodeFailed {
            detail: err.to_string(),
        })
    }
}
