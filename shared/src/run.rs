use serde::{Deserialize, Serialize};

use crate::types::{FrameIndex, RunId};

/// Summary of one recorded run, as listed in the run catalog.
///
/// Summaries are immutable once received and are held in the order the
/// server sent them; the engine never re-sorts the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub id: RunId,
    /// Opaque ISO-8601 timestamp of the run's first frame
    pub timestamp: String,
    pub total_steps: FrameIndex,
    pub total_reward: f64,
    /// Wall-clock length of the run in seconds, when the server reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

/// Metadata of the currently loaded run, delivered with a load confirmation.
///
/// Exactly one instance exists at a time, owned by the playback session for
/// the lifetime of the load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackRun {
    pub id: RunId,
    #[serde(default)]
    pub timestamp: String,
    pub total_steps: FrameIndex,
    #[serde(default)]
    pub total_reward: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    pub checkpoint: String,
}

impl PlaybackRun {
    /// Whether `index` addresses a frame of this run.
    pub fn contains_frame(&self, index: FrameIndex) -> bool {
        index < self.total_steps
    }

    /// Index of the final frame. A loaded run always has at least one
    /// frame; an empty run clamps to 0 so the cursor invariant holds.
    pub fn last_frame(&self) -> FrameIndex {
        self.total_steps.saturating_sub(1)
    }
}
