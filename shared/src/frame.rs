use serde::{Deserialize, Serialize};

/// One step of live telemetry from the running agent.
///
/// Transient: displayed once and discarded, never cached by the engine.
/// Statically distinct from [`PlaybackFrame`] — the two are decided at the
/// protocol boundary by message type, never inferred per-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveFrame {
    /// Opaque encoded bitmap (base64)
    pub image: String,
    pub reward: f64,
    /// Episode-terminal flag
    #[serde(default)]
    pub done: bool,
    pub q_values: Vec<f64>,
    pub action: String,
    /// Highest episode reward the agent runtime has observed so far
    #[serde(default)]
    pub high_score: f64,
    pub checkpoint: String,
}

/// One credited frame of a recorded run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackFrame {
    /// Opaque encoded bitmap (base64)
    pub image: String,
    pub reward: f64,
    #[serde(default)]
    pub done: bool,
    pub q_values: Vec<f64>,
    pub action: String,
    pub checkpoint: String,
}
