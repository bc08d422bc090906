use serde::{Deserialize, Serialize};

/// Control commands the operator can issue to the running agent.
///
/// The vocabulary is fixed by the agent runtime; commands are forwarded
/// verbatim while Live and dropped while Playback.
#[derive(Copy, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiveCommand {
    // Advance the environment by a single step
    Step,
    // Begin continuous stepping
    Run,
    // Halt continuous stepping
    Pause,
    // Reset the environment; also zeroes the session score locally
    Reset,
}

impl LiveCommand {
    pub fn name(&self) -> &'static str {
        match self {
            LiveCommand::Step => "step",
            LiveCommand::Run => "run",
            LiveCommand::Pause => "pause",
            LiveCommand::Reset => "reset",
        }
    }
}
