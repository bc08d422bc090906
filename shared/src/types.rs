/// Index of a frame within a recorded run's frame sequence.
pub type FrameIndex = u32;

/// Identifier assigned by the frame source to a recorded run.
pub type RunId = u32;

/// The mutually exclusive operating state of a dashboard session.
///
/// Exactly one mode is active at any time. Inbound frames and outbound
/// commands are routed (or dropped) according to the current mode.
#[derive(Copy, Debug, Clone, Eq, PartialEq)]
pub enum Mode {
    // Consuming the telemetry stream of the running agent
    Live,
    // Replaying a recorded run from the remote frame source
    Playback,
}

impl Mode {
    pub fn is_live(&self) -> bool {
        *self == Mode::Live
    }

    pub fn is_playback(&self) -> bool {
        *self == Mode::Playback
    }
}
