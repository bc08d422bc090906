use agentdeck_shared::{FrameIndex, LiveFrame, Mode, PlaybackFrame, PlaybackRun, RunSummary};

/// Display effects emitted by the engine for the presentation layer.
///
/// The engine queues these as it reacts to inbound messages and user
/// intents; a presentation adapter drains them with
/// [`Client::take_events`](crate::Client::take_events) and renders. The
/// engine itself never references a rendering surface.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// The checkpoint set was replaced (possibly by an empty set)
    CheckpointsUpdated { checkpoints: Vec<String> },
    /// Discovery ran out of retries with no response ("no client
    /// connected"); emitted exactly once per exhausted sequence
    DiscoveryExhausted,
    /// The run catalog was refreshed
    RunHistoryUpdated { runs: Vec<RunSummary> },
    /// One step of live telemetry, with the session score after applying it
    LiveFrame { frame: LiveFrame, score: f64 },
    /// The session switched between Live and Playback
    ModeChanged { mode: Mode },
    /// A requested run finished loading and playback is paused at frame 0
    PlaybackLoaded { run: PlaybackRun },
    /// One credited playback frame
    PlaybackFrame {
        frame: PlaybackFrame,
        cursor: FrameIndex,
    },
    /// The server confirmed a seek; the cursor now rests at `cursor`
    CursorMoved { cursor: FrameIndex },
    /// The session returned to Paused without an operator pause (e.g. a
    /// completed single step)
    PlaybackPaused,
    /// Playback reached the final frame of the loaded run
    PlaybackFinished { cursor: FrameIndex },
    /// Non-fatal server-reported playback error; the run stays loaded
    PlaybackError { message: String },
    /// An export is ready; `filename` is the suggested download name
    SaveReady { url: String, filename: String },
}
