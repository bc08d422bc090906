use agentdeck_shared::{ClientMessage, RunId, RunSummary};

use crate::{events::ClientEvent, playback::PlaybackSession};

/// Holds the ordered list of recorded-run summaries and routes load
/// requests to the playback session. The catalog owns no playback state.
pub struct RunCatalog {
    runs: Vec<RunSummary>,
}

impl RunCatalog {
    pub fn new() -> Self {
        Self { runs: Vec::new() }
    }

    /// The summaries in server-defined order; never re-sorted client-side.
    pub fn runs(&self) -> &[RunSummary] {
        &self.runs
    }

    pub fn request(&self, outgoing: &mut Vec<ClientMessage>) {
        outgoing.push(ClientMessage::RequestRunHistory);
    }

    /// Replace the held sequence. Updates may arrive unsolicited (the
    /// server pushes a refresh when a live run completes); repeated
    /// identical updates produce nothing beyond a refresh event.
    pub fn on_update(&mut self, runs: Vec<RunSummary>, events: &mut Vec<ClientEvent>) {
        self.runs = runs.clone();
        events.push(ClientEvent::RunHistoryUpdated { runs });
    }

    /// Route a selection to the playback session's load operation.
    pub fn select_run(
        &self,
        run_id: RunId,
        playback: &mut PlaybackSession,
        outgoing: &mut Vec<ClientMessage>,
    ) {
        playback.load(run_id, outgoing);
    }
}
