use log::{debug, warn};

use agentdeck_shared::{ClientMessage, FrameIndex, PlaybackFrame, PlaybackRun, RunId};

use crate::events::ClientEvent;

/// Sub-state of a loaded run.
#[derive(Copy, Debug, Clone, Eq, PartialEq)]
pub enum PlayPhase {
    /// No credit granted; the server sends nothing until resumed
    Paused,
    /// Continuous playback: one credit outstanding, renewed by ack
    Playing,
    /// A single-step fetch is in flight; the next delivered frame
    /// auto-pauses the session
    SeekingPendingStep,
}

enum PlaybackState {
    Unloaded,
    Loaded {
        run: PlaybackRun,
        cursor: FrameIndex,
        phase: PlayPhase,
    },
}

/// Credit-based, seekable, pausable replay of one recorded run.
///
/// The flow-control discipline permits exactly one unacknowledged frame in
/// flight: a resume grants the server a single credit, and the ack emitted
/// on each delivery is the only thing that authorizes the next frame. The
/// cursor moves on server confirmations, never optimistically.
pub struct PlaybackSession {
    state: PlaybackState,
    /// Export in progress; orthogonal to the play phase
    exporting: bool,
    pending_load: Option<RunId>,
}

impl PlaybackSession {
    pub fn new() -> Self {
        Self {
            state: PlaybackState::Unloaded,
            exporting: false,
            pending_load: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, PlaybackState::Loaded { .. })
    }

    pub fn is_exporting(&self) -> bool {
        self.exporting
    }

    pub fn run(&self) -> Option<&PlaybackRun> {
        match &self.state {
            PlaybackState::Loaded { run, .. } => Some(run),
            PlaybackState::Unloaded => None,
        }
    }

    pub fn cursor(&self) -> Option<FrameIndex> {
        match &self.state {
            PlaybackState::Loaded { cursor, .. } => Some(*cursor),
            PlaybackState::Unloaded => None,
        }
    }

    pub fn phase(&self) -> Option<PlayPhase> {
        match &self.state {
            PlaybackState::Loaded { phase, .. } => Some(*phase),
            PlaybackState::Unloaded => None,
        }
    }

    // User intents

    /// Request playback of `run_id`. Valid whether or not a run is already
    /// loaded; a success response discards any prior run.
    pub fn load(&mut self, run_id: RunId, outgoing: &mut Vec<ClientMessage>) {
        self.pending_load = Some(run_id);
        outgoing.push(ClientMessage::PlaybackLoad { run_id });
    }

    /// Grant the server one credit and enter continuous playback.
    pub fn resume(&mut self, outgoing: &mut Vec<ClientMessage>) {
        match &mut self.state {
            PlaybackState::Loaded { phase, .. } if *phase == PlayPhase::Paused => {
                *phase = PlayPhase::Playing;
                outgoing.push(ClientMessage::PlaybackResume);
            }
            PlaybackState::Loaded { phase, .. } => {
                warn!("Dropping resume in phase {:?}", phase);
            }
            PlaybackState::Unloaded => {
                warn!("Dropping resume with no run loaded");
            }
        }
    }

    /// Revoke continuous play. A frame already in flight will still arrive
    /// and is still acknowledged on delivery.
    pub fn pause(&mut self, outgoing: &mut Vec<ClientMessage>) {
        match &mut self.state {
            PlaybackState::Loaded { phase, .. } if *phase == PlayPhase::Playing => {
                *phase = PlayPhase::Paused;
                outgoing.push(ClientMessage::PlaybackPause);
            }
            PlaybackState::Loaded { phase, .. } => {
                warn!("Dropping pause in phase {:?}", phase);
            }
            PlaybackState::Unloaded => {
                warn!("Dropping pause with no run loaded");
            }
        }
    }

    /// Request a cursor move. Out-of-range targets are rejected locally:
    /// no message is sent and no state changes.
    pub fn seek(&mut self, index: FrameIndex, outgoing: &mut Vec<ClientMessage>) {
        match &self.state {
            PlaybackState::Loaded { run, .. } => {
                if !run.contains_frame(index) {
                    warn!(
                        "Rejecting seek to {} outside run of {} steps",
                        index, run.total_steps
                    );
                    return;
                }
                outgoing.push(ClientMessage::PlaybackSeek { frame: index });
            }
            PlaybackState::Unloaded => {
                warn!("Dropping seek with no run loaded");
            }
        }
    }

    /// Fetch exactly one frame ahead of the cursor without entering
    /// continuous playback: pause if playing, seek to the clamped target,
    /// then grant a single credit flagged so the delivery auto-pauses.
    pub fn step_forward(&mut self, outgoing: &mut Vec<ClientMessage>) {
        self.step(true, outgoing);
    }

    /// As [`Self::step_forward`], one frame behind the cursor.
    pub fn step_backward(&mut self, outgoing: &mut Vec<ClientMessage>) {
        self.step(false, outgoing);
    }

    fn step(&mut self, forward: bool, outgoing: &mut Vec<ClientMessage>) {
        match &mut self.state {
            PlaybackState::Loaded { run, cursor, phase } => {
                if *phase == PlayPhase::SeekingPendingStep {
                    warn!("Dropping step while a single-step fetch is pending");
                    return;
                }
                if *phase == PlayPhase::Playing {
                    *phase = PlayPhase::Paused;
                    outgoing.push(ClientMessage::PlaybackPause);
                }
                let target = if forward {
                    (*cursor + 1).min(run.last_frame())
                } else {
                    cursor.saturating_sub(1)
                };
                outgoing.push(ClientMessage::PlaybackSeek { frame: target });
                outgoing.push(ClientMessage::PlaybackResume);
                *phase = PlayPhase::SeekingPendingStep;
            }
            PlaybackState::Unloaded => {
                warn!("Dropping step with no run loaded");
            }
        }
    }

    /// Request an export of the loaded run. Leaves cursor and phase alone.
    pub fn save(&mut self, outgoing: &mut Vec<ClientMessage>) {
        match &self.state {
            PlaybackState::Loaded { .. } => {
                self.exporting = true;
                outgoing.push(ClientMessage::PlaybackSave);
            }
            PlaybackState::Unloaded => {
                warn!("Dropping save with no run loaded");
            }
        }
    }

    /// Discard the loaded run and all transient playback state. Returns
    /// whether a run was actually loaded, so the coordinator knows if the
    /// mode must flip back to Live.
    pub fn unload(&mut self) -> bool {
        self.exporting = false;
        self.pending_load = None;
        match self.state {
            PlaybackState::Loaded { .. } => {
                self.state = PlaybackState::Unloaded;
                true
            }
            PlaybackState::Unloaded => false,
        }
    }

    // Inbound protocol events

    /// Accept a load confirmation: the run is held, the cursor rests at 0,
    /// and the session starts paused. The coordinator flips the session
    /// into Playback mode after this.
    pub fn on_loaded(&mut self, run: PlaybackRun, events: &mut Vec<ClientEvent>) {
        match self.pending_load.take() {
            Some(requested) if requested != run.id => {
                debug!(
                    "Load confirmation for run {} supersedes request for run {}",
                    run.id, requested
                );
            }
            None => {
                debug!("Unsolicited load confirmation for run {}", run.id);
            }
            Some(_) => {}
        }

        self.state = PlaybackState::Loaded {
            run: run.clone(),
            cursor: 0,
            phase: PlayPhase::Paused,
        };
        events.push(ClientEvent::PlaybackLoaded { run });
    }

    /// Accept one credited frame: move the cursor, surface the display
    /// update, and immediately return the credit. A pending single step
    /// additionally emits the auto-pause.
    pub fn on_frame(
        &mut self,
        frame: PlaybackFrame,
        cursor: FrameIndex,
        outgoing: &mut Vec<ClientMessage>,
        events: &mut Vec<ClientEvent>,
    ) {
        match &mut self.state {
            PlaybackState::Loaded {
                run,
                cursor: held,
                phase,
            } => {
                *held = cursor.min(run.last_frame());
                events.push(ClientEvent::PlaybackFrame { frame, cursor: *held });
                outgoing.push(ClientMessage::PlaybackAck);

                if *phase == PlayPhase::SeekingPendingStep {
                    outgoing.push(ClientMessage::PlaybackPause);
                    *phase = PlayPhase::Paused;
                    events.push(ClientEvent::PlaybackPaused);
                }
            }
            PlaybackState::Unloaded => {
                warn!("Dropping playback frame with no run loaded");
            }
        }
    }

    /// Accept a seek confirmation; only now does the cursor move.
    pub fn on_seek_ok(&mut self, cursor: FrameIndex, events: &mut Vec<ClientEvent>) {
        match &mut self.state {
            PlaybackState::Loaded {
                run, cursor: held, ..
            } => {
                if !run.contains_frame(cursor) {
                    warn!(
                        "Seek confirmation at {} outside run of {} steps, clamping",
                        cursor, run.total_steps
                    );
                }
                *held = cursor.min(run.last_frame());
                events.push(ClientEvent::CursorMoved { cursor: *held });
            }
            PlaybackState::Unloaded => {
                warn!("Dropping seek confirmation with no run loaded");
            }
        }
    }

    /// End of stream: the session is forced to Paused whatever it was
    /// doing. No further credit is implied.
    pub fn on_eos(&mut self, cursor: FrameIndex, events: &mut Vec<ClientEvent>) {
        match &mut self.state {
            PlaybackState::Loaded {
                run,
                cursor: held,
                phase,
            } => {
                *held = cursor.min(run.last_frame());
                *phase = PlayPhase::Paused;
                events.push(ClientEvent::PlaybackFinished { cursor: *held });
            }
            PlaybackState::Unloaded => {
                warn!("Dropping end-of-stream with no run loaded");
            }
        }
    }

    /// Server-reported playback error: surfaced, non-fatal. Cursor and run
    /// are untouched; the operator may retry with a new seek or resume.
    pub fn on_error(&mut self, message: String, events: &mut Vec<ClientEvent>) {
        events.push(ClientEvent::PlaybackError { message });
    }

    /// Export ready: hand the presentation layer a download directive.
    pub fn on_save_ready(
        &mut self,
        download_url: String,
        run_id: RunId,
        events: &mut Vec<ClientEvent>,
    ) {
        self.exporting = false;
        events.push(ClientEvent::SaveReady {
            url: download_url,
            filename: format!("{}.s4", run_id),
        });
    }
}
