use std::time::Instant;

use log::warn;

use agentdeck_shared::{
    ClientMessage, FrameIndex, LiveCommand, Mode, PlaybackRun, ProtocolError, RunId, RunSummary,
    ServerMessage,
};

use crate::{
    catalog::RunCatalog,
    config::ClientConfig,
    discovery::{CheckpointDiscovery, DiscoveryState},
    events::ClientEvent,
    live::LiveStream,
    playback::{PlayPhase, PlaybackSession},
};

/// The per-connection session object: single source of truth for the
/// operating mode, owner of the four protocol components, and the one
/// dispatcher for inbound messages.
///
/// The engine is driven from outside: the enclosing transport session
/// feeds inbound messages to [`Self::receive_message`] (or raw text to
/// [`Self::receive_text`]), calls [`Self::update`] with the current time
/// to drive the retry schedule, and drains [`Self::take_outgoing`] /
/// [`Self::take_events`] after each turn. Nothing here blocks, reads a
/// clock, or touches a rendering surface.
pub struct Client {
    config: ClientConfig,
    mode: Mode,
    discovery: CheckpointDiscovery,
    catalog: RunCatalog,
    live: LiveStream,
    playback: PlaybackSession,
    outgoing: Vec<ClientMessage>,
    events: Vec<ClientEvent>,
}

impl Client {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            mode: Mode::Live,
            discovery: CheckpointDiscovery::new(),
            catalog: RunCatalog::new(),
            live: LiveStream::new(),
            playback: PlaybackSession::new(),
            outgoing: Vec::new(),
            events: Vec::new(),
        }
    }

    // Session state accessors

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn score(&self) -> f64 {
        self.live.score()
    }

    pub fn checkpoints(&self) -> &[String] {
        self.discovery.checkpoints()
    }

    pub fn discovery_state(&self) -> DiscoveryState {
        self.discovery.state()
    }

    pub fn runs(&self) -> &[RunSummary] {
        self.catalog.runs()
    }

    pub fn loaded_run(&self) -> Option<&PlaybackRun> {
        self.playback.run()
    }

    pub fn cursor(&self) -> Option<FrameIndex> {
        self.playback.cursor()
    }

    pub fn play_phase(&self) -> Option<PlayPhase> {
        self.playback.phase()
    }

    // Inbound

    /// Decode one message off the wire and dispatch it. Malformed input is
    /// logged and dropped; the session state is untouched.
    pub fn receive_text(&mut self, text: &str) -> Result<(), ProtocolError> {
        match ServerMessage::from_json(text) {
            Ok(message) => {
                self.receive_message(message);
                Ok(())
            }
            Err(err) => {
                warn!("{}", err);
                Err(err)
            }
        }
    }

    /// Route one inbound message to the component that owns its
    /// conversation. This is the enforcement point for mode exclusivity:
    /// live telemetry is gated on the current mode before any processing.
    pub fn receive_message(&mut self, message: ServerMessage) {
        match message {
            ServerMessage::CheckpointsUpdate { checkpoints } => {
                self.discovery.on_update(checkpoints, &mut self.events);
            }
            ServerMessage::RunHistoryUpdate { runs } => {
                self.catalog.on_update(runs, &mut self.events);
            }
            ServerMessage::FrameUpdate(frame) => {
                self.live.on_frame(self.mode, frame, &mut self.events);
            }
            ServerMessage::PlaybackLoaded(run) => {
                self.playback.on_loaded(run, &mut self.events);
                self.enter_playback();
            }
            ServerMessage::PlaybackSeekOk { cursor } => {
                self.playback.on_seek_ok(cursor, &mut self.events);
            }
            ServerMessage::PlaybackFrame { frame, cursor } => {
                self.playback
                    .on_frame(frame, cursor, &mut self.outgoing, &mut self.events);
            }
            ServerMessage::PlaybackEos { cursor } => {
                self.playback.on_eos(cursor, &mut self.events);
            }
            ServerMessage::PlaybackError { message } => {
                self.playback.on_error(message, &mut self.events);
            }
            ServerMessage::PlaybackSaveReady {
                download_url,
                run_id,
            } => {
                self.playback
                    .on_save_ready(download_url, run_id, &mut self.events);
            }
        }
    }

    /// Drive timed behavior (the discovery retry schedule). Call once per
    /// tick with the current time.
    pub fn update(&mut self, now: Instant) {
        self.discovery
            .update(&self.config, now, &mut self.outgoing, &mut self.events);
    }

    /// Reset for a fresh transport session. The frame source's state is
    /// not assumed to have survived, so playback is torn down, the mode
    /// returns to Live, the score zeroes, and discovery starts over.
    pub fn handle_reconnect(&mut self, now: Instant) {
        self.playback.unload();
        if self.mode.is_playback() {
            self.mode = Mode::Live;
            self.events.push(ClientEvent::ModeChanged { mode: Mode::Live });
        }
        self.live.reset_score();
        self.discovery.reset();
        self.discovery
            .request(&self.config, now, &mut self.outgoing);
    }

    // User intents

    pub fn request_checkpoints(&mut self, now: Instant) {
        self.discovery
            .request(&self.config, now, &mut self.outgoing);
    }

    pub fn request_run_history(&mut self) {
        self.catalog.request(&mut self.outgoing);
    }

    /// Ask the agent runtime to load a checkpoint. A live-mode switch:
    /// dropped with a diagnostic during playback.
    pub fn select_checkpoint(&mut self, checkpoint: String) {
        if self.mode.is_playback() {
            warn!("Dropping checkpoint selection issued during playback");
            return;
        }
        self.outgoing
            .push(ClientMessage::SelectCheckpoint { checkpoint });
    }

    pub fn send_command(&mut self, command: LiveCommand) {
        self.live
            .send_command(self.mode, command, &mut self.outgoing);
    }

    pub fn load_run(&mut self, run_id: RunId) {
        self.catalog
            .select_run(run_id, &mut self.playback, &mut self.outgoing);
    }

    pub fn resume(&mut self) {
        self.playback.resume(&mut self.outgoing);
    }

    pub fn pause(&mut self) {
        self.playback.pause(&mut self.outgoing);
    }

    pub fn seek(&mut self, index: FrameIndex) {
        self.playback.seek(index, &mut self.outgoing);
    }

    pub fn step_forward(&mut self) {
        self.playback.step_forward(&mut self.outgoing);
    }

    pub fn step_backward(&mut self) {
        self.playback.step_backward(&mut self.outgoing);
    }

    pub fn save_run(&mut self) {
        self.playback.save(&mut self.outgoing);
    }

    /// Leave playback: the run and cursor are discarded, the mode flips to
    /// Live, and the score starts from zero.
    pub fn exit_playback(&mut self) {
        if self.playback.unload() {
            self.mode = Mode::Live;
            self.live.reset_score();
            self.events.push(ClientEvent::ModeChanged { mode: Mode::Live });
        } else {
            warn!("Dropping playback exit with no run loaded");
        }
    }

    // Outbound

    /// Drain the queued protocol messages for the transport to deliver,
    /// in the order they were produced.
    pub fn take_outgoing(&mut self) -> Vec<ClientMessage> {
        std::mem::take(&mut self.outgoing)
    }

    /// Drain the queued display effects for the presentation adapter.
    pub fn take_events(&mut self) -> Vec<ClientEvent> {
        std::mem::take(&mut self.events)
    }

    fn enter_playback(&mut self) {
        self.live.reset_score();
        if !self.mode.is_playback() {
            self.mode = Mode::Playback;
            self.events.push(ClientEvent::ModeChanged {
                mode: Mode::Playback,
            });
        }
    }
}
