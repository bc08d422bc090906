use log::{debug, warn};

use agentdeck_shared::{ClientMessage, LiveCommand, LiveFrame, Mode};

use crate::events::ClientEvent;

/// Consumes step telemetry while the session is Live and forwards agent
/// control commands. Hard-gated on mode: nothing is processed during
/// Playback, not even partially.
pub struct LiveStream {
    score: f64,
}

impl LiveStream {
    pub fn new() -> Self {
        Self { score: 0.0 }
    }

    /// Running sum of rewards since the last reset or mode entry.
    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn reset_score(&mut self) {
        self.score = 0.0;
    }

    /// Accept one step of telemetry. Dropped whole while `Mode = Playback`:
    /// no score update, no display effect.
    pub fn on_frame(&mut self, mode: Mode, frame: LiveFrame, events: &mut Vec<ClientEvent>) {
        if mode.is_playback() {
            debug!("Dropping live frame received during playback");
            return;
        }

        self.score += frame.reward;
        events.push(ClientEvent::LiveFrame {
            frame,
            score: self.score,
        });
    }

    /// Forward a control command to the agent runtime. Dropped with a
    /// diagnostic while `Mode = Playback`. A reset also zeroes the score
    /// locally before forwarding.
    pub fn send_command(
        &mut self,
        mode: Mode,
        command: LiveCommand,
        outgoing: &mut Vec<ClientMessage>,
    ) {
        if mode.is_playback() {
            warn!("Dropping live command '{}' issued during playback", command.name());
            return;
        }

        if command == LiveCommand::Reset {
            self.score = 0.0;
        }
        outgoing.push(ClientMessage::LiveCommand { command });
    }
}
