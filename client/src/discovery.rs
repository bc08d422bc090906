use std::time::Instant;

use log::warn;

use agentdeck_shared::{ClientMessage, Timer};

use crate::{config::ClientConfig, events::ClientEvent};

/// Progress of the checkpoint-discovery conversation.
///
/// Discovery is the only timed behavior in the engine: an unanswered
/// request is re-sent on a fixed interval a bounded number of times. In
/// this poll-driven model the armed [`Timer`] inside `Requesting` *is* the
/// scheduled retry; there is no separate callback to cancel.
#[derive(Copy, Debug, Clone, Eq, PartialEq)]
pub enum DiscoveryState {
    /// No discovery attempt has been made since construction or reconnect
    Idle,
    /// A request is outstanding and the retry timer is armed
    Requesting,
    /// A response arrived; no further polling until reconnect
    Fulfilled,
    /// The retry budget ran out with no response ("no client connected")
    Exhausted,
}

/// Bounded-retry request/response state machine for the set of loadable
/// model checkpoints.
pub struct CheckpointDiscovery {
    state: DiscoveryState,
    retry_timer: Option<Timer>,
    retries_used: u8,
    checkpoints: Vec<String>,
}

impl CheckpointDiscovery {
    pub fn new() -> Self {
        Self {
            state: DiscoveryState::Idle,
            retry_timer: None,
            retries_used: 0,
            checkpoints: Vec::new(),
        }
    }

    pub fn state(&self) -> DiscoveryState {
        self.state
    }

    /// The most recently accepted checkpoint set. Empty until fulfilled.
    pub fn checkpoints(&self) -> &[String] {
        &self.checkpoints
    }

    /// Emit a discovery request and arm the retry timer. Invoked again
    /// after fulfillment this restarts the sequence with a fresh budget.
    pub fn request(
        &mut self,
        config: &ClientConfig,
        now: Instant,
        outgoing: &mut Vec<ClientMessage>,
    ) {
        outgoing.push(ClientMessage::RequestCheckpoints);
        self.retries_used = 0;
        self.retry_timer = Some(Timer::new(config.discovery_retry_interval, now));
        self.state = DiscoveryState::Requesting;
    }

    /// Drive the retry schedule. Re-sends the request each time the timer
    /// rings until the budget is spent, then reports exhaustion exactly
    /// once and disarms.
    pub fn update(
        &mut self,
        config: &ClientConfig,
        now: Instant,
        outgoing: &mut Vec<ClientMessage>,
        events: &mut Vec<ClientEvent>,
    ) {
        if self.state != DiscoveryState::Requesting {
            return;
        }
        let Some(timer) = &mut self.retry_timer else {
            return;
        };
        if !timer.ringing(now) {
            return;
        }

        self.retries_used += 1;
        outgoing.push(ClientMessage::RequestCheckpoints);

        if self.retries_used >= config.discovery_retry_limit {
            // the budget went with this retry; nothing more is scheduled
            warn!(
                "Checkpoint discovery exhausted after {} retries, no agent connected",
                self.retries_used
            );
            self.state = DiscoveryState::Exhausted;
            self.retry_timer = None;
            events.push(ClientEvent::DiscoveryExhausted);
        } else {
            timer.reset(now);
        }
    }

    /// Accept a discovery response. The set replaces the prior one
    /// wholesale — an empty set still fulfills and cancels the retries.
    pub fn on_update(&mut self, checkpoints: Vec<String>, events: &mut Vec<ClientEvent>) {
        self.checkpoints = checkpoints.clone();
        self.state = DiscoveryState::Fulfilled;
        self.retry_timer = None;
        events.push(ClientEvent::CheckpointsUpdated { checkpoints });
    }

    /// Return to `Idle`, revoking any pending retry. Invoked on session
    /// reconnect; the caller restarts the sequence with [`Self::request`].
    pub fn reset(&mut self) {
        self.state = DiscoveryState::Idle;
        self.retry_timer = None;
        self.retries_used = 0;
    }
}
