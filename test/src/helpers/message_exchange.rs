use agentdeck_client::Client;

use crate::helpers::frame_source::FrameSource;

/// Flush the engine's outgoing queue to the source once and feed every
/// reply back in. Returns how many messages the engine sent.
pub fn exchange_messages_once(client: &mut Client, source: &mut FrameSource) -> usize {
    let outgoing = client.take_outgoing();
    let sent = outgoing.len();
    if sent > 0 {
        for reply in source.handle_batch(outgoing) {
            client.receive_message(reply);
        }
    }
    sent
}

/// Exchange until both sides go quiet (e.g. continuous playback runs to
/// end of stream). Returns the number of round trips.
pub fn exchange_messages(client: &mut Client, source: &mut FrameSource) -> usize {
    let mut rounds = 0;
    while exchange_messages_once(client, source) > 0 {
        rounds += 1;
    }
    rounds
}
