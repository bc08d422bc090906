/// Property tests for the cursor-bounds invariant
///
/// For every loaded run the cursor stays inside `[0, total_steps - 1]` at
/// every observable instant, out-of-range seeks produce no traffic, and
/// step targets clamp at the run edges.
use proptest::prelude::*;

use agentdeck_client::{Client, ClientConfig};
use agentdeck_shared::{ClientMessage, FrameIndex};
use agentdeck_test::{exchange_messages, recorded_run, FrameSource};

fn loaded(total_steps: FrameIndex) -> (Client, FrameSource) {
    let mut client = Client::new(ClientConfig::default());
    let mut source = FrameSource::new();
    source.add_run(recorded_run(1, total_steps));
    client.load_run(1);
    exchange_messages(&mut client, &mut source);
    client.take_events();
    (client, source)
}

proptest! {
    #[test]
    fn seek_emits_iff_target_in_bounds(total_steps in 1u32..200, target in 0u32..400) {
        let (mut client, _source) = loaded(total_steps);

        client.seek(target);
        let sent = client.take_outgoing();

        if target < total_steps {
            prop_assert_eq!(sent, vec![ClientMessage::PlaybackSeek { frame: target }]);
        } else {
            prop_assert!(sent.is_empty());
            prop_assert_eq!(client.cursor(), Some(0));
        }
    }

    #[test]
    fn cursor_never_leaves_bounds_during_play(total_steps in 1u32..40) {
        let (mut client, mut source) = loaded(total_steps);

        client.resume();
        loop {
            let outgoing = client.take_outgoing();
            if outgoing.is_empty() {
                break;
            }
            for reply in source.handle_batch(outgoing) {
                client.receive_message(reply);
                let cursor = client.cursor().expect("run stays loaded during play");
                prop_assert!(cursor < total_steps);
            }
        }

        prop_assert_eq!(client.cursor(), Some(total_steps - 1));
        prop_assert_eq!(source.max_outstanding(), 1);
    }

    #[test]
    fn step_targets_clamp_at_the_edges(
        total_steps in 1u32..40,
        start in 0u32..40,
        forward in any::<bool>(),
    ) {
        let start = start.min(total_steps - 1);
        let (mut client, mut source) = loaded(total_steps);

        if start > 0 {
            client.seek(start);
            exchange_messages(&mut client, &mut source);
        }
        prop_assert_eq!(client.cursor(), Some(start));

        if forward {
            client.step_forward();
        } else {
            client.step_backward();
        }
        let sent = client.take_outgoing();
        let expected = if forward {
            (start + 1).min(total_steps - 1)
        } else {
            start.saturating_sub(1)
        };
        prop_assert_eq!(&sent[0], &ClientMessage::PlaybackSeek { frame: expected });
    }
}
