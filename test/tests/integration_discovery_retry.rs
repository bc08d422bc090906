/// Integration tests for checkpoint discovery
///
/// Discovery is the engine's only timed behavior: an initial request plus
/// at most 5 retries on a fixed 3000 ms interval, cancelled by any
/// response, reporting "no client connected" exactly once on exhaustion,
/// and restarted from scratch on reconnect.
use std::time::{Duration, Instant};

use agentdeck_client::{Client, ClientConfig, ClientEvent, DiscoveryState};
use agentdeck_test::{exchange_messages, FrameSource};

fn tick(client: &mut Client, source: &mut FrameSource, at: Instant) {
    client.update(at);
    exchange_messages(client, source);
}

#[test]
fn unanswered_discovery_exhausts_after_five_retries() {
    let mut client = Client::new(ClientConfig::default());
    let mut source = FrameSource::new().mute_discovery();
    let start = Instant::now();

    client.request_checkpoints(start);
    exchange_messages(&mut client, &mut source);
    assert_eq!(source.discovery_requests(), 1);

    // ticks inside the interval do nothing
    tick(&mut client, &mut source, start + Duration::from_millis(1500));
    assert_eq!(source.discovery_requests(), 1);

    // one retry per elapsed interval; the fifth (15s) spends the budget
    for i in 1..=5u64 {
        tick(&mut client, &mut source, start + Duration::from_millis(3000 * i));
    }
    assert_eq!(source.discovery_requests(), 6);
    assert_eq!(client.discovery_state(), DiscoveryState::Exhausted);

    let events = client.take_events();
    let exhaustions = events
        .iter()
        .filter(|e| matches!(e, ClientEvent::DiscoveryExhausted))
        .count();
    assert_eq!(exhaustions, 1);

    // extra ticks stay quiet: exhaustion is reported exactly once
    tick(&mut client, &mut source, start + Duration::from_millis(60_000));
    assert_eq!(source.discovery_requests(), 6);
    assert!(client.take_events().is_empty());
}

#[test]
fn response_fulfills_and_cancels_retries() {
    let mut client = Client::new(ClientConfig::default());
    let mut source = FrameSource::new();
    let start = Instant::now();

    client.request_checkpoints(start);
    exchange_messages(&mut client, &mut source);

    assert_eq!(client.discovery_state(), DiscoveryState::Fulfilled);
    assert_eq!(client.checkpoints(), ["ckpt-1".to_string(), "ckpt-2".to_string()]);
    assert_eq!(
        client.take_events(),
        vec![ClientEvent::CheckpointsUpdated {
            checkpoints: vec!["ckpt-1".into(), "ckpt-2".into()],
        }]
    );

    // no retry ever fires once fulfilled
    tick(&mut client, &mut source, start + Duration::from_millis(30_000));
    assert_eq!(source.discovery_requests(), 1);
}

#[test]
fn empty_checkpoint_set_still_fulfills() {
    let mut client = Client::new(ClientConfig::default());
    let mut source = FrameSource::new().with_checkpoints(Vec::new());
    let start = Instant::now();

    client.request_checkpoints(start);
    exchange_messages(&mut client, &mut source);

    assert_eq!(client.discovery_state(), DiscoveryState::Fulfilled);
    assert!(client.checkpoints().is_empty());
}

#[test]
fn reconnect_restarts_an_exhausted_sequence() {
    let mut client = Client::new(ClientConfig::default());
    let mut silent = FrameSource::new().mute_discovery();
    let start = Instant::now();

    client.request_checkpoints(start);
    exchange_messages(&mut client, &mut silent);
    for i in 1..=5u64 {
        tick(&mut client, &mut silent, start + Duration::from_millis(3000 * i));
    }
    assert_eq!(client.discovery_state(), DiscoveryState::Exhausted);
    client.take_events();

    // an agent attaches and the transport reconnects
    let mut attached = FrameSource::new();
    let reconnect = start + Duration::from_millis(60_000);
    client.handle_reconnect(reconnect);
    exchange_messages(&mut client, &mut attached);

    assert_eq!(attached.discovery_requests(), 1);
    assert_eq!(client.discovery_state(), DiscoveryState::Fulfilled);
    assert!(client
        .take_events()
        .contains(&ClientEvent::CheckpointsUpdated {
            checkpoints: vec!["ckpt-1".into(), "ckpt-2".into()],
        }));
}
