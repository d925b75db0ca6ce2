use std::sync::{Arc, Mutex};

use super::commands::{PlayerCommand, PlayerCommands};
use super::events::*;
use crate::types::{RepeatMode, TrackId};

fn recorder(emitter: &mut EventEmitter, kind: EventKind) -> Arc<Mutex<Vec<PlayerEvent>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    emitter.subscribe(kind, move |e| sink.lock().unwrap().push(e.clone()));
    seen
}

#[test]
fn test_emit_reaches_matching_kind_only() {
    let mut emitter = EventEmitter::new();
    let stops = recorder(&mut emitter, EventKind::Stop);
    let plays = recorder(&mut emitter, EventKind::Play);

    emitter.emit(&PlayerEvent::Stop);

    assert_eq!(stops.lock().unwrap().as_slice(), &[PlayerEvent::Stop]);
    assert!(plays.lock().unwrap().is_empty());
}

#[test]
fn test_subscribers_run_in_registration_order() {
    let mut emitter = EventEmitter::new();
    let order = Arc::new(Mutex::new(Vec::new()));

    for n in 0..3 {
        let order = order.clone();
        emitter.subscribe(EventKind::ShuffleChanged, move |_| order.lock().unwrap().push(n));
    }
    let all = order.clone();
    emitter.subscribe_all(move |_| all.lock().unwrap().push(99));

    emitter.emit(&PlayerEvent::ShuffleChanged { shuffle: true });

    assert_eq!(*order.lock().unwrap(), vec![0, 1, 2, 99]);
}

#[test]
fn test_subscribe_all_sees_every_kind() {
    let mut emitter = EventEmitter::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    emitter.subscribe_all(move |e| sink.lock().unwrap().push(e.kind()));

    emitter.emit(&PlayerEvent::Stop);
    emitter.emit(&PlayerEvent::RepeatChanged {
        mode: RepeatMode::All,
    });
    emitter.emit(&PlayerEvent::TrackRemoved {
        id: TrackId::from("x"),
    });

    assert_eq!(
        *seen.lock().unwrap(),
        vec![EventKind::Stop, EventKind::RepeatChanged, EventKind::TrackRemoved]
    );
}

#[test]
fn test_unsubscribe() {
    let mut emitter = EventEmitter::new();
    let seen = Arc::new(Mutex::new(0));
    let sink = seen.clone();
    let id = emitter.subscribe(EventKind::Stop, move |_| *sink.lock().unwrap() += 1);

    emitter.emit(&PlayerEvent::Stop);
    assert!(emitter.unsubscribe(id));
    assert!(!emitter.unsubscribe(id));
    emitter.emit(&PlayerEvent::Stop);

    assert_eq!(*seen.lock().unwrap(), 1);
}

#[test]
fn test_subscriber_count() {
    let mut emitter = EventEmitter::new();
    emitter.subscribe(EventKind::Play, |_| {});
    emitter.subscribe(EventKind::Play, |_| {});
    emitter.subscribe_all(|_| {});

    assert_eq!(emitter.subscriber_count(EventKind::Play), 3);
    assert_eq!(emitter.subscriber_count(EventKind::Pause), 1);
}

#[test]
fn test_event_kind_names_round_trip() {
    for kind in EventKind::ALL {
        assert_eq!(EventKind::from_name(kind.name()), Some(kind));
    }
    assert_eq!(EventKind::TrackChanged.to_string(), "trackchange");
    assert_eq!(EventKind::from_name("volumechange"), None);
}

#[test]
fn test_event_kind_matches_variant() {
    assert_eq!(PlayerEvent::PlaylistCleared.kind(), EventKind::PlaylistCleared);
    assert_eq!(PlayerEvent::Play { index: Some(0) }.kind(), EventKind::Play);
    assert_eq!(
        PlayerEvent::Error {
            message: "boom".into()
        }
        .kind(),
        EventKind::Error
    );
}

#[test]
fn test_emit_collects_commands_in_order() {
    let mut emitter = EventEmitter::new();
    emitter.subscribe_with_commands(EventKind::Error, |_, commands| commands.next());
    emitter.subscribe(EventKind::Error, |_| {});
    emitter.subscribe_with_commands(EventKind::Error, |_, commands| {
        commands.seek(50.0);
        commands.remove_track(TrackId::from("bad"));
    });

    let commands: Vec<PlayerCommand> = emitter
        .emit(&PlayerEvent::Error {
            message: "boom".into(),
        })
        .into_iter()
        .collect();

    assert_eq!(
        commands,
        vec![
            PlayerCommand::Next,
            PlayerCommand::Seek(50.0),
            PlayerCommand::RemoveTrack(TrackId::from("bad")),
        ]
    );
}

#[test]
fn test_deliver_steps_one_subscriber_at_a_time() {
    let mut emitter = EventEmitter::new();
    let order = Arc::new(Mutex::new(Vec::new()));
    for n in 0..3 {
        let order = order.clone();
        let kind = if n == 1 { EventKind::Play } else { EventKind::Stop };
        emitter.subscribe(kind, move |_| order.lock().unwrap().push(n));
    }

    let mut commands = PlayerCommands::new();
    let next = emitter.deliver(0, &PlayerEvent::Stop, &mut commands);
    assert_eq!(next, Some(1));
    assert_eq!(*order.lock().unwrap(), vec![0]);

    // Skips the Play subscriber
    let next = emitter.deliver(1, &PlayerEvent::Stop, &mut commands);
    assert_eq!(next, Some(3));
    assert_eq!(emitter.deliver(3, &PlayerEvent::Stop, &mut commands), None);
    assert_eq!(*order.lock().unwrap(), vec![0, 2]);
    assert!(commands.is_empty());
}
