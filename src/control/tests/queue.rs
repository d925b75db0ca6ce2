use proptest::prelude::*;

use crate::control::queue::Playlist;
use crate::types::{RepeatMode, Track, TrackId};

fn test_track(name: &str) -> Track {
    Track::from_path(format!("{name}.mp3"), format!("/music/{name}.mp3"))
}

fn playlist_of(names: &[&str]) -> Playlist {
    let mut playlist = Playlist::new();
    for name in names {
        playlist.add(test_track(name));
    }
    playlist
}

#[test]
fn test_add_and_get() {
    let mut playlist = Playlist::new();

    let track = test_track("Track 1");
    let id = track.id.clone();
    assert!(playlist.add(track));
    playlist.add(test_track("Track 2"));

    assert_eq!(playlist.len(), 2);
    assert_eq!(playlist.get_by_id(&id).unwrap().name, "Track 1");
    assert_eq!(playlist.get(1).unwrap().name, "Track 2");
}

#[test]
fn test_add_rejects_duplicate_id() {
    let mut playlist = Playlist::new();
    let track = test_track("A");

    assert!(playlist.add(track.clone()));
    assert!(!playlist.add(track));
    assert_eq!(playlist.len(), 1);
}

#[test]
fn test_from_tracks_drops_duplicates() {
    let a = test_track("A");
    let b = test_track("B");
    let playlist = Playlist::from_tracks(vec![a.clone(), b.clone(), a.clone()]);

    assert_eq!(playlist.len(), 2);
    assert_eq!(playlist.get(0).unwrap().id, a.id);
    assert_eq!(playlist.get(1).unwrap().id, b.id);
    assert_eq!(playlist.current_index(), None);
}

#[test]
fn test_remove_before_cursor_shifts_cursor() {
    let mut playlist = playlist_of(&["A", "B", "C"]);
    let first = playlist.get(0).unwrap().id.clone();

    playlist.set_current(2);
    let (index, removed) = playlist.remove(&first).unwrap();

    assert_eq!(index, 0);
    assert_eq!(removed.name, "A");
    assert_eq!(playlist.current_index(), Some(1));
    assert_eq!(playlist.current().unwrap().name, "C");
}

#[test]
fn test_remove_after_cursor_keeps_cursor() {
    let mut playlist = playlist_of(&["A", "B", "C"]);
    let last = playlist.get(2).unwrap().id.clone();

    playlist.set_current(0);
    playlist.remove(&last);

    assert_eq!(playlist.current_index(), Some(0));
}

#[test]
fn test_remove_current_clears_cursor() {
    let mut playlist = playlist_of(&["A", "B"]);
    let second = playlist.get(1).unwrap().id.clone();

    playlist.set_current(1);
    playlist.remove(&second);

    assert_eq!(playlist.current_index(), None);
    assert_eq!(playlist.len(), 1);
}

#[test]
fn test_remove_unknown_id() {
    let mut playlist = playlist_of(&["A"]);
    assert!(playlist.remove(&TrackId::from("missing")).is_none());
    assert_eq!(playlist.len(), 1);
}

#[test]
fn test_set_current_out_of_range() {
    let mut playlist = playlist_of(&["A"]);
    assert!(!playlist.set_current(1));
    assert_eq!(playlist.current_index(), None);
    assert!(playlist.set_current(0));
}

#[test]
fn test_next_index() {
    let mut playlist = playlist_of(&["A", "B", "C"]);

    assert_eq!(playlist.next_index(RepeatMode::Off), Some(0));

    playlist.set_current(1);
    assert_eq!(playlist.next_index(RepeatMode::Off), Some(2));

    playlist.set_current(2);
    assert_eq!(playlist.next_index(RepeatMode::Off), None);
    assert_eq!(playlist.next_index(RepeatMode::One), None);
    assert_eq!(playlist.next_index(RepeatMode::All), Some(0));
}

#[test]
fn test_previous_index() {
    let mut playlist = playlist_of(&["A", "B", "C"]);

    playlist.set_current(2);
    assert_eq!(playlist.previous_index(RepeatMode::Off), Some(1));

    playlist.set_current(0);
    assert_eq!(playlist.previous_index(RepeatMode::Off), Some(0));
    assert_eq!(playlist.previous_index(RepeatMode::One), Some(0));
    assert_eq!(playlist.previous_index(RepeatMode::All), Some(2));

    playlist.clear_current();
    assert_eq!(playlist.previous_index(RepeatMode::All), Some(2));
    assert_eq!(playlist.previous_index(RepeatMode::Off), Some(0));
}

#[test]
fn test_navigation_on_empty_playlist() {
    let playlist = Playlist::new();
    assert_eq!(playlist.next_index(RepeatMode::All), None);
    assert_eq!(playlist.previous_index(RepeatMode::All), None);
}

#[test]
fn test_clear() {
    let mut playlist = playlist_of(&["A", "B"]);
    playlist.set_current(1);
    playlist.clear();

    assert!(playlist.is_empty());
    assert!(playlist.current().is_none());
}

#[derive(Debug, Clone)]
enum Op {
    Add,
    RemoveExisting(usize),
    RemoveMissing,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Add),
        any::<usize>().prop_map(Op::RemoveExisting),
        Just(Op::RemoveMissing),
    ]
}

proptest! {
    #[test]
    fn prop_length_tracks_adds_minus_removals(ops in prop::collection::vec(op(), 0..60)) {
        let mut playlist = Playlist::new();
        let mut expected = 0usize;

        for op in ops {
            match op {
                Op::Add => {
                    playlist.add(test_track("t"));
                    expected += 1;
                }
                Op::RemoveExisting(pick) => {
                    if !playlist.is_empty() {
                        let id = playlist.get(pick % playlist.len()).unwrap().id.clone();
                        prop_assert!(playlist.remove(&id).is_some());
                        expected -= 1;
                    }
                }
                Op::RemoveMissing => {
                    prop_assert!(playlist.remove(&TrackId::from("never-added")).is_none());
                }
            }
            prop_assert_eq!(playlist.len(), expected);
        }
    }

    #[test]
    fn prop_cursor_follows_selected_track(len in 2usize..10, selected in 0usize..10, removed in 0usize..10) {
        let mut playlist = Playlist::new();
        for i in 0..len {
            playlist.add(test_track(&format!("t{i}")));
        }
        let selected = selected % len;
        let removed = removed % len;
        prop_assume!(selected != removed);

        playlist.set_current(selected);
        let selected_id = playlist.current().unwrap().id.clone();
        let removed_id = playlist.get(removed).unwrap().id.clone();
        playlist.remove(&removed_id);

        prop_assert_eq!(&playlist.current().unwrap().id, &selected_id);
    }
}
