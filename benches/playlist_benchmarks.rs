use criterion::{Criterion, black_box, criterion_group, criterion_main};
use focus_playlist::control::Playlist;
use focus_playlist::storage::{MemoryStore, PlaylistStore};
use focus_playlist::{RepeatMode, Track};

fn sample_tracks(count: usize) -> Vec<Track> {
    (0..count)
        .map(|i| Track::from_path(format!("track-{i}.mp3"), format!("/music/track-{i}.mp3")))
        .collect()
}

fn benchmark_persistence(c: &mut Criterion) {
    let tracks = sample_tracks(500);

    c.bench_function("save_playlist_500", |b| {
        let mut store = PlaylistStore::new(MemoryStore::new(), "p", "m");
        b.iter(|| store.save(black_box(&tracks)));
    });

    let mut store = PlaylistStore::new(MemoryStore::new(), "p", "m");
    store.save(&tracks);
    c.bench_function("load_playlist_500", |b| {
        b.iter(|| black_box(store.load()));
    });

    // Quota forces the metadata-only fallback on every save
    c.bench_function("save_playlist_500_fallback", |b| {
        let mut store = PlaylistStore::new(MemoryStore::with_quota(50_000), "p", "m");
        b.iter(|| store.save(black_box(&tracks)));
    });
}

fn benchmark_navigation(c: &mut Criterion) {
    let mut playlist = Playlist::from_tracks(sample_tracks(1000));
    playlist.set_current(0);

    c.bench_function("next_index_repeat_all", |b| {
        b.iter(|| {
            let next = playlist.next_index(black_box(RepeatMode::All));
            if let Some(index) = next {
                playlist.set_current(index);
            }
        });
    });

    c.bench_function("previous_index_repeat_all", |b| {
        b.iter(|| {
            let previous = playlist.previous_index(black_box(RepeatMode::All));
            if let Some(index) = previous {
                playlist.set_current(index);
            }
        });
    });
}

criterion_group!(benches, benchmark_persistence, benchmark_navigation);
criterion_main!(benches);
