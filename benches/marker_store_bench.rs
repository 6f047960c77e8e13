use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use goiania_marker_map::{
    AppController, AppIntent, AppState, GeoPosition, IconGlyph, MapOptions, MarkerRecord,
    MarkerStore, MemoryKeyValueStore, TransportType,
};
use std::hint::black_box;

fn build_synthetic_store(marker_count: usize) -> MarkerStore {
    let mut store = MarkerStore::new();

    for index in 0..marker_count {
        let column = (index % 100) as f64;
        let row = (index / 100) as f64;
        let glyph = if index % 2 == 0 {
            IconGlyph::Cross
        } else {
            IconGlyph::Dot
        };
        store.push(MarkerRecord::new(
            GeoPosition::new(-16.75 + row * 0.001, -49.30 + column * 0.001),
            TransportType::ALL[index % TransportType::ALL.len()],
            glyph,
            Some(format!("Parada {}", index)),
            None,
        ));
    }

    store
}

fn bench_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("marker_store_json");

    for &marker_count in &[1_000usize, 10_000usize] {
        let store = build_synthetic_store(marker_count);
        let payload = store.to_json().expect("Serialisierung fehlgeschlagen");

        group.bench_with_input(
            BenchmarkId::new("to_json", marker_count),
            &store,
            |b, store| {
                b.iter(|| {
                    let json = store.to_json().expect("Serialisierung fehlgeschlagen");
                    black_box(json.len())
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("from_json", marker_count),
            &payload,
            |b, payload| {
                b.iter(|| {
                    let store =
                        MarkerStore::from_json(black_box(payload)).expect("Parsing fehlgeschlagen");
                    black_box(store.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_restore(c: &mut Criterion) {
    let payload = build_synthetic_store(10_000)
        .to_json()
        .expect("Serialisierung fehlgeschlagen");

    c.bench_function("restore_10k_markers", |b| {
        b.iter(|| {
            let storage = MemoryKeyValueStore::with_entry("goiania_map_markers", payload.clone());
            let mut state = AppState::with_storage(MapOptions::default(), Box::new(storage));
            let mut controller = AppController::new();
            controller
                .handle_intent(&mut state, AppIntent::StartupRequested)
                .expect("Restore fehlgeschlagen");
            black_box(state.view.glyphs.len())
        })
    });
}

criterion_group!(marker_benches, bench_serialization, bench_restore);
criterion_main!(marker_benches);
