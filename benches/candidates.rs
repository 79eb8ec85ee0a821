//! Criterion benchmarks for candidate construction.
//!
//! Run with: cargo bench
//! Run specific group: cargo bench -- pairs

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use decay_topology_rs::common::constants::{KAON_MASS, PION_MASS};
use decay_topology_rs::{
    build_pairs, build_triplets, DecayScenario, PairHypothesis, SimpleRng, Track,
    TripletHypothesis,
};
use nalgebra::Vector3;

/// Generate a flat list of daughter tracks from repeated toy decays.
fn generate_tracks(n_decays: usize) -> Vec<Track> {
    let scenario = DecayScenario::kaon_pion(3.0);
    let mut rng = SimpleRng::new(42);

    let mut tracks = Vec::with_capacity(2 * n_decays);
    for i in 0..n_decays {
        let decay = scenario
            .generate(&mut rng, (2 * i) as u16)
            .expect("valid scenario");
        tracks.extend(decay.daughters.iter().copied());
    }
    tracks
}

fn bench_pairs(c: &mut Criterion) {
    let vertex = Vector3::zeros();
    let hypothesis = PairHypothesis {
        mass1: KAON_MASS,
        mass2: PION_MASS,
    };

    let mut group = c.benchmark_group("pairs");
    for n_tracks in [16, 64, 128] {
        let tracks = generate_tracks(n_tracks / 2);
        group.bench_with_input(
            BenchmarkId::from_parameter(n_tracks),
            &tracks,
            |b, tracks| b.iter(|| build_pairs(tracks, hypothesis, &vertex, -4.98)),
        );
    }
    group.finish();
}

fn bench_triplets(c: &mut Criterion) {
    let vertex = Vector3::zeros();
    let hypothesis = TripletHypothesis {
        mass1: PION_MASS,
        mass2: KAON_MASS,
        mass3: PION_MASS,
    };

    let mut group = c.benchmark_group("triplets");
    for n_tracks in [16, 32] {
        let tracks = generate_tracks(n_tracks / 2);
        group.bench_with_input(
            BenchmarkId::from_parameter(n_tracks),
            &tracks,
            |b, tracks| b.iter(|| build_triplets(tracks, hypothesis, &vertex, -4.98)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_pairs, bench_triplets);
criterion_main!(benches);
