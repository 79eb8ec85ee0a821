//! Per-event combinatorial fan-out
//!
//! Builds candidates for every distinct track combination of an event.
//! Construction of different combinations is independent: each invocation
//! reads shared immutable track data and writes only its own output, so
//! with the `rayon` feature the fan-out runs on a parallel iterator and
//! produces results identical to the serial path, in the same order.

use nalgebra::Vector3;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::candidate::{PairCandidate, TripletCandidate};
use crate::track::Track;

/// Mass hypotheses for the two daughter roles of a pair combination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairHypothesis {
    /// Mass assigned to the first daughter, GeV/c^2.
    pub mass1: f64,
    /// Mass assigned to the second daughter, GeV/c^2.
    pub mass2: f64,
}

/// Mass hypotheses for the three daughter roles of a triplet combination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripletHypothesis {
    /// Mass assigned to the first daughter, GeV/c^2.
    pub mass1: f64,
    /// Mass assigned to the second daughter, GeV/c^2.
    pub mass2: f64,
    /// Mass assigned to the third daughter, GeV/c^2.
    pub mass3: f64,
}

/// Build pair candidates for all unordered distinct track pairs.
///
/// Daughter indices are the tracks' own ids. The output order is the
/// lexicographic (i, j) order of the input slice, independent of the
/// `rayon` feature.
pub fn build_pairs(
    tracks: &[Track],
    hypothesis: PairHypothesis,
    vertex: &Vector3<f64>,
    field: f64,
) -> Vec<PairCandidate> {
    let build = |i: usize| -> Vec<PairCandidate> {
        let t1 = &tracks[i];
        tracks[i + 1..]
            .iter()
            .map(|t2| {
                PairCandidate::new(
                    t1,
                    t2,
                    hypothesis.mass1,
                    hypothesis.mass2,
                    t1.id,
                    t2.id,
                    vertex,
                    field,
                )
            })
            .collect()
    };

    #[cfg(feature = "rayon")]
    {
        (0..tracks.len())
            .into_par_iter()
            .flat_map_iter(build)
            .collect()
    }
    #[cfg(not(feature = "rayon"))]
    {
        (0..tracks.len()).flat_map(build).collect()
    }
}

/// Build triplet candidates for all unordered distinct track triples.
///
/// Output order is the lexicographic (i, j, k) order of the input slice,
/// independent of the `rayon` feature.
pub fn build_triplets(
    tracks: &[Track],
    hypothesis: TripletHypothesis,
    vertex: &Vector3<f64>,
    field: f64,
) -> Vec<TripletCandidate> {
    let build = |i: usize| -> Vec<TripletCandidate> {
        let t1 = &tracks[i];
        let mut out = Vec::new();
        for (dj, t2) in tracks[i + 1..].iter().enumerate() {
            for t3 in &tracks[i + 1 + dj + 1..] {
                out.push(TripletCandidate::new(
                    t1,
                    t2,
                    t3,
                    hypothesis.mass1,
                    hypothesis.mass2,
                    hypothesis.mass3,
                    t1.id,
                    t2.id,
                    t3.id,
                    vertex,
                    field,
                ));
            }
        }
        out
    };

    #[cfg(feature = "rayon")]
    {
        (0..tracks.len())
            .into_par_iter()
            .flat_map_iter(build)
            .collect()
    }
    #[cfg(not(feature = "rayon"))]
    {
        (0..tracks.len()).flat_map(build).collect()
    }
}
