/*!
# decay-topology-rs - Decay-candidate reconstruction

Reconstructs candidate decay four-vectors from pairs and triplets of
charged-particle trajectories (helices in a uniform magnetic field) and
computes the vertex-topology observables used to separate real decays
from combinatorial background.

## Features

- Helix geometry kernel: trajectory evaluation, origin moves, closed-form
  closest-approach solves
- Pair and triplet candidate builders with the straight-line DCA method
- Cascade construction with back-propagated refinement of the inner pair
- Per-event candidate store with allocation reuse
- Deterministic toy-decay generation for tests and benchmarks

## Modules

- [`geometry`] - helix and four-momentum kernel
- [`candidate`] - pair/triplet/cascade builders and combinatorics
- [`event`] - per-event candidate store
- [`sim`] - reproducible toy-decay scenarios
- [`common`] - constants and deterministic RNG

## Example

```rust
use decay_topology_rs::{PairCandidate, Track};
use nalgebra::Vector3;

// Two opposite-sign tracks from a displaced vertex, field in kilogauss.
let t1 = Track::new(0, 1, Vector3::new(0.0, 0.0, 1.0), Vector3::new(0.8, 0.1, 0.2));
let t2 = Track::new(1, -1, Vector3::new(0.0, 0.0, 1.0), Vector3::new(-0.5, 0.3, 0.1));
let primary_vertex = Vector3::zeros();

let pair = PairCandidate::new(&t1, &t2, 0.1396, 0.1396, 0, 1, &primary_vertex, -4.98);
assert!(pair.is_valid());
assert!(pair.four_momentum().energy >= pair.four_momentum().p());
```

Candidate construction never errors: malformed combinations come back
sentinel-invalid (check [`PairCandidate::is_valid`]) and degenerate
geometry propagates as NaN fields, keeping the per-combination hot path
fault-free.
*/

// ============================================================================
// Core modules
// ============================================================================

/// Candidate builders: pair, triplet, cascade, per-event combinatorics
pub mod candidate;

/// Low-level utilities (constants, deterministic RNG)
pub mod common;

/// Per-event candidate store
pub mod event;

/// Helix geometry and four-momentum kernel
pub mod geometry;

/// Deterministic toy-decay generation
pub mod sim;

/// Input trajectory record
pub mod track;

// ============================================================================
// Re-exports for convenience
// ============================================================================

// Core types
pub use candidate::{Cascade, PairCandidate, PairHypothesis, TripletCandidate, TripletHypothesis};
pub use event::CandidateEvent;
pub use geometry::{FourMomentum, Helix};
pub use track::Track;

// Builders
pub use candidate::{build_cascade, build_pairs, build_triplets};

// Simulation
pub use sim::{DecayScenario, ScenarioError, ToyDecay};

// Constants and utilities
pub use common::constants::INVALID_INDEX;
pub use common::SimpleRng;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
