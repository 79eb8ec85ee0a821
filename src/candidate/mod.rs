//! Decay-candidate builders
//!
//! Constructs two- and three-body decay candidates from input tracks and
//! mass hypotheses, and refines cascade (pair + bachelor) topologies.
//!
//! # Types
//!
//! - [`PairCandidate`] - two-body candidate
//! - [`TripletCandidate`] - three-body candidate
//! - [`Cascade`] - outer candidate plus vertex-refined inner pair
//!
//! Construction is pure and never errors: a malformed combination (shared
//! track identity, invalid inner pair) yields a candidate whose daughter
//! indices are the sentinel [`crate::common::constants::INVALID_INDEX`]
//! and whose other fields must not be interpreted.

pub mod cascade;
pub mod combinatorics;
pub mod pair;
pub mod triplet;

pub use cascade::{build_cascade, Cascade};
pub use combinatorics::{build_pairs, build_triplets, PairHypothesis, TripletHypothesis};
pub use pair::PairCandidate;
pub use triplet::TripletCandidate;
