//! Per-event candidate store
//!
//! Aggregates accepted candidates for one processed event. Storage is
//! reused across events: [`CandidateEvent::clear`] empties the
//! collections without releasing their allocations, so a long event loop
//! settles into a steady state with no per-event reallocation.

use serde::{Deserialize, Serialize};

use crate::candidate::{PairCandidate, TripletCandidate};

/// Ordered per-event collections of reconstructed candidates.
///
/// Primary pairs, primary triplets and secondary (cascade-refined) pairs
/// are kept in separate collections, matching the three storage modes of
/// the analysis chain this feeds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateEvent {
    run_id: i32,
    event_id: i32,
    pairs: Vec<PairCandidate>,
    triplets: Vec<TripletCandidate>,
    secondary_pairs: Vec<PairCandidate>,
}

impl CandidateEvent {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the identifiers of the event being processed.
    pub fn set_event_info(&mut self, run_id: i32, event_id: i32) {
        self.run_id = run_id;
        self.event_id = event_id;
    }

    /// Run identifier of the current event.
    #[inline]
    pub fn run_id(&self) -> i32 {
        self.run_id
    }

    /// Event identifier of the current event.
    #[inline]
    pub fn event_id(&self) -> i32 {
        self.event_id
    }

    /// Append a primary pair candidate.
    pub fn add_pair(&mut self, candidate: PairCandidate) {
        self.pairs.push(candidate);
    }

    /// Append a primary triplet candidate.
    pub fn add_triplet(&mut self, candidate: TripletCandidate) {
        self.triplets.push(candidate);
    }

    /// Append a secondary (cascade inner) pair candidate.
    pub fn add_secondary_pair(&mut self, candidate: PairCandidate) {
        self.secondary_pairs.push(candidate);
    }

    /// Number of stored primary pairs.
    #[inline]
    pub fn n_pairs(&self) -> usize {
        self.pairs.len()
    }

    /// Number of stored primary triplets.
    #[inline]
    pub fn n_triplets(&self) -> usize {
        self.triplets.len()
    }

    /// Number of stored secondary pairs.
    #[inline]
    pub fn n_secondary_pairs(&self) -> usize {
        self.secondary_pairs.len()
    }

    /// Stored primary pairs, in append order.
    #[inline]
    pub fn pairs(&self) -> &[PairCandidate] {
        &self.pairs
    }

    /// Stored primary triplets, in append order.
    #[inline]
    pub fn triplets(&self) -> &[TripletCandidate] {
        &self.triplets
    }

    /// Stored secondary pairs, in append order.
    #[inline]
    pub fn secondary_pairs(&self) -> &[PairCandidate] {
        &self.secondary_pairs
    }

    /// Empty the store for the next event, keeping allocations.
    pub fn clear(&mut self) {
        self.run_id = 0;
        self.event_id = 0;
        self.pairs.clear();
        self.triplets.clear();
        self.secondary_pairs.clear();
    }
}
