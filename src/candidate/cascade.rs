//! Cascade (two-stage decay) reconstruction
//!
//! An already-built pair becomes one leg of a higher-level two-body
//! combination with a bachelor track. The pair is treated as a neutral
//! pseudo-trajectory: a straight line through its stored decay vertex
//! along its combined momentum. Once the outer vertex is known, the inner
//! pair's vertex-dependent observables are refined against it.
//!
//! The builder takes the inner pair by value and returns both finalized
//! candidates, so no stored copy of the inner pair can be observed in its
//! pre-refinement state.

use nalgebra::Vector3;

use crate::candidate::pair::{pair_topology, PairCandidate};
use crate::geometry::Helix;
use crate::track::Track;

/// Result of a cascade construction: the outer candidate and the
/// vertex-refined inner pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cascade {
    /// Outer (bachelor + pseudo-trajectory) candidate.
    pub outer: PairCandidate,
    /// Inner pair with pointing angle, decay length and daughter DCAs
    /// refined against the outer decay vertex.
    pub inner: PairCandidate,
}

/// Build a cascade candidate from a bachelor track and an inner pair.
///
/// `inner_d1`/`inner_d2` are the tracks the inner pair was built from;
/// they are needed to re-measure the inner daughters' DCAs against the
/// outer vertex. `inner_mass` is the mass hypothesis assigned to the
/// pseudo-trajectory leg.
///
/// The combination is rejected (outer sentinel-invalid, inner returned
/// untouched) when the inner pair is itself invalid or when the bachelor
/// reuses a track already consumed by the inner pair.
#[allow(clippy::too_many_arguments)]
pub fn build_cascade(
    bachelor: &Track,
    inner: PairCandidate,
    inner_d1: &Track,
    inner_d2: &Track,
    bachelor_mass: f64,
    inner_mass: f64,
    bachelor_idx: u16,
    inner_idx: u16,
    vertex: &Vector3<f64>,
    field: f64,
) -> Cascade {
    if !inner.is_valid()
        || bachelor.id == inner.particle1_idx()
        || bachelor.id == inner.particle2_idx()
    {
        return Cascade {
            outer: PairCandidate::invalid(),
            inner,
        };
    }

    let h1 = bachelor.helix(field);
    // The pair has no independent curved representation; it propagates as
    // a neutral straight line carrying its combined momentum.
    let h2 = Helix::straight_line(inner.momentum(), inner.decay_vertex());

    let outer = pair_topology(
        h1,
        h2,
        bachelor_mass,
        inner_mass,
        bachelor_idx,
        inner_idx,
        vertex,
        field,
    );

    let mut inner = inner;
    inner.update_vertex(inner_d1, inner_d2, &outer.decay_vertex(), field);

    Cascade { outer, inner }
}
