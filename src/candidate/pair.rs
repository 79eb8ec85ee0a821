//! Two-body decay candidate
//!
//! Reconstruction follows the straight-line DCA method: both daughter
//! helices are moved to the neighborhood of the primary vertex, their
//! mutual closest approach is solved on straight-line proxies, and the
//! combined kinematics are evaluated from the curved-helix momenta at the
//! closest-approach path lengths.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::common::constants::INVALID_INDEX;
use crate::geometry::{angle_between, cos_angle, FourMomentum, Helix};
use crate::track::Track;

/// A two-body decay candidate.
///
/// Also serves as the outer candidate of a cascade, where the second
/// daughter is a neutral pseudo-trajectory derived from an inner pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairCandidate {
    four_momentum: FourMomentum,
    pointing_angle: f64,
    decay_length: f64,
    particle1_dca: f64,
    particle2_dca: f64,
    particle1_idx: u16,
    particle2_idx: u16,
    dca_daughters: f64,
    cos_theta_star: f64,
    decay_vertex: Vector3<f64>,
}

impl PairCandidate {
    /// Sentinel-invalid candidate: indices at the sentinel, geometric
    /// fields NaN or at their initialization extremes.
    pub fn invalid() -> Self {
        Self {
            four_momentum: FourMomentum::zero(),
            pointing_angle: f64::NAN,
            decay_length: f64::NAN,
            particle1_dca: f64::NAN,
            particle2_dca: f64::NAN,
            particle1_idx: INVALID_INDEX,
            particle2_idx: INVALID_INDEX,
            dca_daughters: f64::MAX,
            cos_theta_star: f64::NAN,
            decay_vertex: Vector3::repeat(f64::MAX),
        }
    }

    /// Build a candidate from two tracks and their mass hypotheses.
    ///
    /// `idx1`/`idx2` are the daughter indices recorded on the candidate.
    /// If the two tracks share an identity the candidate is returned
    /// sentinel-invalid without touching the geometry; this is the single
    /// validity guard of the constructor.
    ///
    /// `vertex` is the primary vertex (cm) and `field` the magnetic field
    /// in kilogauss. The per-daughter DCA fields are measured against the
    /// primary vertex and are first-pass estimates when the pair later
    /// becomes the inner leg of a cascade.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        t1: &Track,
        t2: &Track,
        m1: f64,
        m2: f64,
        idx1: u16,
        idx2: u16,
        vertex: &Vector3<f64>,
        field: f64,
    ) -> Self {
        if t1.id == t2.id {
            return Self::invalid();
        }

        let h1 = t1.helix(field);
        let h2 = t2.helix(field);
        pair_topology(h1, h2, m1, m2, idx1, idx2, vertex, field)
    }

    /// Refine vertex-dependent observables against an outer decay vertex.
    ///
    /// Overwrites pointing angle and decay length using
    /// `(decayVertex - outerVertex)` and recomputes both daughter DCAs
    /// relative to the outer vertex (each daughter helix is moved to its
    /// closest path length first). Pure recomputation: repeated calls
    /// with the same vertex produce identical fields.
    pub fn update_vertex(&mut self, d1: &Track, d2: &Track, outer: &Vector3<f64>, field: f64) {
        let flight = self.decay_vertex - outer;
        self.pointing_angle = angle_between(&flight, &self.four_momentum.momentum);
        self.decay_length = flight.norm();

        let mut h1 = d1.helix(field);
        let mut h2 = d2.helix(field);
        h1.move_origin(h1.path_length_to_point(outer));
        h2.move_origin(h2.path_length_to_point(outer));

        self.particle1_dca = (h1.origin() - outer).norm();
        self.particle2_dca = (h2.origin() - outer).norm();
    }

    /// Whether both daughter indices are set (non-sentinel).
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.particle1_idx != INVALID_INDEX && self.particle2_idx != INVALID_INDEX
    }

    /// Combined four-momentum under the construction mass hypotheses.
    #[inline]
    pub fn four_momentum(&self) -> &FourMomentum {
        &self.four_momentum
    }

    /// Combined 3-momentum.
    #[inline]
    pub fn momentum(&self) -> Vector3<f64> {
        self.four_momentum.momentum
    }

    /// Invariant mass.
    #[inline]
    pub fn m(&self) -> f64 {
        self.four_momentum.m()
    }

    /// Transverse momentum.
    #[inline]
    pub fn pt(&self) -> f64 {
        self.four_momentum.pt()
    }

    /// Pseudorapidity.
    #[inline]
    pub fn eta(&self) -> f64 {
        self.four_momentum.eta()
    }

    /// Azimuthal angle.
    #[inline]
    pub fn phi(&self) -> f64 {
        self.four_momentum.phi()
    }

    /// Angle between the flight vector and the candidate momentum.
    #[inline]
    pub fn pointing_angle(&self) -> f64 {
        self.pointing_angle
    }

    /// Distance from the reference vertex to the decay vertex.
    #[inline]
    pub fn decay_length(&self) -> f64 {
        self.decay_length
    }

    /// First daughter's DCA to the reference vertex.
    #[inline]
    pub fn particle1_dca(&self) -> f64 {
        self.particle1_dca
    }

    /// Second daughter's DCA to the reference vertex.
    #[inline]
    pub fn particle2_dca(&self) -> f64 {
        self.particle2_dca
    }

    /// Index of the first daughter track.
    #[inline]
    pub fn particle1_idx(&self) -> u16 {
        self.particle1_idx
    }

    /// Index of the second daughter track.
    #[inline]
    pub fn particle2_idx(&self) -> u16 {
        self.particle2_idx
    }

    /// Daughter-daughter distance at their mutual closest approach.
    #[inline]
    pub fn dca_daughters(&self) -> f64 {
        self.dca_daughters
    }

    /// Cosine of the first daughter's decay-frame polar angle relative to
    /// the candidate flight direction.
    #[inline]
    pub fn cos_theta_star(&self) -> f64 {
        self.cos_theta_star
    }

    /// Reconstructed decay-vertex position.
    #[inline]
    pub fn decay_vertex(&self) -> Vector3<f64> {
        self.decay_vertex
    }
}

/// Shared two-leg topology reconstruction.
///
/// Used by [`PairCandidate::new`] with two charged helices and by the
/// cascade builder with a charged helix plus a neutral straight-line
/// pseudo-trajectory. Callers have already applied their validity guards.
#[allow(clippy::too_many_arguments)]
pub(crate) fn pair_topology(
    mut h1: Helix,
    mut h2: Helix,
    m1: f64,
    m2: f64,
    idx1: u16,
    idx2: u16,
    vertex: &Vector3<f64>,
    field: f64,
) -> PairCandidate {
    // Move both origins to the neighborhood of the primary vertex; the
    // straight-line approximation below is only good locally.
    h1.move_origin(h1.path_length_to_point(vertex));
    h2.move_origin(h2.path_length_to_point(vertex));

    // Straight-line proxies along the momenta at the moved origins.
    let line1 = Helix::straight_line(h1.momentum(field), h1.origin());
    let line2 = Helix::straight_line(h2.momentum(field), h2.origin());

    let (s1, s2) = line1.path_lengths_with(&line2);
    let p1_at_dca = line1.position_at(s1);
    let p2_at_dca = line2.position_at(s2);

    let dca_daughters = (p1_at_dca - p2_at_dca).norm();

    // Kinematics come from the curved helices at the closest-approach
    // path lengths; curvature matters for the momentum even though the
    // vertex solve is linear.
    let p1_four = FourMomentum::from_momentum_and_mass(h1.momentum_at(s1, field), m1);
    let p2_four = FourMomentum::from_momentum_and_mass(h2.momentum_at(s2, field), m2);
    let four_momentum = p1_four + p2_four;

    let p1_star = p1_four.boost(&four_momentum.reversed());
    let cos_theta_star = cos_angle(&p1_star.momentum, &four_momentum.momentum);

    let decay_vertex = (p1_at_dca + p2_at_dca) * 0.5;

    let flight = decay_vertex - vertex;
    let pointing_angle = angle_between(&flight, &four_momentum.momentum);
    let decay_length = flight.norm();

    // DCA of each daughter to the primary vertex, measured at the moved
    // origin; a rough estimate that update_vertex supersedes in the
    // cascade case.
    let particle1_dca = (h1.origin() - vertex).norm();
    let particle2_dca = (h2.origin() - vertex).norm();

    PairCandidate {
        four_momentum,
        pointing_angle,
        decay_length,
        particle1_dca,
        particle2_dca,
        particle1_idx: idx1,
        particle2_idx: idx2,
        dca_daughters,
        cos_theta_star,
        decay_vertex,
    }
}
