//! Three-body decay candidate
//!
//! Generalizes the pair topology to three daughters: each pair of
//! trajectories is solved for its mutual closest approach with the same
//! straight-line method, giving the three daughter-daughter DCAs (12, 23,
//! 31). Three mutually skew lines have no common point, so the decay
//! vertex is defined as the average of the three pairwise midpoints, and
//! each daughter's momentum is evaluated at the mean of its two
//! closest-approach path lengths; both rules are invariant under daughter
//! permutation.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::common::constants::INVALID_INDEX;
use crate::geometry::{angle_between, cos_angle, FourMomentum, Helix};
use crate::track::Track;

/// A three-body decay candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripletCandidate {
    four_momentum: FourMomentum,
    pointing_angle: f64,
    decay_length: f64,
    particle1_dca: f64,
    particle2_dca: f64,
    particle3_dca: f64,
    particle1_idx: u16,
    particle2_idx: u16,
    particle3_idx: u16,
    dca_daughters_12: f64,
    dca_daughters_23: f64,
    dca_daughters_31: f64,
    cos_theta_star: f64,
    decay_vertex: Vector3<f64>,
}

impl TripletCandidate {
    /// Sentinel-invalid candidate.
    pub fn invalid() -> Self {
        Self {
            four_momentum: FourMomentum::zero(),
            pointing_angle: f64::NAN,
            decay_length: f64::NAN,
            particle1_dca: f64::NAN,
            particle2_dca: f64::NAN,
            particle3_dca: f64::NAN,
            particle1_idx: INVALID_INDEX,
            particle2_idx: INVALID_INDEX,
            particle3_idx: INVALID_INDEX,
            dca_daughters_12: f64::MAX,
            dca_daughters_23: f64::MAX,
            dca_daughters_31: f64::MAX,
            cos_theta_star: f64::NAN,
            decay_vertex: Vector3::repeat(f64::MAX),
        }
    }

    /// Build a candidate from three tracks and their mass hypotheses.
    ///
    /// Any two tracks sharing an identity invalidate the candidate before
    /// any geometry runs.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        t1: &Track,
        t2: &Track,
        t3: &Track,
        m1: f64,
        m2: f64,
        m3: f64,
        idx1: u16,
        idx2: u16,
        idx3: u16,
        vertex: &Vector3<f64>,
        field: f64,
    ) -> Self {
        if t1.id == t2.id || t2.id == t3.id || t3.id == t1.id {
            return Self::invalid();
        }

        let mut h1 = t1.helix(field);
        let mut h2 = t2.helix(field);
        let mut h3 = t3.helix(field);
        h1.move_origin(h1.path_length_to_point(vertex));
        h2.move_origin(h2.path_length_to_point(vertex));
        h3.move_origin(h3.path_length_to_point(vertex));

        let line1 = Helix::straight_line(h1.momentum(field), h1.origin());
        let line2 = Helix::straight_line(h2.momentum(field), h2.origin());
        let line3 = Helix::straight_line(h3.momentum(field), h3.origin());

        let (s1_12, s2_12) = line1.path_lengths_with(&line2);
        let (s2_23, s3_23) = line2.path_lengths_with(&line3);
        let (s3_31, s1_31) = line3.path_lengths_with(&line1);

        let p1_at_12 = line1.position_at(s1_12);
        let p2_at_12 = line2.position_at(s2_12);
        let p2_at_23 = line2.position_at(s2_23);
        let p3_at_23 = line3.position_at(s3_23);
        let p3_at_31 = line3.position_at(s3_31);
        let p1_at_31 = line1.position_at(s1_31);

        let dca_daughters_12 = (p1_at_12 - p2_at_12).norm();
        let dca_daughters_23 = (p2_at_23 - p3_at_23).norm();
        let dca_daughters_31 = (p3_at_31 - p1_at_31).norm();

        let decay_vertex = ((p1_at_12 + p2_at_12) * 0.5
            + (p2_at_23 + p3_at_23) * 0.5
            + (p3_at_31 + p1_at_31) * 0.5)
            / 3.0;

        // Each daughter takes part in two pairwise solves; its momentum
        // is evaluated at the mean of the two path lengths.
        let p1_four =
            FourMomentum::from_momentum_and_mass(h1.momentum_at(0.5 * (s1_12 + s1_31), field), m1);
        let p2_four =
            FourMomentum::from_momentum_and_mass(h2.momentum_at(0.5 * (s2_12 + s2_23), field), m2);
        let p3_four =
            FourMomentum::from_momentum_and_mass(h3.momentum_at(0.5 * (s3_23 + s3_31), field), m3);
        let four_momentum = p1_four + p2_four + p3_four;

        let p1_star = p1_four.boost(&four_momentum.reversed());
        let cos_theta_star = cos_angle(&p1_star.momentum, &four_momentum.momentum);

        let flight = decay_vertex - vertex;
        let pointing_angle = angle_between(&flight, &four_momentum.momentum);
        let decay_length = flight.norm();

        let particle1_dca = (h1.origin() - vertex).norm();
        let particle2_dca = (h2.origin() - vertex).norm();
        let particle3_dca = (h3.origin() - vertex).norm();

        Self {
            four_momentum,
            pointing_angle,
            decay_length,
            particle1_dca,
            particle2_dca,
            particle3_dca,
            particle1_idx: idx1,
            particle2_idx: idx2,
            particle3_idx: idx3,
            dca_daughters_12,
            dca_daughters_23,
            dca_daughters_31,
            cos_theta_star,
            decay_vertex,
        }
    }

    /// Whether all daughter indices are set (non-sentinel).
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.particle1_idx != INVALID_INDEX
            && self.particle2_idx != INVALID_INDEX
            && self.particle3_idx != INVALID_INDEX
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

    /// Distance from the primary vertex to the decay vertex.
    #[inline]
    pub fn decay_length(&self) -> f64 {
        self.decay_length
    }

    /// First daughter's DCA to the primary vertex.
    #[inline]
    pub fn particle1_dca(&self) -> f64 {
        self.particle1_dca
    }

    /// Second daughter's DCA to the primary vertex.
    #[inline]
    pub fn particle2_dca(&self) -> f64 {
        self.particle2_dca
    }

    /// Third daughter's DCA to the primary vertex.
    #[inline]
    pub fn particle3_dca(&self) -> f64 {
        self.particle3_dca
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

    /// Index of the third daughter track.
    #[inline]
    pub fn particle3_idx(&self) -> u16 {
        self.particle3_idx
    }

    /// Closest-approach distance between daughters 1 and 2.
    #[inline]
    pub fn dca_daughters_12(&self) -> f64 {
        self.dca_daughters_12
    }

    /// Closest-approach distance between daughters 2 and 3.
    #[inline]
    pub fn dca_daughters_23(&self) -> f64 {
        self.dca_daughters_23
    }

    /// Closest-approach distance between daughters 3 and 1.
    #[inline]
    pub fn dca_daughters_31(&self) -> f64 {
        self.dca_daughters_31
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
