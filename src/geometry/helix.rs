//! Helical trajectory in a uniform magnetic field
//!
//! The parametrization follows the usual detector convention: a circle in
//! the transverse plane of curvature `kappa`, a dip angle `lambda` out of
//! that plane, a phase giving the azimuth of the origin with respect to
//! the circle center, and a rotation sense `h = +/-1` fixed by the signs
//! of charge and field. A zero-curvature helix degenerates to a straight
//! line along its momentum direction; neutral trajectories (the cascade
//! pseudo-track) are represented this way.
//!
//! Units: centimeters, GeV/c, kilogauss (see [`crate::common::constants`]).

use std::f64::consts::{FRAC_PI_2, PI};

use nalgebra::Vector3;

use crate::common::constants::{CURVATURE_EPS, C_CURVATURE};

/// Directions closer to parallel than this (in `1 - cos^2`) fall back to
/// single-line projection in the pair closest-approach solve.
const PARALLEL_EPS: f64 = 1e-12;

/// Wrap an angle into `(-pi, pi]`.
fn wrap_angle(a: f64) -> f64 {
    let mut a = a % (2.0 * PI);
    if a <= -PI {
        a += 2.0 * PI;
    } else if a > PI {
        a -= 2.0 * PI;
    }
    a
}

/// Charged-particle trajectory: a helix, or its straight-line degenerate
/// form for zero charge or zero field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Helix {
    /// Transverse curvature, 1/cm, >= 0. Zero marks a straight line.
    curvature: f64,
    /// Dip angle of the momentum out of the transverse plane.
    dip_angle: f64,
    /// Azimuth of the origin with respect to the circle center.
    phase: f64,
    /// Current origin of the parametrization.
    origin: Vector3<f64>,
    /// Sense of rotation, +1 or -1.
    h: f64,
    /// Transverse momentum recorded at construction, GeV/c. Used to
    /// evaluate momentum on straight-line trajectories, where it cannot
    /// be recovered from curvature.
    pt: f64,
}

impl Helix {
    /// Build the helix of a particle with the given momentum at `origin`,
    /// charge sign and field (kilogauss, signed).
    ///
    /// Zero charge, zero field, or vanishing transverse momentum yield
    /// the straight-line degenerate form rather than an error.
    pub fn from_momentum(
        momentum: Vector3<f64>,
        origin: Vector3<f64>,
        charge: i8,
        field: f64,
    ) -> Self {
        let pt = momentum.x.hypot(momentum.y);
        let dip_angle = momentum.z.atan2(pt);
        let psi = momentum.y.atan2(momentum.x);

        let qb = f64::from(charge) * field;
        if charge == 0 || qb == 0.0 || pt < f64::MIN_POSITIVE {
            return Self {
                curvature: 0.0,
                dip_angle,
                phase: wrap_angle(psi - FRAC_PI_2),
                origin,
                h: 1.0,
                pt,
            };
        }

        let h = if qb > 0.0 { -1.0 } else { 1.0 };
        Self {
            curvature: C_CURVATURE * f64::from(charge.unsigned_abs()) * field.abs() / pt,
            dip_angle,
            phase: wrap_angle(psi - h * FRAC_PI_2),
            origin,
            h,
            pt,
        }
    }

    /// Straight-line trajectory through `origin` along `momentum`.
    ///
    /// Used for the closest-approach proxies and for the neutral cascade
    /// pseudo-track.
    pub fn straight_line(momentum: Vector3<f64>, origin: Vector3<f64>) -> Self {
        Self::from_momentum(momentum, origin, 0, 0.0)
    }

    /// Current origin of the parametrization.
    #[inline]
    pub fn origin(&self) -> Vector3<f64> {
        self.origin
    }

    /// Transverse curvature, 1/cm.
    #[inline]
    pub fn curvature(&self) -> f64 {
        self.curvature
    }

    /// Dip angle of the momentum out of the transverse plane.
    #[inline]
    pub fn dip_angle(&self) -> f64 {
        self.dip_angle
    }

    /// Whether this trajectory is the straight-line degenerate form.
    #[inline]
    pub fn is_straight(&self) -> bool {
        self.curvature < CURVATURE_EPS
    }

    /// Momentum azimuth at the origin.
    #[inline]
    fn psi(&self) -> f64 {
        self.phase + self.h * FRAC_PI_2
    }

    /// Unit tangent (momentum direction) at the origin.
    pub fn direction(&self) -> Vector3<f64> {
        let psi = self.psi();
        let (sin_dip, cos_dip) = self.dip_angle.sin_cos();
        Vector3::new(cos_dip * psi.cos(), cos_dip * psi.sin(), sin_dip)
    }

    /// Position at path length `s` (cm) along the trajectory.
    pub fn position_at(&self, s: f64) -> Vector3<f64> {
        let (sin_dip, cos_dip) = self.dip_angle.sin_cos();
        if self.is_straight() {
            let psi = self.psi();
            Vector3::new(
                self.origin.x + s * cos_dip * psi.cos(),
                self.origin.y + s * cos_dip * psi.sin(),
                self.origin.z + s * sin_dip,
            )
        } else {
            let turn = self.phase + self.h * s * self.curvature * cos_dip;
            Vector3::new(
                self.origin.x + (turn.cos() - self.phase.cos()) / self.curvature,
                self.origin.y + (turn.sin() - self.phase.sin()) / self.curvature,
                self.origin.z + s * sin_dip,
            )
        }
    }

    /// Momentum at path length `s`, with the field in kilogauss.
    ///
    /// The transverse momentum is recovered from curvature and field on a
    /// curved helix, and taken from the construction-time value on a
    /// straight line (constant momentum along the line).
    pub fn momentum_at(&self, s: f64, field: f64) -> Vector3<f64> {
        let (pt, psi) = if self.is_straight() {
            (self.pt, self.psi())
        } else {
            let pt = C_CURVATURE * field.abs() / self.curvature;
            let psi = self.psi() + self.h * s * self.curvature * self.dip_angle.cos();
            (pt, psi)
        };
        Vector3::new(pt * psi.cos(), pt * psi.sin(), pt * self.dip_angle.tan())
    }

    /// Momentum at the current origin, with the field in kilogauss.
    #[inline]
    pub fn momentum(&self, field: f64) -> Vector3<f64> {
        self.momentum_at(0.0, field)
    }

    /// Path length at which the trajectory is transversely closest to
    /// `point`, in closed form.
    ///
    /// On a straight line this is the exact 3D projection. On a curved
    /// helix it is the transverse-plane circle solution within one turn;
    /// the builders use it to move a daughter origin into the
    /// neighborhood of a vertex, where the approximation error is small.
    pub fn path_length_to_point(&self, point: &Vector3<f64>) -> f64 {
        if self.is_straight() {
            return (point - self.origin).dot(&self.direction());
        }
        let dx = point.x - self.origin.x;
        let dy = point.y - self.origin.y;
        let (sin_phase, cos_phase) = self.phase.sin_cos();
        let turn = (dy * cos_phase - dx * sin_phase)
            .atan2(1.0 / self.curvature + dx * cos_phase + dy * sin_phase);
        turn / (self.h * self.curvature * self.dip_angle.cos())
    }

    /// Re-express the helix with its origin moved to path length `s`.
    pub fn move_origin(&mut self, s: f64) {
        let new_origin = self.position_at(s);
        if !self.is_straight() {
            self.phase = wrap_angle(self.phase + self.h * s * self.curvature * self.dip_angle.cos());
        }
        self.origin = new_origin;
    }

    /// Closest-approach path lengths between this trajectory and `other`,
    /// both approximated as straight lines along their tangents at the
    /// current origins (exact when both are straight).
    ///
    /// Solves the 2x2 skew-line orthogonality system. Near-parallel
    /// directions fall back to projecting the other origin onto this
    /// line, so the solve never faults: for identical trajectories the
    /// fallback yields `(0, 0)`, i.e. both positions at the shared origin.
    pub fn path_lengths_with(&self, other: &Helix) -> (f64, f64) {
        let d1 = self.direction();
        let d2 = other.direction();
        let w = other.origin - self.origin;

        let b = d1.dot(&d2);
        let det = 1.0 - b * b;
        if det < PARALLEL_EPS {
            return (d1.dot(&w), 0.0);
        }
        let d = d1.dot(&w);
        let e = d2.dot(&w);
        ((d - b * e) / det, (b * d - e) / det)
    }
}
