//! Helix geometry kernel
//!
//! Trajectory evaluation and closest-approach queries used by the
//! candidate builders.
//!
//! # Types
//!
//! - [`Helix`] - charged-particle trajectory in a uniform field
//! - [`FourMomentum`] - energy-momentum four-vector
//!
//! The kernel sits on the per-event, per-combination hot path and never
//! returns errors: degenerate inputs produce well-defined fallback values
//! or NaN that propagates through the pure arithmetic.

pub mod four_momentum;
pub mod helix;

pub use four_momentum::FourMomentum;
pub use helix::Helix;

use nalgebra::Vector3;

/// Angle between two vectors in radians.
///
/// Returns NaN when either vector has zero length (the angle is
/// undefined), which downstream observables tolerate by design.
pub fn angle_between(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    cos_angle(a, b).acos()
}

/// Cosine of the angle between two vectors, clamped to `[-1, 1]`.
///
/// NaN when either vector has zero length.
pub fn cos_angle(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    let norms = a.norm() * b.norm();
    if norms == 0.0 {
        return f64::NAN;
    }
    (a.dot(b) / norms).clamp(-1.0, 1.0)
}
