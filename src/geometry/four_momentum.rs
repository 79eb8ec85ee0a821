//! Energy-momentum four-vector
//!
//! Minimal four-vector support for candidate kinematics: mass-hypothesis
//! construction, addition, derived observables, and the Lorentz boost
//! used for the decay-frame polar angle.

use std::ops::Add;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Energy-momentum four-vector (GeV).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FourMomentum {
    /// Spatial momentum, GeV/c.
    pub momentum: Vector3<f64>,
    /// Energy, GeV.
    pub energy: f64,
}

impl FourMomentum {
    /// Four-vector with the given momentum and energy.
    pub fn new(momentum: Vector3<f64>, energy: f64) -> Self {
        Self { momentum, energy }
    }

    /// On-shell four-vector from a 3-momentum and a mass hypothesis:
    /// `E = sqrt(|p|^2 + m^2)`.
    ///
    /// A non-finite momentum propagates to a NaN energy rather than
    /// faulting.
    pub fn from_momentum_and_mass(momentum: Vector3<f64>, mass: f64) -> Self {
        Self {
            momentum,
            energy: (momentum.norm_squared() + mass * mass).sqrt(),
        }
    }

    /// Zero four-vector.
    pub fn zero() -> Self {
        Self {
            momentum: Vector3::zeros(),
            energy: 0.0,
        }
    }

    /// Invariant mass squared, `E^2 - |p|^2`.
    #[inline]
    pub fn m2(&self) -> f64 {
        self.energy * self.energy - self.momentum.norm_squared()
    }

    /// Invariant mass; negative square root of `-m2` for spacelike
    /// vectors (the usual signed convention).
    pub fn m(&self) -> f64 {
        let m2 = self.m2();
        if m2 >= 0.0 {
            m2.sqrt()
        } else {
            -(-m2).sqrt()
        }
    }

    /// Magnitude of the spatial momentum.
    #[inline]
    pub fn p(&self) -> f64 {
        self.momentum.norm()
    }

    /// Transverse momentum.
    #[inline]
    pub fn pt(&self) -> f64 {
        self.momentum.x.hypot(self.momentum.y)
    }

    /// Pseudorapidity. Infinite along the beam axis.
    pub fn eta(&self) -> f64 {
        (self.momentum.z / self.pt()).asinh()
    }

    /// Azimuthal angle of the spatial momentum.
    pub fn phi(&self) -> f64 {
        self.momentum.y.atan2(self.momentum.x)
    }

    /// Same energy, reversed spatial momentum.
    ///
    /// Boosting by the reversed four-vector of a system takes a daughter
    /// into that system's rest frame.
    pub fn reversed(&self) -> Self {
        Self {
            momentum: -self.momentum,
            energy: self.energy,
        }
    }

    /// Lorentz boost by the velocity of `frame`, `beta = p/E`.
    ///
    /// A lightlike or spacelike `frame` (|beta| >= 1) yields NaN
    /// components, which propagate as data rather than faulting.
    pub fn boost(&self, frame: &FourMomentum) -> Self {
        let beta = frame.momentum / frame.energy;
        let b2 = beta.norm_squared();
        let gamma = 1.0 / (1.0 - b2).sqrt();
        let bp = beta.dot(&self.momentum);
        let coeff = if b2 > 0.0 {
            (gamma - 1.0) * bp / b2 + gamma * self.energy
        } else {
            gamma * self.energy
        };
        Self {
            momentum: self.momentum + beta * coeff,
            energy: gamma * (self.energy + bp),
        }
    }
}

impl Add for FourMomentum {
    type Output = FourMomentum;

    fn add(self, rhs: FourMomentum) -> FourMomentum {
        FourMomentum {
            momentum: self.momentum + rhs.momentum,
            energy: self.energy + rhs.energy,
        }
    }
}
