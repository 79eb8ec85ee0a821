//! Deterministic toy-decay generation
//!
//! Produces synthetic two-body decays for tests and benchmarks: a parent
//! of known mass and momentum decays isotropically in its rest frame, the
//! daughters are boosted to the lab and emitted as [`Track`] records
//! originating at the decay point. All randomness comes from the seeded
//! [`SimpleRng`], so every scenario is reproducible bit-for-bit.
//!
//! Scenario validation is the only fallible surface of the crate; the
//! candidate builders themselves never error.

use std::fmt;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::common::constants::{KAON_MASS, PION_MASS};
use crate::common::SimpleRng;
use crate::geometry::FourMomentum;
use crate::track::Track;

/// D0 meson mass, GeV/c^2; default parent for the kaon-pion preset.
const D0_MASS: f64 = 1.864_84;

/// Errors from an inconsistent decay scenario.
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioError {
    /// A mass is negative or non-finite.
    InvalidMass {
        /// Which mass field was rejected.
        context: &'static str,
        /// The offending value.
        value: f64,
    },

    /// The parent is lighter than the summed daughter masses.
    BelowThreshold {
        /// Parent mass.
        parent: f64,
        /// Sum of daughter masses.
        daughters: f64,
    },

    /// The magnetic field is zero or non-finite.
    InvalidField {
        /// The offending value.
        value: f64,
    },

    /// The parent momentum or decay length is negative or non-finite.
    InvalidKinematics {
        /// Which field was rejected.
        context: &'static str,
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::InvalidMass { context, value } => {
                write!(f, "invalid {}: {}", context, value)
            }
            ScenarioError::BelowThreshold { parent, daughters } => {
                write!(
                    f,
                    "parent mass {} below daughter threshold {}",
                    parent, daughters
                )
            }
            ScenarioError::InvalidField { value } => {
                write!(f, "invalid magnetic field: {}", value)
            }
            ScenarioError::InvalidKinematics { context, value } => {
                write!(f, "invalid {}: {}", context, value)
            }
        }
    }
}

impl std::error::Error for ScenarioError {}

/// Configuration of a two-body toy-decay scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayScenario {
    /// Parent rest mass, GeV/c^2.
    pub parent_mass: f64,
    /// Daughter rest masses, GeV/c^2.
    pub daughter_masses: (f64, f64),
    /// Daughter charge signs; a two-body decay of a neutral parent pairs
    /// opposite signs.
    pub daughter_charges: (i8, i8),
    /// Parent momentum magnitude in the lab, GeV/c.
    pub parent_momentum: f64,
    /// Flight distance from the primary vertex to the decay point, cm.
    pub decay_length: f64,
    /// Primary vertex position, cm.
    pub primary_vertex: Vector3<f64>,
    /// Magnetic field, kilogauss (signed).
    pub field: f64,
}

impl DecayScenario {
    /// D0 -> K- pi+ topology preset at the given parent momentum.
    pub fn kaon_pion(parent_momentum: f64) -> Self {
        Self {
            parent_mass: D0_MASS,
            daughter_masses: (KAON_MASS, PION_MASS),
            daughter_charges: (-1, 1),
            parent_momentum,
            decay_length: 0.012,
            primary_vertex: Vector3::zeros(),
            field: -4.98,
        }
    }

    /// Check the scenario for physical consistency.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        let masses = [
            ("parent mass", self.parent_mass),
            ("first daughter mass", self.daughter_masses.0),
            ("second daughter mass", self.daughter_masses.1),
        ];
        for (context, value) in masses {
            if !value.is_finite() || value < 0.0 {
                return Err(ScenarioError::InvalidMass { context, value });
            }
        }
        let threshold = self.daughter_masses.0 + self.daughter_masses.1;
        if self.parent_mass < threshold {
            return Err(ScenarioError::BelowThreshold {
                parent: self.parent_mass,
                daughters: threshold,
            });
        }
        if !self.field.is_finite() || self.field == 0.0 {
            return Err(ScenarioError::InvalidField { value: self.field });
        }
        let kinematics = [
            ("parent momentum", self.parent_momentum),
            ("decay length", self.decay_length),
        ];
        for (context, value) in kinematics {
            if !value.is_finite() || value < 0.0 {
                return Err(ScenarioError::InvalidKinematics { context, value });
            }
        }
        Ok(())
    }

    /// Daughter momentum magnitude in the parent rest frame.
    pub fn breakup_momentum(&self) -> f64 {
        let m = self.parent_mass;
        let (m1, m2) = self.daughter_masses;
        let sum = m1 + m2;
        let diff = m1 - m2;
        ((m * m - sum * sum) * (m * m - diff * diff)).sqrt() / (2.0 * m)
    }

    /// Generate one decay.
    ///
    /// The parent direction and the rest-frame decay axis are drawn
    /// isotropically from `rng`. Daughter tracks get ids `first_id` and
    /// `first_id + 1`.
    pub fn generate(&self, rng: &mut SimpleRng, first_id: u16) -> Result<ToyDecay, ScenarioError> {
        self.validate()?;

        let parent_dir = random_unit_vector(rng);
        let parent = FourMomentum::from_momentum_and_mass(
            parent_dir * self.parent_momentum,
            self.parent_mass,
        );

        let p_star = self.breakup_momentum() * random_unit_vector(rng);
        let d1_star = FourMomentum::from_momentum_and_mass(p_star, self.daughter_masses.0);
        let d2_star = FourMomentum::from_momentum_and_mass(-p_star, self.daughter_masses.1);

        // Boost from the parent rest frame into the lab.
        let d1 = d1_star.boost(&parent);
        let d2 = d2_star.boost(&parent);

        let decay_point = self.primary_vertex + parent_dir * self.decay_length;

        let mut daughters: SmallVec<[Track; 4]> = SmallVec::new();
        daughters.push(Track::new(
            first_id,
            self.daughter_charges.0,
            decay_point,
            d1.momentum,
        ));
        daughters.push(Track::new(
            first_id + 1,
            self.daughter_charges.1,
            decay_point,
            d2.momentum,
        ));

        Ok(ToyDecay {
            parent,
            decay_point,
            daughters,
        })
    }
}

/// One generated decay: the parent kinematics and the emitted tracks.
#[derive(Debug, Clone)]
pub struct ToyDecay {
    /// Lab-frame parent four-momentum.
    pub parent: FourMomentum,
    /// True decay-vertex position, cm.
    pub decay_point: Vector3<f64>,
    /// Daughter tracks originating at the decay point.
    pub daughters: SmallVec<[Track; 4]>,
}

/// Isotropic unit vector.
fn random_unit_vector(rng: &mut SimpleRng) -> Vector3<f64> {
    let cos_theta = rng.cos_theta();
    let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();
    let phi = rng.phi();
    Vector3::new(sin_theta * phi.cos(), sin_theta * phi.sin(), cos_theta)
}
