//! Input trajectory record
//!
//! Tracks are produced by an external event-ingestion stage and are
//! read-only inside this crate. A track carries its event-array index as
//! its identity; candidates store and compare exactly this value.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::geometry::Helix;

/// A fitted charged-particle track, as supplied per event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Index of the track in the event's track array; stable identity.
    pub id: u16,
    /// Charge sign in units of e.
    pub charge: i8,
    /// Reference origin of the fitted trajectory, cm.
    pub origin: Vector3<f64>,
    /// Momentum at the origin, GeV/c.
    pub momentum: Vector3<f64>,
}

impl Track {
    /// Create a track record.
    pub fn new(id: u16, charge: i8, origin: Vector3<f64>, momentum: Vector3<f64>) -> Self {
        Self {
            id,
            charge,
            origin,
            momentum,
        }
    }

    /// Helical trajectory of this track in the given field (kilogauss).
    pub fn helix(&self, field: f64) -> Helix {
        Helix::from_momentum(self.momentum, self.origin, self.charge, field)
    }
}
