//! Unit conventions and shared constants
//!
//! The whole crate runs on one unit convention: lengths in centimeters,
//! momenta in GeV/c, magnetic field in kilogauss. Every
//! momentum-from-curvature evaluation goes through [`C_CURVATURE`] so the
//! convention is applied at a single place.

/// Curvature constant, GeV/c per kilogauss per centimeter.
///
/// For a track of transverse momentum `pt` (GeV/c) in a field `b`
/// (kilogauss), the transverse curvature is
/// `kappa = C_CURVATURE * |q| * |b| / pt` (1/cm).
pub const C_CURVATURE: f64 = 2.997_924_58e-4;

/// Sentinel daughter index marking an invalid candidate.
///
/// Matches the convention of storing track indices as unsigned shorts and
/// flagging malformed candidates with the maximum representable value.
pub const INVALID_INDEX: u16 = u16::MAX;

/// Curvature below this is treated as a straight line (1/cm).
pub const CURVATURE_EPS: f64 = 1e-12;

/// Charged pion mass, GeV/c^2.
pub const PION_MASS: f64 = 0.139_570_39;

/// Charged kaon mass, GeV/c^2.
pub const KAON_MASS: f64 = 0.493_677;

/// Proton mass, GeV/c^2.
pub const PROTON_MASS: f64 = 0.938_272_088;
