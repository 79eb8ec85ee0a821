//! Integration tests for the pair candidate builder
//!
//! Exercises the geometric properties of the straight-line DCA method:
//! guard behavior, order independence, mass-shell consistency, and the
//! crossing-lines and back-to-back reference scenarios.

use decay_topology_rs::common::constants::{INVALID_INDEX, KAON_MASS, PION_MASS};
use decay_topology_rs::{PairCandidate, Track};
use nalgebra::Vector3;

const FIELD: f64 = -4.98;

/// Two generic opposite-sign tracks from a displaced point.
fn generic_tracks() -> (Track, Track) {
    let decay_point = Vector3::new(0.05, -0.02, 1.2);
    let t1 = Track::new(3, 1, decay_point, Vector3::new(0.7, 0.25, 0.4));
    let t2 = Track::new(7, -1, decay_point, Vector3::new(-0.4, 0.55, 0.3));
    (t1, t2)
}

/// Duplicate track identity must invalidate the candidate regardless of
/// the other inputs.
#[test]
fn test_duplicate_identity_is_invalid() {
    let (t1, _) = generic_tracks();
    let same_id = Track::new(t1.id, -1, Vector3::zeros(), Vector3::new(-0.3, 0.1, 0.2));

    let pair = PairCandidate::new(
        &t1,
        &same_id,
        PION_MASS,
        PION_MASS,
        10,
        11,
        &Vector3::zeros(),
        FIELD,
    );

    assert!(!pair.is_valid());
    assert_eq!(pair.particle1_idx(), INVALID_INDEX);
    assert_eq!(pair.particle2_idx(), INVALID_INDEX);
}

/// Swapping the daughters (and their mass hypotheses) must not change the
/// combined four-momentum, decay vertex, or daughter-daughter DCA.
#[test]
fn test_order_independence() {
    let (t1, t2) = generic_tracks();
    let vertex = Vector3::new(0.01, 0.0, 0.0);

    let a = PairCandidate::new(&t1, &t2, PION_MASS, KAON_MASS, t1.id, t2.id, &vertex, FIELD);
    let b = PairCandidate::new(&t2, &t1, KAON_MASS, PION_MASS, t2.id, t1.id, &vertex, FIELD);

    assert!(a.is_valid() && b.is_valid());
    assert!((a.four_momentum().momentum - b.four_momentum().momentum).norm() < 1e-12);
    assert!((a.four_momentum().energy - b.four_momentum().energy).abs() < 1e-12);
    assert!((a.decay_vertex() - b.decay_vertex()).norm() < 1e-12);
    assert!((a.dca_daughters() - b.dca_daughters()).abs() < 1e-12);
}

/// Energy must dominate the momentum magnitude for any valid candidate
/// built from non-negative mass hypotheses.
#[test]
fn test_mass_shell_consistency() {
    let (t1, t2) = generic_tracks();
    let vertex = Vector3::zeros();

    for (m1, m2) in [(0.0, 0.0), (PION_MASS, PION_MASS), (KAON_MASS, PION_MASS)] {
        let pair = PairCandidate::new(&t1, &t2, m1, m2, t1.id, t2.id, &vertex, FIELD);
        assert!(pair.is_valid());
        assert!(
            pair.four_momentum().energy >= pair.four_momentum().p(),
            "E = {} < |p| = {}",
            pair.four_momentum().energy,
            pair.four_momentum().p()
        );
    }
}

/// The stored decay length is definitionally the distance between decay
/// vertex and primary vertex.
#[test]
fn test_decay_length_round_trip() {
    let (t1, t2) = generic_tracks();
    let vertex = Vector3::new(-0.02, 0.03, 0.1);

    let pair = PairCandidate::new(&t1, &t2, PION_MASS, KAON_MASS, t1.id, t2.id, &vertex, FIELD);
    assert!(pair.is_valid());
    assert!(pair.decay_length() == (pair.decay_vertex() - vertex).norm());
}

/// Two coplanar straight lines (zero field) crossing exactly at the
/// primary vertex: zero DCA, decay vertex at the crossing point, zero
/// decay length, NaN pointing angle from the zero-length flight vector.
#[test]
fn test_crossing_lines_at_primary_vertex() {
    let crossing = Vector3::zeros();
    let t1 = Track::new(0, 1, crossing, Vector3::new(1.0, 1.0, 0.0));
    let t2 = Track::new(1, -1, crossing, Vector3::new(-1.0, 1.0, 0.0));

    // Field off: the trajectories really are straight lines.
    let pair = PairCandidate::new(&t1, &t2, PION_MASS, PION_MASS, 0, 1, &crossing, 0.0);

    assert!(pair.is_valid());
    assert!(pair.dca_daughters() < 1e-12);
    assert!((pair.decay_vertex() - crossing).norm() < 1e-12);
    assert!(pair.decay_length() < 1e-12);
    assert!(pair.pointing_angle().is_nan(), "zero flight vector");
    assert!(pair.particle1_dca() < 1e-12);
    assert!(pair.particle2_dca() < 1e-12);
}

/// Displaced crossing lines: the same topology with the crossing point
/// away from the track origins still collapses the DCA and decay length
/// to (numerical) zero; the pointing angle must merely not fault.
#[test]
fn test_crossing_lines_displaced_origins() {
    let crossing = Vector3::zeros();
    let t1 = Track::new(
        0,
        1,
        Vector3::new(-1.0, -1.0, 0.0),
        Vector3::new(1.0, 1.0, 0.0),
    );
    let t2 = Track::new(
        1,
        -1,
        Vector3::new(1.0, -1.0, 0.0),
        Vector3::new(-1.0, 1.0, 0.0),
    );

    let pair = PairCandidate::new(&t1, &t2, PION_MASS, PION_MASS, 0, 1, &crossing, 0.0);

    assert!(pair.is_valid());
    assert!(pair.dca_daughters() < 1e-12);
    assert!((pair.decay_vertex() - crossing).norm() < 1e-12);
    assert!(pair.decay_length() < 1e-12);
    assert!(pair.particle1_dca() < 1e-12);
    assert!(pair.particle2_dca() < 1e-12);
}

/// Back-to-back pion-hypothesis daughters from a common point 1 cm above
/// the primary vertex: the parent is at rest and the reconstructed
/// invariant mass is exactly the analytic two-body value.
#[test]
fn test_back_to_back_invariant_mass() {
    let p = 0.8;
    let decay_point = Vector3::new(0.0, 0.0, 1.0);
    let t1 = Track::new(0, 1, decay_point, Vector3::new(p, 0.0, 0.0));
    let t2 = Track::new(1, -1, decay_point, Vector3::new(-p, 0.0, 0.0));
    let vertex = Vector3::zeros();

    let pair = PairCandidate::new(&t1, &t2, PION_MASS, PION_MASS, 0, 1, &vertex, FIELD);

    assert!(pair.is_valid());
    let expected = 2.0 * (p * p + PION_MASS * PION_MASS).sqrt();
    assert!(
        (pair.m() - expected).abs() / expected < 1e-5,
        "mass {} vs analytic {}",
        pair.m(),
        expected
    );
    assert!(pair.dca_daughters() < 1e-9);
    assert!((pair.decay_vertex() - decay_point).norm() < 1e-9);
    assert!((pair.decay_length() - 1.0).abs() < 1e-9);
    // Total momentum vanishes, so the candidate momentum direction and
    // the decay-frame angle are undefined.
    assert!(pair.four_momentum().p() < 1e-9);
}

/// Daughter DCAs to the primary vertex are measured at the moved helix
/// origins; for tracks emitted exactly from the primary vertex they are
/// (numerically) zero.
#[test]
fn test_prompt_tracks_have_zero_impact_parameter() {
    let vertex = Vector3::new(0.1, -0.2, 5.0);
    let t1 = Track::new(0, 1, vertex, Vector3::new(0.9, 0.1, 0.3));
    let t2 = Track::new(1, -1, vertex, Vector3::new(-0.2, 0.8, -0.1));

    let pair = PairCandidate::new(&t1, &t2, PION_MASS, KAON_MASS, 0, 1, &vertex, FIELD);

    assert!(pair.is_valid());
    assert!(pair.particle1_dca() < 1e-9);
    assert!(pair.particle2_dca() < 1e-9);
}

/// cosThetaStar lies in [-1, 1] for generic valid candidates.
#[test]
fn test_cos_theta_star_in_range() {
    let (t1, t2) = generic_tracks();
    let pair = PairCandidate::new(
        &t1,
        &t2,
        PION_MASS,
        KAON_MASS,
        t1.id,
        t2.id,
        &Vector3::zeros(),
        FIELD,
    );

    assert!(pair.is_valid());
    let c = pair.cos_theta_star();
    assert!((-1.0..=1.0).contains(&c), "cosThetaStar = {}", c);
}
