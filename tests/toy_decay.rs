//! End-to-end reconstruction of generated toy decays
//!
//! Generates deterministic two-body decays and checks that the pair
//! builder recovers the decay topology: invariant mass near the parent
//! mass, decay vertex near the true decay point, small daughter DCA and
//! pointing angle. Tolerances are set by the straight-line proxy error
//! over the flight distance, which grows for low-pt daughters.

use decay_topology_rs::{DecayScenario, PairCandidate, SimpleRng};
use nalgebra::Vector3;

/// Reconstruct generated decays over several seeds; the straight-line
/// method must recover the parent within its approximation error.
#[test]
fn test_reconstructs_generated_decays() {
    let mut scenario = DecayScenario::kaon_pion(3.0);
    // A longer flight distance makes the topology observables
    // non-trivial while the local straight-line approximation stays good.
    scenario.decay_length = 0.5;

    for seed in 1..=10u64 {
        let mut rng = SimpleRng::new(seed);
        let decay = scenario.generate(&mut rng, 0).expect("valid scenario");
        let (d1, d2) = (&decay.daughters[0], &decay.daughters[1]);

        let pair = PairCandidate::new(
            d1,
            d2,
            scenario.daughter_masses.0,
            scenario.daughter_masses.1,
            d1.id,
            d2.id,
            &scenario.primary_vertex,
            scenario.field,
        );

        assert!(pair.is_valid());
        assert!(
            (pair.m() - scenario.parent_mass).abs() / scenario.parent_mass < 1e-3,
            "seed {}: mass {} vs parent {}",
            seed,
            pair.m(),
            scenario.parent_mass
        );
        assert!(
            (pair.decay_vertex() - decay.decay_point).norm() < 0.05,
            "seed {}: vertex {:?} vs true {:?}",
            seed,
            pair.decay_vertex(),
            decay.decay_point
        );
        assert!(pair.dca_daughters() < 0.05, "seed {}", seed);
        assert!(
            (pair.decay_length() - scenario.decay_length).abs() < 0.05,
            "seed {}: decay length {}",
            seed,
            pair.decay_length()
        );
        assert!(
            pair.pointing_angle() < 0.1,
            "seed {}: pointing angle {}",
            seed,
            pair.pointing_angle()
        );
    }
}

/// The reconstructed candidate momentum matches the generated parent
/// momentum up to the straight-line approximation error.
#[test]
fn test_recovers_parent_momentum() {
    let mut scenario = DecayScenario::kaon_pion(2.5);
    scenario.decay_length = 0.5;
    scenario.primary_vertex = Vector3::new(0.0, 0.0, 3.0);

    let mut rng = SimpleRng::new(42);
    let decay = scenario.generate(&mut rng, 0).expect("valid scenario");
    let (d1, d2) = (&decay.daughters[0], &decay.daughters[1]);

    let pair = PairCandidate::new(
        d1,
        d2,
        scenario.daughter_masses.0,
        scenario.daughter_masses.1,
        d1.id,
        d2.id,
        &scenario.primary_vertex,
        scenario.field,
    );

    assert!(pair.is_valid());
    assert!(
        (pair.momentum() - decay.parent.momentum).norm() < 0.02,
        "momentum {:?} vs parent {:?}",
        pair.momentum(),
        decay.parent.momentum
    );
}
