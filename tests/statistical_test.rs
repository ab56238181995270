// tests/statistical_test.rs
use langevin_sim::simulator::{simulate_langevin, LangevinConfig};
use langevin_sim::stats::{cross_section_mean, cross_section_variance};
use ndarray::s;

#[test]
fn test_canonical_scenario_stationary_statistics() {
    // sigma=1, mu=0, tau=0.5 over two relaxation times: the late-time cross
    // sections should have settled near the stationary law N(0, 1).
    let cfg = LangevinConfig {
        sigma: 1.0,
        mu: 0.0,
        tau: 0.5,
        dt: 0.001,
        total_time: 1.0,
        num_sample_paths: 1000,
        seed: 42,
    };

    let paths = simulate_langevin(&cfg).expect("Valid configuration");
    assert_eq!(paths.dim(), (1000, 1000));

    let last = paths.ncols() - 1;
    let mean = cross_section_mean(&paths, last);
    let variance = cross_section_variance(&paths, last);

    println!("\nLate-time cross-section mean: {}", mean);
    println!("Late-time cross-section variance: {}", variance);

    assert!(
        mean.abs() < 0.1,
        "late-time mean {} not within 0.1 of mu = 0",
        mean
    );
    assert!(
        (variance - 1.0).abs() < 0.2,
        "late-time variance {} not within 0.2 of sigma^2 = 1",
        variance
    );
}

#[test]
fn test_relaxation_toward_nonzero_mean() {
    // Four relaxation times out, the ensemble mean should have closed most of
    // the gap between the zero initial condition and mu.
    let cfg = LangevinConfig {
        sigma: 0.5,
        mu: 2.0,
        tau: 0.25,
        dt: 0.001,
        total_time: 1.0,
        num_sample_paths: 2000,
        seed: 7,
    };

    let paths = simulate_langevin(&cfg).expect("Valid configuration");

    let last = paths.ncols() - 1;
    let mean = cross_section_mean(&paths, last);
    // Exact relaxation of the mean: mu * (1 - e^{-t/tau})
    let expected = cfg.mu * (1.0 - (-1.0f64 / cfg.tau).exp());

    println!("\nLate-time mean: {} (exact relaxation: {})", mean, expected);

    assert!(
        (mean - expected).abs() < 0.1,
        "late-time mean {} not within 0.1 of {}",
        mean,
        expected
    );
}

#[test]
fn test_variance_grows_from_zero() {
    let cfg = LangevinConfig {
        num_sample_paths: 2000,
        seed: 99,
        ..Default::default()
    };

    let paths = simulate_langevin(&cfg).expect("Valid configuration");

    let early = cross_section_variance(&paths, 10);
    let late = cross_section_variance(&paths, paths.ncols() - 1);

    println!("\nVariance at step 10: {}", early);
    println!("Variance at final step: {}", late);

    // Deterministic start, diffusive spread: variance must increase
    assert!(early < late);
    assert_eq!(cross_section_variance(&paths, 0), 0.0);
}

#[test]
fn test_causality_shared_prefix_under_longer_horizon() {
    // Extending total_time adds draws at the end of the stream only, so the
    // columns both runs share must be bit-identical: column i is a function
    // of column i-1 and the draws consumed at step i, nothing later.
    let short = LangevinConfig {
        total_time: 0.5,
        num_sample_paths: 50,
        seed: 314,
        ..Default::default()
    };
    let long = LangevinConfig {
        total_time: 1.0,
        ..short.clone()
    };

    let short_paths = simulate_langevin(&short).expect("Valid configuration");
    let long_paths = simulate_langevin(&long).expect("Valid configuration");

    let shared = short_paths.ncols();
    assert_eq!(shared, 500);
    assert_eq!(
        short_paths,
        long_paths.slice(s![.., ..shared]).to_owned(),
        "shared prefix diverged"
    );
}
