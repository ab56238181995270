// demos/demo.rs
use langevin_sim::simulator::{simulate_langevin, LangevinConfig};
use langevin_sim::stats::{cross_section_mean, cross_section_variance, Timer};

fn main() {
    println!("Running langevin-sim ensemble demo\n");

    let cfg = LangevinConfig {
        sigma: 1.0,
        mu: 0.0,
        tau: 0.5,
        dt: 0.001,
        total_time: 1.0,
        num_sample_paths: 1000,
        seed: 12345,
    };

    println!("--- Ornstein-Uhlenbeck Ensemble ---");
    println!(
        "sigma = {}, mu = {}, tau = {}, dt = {}, total_time = {}, paths = {}",
        cfg.sigma, cfg.mu, cfg.tau, cfg.dt, cfg.total_time, cfg.num_sample_paths
    );

    let mut timer = Timer::new();
    timer.start();
    let paths = match simulate_langevin(&cfg) {
        Ok(paths) => paths,
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            std::process::exit(1);
        }
    };
    let elapsed_ms = timer.elapsed_ms();

    let (num_paths, num_steps) = paths.dim();
    println!("\nEnsemble shape: {} paths x {} time steps", num_paths, num_steps);
    println!("Simulation time: {:.2} ms", elapsed_ms);
    let updates = (num_paths * (num_steps - 1)) as f64;
    println!(
        "Throughput: {:.2} path-steps/sec\n",
        updates / (elapsed_ms / 1000.0)
    );

    // Relaxation of the cross-sectional statistics toward the stationary
    // law N(mu, sigma^2), sampled at a handful of time indices.
    println!("--- Cross-Sectional Statistics ---");
    println!("{:>10} {:>12} {:>12}", "time", "mean", "variance");
    for &step in &[0, 50, 100, 250, 500, num_steps - 1] {
        let t = step as f64 * cfg.dt;
        println!(
            "{:>10.3} {:>12.5} {:>12.5}",
            t,
            cross_section_mean(&paths, step),
            cross_section_variance(&paths, step)
        );
    }

    println!(
        "\nStationary reference: mean = {}, variance = {}",
        cfg.mu,
        cfg.sigma * cfg.sigma
    );

    // Degenerate configurations fail fast instead of returning NaN matrices
    println!("\n--- Validation ---");
    let degenerate = LangevinConfig {
        dt: 2.0,
        total_time: 1.0,
        ..cfg
    };
    match simulate_langevin(&degenerate) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("Rejected as expected: {}", e),
    }
}
