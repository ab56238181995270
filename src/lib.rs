//! # langevin-sim: Ornstein-Uhlenbeck Ensemble Simulation
//!
//! A Rust library for Euler-Maruyama simulation of the mean-reverting
//! Langevin stochastic differential equation, producing an ensemble of
//! independent sample trajectories for downstream statistical analysis
//! (relaxation time estimation, stationary variance, and so on).
//!
//! ## Key Features
//!
//! - **Single-call ensemble**: one invocation fills a paths × time-steps matrix
//! - **Injectable randomness**: pass a seed or any `rand::Rng`; reproducible runs
//! - **Fail-fast validation**: bad parameters are rejected before allocation,
//!   never silently turned into NaN output
//! - **Time-causal recurrence**: each column depends only on its predecessor
//!
//! ## Quick Start
//!
//! ```rust
//! use langevin_sim::simulator::{simulate_langevin, LangevinConfig};
//!
//! // Unit stationary variance, fast relaxation
//! let cfg = LangevinConfig {
//!     sigma: 1.0,       // Stationary standard deviation
//!     mu: 0.0,          // Long-run mean
//!     tau: 0.5,         // Relaxation time
//!     dt: 0.001,        // Time step
//!     total_time: 1.0,  // Simulated span
//!     num_sample_paths: 1000,
//!     seed: 42,
//! };
//!
//! let paths = simulate_langevin(&cfg).expect("Valid configuration");
//! assert_eq!(paths.dim(), (1000, 1000));
//! ```
//!
//! ## Mathematical Foundation
//!
//! The library integrates `dX_t = -(X_t - μ)/τ dt + σ√(2/τ) dW_t` with the
//! explicit Euler-Maruyama scheme. The `√(2/τ)` noise rescaling pins the
//! stationary distribution at N(μ, σ²) independently of the relaxation time.

// Module declarations
pub mod error;
pub mod models;
pub mod rng;
pub mod simulator;
pub mod solvers;
pub mod stats;

// Re-export commonly used types for convenience
pub use error::{SimError, SimResult};
pub use simulator::{simulate_langevin, simulate_langevin_with_rng, LangevinConfig};
