// src/simulator.rs
//! Ensemble Simulation of the Langevin Equation
//!
//! # Mathematical Framework
//!
//! Simulates the mean-reverting Langevin SDE:
//! ```text
//! dX_t = -(X_t - μ)/τ dt + σ√(2/τ) dW_t
//! ```
//!
//! via the Euler-Maruyama discretization, for `num_sample_paths` independent
//! trajectories at once. The result is a matrix with one row per sample path
//! and one column per discrete time index; column `i` corresponds to time
//! `i * dt` and column 0 is the fixed initial condition X(0) = 0 for every
//! path.
//!
//! # Update Rule
//!
//! ```text
//! X[:, i] = X[:, i-1] + dt * (-(X[:, i-1] - μ)/τ) + σ√(2/τ) * √dt * Z
//! ```
//! with one fresh vector of standard normals Z per time step. The recurrence
//! is strictly time-causal: column `i` reads only column `i-1`, and each
//! path's increment is drawn independently, so paths never couple.

use crate::error::{validation::*, SimError, SimResult};
use crate::models::OrnsteinUhlenbeck;
use crate::rng;
use crate::solvers::EulerMaruyama;
use ndarray::Array2;
use rand::Rng;
use std::f64;

/// Parameters of one ensemble simulation run
#[derive(Debug, Clone)]
pub struct LangevinConfig {
    /// Target stationary standard deviation of the process
    pub sigma: f64,
    /// Long-run mean
    pub mu: f64,
    /// Relaxation time
    pub tau: f64,
    /// Time step of the discretization
    pub dt: f64,
    /// Total simulated time span
    pub total_time: f64,
    /// Number of independent sample paths
    pub num_sample_paths: usize,
    /// Seed for the internally constructed generator
    pub seed: u64,
}

impl LangevinConfig {
    /// Number of discrete time samples, `floor(total_time / dt)`
    ///
    /// Truncation, not rounding: the grid covers at most `total_time`.
    pub fn num_time_steps(&self) -> usize {
        (self.total_time / self.dt) as usize
    }

    /// Implied time axis `[0, dt, 2dt, ..., (n-1)dt]` of the path matrix
    pub fn time_axis(&self) -> Vec<f64> {
        (0..self.num_time_steps()).map(|i| i as f64 * self.dt).collect()
    }

    /// Validate the simulation configuration
    ///
    /// Rejects every input the numerics cannot digest before anything is
    /// allocated: non-positive or non-finite physical parameters, a zero path
    /// count, and a time grid with fewer than two samples (nothing to
    /// integrate).
    pub fn validate(&self) -> SimResult<()> {
        validate_positive("sigma", self.sigma)?;
        validate_finite("sigma", self.sigma)?;
        validate_finite("mu", self.mu)?;
        validate_positive("tau", self.tau)?;
        validate_finite("tau", self.tau)?;
        validate_positive("dt", self.dt)?;
        validate_finite("dt", self.dt)?;
        validate_positive("total_time", self.total_time)?;
        validate_finite("total_time", self.total_time)?;
        validate_paths(self.num_sample_paths)?;

        if self.num_time_steps() < 2 {
            return Err(SimError::DegenerateTimeSpan {
                dt: self.dt,
                total_time: self.total_time,
            });
        }

        Ok(())
    }
}

impl Default for LangevinConfig {
    fn default() -> Self {
        LangevinConfig {
            sigma: 1.0,
            mu: 0.0,
            tau: 0.5,
            dt: 0.001,
            total_time: 1.0,
            num_sample_paths: 1000,
            seed: 12345,
        }
    }
}

/// Simulate the ensemble with a generator seeded from `cfg.seed`
///
/// # Returns
///
/// The fully populated path matrix, shape
/// `(num_sample_paths, num_time_steps)`. The caller owns it outright; the
/// simulator keeps no state between calls.
///
/// # Errors
///
/// Returns `SimError` for:
/// - Invalid configuration parameters (checked before allocation)
/// - Non-finite values appearing in the simulated ensemble
pub fn simulate_langevin(cfg: &LangevinConfig) -> SimResult<Array2<f64>> {
    let mut rng = rng::seed_rng_from_u64(cfg.seed);
    simulate_langevin_with_rng(cfg, &mut rng)
}

/// Simulate the ensemble consuming an injected random source
///
/// The generator is the only external state the routine touches, and it is
/// consumed strictly sequentially: one all-paths batch of standard normal
/// draws per time step, in path order. Two calls with identical
/// configurations and identically seeded generators produce bit-identical
/// matrices.
pub fn simulate_langevin_with_rng<R: Rng + ?Sized>(
    cfg: &LangevinConfig,
    rng: &mut R,
) -> SimResult<Array2<f64>> {
    cfg.validate()?;

    let num_time_steps = cfg.num_time_steps();
    let model = OrnsteinUhlenbeck::new(cfg.sigma, cfg.mu, cfg.tau);

    let mut paths = Array2::<f64>::zeros((cfg.num_sample_paths, num_time_steps));

    // Column 0 is the initial condition X(0) = 0, already in place from the
    // zero allocation. Each later column is one Euler-Maruyama step applied
    // to every path, with a fresh draw per path per step.
    for i in 1..num_time_steps {
        let t = (i - 1) as f64 * cfg.dt;
        for p in 0..cfg.num_sample_paths {
            let mut x = paths[[p, i - 1]];
            EulerMaruyama::step(&model, &mut x, t, cfg.dt, rng);
            paths[[p, i]] = x;
        }
    }

    // Valid parameters keep the recurrence finite; a blow-up here means the
    // step size is too coarse for the requested relaxation time.
    if paths.iter().any(|x| !x.is_finite()) {
        return Err(SimError::NumericalInstability {
            method: "Euler-Maruyama".to_string(),
            reason: format!(
                "non-finite value in ensemble (dt = {}, tau = {})",
                cfg.dt, cfg.tau
            ),
        });
    }

    Ok(paths)
}
