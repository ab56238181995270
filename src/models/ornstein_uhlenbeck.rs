// src/models/ornstein_uhlenbeck.rs
//! Ornstein-Uhlenbeck (Langevin) Model
//!
//! # Mathematical Framework
//!
//! The mean-reverting Langevin equation:
//! ```text
//! dX_t = -(X_t - μ)/τ dt + σ_eff dW_t
//! ```
//!
//! Where:
//! - `μ` is the long-run mean the process relaxes toward
//! - `τ` is the relaxation time (larger τ → slower mean reversion)
//! - `σ_eff = σ √(2/τ)` is the effective diffusion coefficient
//!
//! # Stationary Distribution
//!
//! The rescaling of the noise amplitude is what pins the stationary variance:
//! ```text
//! Var[X_∞] = σ_eff² τ / 2 = σ²
//! ```
//! so the stationary law is N(μ, σ²) regardless of τ.

use super::model::SdeModel;
use std::f64;

pub struct OrnsteinUhlenbeck {
    pub mu: f64,
    pub tau: f64,
    sigma_eff: f64,
}

impl OrnsteinUhlenbeck {
    /// Build the model from the physical parameters
    ///
    /// `sigma` is the target stationary standard deviation, not the raw noise
    /// amplitude; the constructor applies the `√(2/τ)` rescaling once so the
    /// per-step update never recomputes it.
    pub fn new(sigma: f64, mu: f64, tau: f64) -> Self {
        OrnsteinUhlenbeck {
            mu,
            tau,
            sigma_eff: sigma * (2.0 / tau).sqrt(),
        }
    }

    /// Effective diffusion coefficient σ √(2/τ)
    pub fn sigma_eff(&self) -> f64 {
        self.sigma_eff
    }
}

impl SdeModel for OrnsteinUhlenbeck {
    fn drift(&self, x: f64, _t: f64) -> f64 {
        -(x - self.mu) / self.tau
    }

    fn diffusion(&self, _x: f64, _t: f64) -> f64 {
        self.sigma_eff
    }
}
