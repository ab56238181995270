// src/solvers/euler_maruyama.rs
//! Euler-Maruyama Scheme for SDE Integration
//!
//! # Mathematical Framework
//!
//! For a general SDE:
//! ```text
//! dX_t = a(X_t, t) dt + b(X_t, t) dW_t
//! ```
//!
//! The Euler-Maruyama scheme provides the discretization:
//! ```text
//! X_{n+1} = X_n + a(X_n, t_n) Δt + b(X_n, t_n) ΔW_n
//! ```
//!
//! Where:
//! - `a(x,t)` is the drift coefficient
//! - `b(x,t)` is the diffusion coefficient
//! - `ΔW_n ~ N(0, Δt)` are independent normal increments
//!
//! # Convergence Properties
//!
//! - **Strong convergence**: Order 0.5 in step size
//! - **Weak convergence**: Order 1.0 in step size
//! - **Stability**: Conditionally stable (needs Δt small against the
//!   relaxation time for mean-reverting models)

use crate::models::model::SdeModel;
use crate::rng;
use rand::Rng;
use std::f64;

/// Euler-Maruyama numerical scheme for SDE integration
pub struct EulerMaruyama;

impl EulerMaruyama {
    pub fn new() -> Self {
        EulerMaruyama {}
    }

    /// Single Euler-Maruyama step
    ///
    /// # Algorithm
    ///
    /// 1. Generate normal random draw: Z ~ N(0,1)
    /// 2. Compute drift: a(X_n, t_n) * Δt
    /// 3. Compute diffusion: b(X_n, t_n) * √Δt * Z
    /// 4. Update: X_{n+1} = X_n + drift + diffusion
    ///
    /// # Parameters
    /// - `model`: SDE model providing drift and diffusion functions
    /// - `x`: Current state (modified in-place)
    /// - `t`: Current time
    /// - `dt`: Time step size
    /// - `rng`: Random number generator
    pub fn step<M: SdeModel, R: Rng + ?Sized>(
        model: &M,
        x: &mut f64,
        t: f64,
        dt: f64,
        rng: &mut R,
    ) {
        let normal_draw = rng::get_normal_draw(rng);
        Self::step_with_dw(model, x, t, dt, dt.sqrt() * normal_draw);
    }

    /// Single step with the Wiener increment supplied by the caller
    ///
    /// Used when the increments come from a pre-drawn batch rather than an
    /// inline generator (e.g. one all-paths draw per time step).
    pub fn step_with_dw<M: SdeModel>(model: &M, x: &mut f64, t: f64, dt: f64, dw: f64) {
        let drift_term = model.drift(*x, t) * dt;
        let diffusion_term = model.diffusion(*x, t) * dw;
        *x += drift_term + diffusion_term;
    }
}

impl Default for EulerMaruyama {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DriftOnly {
        rate: f64,
    }

    impl SdeModel for DriftOnly {
        fn drift(&self, x: f64, _t: f64) -> f64 {
            self.rate * x
        }

        fn diffusion(&self, _x: f64, _t: f64) -> f64 {
            0.0
        }
    }

    #[test]
    fn test_zero_diffusion_reduces_to_explicit_euler() {
        let model = DriftOnly { rate: -1.0 };
        let mut rng = crate::rng::seed_rng_from_u64(7);
        let dt = 0.01;

        let mut x = 1.0;
        for i in 0..100 {
            EulerMaruyama::step(&model, &mut x, i as f64 * dt, dt, &mut rng);
        }

        // Deterministic decay: x ≈ (1 - dt)^100
        let expected = (1.0 - dt).powi(100);
        assert!(
            (x - expected).abs() < 1e-12,
            "expected {}, got {}",
            expected,
            x
        );
    }

    #[test]
    fn test_step_with_zero_increment_is_pure_drift() {
        let model = DriftOnly { rate: 2.0 };
        let mut x = 3.0;

        EulerMaruyama::step_with_dw(&model, &mut x, 0.0, 0.1, 0.0);

        assert!((x - 3.6).abs() < 1e-12);
    }

    #[test]
    fn test_step_consumes_one_draw() {
        let model = DriftOnly { rate: 0.0 };
        let mut rng1 = crate::rng::seed_rng_from_u64(11);
        let mut rng2 = crate::rng::seed_rng_from_u64(11);

        let mut x = 0.0;
        EulerMaruyama::step(&model, &mut x, 0.0, 0.5, &mut rng1);
        let _ = crate::rng::get_normal_draw(&mut rng2);

        // Both generators must now be at the same position in the stream
        assert_eq!(
            crate::rng::get_normal_draw(&mut rng1),
            crate::rng::get_normal_draw(&mut rng2)
        );
    }
}
