// src/stats.rs
//! Cross-sectional summaries of a simulated ensemble
//!
//! The simulator hands back a raw path matrix; these helpers compute the
//! across-path statistics downstream analysis cares about (empirical mean and
//! variance at a fixed time index). For the Ornstein-Uhlenbeck ensemble the
//! late-time cross sections should settle near N(μ, σ²).

use ndarray::Array2;
use std::f64;

/// Across-path sample mean at one time index (one column of the matrix)
pub fn cross_section_mean(paths: &Array2<f64>, step: usize) -> f64 {
    let column = paths.column(step);
    column.sum() / column.len() as f64
}

/// Across-path sample variance at one time index (unbiased, n-1 denominator)
pub fn cross_section_variance(paths: &Array2<f64>, step: usize) -> f64 {
    let column = paths.column(step);
    let n = column.len() as f64;
    let mean = column.sum() / n;
    column.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0)
}

pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start_time = std::time::Instant::now();
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
