// src/solvers/mod.rs
pub mod euler_maruyama;

pub use euler_maruyama::EulerMaruyama;
