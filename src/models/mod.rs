// src/models/mod.rs
pub mod model;
pub mod ornstein_uhlenbeck;

pub use model::SdeModel;
pub use ornstein_uhlenbeck::OrnsteinUhlenbeck;
