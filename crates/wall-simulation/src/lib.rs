//! # Wall Force Simulation
//!
//! Applies a wall field to every particle of a system and collects per-particle
//! forces together with the total energy and virial.

pub mod compute;
pub mod config;
pub mod params;
pub mod particle;

pub use compute::*;
pub use config::*;
pub use params::*;
pub use particle::*;
