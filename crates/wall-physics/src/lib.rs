//! # Wall Physics
//!
//! Static boundary walls (spheres, cylinders and planes) that act on particles
//! through ordinary pair potentials, with force, energy and virial accumulation.

pub mod constants;
pub mod error;
pub mod evaluator;
pub mod field;
pub mod geometry;
pub mod group;
pub mod params;
pub mod potential;

pub use constants::*;
pub use error::*;
pub use evaluator::*;
pub use field::*;
pub use geometry::*;
pub use group::*;
pub use params::*;
pub use potential::*;
