//! Per-particle state consumed by the wall force driver

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// GPU-compatible particle record
/// Aligned for WGSL struct compatibility
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct WallParticle {
    /// Position, already wrapped into the simulation box
    pub position: [f32; 3],
    /// Index into the per-type parameter table
    pub type_id: u32,

    pub diameter: f32,
    pub charge: f32,
    _padding: [f32; 2],
}

impl WallParticle {
    /// Unit-diameter, uncharged particle
    pub fn new(position: Vec3, type_id: u32) -> Self {
        Self {
            position: position.to_array(),
            type_id,
            diameter: 1.0,
            charge: 0.0,
            _padding: [0.0; 2],
        }
    }

    pub fn with_diameter(mut self, diameter: f32) -> Self {
        self.diameter = diameter;
        self
    }

    pub fn with_charge(mut self, charge: f32) -> Self {
        self.charge = charge;
        self
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}
