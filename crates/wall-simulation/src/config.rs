//! Runtime configuration for wall-confined systems

use glam::Vec3;
use wall_physics::{LjParams, Result, WallGroup, WallParams};

/// Tunables for a cubic box closed by six plane walls with a spherical
/// obstacle at its center
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallSimulationConfig {
    pub particle_count: usize,
    /// Edge length of the confining box, centered on the origin
    pub box_length: f32,
    /// Radius of the central obstacle (0 disables it)
    pub obstacle_radius: f32,

    // Lennard-Jones wall interaction
    pub epsilon: f32,
    pub sigma: f32,
    pub r_cut: f32,
    /// Extrapolation shift for particles that end up outside a wall
    pub r_extrap: f32,
}

impl Default for WallSimulationConfig {
    fn default() -> Self {
        Self {
            particle_count: 4000,
            box_length: 20.0,
            obstacle_radius: 3.0,
            epsilon: 1.0,
            sigma: 1.0,
            r_cut: 2.0f32.powf(1.0 / 6.0), // purely repulsive
            r_extrap: 0.0,
        }
    }
}

impl WallSimulationConfig {
    /// Plane normals point into the box so its interior is the active side.
    pub fn wall_group(&self) -> Result<WallGroup> {
        let half = 0.5 * self.box_length;
        let mut group = WallGroup::new();

        for axis in [Vec3::X, Vec3::Y, Vec3::Z] {
            group.add_plane(-half * axis, axis)?;
            group.add_plane(half * axis, -axis)?;
        }
        if self.obstacle_radius > 0.0 {
            group.add_sphere(self.obstacle_radius, Vec3::ZERO, false)?;
        }
        Ok(group)
    }

    pub fn wall_params(&self) -> Result<WallParams<LjParams>> {
        WallParams::from_cutoff(
            LjParams::new(self.epsilon, self.sigma, 1.0),
            self.r_cut,
            self.r_extrap,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wall_physics::{WallField, WallGeometry};

    #[test]
    fn test_box_interior_is_active() {
        let config = WallSimulationConfig::default();
        let field = WallField::from_group(&config.wall_group().unwrap()).unwrap();

        assert_eq!(field.planes().len(), 6);
        assert_eq!(field.spheres().len(), 1);

        let p = Vec3::new(5.0, -4.0, 8.0);
        for plane in field.planes() {
            assert!(plane.project(p).1);
        }
        assert!(field.spheres()[0].project(p).1);
    }

    #[test]
    fn test_obstacle_optional() {
        let config = WallSimulationConfig {
            obstacle_radius: 0.0,
            ..Default::default()
        };
        assert!(config.wall_group().unwrap().spheres().is_empty());
    }
}
