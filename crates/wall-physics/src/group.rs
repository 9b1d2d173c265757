//! Host-side wall lists
//!
//! A [`WallGroup`] collects wall definitions without any capacity limit. It is
//! the editable description that a [`crate::WallField`] is built from.

use crate::constants::MIN_DIRECTION_LENGTH_SQ;
use crate::error::{Result, WallError};
use crate::geometry::{CylinderWall, PlaneWall, SphereWall};
use glam::Vec3;

fn check_radius(radius: f32) -> Result<()> {
    if radius.is_finite() && radius >= 0.0 {
        Ok(())
    } else {
        Err(WallError::InvalidGeometry(format!(
            "radius must be finite and non-negative, got {radius}"
        )))
    }
}

fn unit_direction(v: Vec3, what: &str) -> Result<Vec3> {
    if !v.is_finite() || v.length_squared() < MIN_DIRECTION_LENGTH_SQ {
        return Err(WallError::InvalidGeometry(format!(
            "{what} must be a finite, non-zero vector, got {v}"
        )));
    }
    Ok(v.normalize())
}

/// Editable list of walls
///
/// Walls only enter through the `add_*` methods, so every stored axis and
/// normal is a validated unit vector.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WallGroup {
    spheres: Vec<SphereWall>,
    cylinders: Vec<CylinderWall>,
    planes: Vec<PlaneWall>,
}

impl WallGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sphere(&mut self, radius: f32, origin: Vec3, inside: bool) -> Result<()> {
        check_radius(radius)?;
        self.spheres.push(SphereWall::new(radius, origin, inside));
        Ok(())
    }

    /// Adds a cylinder. The axis is normalized here.
    pub fn add_cylinder(
        &mut self,
        radius: f32,
        origin: Vec3,
        axis: Vec3,
        inside: bool,
    ) -> Result<()> {
        check_radius(radius)?;
        let axis = unit_direction(axis, "cylinder axis")?;
        self.cylinders
            .push(CylinderWall::new(radius, origin, axis, inside));
        Ok(())
    }

    /// Adds a plane. The normal is normalized here.
    pub fn add_plane(&mut self, origin: Vec3, normal: Vec3) -> Result<()> {
        let normal = unit_direction(normal, "plane normal")?;
        self.planes.push(PlaneWall::new(origin, normal));
        Ok(())
    }

    pub fn del_sphere(&mut self, index: usize) -> Option<SphereWall> {
        (index < self.spheres.len()).then(|| self.spheres.remove(index))
    }

    pub fn del_cylinder(&mut self, index: usize) -> Option<CylinderWall> {
        (index < self.cylinders.len()).then(|| self.cylinders.remove(index))
    }

    pub fn del_plane(&mut self, index: usize) -> Option<PlaneWall> {
        (index < self.planes.len()).then(|| self.planes.remove(index))
    }

    pub fn spheres(&self) -> &[SphereWall] {
        &self.spheres
    }

    pub fn cylinders(&self) -> &[CylinderWall] {
        &self.cylinders
    }

    pub fn planes(&self) -> &[PlaneWall] {
        &self.planes
    }

    pub fn clear(&mut self) {
        self.spheres.clear();
        self.cylinders.clear();
        self.planes.clear();
    }

    /// Total number of walls of all kinds
    pub fn len(&self) -> usize {
        self.spheres.len() + self.cylinders.len() + self.planes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_add_normalizes_directions() {
        let mut group = WallGroup::new();
        group
            .add_cylinder(1.0, Vec3::ZERO, Vec3::new(0.0, 0.0, 4.0), true)
            .unwrap();
        group.add_plane(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0)).unwrap();

        assert_eq!(group.cylinders()[0].axis(), Vec3::Z);
        assert_relative_eq!(group.planes()[0].normal().x, 0.6, epsilon = 1e-6);
        assert_relative_eq!(group.planes()[0].normal().y, 0.8, epsilon = 1e-6);
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn test_rejects_degenerate_geometry() {
        let mut group = WallGroup::new();

        assert!(matches!(
            group.add_plane(Vec3::ZERO, Vec3::ZERO),
            Err(WallError::InvalidGeometry(_))
        ));
        assert!(matches!(
            group.add_sphere(-1.0, Vec3::ZERO, true),
            Err(WallError::InvalidGeometry(_))
        ));
        assert!(matches!(
            group.add_cylinder(1.0, Vec3::ZERO, Vec3::new(f32::NAN, 0.0, 1.0), true),
            Err(WallError::InvalidGeometry(_))
        ));
        assert!(group.is_empty());
    }

    #[test]
    fn test_delete_and_clear() {
        let mut group = WallGroup::new();
        group.add_sphere(1.0, Vec3::ZERO, true).unwrap();
        group.add_sphere(2.0, Vec3::ZERO, false).unwrap();

        let removed = group.del_sphere(0).unwrap();
        assert_eq!(removed.radius, 1.0);
        assert_eq!(group.spheres()[0].radius, 2.0);
        assert!(group.del_sphere(5).is_none());
        assert!(group.del_plane(0).is_none());

        group.clear();
        assert!(group.is_empty());
    }
}
