//! Fixed-capacity wall field
//!
//! A [`WallField`] holds every wall that acts on the system in three
//! contiguous arrays, one per geometry kind. The arrays never grow; walls past
//! the per-kind limit are rejected instead of dropped.

use crate::constants::{MAX_CYLINDER_WALLS, MAX_PLANE_WALLS, MAX_SPHERE_WALLS};
use crate::error::{Result, WallError, WallKind};
use crate::geometry::{CylinderWall, PlaneWall, SphereWall};
use crate::group::WallGroup;
use bytemuck::Zeroable;

fn check_capacity(kind: WallKind, requested: usize, max: usize) -> Result<()> {
    if requested > max {
        log::warn!("Rejected wall field: {requested} {kind} walls exceed the limit of {max}");
        return Err(WallError::CapacityExceeded {
            kind,
            requested,
            max,
        });
    }
    Ok(())
}

/// All walls in the field, read-only during force evaluation
#[derive(Clone, Debug)]
pub struct WallField {
    spheres: [SphereWall; MAX_SPHERE_WALLS],
    cylinders: [CylinderWall; MAX_CYLINDER_WALLS],
    planes: [PlaneWall; MAX_PLANE_WALLS],

    num_spheres: usize,
    num_cylinders: usize,
    num_planes: usize,
}

impl Default for WallField {
    fn default() -> Self {
        Self {
            spheres: [SphereWall::zeroed(); MAX_SPHERE_WALLS],
            cylinders: [CylinderWall::zeroed(); MAX_CYLINDER_WALLS],
            planes: [PlaneWall::zeroed(); MAX_PLANE_WALLS],
            num_spheres: 0,
            num_cylinders: 0,
            num_planes: 0,
        }
    }
}

impl WallField {
    /// Create an empty field
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a field from a wall group.
    ///
    /// Every kind is checked before anything is copied, so a group that is too
    /// large for any one kind produces an error and no field.
    pub fn from_group(group: &WallGroup) -> Result<Self> {
        check_capacity(WallKind::Sphere, group.spheres().len(), MAX_SPHERE_WALLS)?;
        check_capacity(
            WallKind::Cylinder,
            group.cylinders().len(),
            MAX_CYLINDER_WALLS,
        )?;
        check_capacity(WallKind::Plane, group.planes().len(), MAX_PLANE_WALLS)?;

        let mut field = Self::default();
        field.num_spheres = group.spheres().len();
        field.num_cylinders = group.cylinders().len();
        field.num_planes = group.planes().len();
        field.spheres[..field.num_spheres].copy_from_slice(group.spheres());
        field.cylinders[..field.num_cylinders].copy_from_slice(group.cylinders());
        field.planes[..field.num_planes].copy_from_slice(group.planes());

        log::debug!(
            "Wall field built: {} spheres, {} cylinders, {} planes",
            field.num_spheres,
            field.num_cylinders,
            field.num_planes
        );
        Ok(field)
    }

    pub fn push_sphere(&mut self, wall: SphereWall) -> Result<()> {
        check_capacity(WallKind::Sphere, self.num_spheres + 1, MAX_SPHERE_WALLS)?;
        self.spheres[self.num_spheres] = wall;
        self.num_spheres += 1;
        Ok(())
    }

    pub fn push_cylinder(&mut self, wall: CylinderWall) -> Result<()> {
        check_capacity(
            WallKind::Cylinder,
            self.num_cylinders + 1,
            MAX_CYLINDER_WALLS,
        )?;
        self.cylinders[self.num_cylinders] = wall;
        self.num_cylinders += 1;
        Ok(())
    }

    pub fn push_plane(&mut self, wall: PlaneWall) -> Result<()> {
        check_capacity(WallKind::Plane, self.num_planes + 1, MAX_PLANE_WALLS)?;
        self.planes[self.num_planes] = wall;
        self.num_planes += 1;
        Ok(())
    }

    pub fn spheres(&self) -> &[SphereWall] {
        &self.spheres[..self.num_spheres]
    }

    pub fn cylinders(&self) -> &[CylinderWall] {
        &self.cylinders[..self.num_cylinders]
    }

    pub fn planes(&self) -> &[PlaneWall] {
        &self.planes[..self.num_planes]
    }

    /// Total number of active walls
    pub fn len(&self) -> usize {
        self.num_spheres + self.num_cylinders + self.num_planes
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_from_group_preserves_order() {
        let mut group = WallGroup::new();
        group.add_sphere(1.0, Vec3::ZERO, true).unwrap();
        group.add_sphere(2.0, Vec3::X, false).unwrap();
        group.add_plane(Vec3::ZERO, Vec3::Z).unwrap();

        let field = WallField::from_group(&group).unwrap();

        assert_eq!(field.spheres(), group.spheres());
        assert_eq!(field.planes(), group.planes());
        assert!(field.cylinders().is_empty());
        assert_eq!(field.len(), 3);
    }

    #[test]
    fn test_from_group_at_capacity() {
        let mut group = WallGroup::new();
        for i in 0..MAX_PLANE_WALLS {
            group.add_plane(Vec3::new(0.0, 0.0, i as f32), Vec3::Z).unwrap();
        }

        let field = WallField::from_group(&group).unwrap();
        assert_eq!(field.planes().len(), MAX_PLANE_WALLS);
    }

    #[test]
    fn test_from_group_over_capacity_fails() {
        let mut group = WallGroup::new();
        for _ in 0..MAX_SPHERE_WALLS + 1 {
            group.add_sphere(1.0, Vec3::ZERO, true).unwrap();
        }

        let err = WallField::from_group(&group).unwrap_err();
        assert_eq!(
            err,
            WallError::CapacityExceeded {
                kind: WallKind::Sphere,
                requested: MAX_SPHERE_WALLS + 1,
                max: MAX_SPHERE_WALLS,
            }
        );
    }

    #[test]
    fn test_cylinder_overflow_checked_before_copy() {
        let mut group = WallGroup::new();
        group.add_sphere(1.0, Vec3::ZERO, true).unwrap();
        for _ in 0..MAX_CYLINDER_WALLS + 3 {
            group.add_cylinder(1.0, Vec3::ZERO, Vec3::Z, true).unwrap();
        }

        assert!(matches!(
            WallField::from_group(&group),
            Err(WallError::CapacityExceeded {
                kind: WallKind::Cylinder,
                ..
            })
        ));
    }

    #[test]
    fn test_push_past_capacity_leaves_field_unchanged() {
        let mut field = WallField::new();
        for i in 0..MAX_SPHERE_WALLS {
            field
                .push_sphere(SphereWall::new(i as f32, Vec3::ZERO, true))
                .unwrap();
        }
        let before = field.spheres().to_vec();

        let result = field.push_sphere(SphereWall::new(99.0, Vec3::ZERO, true));

        assert!(matches!(result, Err(WallError::CapacityExceeded { .. })));
        assert_eq!(field.spheres(), before.as_slice());
    }

    #[test]
    fn test_walls_cast_to_bytes() {
        let mut field = WallField::new();
        field.push_plane(PlaneWall::new(Vec3::ZERO, Vec3::Z)).unwrap();
        field
            .push_cylinder(CylinderWall::new(1.0, Vec3::ZERO, Vec3::X, true))
            .unwrap();

        let plane_bytes: &[u8] = bytemuck::cast_slice(field.planes());
        let cylinder_bytes: &[u8] = bytemuck::cast_slice(field.cylinders());
        assert_eq!(plane_bytes.len(), std::mem::size_of::<PlaneWall>());
        assert_eq!(cylinder_bytes.len(), std::mem::size_of::<CylinderWall>());
    }
}
