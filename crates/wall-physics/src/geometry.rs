//! Wall geometries and their projection onto particle positions
//!
//! Every wall answers a single question for a particle: what is the vector from
//! the particle to the nearest point of the surface, and is the particle on the
//! side of the wall where the interaction is active?
//!
//! The structs are laid out for direct upload to a compute device (16-byte
//! groups, booleans stored as `u32`), so a whole [`crate::WallField`] can be cast
//! to bytes with `bytemuck`.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Projection of a particle position onto a wall surface
pub trait WallGeometry {
    /// Returns the displacement from `position` to the closest surface point and
    /// whether `position` lies on the active side of the wall.
    ///
    /// A particle exactly on the surface gets a zero displacement and is
    /// reported as inside.
    fn project(&self, position: Vec3) -> (Vec3, bool);
}

/// Closest point on a circle/sphere of `radius` around the origin of `shifted`
///
/// Shared by spheres (3D) and cylinders (radial plane only). `fallback` is the
/// unit direction used when `shifted` is exactly zero.
#[inline]
fn project_radial(shifted: Vec3, radius: f32, inside: bool, fallback: Vec3) -> (Vec3, bool) {
    let r = shifted.length();
    if r > 0.0 {
        // r == radius satisfies both comparisons, so the surface counts as inside
        let active = if inside { r <= radius } else { r >= radius };
        let on_surface = shifted * (radius / r);
        (on_surface - shifted, active)
    } else {
        // Exactly on the center: every surface point is `radius` away, pick a
        // fixed one so the distance stays correct and the result is repeatable.
        (fallback * radius, inside)
    }
}

#[inline]
fn flag(value: bool) -> u32 {
    value as u32
}

/// Spherical wall
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct SphereWall {
    /// Center of the sphere
    pub origin: [f32; 3],
    pub radius: f32,

    /// Nonzero when the active region is inside the sphere
    pub inside: u32,
    _padding: [u32; 3],
}

impl SphereWall {
    pub fn new(radius: f32, origin: Vec3, inside: bool) -> Self {
        Self {
            origin: origin.to_array(),
            radius,
            inside: flag(inside),
            _padding: [0; 3],
        }
    }

    pub fn origin(&self) -> Vec3 {
        Vec3::from_array(self.origin)
    }

    pub fn is_inside(&self) -> bool {
        self.inside != 0
    }
}

impl WallGeometry for SphereWall {
    fn project(&self, position: Vec3) -> (Vec3, bool) {
        project_radial(
            position - self.origin(),
            self.radius,
            self.is_inside(),
            Vec3::X,
        )
    }
}

/// Infinite cylindrical wall
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct CylinderWall {
    /// A point on the cylinder axis
    pub origin: [f32; 3],
    pub radius: f32,

    /// Unit direction of the axis. Not renormalized here.
    pub axis: [f32; 3],
    /// Nonzero when the active region is inside the cylinder
    pub inside: u32,
}

impl CylinderWall {
    pub fn new(radius: f32, origin: Vec3, axis: Vec3, inside: bool) -> Self {
        Self {
            origin: origin.to_array(),
            radius,
            axis: axis.to_array(),
            inside: flag(inside),
        }
    }

    pub fn origin(&self) -> Vec3 {
        Vec3::from_array(self.origin)
    }

    pub fn axis(&self) -> Vec3 {
        Vec3::from_array(self.axis)
    }

    pub fn is_inside(&self) -> bool {
        self.inside != 0
    }
}

impl WallGeometry for CylinderWall {
    fn project(&self, position: Vec3) -> (Vec3, bool) {
        let shifted = position - self.origin();
        let axis = self.axis();
        // Drop the component along the axis; the rest is a 2D circle problem.
        let radial = shifted - axis * shifted.dot(axis);
        project_radial(
            radial,
            self.radius,
            self.is_inside(),
            axis.any_orthonormal_vector(),
        )
    }
}

/// Infinite planar wall
///
/// The active side is the half-space the normal points into.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct PlaneWall {
    /// A point on the plane
    pub origin: [f32; 3],
    _padding0: f32,

    /// Unit normal. Not renormalized here.
    pub normal: [f32; 3],
    _padding1: f32,
}

impl PlaneWall {
    pub fn new(origin: Vec3, normal: Vec3) -> Self {
        Self {
            origin: origin.to_array(),
            _padding0: 0.0,
            normal: normal.to_array(),
            _padding1: 0.0,
        }
    }

    pub fn origin(&self) -> Vec3 {
        Vec3::from_array(self.origin)
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }
}

impl WallGeometry for PlaneWall {
    fn project(&self, position: Vec3) -> (Vec3, bool) {
        let normal = self.normal();
        let d = (position - self.origin()).dot(normal);
        (-d * normal, d >= 0.0)
    }
}
