//! Capacity limits and numerical defaults for wall fields
//!
//! The per-kind limits fix the memory layout of a [`crate::WallField`] so it can
//! be handed to a compute device as a single flat buffer.

/// Maximum number of sphere walls in one field
pub const MAX_SPHERE_WALLS: usize = 20;

/// Maximum number of cylinder walls in one field
pub const MAX_CYLINDER_WALLS: usize = 20;

/// Maximum number of plane walls in one field
pub const MAX_PLANE_WALLS: usize = 60;

/// Number of independent virial components (xx, xy, xz, yy, yz, zz)
pub const VIRIAL_COMPONENTS: usize = 6;

/// Prefix prepended to the potential name when logging wall energies
pub const WALL_NAME_PREFIX: &str = "walls_";

/// Squared length below which an axis or normal is considered degenerate
pub const MIN_DIRECTION_LENGTH_SQ: f32 = 1.0e-12;
