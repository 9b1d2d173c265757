//! Error types for wall construction and evaluation setup.

use thiserror::Error;

/// Wall geometry kinds, used to label capacity errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallKind {
    Sphere,
    Cylinder,
    Plane,
}

impl std::fmt::Display for WallKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WallKind::Sphere => "sphere",
            WallKind::Cylinder => "cylinder",
            WallKind::Plane => "plane",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WallError {
    /// More walls of one kind were requested than a field can hold.
    #[error("{requested} {kind} walls requested, but at most {max} are allowed")]
    CapacityExceeded {
        kind: WallKind,
        requested: usize,
        max: usize,
    },

    #[error("Invalid wall geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid interaction parameter: {0}")]
    InvalidParameter(String),

    /// A particle type was evaluated before its wall parameters were set.
    #[error("No wall parameters set for particle type {0}")]
    MissingParameters(u32),
}

pub type Result<T> = std::result::Result<T, WallError>;
