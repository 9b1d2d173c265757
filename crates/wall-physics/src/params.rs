//! Interaction parameters shared by every wall in a field

use crate::error::{Result, WallError};

fn check_non_negative(value: f32, what: &str) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(WallError::InvalidParameter(format!(
            "{what} must be finite and non-negative, got {value}"
        )))
    }
}

/// Pair potential parameters plus the wall cutoff and extrapolation shift
///
/// Immutable once built; evaluators only read it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallParams<T> {
    params: T,
    rcutsq: f32,
    rshift: f32,
}

impl<T> WallParams<T> {
    /// `rcutsq` is the squared cutoff, `rshift` the stand-off distance added to
    /// the true distance from the surface.
    pub fn new(params: T, rcutsq: f32, rshift: f32) -> Result<Self> {
        check_non_negative(rcutsq, "rcutsq")?;
        check_non_negative(rshift, "rshift")?;
        Ok(Self {
            params,
            rcutsq,
            rshift,
        })
    }

    /// Same as [`WallParams::new`], taking the cutoff as a distance.
    pub fn from_cutoff(params: T, r_cut: f32, r_extrap: f32) -> Result<Self> {
        check_non_negative(r_cut, "r_cut")?;
        Self::new(params, r_cut * r_cut, r_extrap)
    }

    pub fn params(&self) -> &T {
        &self.params
    }

    pub fn rcutsq(&self) -> f32 {
        self.rcutsq
    }

    pub fn rshift(&self) -> f32 {
        self.rshift
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cutoff_squares() {
        let p = WallParams::from_cutoff((), 2.5, 0.1).unwrap();
        assert_eq!(p.rcutsq(), 6.25);
        assert_eq!(p.rshift(), 0.1);
    }

    #[test]
    fn test_rejects_negative_values() {
        assert!(matches!(
            WallParams::new((), -1.0, 0.0),
            Err(WallError::InvalidParameter(_))
        ));
        assert!(matches!(
            WallParams::new((), 1.0, -0.5),
            Err(WallError::InvalidParameter(_))
        ));
        assert!(matches!(
            WallParams::from_cutoff((), f32::NAN, 0.0),
            Err(WallError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_zero_is_allowed() {
        let p = WallParams::new(3u32, 0.0, 0.0).unwrap();
        assert_eq!(*p.params(), 3);
        assert_eq!(p.rcutsq(), 0.0);
    }
}
