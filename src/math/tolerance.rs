use std::sync::{PoisonError, RwLock};

use super::{Point2, TOLERANCE};
use crate::error::{PointsError, Result};

/// Ratio between the hashing grid step and the equality epsilon.
const HASH_GRID_FACTOR: f64 = 10.0;

static GLOBAL: RwLock<Tolerance> = RwLock::new(Tolerance::DEFAULT);

/// Tolerance settings for point comparisons.
///
/// Two points are equal when both coordinate differences are within
/// `equal_point`. Hashing snaps coordinates to a grid ten times coarser than
/// that window (see [`PointHashKey`]); points sharing a cell are then compared
/// with [`Tolerance::points_equal`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Maximum per-coordinate difference for two points to be equal.
    pub equal_point: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Tolerance {
    /// Initial value of the process-wide default.
    pub const DEFAULT: Self = Self {
        equal_point: TOLERANCE,
    };

    /// Exact comparison: no snapping, plain float equality.
    pub const EXACT: Self = Self { equal_point: 0.0 };

    /// Creates a tolerance with the given point epsilon.
    ///
    /// # Errors
    ///
    /// Returns `PointsError::InvalidArgument` if `equal_point` is negative,
    /// infinite or NaN.
    pub fn new(equal_point: f64) -> Result<Self> {
        if !equal_point.is_finite() || equal_point < 0.0 {
            return Err(PointsError::InvalidArgument(format!(
                "point tolerance must be finite and non-negative, got {equal_point}"
            )));
        }
        Ok(Self { equal_point })
    }

    /// Returns the process-wide default tolerance.
    #[must_use]
    pub fn global() -> Self {
        *GLOBAL.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the process-wide default tolerance, returning the previous one.
    pub fn set_global(tolerance: Self) -> Self {
        let mut guard = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, tolerance)
    }

    /// Returns `true` if `a` and `b` differ by at most `equal_point` on each axis.
    ///
    /// NaN coordinates never compare equal.
    #[must_use]
    pub fn points_equal(&self, a: &Point2, b: &Point2) -> bool {
        (a.x - b.x).abs() <= self.equal_point && (a.y - b.y).abs() <= self.equal_point
    }

    /// Grid step used for hash keys.
    #[must_use]
    pub fn hash_step(&self) -> f64 {
        self.equal_point * HASH_GRID_FACTOR
    }

    /// Computes the hash key of a point under this tolerance.
    #[must_use]
    pub fn hash_key(&self, p: &Point2) -> PointHashKey {
        PointHashKey::new(p, self.hash_step())
    }
}

/// Snaps `value` to the nearest multiple of `step`, rounding halves up.
///
/// A zero step leaves the value untouched.
#[must_use]
pub fn snap(value: f64, step: f64) -> f64 {
    if step == 0.0 {
        return value;
    }
    (value / step + 0.5).floor() * step
}

/// Hash key of a point snapped to a tolerance grid.
///
/// Stores the bit patterns of the snapped coordinates so it can derive `Eq`
/// and `Hash`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointHashKey {
    x: u64,
    y: u64,
}

impl PointHashKey {
    /// Builds the key for `p` on a grid of spacing `step`.
    #[must_use]
    pub fn new(p: &Point2, step: f64) -> Self {
        Self {
            x: coord_bits(snap(p.x, step)),
            y: coord_bits(snap(p.y, step)),
        }
    }
}

/// Bit pattern of a coordinate with `-0.0` folded onto `0.0`.
fn coord_bits(v: f64) -> u64 {
    (v + 0.0).to_bits()
}
