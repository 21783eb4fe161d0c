use tracing::trace;

use crate::error::{PointsError, Result};
use crate::math::{Point2, Tolerance};

/// Tests whether a point sequence contains a point within tolerance.
#[derive(Debug)]
pub struct ContainsPoint<'a> {
    points: Option<&'a [Point2]>,
    target: Point2,
    tolerance: Option<Tolerance>,
}

impl<'a> ContainsPoint<'a> {
    /// Creates a new containment query for `target` in `points`.
    #[must_use]
    pub fn new(points: Option<&'a [Point2]>, target: Point2) -> Self {
        Self {
            points,
            target,
            tolerance: None,
        }
    }

    /// Uses `tolerance` instead of the process-wide default.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Executes the query.
    ///
    /// Scans linearly and stops at the first point equal to the target.
    ///
    /// # Errors
    ///
    /// Returns `PointsError::InvalidArgument` if the point collection is absent.
    pub fn execute(&self) -> Result<bool> {
        let points = self
            .points
            .ok_or_else(|| PointsError::InvalidArgument("points must not be absent".into()))?;
        let tol = self.tolerance.unwrap_or_else(Tolerance::global);

        let hit = points
            .iter()
            .position(|pt| tol.points_equal(pt, &self.target));
        trace!(len = points.len(), ?hit, "contains point");
        Ok(hit.is_some())
    }
}
