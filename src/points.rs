use crate::error::Result;
use crate::math::{Point2, Tolerance};
use crate::operations::modification::RemoveDuplicates;
use crate::operations::query::ContainsPoint;

/// Returns `points` without tolerance-equal duplicates, keeping first occurrences.
///
/// Shorthand for [`RemoveDuplicates`]; a `None` tolerance uses [`Tolerance::global`].
///
/// # Errors
///
/// Returns `PointsError::InvalidArgument` if `points` is `None`.
pub fn remove_duplicates(
    points: Option<&[Point2]>,
    tolerance: Option<Tolerance>,
) -> Result<Vec<Point2>> {
    let op = RemoveDuplicates::new(points);
    match tolerance {
        Some(tol) => op.with_tolerance(tol).execute(),
        None => op.execute(),
    }
}

/// Returns `true` if any point in `points` is tolerance-equal to `target`.
///
/// Shorthand for [`ContainsPoint`]; a `None` tolerance uses [`Tolerance::global`].
///
/// # Errors
///
/// Returns `PointsError::InvalidArgument` if `points` is `None`.
pub fn contains(
    points: Option<&[Point2]>,
    target: &Point2,
    tolerance: Option<Tolerance>,
) -> Result<bool> {
    let op = ContainsPoint::new(points, *target);
    match tolerance {
        Some(tol) => op.with_tolerance(tol).execute(),
        None => op.execute(),
    }
}
