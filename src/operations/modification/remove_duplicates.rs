use std::collections::HashMap;

use tracing::{debug, trace};

use crate::error::{PointsError, Result};
use crate::math::{Point2, PointHashKey, Tolerance};

/// Removes tolerance-equal duplicates from a point sequence.
///
/// The first occurrence of each point is kept and the relative order of the
/// retained points is preserved. A later point is dropped when an earlier
/// retained point shares its hash cell (see [`Tolerance::hash_key`]) and is
/// equal under [`Tolerance::points_equal`]. Merging is not transitive: a
/// point is only compared with retained points, never with dropped ones.
#[derive(Debug)]
pub struct RemoveDuplicates<'a> {
    points: Option<&'a [Point2]>,
    tolerance: Option<Tolerance>,
}

impl<'a> RemoveDuplicates<'a> {
    /// Creates a new deduplication over `points`.
    ///
    /// `None` models an absent collection and makes [`execute`](Self::execute) fail.
    #[must_use]
    pub fn new(points: Option<&'a [Point2]>) -> Self {
        Self {
            points,
            tolerance: None,
        }
    }

    /// Uses `tolerance` instead of the process-wide default.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Executes the deduplication, returning the retained points.
    ///
    /// # Errors
    ///
    /// Returns `PointsError::InvalidArgument` if the point collection is absent.
    pub fn execute(&self) -> Result<Vec<Point2>> {
        self.execute_indexed().map(|(points, _)| points)
    }

    /// Executes the deduplication, also returning an index mapping.
    ///
    /// `mapping[i]` is the index in the output that input point `i` was
    /// merged into.
    ///
    /// # Errors
    ///
    /// Returns `PointsError::InvalidArgument` if the point collection is absent.
    pub fn execute_indexed(&self) -> Result<(Vec<Point2>, Vec<usize>)> {
        let points = self
            .points
            .ok_or_else(|| PointsError::InvalidArgument("points must not be absent".into()))?;
        let tol = self.tolerance.unwrap_or_else(Tolerance::global);
        let step = tol.hash_step();

        // Cell key -> indices into `retained`.
        let mut buckets: HashMap<PointHashKey, Vec<usize>> = HashMap::new();
        let mut retained: Vec<Point2> = Vec::with_capacity(points.len());
        let mut mapping = Vec::with_capacity(points.len());

        for (i, pt) in points.iter().enumerate() {
            let bucket = buckets.entry(PointHashKey::new(pt, step)).or_default();
            let existing = bucket
                .iter()
                .copied()
                .find(|&idx| tol.points_equal(&retained[idx], pt));

            if let Some(idx) = existing {
                trace!(index = i, merged_into = idx, "dropping duplicate point");
                mapping.push(idx);
            } else {
                let idx = retained.len();
                retained.push(*pt);
                bucket.push(idx);
                mapping.push(idx);
            }
        }

        debug!(
            input = points.len(),
            retained = retained.len(),
            equal_point = tol.equal_point,
            "removed duplicate points"
        );
        Ok((retained, mapping))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn dedup(points: &[Point2], eps: f64) -> Vec<Point2> {
        RemoveDuplicates::new(Some(points))
            .with_tolerance(Tolerance::new(eps).unwrap())
            .execute()
            .unwrap()
    }

    #[test]
    fn absent_points_is_invalid_argument() {
        let err = RemoveDuplicates::new(None).execute().unwrap_err();
        assert!(matches!(err, PointsError::InvalidArgument(_)));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(dedup(&[], 0.01).is_empty());
    }

    #[test]
    fn zero_tolerance_is_exact() {
        let pts = [p(0.0, 0.0), p(0.0, 0.0), p(1e-9, 0.0)];
        assert_eq!(dedup(&pts, 0.0), vec![p(0.0, 0.0), p(1e-9, 0.0)]);
    }

    #[test]
    fn near_points_merge_into_first() {
        let pts = [p(0.0, 0.0), p(0.005, 0.005), p(5.0, 5.0)];
        assert_eq!(dedup(&pts, 0.01), vec![p(0.0, 0.0), p(5.0, 5.0)]);
    }

    #[test]
    fn first_occurrence_and_order_are_kept() {
        let pts = [
            p(3.0, 3.0),
            p(1.0, 1.0),
            p(3.001, 2.999),
            p(2.0, 2.0),
            p(1.0, 1.0),
        ];
        let out = dedup(&pts, 0.01);
        assert_eq!(out, vec![p(3.0, 3.0), p(1.0, 1.0), p(2.0, 2.0)]);
    }

    #[test]
    fn idempotent() {
        let pts = [
            p(0.0, 0.0),
            p(0.004, 0.0),
            p(0.3, 0.3),
            p(0.301, 0.299),
            p(-1.0, 2.0),
            p(-1.0, 2.0),
        ];
        let once = dedup(&pts, 0.01);
        let twice = dedup(&once, 0.01);
        assert_eq!(once, twice);
    }

    #[test]
    fn no_transitive_chaining() {
        // Each neighbour is within 0.01 of the previous one, but the third is
        // 0.016 away from the first retained point.
        let pts = [p(0.0, 0.0), p(0.008, 0.0), p(0.016, 0.0)];
        let out = dedup(&pts, 0.01);
        assert_eq!(out, vec![p(0.0, 0.0), p(0.016, 0.0)]);
    }

    #[test]
    fn keeps_within_tolerance_points_split_by_grid_boundary() {
        // 0.002 apart, but they snap to cells 0.0 and 0.1 and are never compared.
        let pts = [p(0.049, 0.0), p(0.051, 0.0)];
        let out = dedup(&pts, 0.01);
        assert_eq!(out, vec![p(0.049, 0.0), p(0.051, 0.0)]);
        assert_eq!(dedup(&out, 0.01), out);
    }

    #[test]
    fn nan_points_are_always_kept() {
        let pts = [p(f64::NAN, 0.0), p(f64::NAN, 0.0), p(1.0, 1.0)];
        let out = dedup(&pts, 0.01);
        assert_eq!(out.len(), 3);
        assert!(out[0].x.is_nan());
        assert!(out[1].x.is_nan());
    }

    #[test]
    fn default_tolerance_applies_when_unset() {
        let pts = [p(1.0, 1.0), p(1.0 + 1e-12, 1.0), p(1.0 + 1e-6, 1.0)];
        let out = RemoveDuplicates::new(Some(&pts[..])).execute().unwrap();
        assert_eq!(out.len(), 2);
        assert_abs_diff_eq!(out[1].x, 1.0 + 1e-6);
    }

    #[test]
    fn indexed_mapping_points_to_retained() {
        let pts = [p(0.0, 0.0), p(5.0, 5.0), p(0.001, 0.0), p(5.0, 5.002)];
        let (out, mapping) = RemoveDuplicates::new(Some(&pts[..]))
            .with_tolerance(Tolerance::new(0.01).unwrap())
            .execute_indexed()
            .unwrap();
        assert_eq!(out, vec![p(0.0, 0.0), p(5.0, 5.0)]);
        assert_eq!(mapping, vec![0, 1, 0, 1]);
    }
}
