//! Owned waypoint list that callers edit between generation requests.

use crate::error::SplineError;
use crate::geom2::Point;
use crate::spline::{generate, FilletPath, SplineCfg};

/// Ordered waypoints; insertion order is travel order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WaypointList {
    points: Vec<Point>,
}

impl WaypointList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append waypoints after the existing ones, in the given order.
    pub fn add_waypoints<I: IntoIterator<Item = Point>>(&mut self, waypoints: I) {
        self.points.extend(waypoints);
    }

    /// Remove the waypoints at `indices` (positions in the current list).
    ///
    /// Duplicate indices are ignored. Any out-of-range index rejects the whole
    /// call and leaves the list untouched.
    pub fn remove_waypoints(&mut self, indices: &[usize]) -> Result<(), SplineError> {
        let len = self.points.len();
        if let Some(&index) = indices.iter().find(|&&i| i >= len) {
            return Err(SplineError::IndexOutOfRange { index, len });
        }
        let mut sorted = indices.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted.dedup();
        for i in sorted {
            self.points.remove(i);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Generate a path through the current waypoints.
    pub fn generate(&self, cfg: &SplineCfg) -> Result<FilletPath, SplineError> {
        generate(&self.points, cfg)
    }
}

impl From<Vec<Point>> for WaypointList {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point> for WaypointList {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a WaypointList {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn list() -> WaypointList {
        [
            vector![0.0, 0.0],
            vector![3.0, 0.0],
            vector![3.0, 3.0],
            vector![6.0, 3.0],
            vector![6.0, 6.0],
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn add_appends_in_order() {
        let mut w = WaypointList::new();
        assert!(w.is_empty());
        w.add_waypoints([vector![1.0, 1.0], vector![2.0, 2.0]]);
        w.add_waypoints(vec![vector![3.0, 3.0]]);
        assert_eq!(w.len(), 3);
        assert_eq!(w.as_slice()[2], vector![3.0, 3.0]);
    }

    #[test]
    fn remove_handles_unsorted_and_duplicate_indices() {
        let mut w = list();
        w.remove_waypoints(&[1, 3, 1]).unwrap();
        assert_eq!(
            w.as_slice(),
            &[vector![0.0, 0.0], vector![3.0, 3.0], vector![6.0, 6.0]]
        );
    }

    #[test]
    fn remove_out_of_range_leaves_list_untouched() {
        let mut w = list();
        let err = w.remove_waypoints(&[0, 9]).unwrap_err();
        assert_eq!(err, SplineError::IndexOutOfRange { index: 9, len: 5 });
        assert_eq!(w, list());
    }

    #[test]
    fn generate_from_list() {
        let path = list().generate(&SplineCfg::new(1.0, 0.0)).unwrap();
        assert_eq!(path.curves().count(), 3);
        assert_eq!(*path.anchors.last().unwrap(), vector![6.0, 6.0]);
    }
}
