use nalgebra::Rotation2;

use crate::math::orientation::within_span;
use crate::math::{orientation, Aabb, Orientation, Point2, Vector2};

/// A closed line segment between two points.
///
/// Lines carry no identity beyond their coordinates: two lines with equal
/// endpoints are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// One of the end points.
    pub start: Point2,
    /// The other end point.
    pub end: Point2,
}

impl Line {
    /// Creates a new line segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Creates a new line segment from raw coordinates.
    #[must_use]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.start, &self.end)
    }

    /// Bounding rectangle of the two end points.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.start, self.end)
    }

    /// Checks whether the two closed segments share at least one point.
    ///
    /// Crossings, T-junctions, shared end points and colinear overlaps all
    /// count. Only orientation signs are compared, so parallel and colinear
    /// segments need no special casing.
    #[must_use]
    pub fn intersects(&self, other: &Line) -> bool {
        let (p1, q1) = (&self.start, &self.end);
        let (p2, q2) = (&other.start, &other.end);

        let o1 = orientation(p1, q1, p2);
        let o2 = orientation(p1, q1, q2);
        let o3 = orientation(p2, q2, p1);
        let o4 = orientation(p2, q2, q1);

        let mixed = |a: Orientation, b: Orientation| {
            a != b && a != Orientation::Colinear && b != Orientation::Colinear
        };
        if mixed(o1, o2) && mixed(o3, o4) {
            return true;
        }

        (o1 == Orientation::Colinear && within_span(p1, p2, q1))
            || (o2 == Orientation::Colinear && within_span(p1, q2, q1))
            || (o3 == Orientation::Colinear && within_span(p2, p1, q2))
            || (o4 == Orientation::Colinear && within_span(p2, q1, q2))
    }

    /// Returns this line moved by `(dx, dy)`.
    #[must_use]
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        let delta = Vector2::new(dx, dy);
        Self::new(self.start + delta, self.end + delta)
    }

    /// Returns this line rotated by `angle` radians about `pivot`.
    ///
    /// Positive angles turn counter-clockwise when +Y points up. In screen
    /// coordinates (+Y down) the same angle appears clockwise.
    #[must_use]
    pub fn rotate_about(&self, angle: f64, pivot: &Point2) -> Self {
        self.rotated_by(&Rotation2::new(angle), pivot)
    }

    pub(crate) fn rotated_by(&self, rotation: &Rotation2<f64>, pivot: &Point2) -> Self {
        let turn = |p: &Point2| *pivot + *rotation * (*p - *pivot);
        Self::new(turn(&self.start), turn(&self.end))
    }
}
