use std::collections::HashSet;

use nalgebra::Rotation2;

use super::Line;
use crate::math::{point_key, Aabb, Point2};

/// An arbitrary set of line segments bounding part of a shape.
///
/// The region does not have to be closed. Duplicate lines collapse to one.
/// End points and bounds are derived once at construction and never go
/// stale, because a region is never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    lines: Vec<Line>,
    points: Vec<Point2>,
    bounds: Option<Aabb>,
}

impl Region {
    /// Creates a region from a set of lines, dropping duplicates.
    #[must_use]
    pub fn new(lines: impl IntoIterator<Item = Line>) -> Self {
        let mut seen = HashSet::new();
        let lines: Vec<Line> = lines
            .into_iter()
            .filter(|line| seen.insert((point_key(&line.start), point_key(&line.end))))
            .collect();

        let mut seen = HashSet::new();
        let points: Vec<Point2> = lines
            .iter()
            .flat_map(|line| [line.start, line.end])
            .filter(|p| seen.insert(point_key(p)))
            .collect();

        let bounds = Aabb::from_points(&points);
        Self {
            lines,
            points,
            bounds,
        }
    }

    /// Lines defining the region.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Distinct end points of the lines.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Outer bounds of the region, or `None` when it has no lines.
    #[must_use]
    pub fn bounds(&self) -> Option<&Aabb> {
        self.bounds.as_ref()
    }

    /// Checks if the point lies within the outer bounds of the region.
    ///
    /// This is a cheap pre-filter, not a point-in-polygon test.
    #[must_use]
    pub fn may_contain_point(&self, point: &Point2) -> bool {
        self.bounds.is_some_and(|b| b.contains_point(point))
    }

    /// Checks if the outer bounds of `other` lie entirely within this region's bounds.
    #[must_use]
    pub fn may_contain(&self, other: &Region) -> bool {
        match (&self.bounds, &other.bounds) {
            (Some(a), Some(b)) => a.contains(b),
            _ => false,
        }
    }

    /// Checks if the outer bounds of the two regions overlap.
    #[must_use]
    pub fn may_intersect(&self, other: &Region) -> bool {
        match (&self.bounds, &other.bounds) {
            (Some(a), Some(b)) => a.intersects(b),
            _ => false,
        }
    }

    /// Checks if `line` touches the outer bounds rectangle, including a line
    /// lying entirely inside it.
    #[must_use]
    pub fn may_intersect_line(&self, line: &Line) -> bool {
        let Some(bounds) = &self.bounds else {
            return false;
        };
        if !bounds.intersects(&line.bounds()) {
            return false;
        }
        if bounds.contains_point(&line.start) || bounds.contains_point(&line.end) {
            return true;
        }
        bounds
            .edges()
            .iter()
            .any(|&(a, b)| line.intersects(&Line::new(a, b)))
    }

    /// Checks if `other` may intersect or may be contained within this region.
    #[must_use]
    pub fn may_overlap(&self, other: &Region) -> bool {
        self.may_intersect(other) || self.may_contain(other)
    }

    /// Checks if `line` intersects any of the lines of this region.
    #[must_use]
    pub fn intersected_by(&self, line: &Line) -> bool {
        self.may_intersect_line(line) && self.lines.iter().any(|own| own.intersects(line))
    }

    /// Checks if any line of `other` intersects any line of this region.
    ///
    /// Pairs whose bounds do not overlap are rejected before any line test.
    #[must_use]
    pub fn intersects(&self, other: &Region) -> bool {
        self.may_intersect(other) && self.lines.iter().any(|line| other.intersected_by(line))
    }

    /// Returns the region moved by `(dx, dy)`.
    #[must_use]
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.lines.iter().map(|line| line.offset(dx, dy)))
    }

    /// Returns the region rotated by `angle` radians about the origin.
    ///
    /// Positive angles are counter-clockwise in math coordinates, which
    /// shows up as clockwise on a screen whose Y axis points down.
    #[must_use]
    pub fn rotate(&self, angle: f64) -> Self {
        self.rotate_about(angle, &Point2::origin())
    }

    /// Returns the region rotated by `angle` radians about `pivot`.
    #[must_use]
    pub fn rotate_about(&self, angle: f64, pivot: &Point2) -> Self {
        let rotation = Rotation2::new(angle);
        Self::new(self.lines.iter().map(|line| line.rotated_by(&rotation, pivot)))
    }
}
