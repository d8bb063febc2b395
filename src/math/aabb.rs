use super::{Point2, Vector2};

/// An axis-aligned bounding box.
///
/// All containment and overlap tests include the boundary, so two boxes
/// sharing an edge overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb {
    /// Creates a bounding box from two corners, in any order.
    #[must_use]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Smallest box containing every point, or `None` for an empty input.
    #[must_use]
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point2>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self {
            min: *first,
            max: *first,
        };
        for p in points {
            bounds.min.x = bounds.min.x.min(p.x);
            bounds.min.y = bounds.min.y.min(p.y);
            bounds.max.x = bounds.max.x.max(p.x);
            bounds.max.y = bounds.max.y.max(p.y);
        }
        Some(bounds)
    }

    /// Smallest box containing both boxes.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: Point2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Union over an iterator of boxes, or `None` when it yields nothing.
    #[must_use]
    pub fn union_all(boxes: impl IntoIterator<Item = Self>) -> Option<Self> {
        boxes.into_iter().reduce(|acc, b| acc.union(&b))
    }

    /// Returns this box moved by `delta`.
    #[must_use]
    pub fn translated(&self, delta: &Vector2) -> Self {
        Self {
            min: self.min + *delta,
            max: self.max + *delta,
        }
    }

    /// Left edge.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.min.x
    }

    /// Top edge in screen coordinates, bottom edge in math coordinates.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.min.y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Centre point of the box.
    #[must_use]
    pub fn center(&self) -> Point2 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Returns whether `p` lies inside or on the boundary.
    #[must_use]
    pub fn contains_point(&self, p: &Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Returns whether `other` lies entirely inside this box.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.contains_point(&other.min) && self.contains_point(&other.max)
    }

    /// Returns whether the two boxes share at least one point.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    /// The four boundary edges as `(start, end)` pairs.
    #[must_use]
    pub fn edges(&self) -> [(Point2, Point2); 4] {
        let tl = self.min;
        let tr = Point2::new(self.max.x, self.min.y);
        let br = self.max;
        let bl = Point2::new(self.min.x, self.max.y);
        [(tl, bl), (tl, tr), (tr, br), (bl, br)]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn from_points_empty_is_none() {
        assert!(Aabb::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn from_points_covers_all() {
        let pts = [p(1.0, 5.0), p(-2.0, 3.0), p(4.0, -1.0)];
        let b = Aabb::from_points(&pts).unwrap();
        assert_relative_eq!(b.x(), -2.0);
        assert_relative_eq!(b.y(), -1.0);
        assert_relative_eq!(b.width(), 6.0);
        assert_relative_eq!(b.height(), 6.0);
    }

    #[test]
    fn touching_boxes_intersect() {
        let a = Aabb::new(p(0.0, 0.0), p(1.0, 1.0));
        let b = Aabb::new(p(1.0, 0.0), p(2.0, 1.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn separated_boxes_do_not_intersect() {
        let a = Aabb::new(p(0.0, 0.0), p(1.0, 1.0));
        let b = Aabb::new(p(1.5, 0.0), p(2.0, 1.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn containment() {
        let outer = Aabb::new(p(0.0, 0.0), p(10.0, 10.0));
        let inner = Aabb::new(p(2.0, 2.0), p(10.0, 5.0));
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        assert!(outer.contains_point(&p(10.0, 10.0)));
        assert!(!outer.contains_point(&p(10.1, 10.0)));
    }

    #[test]
    fn union_and_center() {
        let a = Aabb::new(p(0.0, 0.0), p(1.0, 1.0));
        let b = Aabb::new(p(3.0, -1.0), p(4.0, 0.0));
        let u = Aabb::union_all([a, b]).unwrap();
        assert_relative_eq!(u.min.x, 0.0);
        assert_relative_eq!(u.min.y, -1.0);
        assert_relative_eq!(u.max.x, 4.0);
        assert_relative_eq!(u.max.y, 1.0);
        assert_relative_eq!(u.center().x, 2.0);
        assert_relative_eq!(u.center().y, 0.0);
    }
}
