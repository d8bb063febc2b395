use super::Point2;

/// Turn direction of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// The three points lie on one line.
    Colinear,
    /// `p -> q -> r` turns counter-clockwise (math coordinates).
    CounterClockwise,
    /// `p -> q -> r` turns clockwise (math coordinates).
    Clockwise,
}

/// Classifies the triple `p, q, r` by the sign of the cross product
/// `(q - p) x (r - q)`.
///
/// The sign is compared exactly against zero: no tolerance, no division.
#[must_use]
pub fn orientation(p: &Point2, q: &Point2, r: &Point2) -> Orientation {
    let cross = (q.x - p.x) * (r.y - q.y) - (q.y - p.y) * (r.x - q.x);
    if cross > 0.0 {
        Orientation::CounterClockwise
    } else if cross < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Colinear
    }
}

/// Returns whether `q` lies within the bounding rectangle of `p` and `r`.
///
/// Only meaningful when the three points are already known to be colinear.
#[must_use]
pub fn within_span(p: &Point2, q: &Point2, r: &Point2) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn left_turn_is_counter_clockwise() {
        let o = orientation(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, 1.0));
        assert_eq!(o, Orientation::CounterClockwise);
    }

    #[test]
    fn right_turn_is_clockwise() {
        let o = orientation(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, -1.0));
        assert_eq!(o, Orientation::Clockwise);
    }

    #[test]
    fn straight_line_is_colinear() {
        let o = orientation(&p(0.0, 0.0), &p(1.0, 1.0), &p(3.0, 3.0));
        assert_eq!(o, Orientation::Colinear);
    }

    #[test]
    fn span_is_inclusive() {
        assert!(within_span(&p(0.0, 0.0), &p(2.0, 0.0), &p(2.0, 0.0)));
        assert!(within_span(&p(0.0, 0.0), &p(1.0, 0.0), &p(2.0, 0.0)));
        assert!(!within_span(&p(0.0, 0.0), &p(3.0, 0.0), &p(2.0, 0.0)));
    }
}
