use crate::error::{GeometryError, Result};
use crate::geometry::{Line, Region};

/// Creates a rectangular region from its corner, width and height.
pub struct MakeRectangle {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl MakeRectangle {
    /// Creates a new `MakeRectangle` operation.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Executes the operation, returning the four edges as a region.
    ///
    /// A negative width or height extends the rectangle left of `x` or
    /// above `y`; a zero one collapses it to a line.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] if any input is NaN or infinite.
    pub fn execute(&self) -> Result<Region> {
        for (parameter, value) in [
            ("x", self.x),
            ("y", self.y),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite { parameter, value }.into());
            }
        }

        let (x, y) = (self.x, self.y);
        let x2 = x + self.width;
        let y2 = y + self.height;
        Ok(Region::new([
            Line::from_coords(x, y, x, y2),
            Line::from_coords(x, y, x2, y),
            Line::from_coords(x2, y, x2, y2),
            Line::from_coords(x, y2, x2, y2),
        ]))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::GeoclipError;

    #[test]
    fn rectangle_at_origin_has_exact_bounds() {
        let region = MakeRectangle::new(0.0, 0.0, 30.0, 20.0).execute().unwrap();
        let b = region.bounds().unwrap();
        assert_relative_eq!(b.x(), 0.0);
        assert_relative_eq!(b.y(), 0.0);
        assert_relative_eq!(b.width(), 30.0);
        assert_relative_eq!(b.height(), 20.0);
    }

    #[test]
    fn rectangle_has_four_edges_and_corners() {
        let region = MakeRectangle::new(5.0, 7.0, 2.0, 3.0).execute().unwrap();
        assert_eq!(region.lines().len(), 4);
        assert_eq!(region.points().len(), 4);
        assert!(region.lines().contains(&Line::from_coords(7.0, 7.0, 7.0, 10.0)));
    }

    #[test]
    fn zero_size_collapses_duplicates() {
        let region = MakeRectangle::new(1.0, 1.0, 0.0, 0.0).execute().unwrap();
        assert_eq!(region.lines().len(), 1);
        assert_eq!(region.points().len(), 1);
    }

    #[test]
    fn negative_extent_is_normalised_by_bounds() {
        let region = MakeRectangle::new(10.0, 10.0, -4.0, -6.0).execute().unwrap();
        let b = region.bounds().unwrap();
        assert_relative_eq!(b.x(), 6.0);
        assert_relative_eq!(b.y(), 4.0);
        assert_relative_eq!(b.width(), 4.0);
        assert_relative_eq!(b.height(), 6.0);
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let result = MakeRectangle::new(0.0, 0.0, f64::INFINITY, 1.0).execute();
        assert!(matches!(
            result,
            Err(GeoclipError::Geometry(GeometryError::NonFinite { parameter: "width", .. }))
        ));
        assert!(MakeRectangle::new(f64::NAN, 0.0, 1.0, 1.0).execute().is_err());
    }
}
