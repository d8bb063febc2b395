use crate::error::{ConfigError, Result};

/// Tuning for [`HitBox::collide`](crate::geometry::HitBox::collide).
///
/// Built through [`CollideOptions::new`] so that the resolver itself never
/// has to reject its input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollideOptions {
    margin: f64,
    slide: Option<f64>,
    max_halvings: u32,
}

impl CollideOptions {
    /// Bisection stops once the tested step is no longer than this.
    pub const DEFAULT_MARGIN: f64 = 0.5;
    /// Upper bound on halvings per search, whatever the margin.
    pub const DEFAULT_MAX_HALVINGS: u32 = 64;

    /// Creates options with the given error margin and no sliding.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositive`] if `margin` is not a positive finite number.
    pub fn new(margin: f64) -> Result<Self> {
        Ok(Self {
            margin: positive("margin", margin)?,
            slide: None,
            max_halvings: Self::DEFAULT_MAX_HALVINGS,
        })
    }

    /// Enables sliding along each axis after a blocked move.
    ///
    /// `friction` is the share of the blocked distance attempted as slide:
    /// `1.0` tries all of it, `0.0` none.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OutOfRange`] if `friction` is outside `[0, 1]`.
    pub fn with_slide(mut self, friction: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&friction) {
            return Err(ConfigError::OutOfRange {
                parameter: "friction",
                value: friction,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }
        self.slide = Some(friction);
        Ok(self)
    }

    /// Caps the number of halvings of each bisection.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroLimit`] if `max_halvings` is zero.
    pub fn with_max_halvings(mut self, max_halvings: u32) -> Result<Self> {
        if max_halvings == 0 {
            return Err(ConfigError::ZeroLimit("max_halvings").into());
        }
        self.max_halvings = max_halvings;
        Ok(self)
    }

    #[must_use]
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Friction when sliding is enabled.
    #[must_use]
    pub fn slide(&self) -> Option<f64> {
        self.slide
    }

    #[must_use]
    pub fn max_halvings(&self) -> u32 {
        self.max_halvings
    }
}

impl Default for CollideOptions {
    fn default() -> Self {
        Self {
            margin: Self::DEFAULT_MARGIN,
            slide: None,
            max_halvings: Self::DEFAULT_MAX_HALVINGS,
        }
    }
}

/// Tuning for [`HitBox::rotate_collide`](crate::geometry::HitBox::rotate_collide).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotateOptions {
    step: f64,
    max_steps: u32,
}

impl RotateOptions {
    /// Default angular increment in radians.
    pub const DEFAULT_STEP: f64 = 0.05;
    /// Upper bound on increments per call, whatever the step.
    pub const DEFAULT_MAX_STEPS: u32 = 10_000;

    /// Creates options with the given angular increment in radians.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositive`] if `step` is not a positive finite number.
    pub fn new(step: f64) -> Result<Self> {
        Ok(Self {
            step: positive("step", step)?,
            max_steps: Self::DEFAULT_MAX_STEPS,
        })
    }

    /// Caps the number of increments per call.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroLimit`] if `max_steps` is zero.
    pub fn with_max_steps(mut self, max_steps: u32) -> Result<Self> {
        if max_steps == 0 {
            return Err(ConfigError::ZeroLimit("max_steps").into());
        }
        self.max_steps = max_steps;
        Ok(self)
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }
}

impl Default for RotateOptions {
    fn default() -> Self {
        Self {
            step: Self::DEFAULT_STEP,
            max_steps: Self::DEFAULT_MAX_STEPS,
        }
    }
}

fn positive(parameter: &'static str, value: f64) -> std::result::Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositive { parameter, value })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GeoclipError;

    #[test]
    fn defaults() {
        let c = CollideOptions::default();
        assert!((c.margin() - 0.5).abs() < f64::EPSILON);
        assert!(c.slide().is_none());
        assert_eq!(c.max_halvings(), 64);

        let r = RotateOptions::default();
        assert!((r.step() - 0.05).abs() < f64::EPSILON);
        assert_eq!(r.max_steps(), 10_000);
    }

    #[test]
    fn margin_must_be_positive() {
        assert!(CollideOptions::new(0.0).is_err());
        assert!(CollideOptions::new(-1.0).is_err());
        assert!(CollideOptions::new(f64::NAN).is_err());
        assert!(CollideOptions::new(f64::INFINITY).is_err());
        assert!(matches!(
            CollideOptions::new(0.0),
            Err(GeoclipError::Config(ConfigError::NonPositive { parameter: "margin", .. }))
        ));
    }

    #[test]
    fn friction_range() {
        let base = CollideOptions::new(0.1).unwrap();
        assert_eq!(base.with_slide(0.25).unwrap().slide(), Some(0.25));
        assert!(base.with_slide(0.0).is_ok());
        assert!(base.with_slide(1.5).is_err());
        assert!(base.with_slide(-0.1).is_err());
        assert!(base.with_slide(f64::NAN).is_err());
    }

    #[test]
    fn limits_must_be_non_zero() {
        assert!(CollideOptions::default().with_max_halvings(0).is_err());
        assert!(RotateOptions::default().with_max_steps(0).is_err());
        assert_eq!(RotateOptions::default().with_max_steps(3).unwrap().max_steps(), 3);
    }

    #[test]
    fn step_must_be_positive() {
        assert!(RotateOptions::new(0.0).is_err());
        assert!(RotateOptions::new(0.01).is_ok());
    }
}
