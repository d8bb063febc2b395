use tracing::{debug, trace, warn};

use crate::config::CollideOptions;
use crate::geometry::HitBox;
use crate::math::Vector2;

/// Resolves a proposed move of a hit box against a set of obstacles.
///
/// The movement magnitude is narrowed by bisection along the requested
/// direction: a half step is tried on top of the safe movement found so
/// far, kept if it does not clip, and halved until it is no longer than the
/// margin. The result may stop short of the true boundary by up to about
/// twice the margin, and never reaches it, because touching counts as a
/// collision. With sliding enabled, the blocked remainder of each axis is
/// then bisected separately so that the hit box can slide along a wall.
pub struct Collide<'a> {
    hit_box: &'a HitBox,
    delta: Vector2,
    options: &'a CollideOptions,
}

impl<'a> Collide<'a> {
    /// Creates a new `Collide` operation.
    #[must_use]
    pub fn new(hit_box: &'a HitBox, dx: f64, dy: f64, options: &'a CollideOptions) -> Self {
        Self {
            hit_box,
            delta: Vector2::new(dx, dy),
            options,
        }
    }

    /// Executes the resolution, returning the safe `(dx, dy)`.
    ///
    /// Never fails: when every tested step collides the result degrades to
    /// `(0, 0)`.
    #[must_use]
    pub fn execute(&self, obstacles: &[HitBox]) -> (f64, f64) {
        let delta = self.delta;
        if !self.clips(obstacles, &delta) {
            trace!(dx = delta.x, dy = delta.y, "move is clear");
            return (delta.x, delta.y);
        }

        let mut safe = self.bisect(obstacles, Vector2::zeros(), delta / 2.0);

        if let Some(friction) = self.options.slide() {
            let slide_x = Vector2::new(friction * (delta.x - safe.x), 0.0);
            safe += self.extend(obstacles, safe, slide_x);
            let slide_y = Vector2::new(0.0, friction * (delta.y - safe.y));
            safe += self.extend(obstacles, safe, slide_y);
        }

        debug!(
            dx = delta.x,
            dy = delta.y,
            safe_dx = safe.x,
            safe_dy = safe.y,
            "move blocked"
        );
        (safe.x, safe.y)
    }

    /// Extends `base` by as much of `range` as is clear: all of it if the
    /// full range does not clip, otherwise a bisected share.
    fn extend(&self, obstacles: &[HitBox], base: Vector2, range: Vector2) -> Vector2 {
        if range.norm() <= 0.0 {
            return Vector2::zeros();
        }
        if !self.clips(obstacles, &(base + range)) {
            return range;
        }
        self.bisect(obstacles, base, range / 2.0)
    }

    /// Accumulates halving steps on top of `base`, keeping each one that
    /// does not clip. Returns only the accumulated extension, which never
    /// exceeds twice the initial `step`.
    fn bisect(&self, obstacles: &[HitBox], base: Vector2, mut step: Vector2) -> Vector2 {
        let margin = self.options.margin();
        let mut gained = Vector2::zeros();
        let mut halvings = 0;
        while step.norm() > margin {
            if halvings == self.options.max_halvings() {
                warn!(
                    halvings,
                    margin,
                    step = step.norm(),
                    "bisection hit its halving limit before reaching the margin"
                );
                break;
            }
            let candidate = base + gained + step;
            if !self.clips(obstacles, &candidate) {
                gained += step;
            }
            trace!(step = step.norm(), gained = gained.norm(), "bisection step");
            step /= 2.0;
            halvings += 1;
        }
        gained
    }

    fn clips(&self, obstacles: &[HitBox], delta: &Vector2) -> bool {
        self.hit_box.collides_with_any(obstacles, delta.x, delta.y)
    }
}
