use tracing::{debug, warn};

use crate::config::RotateOptions;
use crate::geometry::HitBox;
use crate::math::normalize_angle;

/// Rotates a hit box about its bounds centre towards a target angle,
/// stopping before the first increment that would overlap an obstacle.
///
/// The walk uses fixed increments of the options' step and does not refine
/// the last one, so the stopping angle is only as precise as the step.
/// Every rotation is taken from the original shape, so rounding does not
/// build up across increments.
pub struct RotateCollide<'a> {
    hit_box: &'a HitBox,
    angle: f64,
    options: &'a RotateOptions,
}

/// Outcome of a [`RotateCollide`] walk.
#[derive(Debug, Clone)]
pub struct Rotation {
    /// The hit box at the last confirmed-safe angle.
    pub hit_box: HitBox,
    /// The angle actually applied, in radians.
    pub angle: f64,
}

impl<'a> RotateCollide<'a> {
    /// Creates a new `RotateCollide` operation.
    ///
    /// * `angle` - Target rotation in radians, reduced modulo a full turn.
    #[must_use]
    pub fn new(hit_box: &'a HitBox, angle: f64, options: &'a RotateOptions) -> Self {
        Self {
            hit_box,
            angle,
            options,
        }
    }

    /// Executes the walk, returning the rotated hit box.
    #[must_use]
    pub fn execute(&self, obstacles: &[HitBox]) -> HitBox {
        self.resolve(obstacles).hit_box
    }

    /// Executes the walk, returning the rotated hit box and the angle applied.
    ///
    /// A hit box that already overlaps an obstacle is not rotated at all.
    #[must_use]
    pub fn resolve(&self, obstacles: &[HitBox]) -> Rotation {
        let unchanged = || Rotation {
            hit_box: self.hit_box.clone(),
            angle: 0.0,
        };

        if overlaps_any(self.hit_box, obstacles) {
            debug!("hit box already overlaps an obstacle, not rotating");
            return unchanged();
        }

        let target = normalize_angle(self.angle);
        let step = self.options.step().copysign(target);
        let mut safe = unchanged();
        let mut steps = 0;
        while safe.angle.abs() < target.abs() {
            if steps == self.options.max_steps() {
                warn!(
                    steps,
                    applied = safe.angle,
                    target,
                    "rotation hit its step limit before reaching the target"
                );
                break;
            }
            let next = if (target - safe.angle).abs() <= step.abs() {
                target
            } else {
                safe.angle + step
            };
            let candidate = self.hit_box.rotate(next);
            if overlaps_any(&candidate, obstacles) {
                debug!(applied = safe.angle, target, "rotation blocked");
                break;
            }
            safe = Rotation {
                hit_box: candidate,
                angle: next,
            };
            steps += 1;
        }
        safe
    }
}

fn overlaps_any(hit_box: &HitBox, obstacles: &[HitBox]) -> bool {
    obstacles.iter().any(|o| hit_box.intersects(o))
}
