use super::{Line, Region};
use crate::config::{CollideOptions, RotateOptions};
use crate::math::{Aabb, Point2, Vector2};
use crate::operations::resolve::{Collide, RotateCollide};

/// The collision shape of one object, made up of one or more regions.
///
/// A hit box is a value: [`offset`](Self::offset) and
/// [`rotate`](Self::rotate) return new hit boxes and leave the receiver
/// untouched. Hit boxes compared against each other are assumed to share
/// one coordinate frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HitBox {
    regions: Vec<Region>,
    bounds: Option<Aabb>,
}

impl HitBox {
    /// Creates a hit box from a set of regions.
    #[must_use]
    pub fn new(regions: impl IntoIterator<Item = Region>) -> Self {
        let regions: Vec<Region> = regions.into_iter().collect();
        let bounds = Aabb::union_all(regions.iter().filter_map(|r| r.bounds().copied()));
        Self { regions, bounds }
    }

    /// The regions that make up the hit box.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Union of all region bounds, or `None` when no region has any lines.
    #[must_use]
    pub fn bounds(&self) -> Option<&Aabb> {
        self.bounds.as_ref()
    }

    /// Every boundary line of every region.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.regions.iter().flat_map(|r| r.lines().iter())
    }

    /// Every distinct end point of every region.
    pub fn points(&self) -> impl Iterator<Item = &Point2> {
        self.regions.iter().flat_map(|r| r.points().iter())
    }

    /// Checks whether any region of this hit box intersects any region of `other`.
    #[must_use]
    pub fn intersects(&self, other: &HitBox) -> bool {
        self.regions
            .iter()
            .any(|own| other.regions.iter().any(|theirs| own.intersects(theirs)))
    }

    /// Checks whether the paths of this hit box's points, moved by `(dx, dy)`,
    /// cross any boundary line of `other`.
    ///
    /// On its own this can miss `other` clipping into this hit box; see
    /// [`will_clip`](Self::will_clip).
    #[must_use]
    pub fn clips_through(&self, other: &HitBox, dx: f64, dy: f64) -> bool {
        let delta = Vector2::new(dx, dy);
        self.points().any(|p| {
            let sweep = Line::new(*p, *p + delta);
            other.regions.iter().any(|region| region.intersected_by(&sweep))
        })
    }

    /// Checks whether moving this hit box by `(dx, dy)` makes it overlap `other`.
    ///
    /// Point paths are swept in both directions: this hit box's points
    /// against `other`'s lines, and `other`'s points moved by `(-dx, -dy)`
    /// against this hit box's lines. The overlap at the destination is
    /// also tested, so a zero move reduces to [`intersects`](Self::intersects).
    #[must_use]
    pub fn will_clip(&self, other: &HitBox, dx: f64, dy: f64) -> bool {
        let (Some(own), Some(theirs)) = (&self.bounds, &other.bounds) else {
            return false;
        };
        let swept = own.union(&own.translated(&Vector2::new(dx, dy)));
        if !swept.intersects(theirs) {
            return false;
        }
        self.clips_through(other, dx, dy)
            || other.clips_through(self, -dx, -dy)
            || self.offset(dx, dy).intersects(other)
    }

    /// Returns the hit boxes that moving by `(dx, dy)` would clip into.
    #[must_use]
    pub fn get_collisions<'a>(&self, hit_boxes: &'a [HitBox], dx: f64, dy: f64) -> Vec<&'a HitBox> {
        hit_boxes
            .iter()
            .filter(|other| self.will_clip(other, dx, dy))
            .collect()
    }

    /// Checks whether moving by `(dx, dy)` clips into any of `hit_boxes`.
    #[must_use]
    pub fn collides_with_any(&self, hit_boxes: &[HitBox], dx: f64, dy: f64) -> bool {
        hit_boxes.iter().any(|other| self.will_clip(other, dx, dy))
    }

    /// Resolves a proposed move against `hit_boxes`.
    ///
    /// Returns the largest movement along `(dx, dy)` that does not clip,
    /// found by bisection to within the options' margin, plus an optional
    /// slide along each axis. The hit box itself is not moved; apply the
    /// result with [`offset`](Self::offset).
    #[must_use]
    pub fn collide(
        &self,
        hit_boxes: &[HitBox],
        dx: f64,
        dy: f64,
        options: &CollideOptions,
    ) -> (f64, f64) {
        Collide::new(self, dx, dy, options).execute(hit_boxes)
    }

    /// Rotates towards `angle` in fixed steps, stopping before the first
    /// step that would overlap one of `hit_boxes`.
    ///
    /// A hit box that already overlaps an obstacle is returned unchanged.
    #[must_use]
    pub fn rotate_collide(&self, hit_boxes: &[HitBox], angle: f64, options: &RotateOptions) -> HitBox {
        RotateCollide::new(self, angle, options).execute(hit_boxes)
    }

    /// Returns the hit box moved by `(dx, dy)`, without collision checks.
    #[must_use]
    pub fn offset(&self, dx: f64, dy: f64) -> HitBox {
        HitBox::new(self.regions.iter().map(|r| r.offset(dx, dy)))
    }

    /// Returns the hit box rotated by `angle` radians about the centre of its
    /// bounds, without collision checks.
    ///
    /// Positive angles are counter-clockwise with +Y up; on a screen with +Y
    /// down they appear clockwise. The sign is not adjusted for either frame.
    #[must_use]
    pub fn rotate(&self, angle: f64) -> HitBox {
        match &self.bounds {
            Some(bounds) => self.rotate_about(angle, &bounds.center()),
            None => self.clone(),
        }
    }

    /// Returns the hit box rotated by `angle` radians about `pivot`.
    #[must_use]
    pub fn rotate_about(&self, angle: f64, pivot: &Point2) -> HitBox {
        HitBox::new(self.regions.iter().map(|r| r.rotate_about(angle, pivot)))
    }
}
