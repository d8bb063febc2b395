use slotmap::SlotMap;
use tracing::debug;

use crate::config::{CollideOptions, RotateOptions};
use crate::error::{Result, SceneError};
use crate::geometry::HitBox;

slotmap::new_key_type! {
    /// Unique identifier for a hit box in a scene.
    pub struct HitBoxId;
}

/// An arena of hit boxes that are resolved against each other.
///
/// Every query treats all *other* hit boxes in the scene as obstacles. The
/// scene only stores shapes; the geometry itself stays free of any notion
/// of a world.
#[derive(Debug, Default)]
pub struct Scene {
    hit_boxes: SlotMap<HitBoxId, HitBox>,
}

impl Scene {
    /// Creates a new, empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a hit box and returns its ID.
    pub fn insert(&mut self, hit_box: HitBox) -> HitBoxId {
        self.hit_boxes.insert(hit_box)
    }

    /// Removes a hit box, returning it if it was present.
    pub fn remove(&mut self, id: HitBoxId) -> Option<HitBox> {
        self.hit_boxes.remove(id)
    }

    /// Returns a reference to the hit box, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::HitBoxNotFound`] if the ID is not in the scene.
    pub fn get(&self, id: HitBoxId) -> Result<&HitBox> {
        self.hit_boxes
            .get(id)
            .ok_or_else(|| SceneError::HitBoxNotFound.into())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hit_boxes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hit_boxes.is_empty()
    }

    /// Iterates over every hit box with its ID.
    pub fn iter(&self) -> impl Iterator<Item = (HitBoxId, &HitBox)> {
        self.hit_boxes.iter()
    }

    /// Returns the IDs of the hit boxes that moving `id` by `(dx, dy)` would clip.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::HitBoxNotFound`] if the ID is not in the scene.
    pub fn collisions(&self, id: HitBoxId, dx: f64, dy: f64) -> Result<Vec<HitBoxId>> {
        let mover = self.get(id)?;
        Ok(self
            .hit_boxes
            .iter()
            .filter(|&(other_id, other)| other_id != id && mover.will_clip(other, dx, dy))
            .map(|(other_id, _)| other_id)
            .collect())
    }

    /// Moves a hit box as far as it can towards `(dx, dy)` and returns the
    /// movement applied.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::HitBoxNotFound`] if the ID is not in the scene.
    pub fn move_by(
        &mut self,
        id: HitBoxId,
        dx: f64,
        dy: f64,
        options: &CollideOptions,
    ) -> Result<(f64, f64)> {
        let obstacles = self.obstacles(id);
        let mover = self.get(id)?;
        let (safe_dx, safe_dy) = mover.collide(&obstacles, dx, dy, options);
        let moved = mover.offset(safe_dx, safe_dy);
        debug!(?id, safe_dx, safe_dy, "moved hit box");
        self.replace(id, moved)?;
        Ok((safe_dx, safe_dy))
    }

    /// Rotates a hit box as far as it can towards `angle`.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::HitBoxNotFound`] if the ID is not in the scene.
    pub fn rotate_by(&mut self, id: HitBoxId, angle: f64, options: &RotateOptions) -> Result<()> {
        let obstacles = self.obstacles(id);
        let rotated = self.get(id)?.rotate_collide(&obstacles, angle, options);
        self.replace(id, rotated)
    }

    fn obstacles(&self, id: HitBoxId) -> Vec<HitBox> {
        self.hit_boxes
            .iter()
            .filter(|&(other_id, _)| other_id != id)
            .map(|(_, hit_box)| hit_box.clone())
            .collect()
    }

    fn replace(&mut self, id: HitBoxId, hit_box: HitBox) -> Result<()> {
        let slot = self
            .hit_boxes
            .get_mut(id)
            .ok_or(SceneError::HitBoxNotFound)?;
        *slot = hit_box;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::GeoclipError;
    use crate::operations::creation::MakeRectangle;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> HitBox {
        HitBox::new([MakeRectangle::new(x, y, w, h).execute().unwrap()])
    }

    #[test]
    fn insert_get_remove() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());
        let id = scene.insert(rect(0.0, 0.0, 1.0, 1.0));
        assert_eq!(scene.len(), 1);
        assert!(scene.get(id).is_ok());
        assert!(scene.remove(id).is_some());
        assert!(matches!(
            scene.get(id),
            Err(GeoclipError::Scene(SceneError::HitBoxNotFound))
        ));
    }

    #[test]
    fn mover_is_not_its_own_obstacle() {
        let mut scene = Scene::new();
        let id = scene.insert(rect(10.0, 10.0, 10.0, 10.0));
        let options = CollideOptions::default();
        let (dx, dy) = scene.move_by(id, 5.0, 5.0, &options).unwrap();
        assert_relative_eq!(dx, 5.0);
        assert_relative_eq!(dy, 5.0);
        assert_relative_eq!(scene.get(id).unwrap().bounds().unwrap().x(), 15.0);
    }

    #[test]
    fn movers_stay_inside_walls() {
        let mut scene = Scene::new();
        let walls = scene.insert(rect(0.0, 0.0, 500.0, 500.0));
        let player = scene.insert(rect(50.0, 50.0, 50.0, 50.0));
        let options = CollideOptions::new(0.5).unwrap().with_slide(1.0).unwrap();

        for _ in 0..10 {
            scene.move_by(player, -60.0, 0.0, &options).unwrap();
        }
        let b = *scene.get(player).unwrap().bounds().unwrap();
        assert!(b.x() > 0.0 && b.x() < 1.0, "x={}", b.x());
        assert!(!scene.get(player).unwrap().intersects(scene.get(walls).unwrap()));
    }

    #[test]
    fn collisions_reports_other_ids() {
        let mut scene = Scene::new();
        let mover = scene.insert(rect(0.0, 0.0, 10.0, 10.0));
        let near = scene.insert(rect(20.0, 0.0, 10.0, 10.0));
        let _far = scene.insert(rect(200.0, 0.0, 10.0, 10.0));
        assert_eq!(scene.collisions(mover, 15.0, 0.0).unwrap(), vec![near]);
        assert!(scene.collisions(mover, 5.0, 0.0).unwrap().is_empty());
    }

    #[test]
    fn rotation_blocked_by_neighbour() {
        let mut scene = Scene::new();
        let bar = scene.insert(rect(0.0, 45.0, 100.0, 10.0));
        let _post = scene.insert(rect(60.0, 70.0, 10.0, 10.0));
        let before = scene.get(bar).unwrap().clone();
        let options = RotateOptions::new(0.05).unwrap();
        scene.rotate_by(bar, 1.0, &options).unwrap();
        let after = scene.get(bar).unwrap();
        assert_ne!(after, &before);
        assert_ne!(after, &before.rotate(1.0));
    }

    #[test]
    fn unknown_id_is_an_error() {
        let mut scene = Scene::new();
        let id = scene.insert(rect(0.0, 0.0, 1.0, 1.0));
        scene.remove(id);
        assert!(scene.move_by(id, 1.0, 0.0, &CollideOptions::default()).is_err());
        assert!(scene.rotate_by(id, 1.0, &RotateOptions::default()).is_err());
        assert!(scene.collisions(id, 1.0, 0.0).is_err());
    }
}
