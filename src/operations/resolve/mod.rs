mod collide;
mod rotate_collide;

pub use collide::Collide;
pub use rotate_collide::{RotateCollide, Rotation};
