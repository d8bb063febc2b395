//! 2D hit-box collision detection and resolution.
//!
//! Shapes are [`HitBox`]es made of [`Region`]s, which are sets of [`Line`]
//! segments. The engine answers whether two hit boxes overlap, whether a
//! move would make them overlap, and how far a move or rotation can go
//! before it does.
//!
//! ```
//! use geoclip::{CollideOptions, HitBox, MakeRectangle};
//!
//! # fn main() -> geoclip::Result<()> {
//! let walls = HitBox::new([MakeRectangle::new(0.0, 0.0, 500.0, 500.0).execute()?]);
//! let player = HitBox::new([MakeRectangle::new(50.0, 50.0, 50.0, 50.0).execute()?]);
//!
//! let options = CollideOptions::new(0.5)?.with_slide(1.0)?;
//! let (dx, dy) = player.collide(&[walls], -60.0, 0.0, &options);
//! let player = player.offset(dx, dy);
//! assert!(player.bounds().is_some_and(|b| b.x() > 0.0));
//! # Ok(())
//! # }
//! ```
//!
//! Rotation follows the usual math convention: positive angles turn
//! counter-clockwise when +Y points up. With screen coordinates (+Y down)
//! the same angle turns clockwise on screen.

pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod scene;

pub use config::{CollideOptions, RotateOptions};
pub use error::{GeoclipError, Result};
pub use geometry::{HitBox, Line, Region};
pub use operations::creation::MakeRectangle;
pub use scene::{HitBoxId, Scene};
