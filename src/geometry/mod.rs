mod hit_box;
mod line;
mod region;

pub use hit_box::HitBox;
pub use line::Line;
pub use region::Region;
