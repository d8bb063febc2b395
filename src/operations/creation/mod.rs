mod make_rectangle;

pub use make_rectangle::MakeRectangle;
