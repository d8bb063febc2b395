pub mod creation;
pub mod resolve;
