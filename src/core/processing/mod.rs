pub mod comic;
pub mod enhance;
pub mod geometry;
pub mod ops;
pub mod resize;
pub mod slides;
pub mod squares;
