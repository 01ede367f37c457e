pub mod bounding;

pub use bounding::BoundingBox;
