// src/geometry/mod.rs
pub mod bounds;
pub mod point;
pub mod segment;

pub use bounds::BoundingBox;
pub use point::Coordinate;
pub use segment::Segment;
