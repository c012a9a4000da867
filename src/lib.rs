
pub mod aabb;
pub mod bounds;
pub mod numeric;
pub mod interval;
pub mod json_parser;
pub mod transformations;

pub mod prelude;

pub use aabb::BoundingBox;
