pub mod bounds;
pub mod float;
pub mod point;
