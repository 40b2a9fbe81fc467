//! Implicit surfaces made of point sources ("blobs" or metaballs) and the
//! machinery needed to trace rays against them.
//!
//! The intersection engine lives in [shape::blob]. Everything else is the
//! small amount of ray tracer plumbing it needs to be used and tested.

pub mod aggregate;
pub mod material;
pub mod math;
pub mod ray;
pub mod scene;
pub mod shape;
pub mod utils;
