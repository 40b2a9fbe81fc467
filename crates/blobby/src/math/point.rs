use std::ops::{Add, Sub};

use glam::Vec3;

/// A position in space.
///
/// Kept apart from [Vec3] so that positions and displacements cannot be mixed up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point(pub Vec3);

impl Point {
    pub const ORIGIN: Point = Point(Vec3::ZERO);

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    pub fn vec(self) -> Vec3 {
        self.0
    }

    pub fn distance_squared(self, other: Point) -> f32 {
        (self - other).length_squared()
    }

    /// Component-wise minimum
    pub fn min(self, other: Point) -> Point {
        Point(self.0.min(other.0))
    }

    /// Component-wise maximum
    pub fn max(self, other: Point) -> Point {
        Point(self.0.max(other.0))
    }
}

impl From<Vec3> for Point {
    fn from(v: Vec3) -> Self {
        Point(v)
    }
}

impl Add<Vec3> for Point {
    type Output = Self;

    fn add(self, rhs: Vec3) -> Self::Output {
        Point(self.vec() + rhs)
    }
}

impl Sub<Vec3> for Point {
    type Output = Self;

    fn sub(self, rhs: Vec3) -> Self::Output {
        Point(self.vec() - rhs)
    }
}

/// We can sub two points but not add them
impl Sub for Point {
    type Output = Vec3;

    fn sub(self, rhs: Self) -> Self::Output {
        self.vec() - rhs.vec()
    }
}
