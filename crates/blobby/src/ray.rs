use std::ops::{Range, RangeInclusive};

use glam::Vec3;

use crate::math::point::Point;

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point,
    /// Constructors normalize it, but nothing forbids building a ray by hand with a
    /// direction of any length. Distances along the ray are then in units of `direction`.
    pub direction: Vec3,
    pub bounds: (f32, f32),
}

impl Ray {
    pub fn new(origin: Point, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
            bounds: (0.0, f32::INFINITY),
        }
    }

    pub fn new_with_range(origin: Point, direction: Vec3, range: Range<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
            bounds: (range.start, range.end),
        }
    }

    pub fn range(&self) -> RangeInclusive<f32> {
        self.bounds.0..=self.bounds.1
    }

    pub fn at(&self, t: f32) -> Point {
        if !self.range().contains(&t) {
            crate::error_once!("a ray has been accessed out of bounds");
        }

        self.at_unchecked(t)
    }

    pub fn at_unchecked(&self, t: f32) -> Point {
        self.origin + t * self.direction
    }
}
