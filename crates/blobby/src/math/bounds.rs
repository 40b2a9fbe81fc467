use glam::Vec3;

use super::point::Point;

/// Axis Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub origin: Point,
    /// Should have all coordinates >= 0
    pub diag: Vec3,
}

impl Bounds {
    /// A box reduced to the origin, used for shapes that have no extent
    pub const EMPTY: Bounds = Bounds {
        origin: Point::ORIGIN,
        diag: Vec3::ZERO,
    };

    pub fn from_points(a: Point, b: Point) -> Self {
        let origin = a.min(b);
        let end = a.max(b);

        Self {
            origin,
            diag: end - origin,
        }
    }

    pub fn end(&self) -> Point {
        self.origin + self.diag
    }

    /// Points on the faces are contained
    pub fn contains(&self, point: Point) -> bool {
        self.origin.vec().cmple(point.vec()).all() && point.vec().cmple(self.end().vec()).all()
    }

    /// Smallest box containing both boxes
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds::from_points(self.origin.min(other.origin), self.end().max(other.end()))
    }

    /// Grows the box by `amount` in every direction
    pub fn grow(&self, amount: f32) -> Bounds {
        Bounds::from_points(
            self.origin - Vec3::splat(amount),
            self.end() + Vec3::splat(amount),
        )
    }
}
