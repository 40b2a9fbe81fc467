//! Contains the objects that are meant to be rendered.
//!
//! The only concrete shape is the [blob::BlobShape], an implicit surface
//! defined as an isosurface of the field generated by a set of point sources.
//! Unlike generic implicit surfaces, its intersection does not require an
//! iterative optimization process: the field is approximated piecewise so that
//! each piece can be solved analytically. See [blob] for details.

pub mod blob;

use crate::{math::bounds::Bounds, ray::Ray};

/// An abstracted shape to be rendered by raytracing.
///
/// To render a shape we only need to know whether a ray intersect it and if so,
///  some information about the shape at the intersection point
pub trait Shape: Sync + Send {
    /// Check whether `ray` intersect the shape defined by `self` if so, gives all the information needed
    ///
    /// Only hits inside `ray.bounds` are reported.
    fn intersection_full(&self, ray: Ray) -> FullIntersectionResult;

    /// Check whether `ray` intersect the shape defined by `self` if so, return the minimal amount of information
    /// It is often used to cast shadow rays
    fn intersect_bare(&self, ray: Ray) -> MinIntersectionResult;

    /// Returns the bounding box of the shape
    fn bounding_box(&self) -> Bounds;
}

pub mod local_info {
    use crate::{material::MaterialId, math::point::Point};
    use glam::Vec3;

    /// Contains all the local information that could be needed
    ///
    /// Note that all the information is computed. If not all information is needed, prefer other kinds of local_info.
    #[derive(Debug)]
    pub struct Full {
        pub pos: Point,
        /// Unit length, pointing outwards
        pub normal: Vec3,
        pub material: MaterialId,
    }

    /// Contains only the pure geometrical information needed to locate the point.
    #[derive(Debug)]
    pub struct Minimum {
        pub pos: Point,
    }
}

/// Holds local informations and the time of a colision between a ray and a shape.
#[derive(Debug)]
pub struct RayIntersection<LocalInfo> {
    pub t: f32,
    pub local_info: LocalInfo,
}

/// A `Result`-like type that takes care of intersections data.
#[derive(Debug)]
pub enum IntersectionResult<LocalInfo> {
    Intersection(RayIntersection<LocalInfo>),
    NoIntersection,
}

impl<T> IntersectionResult<T> {
    pub fn is_intersection(&self) -> bool {
        matches!(self, Self::Intersection(_))
    }

    pub fn t(&self) -> Option<f32> {
        match self {
            Self::Intersection(i) => Some(i.t),
            Self::NoIntersection => None,
        }
    }

    /// Keeps the closest of the two intersections
    pub fn min(self, other: Self) -> Self {
        let Self::Intersection(RayIntersection { t: t1, .. }) = self else {
            return other;
        };
        let Self::Intersection(RayIntersection { t: t2, .. }) = other else {
            return self;
        };

        if t1 < t2 {
            self
        } else {
            other
        }
    }
}

pub type MinIntersectionResult = IntersectionResult<local_info::Minimum>;
pub type FullIntersectionResult = IntersectionResult<local_info::Full>;
