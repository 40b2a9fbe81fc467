//! Blobs (a.k.a. metaballs).
//!
//! A blob is a set of point sources sharing a size `R`. Each source creates a
//! field `R² / dist²` and the surface of the blob is where the sum of the
//! fields equals [ISO_THRESHOLD]. A lone source therefore looks like a sphere
//! of radius `R`; close sources melt into each other.
//!
//! There is no closed form for the intersection of a ray with such a surface.
//! Instead of marching along the ray, the field is approximated per zone (see
//! [ZoneTable]) so that it can be solved analytically, see [intersect].
//! Normals come from the exact field, see [gradient].

mod field;
mod solver;
mod zones;

use std::{cell::RefCell, sync::Arc};

use anyhow::{ensure, Result};

pub use field::{gradient, potential};
pub use solver::{intersect, PolyBuffer, ISO_THRESHOLD, MIN_HIT_DISTANCE};
pub use zones::{Zone, ZoneTable, ZONE_COUNT};

use crate::{
    material::MaterialId,
    math::{bounds::Bounds, point::Point},
    ray::Ray,
};

use super::{
    local_info, FullIntersectionResult, IntersectionResult, MinIntersectionResult,
    RayIntersection, Shape,
};

#[derive(Debug, Clone)]
pub struct Blob {
    /// The sources, all equally potent
    pub centers: Vec<Point>,
    /// Radius of the surface around an isolated source
    pub size: f32,
    /// `1 / size²`, kept around because the solver uses it a lot
    pub inv_size_square: f32,
    pub material: MaterialId,
}

impl Blob {
    pub fn new(centers: Vec<Point>, size: f32, material: MaterialId) -> Result<Self> {
        ensure!(
            size.is_finite() && size > 0.0,
            "blob size must be positive and finite, got {size}"
        );
        ensure!(!centers.is_empty(), "a blob needs at least one source");

        Ok(Self {
            centers,
            size,
            inv_size_square: 1.0 / (size * size),
            material,
        })
    }

    /// Box containing every shell of every source
    pub fn bounding_box(&self, zones: &ZoneTable) -> Bounds {
        let mut centers = self.centers.iter().copied();
        // `centers` is public, it may have been emptied after construction
        let Some(first) = centers.next() else {
            return Bounds::EMPTY;
        };
        let (min, max) = centers.fold((first, first), |(min, max), c| (min.min(c), max.max(c)));

        Bounds::from_points(min, max).grow(self.size * zones.influence_radius_factor())
    }
}

thread_local! {
    static SCRATCH: RefCell<PolyBuffer> = RefCell::new(PolyBuffer::new());
}

/// A [Blob] that can be inserted in a scene
pub struct BlobShape {
    pub blob: Blob,
    pub zones: Arc<ZoneTable>,
}

impl BlobShape {
    /// Closest crossing inside `ray.bounds`.
    ///
    /// The solver only looks ahead of the origin of the ray, so the ray is
    /// restarted at the beginning of its range.
    fn closest_hit(&self, ray: &Ray) -> Option<f32> {
        let (start, end) = ray.bounds;
        let from_start = Ray {
            origin: ray.at_unchecked(start),
            direction: ray.direction,
            bounds: (0.0, end - start),
        };

        let mut t = end - start;
        let hit = SCRATCH.with(|buffer| {
            intersect(
                &self.zones,
                &from_start,
                &self.blob,
                &mut buffer.borrow_mut(),
                &mut t,
            )
        });

        hit.then_some(start + t)
    }
}

impl Shape for BlobShape {
    fn intersection_full(&self, ray: Ray) -> FullIntersectionResult {
        let Some(t) = self.closest_hit(&ray) else {
            return IntersectionResult::NoIntersection;
        };

        let pos = ray.at(t);
        IntersectionResult::Intersection(RayIntersection {
            t,
            local_info: local_info::Full {
                pos,
                normal: gradient(pos, &self.blob).normalize_or_zero(),
                material: self.blob.material,
            },
        })
    }

    fn intersect_bare(&self, ray: Ray) -> MinIntersectionResult {
        let Some(t) = self.closest_hit(&ray) else {
            return IntersectionResult::NoIntersection;
        };

        IntersectionResult::Intersection(RayIntersection {
            t,
            local_info: local_info::Minimum { pos: ray.at(t) },
        })
    }

    fn bounding_box(&self) -> Bounds {
        self.blob.bounding_box(&self.zones)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use glam::Vec3;

    use crate::{
        material::MaterialId,
        math::{bounds::Bounds, point::Point},
        ray::Ray,
        shape::{IntersectionResult, Shape},
    };

    use super::{Blob, BlobShape, ZoneTable};

    fn shape(centers: Vec<Point>, size: f32) -> BlobShape {
        BlobShape {
            blob: Blob::new(centers, size, MaterialId(3)).unwrap(),
            zones: Arc::new(ZoneTable::build()),
        }
    }

    #[test]
    fn blob_validation() {
        assert!(Blob::new(vec![Point::ORIGIN], 0.0, MaterialId(0)).is_err());
        assert!(Blob::new(vec![Point::ORIGIN], -1.0, MaterialId(0)).is_err());
        assert!(Blob::new(vec![Point::ORIGIN], f32::NAN, MaterialId(0)).is_err());
        assert!(Blob::new(vec![], 1.0, MaterialId(0)).is_err());

        let blob = Blob::new(vec![Point::ORIGIN], 2.0, MaterialId(0)).unwrap();
        assert_eq!(blob.inv_size_square, 0.25);
    }

    #[test]
    fn full_intersection() {
        let shape = shape(vec![Point::ORIGIN], 1.0);
        let ray = Ray::new(Point::new(0.0, 0.0, 5.0), -Vec3::Z);

        let IntersectionResult::Intersection(hit) = shape.intersection_full(ray) else {
            panic!("the blob should be hit");
        };
        assert!((hit.t - 4.0).abs() < 0.05);
        assert!(hit.local_info.pos.distance_squared(Point::new(0.0, 0.0, 1.0)) < 0.01);
        assert!(hit.local_info.normal.dot(Vec3::Z) > 0.999);
        assert_eq!(hit.local_info.material, MaterialId(3));
    }

    #[test]
    fn respects_ray_bounds() {
        let shape = shape(vec![Point::ORIGIN], 1.0);

        let short = Ray::new_with_range(Point::new(0.0, 0.0, 5.0), -Vec3::Z, 0.0..3.0);
        assert!(!shape.intersect_bare(short).is_intersection());

        // The front face is before the range, the back face is still reported
        let late = Ray::new_with_range(Point::new(0.0, 0.0, 5.0), -Vec3::Z, 4.5..100.0);
        let back = shape.intersect_bare(late).t().unwrap();
        assert!((back - 6.0).abs() < 0.05);

        let IntersectionResult::Intersection(hit) = shape.intersection_full(late) else {
            panic!("the back face should be hit");
        };
        assert!(hit.local_info.pos.distance_squared(Point::new(0.0, 0.0, -1.0)) < 0.01);
        assert!(hit.local_info.normal.dot(-Vec3::Z) > 0.999);

        // Range entirely inside the blob
        let inside = Ray::new_with_range(Point::new(0.0, 0.0, 5.0), -Vec3::Z, 4.5..5.5);
        assert!(!shape.intersect_bare(inside).is_intersection());

        let bare = shape.intersect_bare(Ray::new(Point::new(0.0, 0.0, 5.0), -Vec3::Z));
        assert!((bare.t().unwrap() - 4.0).abs() < 0.05);
    }

    #[test]
    fn emptied_blob_has_empty_bounds() {
        let mut blob = Blob::new(vec![Point::ORIGIN], 1.0, MaterialId(0)).unwrap();
        blob.centers.clear();
        assert_eq!(blob.bounding_box(&ZoneTable::build()), Bounds::EMPTY);
    }

    #[test]
    fn bounding_box_covers_shells() {
        let shape = shape(vec![Point::ORIGIN, Point::new(2.0, 0.0, 0.0)], 1.0);
        let bounds = shape.bounding_box();
        let r = 10f32.sqrt();

        assert!((bounds.origin.vec() - Vec3::new(-r, -r, -r)).length() < 1e-4);
        assert!((bounds.end().vec() - Vec3::new(2.0 + r, r, r)).length() < 1e-4);
    }

    #[test]
    fn usable_from_several_threads() {
        let shape = Arc::new(shape(vec![Point::ORIGIN], 1.0));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let shape = shape.clone();
                std::thread::spawn(move || {
                    let origin = Point::new(0.0, 0.0, 5.0 + i as f32);
                    shape.intersect_bare(Ray::new(origin, -Vec3::Z)).t()
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let t = handle.join().unwrap().unwrap();
            assert!((t - (4.0 + i as f32)).abs() < 0.05);
        }
    }
}
