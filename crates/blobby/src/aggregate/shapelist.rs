use crate::{
    math::bounds::Bounds,
    ray::Ray,
    shape::{FullIntersectionResult, IntersectionResult, MinIntersectionResult, Shape},
};

/// The simplest aggregate: every shape is tested in turn.
///
/// The ray is shortened each time something is hit, so later shapes only
/// report hits closer than the best one found so far.
#[derive(Default)]
pub struct ShapeList(pub Vec<Box<dyn Shape>>);

impl ShapeList {
    pub fn push<S: Shape + 'static>(&mut self, shape: S) {
        self.0.push(Box::new(shape))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn first_hit<T>(
        &self,
        mut ray: Ray,
        hit: impl Fn(&dyn Shape, Ray) -> IntersectionResult<T>,
    ) -> IntersectionResult<T> {
        let mut res = IntersectionResult::NoIntersection;

        for shape in self.0.iter() {
            if ray.range().is_empty() {
                break;
            }

            if let IntersectionResult::Intersection(record) = hit(shape.as_ref(), ray) {
                ray.bounds.1 = record.t;
                res = IntersectionResult::Intersection(record);
            }
        }
        res
    }
}

impl Shape for ShapeList {
    fn intersection_full(&self, ray: Ray) -> FullIntersectionResult {
        self.first_hit(ray, |shape, ray| shape.intersection_full(ray))
    }

    fn intersect_bare(&self, ray: Ray) -> MinIntersectionResult {
        self.first_hit(ray, |shape, ray| shape.intersect_bare(ray))
    }

    fn bounding_box(&self) -> Bounds {
        self.0
            .iter()
            .map(|shape| shape.bounding_box())
            .reduce(|a, b| a.union(&b))
            .unwrap_or(Bounds::EMPTY)
    }
}
