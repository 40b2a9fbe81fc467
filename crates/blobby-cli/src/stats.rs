use std::collections::BTreeMap;

use blobby::{
    material::MaterialId,
    ray::Ray,
    shape::{FullIntersectionResult, IntersectionResult},
};

/// Represent a serie of samples from a given distribution.
/// It is used to get an easy access to mean and variance
#[derive(Default, Clone, Debug)]
pub struct VarianceSeries {
    count: usize,
    sum: f32,
    sqsum: f32,
}

impl VarianceSeries {
    pub fn add_sample(&mut self, sample: f32) {
        self.count += 1;
        self.sum += sample;
        self.sqsum += sample * sample;
    }

    pub fn merge(lhs: Self, rhs: Self) -> Self {
        Self {
            count: lhs.count + rhs.count,
            sum: lhs.sum + rhs.sum,
            sqsum: lhs.sqsum + rhs.sqsum,
        }
    }

    pub fn mean(&self) -> Option<f32> {
        (self.count > 0).then(|| self.sum / self.count as f32)
    }

    pub fn variance(&self) -> Option<f32> {
        if self.count < 2 {
            return None;
        }

        // This estimator is unbiased thx to the n - 1
        Some((self.sqsum - self.sum * self.sum / self.count as f32) / (self.count as f32 - 1.0))
    }
}

/// What the primary rays saw
#[derive(Default, Clone, Debug)]
pub struct HitStats {
    pub rays: u64,
    pub hits: u64,
    /// Hits whose normal faces away from the camera, there should be none from outside a blob
    pub back_facing: u64,
    pub depth: VarianceSeries,
    pub per_material: BTreeMap<MaterialId, u64>,
}

impl HitStats {
    pub fn add_sample(&mut self, ray: &Ray, res: &FullIntersectionResult) {
        self.rays += 1;
        let IntersectionResult::Intersection(hit) = res else {
            return;
        };

        self.hits += 1;
        self.depth.add_sample(hit.t);
        if hit.local_info.normal.dot(ray.direction) > 0.0 {
            self.back_facing += 1;
        }
        *self.per_material.entry(hit.local_info.material).or_default() += 1;
    }

    pub fn merge(mut self, rhs: Self) -> Self {
        for (material, count) in rhs.per_material {
            *self.per_material.entry(material).or_default() += count;
        }

        Self {
            rays: self.rays + rhs.rays,
            hits: self.hits + rhs.hits,
            back_facing: self.back_facing + rhs.back_facing,
            depth: VarianceSeries::merge(self.depth, rhs.depth),
            per_material: self.per_material,
        }
    }

    /// Fraction of the rays that hit something
    pub fn coverage(&self) -> f32 {
        if self.rays == 0 {
            return 0.0;
        }
        self.hits as f32 / self.rays as f32
    }
}
