pub mod examples;

use std::sync::Arc;

use anyhow::{ensure, Result};

use crate::{
    aggregate::ShapeList,
    material::{MaterialDescriptor, MaterialId},
    math::point::Point,
    shape::blob::{Blob, BlobShape, ZoneTable},
};

/// Everything that can be hit by a ray, plus the material table.
///
/// The blob [ZoneTable] is built once here and shared by every blob of the scene.
pub struct Scene {
    pub objects: ShapeList,
    pub zones: Arc<ZoneTable>,
    materials: Vec<MaterialDescriptor>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: ShapeList::default(),
            zones: Arc::new(ZoneTable::build()),
            materials: Vec::new(),
        }
    }

    /// Insert a material and returns the Material ID associated with this material
    pub fn insert_material(&mut self, label: Option<String>) -> MaterialId {
        self.materials.push(MaterialDescriptor { label });
        MaterialId(self.materials.len() - 1)
    }

    pub fn material(&self, id: MaterialId) -> Option<&MaterialDescriptor> {
        self.materials.get(id.0)
    }

    /// Insert a blob made of `centers`, checking it is well formed
    pub fn insert_blob(&mut self, material: MaterialId, centers: Vec<Point>, size: f32) -> Result<()> {
        ensure!(
            material.0 < self.materials.len(),
            "unknown material {material:?}"
        );
        let blob = Blob::new(centers, size, material)?;
        log::debug!(
            "inserting blob of {} sources, size {}",
            blob.centers.len(),
            blob.size
        );

        self.objects.push(BlobShape {
            blob,
            zones: self.zones.clone(),
        });
        Ok(())
    }
}
