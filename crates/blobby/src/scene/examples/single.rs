use anyhow::Result;

use crate::{math::point::Point, scene::Scene};

/// A single source, which renders as a plain sphere.
pub struct SingleBlobScene;

impl SingleBlobScene {
    pub fn insert_into(scene: &mut Scene) -> Result<()> {
        let material = scene.insert_material(Some("Single".to_owned()));
        scene.insert_blob(material, vec![Point::new(0.0, 0.0, -3.0)], 1.0)
    }
}
