use anyhow::Result;

use crate::{math::point::Point, scene::Scene};

/// Several independent blobs lined up, partially hiding each other
pub struct ClusterScene;

impl ClusterScene {
    pub fn insert_into(scene: &mut Scene) -> Result<()> {
        let warm = scene.insert_material(Some("Warm".to_owned()));
        let cold = scene.insert_material(Some("Cold".to_owned()));

        for i in 0..4 {
            let x = -1.5 + i as f32;
            let z = -3.0 - 0.8 * i as f32;
            let material = if i % 2 == 0 { warm } else { cold };
            scene.insert_blob(
                material,
                vec![Point::new(x, -0.2, z), Point::new(x + 0.3, 0.3, z - 0.2)],
                0.4,
            )?;
        }

        Ok(())
    }
}
