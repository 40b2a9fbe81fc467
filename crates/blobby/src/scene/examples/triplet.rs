use anyhow::Result;

use crate::{math::point::Point, scene::Scene};

/// Three sources close enough to melt into one shape
pub struct TripletScene;

impl TripletScene {
    pub fn insert_into(scene: &mut Scene) -> Result<()> {
        let material = scene.insert_material(Some("Triplet".to_owned()));
        scene.insert_blob(
            material,
            vec![
                Point::new(-0.6, -0.3, -3.0),
                Point::new(0.6, -0.3, -3.0),
                Point::new(0.0, 0.6, -3.2),
            ],
            0.7,
        )
    }
}
