use blobby::{scene::Scene, shape::Shape};
use clap::ValueEnum;
use rayon::prelude::*;

use crate::{
    camera::{Camera, ViewportCoord},
    stats::HitStats,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExecutionMode {
    #[default]
    Multithreaded,
    Monothreaded,
}

/// Casts one ray through the center of every pixel.
///
/// In multithreaded mode, rows are dispatched to the rayon pool. Every worker
/// uses its own blob scratch buffer, the scene itself is only read.
pub fn render(scene: &Scene, camera: &Camera, mode: ExecutionMode) -> HitStats {
    let row = |y: u32| {
        let mut stats = HitStats::default();
        for x in 0..camera.width {
            let ray = camera.ray(ViewportCoord::from_pixel(camera, x, y));
            stats.add_sample(&ray, &scene.objects.intersection_full(ray));
        }
        stats
    };

    match mode {
        ExecutionMode::Multithreaded => (0..camera.height)
            .into_par_iter()
            .map(row)
            .reduce(HitStats::default, HitStats::merge),
        ExecutionMode::Monothreaded => (0..camera.height)
            .map(row)
            .fold(HitStats::default(), HitStats::merge),
    }
}
