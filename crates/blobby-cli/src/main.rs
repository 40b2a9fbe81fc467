mod camera;
mod renderer;
mod stats;
mod utils;

use anyhow::Result;
use blobby::{
    math::point::Point,
    scene::Scene,
    utils::{counter::report_counters, timer::timed_scope_log},
};
use camera::Camera;
use clap::Parser;
use renderer::ExecutionMode;
use utils::{AvailableScene, Dimensions};

#[derive(Parser, Debug)]
pub struct Args {
    #[arg(long, value_enum, default_value_t)]
    /// Scene selector
    scene: AvailableScene,

    #[arg(short, long, default_value = "320x240")]
    /// Screen dimension in format `width`x`height`
    dimensions: Dimensions,

    #[arg(long, default_value_t = 70.0)]
    /// Vertical field of view, in degrees
    vfov: f32,

    #[arg(short, long, value_enum, default_value_t)]
    execution_mode: ExecutionMode,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    log::info!("loading scene");
    let mut scene = Scene::new();
    args.scene.insert_into(&mut scene)?;

    let camera = Camera::new(
        args.dimensions.width,
        args.dimensions.height,
        f32::to_radians(args.vfov),
        Point::ORIGIN,
    );

    log::info!("casting rays ({}, {:?})", args.dimensions, args.execution_mode);
    let stats = timed_scope_log("render", || {
        renderer::render(&scene, &camera, args.execution_mode)
    })
    .res;

    log::info!(
        "{} rays, {} hits ({:.1}% coverage)",
        stats.rays,
        stats.hits,
        100.0 * stats.coverage()
    );
    if let (Some(mean), variance) = (stats.depth.mean(), stats.depth.variance()) {
        log::info!("hit distance: mean {mean:.3}, variance {:.3}", variance.unwrap_or(0.0));
    }
    if stats.back_facing > 0 {
        log::warn!("{} hits with a normal facing away from the camera", stats.back_facing);
    }
    for (material, count) in &stats.per_material {
        let label = scene
            .material(*material)
            .and_then(|m| m.label.as_deref())
            .unwrap_or("<unnamed>");
        log::info!("material {label}: {count} hits");
    }

    report_counters();
    Ok(())
}
