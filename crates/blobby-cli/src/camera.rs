use blobby::{math::point::Point, ray::Ray};
use glam::Vec3;

/// A pinhole camera looking towards -Z
pub struct Camera {
    /// width of the sensor, in pixel
    pub width: u32,
    /// height of the sensor, in pixel
    pub height: u32,

    /// From center to top, in world unit, for a sensor at distance 1
    pub viewport_height: f32,
    /// From center to left, in world unit, for a sensor at distance 1
    pub viewport_width: f32,

    pub center_of_lens: Point,
}

impl Camera {
    pub fn new(width: u32, height: u32, vfov: f32, center_of_lens: Point) -> Self {
        let h = f32::tan(vfov / 2.);
        let aspect_ratio = width as f32 / height as f32;

        Self {
            width,
            height,
            viewport_height: h,
            viewport_width: h * aspect_ratio,
            center_of_lens,
        }
    }

    pub fn ray(&self, coords: ViewportCoord) -> Ray {
        let direction = Vec3::new(
            coords.vx * self.viewport_width,
            -coords.vy * self.viewport_height,
            -1.0,
        );
        Ray::new(self.center_of_lens, direction)
    }
}

/// Represent a coordinate in the viewport space.
///
/// The viewport is mapped to the range $\left[-1, 1\right]$ for both `vx` and `vy`.
///
/// $\left(-1, -1\right)$ is the top left corner
#[derive(Debug, Clone, Copy)]
pub struct ViewportCoord {
    pub vx: f32,
    pub vy: f32,
}

impl ViewportCoord {
    /// Center of the pixel (x, y)
    pub fn from_pixel(camera: &Camera, x: u32, y: u32) -> Self {
        Self {
            vx: 2. * (x as f32 + 0.5) / camera.width as f32 - 1.,
            vy: 2. * (y as f32 + 0.5) / camera.height as f32 - 1.,
        }
    }
}
