//! Exact evaluation of the field of a blob.
//!
//! Each source contributes `size² / dist²`. Only the intersection uses the
//! zone approximation, shading uses the values computed here.

use glam::Vec3;

use crate::math::point::Point;

use super::Blob;

/// Sources closer than this (squared) to the evaluated point are ignored
const COINCIDENT_EPS: f32 = 0.001;

/// Value of the field at `point`
pub fn potential(point: Point, blob: &Blob) -> f32 {
    let r_square = blob.size * blob.size;
    blob.centers
        .iter()
        .map(|&center| point.distance_squared(center))
        .filter(|&dist_square| dist_square > COINCIDENT_EPS)
        .map(|dist_square| r_square / dist_square)
        .sum()
}

/// Gradient of the field at `point`, up to a constant negative factor.
///
/// It points outwards, so once normalized it is the normal of the surface.
/// Sources coinciding with `point` do not contribute.
pub fn gradient(point: Point, blob: &Blob) -> Vec3 {
    let r_square = blob.size * blob.size;
    blob.centers
        .iter()
        .map(|&center| point - center)
        .filter_map(|offset| {
            let dist_square = offset.length_squared();
            (dist_square > COINCIDENT_EPS)
                .then(|| r_square / (dist_square * dist_square) * offset)
        })
        .fold(Vec3::ZERO, |acc, v| acc + v)
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use crate::{material::MaterialId, math::point::Point, shape::blob::Blob};

    use super::{gradient, potential};

    fn random_direction(rng: &mut StdRng) -> Vec3 {
        loop {
            let v = Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            if v.length_squared() > 0.01 {
                return v.normalize();
            }
        }
    }

    #[test]
    fn potential_on_surface() {
        let blob = Blob::new(vec![Point::ORIGIN], 2.0, MaterialId(0)).unwrap();
        assert!((potential(Point::new(0.0, 2.0, 0.0), &blob) - 1.0).abs() < 1e-6);
        assert!(potential(Point::new(0.0, 1.0, 0.0), &blob) > 1.0);
        assert!(potential(Point::new(0.0, 3.0, 0.0), &blob) < 1.0);
        assert_eq!(potential(Point::ORIGIN, &blob), 0.0);
    }

    #[test]
    fn potential_adds_up() {
        let a = Point::new(-1.0, 0.0, 0.0);
        let b = Point::new(1.0, 0.0, 0.0);
        let both = Blob::new(vec![a, b], 1.0, MaterialId(0)).unwrap();
        let p = Point::new(0.0, 1.0, 0.0);
        assert!((potential(p, &both) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn gradient_points_away_and_decreases() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let blob = Blob::new(vec![Point::new(0.5, -1.0, 2.0)], 1.0, MaterialId(0)).unwrap();

        for _ in 0..32 {
            let dir = random_direction(&mut rng);
            let mut last = f32::INFINITY;
            for k in 0..16 {
                let p = blob.centers[0] + (0.25 + 0.25 * k as f32) * dir;
                let g = gradient(p, &blob);
                assert!(g.normalize().dot(dir) > 0.999);
                assert!(g.length() < last);
                last = g.length();
            }
        }
    }

    #[test]
    fn gradient_on_surface() {
        let blob = Blob::new(vec![Point::ORIGIN], 1.0, MaterialId(0)).unwrap();
        let g = gradient(Point::new(0.0, 0.0, 1.0), &blob);
        assert!((g - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn gradient_skips_coincident_source() {
        let blob = Blob::new(vec![Point::ORIGIN, Point::new(2.0, 0.0, 0.0)], 1.0, MaterialId(0))
            .unwrap();
        let g = gradient(Point::ORIGIN, &blob);
        assert!(g.is_finite());
        // Only the far source contributes, pushing away from it
        assert!(g.x < 0.0);
        assert_eq!(g.y, 0.0);

        let lonely = Blob::new(vec![Point::ORIGIN], 1.0, MaterialId(0)).unwrap();
        assert_eq!(gradient(Point::ORIGIN, &lonely), Vec3::ZERO);
    }

    #[test]
    fn gradient_symmetric_pair() {
        let blob = Blob::new(
            vec![Point::new(-1.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0)],
            1.0,
            MaterialId(0),
        )
        .unwrap();
        let g = gradient(Point::new(0.0, 1.0, 0.0), &blob);
        assert!(g.x.abs() < 1e-6);
        assert!(g.y > 0.0);
    }
}
