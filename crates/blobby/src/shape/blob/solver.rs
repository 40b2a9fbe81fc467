//! Ray / blob intersection.
//!
//! Each time the ray enters one of the shells of a source, the linear fit of
//! that shell starts to apply; each time it leaves it, it stops. Written along
//! the ray, every such event adds (or removes) a second degree polynomial of
//! the ray parameter. Sorting the events by distance and summing them gives,
//! between two consecutive events, the exact polynomial approximating the
//! field, which is then solved for the isosurface value.
//!
//! A running upper bound of the field is kept alongside, so that segments
//! where the field cannot reach the isosurface are skipped without solving
//! anything.

use crate::{math::float::FloatAsExt, ray::Ray};

use super::{
    zones::{ZoneTable, ZONE_COUNT},
    Blob,
};

/// Value of the field on the surface of a blob
pub const ISO_THRESHOLD: f32 = 1.0;

/// Hits closer than this are ignored, so that rays starting on the surface do not hit it again
pub const MIN_HIT_DISTANCE: f32 = 0.01;

/// Tolerance on the potential bound, it is a sum of many small deltas
const POTENTIAL_SLACK: f32 = 1e-5;

/// Below this (relative) magnitude the leading coefficient is considered null
const LEADING_COEF_EPS: f32 = 1e-6;

/// Contribution of one source entering or leaving one zone, starting at `distance` along the ray
#[derive(Debug, Clone, Copy, PartialEq)]
struct PolyRecord {
    a: f32,
    b: f32,
    c: f32,
    distance: f32,
    delta_potential: f32,
}

impl PolyRecord {
    /// The matching record cancelling `self` at `distance`
    fn exit(self, distance: f32) -> Self {
        Self {
            a: -self.a,
            b: -self.b,
            c: -self.c,
            distance,
            delta_potential: -self.delta_potential,
        }
    }
}

/// Scratch storage for [intersect].
///
/// Its content only makes sense during one call, keeping it around only saves
/// the allocations. Each thread needs its own.
#[derive(Debug, Default)]
pub struct PolyBuffer {
    records: Vec<PolyRecord>,
}

impl PolyBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A buffer big enough for blobs of `sources` sources
    pub fn with_capacity(sources: usize) -> Self {
        Self {
            records: Vec::with_capacity(2 * (ZONE_COUNT - 1) * sources),
        }
    }
}

/// Find the closest crossing of `ray` with the surface of `blob`.
///
/// `max_distance` is both an input, only hits up to this distance are
/// considered, and an output: when a hit is found it is set to its distance
/// and `true` is returned. It is left untouched otherwise.
///
/// Distances are expressed in units of `ray.direction`, which does not need to
/// be normalized.
pub fn intersect(
    zones: &ZoneTable,
    ray: &Ray,
    blob: &Blob,
    buffer: &mut PolyBuffer,
    max_distance: &mut f32,
) -> bool {
    crate::counter!("Blob queries");

    let Some(a) = ray.direction.length_squared().into_non_zero(0.0) else {
        crate::warn_once!("a ray with a null direction reached the blob solver");
        return false;
    };
    let inv_a = 1.0 / a;
    let r_square = blob.size * blob.size;

    let records = &mut buffer.records;
    records.clear();
    let mut max_estimated_potential = 0.0;

    for center in &blob.centers {
        // |origin + t * direction - center|² = a * t² + b * t + c
        let to_center = *center - ray.origin;
        let b = -2.0 * ray.direction.dot(to_center);
        let c = to_center.length_squared();

        let quarter_b_square_minus_ac = 0.25 * b * b - a * c;
        let minus_half_b = -0.5 * b;
        let a_scaled = a * blob.inv_size_square;
        let b_scaled = b * blob.inv_size_square;
        let c_scaled = c * blob.inv_size_square;

        for zone in zones.crossable() {
            let delta = quarter_b_square_minus_ac + a * zone.boundary_factor * r_square;
            if delta < 0.0 {
                // Shells are nested, the smaller ones are missed as well
                break;
            }
            let sqrt_delta = delta.sqrt();
            let t0 = (minus_half_b - sqrt_delta) * inv_a;
            let t1 = (minus_half_b + sqrt_delta) * inv_a;

            let entry = PolyRecord {
                a: zone.gamma * a_scaled,
                b: zone.gamma * b_scaled,
                c: zone.gamma * c_scaled + zone.beta,
                distance: t0,
                delta_potential: zone.delta_max_potential,
            };
            records.push(entry);
            records.push(entry.exit(t1));

            max_estimated_potential += zone.delta_max_potential;
        }
    }

    if records.len() < 2 || max_estimated_potential < ISO_THRESHOLD - POTENTIAL_SLACK {
        crate::counter!("Blob early rejections");
        return false;
    }

    records.sort_unstable_by(|l, r| l.distance.total_cmp(&r.distance));

    let leading_eps = LEADING_COEF_EPS * a_scale(a, blob);
    let (mut a, mut b, mut c) = (0.0, 0.0, 0.0);
    let mut potential_bound = 0.0;
    for pair in records.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        a += current.a;
        b += current.b;
        c += current.c;
        potential_bound += current.delta_potential;

        if potential_bound < ISO_THRESHOLD - POTENTIAL_SLACK {
            continue;
        }

        let zone_start = current.distance;
        let zone_end = next.distance;
        if *max_distance <= zone_start || zone_end <= MIN_HIT_DISTANCE {
            continue;
        }

        let mut hit = false;
        for root in iso_crossings(a, b, c, leading_eps).into_iter().flatten() {
            if root > MIN_HIT_DISTANCE
                && zone_start <= root
                && root < zone_end
                && root <= *max_distance
            {
                *max_distance = root;
                hit = true;
            }
        }

        // Segments are visited by increasing distance, nothing closer can come after
        if hit {
            crate::counter!("Blob hits");
            return true;
        }
    }

    false
}

/// Natural magnitude of the leading coefficient of the field polynomial
fn a_scale(direction_length_squared: f32, blob: &Blob) -> f32 {
    direction_length_squared * blob.inv_size_square
}

/// Roots of `a * t² + b * t + c = ISO_THRESHOLD`.
///
/// Falls back to the linear equation when `|a| <= leading_eps`. Non finite roots are dropped.
fn iso_crossings(a: f32, b: f32, c: f32, leading_eps: f32) -> [Option<f32>; 2] {
    let c = c - ISO_THRESHOLD;

    let Some(a) = a.into_non_zero(leading_eps) else {
        let root = b
            .into_non_zero(0.0)
            .and_then(|b| (-c / b).into_finite());
        return [root, None];
    };

    let delta = b * b - 4.0 * a * c;
    if delta < 0.0 {
        return [None, None];
    }

    let half_inv_a = 0.5 / a;
    let sqrt_delta = delta.sqrt();
    [
        half_inv_a * (-b - sqrt_delta),
        half_inv_a * (-b + sqrt_delta),
    ]
    .map(FloatAsExt::into_finite)
}
