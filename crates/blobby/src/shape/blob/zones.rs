//! Piecewise linear approximation of the field of a single source.
//!
//! Around each source, space is split into [ZONE_COUNT] concentric shells.
//! Inside a shell the field `1 / x` (with `x = dist² / size²`) is replaced by
//! the chord `gamma * x + beta` joining the values at the two shell boundaries.
//! Because the approximation is linear in `dist²`, the field seen along a ray is
//! a second degree polynomial of the ray parameter and can be solved exactly.
//!
//! The coefficients do not depend on the blob size, so the table is built once
//! and shared by every blob.

/// Number of shells around each source
pub const ZONE_COUNT: usize = 10;

/// One shell of influence around a source.
///
/// Every value except `boundary_factor` is stored as a delta against the
/// enclosing (previous) zone, so summing the deltas of all the zones a point is
/// in gives the coefficients of the shell the point actually sits in. This is
/// what allows entry and exit events of many sources to be sorted and
/// accumulated in any order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Zone {
    /// Outer boundary of the shell, as `dist² / size²`
    pub boundary_factor: f32,
    /// Increase of the upper bound of the field when entering this shell
    pub delta_max_potential: f32,
    /// Increase of the slope of the linear fit
    pub gamma: f32,
    /// Increase of the intercept of the linear fit
    pub beta: f32,
}

/// The shells, ordered from the biggest to the smallest.
///
/// The innermost shell has `gamma = beta = 0`: it only closes the previous one
/// and never contributes a crossing of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneTable {
    zones: [Zone; ZONE_COUNT],
}

impl ZoneTable {
    /// Computes the table.
    ///
    /// This has to be called once, before any blob is intersected, and the
    /// result shared (see [crate::scene::Scene]). Calling it again yields an
    /// identical table.
    pub fn build() -> Self {
        // 10, 5, 3.33, 2.5, ..., 1.11, 1
        let mut zones: [Zone; ZONE_COUNT] = std::array::from_fn(|k| Zone {
            boundary_factor: ZONE_COUNT as f32 / (k + 1) as f32,
            ..Default::default()
        });

        let mut last_gamma = 0.0;
        let mut last_beta = 0.0;
        // The field is considered null outside of the biggest shell
        let mut last_inv = 0.0;
        for i in 0..ZONE_COUNT - 1 {
            let outer = zones[i].boundary_factor;
            let inner = zones[i + 1].boundary_factor;
            let inv = 1.0 / inner;

            let slope = (last_inv - inv) / (outer - inner);
            let intercept = inv - slope * inner;

            let zone = &mut zones[i];
            zone.delta_max_potential = inv - last_inv;
            zone.gamma = slope - last_gamma;
            zone.beta = intercept - last_beta;

            last_gamma = slope;
            last_beta = intercept;
            last_inv = inv;
        }

        let terminator = &mut zones[ZONE_COUNT - 1];
        terminator.gamma = 0.0;
        terminator.beta = 0.0;

        log::debug!("blob zone table built: {zones:?}");
        Self { zones }
    }

    pub fn zones(&self) -> &[Zone; ZONE_COUNT] {
        &self.zones
    }

    /// Zones whose crossing by a ray has to be accounted for, the terminator excluded
    pub fn crossable(&self) -> &[Zone] {
        &self.zones[..ZONE_COUNT - 1]
    }

    /// Slope of the linear fit inside zone `i`
    pub fn cumulative_gamma(&self, i: usize) -> f32 {
        self.zones[..=i].iter().map(|z| z.gamma).sum()
    }

    /// Intercept of the linear fit inside zone `i`
    pub fn cumulative_beta(&self, i: usize) -> f32 {
        self.zones[..=i].iter().map(|z| z.beta).sum()
    }

    /// Radius of the biggest shell relative to the blob size
    pub fn influence_radius_factor(&self) -> f32 {
        self.zones[0].boundary_factor.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::{ZoneTable, ZONE_COUNT};

    const EPS: f32 = 1e-4;

    #[test]
    fn boundary_factors() {
        let table = ZoneTable::build();
        let zones = table.zones();

        assert_eq!(zones[0].boundary_factor, 10.0);
        assert_eq!(zones[ZONE_COUNT - 1].boundary_factor, 1.0);
        assert!((zones[2].boundary_factor - 3.333).abs() < 1e-3);
        assert!(zones
            .windows(2)
            .all(|w| w[0].boundary_factor > w[1].boundary_factor));
    }

    #[test]
    fn reconstruction_matches_inverse() {
        let table = ZoneTable::build();
        let zones = table.zones();

        for i in 0..ZONE_COUNT - 1 {
            let gamma = table.cumulative_gamma(i);
            let beta = table.cumulative_beta(i);
            let fit = |x: f32| gamma * x + beta;

            let inner = zones[i + 1].boundary_factor;
            assert!(
                (fit(inner) - 1.0 / inner).abs() < EPS,
                "zone {i}: {} != {}",
                fit(inner),
                1.0 / inner
            );

            let outer = zones[i].boundary_factor;
            let expected_outer = if i == 0 { 0.0 } else { 1.0 / outer };
            assert!((fit(outer) - expected_outer).abs() < EPS, "zone {i}");
        }
    }

    #[test]
    fn fit_is_continuous_across_boundaries() {
        let table = ZoneTable::build();
        for i in 1..ZONE_COUNT - 1 {
            let x = table.zones()[i].boundary_factor;
            let outside = table.cumulative_gamma(i - 1) * x + table.cumulative_beta(i - 1);
            let inside = table.cumulative_gamma(i) * x + table.cumulative_beta(i);
            assert!((outside - inside).abs() < EPS);
        }
    }

    #[test]
    fn terminator_is_inert() {
        let table = ZoneTable::build();
        let last = table.zones()[ZONE_COUNT - 1];
        assert_eq!(last.gamma, 0.0);
        assert_eq!(last.beta, 0.0);
        assert_eq!(table.crossable().len(), ZONE_COUNT - 1);
    }

    #[test]
    fn max_potential_bound() {
        let table = ZoneTable::build();
        let total: f32 = table.crossable().iter().map(|z| z.delta_max_potential).sum();
        assert!((total - 1.0).abs() < EPS);
        assert!(table.crossable().iter().all(|z| z.delta_max_potential > 0.0));
    }

    #[test]
    fn build_is_idempotent() {
        assert_eq!(ZoneTable::build(), ZoneTable::build());
        assert!((ZoneTable::build().influence_radius_factor() - 10f32.sqrt()).abs() < EPS);
    }
}
