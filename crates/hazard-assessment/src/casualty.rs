//! Casualty estimation from impact energy and land-use class.

use geo_classify::LocationType;
use serde::Serialize;
use std::f64::consts::PI;

#[derive(Debug, Clone, Serialize)]
pub struct CasualtyEstimate {
    pub estimated_deaths: u64,
    pub affected_area_km2: f64,
    pub estimated_population: u64,
    pub casualty_rate: String,
}

fn population_density(location_type: LocationType) -> f64 {
    match location_type {
        LocationType::Ocean => 0.0,
        LocationType::Rural => 30.0,
        LocationType::UrbanMedium => 1000.0,
        LocationType::UrbanHigh => 10000.0,
        LocationType::Unknown => 100.0,
    }
}

fn casualty_factor(location_type: LocationType) -> f64 {
    match location_type {
        LocationType::Ocean => 0.001,
        LocationType::Rural => 0.01,
        LocationType::UrbanMedium => 0.1,
        LocationType::UrbanHigh => 0.5,
        LocationType::Unknown => 0.05,
    }
}

/// Approximate severe-effects radius, floored at 1 km.
pub fn impact_radius_km(energy_mt: f64) -> f64 {
    (energy_mt.sqrt() * 2.0).max(1.0)
}

/// Death-toll estimate. Ocean impacts above 10 MT add a tsunami term
/// proportional to energy.
pub fn estimate(energy_mt: f64, location_type: LocationType) -> CasualtyEstimate {
    let radius = impact_radius_km(energy_mt);
    let affected_area_km2 = PI * radius * radius;

    let base_population = affected_area_km2 * population_density(location_type);
    let factor = casualty_factor(location_type);
    let mut estimated_deaths = (base_population * factor) as u64;

    if location_type == LocationType::Ocean && energy_mt > 10.0 {
        estimated_deaths += (energy_mt * 10_000.0) as u64;
    }

    CasualtyEstimate {
        estimated_deaths,
        affected_area_km2,
        estimated_population: base_population as u64,
        casualty_rate: format!("{}%", factor * 100.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_radius_floor() {
        assert_eq!(impact_radius_km(0.01), 1.0);
        assert_eq!(impact_radius_km(100.0), 20.0);
    }

    #[test]
    fn test_urban_far_exceeds_rural() {
        let urban = estimate(100.0, LocationType::UrbanHigh);
        let rural = estimate(100.0, LocationType::Rural);
        assert!(urban.estimated_deaths > rural.estimated_deaths * 100);
        assert_eq!(urban.casualty_rate, "50%");
        assert_eq!(rural.casualty_rate, "1%");
    }

    #[test]
    fn test_ocean_tsunami_term() {
        // Zero density means all ocean deaths come from the tsunami term.
        let small = estimate(5.0, LocationType::Ocean);
        assert_eq!(small.estimated_deaths, 0);

        let large = estimate(100.0, LocationType::Ocean);
        assert_eq!(large.estimated_deaths, 1_000_000);
    }

    #[test]
    fn test_unknown_uses_default_density() {
        let est = estimate(100.0, LocationType::Unknown);
        assert_eq!(est.estimated_population, (PI * 400.0 * 100.0) as u64);
        assert_eq!(est.casualty_rate, "5%");
    }
}
