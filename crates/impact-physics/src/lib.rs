//! Impact Physics Library
//!
//! Closed-form impact physics for near-Earth objects: spherical mass
//! estimation, kinetic energy conversion (joules / megatons TNT /
//! Hiroshima equivalents), crater and blast scaling laws, and the
//! ordered hazard-tier cascade.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhysicsError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PhysicsError>;

/// Astronomical unit in kilometers.
pub const AU_KM: f64 = 149_597_870.7;
/// TNT equivalence: joules per megaton.
pub const JOULES_PER_MEGATON: f64 = 4.184e15;
/// Hiroshima yield in megatons TNT.
pub const HIROSHIMA_MEGATONS: f64 = 0.015;
/// Nominal stony-asteroid bulk density.
pub const NOMINAL_DENSITY_KG_M3: f64 = 2600.0;

/// Kinetic energy expressed in the three units the API reports.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnergyBreakdown {
    pub joules: f64,
    pub megatons_tnt: f64,
    pub hiroshima_equivalent: f64,
}

/// Ground effects derived from impact energy via power-law scaling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ImpactEffects {
    pub crater_diameter_km: f64,
    pub destruction_radius_km: f64,
    pub shockwave_velocity_km_s: f64,
    pub affected_area_km2: f64,
}

/// Hazard tier from the ordered (diameter, distance, energy) cascade.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HazardTier {
    ExtinctionLevel,
    CivilizationThreat,
    RegionalDevastation,
    CityDestroyer,
    LowRisk,
}

/// Mass of a uniform sphere of the given diameter and density.
///
/// Diameter is in kilometers and is converted to meters before cubing.
pub fn mass_kg(diameter_km: f64, density_kg_m3: f64) -> Result<f64> {
    if diameter_km <= 0.0 {
        return Err(PhysicsError::InvalidInput(format!(
            "diameter must be positive, got {diameter_km} km"
        )));
    }
    if density_kg_m3 <= 0.0 {
        return Err(PhysicsError::InvalidInput(format!(
            "density must be positive, got {density_kg_m3} kg/m3"
        )));
    }

    let radius_m = diameter_km * 1000.0 / 2.0;
    let volume_m3 = (4.0 / 3.0) * std::f64::consts::PI * radius_m.powi(3);
    Ok(volume_m3 * density_kg_m3)
}

/// Kinetic energy of a body, with velocity in km/s.
pub fn kinetic_energy(mass_kg: f64, velocity_km_s: f64) -> Result<EnergyBreakdown> {
    if velocity_km_s <= 0.0 {
        return Err(PhysicsError::InvalidInput(format!(
            "velocity must be positive, got {velocity_km_s} km/s"
        )));
    }
    if mass_kg < 0.0 {
        return Err(PhysicsError::InvalidInput(format!(
            "mass must be non-negative, got {mass_kg} kg"
        )));
    }

    let velocity_m_s = velocity_km_s * 1000.0;
    let joules = 0.5 * mass_kg * velocity_m_s.powi(2);
    let megatons_tnt = joules / JOULES_PER_MEGATON;

    Ok(EnergyBreakdown {
        joules,
        megatons_tnt,
        hiroshima_equivalent: megatons_tnt / HIROSHIMA_MEGATONS,
    })
}

/// Crater and blast scaling from impact energy in megatons TNT.
///
/// Zero energy yields all-zero effects; negative energy is rejected.
pub fn impact_effects(energy_megatons: f64) -> Result<ImpactEffects> {
    if energy_megatons < 0.0 {
        return Err(PhysicsError::InvalidInput(format!(
            "energy must be non-negative, got {energy_megatons} MT"
        )));
    }

    let crater_diameter_km = 0.0177 * energy_megatons.powf(0.3658);
    let destruction_radius_km = crater_diameter_km * 10.0;

    Ok(ImpactEffects {
        crater_diameter_km,
        destruction_radius_km,
        shockwave_velocity_km_s: 0.4 * energy_megatons.powf(0.25),
        affected_area_km2: std::f64::consts::PI * destruction_radius_km.powi(2),
    })
}

/// Ordered hazard-tier cascade; the first matching rule wins.
pub fn classify_hazard(diameter_m: f64, miss_distance_km: f64, energy_mt: f64) -> HazardTier {
    let distance_au = miss_distance_km / AU_KM;

    if diameter_m >= 1000.0 && distance_au < 0.05 {
        HazardTier::ExtinctionLevel
    } else if diameter_m >= 300.0 && distance_au < 0.1 && energy_mt > 1000.0 {
        HazardTier::CivilizationThreat
    } else if diameter_m >= 140.0 && distance_au < 0.05 {
        HazardTier::RegionalDevastation
    } else if diameter_m >= 50.0 && distance_au < 0.01 {
        HazardTier::CityDestroyer
    } else {
        HazardTier::LowRisk
    }
}

/// Coarse impact-energy class for display.
pub fn impact_energy_class(energy_mt: f64) -> &'static str {
    match energy_mt {
        e if e < 0.01 => "Very Small",
        e if e < 1.0 => "Small",
        e if e < 10.0 => "Medium",
        e if e < 100.0 => "Large",
        e if e < 1000.0 => "Very Large",
        _ => "Extinction Level",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_mass_half_km_stony_body() {
        // 0.5 km diameter at nominal density: radius 250 m
        let m = mass_kg(0.5, NOMINAL_DENSITY_KG_M3).unwrap();
        assert!((m - 1.7017e11).abs() / m < 1e-3, "unexpected mass: {m}");
    }

    #[test]
    fn test_mass_rejects_non_positive_inputs() {
        assert!(mass_kg(0.0, NOMINAL_DENSITY_KG_M3).is_err());
        assert!(mass_kg(-1.0, NOMINAL_DENSITY_KG_M3).is_err());
        assert!(mass_kg(1.0, 0.0).is_err());
    }

    #[test]
    fn test_kinetic_energy_units() {
        let e = kinetic_energy(1.0e12, 20.0).unwrap();
        assert!((e.joules - 2.0e20).abs() / e.joules < 1e-9);
        assert!((e.megatons_tnt - e.joules / JOULES_PER_MEGATON).abs() < 1e-6);
        assert!(
            (e.hiroshima_equivalent - e.megatons_tnt / HIROSHIMA_MEGATONS).abs()
                / e.hiroshima_equivalent
                < 1e-12
        );
    }

    #[test]
    fn test_kinetic_energy_rejects_non_positive_velocity() {
        assert!(kinetic_energy(1.0e12, 0.0).is_err());
        assert!(kinetic_energy(1.0e12, -5.0).is_err());
    }

    #[test]
    fn test_zero_energy_yields_zero_effects() {
        let fx = impact_effects(0.0).unwrap();
        assert_eq!(fx.crater_diameter_km, 0.0);
        assert_eq!(fx.destruction_radius_km, 0.0);
        assert_eq!(fx.shockwave_velocity_km_s, 0.0);
        assert_eq!(fx.affected_area_km2, 0.0);
        assert!(impact_effects(-1.0).is_err());
    }

    #[test]
    fn test_hazard_cascade_first_match_wins() {
        // 1.5 km body within 0.05 AU trips the extinction rule before any later one
        assert_eq!(
            classify_hazard(1500.0, 1_000_000.0, 50_000.0),
            HazardTier::ExtinctionLevel
        );
        assert_eq!(
            classify_hazard(400.0, 10_000_000.0, 2_000.0),
            HazardTier::CivilizationThreat
        );
        assert_eq!(
            classify_hazard(200.0, 5_000_000.0, 100.0),
            HazardTier::RegionalDevastation
        );
        assert_eq!(
            classify_hazard(60.0, 1_000_000.0, 10.0),
            HazardTier::CityDestroyer
        );
        assert_eq!(
            classify_hazard(30.0, 50_000_000.0, 1.0),
            HazardTier::LowRisk
        );
    }

    #[test]
    fn test_energy_class_bands() {
        assert_eq!(impact_energy_class(0.001), "Very Small");
        assert_eq!(impact_energy_class(0.5), "Small");
        assert_eq!(impact_energy_class(5.0), "Medium");
        assert_eq!(impact_energy_class(50.0), "Large");
        assert_eq!(impact_energy_class(500.0), "Very Large");
        assert_eq!(impact_energy_class(5000.0), "Extinction Level");
    }

    proptest! {
        #[test]
        fn prop_mass_scales_cubically(d in 0.001f64..50.0, rho in 500.0f64..8000.0) {
            let m1 = mass_kg(d, rho).unwrap();
            let m2 = mass_kg(2.0 * d, rho).unwrap();
            prop_assert!((m2 / m1 - 8.0).abs() < 1e-6);
        }

        #[test]
        fn prop_energy_monotonic_in_velocity(m in 1.0f64..1e15, v in 0.1f64..70.0) {
            let e1 = kinetic_energy(m, v).unwrap();
            let e2 = kinetic_energy(m, v * 2.0).unwrap();
            prop_assert!((e2.joules / e1.joules - 4.0).abs() < 1e-9);
        }

        #[test]
        fn prop_megatons_roundtrip(m in 1.0f64..1e15, v in 0.1f64..70.0) {
            let e = kinetic_energy(m, v).unwrap();
            let back = e.megatons_tnt * JOULES_PER_MEGATON;
            prop_assert!((back - e.joules).abs() / e.joules < 1e-12);
        }

        #[test]
        fn prop_effects_monotonic(e1 in 0.0f64..1e6, delta in 0.1f64..1e4) {
            let a = impact_effects(e1).unwrap();
            let b = impact_effects(e1 + delta).unwrap();
            prop_assert!(b.crater_diameter_km >= a.crater_diameter_km);
            prop_assert!(b.affected_area_km2 >= a.affected_area_km2);
        }
    }
}
