//! Aggregate risk: overall level, primary-hazard identification,
//! evacuation zones, and the weighted 0-1 risk score.

use impact_physics::AU_KM;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Minimal,
    Low,
    Medium,
    High,
    VeryHigh,
    Extreme,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrimaryHazard {
    Tsunami,
    SeismicHazards,
    OceanImpact,
    GroundImpact,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum EvacuationZones {
    Ocean {
        coastal_evacuation: &'static str,
        maritime_evacuation: &'static str,
        elevated_shelter: &'static str,
        evacuation_time: &'static str,
    },
    Land {
        immediate_evacuation: &'static str,
        secondary_zone: &'static str,
        monitoring_zone: &'static str,
    },
}

/// Overall risk level from close-approach distance, energy, and location.
/// Ocean impacts near a populated coast bump the base level one step.
pub fn overall_risk_level(
    energy_mt: f64,
    miss_distance_km: f64,
    is_ocean: bool,
    coast_km: f64,
) -> RiskLevel {
    let au = miss_distance_km / AU_KM;

    let mut base: usize = if au <= 0.01 && energy_mt > 10.0 {
        5
    } else if au <= 0.05 && energy_mt > 10.0 {
        4
    } else if energy_mt > 100.0 {
        3
    } else if energy_mt > 10.0 {
        2
    } else {
        1
    };

    if is_ocean && energy_mt > 1.0 && coast_km < 1000.0 {
        base = (base + 1).min(5);
    }

    [
        RiskLevel::Minimal,
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::VeryHigh,
        RiskLevel::Extreme,
    ][base]
}

pub fn primary_hazard(energy_mt: f64, is_ocean: bool) -> PrimaryHazard {
    if is_ocean && energy_mt > 10.0 {
        PrimaryHazard::Tsunami
    } else if energy_mt > 100.0 {
        PrimaryHazard::SeismicHazards
    } else if is_ocean {
        PrimaryHazard::OceanImpact
    } else {
        PrimaryHazard::GroundImpact
    }
}

pub fn evacuation_zones(energy_mt: f64, is_ocean: bool) -> EvacuationZones {
    if is_ocean {
        match energy_mt {
            e if e > 100.0 => EvacuationZones::Ocean {
                coastal_evacuation: "All areas within 50km of coastline",
                maritime_evacuation: "All vessels within 500km of impact",
                elevated_shelter: "Move to >50m elevation",
                evacuation_time: "Immediate - before impact",
            },
            e if e > 10.0 => EvacuationZones::Ocean {
                coastal_evacuation: "Low-lying coastal areas within 20km",
                maritime_evacuation: "Vessels within 200km",
                elevated_shelter: "Move to >30m elevation",
                evacuation_time: "Within 1 hour of impact",
            },
            _ => EvacuationZones::Ocean {
                coastal_evacuation: "Beach areas within 5km",
                maritime_evacuation: "Small vessels within 50km",
                elevated_shelter: "Move inland 1-2km",
                evacuation_time: "Monitor warnings",
            },
        }
    } else {
        let (immediate, secondary, monitoring) = match energy_mt {
            e if e > 100.0 => ("100 km radius", "100-300 km radius", "300-500 km radius"),
            e if e > 10.0 => ("50 km radius", "50-150 km radius", "150-300 km radius"),
            _ => ("20 km radius", "20-50 km radius", "50-100 km radius"),
        };
        EvacuationZones::Land {
            immediate_evacuation: immediate,
            secondary_zone: secondary,
            monitoring_zone: monitoring,
        }
    }
}

/// Weighted composite score: 0.5 distance + 0.3 size + 0.2 energy,
/// each factor clamped to [0,1], rounded to three decimals.
pub fn risk_score(miss_distance_km: f64, diameter_km: f64, energy_mt: f64) -> f64 {
    let au = miss_distance_km / AU_KM;
    let distance_factor = (1.0 - au / 0.05).max(0.0);
    let size_factor = (diameter_km * 1000.0 / 1000.0).min(1.0);
    let energy_factor = (energy_mt / 10_000.0).min(1.0);

    let score = distance_factor * 0.5 + size_factor * 0.3 + energy_factor * 0.2;
    (score * 1000.0).round() / 1000.0
}
