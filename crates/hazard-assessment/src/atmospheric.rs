//! Atmospheric effects: shockwave and heat-blast radii plus the debris
//! cloud's climate impact band.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DebrisCloud {
    pub altitude_km: &'static str,
    pub climate_impact: &'static str,
    pub duration: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AtmosphericHazards {
    pub shockwave_radius_km: f64,
    pub heat_blast_radius_km: f64,
    pub debris_cloud: DebrisCloud,
}

pub fn shockwave_radius_km(energy_mt: f64) -> f64 {
    energy_mt * 2.0
}

pub fn heat_radius_km(energy_mt: f64) -> f64 {
    energy_mt * 1.5
}

pub fn debris_cloud(energy_mt: f64) -> DebrisCloud {
    DebrisCloud {
        altitude_km: "20-50",
        climate_impact: match energy_mt {
            e if e > 1000.0 => "Global cooling for years",
            e if e > 100.0 => "Regional climate effects",
            _ => "Localized effects only",
        },
        duration: "Months to years",
    }
}

pub fn assess(energy_mt: f64) -> AtmosphericHazards {
    AtmosphericHazards {
        shockwave_radius_km: shockwave_radius_km(energy_mt),
        heat_blast_radius_km: heat_radius_km(energy_mt),
        debris_cloud: debris_cloud(energy_mt),
    }
}
