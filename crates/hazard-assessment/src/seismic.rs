//! Impact-induced seismic effects: magnitude bands, shaking radius and
//! Mercalli-style intensity, all energy-threshold cascades.

use serde::Serialize;

/// Induced-earthquake expectation for an impact of the given energy.
#[derive(Debug, Clone, Serialize)]
pub struct InducedQuakes {
    pub max_magnitude: &'static str,
    pub duration_hours: &'static str,
    pub aftershocks_expected: bool,
}

/// Ground-shaking forecast around the impact point.
#[derive(Debug, Clone, Serialize)]
pub struct GroundShaking {
    pub intensity: &'static str,
    pub duration_estimate: &'static str,
    pub affected_radius_km: f64,
}

/// Composite seismic section of the hazard report.
#[derive(Debug, Clone, Serialize)]
pub struct SeismicHazards {
    pub induced_earthquakes: InducedQuakes,
    pub ground_shaking: GroundShaking,
}

pub fn induced_quakes(energy_mt: f64) -> InducedQuakes {
    let max_magnitude = match energy_mt {
        e if e > 1000.0 => "7.0-8.0",
        e if e > 100.0 => "6.0-7.0",
        e if e > 10.0 => "5.0-6.0",
        _ => "4.0-5.0",
    };

    InducedQuakes {
        max_magnitude,
        duration_hours: "2-6",
        aftershocks_expected: true,
    }
}

/// Shaking radius saturates at 500 km.
pub fn shaking_radius_km(energy_mt: f64) -> f64 {
    (energy_mt * 5.0).min(500.0)
}

pub fn shaking_intensity(energy_mt: f64) -> &'static str {
    match energy_mt {
        e if e > 1000.0 => "IX-X",
        e if e > 100.0 => "VII-IX",
        e if e > 10.0 => "VI-VII",
        _ => "V-VI",
    }
}

pub fn assess(energy_mt: f64) -> SeismicHazards {
    SeismicHazards {
        induced_earthquakes: induced_quakes(energy_mt),
        ground_shaking: GroundShaking {
            intensity: shaking_intensity(energy_mt),
            duration_estimate: "30-60 seconds",
            affected_radius_km: shaking_radius_km(energy_mt),
        },
    }
}
