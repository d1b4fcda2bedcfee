//! Tsunami hazard assessment for ocean impacts: risk tier, wave-height
//! bands, coastal impact summary, and inundation zoning.
//!
//! Land impacts short-circuit to a no-tsunami report regardless of energy.
//! Arrival estimates assume ~480 km/h effective propagation (coast
//! distance / 8 gives minutes).

use serde::Serialize;

/// Minutes per kilometer divisor for the fixed propagation assumption.
const ARRIVAL_DIVISOR_KM_PER_MIN: f64 = 8.0;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TsunamiTier {
    None,
    Low,
    Medium,
    High,
    Extreme,
}

#[derive(Debug, Clone, Serialize)]
pub struct TsunamiRisk {
    pub tsunami_expected: bool,
    pub risk_level: TsunamiTier,
    pub reason: String,
    pub distance_to_coast_km: f64,
    pub coastal_warnings_needed: bool,
    pub evacuation_recommended: bool,
    pub estimated_arrival_time_minutes: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WaveHeightForecast {
    pub wave_height_m: &'static str,
    pub classification: &'static str,
    pub potential_impact: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoastalImpact {
    pub coastal_impact_expected: bool,
    pub impact_type: &'static str,
    pub distance_to_nearest_coast_km: f64,
    pub tsunami_severity: &'static str,
    pub affected_coastlines: &'static str,
    pub evacuation_radius_km: f64,
    pub warning_time_minutes: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct InundationZone {
    pub zone_type: &'static str,
    pub distance_from_shore_km: &'static str,
    pub risk_level: &'static str,
    pub actions: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct InundationAssessment {
    pub inundation_risk: &'static str,
    pub zones: Vec<InundationZone>,
    pub total_area_affected_km2: f64,
    pub evacuation_time_estimate: &'static str,
}

/// Composite tsunami section of the hazard report.
#[derive(Debug, Clone, Serialize)]
pub struct TsunamiHazards {
    pub tsunami_risk: TsunamiRisk,
    pub wave_height_prediction: WaveHeightForecast,
    pub coastal_impact: CoastalImpact,
    pub inundation_zones: InundationAssessment,
}

/// Tsunami risk tier for an impact. Land impacts never generate one.
pub fn tsunami_risk(energy_mt: f64, is_ocean: bool, coast_km: f64) -> TsunamiRisk {
    if !is_ocean {
        return TsunamiRisk {
            tsunami_expected: false,
            risk_level: TsunamiTier::None,
            reason: "Land impact - no tsunami generation".to_string(),
            distance_to_coast_km: 0.0,
            coastal_warnings_needed: false,
            evacuation_recommended: false,
            estimated_arrival_time_minutes: None,
        };
    }

    let (risk_level, evacuation_recommended, reason) = match energy_mt {
        e if e > 100.0 => (
            TsunamiTier::Extreme,
            true,
            format!("Catastrophic tsunami - {coast_km:.0} km to nearest coast"),
        ),
        e if e > 10.0 => (
            TsunamiTier::High,
            true,
            "Major tsunami possible - coastal areas at risk".to_string(),
        ),
        e if e > 1.0 => (
            TsunamiTier::Medium,
            coast_km < 500.0,
            "Moderate tsunami - monitor coastal warnings".to_string(),
        ),
        _ => (
            TsunamiTier::Low,
            false,
            "Small waves expected - minimal coastal impact".to_string(),
        ),
    };

    TsunamiRisk {
        tsunami_expected: true,
        risk_level,
        reason,
        distance_to_coast_km: coast_km,
        coastal_warnings_needed: true,
        evacuation_recommended,
        estimated_arrival_time_minutes: Some((coast_km / ARRIVAL_DIVISOR_KM_PER_MIN) as u32),
    }
}

pub fn wave_height(energy_mt: f64, is_ocean: bool) -> WaveHeightForecast {
    if !is_ocean {
        return WaveHeightForecast {
            wave_height_m: "0",
            classification: "No tsunami",
            potential_impact: "Land impact - no significant water displacement",
        };
    }

    let (wave_height_m, classification) = match energy_mt {
        e if e > 1000.0 => ("50-100+", "Mega-tsunami"),
        e if e > 100.0 => ("10-50", "Major tsunami"),
        e if e > 10.0 => ("3-10", "Moderate tsunami"),
        e if e > 1.0 => ("1-3", "Small tsunami"),
        _ => ("0.5-1", "Very small waves"),
    };

    WaveHeightForecast {
        wave_height_m,
        classification,
        potential_impact: if energy_mt > 10.0 {
            "Coastal flooding expected"
        } else {
            "Minimal impact"
        },
    }
}

pub fn coastal_impact(energy_mt: f64, is_ocean: bool, coast_km: f64) -> CoastalImpact {
    if !is_ocean {
        return CoastalImpact {
            coastal_impact_expected: false,
            impact_type: "land",
            distance_to_nearest_coast_km: 0.0,
            tsunami_severity: "NONE",
            affected_coastlines: "None",
            evacuation_radius_km: 0.0,
            warning_time_minutes: 0,
        };
    }

    let (tsunami_severity, affected_coastlines, evacuation_radius_km) = match energy_mt {
        e if e > 100.0 => ("CATASTROPHIC", "Multiple continents", 1000.0),
        e if e > 10.0 => ("SEVERE", "Regional", 500.0),
        e if e > 1.0 => ("MODERATE", "Local", 100.0),
        _ => ("MINOR", "Very local", 50.0),
    };

    CoastalImpact {
        coastal_impact_expected: true,
        impact_type: "ocean",
        distance_to_nearest_coast_km: coast_km,
        tsunami_severity,
        affected_coastlines,
        evacuation_radius_km,
        warning_time_minutes: ((coast_km / ARRIVAL_DIVISOR_KM_PER_MIN) as u32).max(10),
    }
}

pub fn inundation_zones(energy_mt: f64, is_ocean: bool) -> InundationAssessment {
    if !is_ocean {
        return InundationAssessment {
            inundation_risk: "NONE",
            zones: Vec::new(),
            total_area_affected_km2: 0.0,
            evacuation_time_estimate: "Not applicable",
        };
    }

    let (zones, total_area_affected_km2) = if energy_mt > 100.0 {
        (
            vec![
                InundationZone {
                    zone_type: "Immediate Destruction",
                    distance_from_shore_km: "0-5",
                    risk_level: "EXTREME",
                    actions: "IMMEDIATE EVACUATION - Move to high ground >50m elevation",
                },
                InundationZone {
                    zone_type: "High Risk",
                    distance_from_shore_km: "5-15",
                    risk_level: "SEVERE",
                    actions: "Evacuate within 1 hour",
                },
            ],
            15_000.0,
        )
    } else if energy_mt > 10.0 {
        (
            vec![InundationZone {
                zone_type: "High Risk",
                distance_from_shore_km: "0-3",
                risk_level: "SEVERE",
                actions: "IMMEDIATE EVACUATION required",
            }],
            5_000.0,
        )
    } else {
        (
            vec![InundationZone {
                zone_type: "Low Risk",
                distance_from_shore_km: "0-2",
                risk_level: "MODERATE",
                actions: "Stay alert, move inland if warnings issued",
            }],
            1_000.0,
        )
    };

    InundationAssessment {
        inundation_risk: "HIGH",
        zones,
        total_area_affected_km2,
        evacuation_time_estimate: "15-60 minutes after impact",
    }
}

pub fn assess(energy_mt: f64, is_ocean: bool, coast_km: f64) -> TsunamiHazards {
    TsunamiHazards {
        tsunami_risk: tsunami_risk(energy_mt, is_ocean, coast_km),
        wave_height_prediction: wave_height(energy_mt, is_ocean),
        coastal_impact: coastal_impact(energy_mt, is_ocean, coast_km),
        inundation_zones: inundation_zones(energy_mt, is_ocean),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_land_impact_never_generates_tsunami() {
        for energy in [0.1, 10.0, 1000.0, 100_000.0] {
            let risk = tsunami_risk(energy, false, 0.0);
            assert!(!risk.tsunami_expected);
            assert_eq!(risk.risk_level, TsunamiTier::None);
        }
    }

    #[test]
    fn test_ocean_high_energy_is_extreme() {
        let risk = tsunami_risk(150.0, true, 800.0);
        assert!(risk.tsunami_expected);
        assert_eq!(risk.risk_level, TsunamiTier::Extreme);
        assert!(risk.evacuation_recommended);
        assert_eq!(risk.estimated_arrival_time_minutes, Some(100));
    }

    #[test]
    fn test_medium_tier_evacuation_depends_on_coast() {
        let near = tsunami_risk(5.0, true, 300.0);
        assert_eq!(near.risk_level, TsunamiTier::Medium);
        assert!(near.evacuation_recommended);

        let far = tsunami_risk(5.0, true, 900.0);
        assert!(!far.evacuation_recommended);
    }

    #[test]
    fn test_wave_height_bands() {
        assert_eq!(wave_height(2000.0, true).classification, "Mega-tsunami");
        assert_eq!(wave_height(500.0, true).classification, "Major tsunami");
        assert_eq!(wave_height(50.0, true).classification, "Moderate tsunami");
        assert_eq!(wave_height(5.0, true).classification, "Small tsunami");
        assert_eq!(wave_height(0.5, true).classification, "Very small waves");
        assert_eq!(wave_height(2000.0, false).classification, "No tsunami");
    }

    #[test]
    fn test_inundation_zone_count_scales_with_energy() {
        assert_eq!(inundation_zones(500.0, true).zones.len(), 2);
        assert_eq!(inundation_zones(50.0, true).zones.len(), 1);
        assert_eq!(inundation_zones(0.5, true).zones.len(), 1);
        assert!(inundation_zones(500.0, false).zones.is_empty());
    }

    #[test]
    fn test_coastal_warning_time_has_floor() {
        let impact = coastal_impact(200.0, true, 16.0);
        assert_eq!(impact.warning_time_minutes, 10);
    }
}
