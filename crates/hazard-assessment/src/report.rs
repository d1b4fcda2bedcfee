//! Full hazard report composition. Pure over its inputs; the caller
//! resolves the impact site and land-use class first (including any
//! external lookups) and this module never errors.

use geo_classify::{distance_to_coast_km, ImpactSite, LocationType};
use serde::Serialize;

use crate::atmospheric::{self, AtmosphericHazards};
use crate::casualty::{self, CasualtyEstimate};
use crate::risk::{self, EvacuationZones, PrimaryHazard, RiskLevel};
use crate::secondary::{self, SecondaryHazards};
use crate::seismic::{self, SeismicHazards};
use crate::tsunami::{self, TsunamiHazards};
use crate::volcanic::{self, VolcanicHazards};

/// Asteroid-shaped inputs for a hazard report.
#[derive(Debug, Clone)]
pub struct HazardInput {
    pub asteroid_id: i64,
    pub name: String,
    pub diameter_km: f64,
    pub miss_distance_km: f64,
    pub energy_megatons: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AsteroidInfo {
    pub id: i64,
    pub name: String,
    pub energy_megatons: f64,
    pub impact_location: [f64; 2],
    pub impact_type: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CombinedRisk {
    pub overall_risk_level: RiskLevel,
    pub most_dangerous_hazard: PrimaryHazard,
    pub evacuation_priority_zones: EvacuationZones,
    pub emergency_response_time: &'static str,
    pub risk_score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct HazardReport {
    pub asteroid_info: AsteroidInfo,
    pub seismic_hazards: SeismicHazards,
    pub volcanic_hazards: VolcanicHazards,
    pub tsunami_hazards: TsunamiHazards,
    pub atmospheric_hazards: AtmosphericHazards,
    pub secondary_hazards: SecondaryHazards,
    pub casualty_estimate: CasualtyEstimate,
    pub combined_risk_assessment: CombinedRisk,
}

pub fn assess(input: &HazardInput, site: ImpactSite, location_type: LocationType) -> HazardReport {
    let energy = input.energy_megatons;
    let is_ocean = location_type == LocationType::Ocean;
    let coast_km = distance_to_coast_km(site.latitude, site.longitude);

    HazardReport {
        asteroid_info: AsteroidInfo {
            id: input.asteroid_id,
            name: input.name.clone(),
            energy_megatons: energy,
            impact_location: [site.latitude, site.longitude],
            impact_type: if is_ocean { "ocean" } else { "land" },
        },
        seismic_hazards: seismic::assess(energy),
        volcanic_hazards: volcanic::assess(site.latitude, site.longitude, energy),
        tsunami_hazards: tsunami::assess(energy, is_ocean, coast_km),
        atmospheric_hazards: atmospheric::assess(energy),
        secondary_hazards: secondary::assess(energy, is_ocean, coast_km),
        casualty_estimate: casualty::estimate(energy, location_type),
        combined_risk_assessment: CombinedRisk {
            overall_risk_level: risk::overall_risk_level(
                energy,
                input.miss_distance_km,
                is_ocean,
                coast_km,
            ),
            most_dangerous_hazard: risk::primary_hazard(energy, is_ocean),
            evacuation_priority_zones: risk::evacuation_zones(energy, is_ocean),
            emergency_response_time: "Immediate",
            risk_score: risk::risk_score(input.miss_distance_km, input.diameter_km, energy),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use impact_physics::AU_KM;

    fn input(energy: f64, au: f64) -> HazardInput {
        HazardInput {
            asteroid_id: 3542519,
            name: "(2010 PK9)".to_string(),
            diameter_km: 0.5,
            miss_distance_km: au * AU_KM,
            energy_megatons: energy,
        }
    }

    #[test]
    fn test_land_report_has_no_tsunami() {
        let site = ImpactSite {
            latitude: 35.7,
            longitude: 139.7,
        };
        let report = assess(&input(50.0, 0.02), site, LocationType::UrbanHigh);
        assert_eq!(report.asteroid_info.impact_type, "land");
        assert!(!report.tsunami_hazards.tsunami_risk.tsunami_expected);
        assert!(matches!(
            report.secondary_hazards,
            SecondaryHazards::Land { .. }
        ));
        assert_eq!(
            report.combined_risk_assessment.most_dangerous_hazard,
            PrimaryHazard::GroundImpact
        );
    }

    #[test]
    fn test_ocean_report_is_tsunami_led() {
        let site = ImpactSite {
            latitude: 0.0,
            longitude: -120.0,
        };
        let report = assess(&input(50.0, 0.02), site, LocationType::Ocean);
        assert_eq!(report.asteroid_info.impact_type, "ocean");
        assert!(report.tsunami_hazards.tsunami_risk.tsunami_expected);
        assert_eq!(
            report.combined_risk_assessment.most_dangerous_hazard,
            PrimaryHazard::Tsunami
        );
    }

    #[test]
    fn test_report_serializes() {
        let site = ImpactSite {
            latitude: 0.0,
            longitude: -120.0,
        };
        let report = assess(&input(50.0, 0.02), site, LocationType::Ocean);
        let value = serde_json::to_value(&report).unwrap();
        assert!(value["tsunami_hazards"]["tsunami_risk"]["tsunami_expected"]
            .as_bool()
            .unwrap());
        assert!(value["secondary_hazards"]["marine_hazards"].is_object());
    }
}
