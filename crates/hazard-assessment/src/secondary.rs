//! Location-dependent secondary hazards. Ocean impacts get marine and
//! coastal-infrastructure assessments; land impacts get wildfire,
//! landslide, and infrastructure advisories. Both include the
//! nuclear-facility check.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct MarineHazards {
    pub shipping_disruption: &'static str,
    pub fishing_industry_impact: &'static str,
    pub underwater_infrastructure: Vec<&'static str>,
    pub maritime_evacuation: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoastalInfrastructure {
    pub risk_level: &'static str,
    pub distance_to_nearest_coast_km: f64,
    pub affected_facilities: Vec<&'static str>,
    pub estimated_damage_usd: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NuclearFacilities {
    pub nuclear_facilities_nearby: u32,
    pub closest_facility_distance_km: f64,
    pub safety_concerns: &'static str,
    pub recommendation: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct WildfireRisk {
    pub wildfire_probability: &'static str,
    pub fuel_areas: Vec<&'static str>,
    pub fire_spread_risk: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LandslideRisk {
    pub landslide_risk: &'static str,
    pub triggering_factors: Vec<&'static str>,
    pub vulnerable_areas: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InfrastructureImpact {
    pub critical_infrastructure_at_risk: Vec<&'static str>,
    pub recovery_time_estimate: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SecondaryHazards {
    Ocean {
        marine_hazards: MarineHazards,
        coastal_infrastructure: CoastalInfrastructure,
        nuclear_facilities_risk: NuclearFacilities,
    },
    Land {
        wildfire_risk: WildfireRisk,
        landslide_risk: LandslideRisk,
        infrastructure_damage: InfrastructureImpact,
        nuclear_facilities_risk: NuclearFacilities,
    },
}

fn marine_hazards() -> MarineHazards {
    MarineHazards {
        shipping_disruption: "Severe within 500km",
        fishing_industry_impact: "Major disruption expected",
        underwater_infrastructure: vec!["Submarine cables", "Oil platforms at risk"],
        maritime_evacuation: "Required for vessels within impact zone",
    }
}

pub fn coastal_infrastructure(energy_mt: f64, coast_km: f64) -> CoastalInfrastructure {
    let (risk_level, affected_facilities) = match coast_km {
        d if d > 2000.0 => ("LOW", vec![]),
        d if d > 1000.0 => ("MEDIUM", vec!["Remote coastal communities", "Small ports"]),
        _ => (
            "HIGH",
            vec![
                "Major port facilities",
                "Coastal power plants",
                "Desalination plants",
                "Coastal highways and bridges",
                "Tourist infrastructure",
            ],
        ),
    };

    CoastalInfrastructure {
        risk_level,
        distance_to_nearest_coast_km: coast_km,
        affected_facilities,
        estimated_damage_usd: damage_cost_usd(energy_mt, coast_km),
    }
}

/// Baseline $1M per megaton, attenuated with distance to coast.
pub fn damage_cost_usd(energy_mt: f64, distance_km: f64) -> String {
    let base = energy_mt * 1_000_000.0;
    let distance_factor = (1.0 - distance_km / 5000.0).max(0.1);
    let total = base * distance_factor;

    if total > 1e12 {
        format!("${:.1} trillion", total / 1e12)
    } else if total > 1e9 {
        format!("${:.1} billion", total / 1e9)
    } else {
        format!("${:.1} million", total / 1e6)
    }
}

fn nuclear_facilities() -> NuclearFacilities {
    NuclearFacilities {
        nuclear_facilities_nearby: 0,
        closest_facility_distance_km: 500.0,
        safety_concerns: "Low",
        recommendation: "Standard monitoring",
    }
}

fn wildfire_risk() -> WildfireRisk {
    WildfireRisk {
        wildfire_probability: "High near impact zone",
        fuel_areas: vec!["Forests", "Urban areas", "Agricultural land"],
        fire_spread_risk: "Moderate to High",
    }
}

fn landslide_risk() -> LandslideRisk {
    LandslideRisk {
        landslide_risk: "Medium in mountainous areas",
        triggering_factors: vec!["Ground shaking", "Slope instability"],
        vulnerable_areas: vec!["Steep slopes", "Recent construction sites"],
    }
}

fn infrastructure_impact() -> InfrastructureImpact {
    InfrastructureImpact {
        critical_infrastructure_at_risk: vec![
            "Power grids",
            "Water treatment plants",
            "Transportation networks",
            "Communication towers",
        ],
        recovery_time_estimate: "Weeks to months",
    }
}

pub fn assess(energy_mt: f64, is_ocean: bool, coast_km: f64) -> SecondaryHazards {
    if is_ocean {
        SecondaryHazards::Ocean {
            marine_hazards: marine_hazards(),
            coastal_infrastructure: coastal_infrastructure(energy_mt, coast_km),
            nuclear_facilities_risk: nuclear_facilities(),
        }
    } else {
        SecondaryHazards::Land {
            wildfire_risk: wildfire_risk(),
            landslide_risk: landslide_risk(),
            infrastructure_damage: infrastructure_impact(),
            nuclear_facilities_risk: nuclear_facilities(),
        }
    }
}
