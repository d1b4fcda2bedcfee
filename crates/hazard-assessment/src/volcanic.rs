//! Volcanic hazard assessment around an impact point.
//!
//! The volcano catalogue is a static mock with a single entry; trigger
//! risk requires both an energy threshold and at least one active volcano
//! in range.

use geo_classify::{haversine_km, GeoPoint};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Volcano {
    pub name: &'static str,
    pub distance_km: f64,
    pub elevation_m: u32,
    pub last_eruption: &'static str,
    pub status: &'static str,
    pub volcano_type: &'static str,
    pub risk_level: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct VolcanoSurvey {
    pub count: usize,
    pub search_radius_km: f64,
    pub active_volcanoes_count: usize,
    pub volcanoes: Vec<Volcano>,
    pub closest_volcano: Option<Volcano>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriggerTier {
    Low,
    LowMedium,
    Medium,
    High,
    VeryHigh,
}

#[derive(Debug, Clone, Serialize)]
pub struct TriggerRisk {
    pub risk_level: TriggerTier,
    pub probability: &'static str,
    pub active_volcanoes_nearby: usize,
    pub recommendation: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AshFallForecast {
    pub ash_fall_expected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affected_radius_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_warning: Option<&'static str>,
}

/// Composite volcanic section of the hazard report.
#[derive(Debug, Clone, Serialize)]
pub struct VolcanicHazards {
    pub nearby_volcanoes: VolcanoSurvey,
    pub eruption_trigger_risk: TriggerRisk,
    pub ash_fall_prediction: AshFallForecast,
}

fn catalogue(here: GeoPoint) -> Vec<Volcano> {
    vec![Volcano {
        name: "Mount St. Helens",
        distance_km: (haversine_km(here, GeoPoint::new(46.2, -122.2)) * 10.0).round() / 10.0,
        elevation_m: 2549,
        last_eruption: "2008",
        status: "Active",
        volcano_type: "Stratovolcano",
        risk_level: "High",
    }]
}

pub fn nearby_volcanoes(lat: f64, lng: f64, radius_km: f64) -> VolcanoSurvey {
    let in_range: Vec<Volcano> = catalogue(GeoPoint::new(lat, lng))
        .into_iter()
        .filter(|v| v.distance_km <= radius_km)
        .collect();

    let closest = in_range
        .iter()
        .min_by(|a, b| a.distance_km.total_cmp(&b.distance_km))
        .cloned();

    VolcanoSurvey {
        count: in_range.len(),
        search_radius_km: radius_km,
        active_volcanoes_count: in_range.iter().filter(|v| v.status == "Active").count(),
        volcanoes: in_range,
        closest_volcano: closest,
    }
}

/// Trigger risk requires both the energy threshold and nearby active
/// volcanoes; either missing drops to Low.
pub fn trigger_risk(lat: f64, lng: f64, energy_mt: f64) -> TriggerRisk {
    let active = nearby_volcanoes(lat, lng, 300.0).active_volcanoes_count;

    let (risk_level, probability) = match energy_mt {
        e if e > 1000.0 && active > 0 => (TriggerTier::VeryHigh, "40-60%"),
        e if e > 500.0 && active > 0 => (TriggerTier::High, "25-40%"),
        e if e > 100.0 && active > 0 => (TriggerTier::Medium, "15-25%"),
        e if e > 50.0 && active > 0 => (TriggerTier::LowMedium, "5-15%"),
        _ => (TriggerTier::Low, "<5%"),
    };

    TriggerRisk {
        risk_level,
        probability,
        active_volcanoes_nearby: active,
        recommendation: if active > 0 {
            "Monitor volcanic activity"
        } else {
            "No immediate concern"
        },
    }
}

pub fn ash_fall(lat: f64, lng: f64, energy_mt: f64) -> AshFallForecast {
    let active = nearby_volcanoes(lat, lng, 500.0).active_volcanoes_count;
    if active == 0 {
        return AshFallForecast {
            ash_fall_expected: false,
            reason: Some("No active volcanoes in the area"),
            risk_level: None,
            affected_radius_km: None,
            health_warning: None,
        };
    }

    AshFallForecast {
        ash_fall_expected: true,
        reason: None,
        risk_level: Some(match energy_mt {
            e if e > 500.0 => "HIGH",
            e if e > 100.0 => "MEDIUM",
            _ => "LOW",
        }),
        affected_radius_km: Some(200.0),
        health_warning: Some("Wear masks outdoors"),
    }
}

pub fn assess(lat: f64, lng: f64, energy_mt: f64) -> VolcanicHazards {
    VolcanicHazards {
        nearby_volcanoes: nearby_volcanoes(lat, lng, 500.0),
        eruption_trigger_risk: trigger_risk(lat, lng, energy_mt),
        ash_fall_prediction: ash_fall(lat, lng, energy_mt),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Near Mount St. Helens (46.2, -122.2).
    const NEAR: (f64, f64) = (46.5, -122.0);
    // Mid-Pacific, thousands of km from the catalogue entry.
    const FAR: (f64, f64) = (0.0, -160.0);

    #[test]
    fn test_survey_includes_nearby_volcano() {
        let survey = nearby_volcanoes(NEAR.0, NEAR.1, 500.0);
        assert_eq!(survey.count, 1);
        assert_eq!(survey.active_volcanoes_count, 1);
        assert_eq!(
            survey.closest_volcano.as_ref().map(|v| v.name),
            Some("Mount St. Helens")
        );
    }

    #[test]
    fn test_survey_empty_when_out_of_range() {
        let survey = nearby_volcanoes(FAR.0, FAR.1, 500.0);
        assert_eq!(survey.count, 0);
        assert!(survey.closest_volcano.is_none());
    }

    #[test]
    fn test_trigger_requires_active_volcano() {
        // High energy but nothing active in range stays Low.
        let risk = trigger_risk(FAR.0, FAR.1, 5000.0);
        assert_eq!(risk.risk_level, TriggerTier::Low);
        assert_eq!(risk.probability, "<5%");
        assert_eq!(risk.recommendation, "No immediate concern");
    }

    #[test]
    fn test_trigger_tiers_with_active_volcano() {
        assert_eq!(
            trigger_risk(NEAR.0, NEAR.1, 2000.0).risk_level,
            TriggerTier::VeryHigh
        );
        assert_eq!(
            trigger_risk(NEAR.0, NEAR.1, 600.0).risk_level,
            TriggerTier::High
        );
        assert_eq!(
            trigger_risk(NEAR.0, NEAR.1, 200.0).risk_level,
            TriggerTier::Medium
        );
        assert_eq!(
            trigger_risk(NEAR.0, NEAR.1, 75.0).risk_level,
            TriggerTier::LowMedium
        );
        assert_eq!(
            trigger_risk(NEAR.0, NEAR.1, 10.0).risk_level,
            TriggerTier::Low
        );
    }

    #[test]
    fn test_ash_fall_needs_active_volcano() {
        let none = ash_fall(FAR.0, FAR.1, 10_000.0);
        assert!(!none.ash_fall_expected);
        assert_eq!(none.reason, Some("No active volcanoes in the area"));

        let some = ash_fall(NEAR.0, NEAR.1, 600.0);
        assert!(some.ash_fall_expected);
        assert_eq!(some.risk_level, Some("HIGH"));
        assert_eq!(some.affected_radius_km, Some(200.0));
    }
}
