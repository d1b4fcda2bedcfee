//! Impact timelines: lead-time buckets from close-approach distance and
//! the scenario-based impact date estimator.

use chrono::{Duration, NaiveDate, Utc};
use impact_physics::AU_KM;
use serde::Serialize;

/// Coarse deflection lead time in years from the close-approach distance.
pub fn time_until_impact_years(miss_distance_km: f64) -> f64 {
    let au = miss_distance_km / AU_KM;
    match au {
        a if a <= 0.01 => 0.1,
        a if a <= 0.05 => 1.0,
        a if a <= 0.1 => 5.0,
        _ => 10.0,
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    DirectCollision,
    GravitationalPerturbation,
    OrbitalResonance,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImpactScenario {
    pub scenario: ScenarioKind,
    pub estimated_impact_date: NaiveDate,
    pub days_until_impact: i64,
    pub confidence: &'static str,
    pub probability: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImpactDateEstimate {
    pub scenarios: Vec<ImpactScenario>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_likely_scenario: Option<ScenarioKind>,
    pub data_quality: &'static str,
}

const DAYS_PER_YEAR: f64 = 365.25;

fn orbital_period_years(au: f64) -> f64 {
    match au {
        a if a <= 0.1 => 1.0,
        a if a <= 1.0 => 2.0,
        _ => 5.0,
    }
}

fn scenario_table() -> [(ScenarioKind, f64, &'static str, &'static str); 3] {
    [
        (ScenarioKind::DirectCollision, 1.0, "medium", "5-15%"),
        (ScenarioKind::GravitationalPerturbation, 1.5, "low", "1-5%"),
        (ScenarioKind::OrbitalResonance, 2.5, "very_low", "<1%"),
    ]
}

/// Three projected impact scenarios from the recorded close approach.
/// An unparseable approach date anchors at today; a nonsensical miss
/// distance yields an "insufficient data" payload instead of an error.
pub fn estimate_impact_dates(approach_date: &str, miss_distance_km: f64) -> ImpactDateEstimate {
    if !miss_distance_km.is_finite() || miss_distance_km <= 0.0 {
        return ImpactDateEstimate {
            scenarios: Vec::new(),
            most_likely_scenario: None,
            data_quality: "insufficient data",
        };
    }

    let today = Utc::now().date_naive();
    let anchor = NaiveDate::parse_from_str(approach_date, "%Y-%m-%d").unwrap_or(today);

    let au = miss_distance_km / AU_KM;
    let period = orbital_period_years(au);

    let scenarios = scenario_table()
        .into_iter()
        .map(|(scenario, multiplier, confidence, probability)| {
            let date = anchor + Duration::days((period * multiplier * DAYS_PER_YEAR) as i64);
            ImpactScenario {
                scenario,
                estimated_impact_date: date,
                days_until_impact: (date - today).num_days(),
                confidence,
                probability,
            }
        })
        .collect();

    let most_likely = match au {
        a if a <= 0.01 => ScenarioKind::DirectCollision,
        a if a <= 0.05 => ScenarioKind::GravitationalPerturbation,
        _ => ScenarioKind::OrbitalResonance,
    };

    ImpactDateEstimate {
        scenarios,
        most_likely_scenario: Some(most_likely),
        data_quality: "nominal",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_time_buckets() {
        assert_eq!(time_until_impact_years(0.005 * AU_KM), 0.1);
        assert_eq!(time_until_impact_years(0.03 * AU_KM), 1.0);
        assert_eq!(time_until_impact_years(0.08 * AU_KM), 5.0);
        assert_eq!(time_until_impact_years(0.5 * AU_KM), 10.0);
    }

    #[test]
    fn test_three_scenarios_in_period_order() {
        let est = estimate_impact_dates("2026-09-01", 0.03 * AU_KM);
        assert_eq!(est.scenarios.len(), 3);
        assert_eq!(est.data_quality, "nominal");
        // 0.03 au: one-year base period, multipliers 1.0 / 1.5 / 2.5.
        let anchor = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        assert_eq!(
            est.scenarios[0].estimated_impact_date,
            anchor + Duration::days(365)
        );
        assert_eq!(
            est.scenarios[1].estimated_impact_date,
            anchor + Duration::days((1.5 * DAYS_PER_YEAR) as i64)
        );
        assert_eq!(
            est.scenarios[2].estimated_impact_date,
            anchor + Duration::days((2.5 * DAYS_PER_YEAR) as i64)
        );
    }

    #[test]
    fn test_most_likely_by_distance() {
        let direct = estimate_impact_dates("2026-09-01", 0.005 * AU_KM);
        assert_eq!(
            direct.most_likely_scenario,
            Some(ScenarioKind::DirectCollision)
        );
        let perturbed = estimate_impact_dates("2026-09-01", 0.03 * AU_KM);
        assert_eq!(
            perturbed.most_likely_scenario,
            Some(ScenarioKind::GravitationalPerturbation)
        );
        let resonant = estimate_impact_dates("2026-09-01", 0.5 * AU_KM);
        assert_eq!(
            resonant.most_likely_scenario,
            Some(ScenarioKind::OrbitalResonance)
        );
    }

    #[test]
    fn test_bad_date_anchors_at_today() {
        let est = estimate_impact_dates("not-a-date", 0.03 * AU_KM);
        let expected = Utc::now().date_naive() + Duration::days(365);
        assert_eq!(est.scenarios[0].estimated_impact_date, expected);
    }

    #[test]
    fn test_nonsense_distance_degrades_without_error() {
        let est = estimate_impact_dates("2026-09-01", -5.0);
        assert!(est.scenarios.is_empty());
        assert_eq!(est.data_quality, "insufficient data");
        assert!(est.most_likely_scenario.is_none());
    }
}
