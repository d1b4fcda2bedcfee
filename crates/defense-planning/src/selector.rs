//! Mission selector: eligibility rules over size, spectral class, threat
//! level, and lead time, enriched with per-asteroid mission details.

use hazard_assessment::RiskLevel;
use serde::Serialize;
use spectral_class::SpectralType;

use crate::catalog::{StrategyInfo, StrategyKind};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Readiness {
    Ready,
    NearTerm,
    MidTerm,
    Future,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlannedStrategy {
    pub strategy: StrategyKind,
    #[serde(flatten)]
    pub info: &'static StrategyInfo,
    pub success_probability: &'static str,
    pub priority_score: u8,
    pub recommended_mission_name: String,
    pub required_technology_level: Readiness,
    pub international_cooperation_required: bool,
}

fn readiness(development_level: &str) -> Readiness {
    match development_level {
        l if l.starts_with("Tested") => Readiness::Ready,
        l if l.starts_with("Experimental") => Readiness::NearTerm,
        l if l.starts_with("Concept") => Readiness::MidTerm,
        _ => Readiness::Future,
    }
}

fn success_probability(diameter_m: f64) -> &'static str {
    match diameter_m {
        d if d < 100.0 => "80-95%",
        d if d < 500.0 => "60-80%",
        _ => "30-60%",
    }
}

fn priority(threat: RiskLevel) -> u8 {
    match threat {
        RiskLevel::Minimal | RiskLevel::Low => 1,
        RiskLevel::Medium => 2,
        RiskLevel::High => 3,
        RiskLevel::VeryHigh => 4,
        RiskLevel::Extreme => 5,
    }
}

fn mission_name(asteroid_name: &str) -> String {
    let base: String = asteroid_name
        .chars()
        .filter(|c| *c != '(' && *c != ')' && *c != ' ')
        .collect();
    format!("SHIELD_{base}")
}

fn plan(kind: StrategyKind, asteroid_name: &str, diameter_m: f64, threat: RiskLevel) -> PlannedStrategy {
    let info = kind.info();
    PlannedStrategy {
        strategy: kind,
        info,
        success_probability: success_probability(diameter_m),
        priority_score: priority(threat),
        recommended_mission_name: mission_name(asteroid_name),
        required_technology_level: readiness(info.development_level),
        international_cooperation_required: diameter_m > 200.0,
    }
}

/// Up to three strategies, priority-descending. Eligibility is judged on
/// the diameter in meters.
pub fn select(
    asteroid_name: &str,
    diameter_km: f64,
    spectral: SpectralType,
    threat: RiskLevel,
    lead_years: f64,
) -> Vec<PlannedStrategy> {
    let d = diameter_km * 1000.0;
    let mut strategies = Vec::new();

    if d < 500.0 && lead_years > 2.0 {
        strategies.push(plan(StrategyKind::KineticImpactor, asteroid_name, d, threat));
    }
    if d < 1000.0 && lead_years > 10.0 {
        strategies.push(plan(StrategyKind::GravityTractor, asteroid_name, d, threat));
    }
    if threat >= RiskLevel::High && lead_years < 5.0 && d > 200.0 {
        strategies.push(plan(StrategyKind::NuclearDeflection, asteroid_name, d, threat));
    }
    if matches!(spectral, SpectralType::S | SpectralType::M) && d < 200.0 {
        strategies.push(plan(StrategyKind::LaserAblation, asteroid_name, d, threat));
    }

    strategies.sort_by(|a, b| b.priority_score.cmp(&a.priority_score));
    strategies.truncate(3);
    strategies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_slow_threat_gets_kinetic_and_laser() {
        let picks = select("(2010 PK9)", 0.15, SpectralType::S, RiskLevel::Medium, 4.0);
        let kinds: Vec<_> = picks.iter().map(|p| p.strategy).collect();
        assert_eq!(
            kinds,
            vec![StrategyKind::KineticImpactor, StrategyKind::LaserAblation]
        );
    }

    #[test]
    fn test_large_urgent_threat_gets_nuclear_only() {
        let picks = select("Apophis", 0.8, SpectralType::C, RiskLevel::Extreme, 1.0);
        assert_eq!(picks.len(), 1);
        assert_eq!(picks[0].strategy, StrategyKind::NuclearDeflection);
        assert_eq!(picks[0].priority_score, 5);
        assert!(picks[0].international_cooperation_required);
    }

    #[test]
    fn test_huge_short_lead_low_threat_yields_nothing() {
        // 50 km object with 0.1 years of lead fails every eligibility rule.
        let picks = select("Chicxulub-2", 50.0, SpectralType::C, RiskLevel::Low, 0.1);
        assert!(picks.is_empty());
    }

    #[test]
    fn test_never_more_than_three() {
        // Small S-type with a long lead qualifies for kinetic, gravity, laser.
        let picks = select("(2019 OK)", 0.1, SpectralType::S, RiskLevel::High, 15.0);
        assert!(picks.len() <= 3);
        assert_eq!(picks.len(), 3);
    }

    #[test]
    fn test_mission_name_strips_punctuation() {
        let picks = select("(2010 PK9)", 0.1, SpectralType::S, RiskLevel::Low, 4.0);
        assert_eq!(picks[0].recommended_mission_name, "SHIELD_2010PK9");
    }

    #[test]
    fn test_success_band_by_size() {
        let small = select("A", 0.05, SpectralType::C, RiskLevel::Low, 4.0);
        assert_eq!(small[0].success_probability, "80-95%");
        let medium = select("B", 0.3, SpectralType::C, RiskLevel::Low, 4.0);
        assert_eq!(medium[0].success_probability, "60-80%");
    }

    #[test]
    fn test_readiness_mapping() {
        let picks = select("C", 0.1, SpectralType::S, RiskLevel::High, 15.0);
        for p in &picks {
            let expected = match p.strategy {
                StrategyKind::KineticImpactor => Readiness::Ready,
                StrategyKind::GravityTractor => Readiness::MidTerm,
                StrategyKind::LaserAblation => Readiness::NearTerm,
                _ => Readiness::Future,
            };
            assert_eq!(p.required_technology_level, expected);
        }
    }
}
