//! Static catalogue of deflection strategies.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrategyKind {
    KineticImpactor,
    GravityTractor,
    NuclearDeflection,
    LaserAblation,
    IonBeamShepherd,
    AlbedoModification,
}

#[derive(Debug, Clone, Serialize)]
pub struct StrategyInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub effectiveness: &'static str,
    pub development_level: &'static str,
    pub time_required: &'static str,
    pub cost: &'static str,
    pub best_for: &'static [&'static str],
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 6] = [
        StrategyKind::KineticImpactor,
        StrategyKind::GravityTractor,
        StrategyKind::NuclearDeflection,
        StrategyKind::LaserAblation,
        StrategyKind::IonBeamShepherd,
        StrategyKind::AlbedoModification,
    ];

    pub fn info(&self) -> &'static StrategyInfo {
        match self {
            StrategyKind::KineticImpactor => &StrategyInfo {
                name: "Kinetic Impactor",
                description: "Spacecraft impacts asteroid to change its velocity",
                effectiveness: "High for small to medium asteroids",
                development_level: "Tested (DART Mission)",
                time_required: "2-10 years",
                cost: "Medium",
                best_for: &["S-type", "M-type", "Q-type"],
            },
            StrategyKind::GravityTractor => &StrategyInfo {
                name: "Gravity Tractor",
                description: "Spacecraft flies near asteroid, using gravity to slowly alter course",
                effectiveness: "Medium for all sizes",
                development_level: "Concept",
                time_required: "10-20 years",
                cost: "High",
                best_for: &["All types"],
            },
            StrategyKind::NuclearDeflection => &StrategyInfo {
                name: "Nuclear Deflection",
                description: "Nuclear explosion near asteroid surface alters trajectory",
                effectiveness: "Very high for large asteroids",
                development_level: "Theoretical",
                time_required: "5-15 years",
                cost: "Very high",
                best_for: &["C-type", "D-type", "P-type"],
            },
            StrategyKind::LaserAblation => &StrategyInfo {
                name: "Laser Ablation",
                description: "High-power lasers vaporize surface material, creating thrust",
                effectiveness: "Medium for small asteroids",
                development_level: "Experimental",
                time_required: "15-25 years",
                cost: "Very high",
                best_for: &["S-type", "M-type"],
            },
            StrategyKind::IonBeamShepherd => &StrategyInfo {
                name: "Ion Beam Shepherd",
                description: "Ion thrusters directed at asteroid surface for gentle push",
                effectiveness: "Low to medium",
                development_level: "Concept",
                time_required: "20-30 years",
                cost: "Extreme",
                best_for: &["Small asteroids"],
            },
            StrategyKind::AlbedoModification => &StrategyInfo {
                name: "Surface Albedo Modification",
                description: "Change asteroid's reflectivity to alter solar radiation pressure",
                effectiveness: "Very low",
                development_level: "Theoretical",
                time_required: "10-20 years",
                cost: "Low",
                best_for: &["Small, rotating asteroids"],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_is_complete() {
        assert_eq!(StrategyKind::ALL.len(), 6);
        for kind in StrategyKind::ALL {
            let info = kind.info();
            assert!(!info.name.is_empty());
            assert!(!info.best_for.is_empty());
        }
    }

    #[test]
    fn test_tested_strategy_is_the_kinetic_impactor() {
        let tested: Vec<_> = StrategyKind::ALL
            .iter()
            .filter(|k| k.info().development_level.starts_with("Tested"))
            .collect();
        assert_eq!(tested, vec![&StrategyKind::KineticImpactor]);
    }
}
