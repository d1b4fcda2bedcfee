//! Spectral Classification Library
//!
//! Tholen-style spectral taxonomy for near-Earth objects. Real spectral
//! types are rarely known for newly catalogued bodies, so classification is
//! a deterministic weighted draw seeded by the asteroid id: the same id
//! always maps to the same type, and the population follows the observed
//! belt distribution (S and C types dominate).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Tholen-style spectral type codes, plus Unknown for undetermined bodies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SpectralType {
    C,
    S,
    M,
    V,
    B,
    Q,
    K,
    D,
    P,
    R,
    T,
    A,
    L,
    F,
    G,
    U,
    Unknown,
}

/// Static catalogue metadata for a spectral type.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SpectralInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub albedo_range: (f64, f64),
    pub characteristics: &'static [&'static str],
    pub composition: &'static str,
}

/// Classification result with catalogue metadata attached.
#[derive(Debug, Clone, Serialize)]
pub struct SpectralClassification {
    pub type_code: SpectralType,
    pub type_name: &'static str,
    pub description: &'static str,
    pub albedo_range: (f64, f64),
    pub characteristics: &'static [&'static str],
    pub composition: &'static str,
    pub classification_method: &'static str,
    pub confidence: &'static str,
}

/// Population weights for the statistical classifier. Sums to 100.
const TYPE_DISTRIBUTION: [(SpectralType, u32); 13] = [
    (SpectralType::S, 45),
    (SpectralType::C, 30),
    (SpectralType::M, 5),
    (SpectralType::Q, 5),
    (SpectralType::V, 3),
    (SpectralType::B, 2),
    (SpectralType::K, 2),
    (SpectralType::D, 2),
    (SpectralType::P, 2),
    (SpectralType::R, 1),
    (SpectralType::T, 1),
    (SpectralType::A, 1),
    (SpectralType::L, 1),
];

impl SpectralType {
    /// Catalogue metadata for this type.
    pub fn info(self) -> &'static SpectralInfo {
        match self {
            SpectralType::C => &SpectralInfo {
                name: "C-type (Carbonaceous)",
                description: "Dark, carbon-rich asteroids. Most common in outer belt.",
                albedo_range: (0.03, 0.10),
                characteristics: &["Very dark", "Carbon-rich", "Primitive composition"],
                composition: "Carbon, water ice, organic compounds",
            },
            SpectralType::S => &SpectralInfo {
                name: "S-type (Silicaceous)",
                description: "Stony, silicate-rich asteroids. Common in inner belt.",
                albedo_range: (0.10, 0.22),
                characteristics: &["Moderate brightness", "Silicate minerals", "Rocky"],
                composition: "Iron, magnesium silicates",
            },
            SpectralType::M => &SpectralInfo {
                name: "M-type (Metallic)",
                description: "Metal-rich asteroids, possibly exposed cores.",
                albedo_range: (0.10, 0.18),
                characteristics: &["Metal-rich", "High density", "Nickel-iron"],
                composition: "Iron, nickel, cobalt",
            },
            SpectralType::V => &SpectralInfo {
                name: "V-type (Vesta-like)",
                description: "Basaltic composition, similar to asteroid Vesta.",
                albedo_range: (0.30, 0.50),
                characteristics: &["Very bright", "Basaltic", "Differentiated"],
                composition: "Basalt, pyroxene",
            },
            SpectralType::B => &SpectralInfo {
                name: "B-type",
                description: "Similar to C-type but slightly brighter.",
                albedo_range: (0.04, 0.08),
                characteristics: &["Dark", "Primitive", "Carbon-bearing"],
                composition: "Carbonaceous materials",
            },
            SpectralType::Q => &SpectralInfo {
                name: "Q-type",
                description: "Similar to ordinary chondrite meteorites.",
                albedo_range: (0.15, 0.30),
                characteristics: &["Fresh surface", "Unweathered", "Stony"],
                composition: "Olivine, pyroxene, metal",
            },
            SpectralType::K => &SpectralInfo {
                name: "K-type",
                description: "Intermediate between C and S types.",
                albedo_range: (0.08, 0.15),
                characteristics: &["Moderate reflectance", "Mixed composition"],
                composition: "Mixed silicates and carbonaceous materials",
            },
            SpectralType::D => &SpectralInfo {
                name: "D-type",
                description: "Very dark, organic-rich asteroids.",
                albedo_range: (0.02, 0.05),
                characteristics: &["Extremely dark", "Organic-rich"],
                composition: "Organic compounds, water ice",
            },
            SpectralType::P => &SpectralInfo {
                name: "P-type",
                description: "Similar to D-type, very dark and red.",
                albedo_range: (0.02, 0.06),
                characteristics: &["Very dark", "Reddish", "Primitive"],
                composition: "Organic materials, silicates",
            },
            SpectralType::R => &SpectralInfo {
                name: "R-type",
                description: "Rich in olivine, relatively rare.",
                albedo_range: (0.20, 0.40),
                characteristics: &["Olivine-rich", "Bright", "Uncommon"],
                composition: "Olivine, pyroxene",
            },
            SpectralType::T => &SpectralInfo {
                name: "T-type",
                description: "Moderately red, similar to D and P types.",
                albedo_range: (0.03, 0.07),
                characteristics: &["Dark", "Reddish", "Trojan asteroids"],
                composition: "Organic materials",
            },
            SpectralType::A => &SpectralInfo {
                name: "A-type",
                description: "Olivine-dominated, very rare.",
                albedo_range: (0.15, 0.30),
                characteristics: &["Olivine-rich", "Differentiated", "Extremely rare"],
                composition: "Pure olivine",
            },
            SpectralType::L => &SpectralInfo {
                name: "L-type",
                description: "Similar to K-type, moderate albedo.",
                albedo_range: (0.08, 0.18),
                characteristics: &["Moderate brightness", "Mixed composition"],
                composition: "Mixed materials",
            },
            SpectralType::F => &SpectralInfo {
                name: "F-type",
                description: "Similar to B-type, carbon-rich.",
                albedo_range: (0.03, 0.06),
                characteristics: &["Dark", "Carbonaceous"],
                composition: "Carbon compounds",
            },
            SpectralType::G => &SpectralInfo {
                name: "G-type",
                description: "Similar to C-type with UV absorption.",
                albedo_range: (0.05, 0.09),
                characteristics: &["Dark", "Carbonaceous", "UV absorption"],
                composition: "Carbonaceous materials with organics",
            },
            SpectralType::U => &SpectralInfo {
                name: "U-type (Unclassified)",
                description: "Does not fit standard classifications.",
                albedo_range: (0.0, 1.0),
                characteristics: &["Unusual spectrum", "Rare"],
                composition: "Variable",
            },
            SpectralType::Unknown => &SpectralInfo {
                name: "Unknown/Unclassified",
                description: "Spectral type not determined.",
                albedo_range: (0.0, 1.0),
                characteristics: &["Classification pending", "Insufficient data"],
                composition: "Unknown",
            },
        }
    }
}

/// Deterministic weighted classification from an asteroid id.
///
/// A locally scoped generator is seeded from the id, so repeated or
/// concurrent calls for different ids can never contaminate each other.
pub fn classify(asteroid_id: i64) -> SpectralType {
    let mut rng = StdRng::seed_from_u64(asteroid_id as u64);

    let total: u32 = TYPE_DISTRIBUTION.iter().map(|&(_, w)| w).sum();
    let draw = rng.gen_range(1..=total);

    let mut cumulative = 0;
    for &(type_code, weight) in &TYPE_DISTRIBUTION {
        cumulative += weight;
        if draw <= cumulative {
            return type_code;
        }
    }
    SpectralType::Unknown
}

/// Classification with catalogue metadata attached.
pub fn classification(asteroid_id: i64) -> SpectralClassification {
    let type_code = classify(asteroid_id);
    let info = type_code.info();

    SpectralClassification {
        type_code,
        type_name: info.name,
        description: info.description,
        albedo_range: info.albedo_range,
        characteristics: info.characteristics,
        composition: info.composition,
        classification_method: "statistical",
        confidence: "low",
    }
}
