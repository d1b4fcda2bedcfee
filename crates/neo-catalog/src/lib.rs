//! NEO Catalog Library
//!
//! In-memory table of near-Earth-object close-approach records, keyed by the
//! feed's integer id. Supports CSV bulk load (deriving kinetic energy and
//! the hazardous flag for rows that lack them), id lookup, date and hazard
//! filters, threat sweeps, and summary statistics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use impact_physics::AU_KM;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Asteroid not found: {0}")]
    NotFound(i64),
    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Hazardous-flag derivation bounds: diameter >= 140 m within 0.05 AU.
const PHA_MIN_DIAMETER_KM: f64 = 0.14;
const PHA_MAX_DISTANCE_AU: f64 = 0.05;

/// One close-approach record. Immutable once ingested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsteroidRecord {
    pub id: i64,
    pub name: String,
    pub approach_date: NaiveDate,
    pub diameter_km: f64,
    pub velocity_km_s: f64,
    pub miss_distance_km: f64,
    pub energy_megatons: f64,
    pub is_potentially_hazardous: bool,
}

impl AsteroidRecord {
    pub fn miss_distance_au(&self) -> f64 {
        self.miss_distance_km / AU_KM
    }
}

/// Threat level bands over miss distance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThreatLevel {
    Critical,
    High,
    Low,
}

impl ThreatLevel {
    /// Band a miss distance (AU) into a threat level.
    pub fn from_distance_au(au: f64) -> Self {
        if au <= 0.01 {
            ThreatLevel::Critical
        } else if au <= 0.05 {
            ThreatLevel::High
        } else {
            ThreatLevel::Low
        }
    }
}

/// Entry in the startup/endpoint threat sweep.
#[derive(Debug, Clone, Serialize)]
pub struct ThreatSummary {
    pub id: i64,
    pub name: String,
    pub approach_date: NaiveDate,
    pub diameter_km: f64,
    pub velocity_km_s: f64,
    pub miss_distance_km: f64,
    pub distance_au: f64,
    pub energy_megatons: f64,
    pub threat_level: ThreatLevel,
    pub is_immediate_threat: bool,
}

/// Aggregate catalog statistics.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummary {
    pub total_count: usize,
    pub hazardous_count: usize,
    pub avg_diameter_km: f64,
    pub avg_velocity_km_s: f64,
    pub avg_energy_megatons: f64,
    pub closest_approach_km: f64,
    pub most_energetic: Option<String>,
}

/// CSV row shape for bulk load. Energy and the hazard flag are optional and
/// derived when absent.
#[derive(Debug, Deserialize)]
struct CsvRow {
    id: i64,
    name: String,
    date: String,
    diameter_avg: f64,
    velocity_km_s: f64,
    miss_distance_km: f64,
    #[serde(default, alias = "energy_megatons_TNT")]
    energy_megatons_tnt: Option<f64>,
    #[serde(default)]
    is_potentially_hazardous: Option<bool>,
}

/// In-memory asteroid table keyed by id.
#[derive(Debug, Default)]
pub struct AsteroidCatalog {
    records: HashMap<i64, AsteroidRecord>,
}

impl AsteroidCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert or replace a record.
    pub fn insert(&mut self, record: AsteroidRecord) {
        self.records.insert(record.id, record);
    }

    pub fn get(&self, id: i64) -> Result<&AsteroidRecord> {
        self.records.get(&id).ok_or(CatalogError::NotFound(id))
    }

    /// All records ordered by approach date, then id for a stable ordering.
    pub fn all(&self) -> Vec<&AsteroidRecord> {
        let mut records: Vec<&AsteroidRecord> = self.records.values().collect();
        records.sort_by(|a, b| {
            a.approach_date
                .cmp(&b.approach_date)
                .then(a.id.cmp(&b.id))
        });
        records
    }

    /// Records approaching within the given distance bound.
    pub fn hazardous(&self, max_distance_au: f64) -> Vec<&AsteroidRecord> {
        self.all()
            .into_iter()
            .filter(|r| r.miss_distance_au() <= max_distance_au)
            .collect()
    }

    pub fn by_date(&self, date: NaiveDate) -> Vec<&AsteroidRecord> {
        self.all()
            .into_iter()
            .filter(|r| r.approach_date == date)
            .collect()
    }

    /// Sweep for records within 0.05 AU, closest first.
    pub fn threats(&self) -> Vec<ThreatSummary> {
        let mut threats: Vec<ThreatSummary> = self
            .records
            .values()
            .filter_map(|r| {
                let au = r.miss_distance_au();
                (au <= PHA_MAX_DISTANCE_AU).then(|| ThreatSummary {
                    id: r.id,
                    name: r.name.clone(),
                    approach_date: r.approach_date,
                    diameter_km: r.diameter_km,
                    velocity_km_s: r.velocity_km_s,
                    miss_distance_km: r.miss_distance_km,
                    distance_au: au,
                    energy_megatons: r.energy_megatons,
                    threat_level: ThreatLevel::from_distance_au(au),
                    is_immediate_threat: au <= 0.01,
                })
            })
            .collect();

        threats.sort_by(|a, b| a.distance_au.total_cmp(&b.distance_au));
        threats
    }

    pub fn summary(&self) -> CatalogSummary {
        let n = self.records.len();
        if n == 0 {
            return CatalogSummary {
                total_count: 0,
                hazardous_count: 0,
                avg_diameter_km: 0.0,
                avg_velocity_km_s: 0.0,
                avg_energy_megatons: 0.0,
                closest_approach_km: 0.0,
                most_energetic: None,
            };
        }

        let mut diameter_sum = 0.0;
        let mut velocity_sum = 0.0;
        let mut energy_sum = 0.0;
        let mut closest = f64::INFINITY;
        let mut most_energetic: Option<&AsteroidRecord> = None;

        for r in self.records.values() {
            diameter_sum += r.diameter_km;
            velocity_sum += r.velocity_km_s;
            energy_sum += r.energy_megatons;
            closest = closest.min(r.miss_distance_km);
            if most_energetic.map_or(true, |m| r.energy_megatons > m.energy_megatons) {
                most_energetic = Some(r);
            }
        }

        CatalogSummary {
            total_count: n,
            hazardous_count: self
                .records
                .values()
                .filter(|r| r.is_potentially_hazardous)
                .count(),
            avg_diameter_km: diameter_sum / n as f64,
            avg_velocity_km_s: velocity_sum / n as f64,
            avg_energy_megatons: energy_sum / n as f64,
            closest_approach_km: closest,
            most_energetic: most_energetic.map(|r| r.name.clone()),
        }
    }

    /// Bulk load from a CSV file. Rows with non-positive diameter or
    /// velocity are skipped with a warning; returns the number ingested.
    pub fn load_csv<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let mut reader = csv::Reader::from_path(path.as_ref())?;
        let mut loaded = 0usize;
        let mut skipped = 0usize;

        for row in reader.deserialize::<CsvRow>() {
            let row = row?;
            match record_from_row(row) {
                Ok(record) => {
                    self.insert(record);
                    loaded += 1;
                }
                Err(e) => {
                    skipped += 1;
                    tracing::warn!("skipping CSV row: {e}");
                }
            }
        }

        if skipped > 0 {
            tracing::warn!("{skipped} rows skipped during CSV load");
        }
        tracing::info!("loaded {loaded} asteroid records from CSV");
        Ok(loaded)
    }
}

fn record_from_row(row: CsvRow) -> Result<AsteroidRecord> {
    if row.diameter_avg <= 0.0 {
        return Err(CatalogError::InvalidRecord(format!(
            "{}: non-positive diameter",
            row.name
        )));
    }
    if row.velocity_km_s <= 0.0 {
        return Err(CatalogError::InvalidRecord(format!(
            "{}: non-positive velocity",
            row.name
        )));
    }

    let approach_date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d")
        .map_err(|e| CatalogError::InvalidRecord(format!("{}: bad date: {e}", row.name)))?;

    let energy_megatons = match row.energy_megatons_tnt {
        Some(e) if e > 0.0 => e,
        _ => derive_energy(row.diameter_avg, row.velocity_km_s)?,
    };

    let is_potentially_hazardous = row.is_potentially_hazardous.unwrap_or(
        row.diameter_avg >= PHA_MIN_DIAMETER_KM
            && row.miss_distance_km / AU_KM <= PHA_MAX_DISTANCE_AU,
    );

    Ok(AsteroidRecord {
        id: row.id,
        name: row.name,
        approach_date,
        diameter_km: row.diameter_avg,
        velocity_km_s: row.velocity_km_s,
        miss_distance_km: row.miss_distance_km,
        energy_megatons,
        is_potentially_hazardous,
    })
}

fn derive_energy(diameter_km: f64, velocity_km_s: f64) -> Result<f64> {
    let mass = impact_physics::mass_kg(diameter_km, impact_physics::NOMINAL_DENSITY_KG_M3)
        .map_err(|e| CatalogError::InvalidRecord(e.to_string()))?;
    let energy = impact_physics::kinetic_energy(mass, velocity_km_s)
        .map_err(|e| CatalogError::InvalidRecord(e.to_string()))?;
    Ok(energy.megatons_tnt)
}
