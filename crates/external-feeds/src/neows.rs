//! NASA NeoWs close-approach feed client. Feed objects are converted to
//! catalogue records with derived impact energy; malformed objects are
//! skipped with a warning rather than failing the whole fetch.

use std::collections::HashMap;
use std::time::Duration;

use chrono::NaiveDate;
use impact_physics::{kinetic_energy, mass_kg, NOMINAL_DENSITY_KG_M3};
use neo_catalog::AsteroidRecord;
use serde::Deserialize;
use tracing::warn;

use crate::{FeedError, Result, HTTP_TIMEOUT_SECS};

const DEFAULT_BASE_URL: &str = "https://api.nasa.gov/neo/rest/v1";

#[derive(Debug, Deserialize)]
struct FeedResponse {
    near_earth_objects: HashMap<String, Vec<FeedObject>>,
}

#[derive(Debug, Deserialize)]
struct FeedObject {
    id: String,
    name: String,
    estimated_diameter: EstimatedDiameter,
    close_approach_data: Vec<CloseApproach>,
    is_potentially_hazardous_asteroid: bool,
}

#[derive(Debug, Deserialize)]
struct EstimatedDiameter {
    kilometers: DiameterRange,
}

#[derive(Debug, Deserialize)]
struct DiameterRange {
    estimated_diameter_max: f64,
}

#[derive(Debug, Deserialize)]
struct CloseApproach {
    relative_velocity: RelativeVelocity,
    miss_distance: MissDistance,
}

#[derive(Debug, Deserialize)]
struct RelativeVelocity {
    kilometers_per_second: String,
}

#[derive(Debug, Deserialize)]
struct MissDistance {
    kilometers: String,
}

pub struct NeoFeedClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl NeoFeedClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Fetch the feed window and convert it to catalogue records.
    pub async fn fetch(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<AsteroidRecord>> {
        let url = format!("{}/feed", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("start_date", start.format("%Y-%m-%d").to_string()),
                ("end_date", end.format("%Y-%m-%d").to_string()),
                ("api_key", self.api_key.clone()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FeedError::UpstreamStatus(response.status()));
        }

        let feed: FeedResponse = response.json().await?;
        Ok(parse_feed(feed))
    }
}

fn parse_feed(feed: FeedResponse) -> Vec<AsteroidRecord> {
    let mut records = Vec::new();

    for (date, objects) in feed.near_earth_objects {
        let Ok(approach_date) = NaiveDate::parse_from_str(&date, "%Y-%m-%d") else {
            warn!(date, "skipping feed bucket with unparseable date");
            continue;
        };

        for obj in objects {
            match parse_object(&obj, approach_date) {
                Some(record) => records.push(record),
                None => warn!(id = %obj.id, name = %obj.name, "skipping malformed feed object"),
            }
        }
    }

    records
}

fn parse_object(obj: &FeedObject, approach_date: NaiveDate) -> Option<AsteroidRecord> {
    let id = obj.id.parse::<i64>().ok()?;
    let approach = obj.close_approach_data.first()?;
    let velocity_km_s = approach.relative_velocity.kilometers_per_second.parse().ok()?;
    let miss_distance_km = approach.miss_distance.kilometers.parse().ok()?;
    let diameter_km = obj.estimated_diameter.kilometers.estimated_diameter_max;

    let mass = mass_kg(diameter_km, NOMINAL_DENSITY_KG_M3).ok()?;
    let energy = kinetic_energy(mass, velocity_km_s).ok()?;

    Some(AsteroidRecord {
        id,
        name: obj.name.clone(),
        approach_date,
        diameter_km,
        velocity_km_s,
        miss_distance_km,
        energy_megatons: energy.megatons_tnt,
        is_potentially_hazardous: obj.is_potentially_hazardous_asteroid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_json() -> &'static str {
        r#"{
            "near_earth_objects": {
                "2026-08-26": [
                    {
                        "id": "3542519",
                        "name": "(2010 PK9)",
                        "estimated_diameter": {
                            "kilometers": {"estimated_diameter_max": 0.5}
                        },
                        "close_approach_data": [{
                            "relative_velocity": {"kilometers_per_second": "20.0"},
                            "miss_distance": {"kilometers": "4488000.0"}
                        }],
                        "is_potentially_hazardous_asteroid": true
                    },
                    {
                        "id": "not-a-number",
                        "name": "Broken",
                        "estimated_diameter": {
                            "kilometers": {"estimated_diameter_max": 0.1}
                        },
                        "close_approach_data": [],
                        "is_potentially_hazardous_asteroid": false
                    }
                ]
            }
        }"#
    }

    #[test]
    fn test_parse_feed_skips_malformed_objects() {
        let feed: FeedResponse = serde_json::from_str(feed_json()).unwrap();
        let records = parse_feed(feed);
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.id, 3542519);
        assert_eq!(record.name, "(2010 PK9)");
        assert!(record.is_potentially_hazardous);
        // 0.5 km at 2600 kg/m3 and 20 km/s is roughly 8134 MT.
        assert!((record.energy_megatons - 8134.0).abs() < 10.0);
    }

    #[test]
    fn test_parse_feed_skips_bad_date_bucket() {
        let feed = FeedResponse {
            near_earth_objects: HashMap::from([("garbage".to_string(), Vec::new())]),
        };
        assert!(parse_feed(feed).is_empty());
    }
}
