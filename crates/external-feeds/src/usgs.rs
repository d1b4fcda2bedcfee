//! USGS earthquake catalogue client and the derived seismic risk rating.
//!
//! Risk is rated from the strongest recorded magnitude and the count of
//! quakes in the last three years; an empty or failed query rates as a
//! stable area rather than an error.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{FeedError, Result, HTTP_TIMEOUT_SECS};

const DEFAULT_BASE_URL: &str = "https://earthquake.usgs.gov/fdsnws/event/1";
const MAX_QUAKES: usize = 20;
const THREE_YEARS_MS: i64 = 3 * 365 * 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, Serialize)]
pub struct Earthquake {
    pub magnitude: f64,
    pub place: String,
    /// Unix epoch milliseconds.
    pub time: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub depth_km: f64,
    pub tsunami_warning: i64,
    pub significance: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeismicRisk {
    pub risk_level: &'static str,
    pub earthquakes_count: usize,
    pub max_magnitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_magnitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_activity: Option<usize>,
    pub seismic_hazard: &'static str,
    pub recommendation: &'static str,
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    properties: FeatureProperties,
    geometry: FeatureGeometry,
}

#[derive(Debug, Deserialize)]
struct FeatureProperties {
    mag: Option<f64>,
    place: Option<String>,
    time: i64,
    #[serde(default)]
    tsunami: i64,
    #[serde(default)]
    sig: i64,
}

#[derive(Debug, Deserialize)]
struct FeatureGeometry {
    coordinates: Vec<f64>,
}

pub struct UsgsClient {
    client: reqwest::Client,
    base_url: String,
}

impl UsgsClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Magnitude 4+ quakes within the radius, capped at 20 entries.
    pub async fn nearby_quakes(
        &self,
        lat: f64,
        lng: f64,
        radius_km: f64,
    ) -> Result<Vec<Earthquake>> {
        let url = format!("{}/query", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("format", "geojson".to_string()),
                ("latitude", lat.to_string()),
                ("longitude", lng.to_string()),
                ("maxradiuskm", radius_km.to_string()),
                ("starttime", "2020-01-01".to_string()),
                ("minmagnitude", "4.0".to_string()),
                ("orderby", "time".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FeedError::UpstreamStatus(response.status()));
        }

        let collection: FeatureCollection = response.json().await?;
        Ok(parse_features(collection))
    }

    /// Seismic risk rating for a point, based on a 300 km survey. Query
    /// failures rate as a stable area.
    pub async fn seismic_risk(&self, lat: f64, lng: f64) -> SeismicRisk {
        let quakes = match self.nearby_quakes(lat, lng, 300.0).await {
            Ok(quakes) => quakes,
            Err(err) => {
                warn!(lat, lng, error = %err, "USGS query failed, rating as stable");
                Vec::new()
            }
        };
        rate_seismic_risk(&quakes, chrono::Utc::now().timestamp_millis())
    }
}

fn parse_features(collection: FeatureCollection) -> Vec<Earthquake> {
    collection
        .features
        .into_iter()
        .take(MAX_QUAKES)
        .filter_map(|f| {
            let &[lng, lat, depth] = f.geometry.coordinates.as_slice() else {
                return None;
            };
            Some(Earthquake {
                magnitude: f.properties.mag?,
                place: f.properties.place.unwrap_or_default(),
                time: f.properties.time,
                latitude: lat,
                longitude: lng,
                depth_km: depth,
                tsunami_warning: f.properties.tsunami,
                significance: f.properties.sig,
            })
        })
        .collect()
}

fn rate_seismic_risk(quakes: &[Earthquake], now_ms: i64) -> SeismicRisk {
    if quakes.is_empty() {
        return SeismicRisk {
            risk_level: "low",
            earthquakes_count: 0,
            max_magnitude: 0.0,
            average_magnitude: None,
            recent_activity: None,
            seismic_hazard: "Stable area, rare seismic activity",
            recommendation: "Standard preventive measures and routine monitoring",
        };
    }

    let max_mag = quakes
        .iter()
        .map(|q| q.magnitude)
        .fold(f64::NEG_INFINITY, f64::max);
    let avg_mag = quakes.iter().map(|q| q.magnitude).sum::<f64>() / quakes.len() as f64;
    let recent = quakes
        .iter()
        .filter(|q| q.time > now_ms - THREE_YEARS_MS)
        .count();

    let risk_level = if max_mag > 7.0 || recent > 15 {
        "very_high"
    } else if max_mag > 6.5 || recent > 8 {
        "high"
    } else if max_mag > 5.5 || recent > 3 {
        "medium"
    } else {
        "low"
    };

    let (seismic_hazard, recommendation) = match risk_level {
        "very_high" => (
            "Active fault zone with a history of destructive earthquakes",
            "Avoid construction, prepare evacuation plans, reinforce buildings",
        ),
        "high" => (
            "Frequent seismic activity, potential for strong earthquakes",
            "Earthquake-resistant construction, early warning systems",
        ),
        "medium" => (
            "Moderate seismic activity, potential for medium tremors",
            "Monitor activity and apply preventive measures",
        ),
        _ => (
            "Stable area, rare seismic activity",
            "Standard preventive measures and routine monitoring",
        ),
    };

    SeismicRisk {
        risk_level,
        earthquakes_count: quakes.len(),
        max_magnitude: max_mag,
        average_magnitude: Some((avg_mag * 10.0).round() / 10.0),
        recent_activity: Some(recent),
        seismic_hazard,
        recommendation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quake(magnitude: f64, time: i64) -> Earthquake {
        Earthquake {
            magnitude,
            place: "test".to_string(),
            time,
            latitude: 0.0,
            longitude: 0.0,
            depth_km: 10.0,
            tsunami_warning: 0,
            significance: 100,
        }
    }

    #[test]
    fn test_empty_survey_rates_stable() {
        let risk = rate_seismic_risk(&[], 0);
        assert_eq!(risk.risk_level, "low");
        assert_eq!(risk.earthquakes_count, 0);
        assert_eq!(risk.max_magnitude, 0.0);
    }

    #[test]
    fn test_strong_quake_rates_very_high() {
        let now = 1_700_000_000_000;
        let risk = rate_seismic_risk(&[quake(7.4, now)], now);
        assert_eq!(risk.risk_level, "very_high");
        assert_eq!(risk.max_magnitude, 7.4);
    }

    #[test]
    fn test_recent_count_drives_rating() {
        let now = 1_700_000_000_000;
        // Nine moderate quakes inside the window: high by count alone.
        let quakes: Vec<_> = (0..9).map(|i| quake(4.5, now - i)).collect();
        assert_eq!(rate_seismic_risk(&quakes, now).risk_level, "high");

        // The same quakes outside the window rate low.
        let old: Vec<_> = (0..9)
            .map(|i| quake(4.5, now - THREE_YEARS_MS - 1000 - i))
            .collect();
        assert_eq!(rate_seismic_risk(&old, now).risk_level, "low");
    }

    #[test]
    fn test_parse_features_caps_and_filters() {
        let json = r#"{
            "features": [
                {
                    "properties": {"mag": 5.1, "place": "off coast", "time": 1700000000000, "tsunami": 0, "sig": 400},
                    "geometry": {"coordinates": [-120.5, 35.2, 8.3]}
                },
                {
                    "properties": {"mag": null, "place": "broken", "time": 1700000000000},
                    "geometry": {"coordinates": [-120.5, 35.2, 8.3]}
                }
            ]
        }"#;
        let collection: FeatureCollection = serde_json::from_str(json).unwrap();
        let quakes = parse_features(collection);
        assert_eq!(quakes.len(), 1);
        assert_eq!(quakes[0].latitude, 35.2);
        assert_eq!(quakes[0].depth_km, 8.3);
    }
}
