//! Request handlers. Handlers compose the domain crates; external feed
//! loss degrades the affected payload section instead of failing the
//! request.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use defense_planning::{
    estimate_impact_dates, optimize, select, time_until_impact_years, StrategyKind,
};
use geo_classify::{distance_to_coast_km, impact_site, LocationType};
use hazard_assessment::{casualty, overall_risk_level, risk_score, HazardInput, RiskLevel};
use impact_physics::{
    classify_hazard, impact_effects, impact_energy_class, kinetic_energy, mass_kg,
    NOMINAL_DENSITY_KG_M3,
};
use neo_catalog::{AsteroidRecord, ThreatLevel};
use spectral_class::{classification, classify};

use crate::error::ApiError;
use crate::AppState;

type ApiResult = Result<Json<Value>, ApiError>;

#[derive(Deserialize)]
pub struct ListParams {
    pub limit: Option<usize>,
    #[serde(default)]
    pub hazardous_only: bool,
    #[serde(default)]
    pub include_defense: bool,
}

#[derive(Deserialize)]
pub struct OptimizeRequest {
    pub time_to_impact_days: Option<i64>,
}

#[derive(Deserialize)]
pub struct SimulateRequest {
    pub name: Option<String>,
    pub diameter_km: f64,
    pub velocity_km_s: f64,
    pub density_kg_m3: Option<f64>,
    pub impact_lat: f64,
    pub impact_lng: f64,
    pub miss_distance_km: Option<f64>,
}

#[derive(Deserialize)]
pub struct QuakeParams {
    pub lat: f64,
    pub lng: f64,
    pub radius_km: Option<f64>,
}

// Selector threat input from the distance-banded catalogue level.
fn selector_threat(level: ThreatLevel) -> RiskLevel {
    match level {
        ThreatLevel::Critical => RiskLevel::Extreme,
        ThreatLevel::High => RiskLevel::High,
        ThreatLevel::Low => RiskLevel::Low,
    }
}

fn energy_analysis(record: &AsteroidRecord) -> Result<Value, ApiError> {
    let mass = mass_kg(record.diameter_km, NOMINAL_DENSITY_KG_M3)
        .map_err(|e| ApiError::InvalidInput(e.to_string()))?;
    let energy = kinetic_energy(mass, record.velocity_km_s)
        .map_err(|e| ApiError::InvalidInput(e.to_string()))?;
    let effects = impact_effects(energy.megatons_tnt)
        .map_err(|e| ApiError::InvalidInput(e.to_string()))?;

    Ok(json!({
        "mass_kg": mass,
        "energy": energy,
        "impact_effects": effects,
        "energy_class": impact_energy_class(energy.megatons_tnt),
        "hazard_tier": classify_hazard(
            record.diameter_km * 1000.0,
            record.miss_distance_km,
            energy.megatons_tnt,
        ),
    }))
}

fn defense_plan(record: &AsteroidRecord) -> Vec<defense_planning::PlannedStrategy> {
    let threat = selector_threat(ThreatLevel::from_distance_au(record.miss_distance_au()));
    select(
        &record.name,
        record.diameter_km,
        classify(record.id),
        threat,
        time_until_impact_years(record.miss_distance_km),
    )
}

pub async fn service_info(State(state): State<AppState>) -> Json<Value> {
    let threats = state.catalog.threats();
    let critical: Vec<_> = threats
        .iter()
        .filter(|t| t.threat_level == ThreatLevel::Critical)
        .collect();

    let global_risk = if !critical.is_empty() {
        "HIGH"
    } else if !threats.is_empty() {
        "MEDIUM"
    } else {
        "LOW"
    };

    Json(json!({
        "name": "NEO Threat Assessment Gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "threat_status": {
            "total_asteroids": state.catalog.len(),
            "potential_threats": threats.len(),
            "critical_threats": critical.len(),
            "global_risk_level": global_risk,
        },
        "recent_threats": threats.iter().take(3).collect::<Vec<_>>(),
    }))
}

pub async fn list_asteroids(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Value> {
    let records: Vec<&AsteroidRecord> = state
        .catalog
        .all()
        .into_iter()
        .filter(|r| !params.hazardous_only || r.is_potentially_hazardous)
        .take(params.limit.unwrap_or(usize::MAX))
        .collect();

    let asteroids: Vec<Value> = records
        .iter()
        .map(|r| {
            let mut entry = json!({
                "asteroid": r,
                "distance_au": r.miss_distance_au(),
                "threat_level": ThreatLevel::from_distance_au(r.miss_distance_au()),
                "spectral_classification": classification(r.id),
            });
            if params.include_defense {
                entry["defense_strategies"] = json!(defense_plan(r));
            }
            entry
        })
        .collect();

    Json(json!({
        "count": asteroids.len(),
        "include_defense": params.include_defense,
        "asteroids": asteroids,
    }))
}

pub async fn get_asteroid(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult {
    let record = state.catalog.get(id)?;
    let au = record.miss_distance_au();

    Ok(Json(json!({
        "asteroid": record,
        "spectral_classification": classification(record.id),
        "energy_analysis": energy_analysis(record)?,
        "threat_assessment": {
            "distance_au": au,
            "threat_level": ThreatLevel::from_distance_au(au),
            "risk_score": risk_score(record.miss_distance_km, record.diameter_km, record.energy_megatons),
            "time_until_impact_years": time_until_impact_years(record.miss_distance_km),
        },
        "defense_strategies": defense_plan(record),
    })))
}

pub async fn immediate_threats(State(state): State<AppState>) -> Json<Value> {
    let immediate: Vec<_> = state
        .catalog
        .threats()
        .into_iter()
        .filter(|t| t.threat_level == ThreatLevel::Critical)
        .collect();
    Json(json!({ "count": immediate.len(), "threats": immediate }))
}

pub async fn all_threats(State(state): State<AppState>) -> Json<Value> {
    let threats = state.catalog.threats();
    Json(json!({ "count": threats.len(), "threats": threats }))
}

fn emergency_recommendations(record: &AsteroidRecord, au: f64) -> Vec<&'static str> {
    let mut recommendations = Vec::new();

    if au <= 0.01 {
        recommendations.extend([
            "Immediate evacuation of the predicted impact zone",
            "Activate emergency medical response",
            "Continuous tracking and trajectory monitoring",
            "International cooperation required",
        ]);
    } else if au <= 0.05 {
        recommendations.extend([
            "Close monitoring of trajectory changes",
            "Review building codes in risk areas",
            "Update risk assessment every 6 hours",
            "Enhanced telescope observation",
        ]);
    }

    if record.energy_megatons > 100.0 {
        recommendations.push("High-energy impact: prepare for widespread effects");
    }
    if record.diameter_km * 1000.0 > 100.0 {
        recommendations.push("Large object: potential global effects");
    }

    if recommendations.is_empty() {
        recommendations.push("Continue standard monitoring");
    }
    recommendations
}

pub async fn impact_analysis(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult {
    let record = state.catalog.get(id)?;
    let au = record.miss_distance_au();

    if au > 0.05 {
        return Ok(Json(json!({
            "asteroid": record.name,
            "distance_au": au,
            "threat_level": ThreatLevel::Low,
            "message": "This asteroid poses no immediate threat",
            "analysis_skipped": true,
        })));
    }

    let site = impact_site(record.id);
    let location_type = state
        .geocoder
        .resolve_location_type(site.latitude, site.longitude)
        .await;
    let seismic = state.usgs.seismic_risk(site.latitude, site.longitude).await;

    let energy = energy_analysis(record)?;
    let casualties = casualty::estimate(record.energy_megatons, location_type);

    Ok(Json(json!({
        "asteroid": record.name,
        "threat_assessment": {
            "distance_au": au,
            "threat_level": ThreatLevel::from_distance_au(au),
            "is_potentially_hazardous": true,
        },
        "impact_prediction": {
            "estimated_impact_date": record.approach_date,
            "location": {
                "coordinates": [site.latitude, site.longitude],
                "type": location_type,
            },
        },
        "impact_effects": energy,
        "casualty_estimate": casualties,
        "seismic_context": seismic,
        "emergency_recommendations": emergency_recommendations(record, au),
    })))
}

pub async fn natural_hazards(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult {
    let record = state.catalog.get(id)?;
    let site = impact_site(record.id);
    let location_type = state
        .geocoder
        .resolve_location_type(site.latitude, site.longitude)
        .await;

    let input = HazardInput {
        asteroid_id: record.id,
        name: record.name.clone(),
        diameter_km: record.diameter_km,
        miss_distance_km: record.miss_distance_km,
        energy_megatons: record.energy_megatons,
    };
    let report = hazard_assessment::assess(&input, site, location_type);
    let earthquake_risk = state.usgs.seismic_risk(site.latitude, site.longitude).await;

    let mut body = serde_json::to_value(&report)
        .map_err(|e| ApiError::InvalidInput(e.to_string()))?;
    if let Some(object) = body.as_object_mut() {
        object.insert("earthquake_risk".to_string(), json!(earthquake_risk));
    }

    Ok(Json(body))
}

pub async fn impact_dates(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult {
    let record = state.catalog.get(id)?;
    let estimate = estimate_impact_dates(
        &record.approach_date.format("%Y-%m-%d").to_string(),
        record.miss_distance_km,
    );
    Ok(Json(json!({
        "asteroid": record.name,
        "impact_date_estimate": estimate,
    })))
}

pub async fn optimize_defense(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<OptimizeRequest>,
) -> ApiResult {
    let record = state.catalog.get(id)?;
    let mass = mass_kg(record.diameter_km, NOMINAL_DENSITY_KG_M3)
        .map_err(|e| ApiError::InvalidInput(e.to_string()))?;
    let days = request.time_to_impact_days.unwrap_or(365);
    if days < 1 {
        return Err(ApiError::InvalidInput(
            "time_to_impact_days must be at least 1".to_string(),
        ));
    }

    let plan = optimize(mass, record.velocity_km_s, days);
    Ok(Json(json!({
        "asteroid": record.name,
        "asteroid_parameters": {
            "mass_kg": mass,
            "velocity_km_s": record.velocity_km_s,
            "time_to_impact_days": days,
        },
        "optimization": plan,
    })))
}

pub async fn defense_catalogue() -> Json<Value> {
    let strategies: Vec<Value> = StrategyKind::ALL
        .iter()
        .map(|kind| json!({ "strategy": kind, "details": kind.info() }))
        .collect();
    Json(json!({
        "count": strategies.len(),
        "strategies": strategies,
    }))
}

pub async fn simulate(
    State(state): State<AppState>,
    Json(request): Json<SimulateRequest>,
) -> ApiResult {
    if request.diameter_km <= 0.0 || request.velocity_km_s <= 0.0 {
        return Err(ApiError::InvalidInput(
            "diameter_km and velocity_km_s must be positive".to_string(),
        ));
    }
    if !(-90.0..=90.0).contains(&request.impact_lat)
        || !(-180.0..=180.0).contains(&request.impact_lng)
    {
        return Err(ApiError::InvalidInput(
            "impact_lat must be in [-90, 90] and impact_lng in [-180, 180]".to_string(),
        ));
    }

    let density = request.density_kg_m3.unwrap_or(NOMINAL_DENSITY_KG_M3);
    let mass = mass_kg(request.diameter_km, density)
        .map_err(|e| ApiError::InvalidInput(e.to_string()))?;
    let energy = kinetic_energy(mass, request.velocity_km_s)
        .map_err(|e| ApiError::InvalidInput(e.to_string()))?;
    let effects = impact_effects(energy.megatons_tnt)
        .map_err(|e| ApiError::InvalidInput(e.to_string()))?;

    // User scenarios default to a 0.1 au stand-off when no approach is given.
    let miss_distance_km = request
        .miss_distance_km
        .unwrap_or(0.1 * impact_physics::AU_KM);
    let name = request.name.unwrap_or_else(|| "User scenario".to_string());

    let site = geo_classify::ImpactSite {
        latitude: request.impact_lat,
        longitude: request.impact_lng,
    };
    let location_type = state
        .geocoder
        .resolve_location_type(site.latitude, site.longitude)
        .await;

    let input = HazardInput {
        asteroid_id: 0,
        name: name.clone(),
        diameter_km: request.diameter_km,
        miss_distance_km,
        energy_megatons: energy.megatons_tnt,
    };
    let report = hazard_assessment::assess(&input, site, location_type);

    let coast_km = distance_to_coast_km(site.latitude, site.longitude);
    let threat = overall_risk_level(
        energy.megatons_tnt,
        miss_distance_km,
        location_type == LocationType::Ocean,
        coast_km,
    );
    let defense = select(
        &name,
        request.diameter_km,
        spectral_class::SpectralType::Unknown,
        threat,
        time_until_impact_years(miss_distance_km),
    );

    Ok(Json(json!({
        "scenario": name,
        "physics": {
            "mass_kg": mass,
            "energy": energy,
            "impact_effects": effects,
            "energy_class": impact_energy_class(energy.megatons_tnt),
        },
        "hazard_report": report,
        "defense_recommendations": defense,
    })))
}

pub async fn nearby_earthquakes(
    State(state): State<AppState>,
    Query(params): Query<QuakeParams>,
) -> Json<Value> {
    let radius_km = params.radius_km.unwrap_or(500.0);
    let earthquakes = match state
        .usgs
        .nearby_quakes(params.lat, params.lng, radius_km)
        .await
    {
        Ok(quakes) => quakes,
        Err(err) => {
            tracing::warn!(error = %err, "USGS nearby query failed");
            Vec::new()
        }
    };
    let risk = state.usgs.seismic_risk(params.lat, params.lng).await;

    Json(json!({
        "search_location": [params.lat, params.lng],
        "radius_km": radius_km,
        "earthquakes_found": earthquakes.len(),
        "seismic_risk_assessment": risk,
        "earthquakes": earthquakes,
    }))
}

pub async fn validation_report(State(state): State<AppState>) -> Json<Value> {
    let summary = state.catalog.summary();
    let threats = state.catalog.threats();

    let issues: Vec<Value> = state
        .catalog
        .all()
        .iter()
        .filter(|r| r.energy_megatons <= 0.0)
        .map(|r| json!({ "id": r.id, "name": r.name, "issue": "non-positive energy" }))
        .collect();

    Json(json!({
        "total_asteroids": summary.total_count,
        "data_quality_issues": issues,
        "threat_analysis": threats,
        "statistical_analysis": summary,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use external_feeds::{ReverseGeocoder, UsgsClient};
    use neo_catalog::AsteroidCatalog;
    use std::sync::Arc;

    // Feed clients point at an unreachable port; handlers must degrade,
    // and rejected requests must never reach them at all.
    fn offline_state() -> AppState {
        AppState {
            catalog: Arc::new(AsteroidCatalog::new()),
            geocoder: Arc::new(ReverseGeocoder::with_base_url("http://127.0.0.1:1").unwrap()),
            usgs: Arc::new(UsgsClient::with_base_url("http://127.0.0.1:1").unwrap()),
        }
    }

    fn scenario(lat: f64, lng: f64) -> SimulateRequest {
        SimulateRequest {
            name: None,
            diameter_km: 0.5,
            velocity_km_s: 20.0,
            density_kg_m3: None,
            impact_lat: lat,
            impact_lng: lng,
            miss_distance_km: Some(0.5 * impact_physics::AU_KM),
        }
    }

    #[tokio::test]
    async fn test_simulate_rejects_out_of_range_coordinates() {
        for (lat, lng) in [
            (90.5, 0.0),
            (-91.0, 0.0),
            (0.0, 180.5),
            (0.0, -181.0),
            (f64::NAN, 0.0),
        ] {
            let result = simulate(State(offline_state()), Json(scenario(lat, lng))).await;
            assert!(
                matches!(result, Err(ApiError::InvalidInput(_))),
                "({lat}, {lng}) was accepted"
            );
        }
    }

    #[tokio::test]
    async fn test_simulate_accepts_boundary_coordinates() {
        let result = simulate(State(offline_state()), Json(scenario(90.0, -180.0))).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_simulate_rejects_non_positive_parameters() {
        let mut request = scenario(0.0, 0.0);
        request.diameter_km = 0.0;
        let result = simulate(State(offline_state()), Json(request)).await;
        assert!(matches!(result, Err(ApiError::InvalidInput(_))));
    }
}
