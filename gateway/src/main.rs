use anyhow::Result;
use axum::{
    routing::{get, post},
    Json, Router,
};
use chrono::{Duration, Utc};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use external_feeds::{NeoFeedClient, ReverseGeocoder, UsgsClient};
use neo_catalog::{AsteroidCatalog, ThreatLevel};

mod error;
mod routes;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<AsteroidCatalog>,
    pub geocoder: Arc<ReverseGeocoder>,
    pub usgs: Arc<UsgsClient>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "neo_gateway=debug,info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let catalog = load_catalog().await;
    log_threat_sweep(&catalog);

    let state = AppState {
        catalog: Arc::new(catalog),
        geocoder: Arc::new(ReverseGeocoder::new()?),
        usgs: Arc::new(UsgsClient::new()?),
    };

    let api_routes = Router::new()
        .route("/asteroids", get(routes::list_asteroids))
        .route("/asteroids/:id", get(routes::get_asteroid))
        .route("/asteroids/threats/immediate", get(routes::immediate_threats))
        .route("/asteroids/threats/all", get(routes::all_threats))
        .route("/asteroids/:id/impact", get(routes::impact_analysis))
        .route("/asteroids/:id/hazards", get(routes::natural_hazards))
        .route("/asteroids/:id/impact-dates", get(routes::impact_dates))
        .route("/asteroids/:id/defense/optimize", post(routes::optimize_defense))
        .route("/defense/strategies", get(routes::defense_catalogue))
        .route("/simulate", post(routes::simulate))
        .route("/earthquakes/nearby", get(routes::nearby_earthquakes))
        .route("/validation-report", get(routes::validation_report))
        .with_state(state.clone());

    let app = Router::new()
        .route("/health", get(health))
        .route("/", get(routes::service_info))
        .nest("/api/v1", api_routes)
        .with_state(state)
        .layer(CorsLayer::permissive());

    let port = std::env::var("NEO_GATEWAY_PORT")
        .or_else(|_| std::env::var("PORT"))
        .unwrap_or_else(|_| "18701".to_string());
    let addr = format!("0.0.0.0:{}", port);

    tracing::info!("NEO gateway starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Seed the catalogue from a CSV export and, when an API key is present,
/// the live NeoWs feed for the coming week. Either source failing leaves
/// the catalogue partially filled rather than aborting startup.
async fn load_catalog() -> AsteroidCatalog {
    let mut catalog = AsteroidCatalog::new();

    if let Ok(path) = std::env::var("NEO_DATA_PATH") {
        match catalog.load_csv(&path) {
            Ok(loaded) => tracing::info!("loaded {} asteroids from {}", loaded, path),
            Err(err) => tracing::warn!("CSV load from {} failed: {}", path, err),
        }
    }

    if let Ok(api_key) = std::env::var("NASA_API_KEY") {
        match fetch_feed(api_key).await {
            Ok(records) => {
                tracing::info!("fetched {} asteroids from the NeoWs feed", records.len());
                for record in records {
                    catalog.insert(record);
                }
            }
            Err(err) => tracing::warn!("NeoWs fetch failed: {}", err),
        }
    }

    catalog
}

async fn fetch_feed(api_key: String) -> external_feeds::Result<Vec<neo_catalog::AsteroidRecord>> {
    let client = NeoFeedClient::new(api_key)?;
    let start = Utc::now().date_naive();
    client.fetch(start, start + Duration::days(7)).await
}

fn log_threat_sweep(catalog: &AsteroidCatalog) {
    let threats = catalog.threats();
    let critical = threats
        .iter()
        .filter(|t| t.threat_level == ThreatLevel::Critical)
        .count();

    tracing::info!(
        "catalogue ready: {} asteroids, {} within 0.05 au",
        catalog.len(),
        threats.len()
    );
    if critical > 0 {
        tracing::warn!("{} asteroids inside the 0.01 au immediate-threat band", critical);
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "neo-gateway",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
