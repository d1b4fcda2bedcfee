//! External Feeds Library
//!
//! HTTP clients for the collaborating data sources: the NASA NeoWs close
//! approach feed, Nominatim reverse geocoding, and the USGS earthquake
//! catalogue. Each client carries its own base URL so tests can point it
//! at a local server.

use thiserror::Error;

pub mod neows;
pub mod nominatim;
pub mod usgs;

pub use neows::NeoFeedClient;
pub use nominatim::ReverseGeocoder;
pub use usgs::{Earthquake, SeismicRisk, UsgsClient};

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("upstream returned status {0}")]
    UpstreamStatus(reqwest::StatusCode),
}

pub type Result<T> = std::result::Result<T, FeedError>;

pub(crate) const HTTP_TIMEOUT_SECS: u64 = 10;
