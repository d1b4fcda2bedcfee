//! Hazard Assessment Library
//!
//! Composes the physics and geographic classifiers into per-category hazard
//! reports for a predicted impact: seismic, tsunami, volcanic, atmospheric,
//! location-dependent secondary hazards, evacuation planning, and the
//! aggregate risk level. Every report is a pure function of its inputs and
//! is recomputed fresh per request; nothing here errors — absent
//! collaborator data degrades to labeled defaults.

pub mod atmospheric;
pub mod casualty;
pub mod report;
pub mod risk;
pub mod secondary;
pub mod seismic;
pub mod tsunami;
pub mod volcanic;

pub use report::{assess, HazardInput, HazardReport};
pub use risk::{overall_risk_level, risk_score, PrimaryHazard, RiskLevel};
