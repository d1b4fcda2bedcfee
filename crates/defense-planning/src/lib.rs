//! Defense Planning Library
//!
//! Planetary-defense mission planning: the static catalogue of deflection
//! strategies, the eligibility-based mission selector, the fixed-cost
//! deflection optimizer, and impact timeline estimation. All planning is
//! deterministic over its inputs.

pub mod catalog;
pub mod optimizer;
pub mod selector;
pub mod timeline;

pub use catalog::{StrategyInfo, StrategyKind};
pub use optimizer::{optimize, DeflectionMethod, OptimizedPlan};
pub use selector::{select, PlannedStrategy, Readiness};
pub use timeline::{estimate_impact_dates, time_until_impact_years, ImpactDateEstimate};
