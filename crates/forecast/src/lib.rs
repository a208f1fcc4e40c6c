//! `demandcast-forecast`
//!
//! **Responsibility:** heuristic daily sales forecasting.
//!
//! This crate is pure computation:
//! - It must not do IO, HTTP, or storage.
//! - It must not hold mutable state between calls.
//! - Randomness enters only through a caller-supplied generator.

pub mod engine;
pub mod point;

pub use engine::{ForecastEngine, UNIT_PRICE, WEEKEND_UPLIFT};
pub use point::{ForecastPoint, ForecastSummary, HistoricalObservation};
