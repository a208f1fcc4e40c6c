//! `demandcast-reorder`
//!
//! **Responsibility:** inventory reorder-point recommendations.
//!
//! Pure, deterministic computation: identical inputs always yield identical
//! output. No IO, no randomness, no state between calls.

pub mod advisor;
pub mod recommendation;

pub use advisor::{ReorderAdvisor, ReorderRequest};
pub use recommendation::{ReorderRecommendation, Urgency};
