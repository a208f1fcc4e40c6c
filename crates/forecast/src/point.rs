use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use demandcast_core::{round2, ValueObject};

/// One past day of sales, as supplied by the caller.
///
/// Order of observations does not matter; only aggregate statistics are
/// used. A missing `sales` field deserializes to 0.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalObservation {
    #[serde(default)]
    pub sales: f64,
}

impl HistoricalObservation {
    pub fn new(sales: f64) -> Self {
        Self { sales }
    }
}

impl ValueObject for HistoricalObservation {}

/// One predicted day of sales.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Calendar date the prediction is for (serialized ISO-8601).
    pub date: NaiveDate,
    pub predicted_sales: i64,
    /// `predicted_sales` × unit price, rounded to 2 decimals.
    pub predicted_revenue: f64,
    /// Confidence score in \[0.60, 0.95\].
    pub confidence: f64,
}

impl ValueObject for ForecastPoint {}

/// Aggregate over a produced forecast sequence.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub total_predicted_sales: i64,
    pub total_predicted_revenue: f64,
    /// Mean confidence, rounded to 2 decimals.
    pub average_confidence: f64,
}

impl ForecastSummary {
    /// Aggregate totals and mean confidence over a forecast.
    ///
    /// An empty forecast yields an all-zero summary.
    pub fn from_points(points: &[ForecastPoint]) -> Self {
        if points.is_empty() {
            return Self {
                total_predicted_sales: 0,
                total_predicted_revenue: 0.0,
                average_confidence: 0.0,
            };
        }

        let confidence_sum: f64 = points.iter().map(|p| p.confidence).sum();
        Self {
            total_predicted_sales: points.iter().map(|p| p.predicted_sales).sum(),
            total_predicted_revenue: points.iter().map(|p| p.predicted_revenue).sum(),
            average_confidence: round2(confidence_sum / points.len() as f64),
        }
    }
}

impl ValueObject for ForecastSummary {}
