use serde::{Deserialize, Serialize};

use demandcast_core::ValueObject;

/// Restocking priority tier, most severe first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Critical,
    High,
    Medium,
    Low,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Critical => "critical",
            Urgency::High => "high",
            Urgency::Medium => "medium",
            Urgency::Low => "low",
        }
    }
}

/// Reorder recommendation for a single item.
///
/// All quantities are non-negative; `days_until_stockout` is floored at
/// zero. Created fresh per call, no identity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderRecommendation {
    /// Stock level at or below which replenishment should be triggered.
    pub reorder_point: i64,
    /// Buffer held to absorb demand variability during lead time.
    pub safety_stock: i64,
    pub recommended_order_quantity: i64,
    pub urgency: Urgency,
    pub days_until_stockout: i64,
    pub should_reorder: bool,
}

impl ValueObject for ReorderRecommendation {}
