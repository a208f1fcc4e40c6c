use serde::Deserialize;
use serde_json::json;

use demandcast_core::ModelInfo;
use demandcast_forecast::{ForecastPoint, ForecastSummary, HistoricalObservation};
use demandcast_reorder::ReorderRecommendation;

// -------------------------
// Request DTOs
// -------------------------

/// Body for `POST /predict/sales`.
#[derive(Debug, Deserialize)]
pub struct SalesForecastRequest {
    #[serde(default)]
    pub historical_data: Vec<HistoricalObservation>,
    #[serde(default = "default_days")]
    pub days: u32,
}

fn default_days() -> u32 {
    30
}

/// Body for `POST /predict/inventory`.
#[derive(Debug, Deserialize)]
pub struct InventoryRequest {
    #[serde(default)]
    pub current_stock: i64,
    #[serde(default = "default_avg_daily_sales")]
    pub avg_daily_sales: f64,
    #[serde(default = "default_lead_time_days")]
    pub lead_time_days: i64,
    #[serde(default = "default_safety_stock_days")]
    pub safety_stock_days: i64,
}

fn default_avg_daily_sales() -> f64 {
    10.0
}

fn default_lead_time_days() -> i64 {
    7
}

fn default_safety_stock_days() -> i64 {
    3
}

/// Body for `POST /predict/batch`.
#[derive(Debug, Default, Deserialize)]
pub struct BatchRequest {
    #[serde(default)]
    pub products: Vec<BatchProduct>,
}

/// One product row in a batch request.
///
/// `id` and `name` are opaque to the advisor and echoed back untouched in
/// the per-product result.
#[derive(Debug, Deserialize)]
pub struct BatchProduct {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub current_stock: i64,
    #[serde(default = "default_avg_daily_sales")]
    pub avg_daily_sales: f64,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn sales_response(model: ModelInfo, predictions: &[ForecastPoint]) -> serde_json::Value {
    json!({
        "success": true,
        "model_version": model.version,
        "predictions": predictions,
        "summary": ForecastSummary::from_points(predictions),
    })
}

pub fn inventory_response(model: ModelInfo, recommendation: ReorderRecommendation) -> serde_json::Value {
    json!({
        "success": true,
        "model_version": model.version,
        "recommendation": recommendation,
    })
}

pub fn batch_product_result(product: BatchProduct, recommendation: ReorderRecommendation) -> serde_json::Value {
    json!({
        "product_id": product.id,
        "product_name": product.name,
        "recommendation": recommendation,
    })
}
