use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::{extract::Extension, Json};
use serde_json::json;

use demandcast_reorder::{ReorderRequest, Urgency};

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

/// `POST /predict/inventory`: reorder recommendation for a single item.
pub async fn predict_inventory(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::InventoryRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Json(body) = body?;

    let advisor = services.reorder();
    let recommendation = advisor.recommend(&ReorderRequest {
        current_stock: body.current_stock,
        avg_daily_sales: body.avg_daily_sales,
        lead_time_days: body.lead_time_days,
        safety_stock_days: body.safety_stock_days,
    });

    tracing::debug!(
        current_stock = body.current_stock,
        urgency = recommendation.urgency.as_str(),
        "reorder recommendation generated"
    );

    Ok(Json(dto::inventory_response(advisor.info(), recommendation)))
}

/// `POST /predict/batch`: reorder recommendations for a list of products.
///
/// The advisor is invoked once per product with no shared state; the
/// summary tallies the returned urgency tiers.
pub async fn predict_batch(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::BatchRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Json(body) = body?;

    let advisor = services.reorder();
    let mut results = Vec::with_capacity(body.products.len());
    let mut critical_items = 0usize;
    let mut high_priority_items = 0usize;

    for product in body.products {
        let recommendation = advisor.recommend(&ReorderRequest::new(
            product.current_stock,
            product.avg_daily_sales,
        ));

        match recommendation.urgency {
            Urgency::Critical => critical_items += 1,
            Urgency::High => high_priority_items += 1,
            Urgency::Medium | Urgency::Low => {}
        }

        results.push(dto::batch_product_result(product, recommendation));
    }

    let total_products = results.len();
    tracing::debug!(
        total = total_products,
        critical = critical_items,
        "batch recommendations generated"
    );

    Ok(Json(json!({
        "success": true,
        "results": results,
        "summary": {
            "total_products": total_products,
            "critical_items": critical_items,
            "high_priority_items": high_priority_items,
        },
    })))
}
