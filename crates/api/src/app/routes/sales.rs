use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::{extract::Extension, Json};

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

/// `POST /predict/sales`: forecast daily sales over the requested horizon.
pub async fn predict_sales(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::SalesForecastRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Json(body) = body?;

    let engine = services.forecast();
    let predictions = engine.predict(&body.historical_data, body.days);

    tracing::debug!(
        days = body.days,
        history_len = body.historical_data.len(),
        "sales forecast generated"
    );

    Ok(Json(dto::sales_response(engine.info(), &predictions)))
}
