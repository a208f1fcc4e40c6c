use std::sync::Arc;

use axum::{extract::Extension, response::IntoResponse, Json};
use serde_json::json;

use crate::app::services::AppServices;

/// Health probe: reports service identity and the versions of the models
/// behind it.
pub async fn health(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    let mut models = serde_json::Map::new();
    for info in [services.forecast().info(), services.reorder().info()] {
        models.insert(info.name.to_string(), json!(info.version));
    }

    Json(json!({
        "status": "healthy",
        "service": "demandcast",
        "version": env!("CARGO_PKG_VERSION"),
        "models": models,
    }))
}
