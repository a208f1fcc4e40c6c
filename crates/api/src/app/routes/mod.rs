use axum::{
    routing::{get, post},
    Router,
};

pub mod inventory;
pub mod sales;
pub mod system;

/// Router for all endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .nest("/predict", predict_router())
}

fn predict_router() -> Router {
    Router::new()
        .route("/sales", post(sales::predict_sales))
        .route("/inventory", post(inventory::predict_inventory))
        .route("/batch", post(inventory::predict_batch))
}
