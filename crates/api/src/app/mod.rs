//! HTTP API application wiring (Axum router + engine wiring).
//!
//! This folder is structured like:
//! - `services.rs`: the prediction engines shared across handlers
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent failure responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    let services = Arc::new(services::AppServices::new());

    routes::router()
        .layer(Extension(services))
        .layer(ServiceBuilder::new())
}
