//! Engine wiring shared by HTTP handlers.

use demandcast_forecast::ForecastEngine;
use demandcast_reorder::ReorderAdvisor;

/// The prediction engines behind the API.
///
/// Both engines are stateless, so one instance is shared across all
/// requests via an axum `Extension`; concurrent handlers need no
/// coordination.
#[derive(Debug, Clone)]
pub struct AppServices {
    forecast: ForecastEngine,
    reorder: ReorderAdvisor,
}

impl AppServices {
    pub fn new() -> Self {
        Self {
            forecast: ForecastEngine::new(),
            reorder: ReorderAdvisor::new(),
        }
    }

    pub fn forecast(&self) -> &ForecastEngine {
        &self.forecast
    }

    pub fn reorder(&self) -> &ReorderAdvisor {
        &self.reorder
    }
}

impl Default for AppServices {
    fn default() -> Self {
        Self::new()
    }
}
