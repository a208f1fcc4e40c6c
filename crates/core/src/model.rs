//! Prediction model identity.

use serde::Serialize;

/// Static identity of a prediction model (name + version).
///
/// Models report this so callers (e.g. the health endpoint) can list which
/// model produced a result without coupling to the model type itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    pub name: &'static str,
    pub version: &'static str,
}

impl core::fmt::Display for ModelInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} v{}", self.name, self.version)
    }
}
