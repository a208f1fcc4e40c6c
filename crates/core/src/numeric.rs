//! Shared numeric conventions.

/// Round to 2 decimal places.
///
/// Convention used for currency amounts and confidence scores throughout the
/// prediction engines.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
