use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};
use rand::Rng;
use rand_distr::{Distribution, Normal};

use demandcast_core::{round2, ModelInfo};

use crate::point::{ForecastPoint, HistoricalObservation};

/// Revenue conversion: average order value per unit sold.
pub const UNIT_PRICE: f64 = 67.50;

/// Demand uplift applied on Saturdays and Sundays.
pub const WEEKEND_UPLIFT: f64 = 1.3;

/// Heuristic daily sales forecaster.
///
/// Model:
/// - Historical average of past daily sales, uplifted on weekends.
/// - Gaussian noise scaled to the history's spread.
/// - Confidence decays linearly with the day offset, clamped to
///   \[0.60, 0.95\].
/// - With no history at all, falls back to a flat baseline around 50
///   units/day at fixed 0.70 confidence.
///
/// The engine is stateless and infallible on well-typed input; repeated
/// calls with identical input legitimately differ because the model is
/// intentionally stochastic. Randomness enters through the caller-supplied
/// generator, so tests can seed it and concurrent callers share nothing.
#[derive(Debug, Clone)]
pub struct ForecastEngine {
    unit_price: f64,
    weekend_uplift: f64,
}

impl ForecastEngine {
    pub fn new() -> Self {
        Self {
            unit_price: UNIT_PRICE,
            weekend_uplift: WEEKEND_UPLIFT,
        }
    }

    pub fn with_unit_price(mut self, unit_price: f64) -> Self {
        self.unit_price = unit_price;
        self
    }

    pub fn with_weekend_uplift(mut self, weekend_uplift: f64) -> Self {
        self.weekend_uplift = weekend_uplift;
        self
    }

    pub fn info(&self) -> ModelInfo {
        ModelInfo {
            name: "sales_predictor",
            version: "1.0.0",
        }
    }

    /// Forecast the next `horizon_days` days starting tomorrow, drawing
    /// randomness from the thread-local generator.
    pub fn predict(
        &self,
        history: &[HistoricalObservation],
        horizon_days: u32,
    ) -> Vec<ForecastPoint> {
        self.predict_with(
            history,
            horizon_days,
            Utc::now().date_naive(),
            &mut rand::thread_rng(),
        )
    }

    /// Forecast `horizon_days` days following `base_date` using an explicit
    /// random source.
    pub fn predict_with<R: Rng + ?Sized>(
        &self,
        history: &[HistoricalObservation],
        horizon_days: u32,
        base_date: NaiveDate,
        rng: &mut R,
    ) -> Vec<ForecastPoint> {
        if history.is_empty() {
            return (0..horizon_days)
                .map(|offset| self.baseline_point(base_date, offset, rng))
                .collect();
        }

        let sales: Vec<f64> = history.iter().map(|h| h.sales).collect();
        let avg_sales = mean(&sales);
        // With a single observation there is no spread to measure; assume
        // 20% of the average.
        let std_sales = if sales.len() > 1 {
            stddev_population(&sales, avg_sales)
        } else {
            avg_sales * 0.2
        };

        (0..horizon_days)
            .map(|offset| self.statistical_point(base_date, offset, avg_sales, std_sales, rng))
            .collect()
    }

    /// Flat fallback prediction for callers with no sales history yet.
    fn baseline_point<R: Rng + ?Sized>(
        &self,
        base_date: NaiveDate,
        offset: u32,
        rng: &mut R,
    ) -> ForecastPoint {
        // Half-open draw: jitter in [-10, 10). Baseline sales are not
        // floored at zero, unlike the statistical path.
        let base_sales: i64 = 50 + rng.gen_range(-10..10);

        ForecastPoint {
            date: base_date + Duration::days(i64::from(offset) + 1),
            predicted_sales: base_sales,
            predicted_revenue: round2(base_sales as f64 * self.unit_price),
            confidence: 0.70,
        }
    }

    fn statistical_point<R: Rng + ?Sized>(
        &self,
        base_date: NaiveDate,
        offset: u32,
        avg_sales: f64,
        std_sales: f64,
        rng: &mut R,
    ) -> ForecastPoint {
        let date = base_date + Duration::days(i64::from(offset) + 1);

        let weekend_factor = if is_weekend(date) {
            self.weekend_uplift
        } else {
            1.0
        };
        let noise = sample_noise(std_sales * 0.1, rng);

        // Truncate toward zero, then floor at zero.
        let predicted_sales = ((avg_sales * weekend_factor + noise) as i64).max(0);

        // Linear decay from 0.85 at 0.005/day, clamped to [0.60, 0.95].
        let confidence = round2((0.85 - f64::from(offset) * 0.005).clamp(0.60, 0.95));

        ForecastPoint {
            date,
            predicted_sales,
            predicted_revenue: round2(predicted_sales as f64 * self.unit_price),
            confidence,
        }
    }
}

impl Default for ForecastEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Gaussian noise with the given standard deviation; zero spread yields
/// zero noise without touching the generator.
fn sample_noise<R: Rng + ?Sized>(std_dev: f64, rng: &mut R) -> f64 {
    if std_dev > 0.0 {
        Normal::new(0.0, std_dev)
            .map(|dist| dist.sample(rng))
            .unwrap_or(0.0)
    } else {
        0.0
    }
}

fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / (xs.len() as f64)
}

/// Population standard deviation (n), pairing with the plain mean above.
fn stddev_population(xs: &[f64], mean: f64) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    let var = xs
        .iter()
        .map(|x| {
            let d = x - mean;
            d * d
        })
        .sum::<f64>()
        / (xs.len() as f64);
    var.sqrt()
}
