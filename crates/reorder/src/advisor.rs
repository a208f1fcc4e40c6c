use serde::{Deserialize, Serialize};

use demandcast_core::{ModelInfo, ValueObject};

use crate::recommendation::{ReorderRecommendation, Urgency};

/// Demand and stock inputs for one reorder recommendation.
///
/// `current_stock` is accepted as-is, negative values included; the only
/// coercion anywhere is the demand floor inside the advisor.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReorderRequest {
    pub current_stock: i64,
    pub avg_daily_sales: f64,
    pub lead_time_days: i64,
    pub safety_stock_days: i64,
}

impl ReorderRequest {
    /// Request with the standard lead time (7 days) and safety buffer
    /// (3 days).
    pub fn new(current_stock: i64, avg_daily_sales: f64) -> Self {
        Self {
            current_stock,
            avg_daily_sales,
            lead_time_days: 7,
            safety_stock_days: 3,
        }
    }

    pub fn with_lead_time_days(mut self, lead_time_days: i64) -> Self {
        self.lead_time_days = lead_time_days;
        self
    }

    pub fn with_safety_stock_days(mut self, safety_stock_days: i64) -> Self {
        self.safety_stock_days = safety_stock_days;
        self
    }
}

impl ValueObject for ReorderRequest {}

/// Reorder-point advisor.
///
/// Model:
/// - Demand rate floored at 1 unit/day to keep the divisions below sane.
/// - `safety_stock = demand × safety_stock_days`,
///   `reorder_point = demand × lead_time_days + safety_stock` (both
///   truncated to whole units).
/// - Urgency is an ordered decision list over `current_stock`; the first
///   matching branch wins and each threshold is inclusive on the lower
///   branch.
/// - Order quantity is a fixed replenishment window of demand (two weeks by
///   default), independent of urgency.
#[derive(Debug, Clone)]
pub struct ReorderAdvisor {
    replenishment_days: i64,
}

impl ReorderAdvisor {
    pub fn new() -> Self {
        Self {
            replenishment_days: 14,
        }
    }

    pub fn with_replenishment_days(mut self, replenishment_days: i64) -> Self {
        self.replenishment_days = replenishment_days;
        self
    }

    pub fn info(&self) -> ModelInfo {
        ModelInfo {
            name: "inventory_optimizer",
            version: "1.0.0",
        }
    }

    pub fn recommend(&self, req: &ReorderRequest) -> ReorderRecommendation {
        let daily_demand = req.avg_daily_sales.max(1.0);
        let safety_stock = (daily_demand * req.safety_stock_days as f64) as i64;
        let reorder_point = (daily_demand * req.lead_time_days as f64) as i64 + safety_stock;

        let stock = req.current_stock;
        let (urgency, days_until_stockout) = if stock <= safety_stock {
            (
                Urgency::Critical,
                ((stock as f64 / daily_demand) as i64).max(0),
            )
        } else if stock <= reorder_point {
            (
                Urgency::High,
                ((stock - safety_stock) as f64 / daily_demand) as i64,
            )
        } else if (stock as f64) <= reorder_point as f64 * 1.5 {
            (Urgency::Medium, (stock as f64 / daily_demand) as i64)
        } else {
            (Urgency::Low, (stock as f64 / daily_demand) as i64)
        };

        ReorderRecommendation {
            reorder_point,
            safety_stock,
            recommended_order_quantity: (daily_demand * self.replenishment_days as f64) as i64,
            urgency,
            days_until_stockout,
            should_reorder: stock <= reorder_point,
        }
    }
}

impl Default for ReorderAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recommend(current_stock: i64, avg_daily_sales: f64) -> ReorderRecommendation {
        ReorderAdvisor::new().recommend(&ReorderRequest::new(current_stock, avg_daily_sales))
    }

    #[test]
    fn empty_shelf_is_critical() {
        let rec = recommend(0, 10.0);
        assert_eq!(rec.urgency, Urgency::Critical);
        assert_eq!(rec.safety_stock, 30);
        assert_eq!(rec.reorder_point, 100);
        assert_eq!(rec.days_until_stockout, 0);
        assert!(rec.should_reorder);
    }

    #[test]
    fn well_stocked_item_is_low() {
        // 200 > 1.5 x reorder_point (150).
        let rec = recommend(200, 10.0);
        assert_eq!(rec.reorder_point, 100);
        assert_eq!(rec.urgency, Urgency::Low);
        assert_eq!(rec.days_until_stockout, 20);
        assert!(!rec.should_reorder);
    }

    #[test]
    fn between_reorder_point_and_its_half_margin_is_medium() {
        let rec = recommend(120, 10.0);
        assert_eq!(rec.urgency, Urgency::Medium);
        assert_eq!(rec.days_until_stockout, 12);
        assert!(!rec.should_reorder);
    }

    #[test]
    fn below_reorder_point_is_high_with_buffer_adjusted_runway() {
        let rec = recommend(90, 10.0);
        assert_eq!(rec.urgency, Urgency::High);
        // Runway counts only the stock above the safety buffer.
        assert_eq!(rec.days_until_stockout, 6);
        assert!(rec.should_reorder);
    }

    #[test]
    fn thresholds_are_inclusive_on_the_lower_branch() {
        // Exactly at safety stock -> critical, not high.
        assert_eq!(recommend(30, 10.0).urgency, Urgency::Critical);
        // Exactly at reorder point -> high, not medium; and still reorders.
        let at_reorder = recommend(100, 10.0);
        assert_eq!(at_reorder.urgency, Urgency::High);
        assert!(at_reorder.should_reorder);
        // Exactly at 1.5 x reorder point -> medium, not low.
        assert_eq!(recommend(150, 10.0).urgency, Urgency::Medium);
        assert_eq!(recommend(151, 10.0).urgency, Urgency::Low);
    }

    #[test]
    fn zero_demand_is_floored_to_one_unit_per_day() {
        let rec = recommend(5, 0.0);
        assert_eq!(rec.safety_stock, 3);
        assert_eq!(rec.reorder_point, 10);
        assert_eq!(rec.recommended_order_quantity, 14);
        assert_eq!(rec.urgency, Urgency::High);
        assert_eq!(rec.days_until_stockout, 2);
    }

    #[test]
    fn negative_stock_flows_through_with_floored_runway() {
        let rec = recommend(-25, 10.0);
        assert_eq!(rec.urgency, Urgency::Critical);
        assert_eq!(rec.days_until_stockout, 0);
        assert!(rec.should_reorder);
    }

    #[test]
    fn fractional_demand_truncates_toward_zero() {
        let rec = recommend(40, 2.5);
        // safety = trunc(7.5) = 7, reorder = trunc(17.5) + 7 = 24.
        assert_eq!(rec.safety_stock, 7);
        assert_eq!(rec.reorder_point, 24);
        assert_eq!(rec.recommended_order_quantity, 35);
        // 40 > 24 and 40 > 36 (1.5 x 24) -> low; runway trunc(40 / 2.5) = 16.
        assert_eq!(rec.urgency, Urgency::Low);
        assert_eq!(rec.days_until_stockout, 16);
    }

    #[test]
    fn custom_lead_and_safety_windows() {
        let req = ReorderRequest::new(50, 5.0)
            .with_lead_time_days(10)
            .with_safety_stock_days(4);
        let rec = ReorderAdvisor::new().recommend(&req);

        assert_eq!(rec.safety_stock, 20);
        assert_eq!(rec.reorder_point, 70);
        assert_eq!(rec.urgency, Urgency::High);
        assert_eq!(rec.days_until_stockout, 6);
    }

    #[test]
    fn replenishment_window_override_scales_order_quantity() {
        let advisor = ReorderAdvisor::new().with_replenishment_days(28);
        let rec = advisor.recommend(&ReorderRequest::new(0, 10.0));
        assert_eq!(rec.recommended_order_quantity, 280);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: identical inputs always yield identical output.
            #[test]
            fn recommend_is_idempotent(
                current_stock in -1_000i64..100_000,
                avg_daily_sales in -10.0f64..1_000.0,
                lead_time_days in 0i64..60,
                safety_stock_days in 0i64..30
            ) {
                let advisor = ReorderAdvisor::new();
                let req = ReorderRequest {
                    current_stock,
                    avg_daily_sales,
                    lead_time_days,
                    safety_stock_days,
                };
                prop_assert_eq!(advisor.recommend(&req), advisor.recommend(&req));
            }

            /// Property: order quantity is a pure function of the demand
            /// rate, independent of stock level.
            #[test]
            fn order_quantity_ignores_stock(
                stock_a in -1_000i64..100_000,
                stock_b in -1_000i64..100_000,
                avg_daily_sales in -10.0f64..1_000.0
            ) {
                let advisor = ReorderAdvisor::new();
                let a = advisor.recommend(&ReorderRequest::new(stock_a, avg_daily_sales));
                let b = advisor.recommend(&ReorderRequest::new(stock_b, avg_daily_sales));

                prop_assert_eq!(a.recommended_order_quantity, b.recommended_order_quantity);
                prop_assert_eq!(
                    a.recommended_order_quantity,
                    (avg_daily_sales.max(1.0) * 14.0) as i64
                );
            }

            /// Property: the reorder flag agrees with the urgency tier
            /// (critical/high reorder, medium/low do not).
            #[test]
            fn reorder_flag_matches_urgency(
                current_stock in -1_000i64..100_000,
                avg_daily_sales in -10.0f64..1_000.0,
                lead_time_days in 0i64..60,
                safety_stock_days in 0i64..30
            ) {
                let rec = ReorderAdvisor::new().recommend(&ReorderRequest {
                    current_stock,
                    avg_daily_sales,
                    lead_time_days,
                    safety_stock_days,
                });

                let urgent = matches!(rec.urgency, Urgency::Critical | Urgency::High);
                prop_assert_eq!(rec.should_reorder, urgent);
                prop_assert!(rec.days_until_stockout >= 0);
                prop_assert!(rec.safety_stock >= 0);
                prop_assert!(rec.reorder_point >= 0);
                prop_assert!(rec.recommended_order_quantity >= 0);
            }
        }
    }
}
