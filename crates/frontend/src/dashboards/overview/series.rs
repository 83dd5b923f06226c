//! Prepared series and scales for the dashboard charts.

use contracts::analytics::{DailyProfit, DailySale};

/// Axis ceiling for the revenue/profit charts.
///
/// Anchored to 5% of the inventory value so a quiet day still renders at
/// a meaningful scale, with 20% headroom over the actual data, a 1000
/// floor, rounded up to the next thousand.
pub fn y_axis_max(
    inventory_value: f64,
    daily_sales: &[DailySale],
    daily_profits: &[DailyProfit],
) -> f64 {
    let max_revenue = daily_sales.iter().map(|d| d.revenue).fold(0.0_f64, f64::max);
    let max_profit = daily_profits.iter().map(|d| d.profit).fold(0.0_f64, f64::max);

    let inventory_scale = inventory_value * 0.05;
    let data_scale = max_revenue.max(max_profit) * 1.2;

    let max_scale = inventory_scale.max(data_scale).max(1000.0);
    (max_scale / 1000.0).ceil() * 1000.0
}

/// Color band for a daily profit bar, as a share of the inventory value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfitBand {
    Excellent,
    Good,
    Moderate,
    Low,
    Loss,
}

impl ProfitBand {
    pub fn classify(profit: f64, inventory_value: f64) -> Self {
        let base = if inventory_value > 0.0 {
            inventory_value
        } else {
            1.0
        };
        let share = profit / base * 100.0;

        if share >= 0.5 {
            ProfitBand::Excellent
        } else if share >= 0.3 {
            ProfitBand::Good
        } else if share >= 0.1 {
            ProfitBand::Moderate
        } else if profit > 0.0 {
            ProfitBand::Low
        } else {
            ProfitBand::Loss
        }
    }

    pub fn fill(self) -> &'static str {
        match self {
            ProfitBand::Excellent => "#059669",
            ProfitBand::Good => "#0ea5e9",
            ProfitBand::Moderate => "#f59e0b",
            ProfitBand::Low => "#84cc16",
            ProfitBand::Loss => "#ef4444",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sales(values: &[f64]) -> Vec<DailySale> {
        values
            .iter()
            .map(|v| DailySale {
                date: "2025-07-01".to_string(),
                revenue: *v,
            })
            .collect()
    }

    fn profits(values: &[f64]) -> Vec<DailyProfit> {
        values
            .iter()
            .map(|v| DailyProfit {
                date: "2025-07-01".to_string(),
                profit: *v,
            })
            .collect()
    }

    #[test]
    fn empty_data_floors_at_1000() {
        assert_eq!(y_axis_max(0.0, &[], &[]), 1000.0);
    }

    #[test]
    fn inventory_value_anchors_the_scale() {
        // 5% of 100_000 dominates the small data values.
        assert_eq!(y_axis_max(100_000.0, &sales(&[200.0]), &profits(&[50.0])), 5000.0);
    }

    #[test]
    fn data_with_headroom_wins_over_small_inventory() {
        // 4500 * 1.2 = 5400, rounded up to 6000.
        assert_eq!(y_axis_max(10_000.0, &sales(&[4500.0]), &[]), 6000.0);
    }

    #[test]
    fn profit_bands_split_on_inventory_share() {
        let inventory = 10_000.0;
        assert_eq!(ProfitBand::classify(60.0, inventory), ProfitBand::Excellent);
        assert_eq!(ProfitBand::classify(35.0, inventory), ProfitBand::Good);
        assert_eq!(ProfitBand::classify(15.0, inventory), ProfitBand::Moderate);
        assert_eq!(ProfitBand::classify(5.0, inventory), ProfitBand::Low);
        assert_eq!(ProfitBand::classify(0.0, inventory), ProfitBand::Loss);
        assert_eq!(ProfitBand::classify(-20.0, inventory), ProfitBand::Loss);
    }

    #[test]
    fn zero_inventory_does_not_divide_by_zero() {
        // Falls back to a base of 1, so any positive profit is "excellent".
        assert_eq!(ProfitBand::classify(1.0, 0.0), ProfitBand::Excellent);
    }
}
