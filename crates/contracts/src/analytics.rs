use serde::{Deserialize, Serialize};

use crate::decimal;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Period {
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

/// Totals block inside the sales summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesTotals {
    #[serde(default)]
    pub total_orders: i64,
    #[serde(default, deserialize_with = "decimal::flexible")]
    pub total_revenue: Option<f64>,
    #[serde(default, deserialize_with = "decimal::flexible")]
    pub total_profit: Option<f64>,
    #[serde(default, deserialize_with = "decimal::flexible")]
    pub profit_margin: Option<f64>,
}

impl SalesTotals {
    pub fn revenue(&self) -> f64 {
        decimal::or_zero(self.total_revenue)
    }

    pub fn profit(&self) -> f64 {
        decimal::or_zero(self.total_profit)
    }

    pub fn margin(&self) -> f64 {
        decimal::or_zero(self.profit_margin)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySale {
    pub date: String,
    #[serde(default)]
    pub revenue: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyProfit {
    pub date: String,
    #[serde(default)]
    pub profit: f64,
}

/// Best-seller row; the quantity-annotated name field keeps the ORM's
/// `product__name` key on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    #[serde(rename = "product__name", default)]
    pub product_name: String,
    #[serde(default)]
    pub total_quantity: i64,
    #[serde(default, deserialize_with = "decimal::flexible")]
    pub total_revenue: Option<f64>,
    #[serde(default, deserialize_with = "decimal::flexible")]
    pub total_profit: Option<f64>,
}

/// Response of `GET /orders/sales-summary/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    #[serde(default)]
    pub period: Period,
    #[serde(default)]
    pub summary: SalesTotals,
    #[serde(default)]
    pub daily_sales: Vec<DailySale>,
    #[serde(default)]
    pub daily_profits: Vec<DailyProfit>,
    #[serde(default)]
    pub top_products: Vec<TopProduct>,
}

/// Per-category block of the category sales breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorySalesRow {
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub total_quantity: i64,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub total_profit: f64,
    #[serde(default)]
    pub products_sold: i64,
}

/// Response of `GET /orders/category-sales/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorySales {
    #[serde(default)]
    pub period: Period,
    #[serde(default)]
    pub total_sold: i64,
    #[serde(default)]
    pub category_sales: Vec<CategorySalesRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sales_summary_parses_backend_shape() {
        let json = r#"{
            "period": {"start_date": "2025-06-15", "end_date": "2025-07-15"},
            "summary": {"total_orders": 8, "total_revenue": "1200.00",
                        "total_profit": "300.00", "profit_margin": 25.0},
            "daily_sales": [{"date": "2025-07-14", "revenue": 450.0}],
            "daily_profits": [{"date": "2025-07-14", "profit": 120.0}],
            "top_products": [{"product__name": "Rice 5kg", "total_quantity": 9,
                              "total_revenue": "1350.00", "total_profit": "360.00"}]
        }"#;
        let summary: SalesSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.summary.total_orders, 8);
        assert_eq!(summary.summary.revenue(), 1200.0);
        assert_eq!(summary.top_products[0].product_name, "Rice 5kg");
    }

    #[test]
    fn category_sales_handles_uncategorized() {
        let json = r#"{
            "total_sold": 14,
            "category_sales": [
                {"category_id": null, "category_name": "Uncategorized",
                 "total_quantity": 2, "total_revenue": 60.0,
                 "total_profit": 12.0, "products_sold": 1}
            ]
        }"#;
        let sales: CategorySales = serde_json::from_str(json).unwrap();
        assert_eq!(sales.category_sales[0].category_id, None);
        assert_eq!(sales.total_sold, 14);
    }
}
