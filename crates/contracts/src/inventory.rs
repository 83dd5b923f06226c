use serde::{Deserialize, Serialize};

use crate::decimal;

/// Product category reference record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub product_count: i64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Inventory item as served by the product list/detail endpoints.
///
/// Decimal columns come over the wire as strings, derived columns may be
/// null for products without a selling price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: i64,
    #[serde(default)]
    pub category_name: String,
    #[serde(default, deserialize_with = "decimal::flexible")]
    pub cost_price: Option<f64>,
    #[serde(default, deserialize_with = "decimal::flexible")]
    pub selling_price: Option<f64>,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub low_stock_threshold: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default, deserialize_with = "decimal::flexible")]
    pub profit_per_unit: Option<f64>,
    #[serde(default, deserialize_with = "decimal::flexible")]
    pub profit_margin: Option<f64>,
    #[serde(default)]
    pub is_low_stock: bool,
    #[serde(default, deserialize_with = "decimal::flexible")]
    pub total_value: Option<f64>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Product {
    pub fn cost_price_value(&self) -> f64 {
        decimal::or_zero(self.cost_price)
    }

    pub fn selling_price_value(&self) -> f64 {
        decimal::or_zero(self.selling_price)
    }

    pub fn profit_per_unit_value(&self) -> f64 {
        decimal::or_zero(self.profit_per_unit)
    }

    /// Products offered for sale: priced and in stock.
    pub fn is_sellable(&self) -> bool {
        self.selling_price.is_some() && self.quantity > 0
    }
}

/// Payload for product create/update.
///
/// Field values are passed through as the user typed them; the server
/// validates and parses. A blank SKU is omitted entirely so the server
/// generates one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub category: i64,
    pub cost_price: String,
    pub selling_price: String,
    pub quantity: String,
    pub low_stock_threshold: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
    pub description: String,
}

/// One row of the low stock panel inside the inventory summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LowStockProduct {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub available_quantity: i64,
    #[serde(default)]
    pub threshold: i64,
}

/// Aggregate figures from `GET /inventory/summary/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventorySummary {
    #[serde(default)]
    pub total_products: i64,
    #[serde(default)]
    pub total_categories: i64,
    #[serde(default)]
    pub low_stock_count: i64,
    #[serde(default, deserialize_with = "decimal::flexible")]
    pub total_inventory_value: Option<f64>,
    #[serde(default, deserialize_with = "decimal::flexible")]
    pub total_sold_value: Option<f64>,
    #[serde(default)]
    pub total_quantity: i64,
    #[serde(default)]
    pub total_sold_quantity: i64,
    #[serde(default)]
    pub total_available_quantity: i64,
    #[serde(default, deserialize_with = "decimal::flexible")]
    pub inventory_turnover_percentage: Option<f64>,
    #[serde(default)]
    pub low_stock_products: Vec<LowStockProduct>,
}

impl InventorySummary {
    pub fn inventory_value(&self) -> f64 {
        decimal::or_zero(self.total_inventory_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ListEnvelope;

    #[test]
    fn product_decimals_accept_strings_and_nulls() {
        let json = r#"{
            "id": 7,
            "name": "Rice 5kg",
            "category": 2,
            "category_name": "Grocery",
            "cost_price": "310.00",
            "selling_price": null,
            "quantity": 40,
            "low_stock_threshold": 10,
            "sku": "GRO-0007",
            "profit_per_unit": null,
            "is_low_stock": false
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.cost_price_value(), 310.0);
        assert_eq!(product.selling_price_value(), 0.0);
        assert_eq!(product.profit_per_unit_value(), 0.0);
        assert!(!product.is_sellable());
    }

    #[test]
    fn product_list_accepts_both_envelope_shapes() {
        let bare = r#"[{"id": 1, "name": "Soap", "category": 3}]"#;
        let paged = r#"{"results": [{"id": 1, "name": "Soap", "category": 3}]}"#;
        for payload in [bare, paged] {
            let products: Vec<Product> =
                serde_json::from_str::<ListEnvelope<Product>>(payload)
                    .unwrap()
                    .into_vec();
            assert_eq!(products.len(), 1);
            assert_eq!(products[0].name, "Soap");
        }
    }

    #[test]
    fn blank_sku_is_omitted_from_payload() {
        let payload = ProductPayload {
            name: "Soap".into(),
            category: 3,
            cost_price: "2".into(),
            selling_price: "3".into(),
            quantity: "50".into(),
            low_stock_threshold: "10".into(),
            description: String::new(),
            sku: None,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("sku"));

        let with_sku = ProductPayload {
            sku: Some("S1".into()),
            ..payload
        };
        let json = serde_json::to_string(&with_sku).unwrap();
        assert!(json.contains(r#""sku":"S1""#));
    }

    #[test]
    fn summary_tolerates_partial_payload() {
        let summary: InventorySummary = serde_json::from_str(r#"{"total_products": 12}"#).unwrap();
        assert_eq!(summary.total_products, 12);
        assert_eq!(summary.low_stock_count, 0);
        assert_eq!(summary.inventory_value(), 0.0);
        assert!(summary.low_stock_products.is_empty());
    }
}
