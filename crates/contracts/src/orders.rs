use serde::{Deserialize, Serialize};

use crate::decimal;

/// Order row as served by the order list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    #[serde(default)]
    pub order_date: String,
    #[serde(default, deserialize_with = "decimal::flexible")]
    pub total_amount: Option<f64>,
    #[serde(default, deserialize_with = "decimal::flexible")]
    pub total_profit: Option<f64>,
    #[serde(default)]
    pub items_count: i64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Order {
    pub fn total_amount_value(&self) -> f64 {
        decimal::or_zero(self.total_amount)
    }

    pub fn total_profit_value(&self) -> f64 {
        decimal::or_zero(self.total_profit)
    }
}

/// Line item inside an order detail payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i64,
    pub product: i64,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default, deserialize_with = "decimal::flexible")]
    pub unit_price: Option<f64>,
    #[serde(default, deserialize_with = "decimal::flexible")]
    pub unit_cost: Option<f64>,
    #[serde(default, deserialize_with = "decimal::flexible")]
    pub subtotal: Option<f64>,
    #[serde(default, deserialize_with = "decimal::flexible")]
    pub profit: Option<f64>,
}

/// Order with its line items, from `GET /orders/orders/{id}/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    pub id: i64,
    #[serde(default)]
    pub order_date: String,
    #[serde(default, deserialize_with = "decimal::flexible")]
    pub total_amount: Option<f64>,
    #[serde(default, deserialize_with = "decimal::flexible")]
    pub total_profit: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemPayload {
    pub product: i64,
    pub quantity: i64,
}

/// Body of `POST /orders/orders/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    pub notes: String,
    pub order_items: Vec<OrderItemPayload>,
}

/// Aggregates from `GET /orders/today-orders/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TodayOrders {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub total_orders: i64,
    #[serde(default, deserialize_with = "decimal::flexible")]
    pub total_revenue: Option<f64>,
    #[serde(default, deserialize_with = "decimal::flexible")]
    pub total_profit: Option<f64>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl TodayOrders {
    pub fn revenue(&self) -> f64 {
        decimal::or_zero(self.total_revenue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_detail_round_trips_wire_shape() {
        let json = r#"{
            "id": 31,
            "order_date": "2025-07-14T10:22:00Z",
            "total_amount": "450.00",
            "total_profit": "120.00",
            "notes": null,
            "order_items": [
                {"id": 1, "product": 7, "product_name": "Rice 5kg",
                 "quantity": 3, "unit_price": "150.00", "unit_cost": "110.00",
                 "subtotal": "450.00", "profit": "120.00"}
            ]
        }"#;
        let detail: OrderDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.order_items.len(), 1);
        assert_eq!(detail.order_items[0].subtotal, Some(450.0));
        assert_eq!(decimal::or_zero(detail.total_profit), 120.0);
    }

    #[test]
    fn order_payload_serializes_items() {
        let payload = OrderPayload {
            notes: "counter sale".into(),
            order_items: vec![OrderItemPayload { product: 7, quantity: 2 }],
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains(r#""order_items":[{"product":7,"quantity":2}]"#));
    }
}
