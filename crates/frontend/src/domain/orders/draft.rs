//! Transient draft assembled in the create-order dialog.
//!
//! Rows hold the raw select/input values; nothing is validated until
//! submit, where incomplete rows are silently dropped. The draft is
//! discarded after submission or cancel.

use contracts::inventory::Product;
use contracts::orders::{OrderItemPayload, OrderPayload};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftItem {
    pub product: String,
    pub quantity: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub items: Vec<DraftItem>,
    pub notes: String,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            items: vec![DraftItem::default()],
            notes: String::new(),
        }
    }
}

impl OrderDraft {
    pub fn add_item(&mut self) {
        self.items.push(DraftItem::default());
    }

    /// Keeps at least one row so the dialog never renders empty.
    pub fn remove_item(&mut self, index: usize) {
        if self.items.len() > 1 && index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub fn set_product(&mut self, index: usize, value: String) {
        if let Some(item) = self.items.get_mut(index) {
            item.product = value;
        }
    }

    pub fn set_quantity(&mut self, index: usize, value: String) {
        if let Some(item) = self.items.get_mut(index) {
            item.quantity = value;
        }
    }

    /// Rows with a selected product and a positive quantity.
    pub fn valid_items(&self) -> Vec<OrderItemPayload> {
        self.items
            .iter()
            .filter_map(|item| {
                let product = item.product.parse::<i64>().ok()?;
                let quantity = item.quantity.parse::<i64>().ok().filter(|q| *q > 0)?;
                Some(OrderItemPayload { product, quantity })
            })
            .collect()
    }

    /// `None` when no row is valid; the dialog refuses to submit.
    pub fn to_payload(&self) -> Option<OrderPayload> {
        let order_items = self.valid_items();
        if order_items.is_empty() {
            return None;
        }
        Some(OrderPayload {
            notes: self.notes.clone(),
            order_items,
        })
    }

    pub fn line_total(&self, index: usize, products: &[Product]) -> f64 {
        self.items
            .get(index)
            .map(|item| line_total(item, products))
            .unwrap_or(0.0)
    }

    pub fn total(&self, products: &[Product]) -> f64 {
        self.items.iter().map(|item| line_total(item, products)).sum()
    }
}

fn line_total(item: &DraftItem, products: &[Product]) -> f64 {
    let Ok(id) = item.product.parse::<i64>() else {
        return 0.0;
    };
    let Ok(quantity) = item.quantity.parse::<i64>() else {
        return 0.0;
    };
    if quantity <= 0 {
        return 0.0;
    }
    products
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.selling_price_value() * quantity as f64)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sellable(id: i64, selling_price: f64) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            category: 1,
            category_name: "Grocery".to_string(),
            cost_price: Some(1.0),
            selling_price: Some(selling_price),
            quantity: 100,
            low_stock_threshold: 10,
            description: None,
            sku: None,
            profit_per_unit: None,
            profit_margin: None,
            is_low_stock: false,
            total_value: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn starts_with_one_empty_row() {
        let draft = OrderDraft::default();
        assert_eq!(draft.items.len(), 1);
        assert!(draft.valid_items().is_empty());
        assert!(draft.to_payload().is_none());
    }

    #[test]
    fn incomplete_rows_are_dropped_on_submit() {
        let mut draft = OrderDraft::default();
        draft.set_product(0, "7".to_string());
        draft.set_quantity(0, "2".to_string());
        draft.add_item();
        draft.set_quantity(1, "5".to_string()); // no product selected
        draft.add_item();
        draft.set_product(2, "9".to_string());
        draft.set_quantity(2, "0".to_string()); // non-positive quantity

        let items = draft.valid_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product, 7);
        assert_eq!(items[0].quantity, 2);
    }

    #[test]
    fn totals_cover_valid_rows_only() {
        let products = vec![sellable(7, 15.0), sellable(9, 3.0)];
        let mut draft = OrderDraft::default();
        draft.set_product(0, "7".to_string());
        draft.set_quantity(0, "2".to_string());
        draft.add_item();
        draft.set_product(1, "9".to_string());
        draft.set_quantity(1, "garbage".to_string());

        assert_eq!(draft.line_total(0, &products), 30.0);
        assert_eq!(draft.line_total(1, &products), 0.0);
        assert_eq!(draft.total(&products), 30.0);
    }

    #[test]
    fn last_row_cannot_be_removed() {
        let mut draft = OrderDraft::default();
        draft.remove_item(0);
        assert_eq!(draft.items.len(), 1);

        draft.add_item();
        draft.remove_item(0);
        assert_eq!(draft.items.len(), 1);
    }

    #[test]
    fn payload_carries_notes_and_items() {
        let mut draft = OrderDraft::default();
        draft.notes = "counter sale".to_string();
        draft.set_product(0, "7".to_string());
        draft.set_quantity(0, "2".to_string());

        let payload = draft.to_payload().unwrap();
        assert_eq!(payload.notes, "counter sale");
        assert_eq!(payload.order_items.len(), 1);
    }
}
