//! Client-side shaping of the cached product list: free-text search,
//! category filter and ordering.
//!
//! The visible table is always recomputed from the full fetched list, so
//! reapplying the same criteria is idempotent and independent of any
//! previous filter state.

use std::cmp::Ordering;

use contracts::inventory::Product;

use crate::shared::list_utils::{filter_list, sort_list, Searchable, Sortable};

/// Column the product table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Name,
    Category,
    CostPrice,
    SellingPrice,
    Quantity,
    Profit,
}

impl SortField {
    pub const ALL: [SortField; 6] = [
        SortField::Name,
        SortField::Category,
        SortField::CostPrice,
        SortField::SellingPrice,
        SortField::Quantity,
        SortField::Profit,
    ];

    /// Stable key used in select options and comparator dispatch.
    pub fn key(self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Category => "category",
            SortField::CostPrice => "cost_price",
            SortField::SellingPrice => "selling_price",
            SortField::Quantity => "quantity",
            SortField::Profit => "profit",
        }
    }

    /// Unknown keys fall back to name ordering.
    pub fn parse(s: &str) -> Self {
        match s {
            "category" => SortField::Category,
            "cost_price" => SortField::CostPrice,
            "selling_price" => SortField::SellingPrice,
            "quantity" => SortField::Quantity,
            "profit" => SortField::Profit,
            _ => SortField::Name,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortField::Name => "Name",
            SortField::Category => "Category",
            SortField::CostPrice => "Cost Price",
            SortField::SellingPrice => "Selling Price",
            SortField::Quantity => "Quantity",
            SortField::Profit => "Profit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn key(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "desc" => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    pub fn is_ascending(self) -> bool {
        matches!(self, SortOrder::Asc)
    }

    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// The ephemeral filter/sort criteria of the inventory view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub search_term: String,
    pub category: Option<i64>,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
}

impl Searchable for Product {
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self.category_name.to_lowercase().contains(&needle)
            || self
                .sku
                .as_deref()
                .map(|sku| sku.to_lowercase().contains(&needle))
                .unwrap_or(false)
    }
}

fn compare_numbers(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "category" => self
                .category_name
                .to_lowercase()
                .cmp(&other.category_name.to_lowercase()),
            "cost_price" => compare_numbers(self.cost_price_value(), other.cost_price_value()),
            "selling_price" => {
                compare_numbers(self.selling_price_value(), other.selling_price_value())
            }
            "quantity" => self.quantity.cmp(&other.quantity),
            "profit" => compare_numbers(self.profit_per_unit_value(), other.profit_per_unit_value()),
            _ => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
        }
    }
}

/// Apply search, category filter and ordering to the cached product list.
///
/// Search and category filters are conjunctive. Descending order reverses
/// the comparator, not the produced list, so equal keys stay grouped.
/// A category id that matches nothing yields an empty list, not an error.
pub fn process(products: &[Product], query: &ProductQuery) -> Vec<Product> {
    let mut result = filter_list(products.to_vec(), &query.search_term);

    if let Some(category) = query.category {
        result.retain(|product| product.category == category);
    }

    sort_list(
        &mut result,
        query.sort_field.key(),
        query.sort_order.is_ascending(),
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(
        id: i64,
        name: &str,
        category: i64,
        category_name: &str,
        sku: Option<&str>,
        cost_price: f64,
        selling_price: Option<f64>,
        quantity: i64,
        profit_per_unit: Option<f64>,
    ) -> Product {
        Product {
            id,
            name: name.to_string(),
            category,
            category_name: category_name.to_string(),
            cost_price: Some(cost_price),
            selling_price,
            quantity,
            low_stock_threshold: 10,
            description: None,
            sku: sku.map(str::to_string),
            profit_per_unit,
            profit_margin: None,
            is_low_stock: quantity < 10,
            total_value: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn fixture() -> Vec<Product> {
        vec![
            product(1, "Rice", 1, "Grocery", Some("R1"), 10.0, Some(15.0), 5, Some(5.0)),
            product(2, "Soap", 2, "Personal", Some("S1"), 2.0, Some(3.0), 50, Some(1.0)),
            product(3, "Salt", 1, "Grocery", Some("G7"), 1.0, None, 80, None),
        ]
    }

    fn ids(products: &[Product]) -> Vec<i64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn no_criteria_sorts_by_name_ascending() {
        let result = process(&fixture(), &ProductQuery::default());
        assert_eq!(ids(&result), vec![1, 3, 2]);
    }

    #[test]
    fn profit_descending_end_to_end() {
        let products = vec![
            product(1, "Rice", 1, "Grocery", Some("R1"), 10.0, Some(15.0), 5, Some(5.0)),
            product(2, "Soap", 2, "Personal", Some("S1"), 2.0, Some(3.0), 50, Some(1.0)),
        ];
        let query = ProductQuery {
            sort_field: SortField::Profit,
            sort_order: SortOrder::Desc,
            ..Default::default()
        };
        let result = process(&products, &query);
        assert_eq!(
            result.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
            vec!["Rice", "Soap"]
        );
    }

    #[test]
    fn search_matches_name_category_and_sku_case_insensitively() {
        let products = fixture();
        for (term, expected) in [("rice", vec![1]), ("PERSONAL", vec![2]), ("g7", vec![3])] {
            let query = ProductQuery {
                search_term: term.to_string(),
                ..Default::default()
            };
            assert_eq!(ids(&process(&products, &query)), expected, "term {term}");
        }
    }

    #[test]
    fn search_and_category_are_conjunctive() {
        let query = ProductQuery {
            search_term: "s".to_string(),
            category: Some(1),
            ..Default::default()
        };
        // "s" matches Soap and Salt; the category filter keeps Grocery only.
        assert_eq!(ids(&process(&fixture(), &query)), vec![3]);
    }

    #[test]
    fn unknown_category_yields_empty_list() {
        let query = ProductQuery {
            category: Some(99),
            ..Default::default()
        };
        assert!(process(&fixture(), &query).is_empty());
    }

    #[test]
    fn empty_input_yields_empty_list() {
        let query = ProductQuery {
            search_term: "anything".to_string(),
            category: Some(1),
            sort_field: SortField::Profit,
            sort_order: SortOrder::Desc,
        };
        assert!(process(&[], &query).is_empty());
    }

    #[test]
    fn reprocessing_own_output_is_stable() {
        let query = ProductQuery {
            search_term: "a".to_string(),
            sort_field: SortField::Quantity,
            sort_order: SortOrder::Desc,
            ..Default::default()
        };
        let once = process(&fixture(), &query);
        let twice = process(&once, &query);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn input_list_is_not_mutated() {
        let products = fixture();
        let before = ids(&products);
        let query = ProductQuery {
            sort_field: SortField::Quantity,
            sort_order: SortOrder::Desc,
            ..Default::default()
        };
        let _ = process(&products, &query);
        assert_eq!(ids(&products), before);
    }

    #[test]
    fn missing_numeric_fields_sort_as_zero() {
        let query = ProductQuery {
            sort_field: SortField::SellingPrice,
            ..Default::default()
        };
        // Salt has no selling price and must sort before the priced products.
        assert_eq!(ids(&process(&fixture(), &query)), vec![3, 2, 1]);
    }

    #[test]
    fn direction_flip_reverses_order_without_ties() {
        let asc = ProductQuery {
            sort_field: SortField::Quantity,
            sort_order: SortOrder::Asc,
            ..Default::default()
        };
        let desc = ProductQuery {
            sort_field: SortField::Quantity,
            sort_order: SortOrder::Desc,
            ..Default::default()
        };
        let mut ascending = ids(&process(&fixture(), &asc));
        let descending = ids(&process(&fixture(), &desc));
        ascending.reverse();
        assert_eq!(ascending, descending);
    }

    #[test]
    fn ties_stay_grouped_under_descending_order() {
        let products = vec![
            product(1, "A", 1, "Grocery", None, 1.0, Some(5.0), 10, Some(2.0)),
            product(2, "B", 1, "Grocery", None, 1.0, Some(5.0), 30, Some(2.0)),
            product(3, "C", 1, "Grocery", None, 1.0, Some(5.0), 20, Some(7.0)),
        ];
        let query = ProductQuery {
            sort_field: SortField::Profit,
            sort_order: SortOrder::Desc,
            ..Default::default()
        };
        let result = process(&products, &query);
        assert_eq!(result[0].id, 3);
        // The two profit-2.0 products are adjacent, in whatever internal order.
        let tail: Vec<i64> = result[1..].iter().map(|p| p.id).collect();
        assert!(tail == vec![1, 2] || tail == vec![2, 1]);
    }
}
