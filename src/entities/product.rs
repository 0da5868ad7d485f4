use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Record;

/// A catalog product.
///
/// `stock` is the only field that changes under normal operation: order
/// placement decrements it and the stock endpoint replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Maximum retail price, shown struck through when above `price`
    #[serde(with = "rust_decimal::serde::float")]
    pub mrp: Decimal,
    pub image: String,
    pub unit_value: f64,
    pub unit_type: String,
    pub category_id: i32,
    pub stock: u32,
    pub is_popular: bool,
    pub is_new_arrival: bool,
    pub is_best_seller: bool,
    /// Discount in whole percent
    pub discount: Option<u32>,
}

impl Product {
    /// Case-insensitive substring match against name or description.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }
}

impl Record for Product {
    const ENTITY: &'static str = "Product";

    fn id(&self) -> i32 {
        self.id
    }
}
