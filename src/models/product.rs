use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::FieldErrors;
use crate::error::{AppError, AppResult};

/// Query parameters for GET /products
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListQuery {
    /// Restrict to one category; wins over `search` when both are given
    pub category_id: Option<String>,
    /// Case-insensitive match on name or description
    pub search: Option<String>,
}

/// Exactly one way of narrowing the product list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductFilter {
    All,
    Category(i32),
    Search(String),
}

impl ProductListQuery {
    pub fn into_filter(self) -> AppResult<ProductFilter> {
        if let Some(raw) = self.category_id.filter(|s| !s.trim().is_empty()) {
            let id = raw
                .trim()
                .parse()
                .map_err(|_| AppError::invalid_field("categoryId", "Invalid category ID"))?;
            return Ok(ProductFilter::Category(id));
        }

        match self.search.filter(|s| !s.is_empty()) {
            Some(term) => Ok(ProductFilter::Search(term)),
            None => Ok(ProductFilter::All),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub mrp: Decimal,
    pub image: String,
    pub unit_value: f64,
    pub unit_type: String,
    /// Not checked against existing categories
    pub category_id: i32,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub is_new_arrival: bool,
    #[serde(default)]
    pub is_best_seller: bool,
    pub discount: Option<u32>,
}

impl CreateProductRequest {
    pub fn validate(&self) -> AppResult<()> {
        let mut errors = FieldErrors::new();
        errors.non_empty("name", &self.name);
        errors.non_empty("image", &self.image);
        errors.non_empty("unitType", &self.unit_type);
        errors.check(!self.price.is_sign_negative(), "price", "must not be negative");
        errors.check(!self.mrp.is_sign_negative(), "mrp", "must not be negative");
        errors.check(self.unit_value > 0.0, "unitValue", "must be positive");
        errors.check(
            self.discount.is_none_or(|d| d <= 100),
            "discount",
            "must be a percentage between 0 and 100",
        );
        errors.finish("Invalid product data")
    }
}

/// Body of PATCH /products/:id/stock. Signed so a negative value reaches
/// validation instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStockRequest {
    pub stock: i64,
}

impl UpdateStockRequest {
    pub fn validate(&self) -> AppResult<u32> {
        u32::try_from(self.stock)
            .map_err(|_| AppError::invalid_field("stock", "must be a non-negative integer"))
    }
}
