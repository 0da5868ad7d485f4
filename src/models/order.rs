use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::FieldErrors;
use crate::entities::prelude::{OrderItem, OrderStatus};
use crate::error::AppResult;

/// Body of POST /orders.
///
/// Totals are computed from the item snapshots; a client-sent
/// `totalAmount` or `status` is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub user_id: i32,
    pub items: Vec<OrderItem>,
    pub address: String,
    pub payment_method: String,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub delivery_fee: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub platform_fee: Option<Decimal>,
    pub expected_delivery: Option<String>,
}

impl PlaceOrderRequest {
    pub fn validate(&self) -> AppResult<()> {
        let mut errors = FieldErrors::new();
        validate_items(&self.items, &mut errors);
        errors.non_empty("address", &self.address);
        errors.non_empty("paymentMethod", &self.payment_method);
        for (field, fee) in [("deliveryFee", self.delivery_fee), ("platformFee", self.platform_fee)] {
            errors.check(
                fee.is_none_or(|f| !f.is_sign_negative()),
                field,
                "must not be negative",
            );
        }
        errors.finish("Invalid order data")
    }
}

/// Shared line-item checks for consumer and bulk orders.
pub fn validate_items(items: &[OrderItem], errors: &mut FieldErrors) {
    errors.check(!items.is_empty(), "items", "must contain at least one item");
    for (i, item) in items.iter().enumerate() {
        let field = |name: &str| format!("items[{}].{}", i, name);
        errors.check(item.product_id > 0, &field("productId"), "must be a valid product id");
        errors.check(item.quantity >= 1, &field("quantity"), "must be at least 1");
        errors.check(!item.price.is_sign_negative(), &field("price"), "must not be negative");
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusRequest {
    pub status: OrderStatus,
}
