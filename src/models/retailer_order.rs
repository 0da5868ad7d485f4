use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::FieldErrors;
use super::order::validate_items;
use crate::entities::prelude::{OrderItem, PaymentStatus};
use crate::error::AppResult;

/// Body of POST /retailer-orders
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceRetailerOrderRequest {
    pub retailer_id: i32,
    pub items: Vec<OrderItem>,
    pub delivery_address: String,
    pub payment_method: String,
    pub notes: Option<String>,
    pub expected_delivery: Option<String>,
    /// Absolute discount; when absent the configured bulk rate applies
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub bulk_order_discount: Option<Decimal>,
}

impl PlaceRetailerOrderRequest {
    pub fn validate(&self) -> AppResult<()> {
        let mut errors = FieldErrors::new();
        validate_items(&self.items, &mut errors);
        errors.non_empty("deliveryAddress", &self.delivery_address);
        errors.non_empty("paymentMethod", &self.payment_method);
        errors.check(
            self.bulk_order_discount.is_none_or(|d| !d.is_sign_negative()),
            "bulkOrderDiscount",
            "must not be negative",
        );
        errors.finish("Invalid order data")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentStatusRequest {
    pub status: PaymentStatus,
}
