use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::order::{OrderItem, OrderStatus};
use super::Record;

/// Settlement state of a bulk order, tracked apart from fulfilment status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Failed,
    Refunded,
    Partial,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Paid => write!(f, "paid"),
            PaymentStatus::Failed => write!(f, "failed"),
            PaymentStatus::Refunded => write!(f, "refunded"),
            PaymentStatus::Partial => write!(f, "partial"),
        }
    }
}

/// Bulk order placed by a verified retailer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetailerOrder {
    pub id: i32,
    pub retailer_id: i32,
    pub items: Vec<OrderItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub delivery_address: String,
    pub payment_method: String,
    pub payment_status: PaymentStatus,
    pub notes: Option<String>,
    pub order_date: DateTime<Utc>,
    pub expected_delivery: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub bulk_order_discount: Decimal,
}

impl Record for RetailerOrder {
    const ENTITY: &'static str = "Order";

    fn id(&self) -> i32 {
        self.id
    }
}
