//! Stored records held by the in-memory entity store.
//!
//! Every record carries an integer id assigned by its table. Order line items
//! and verification documents are value types embedded in their owner.

pub mod category;
pub mod order;
pub mod product;
pub mod retailer;
pub mod retailer_order;
pub mod user;

pub mod prelude {
    pub use super::category::Category;
    pub use super::order::{Order, OrderItem, OrderStatus};
    pub use super::product::Product;
    pub use super::retailer::{DocumentType, Retailer, VerificationDocument, VerificationStatus};
    pub use super::retailer_order::{PaymentStatus, RetailerOrder};
    pub use super::user::{User, UserRole};
    pub use super::Record;
}

/// A record stored in a [`crate::store::Table`].
pub trait Record: Clone {
    /// Entity name used in log lines and not-found messages.
    const ENTITY: &'static str;

    fn id(&self) -> i32;
}
