pub mod category;
pub mod order;
pub mod product;
pub mod retailer;
pub mod retailer_order;
pub mod user;
