pub mod catalog;
pub mod ordering;
pub mod retailer_orders;
pub mod retailers;
pub mod status;
pub mod users;
