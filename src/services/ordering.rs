//! Consumer order placement and the stock reservation it shares with bulk
//! orders.
//!
//! Placement is all-or-nothing: every line is checked against live stock
//! before any product is touched, and both phases run under the store's
//! write guard, so two placements never interleave on the same product.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};

use super::status::check_order_transition;
use crate::config::PricingConfig;
use crate::entities::prelude::{Order, OrderItem, OrderStatus};
use crate::error::{AppError, AppResult};
use crate::models::order::PlaceOrderRequest;
use crate::store::{MemStore, StoreState};

/// Sum of `price × quantity` over the item snapshots.
pub fn subtotal(items: &[OrderItem]) -> AppResult<Decimal> {
    items.iter().try_fold(Decimal::ZERO, |acc, item| {
        item.line_total()
            .and_then(|line| acc.checked_add(line))
            .ok_or_else(total_out_of_range)
    })
}

/// Raised when a total, fee or discount does not fit in a `Decimal`.
pub(crate) fn total_out_of_range() -> AppError {
    AppError::invalid_field("items", "order total out of range")
}

/// Total requested quantity per product, in first-seen order. Repeated
/// lines for one product are summed so they cannot jointly oversell.
fn requested_quantities(items: &[OrderItem]) -> Vec<(i32, u32)> {
    let mut requested: Vec<(i32, u32)> = Vec::with_capacity(items.len());
    for item in items {
        match requested.iter_mut().find(|(id, _)| *id == item.product_id) {
            Some((_, quantity)) => *quantity = quantity.saturating_add(item.quantity),
            None => requested.push((item.product_id, item.quantity)),
        }
    }
    requested
}

/// Validate every line against current stock, then decrement each product
/// by its requested quantity. On error no product has been changed.
///
/// Must be called with the write guard held for the whole placement.
pub fn reserve_stock(state: &mut StoreState, items: &[OrderItem]) -> AppResult<()> {
    let requested = requested_quantities(items);

    for &(product_id, quantity) in &requested {
        let product = state
            .products
            .get(product_id)
            .ok_or(AppError::ProductNotFound(product_id))?;

        if product.stock < quantity {
            return Err(AppError::InsufficientStock {
                product_id,
                name: product.name.clone(),
                available: product.stock,
                requested: quantity,
            });
        }
    }

    for (product_id, quantity) in requested {
        if let Some(product) = state.products.get_mut(product_id) {
            product.stock -= quantity;
        }
    }

    Ok(())
}

/// Place a consumer order.
///
/// Fees fall back to the configured defaults and `expectedDelivery` to a
/// clock time `delivery_eta_minutes` from now. The stored order starts as
/// `pending`.
pub fn place_order(
    store: &MemStore,
    pricing: &PricingConfig,
    req: PlaceOrderRequest,
) -> AppResult<Order> {
    req.validate()?;

    let delivery_fee = req.delivery_fee.unwrap_or(pricing.delivery_fee);
    let platform_fee = req.platform_fee.unwrap_or(pricing.platform_fee);
    let total_amount = subtotal(&req.items)?
        .checked_add(delivery_fee)
        .and_then(|total| total.checked_add(platform_fee))
        .ok_or_else(total_out_of_range)?;
    let order_date = Utc::now();
    let expected_delivery = req.expected_delivery.unwrap_or_else(|| {
        (order_date + Duration::minutes(pricing.delivery_eta_minutes))
            .format("%H:%M")
            .to_string()
    });
    let user_id = req.user_id;

    let result: AppResult<Order> = store.write(|s| {
        reserve_stock(s, &req.items)?;

        Ok(s.orders.insert_with(|id| Order {
            id,
            user_id,
            items: req.items,
            total_amount,
            status: OrderStatus::Pending,
            address: req.address,
            payment_method: req.payment_method,
            delivery_fee,
            platform_fee,
            order_date,
            expected_delivery,
        }))
    });

    match &result {
        Ok(order) => info!(
            order_id = order.id,
            user_id,
            items = order.items.len(),
            total_amount = %order.total_amount,
            "Order placed"
        ),
        Err(e) => warn!(user_id, error = %e, "Order placement rejected"),
    }

    result
}

pub fn get_order(store: &MemStore, id: i32) -> AppResult<Order> {
    store.read(|s| s.orders.require(id).cloned())
}

pub fn list_user_orders(store: &MemStore, user_id: i32) -> Vec<Order> {
    store.read(|s| s.orders.list_where(|o| o.user_id == user_id))
}

pub fn update_order_status(store: &MemStore, id: i32, status: OrderStatus) -> AppResult<Order> {
    let order = store.write(|s| {
        s.orders.update(id, |o| {
            check_order_transition("order", o.status, status)?;
            o.status = status;
            Ok(())
        })
    })?;

    info!(order_id = id, status = %status, "Order status updated");
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const MILK: i32 = 1;
    const EGGS: i32 = 2;
    const BANANAS: i32 = 4;

    fn item(product_id: i32, quantity: u32, price: Decimal) -> OrderItem {
        OrderItem {
            product_id,
            quantity,
            price,
            name: format!("product-{}", product_id),
            image: "item.png".into(),
            unit_value: 1.0,
            unit_type: "pcs".into(),
        }
    }

    fn request(items: Vec<OrderItem>) -> PlaceOrderRequest {
        PlaceOrderRequest {
            user_id: 1,
            items,
            address: "12 MG Road, Pune - 411001".into(),
            payment_method: "cod".into(),
            delivery_fee: None,
            platform_fee: None,
            expected_delivery: None,
        }
    }

    fn stock(store: &MemStore, id: i32) -> u32 {
        store.read(|s| s.products.get(id).map(|p| p.stock).unwrap_or_default())
    }

    #[test]
    fn test_place_order_decrements_and_totals() {
        let store = MemStore::seeded();
        let pricing = PricingConfig::default();

        let order = place_order(&store, &pricing, request(vec![item(MILK, 5, dec!(45))])).unwrap();

        assert_eq!(stock(&store, MILK), 45);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total_amount, dec!(225) + dec!(30) + dec!(5));
        assert_eq!(order.delivery_fee, dec!(30));
        assert_eq!(order.platform_fee, dec!(5));
        assert_eq!(order.expected_delivery.len(), 5);
    }

    #[test]
    fn test_insufficient_stock_changes_nothing() {
        let store = MemStore::seeded();
        let pricing = PricingConfig::default();

        let err = place_order(
            &store,
            &pricing,
            request(vec![item(MILK, 2, dec!(45)), item(BANANAS, 3, dec!(70))]),
        )
        .unwrap_err();

        assert_eq!(
            err,
            AppError::InsufficientStock {
                product_id: BANANAS,
                name: "Fresh Bananas".into(),
                available: 2,
                requested: 3,
            }
        );
        assert_eq!(stock(&store, MILK), 50);
        assert_eq!(stock(&store, BANANAS), 2);
        assert_eq!(store.read(|s| s.orders.len()), 0);
    }

    #[test]
    fn test_missing_product_rolls_back_earlier_lines() {
        let store = MemStore::seeded();
        let pricing = PricingConfig::default();

        let err = place_order(
            &store,
            &pricing,
            request(vec![item(EGGS, 4, dec!(60)), item(999, 1, dec!(1))]),
        )
        .unwrap_err();

        assert_eq!(err, AppError::ProductNotFound(999));
        assert_eq!(stock(&store, EGGS), 40);
        assert_eq!(store.read(|s| s.orders.len()), 0);
    }

    #[test]
    fn test_repeated_lines_are_checked_together() {
        let store = MemStore::seeded();
        let pricing = PricingConfig::default();

        // 2 + 1 exceeds the 2 bananas in stock even though each line fits
        let err = place_order(
            &store,
            &pricing,
            request(vec![item(BANANAS, 2, dec!(70)), item(BANANAS, 1, dec!(70))]),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::InsufficientStock { requested: 3, .. }));
        assert_eq!(stock(&store, BANANAS), 2);

        place_order(
            &store,
            &pricing,
            request(vec![item(BANANAS, 1, dec!(70)), item(BANANAS, 1, dec!(70))]),
        )
        .unwrap();
        assert_eq!(stock(&store, BANANAS), 0);
    }

    #[test]
    fn test_item_price_is_a_snapshot() {
        let store = MemStore::seeded();
        let pricing = PricingConfig::default();

        // Client carted milk at an older price of 40
        let order = place_order(&store, &pricing, request(vec![item(MILK, 1, dec!(40))])).unwrap();
        assert_eq!(order.items[0].price, dec!(40));
        assert_eq!(order.total_amount, dec!(75));
    }

    #[test]
    fn test_explicit_fees_and_eta_are_kept() {
        let store = MemStore::seeded();
        let pricing = PricingConfig::default();

        let mut req = request(vec![item(EGGS, 1, dec!(60))]);
        req.delivery_fee = Some(dec!(0));
        req.platform_fee = Some(dec!(2.5));
        req.expected_delivery = Some("18:30".into());

        let order = place_order(&store, &pricing, req).unwrap();
        assert_eq!(order.total_amount, dec!(62.5));
        assert_eq!(order.expected_delivery, "18:30");
    }

    #[test]
    fn test_overflowing_total_is_rejected() {
        let store = MemStore::seeded();
        let pricing = PricingConfig::default();

        let err = place_order(
            &store,
            &pricing,
            request(vec![item(MILK, 4_000_000_000, Decimal::MAX)]),
        )
        .unwrap_err();
        assert_eq!(err, total_out_of_range());
        assert_eq!(stock(&store, MILK), 50);

        // Each line fits but the sum does not
        let err = place_order(
            &store,
            &pricing,
            request(vec![item(MILK, 1, Decimal::MAX), item(EGGS, 1, Decimal::MAX)]),
        )
        .unwrap_err();
        assert_eq!(err, total_out_of_range());
        assert_eq!(store.read(|s| s.orders.len()), 0);
    }

    #[test]
    fn test_status_walk_and_illegal_move() {
        let store = MemStore::seeded();
        let pricing = PricingConfig::default();
        let order = place_order(&store, &pricing, request(vec![item(EGGS, 1, dec!(60))])).unwrap();

        for next in [OrderStatus::Processing, OrderStatus::Shipped, OrderStatus::Delivered] {
            assert_eq!(update_order_status(&store, order.id, next).unwrap().status, next);
        }

        let err = update_order_status(&store, order.id, OrderStatus::Cancelled).unwrap_err();
        assert!(matches!(err, AppError::InvalidTransition { .. }));
        assert_eq!(get_order(&store, order.id).unwrap().status, OrderStatus::Delivered);

        assert!(matches!(
            update_order_status(&store, 77, OrderStatus::Processing),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_list_user_orders() {
        let store = MemStore::seeded();
        let pricing = PricingConfig::default();

        place_order(&store, &pricing, request(vec![item(EGGS, 1, dec!(60))])).unwrap();
        let mut other = request(vec![item(EGGS, 1, dec!(60))]);
        other.user_id = 2;
        place_order(&store, &pricing, other).unwrap();

        assert_eq!(list_user_orders(&store, 1).len(), 1);
        assert_eq!(list_user_orders(&store, 2).len(), 1);
        assert!(list_user_orders(&store, 3).is_empty());
    }
}
