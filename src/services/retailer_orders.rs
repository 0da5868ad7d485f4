//! Bulk orders for verified retailers.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};

use super::ordering::{reserve_stock, subtotal, total_out_of_range};
use super::status::check_order_transition;
use crate::config::PricingConfig;
use crate::entities::prelude::{OrderStatus, PaymentStatus, RetailerOrder, VerificationStatus};
use crate::error::{AppError, AppResult};
use crate::models::retailer_order::PlaceRetailerOrderRequest;
use crate::store::MemStore;

/// Discount applied to a bulk order: the explicit amount if given, else the
/// configured rate of the subtotal rounded to paise.
fn bulk_discount(
    pricing: &PricingConfig,
    requested: Option<Decimal>,
    subtotal: Decimal,
) -> AppResult<Decimal> {
    let discount = match requested {
        Some(discount) => discount,
        None => subtotal
            .checked_mul(pricing.bulk_discount_rate)
            .ok_or_else(total_out_of_range)?
            .round_dp(2),
    };
    if discount > subtotal {
        return Err(AppError::invalid_field(
            "bulkOrderDiscount",
            "Bulk order discount cannot exceed the order subtotal",
        ));
    }
    Ok(discount)
}

/// Place a bulk order.
///
/// Checks run in order: request shape, retailer existence, verification,
/// pricing (discount bounds, total range), then the same all-or-nothing
/// stock reservation consumer orders use.
pub fn place_retailer_order(
    store: &MemStore,
    pricing: &PricingConfig,
    req: PlaceRetailerOrderRequest,
) -> AppResult<RetailerOrder> {
    req.validate()?;

    let retailer_id = req.retailer_id;

    let result: AppResult<RetailerOrder> = store.write(|s| {
        let retailer = s
            .retailers
            .get(retailer_id)
            .ok_or_else(|| AppError::not_found("Retailer"))?;
        if retailer.verification_status != VerificationStatus::Verified {
            return Err(AppError::NotVerified(retailer.verification_status));
        }

        let subtotal = subtotal(&req.items)?;
        let discount = bulk_discount(pricing, req.bulk_order_discount, subtotal)?;
        // discount is within [0, subtotal], so only the fee can overflow
        let total_amount = (subtotal - discount)
            .checked_add(pricing.bulk_delivery_fee)
            .ok_or_else(total_out_of_range)?;

        reserve_stock(s, &req.items)?;

        Ok(s.retailer_orders.insert_with(|id| RetailerOrder {
            id,
            retailer_id,
            items: req.items,
            total_amount,
            status: OrderStatus::Pending,
            delivery_address: req.delivery_address,
            payment_method: req.payment_method,
            payment_status: PaymentStatus::Pending,
            notes: req.notes,
            order_date: Utc::now(),
            expected_delivery: req.expected_delivery,
            bulk_order_discount: discount,
        }))
    });

    match &result {
        Ok(order) => info!(
            retailer_order_id = order.id,
            retailer_id,
            items = order.items.len(),
            total_amount = %order.total_amount,
            bulk_order_discount = %order.bulk_order_discount,
            "Retailer order placed"
        ),
        Err(e) => warn!(retailer_id, error = %e, "Retailer order rejected"),
    }

    result
}

pub fn get_retailer_order(store: &MemStore, id: i32) -> AppResult<RetailerOrder> {
    store.read(|s| s.retailer_orders.require(id).cloned())
}

pub fn list_retailer_orders(store: &MemStore, retailer_id: i32) -> Vec<RetailerOrder> {
    store.read(|s| s.retailer_orders.list_where(|o| o.retailer_id == retailer_id))
}

pub fn update_retailer_order_status(
    store: &MemStore,
    id: i32,
    status: OrderStatus,
) -> AppResult<RetailerOrder> {
    let order = store.write(|s| {
        s.retailer_orders.update(id, |o| {
            check_order_transition("retailer order", o.status, status)?;
            o.status = status;
            Ok(())
        })
    })?;

    info!(retailer_order_id = id, status = %status, "Retailer order status updated");
    Ok(order)
}

/// Payment status is an unrestricted overwrite among its five values.
pub fn update_payment_status(
    store: &MemStore,
    id: i32,
    status: PaymentStatus,
) -> AppResult<RetailerOrder> {
    let order = store.write(|s| {
        s.retailer_orders.update(id, |o| {
            o.payment_status = status;
            Ok(())
        })
    })?;

    info!(retailer_order_id = id, payment_status = %status, "Retailer order payment status updated");
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VerificationPolicy;
    use crate::entities::prelude::{OrderItem, Retailer};
    use crate::services::retailers::set_verification_status;
    use rust_decimal_macros::dec;

    fn store_with_retailer(status: VerificationStatus) -> MemStore {
        let store = MemStore::seeded();
        store.write(|s| {
            s.retailers.insert_with(|id| Retailer {
                id,
                user_id: 1,
                business_name: "Sharma Traders".into(),
                business_type: "wholesale".into(),
                gst_number: None,
                pan_number: None,
                business_address: "Sector 5".into(),
                business_city: "Noida".into(),
                business_pincode: "201301".into(),
                business_phone: "9000000000".into(),
                verification_status: status,
                verification_documents: vec![],
                registration_date: Utc::now(),
            })
        });
        store
    }

    fn request(quantity: u32) -> PlaceRetailerOrderRequest {
        PlaceRetailerOrderRequest {
            retailer_id: 1,
            items: vec![OrderItem {
                product_id: 1,
                quantity,
                price: dec!(45),
                name: "Organic Milk".into(),
                image: "milk.png".into(),
                unit_value: 500.0,
                unit_type: "ml".into(),
            }],
            delivery_address: "Sector 5, Noida".into(),
            payment_method: "bank_transfer".into(),
            notes: Some("Deliver before 9am".into()),
            expected_delivery: None,
            bulk_order_discount: None,
        }
    }

    fn milk_stock(store: &MemStore) -> u32 {
        store.read(|s| s.products.get(1).map(|p| p.stock).unwrap_or_default())
    }

    #[test]
    fn test_unverified_retailers_are_forbidden() {
        let pricing = PricingConfig::default();
        for status in [VerificationStatus::Pending, VerificationStatus::Rejected] {
            let store = store_with_retailer(status);
            let err = place_retailer_order(&store, &pricing, request(10)).unwrap_err();

            assert_eq!(err, AppError::NotVerified(status));
            assert_eq!(milk_stock(&store), 50);
        }
    }

    #[test]
    fn test_verified_order_decrements_and_discounts() {
        let store = store_with_retailer(VerificationStatus::Pending);
        let pricing = PricingConfig::default();
        set_verification_status(&store, VerificationPolicy::default(), 1, VerificationStatus::Verified)
            .unwrap();

        let order = place_retailer_order(&store, &pricing, request(10)).unwrap();

        assert_eq!(milk_stock(&store), 40);
        assert_eq!(order.bulk_order_discount, dec!(22.50));
        assert_eq!(order.total_amount, dec!(450) - dec!(22.50) + dec!(100));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.payment_status, PaymentStatus::Pending);
    }

    #[test]
    fn test_explicit_discount_bounds() {
        let store = store_with_retailer(VerificationStatus::Verified);
        let pricing = PricingConfig::default();

        let mut req = request(2);
        req.bulk_order_discount = Some(dec!(0));
        let order = place_retailer_order(&store, &pricing, req).unwrap();
        assert_eq!(order.bulk_order_discount, dec!(0));

        let mut req = request(2);
        req.bulk_order_discount = Some(dec!(1000));
        assert!(matches!(
            place_retailer_order(&store, &pricing, req),
            Err(AppError::Validation { .. })
        ));
    }

    #[test]
    fn test_retailer_checks_precede_discount_bounds() {
        let pricing = PricingConfig::default();

        let mut req = request(2);
        req.bulk_order_discount = Some(dec!(1000));
        let err = place_retailer_order(&MemStore::seeded(), &pricing, req.clone()).unwrap_err();
        assert_eq!(err, AppError::NotFound("Retailer not found".into()));

        let store = store_with_retailer(VerificationStatus::Pending);
        let err = place_retailer_order(&store, &pricing, req).unwrap_err();
        assert_eq!(err, AppError::NotVerified(VerificationStatus::Pending));
    }

    #[test]
    fn test_overflowing_bulk_total_is_rejected() {
        let store = store_with_retailer(VerificationStatus::Verified);
        let mut req = request(2);
        req.items[0].price = Decimal::MAX;

        let err = place_retailer_order(&store, &PricingConfig::default(), req).unwrap_err();
        assert_eq!(err, total_out_of_range());
        assert_eq!(milk_stock(&store), 50);
        assert!(list_retailer_orders(&store, 1).is_empty());
    }

    #[test]
    fn test_missing_retailer() {
        let store = MemStore::seeded();
        let err = place_retailer_order(&store, &PricingConfig::default(), request(1)).unwrap_err();
        assert_eq!(err, AppError::NotFound("Retailer not found".into()));
    }

    #[test]
    fn test_insufficient_stock_for_bulk() {
        let store = store_with_retailer(VerificationStatus::Verified);
        let err = place_retailer_order(&store, &PricingConfig::default(), request(51)).unwrap_err();
        assert!(matches!(err, AppError::InsufficientStock { available: 50, requested: 51, .. }));
        assert_eq!(milk_stock(&store), 50);
    }

    #[test]
    fn test_payment_status_is_independent() {
        let store = store_with_retailer(VerificationStatus::Verified);
        let order = place_retailer_order(&store, &PricingConfig::default(), request(1)).unwrap();

        let paid = update_payment_status(&store, order.id, PaymentStatus::Paid).unwrap();
        assert_eq!(paid.payment_status, PaymentStatus::Paid);
        assert_eq!(paid.status, OrderStatus::Pending);

        let processing =
            update_retailer_order_status(&store, order.id, OrderStatus::Processing).unwrap();
        assert_eq!(processing.payment_status, PaymentStatus::Paid);

        assert!(update_retailer_order_status(&store, order.id, OrderStatus::Delivered).is_err());
        assert_eq!(list_retailer_orders(&store, 1).len(), 1);
    }
}
