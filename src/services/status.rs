//! Transition checks for order and retailer verification status.

use crate::config::VerificationPolicy;
use crate::entities::prelude::{OrderStatus, VerificationStatus};
use crate::error::{AppError, AppResult};

/// Reject any order status move that is not in the fulfilment table,
/// including writing the current status again.
pub fn check_order_transition(
    entity: &'static str,
    from: OrderStatus,
    to: OrderStatus,
) -> AppResult<()> {
    if from.can_transition_to(to) {
        Ok(())
    } else {
        Err(AppError::InvalidTransition {
            entity,
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}

pub fn check_verification_transition(
    policy: VerificationPolicy,
    from: VerificationStatus,
    to: VerificationStatus,
) -> AppResult<()> {
    let resubmission = from == VerificationStatus::Rejected && to == VerificationStatus::Pending;
    let allowed = from.next_states().contains(&to) && (!resubmission || policy.allow_resubmission);

    if allowed {
        Ok(())
    } else {
        Err(AppError::InvalidTransition {
            entity: "retailer verification",
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}
