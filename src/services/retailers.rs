//! Retailer registration, profile edits and verification.

use chrono::Utc;
use tracing::info;

use super::status::check_verification_transition;
use crate::config::VerificationPolicy;
use crate::entities::prelude::{Retailer, UserRole, VerificationDocument, VerificationStatus};
use crate::error::{AppError, AppResult};
use crate::models::common::FieldErrors;
use crate::models::retailer::{validate_document, RegisterRetailerRequest, UpdateRetailerRequest};
use crate::store::MemStore;

/// Create the retailer profile for an existing user and promote the user to
/// the retailer role. Both writes happen under one guard, so either both are
/// visible or neither is.
pub fn register_retailer(store: &MemStore, req: RegisterRetailerRequest) -> AppResult<Retailer> {
    req.validate()?;

    let user_id = req.user_id;
    let registration_date = Utc::now();
    let documents: Vec<VerificationDocument> = req
        .verification_documents
        .into_iter()
        .map(|doc| stamp_upload(doc, registration_date))
        .collect();

    let retailer = store.write(|s| {
        if s.users.get(user_id).is_none() {
            return Err(AppError::not_found("User"));
        }
        if s.retailers.find(|r| r.user_id == user_id).is_some() {
            return Err(AppError::Conflict(
                "Retailer account already exists for this user".to_string(),
            ));
        }

        let retailer = s.retailers.insert_with(|id| Retailer {
            id,
            user_id,
            business_name: req.business_name,
            business_type: req.business_type,
            gst_number: req.gst_number,
            pan_number: req.pan_number,
            business_address: req.business_address,
            business_city: req.business_city,
            business_pincode: req.business_pincode,
            business_phone: req.business_phone,
            verification_status: VerificationStatus::Pending,
            verification_documents: documents,
            registration_date,
        });

        if let Some(user) = s.users.get_mut(user_id) {
            user.role = UserRole::Retailer;
        }

        Ok(retailer)
    })?;

    info!(
        retailer_id = retailer.id,
        user_id,
        business_name = %retailer.business_name,
        "Retailer registered"
    );
    Ok(retailer)
}

fn stamp_upload(
    mut doc: VerificationDocument,
    now: chrono::DateTime<Utc>,
) -> VerificationDocument {
    doc.upload_date.get_or_insert(now);
    doc
}

pub fn get_retailer(store: &MemStore, id: i32) -> AppResult<Retailer> {
    store.read(|s| s.retailers.require(id).cloned())
}

pub fn get_retailer_by_user(store: &MemStore, user_id: i32) -> AppResult<Retailer> {
    store
        .read(|s| s.retailers.find(|r| r.user_id == user_id).cloned())
        .ok_or_else(|| AppError::NotFound("Retailer account not found for this user".to_string()))
}

pub fn update_retailer(
    store: &MemStore,
    id: i32,
    patch: UpdateRetailerRequest,
) -> AppResult<Retailer> {
    patch.validate()?;

    let retailer = store.write(|s| {
        s.retailers.update(id, |r| {
            patch.apply(r);
            Ok(())
        })
    })?;

    info!(retailer_id = id, "Retailer profile updated");
    Ok(retailer)
}

/// Append a verification document. The retailer's own status is unchanged.
pub fn add_verification_document(
    store: &MemStore,
    id: i32,
    doc: VerificationDocument,
) -> AppResult<Retailer> {
    let mut errors = FieldErrors::new();
    validate_document(&doc, &mut errors);
    errors.finish("Invalid document data")?;

    let doc = stamp_upload(doc, Utc::now());
    let document_type = doc.document_type;

    let retailer = store.write(|s| {
        s.retailers.update(id, |r| {
            r.verification_documents.push(doc);
            Ok(())
        })
    })?;

    info!(
        retailer_id = id,
        document_type = ?document_type,
        documents = retailer.verification_documents.len(),
        "Verification document added"
    );
    Ok(retailer)
}

pub fn set_verification_status(
    store: &MemStore,
    policy: VerificationPolicy,
    id: i32,
    status: VerificationStatus,
) -> AppResult<Retailer> {
    let retailer = store.write(|s| {
        s.retailers.update(id, |r| {
            check_verification_transition(policy, r.verification_status, status)?;
            r.verification_status = status;
            Ok(())
        })
    })?;

    info!(retailer_id = id, status = %status, "Retailer verification status updated");
    Ok(retailer)
}

pub fn list_by_status(store: &MemStore, status: VerificationStatus) -> Vec<Retailer> {
    store.read(|s| s.retailers.list_where(|r| r.verification_status == status))
}
