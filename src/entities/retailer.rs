use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

/// Trust state of a retailer. Only `Verified` retailers may place bulk orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
}

impl VerificationStatus {
    /// One-step moves. `Rejected -> Pending` is additionally gated by the
    /// resubmission policy in [`crate::services::status`].
    pub fn next_states(self) -> &'static [VerificationStatus] {
        match self {
            VerificationStatus::Pending => {
                &[VerificationStatus::Verified, VerificationStatus::Rejected]
            }
            VerificationStatus::Verified => &[VerificationStatus::Rejected],
            VerificationStatus::Rejected => &[VerificationStatus::Pending],
        }
    }
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerificationStatus::Pending => write!(f, "pending"),
            VerificationStatus::Verified => write!(f, "verified"),
            VerificationStatus::Rejected => write!(f, "rejected"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    GstCertificate,
    PanCard,
    BusinessLicense,
    OwnerId,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationDocument {
    pub document_type: DocumentType,
    pub document_name: String,
    pub document_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_date: Option<DateTime<Utc>>,
    /// Per-document review state, independent of the retailer's status
    #[serde(default)]
    pub verification_status: VerificationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

/// Business profile owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Retailer {
    pub id: i32,
    pub user_id: i32,
    pub business_name: String,
    pub business_type: String,
    pub gst_number: Option<String>,
    pub pan_number: Option<String>,
    pub business_address: String,
    pub business_city: String,
    pub business_pincode: String,
    pub business_phone: String,
    pub verification_status: VerificationStatus,
    /// Append-only
    pub verification_documents: Vec<VerificationDocument>,
    pub registration_date: DateTime<Utc>,
}

impl Record for Retailer {
    const ENTITY: &'static str = "Retailer";

    fn id(&self) -> i32 {
        self.id
    }
}
