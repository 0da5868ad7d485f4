use serde::{Deserialize, Serialize};

use super::common::FieldErrors;
use crate::entities::prelude::{Retailer, VerificationDocument, VerificationStatus};
use crate::error::AppResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRetailerRequest {
    pub user_id: i32,
    pub business_name: String,
    pub business_type: String,
    pub gst_number: Option<String>,
    pub pan_number: Option<String>,
    pub business_address: String,
    pub business_city: String,
    pub business_pincode: String,
    pub business_phone: String,
    /// Documents submitted together with the registration
    #[serde(default)]
    pub verification_documents: Vec<VerificationDocument>,
}

impl RegisterRetailerRequest {
    pub fn validate(&self) -> AppResult<()> {
        let mut errors = FieldErrors::new();
        errors.non_empty("businessName", &self.business_name);
        errors.non_empty("businessType", &self.business_type);
        errors.non_empty("businessAddress", &self.business_address);
        errors.non_empty("businessCity", &self.business_city);
        errors.non_empty("businessPincode", &self.business_pincode);
        errors.non_empty("businessPhone", &self.business_phone);
        for doc in &self.verification_documents {
            validate_document(doc, &mut errors);
        }
        errors.finish("Invalid retailer data")
    }
}

/// Editable business profile fields. Ownership, verification state,
/// documents and registration date are not patchable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRetailerRequest {
    pub business_name: Option<String>,
    pub business_type: Option<String>,
    pub gst_number: Option<String>,
    pub pan_number: Option<String>,
    pub business_address: Option<String>,
    pub business_city: Option<String>,
    pub business_pincode: Option<String>,
    pub business_phone: Option<String>,
}

impl UpdateRetailerRequest {
    pub fn validate(&self) -> AppResult<()> {
        let mut errors = FieldErrors::new();
        let required = [
            ("businessName", &self.business_name),
            ("businessType", &self.business_type),
            ("businessAddress", &self.business_address),
            ("businessCity", &self.business_city),
            ("businessPincode", &self.business_pincode),
            ("businessPhone", &self.business_phone),
        ];
        for (field, value) in required {
            if let Some(value) = value {
                errors.non_empty(field, value);
            }
        }
        errors.finish("Invalid retailer data")
    }

    pub fn apply(self, retailer: &mut Retailer) {
        if let Some(v) = self.business_name {
            retailer.business_name = v;
        }
        if let Some(v) = self.business_type {
            retailer.business_type = v;
        }
        if self.gst_number.is_some() {
            retailer.gst_number = self.gst_number;
        }
        if self.pan_number.is_some() {
            retailer.pan_number = self.pan_number;
        }
        if let Some(v) = self.business_address {
            retailer.business_address = v;
        }
        if let Some(v) = self.business_city {
            retailer.business_city = v;
        }
        if let Some(v) = self.business_pincode {
            retailer.business_pincode = v;
        }
        if let Some(v) = self.business_phone {
            retailer.business_phone = v;
        }
    }
}

pub fn validate_document(doc: &VerificationDocument, errors: &mut FieldErrors) {
    errors.non_empty("documentName", &doc.document_name);
    errors.non_empty("documentUrl", &doc.document_url);
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationStatusRequest {
    pub status: VerificationStatus,
}
