use serde::{Deserialize, Serialize};

use super::common::FieldErrors;
use crate::error::AppResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: String,
    pub image: String,
    pub description: Option<String>,
}

impl CreateCategoryRequest {
    pub fn validate(&self) -> AppResult<()> {
        let mut errors = FieldErrors::new();
        errors.non_empty("name", &self.name);
        errors.non_empty("image", &self.image);
        errors.finish("Invalid category data")
    }
}
