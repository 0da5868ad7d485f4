use serde::{Deserialize, Serialize};

use super::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub description: Option<String>,
}

impl Record for Category {
    const ENTITY: &'static str = "Category";

    fn id(&self) -> i32 {
        self.id
    }
}
