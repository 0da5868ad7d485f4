use serde::{Deserialize, Serialize};

use super::Record;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Customer,
    Retailer,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Customer => write!(f, "customer"),
            UserRole::Retailer => write!(f, "retailer"),
        }
    }
}

/// A registered account. The password is kept exactly as submitted and is
/// never part of any response model.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<String>,
    pub role: UserRole,
}

impl Record for User {
    const ENTITY: &'static str = "User";

    fn id(&self) -> i32 {
        self.id
    }
}
