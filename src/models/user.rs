use serde::{Deserialize, Serialize};

use super::common::FieldErrors;
use crate::entities::prelude::{User, UserRole};
use crate::error::AppResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<String>,
}

impl RegisterUserRequest {
    pub fn validate(&self) -> AppResult<()> {
        let mut errors = FieldErrors::new();
        errors.non_empty("username", &self.username);
        errors.non_empty("password", &self.password);
        errors.non_empty("name", &self.name);
        errors.non_empty("email", &self.email);
        errors.check(self.email.contains('@'), "email", "must be an email address");
        errors.finish("Invalid user data")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Profile fields a user may change. Username and role are fixed here; the
/// role only changes through retailer registration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub password: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<String>,
}

impl UpdateUserRequest {
    pub fn validate(&self) -> AppResult<()> {
        let mut errors = FieldErrors::new();
        if let Some(password) = &self.password {
            errors.non_empty("password", password);
        }
        if let Some(name) = &self.name {
            errors.non_empty("name", name);
        }
        if let Some(email) = &self.email {
            errors.check(email.contains('@'), "email", "must be an email address");
        }
        errors.finish("Invalid user data")
    }

    /// Shallow merge: only fields present in the patch overwrite the record.
    pub fn apply(self, user: &mut User) {
        if let Some(password) = self.password {
            user.password = password;
        }
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if self.phone.is_some() {
            user.phone = self.phone;
        }
        if self.address.is_some() {
            user.address = self.address;
        }
        if self.city.is_some() {
            user.city = self.city;
        }
        if self.pincode.is_some() {
            user.pincode = self.pincode;
        }
    }
}

/// A user as returned by the API, without the password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<String>,
    pub role: UserRole,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            email: user.email,
            phone: user.phone,
            address: user.address,
            city: user.city,
            pincode: user.pincode,
            role: user.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserResponse,
}
