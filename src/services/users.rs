//! Account registration, login and profile updates.

use tracing::{info, warn};

use crate::entities::prelude::{User, UserRole};
use crate::error::{AppError, AppResult};
use crate::models::user::{LoginRequest, RegisterUserRequest, UpdateUserRequest};
use crate::store::MemStore;

/// Create a customer account. Username and email are unique.
pub fn register_user(store: &MemStore, req: RegisterUserRequest) -> AppResult<User> {
    req.validate()?;

    let user = store.write(|s| {
        if s.users.find(|u| u.username == req.username).is_some() {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }
        if s.users.find(|u| u.email == req.email).is_some() {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        Ok(s.users.insert_with(|id| User {
            id,
            username: req.username,
            password: req.password,
            name: req.name,
            email: req.email,
            phone: req.phone,
            address: req.address,
            city: req.city,
            pincode: req.pincode,
            role: UserRole::Customer,
        }))
    })?;

    info!(user_id = user.id, username = %user.username, "User registered");
    Ok(user)
}

/// Plain credential comparison; the same error is returned for an unknown
/// username and a wrong password.
pub fn login(store: &MemStore, req: LoginRequest) -> AppResult<User> {
    let user = store.read(|s| s.users.find(|u| u.username == req.username).cloned());

    match user {
        Some(user) if user.password == req.password => {
            info!(user_id = user.id, "User logged in");
            Ok(user)
        }
        _ => {
            warn!(username = %req.username, "Failed login attempt");
            Err(AppError::Unauthorized("Invalid username or password".to_string()))
        }
    }
}

pub fn get_user(store: &MemStore, id: i32) -> AppResult<User> {
    store.read(|s| s.users.require(id).cloned())
}

pub fn update_user(store: &MemStore, id: i32, patch: UpdateUserRequest) -> AppResult<User> {
    patch.validate()?;

    let user = store.write(|s| {
        if let Some(email) = &patch.email {
            if s.users.find(|u| u.id != id && &u.email == email).is_some() {
                // Only meaningful if the target exists
                s.users.require(id)?;
                return Err(AppError::Conflict("Email already registered".to_string()));
            }
        }
        s.users.update(id, |u| {
            patch.apply(u);
            Ok(())
        })
    })?;

    info!(user_id = id, "User profile updated");
    Ok(user)
}
