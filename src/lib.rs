// src/lib.rs

use std::sync::Arc;

use config::AppConfig;
use store::MemStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MemStore>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(store: MemStore, config: AppConfig) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}

pub mod config;
pub mod entities;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
