//! Bookstore Catalog Server
//!
//! A REST JSON API managing authors and the books they own, with
//! create-or-replace and partial-update semantics over pluggable record
//! stores.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
