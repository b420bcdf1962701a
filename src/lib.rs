//! FedPortal - Sports Federation & Youth Employment Platform
//!
//! This library provides the backend for a combined sports-federation and
//! youth-employment management platform.
//!
//! # Features
//!
//! - JWT authentication with refresh-token rotation
//! - Role-based dashboards with centralized role-to-route resolution
//! - Account approval workflow (pending/active/suspended/rejected)
//! - CRUD for associations, athletes, coaches, judges, courses
//! - Youth employment job board with company ownership rules
//! - Direct messaging and downloadable resources
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs
//! - **Access**: role/status enums and the role router

pub mod access;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
