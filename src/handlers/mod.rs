//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod admin;
pub mod associations;
pub mod athletes;
pub mod auth;
pub mod coaches;
pub mod courses;
pub mod dashboard;
pub mod health;
pub mod jobs;
pub mod judges;
pub mod messages;
pub mod resources;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/auth", auth::routes(state.clone()))
        .nest("/dashboard", dashboard::routes(state.clone()))
        .nest("/users", users::routes(state.clone()))
        .nest("/associations", associations::routes(state.clone()))
        .nest("/athletes", athletes::routes(state.clone()))
        .nest("/coaches", coaches::routes(state.clone()))
        .nest("/judges", judges::routes(state.clone()))
        .nest("/courses", courses::routes(state.clone()))
        .nest("/jobs", jobs::routes(state.clone()))
        .nest("/messages", messages::routes(state.clone()))
        .nest("/resources", resources::routes(state.clone()))
        .nest("/admin", admin::routes(state))
}
