//! Admin management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Admin routes
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Account approval workflow
        .route("/users", get(handler::list_all_users))
        .route("/users/{id}/approve", post(handler::approve_user))
        .route("/users/{id}/reject", post(handler::reject_user))
        .route("/users/{id}/suspend", post(handler::suspend_user))
        .route("/users/{id}/reinstate", post(handler::reinstate_user))
        .route("/users/{id}/role", put(handler::update_user_role))
        // Platform management
        .route("/stats", get(handler::get_platform_stats))
        // Employment portal moderation
        .route("/offers/{id}/close", post(handler::moderate_close_offer))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
