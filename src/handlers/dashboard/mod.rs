//! Dashboard resolution handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{middleware, routing::get, Router};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Dashboard routes
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/route", get(handler::resolve_route))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
