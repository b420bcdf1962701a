//! Resource handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get, post},
    Router,
};

use crate::{constants::uploads, middleware::auth::auth_middleware, state::AppState};

/// Resource routes; downloads are public, publishing is gated
pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(handler::list_resources))
        .route("/{id}", get(handler::get_resource));

    let protected = Router::new()
        .route("/", post(handler::upload_resource))
        .route("/{id}", delete(handler::delete_resource))
        .layer(DefaultBodyLimit::max(uploads::MAX_FILE_SIZE + 64 * 1024))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}
