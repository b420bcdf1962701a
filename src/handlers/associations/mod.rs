//! Association management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Association routes; reads are public, writes are gated
pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(handler::list_associations))
        .route("/{id}", get(handler::get_association));

    let protected = Router::new()
        .route("/", post(handler::create_association))
        .route("/{id}", put(handler::update_association))
        .route("/{id}", delete(handler::delete_association))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}
