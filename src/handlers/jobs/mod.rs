//! Job offer handlers

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

/// Job offer routes; the public board is open, publishing is gated
pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(handler::list_offers))
        .route("/{id}", get(handler::get_offer));

    let protected = Router::new()
        .route("/", post(handler::create_offer))
        .route("/mine", get(handler::list_my_offers))
        .route("/{id}", put(handler::update_offer))
        .route("/{id}", delete(handler::delete_offer))
        .route("/{id}/close", post(handler::close_offer))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}
