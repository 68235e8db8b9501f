use std::sync::Arc;

use axum::{Router, middleware};
use tower_http::trace::TraceLayer;

use crate::{
    middleware::{catch_panic_layer, json_error_middleware},
    state::AppState,
};

use super::api;

pub const API_PREFIX: &str = "/api";

pub fn router(state: Arc<AppState>) -> Router {
    Router::new().nest(API_PREFIX, api::router(state))
}

/// The API router with error normalisation, panic catching, and request tracing.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(router(state))
        .layer(middleware::from_fn(json_error_middleware))
        .layer(catch_panic_layer())
        .layer(TraceLayer::new_for_http())
}
