use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

use super::{alarms, user_logins};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(alarms::router(state.clone()))
        .merge(user_logins::router(state))
}
