mod health;
mod impose;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Body limit sits above the configured upload cap; the handler does
    // the exact check so oversize uploads get a 413, not a generic 400.
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes + 1024 * 1024);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/impose", post(impose::impose_handler))
        .route("/page-count", post(impose::page_count_handler))
        .layer(body_limit)
        .with_state(state)
}
