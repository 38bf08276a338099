//! Axum router wiring.
//!
//! `/v1/fetch/*path` is the enforced forwarding surface; the policy
//! admin API and metrics sit beside it and are never forwarded.

use axum::routing::get;
use axum::Router;

use crate::{app_state::AppState, handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/fetch/*path", get(handlers::fetch_resource))
        .route(
            "/v1/policy/blocklist",
            get(handlers::get_blocklist).put(handlers::put_blocklist),
        )
        .route("/metrics", get(handlers::metrics))
        .with_state(state)
}
