//! labelgate gateway binary.
//!
//! - Enforced forwarding endpoint: /v1/fetch/*path
//! - Policy admin API: /v1/policy/blocklist (GET/PUT)
//! - Prometheus metrics: /metrics

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use labelgate_gateway::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_file("labelgate.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .gateway
        .listen
        .parse()
        .expect("gateway.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg).expect("app state init failed");
    let app = router::build_router(state);

    tracing::info!(%listen, "labelgate-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
