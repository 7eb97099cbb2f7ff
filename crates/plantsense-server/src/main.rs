//! plantsense server
//!
//! Focus: ingestion & query over one in-memory reading log
//! - POST /submit   : JSON body carrying `send_val`
//! - GET  /data     : full log as JSON, insertion order
//! - GET  /         : latest-reading page
//! - GET  /forecast : polynomial trend prediction over numeric readings

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use plantsense_server::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_file("plantsense.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, "plantsense-server starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
