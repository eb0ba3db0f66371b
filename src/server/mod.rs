//! HTTP server exposing the deck and score stores as REST endpoints.

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod error;
pub mod routes;
pub mod state;

use crate::config::ServerConfig;
use routes::{list, list_of_scores, load, save, save_score};
use state::{AppState, SharedState};

/// Builds the route table over the given stores. Kept separate from
/// [`start_server`] so tests can drive handlers against fresh state.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/api/list", get(list))
        .route("/api/load", get(load))
        .route("/api/save", post(save))
        .route("/api/listOfScores", get(list_of_scores))
        .route("/api/saveScore", post(save_score))
        .with_state(state)
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = ServerConfig::load();
    let state = AppState::new();

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    let app = router(state).layer(cors);

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    info!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
