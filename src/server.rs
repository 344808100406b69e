//! HTTP surface: liveness probe and the translation endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Form, Json, Router,
};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::deepl::DeepLBackend;
use crate::google::GoogleBackend;
use crate::translation::{self, Backends, RelayError, TranslationRequest, TranslationResult};

/// Build both backend clients once; they share one connection pool.
pub fn build_backends(config: &Config) -> Backends {
    let client = reqwest::Client::new();

    let google = GoogleBackend::new(
        client.clone(),
        config.google_api_key.clone(),
        config.google_api_url.clone(),
    );
    let deepl = DeepLBackend::new(
        client,
        config.deepl_api_key.clone(),
        config.deepl_api_url.clone(),
    );

    Backends::new(Arc::new(google), Arc::new(deepl))
}

/// Build the application router around the shared backends.
pub fn create_router(backends: Backends) -> Router {
    Router::new()
        .route("/check", get(check))
        .route("/translate/", post(translate))
        .route("/translate", post(translate))
        .with_state(backends)
        .layer(TraceLayer::new_for_http())
}

/// `GET /check` - liveness probe.
pub async fn check() -> Json<Value> {
    Json(json!({ "status": "Ok" }))
}

/// `POST /translate/` - translate a form-encoded HTML fragment.
pub async fn translate(
    State(backends): State<Backends>,
    Form(request): Form<TranslationRequest>,
) -> Result<Json<Vec<TranslationResult>>, RelayError> {
    translation::relay(&backends, &request).await.map(Json)
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
