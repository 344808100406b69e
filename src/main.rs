use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use translate_relay::{config, server};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Load configuration from environment
    let config = config::Config::from_env()?;

    init_logging(config.log_file.as_deref())?;

    info!("===== Starting translation relay =====");
    if config.google_api_key.is_none() {
        info!("GOOGLE_API_KEY not set, google requests will fail");
    }
    if config.deepl_api_key.is_none() {
        info!("DEEPL_API_KEY not set, deepl requests will fail");
    }

    // Backends are built once and shared by every request
    let backends = server::build_backends(&config);
    let app = server::create_router(backends);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await
        .context("Server error")?;

    info!("Translation relay stopped");
    Ok(())
}

/// Log to stdout and, when configured, append plain-text lines to a file.
fn init_logging(log_file: Option<&str>) -> Result<()> {
    let filter = EnvFilter::from_default_env().add_directive("translate_relay=info".parse()?);

    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path))?;
            Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    Ok(())
}
