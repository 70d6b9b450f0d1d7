//! NearStop HTTP Server
//!
//! Main entry point for the HTTP server.

use std::{future::IntoFuture, sync::Arc, time::Duration};

use application::NearestStopService;
use infrastructure::{AppConfig, EnvSecretStore, GeocodingAdapter, TemplateEngine, TransitAdapter};
use presentation_http::{error::set_expose_internal_errors, routes, state::AppState};
use tokio::{net::TcpListener, signal, sync::oneshot};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first so the log format is known
    let (mut config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_tracing(config.server.json_logs());

    info!("🚏 NearStop v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(e) = load_error {
        warn!("Failed to load config, using defaults: {}", e);
    }

    if let Err(errors) = config.validate() {
        anyhow::bail!("Invalid configuration: {}", errors.join("; "));
    }

    // Credentials not set in config.toml or NEARSTOP_* come from MAPBOX_API_KEY / MBTA_API_KEY
    config.resolve_secrets(&EnvSecretStore::new()).await;

    info!(
        environment = %config.environment,
        host = %config.server.host,
        port = %config.server.port,
        "Configuration loaded"
    );

    set_expose_internal_errors(config.environment.expose_internal_errors());

    // Initialize adapters and the lookup pipeline
    let geocoder = GeocodingAdapter::new(&config.mapbox.to_client_config())
        .map_err(|e| anyhow::anyhow!("Failed to initialize geocoding: {e}"))?;
    let stop_locator = TransitAdapter::new(&config.mbta.to_client_config())
        .map_err(|e| anyhow::anyhow!("Failed to initialize transit: {e}"))?;
    let service = NearestStopService::new(Arc::new(geocoder), Arc::new(stop_locator));

    let templates = TemplateEngine::with_config(config.templates.clone())
        .map_err(|e| anyhow::anyhow!("Failed to load templates: {e}"))?;

    let state = AppState::new(Arc::new(service), templates);

    // Build router
    let app = routes::create_router(state);

    // Configure CORS layer
    let cors_layer = if config.server.allowed_origins.is_empty() {
        // Development mode: allow all origins
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    };

    // Add middleware (order matters: first added = innermost)
    let app = app
        .layer(RequestBodyLimitLayer::new(config.server.max_body_size_bytes))
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));
    let (signalled_tx, signalled_rx) = oneshot::channel();

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            info!("⏳ Waiting up to {:?} for connections to close...", shutdown_timeout);
            let _ = signalled_tx.send(());
        })
        .into_future();

    tokio::select! {
        result = server => result?,
        () = drain_deadline(signalled_rx, shutdown_timeout) => {
            warn!("Connections still open after {:?}, forcing shutdown", shutdown_timeout);
        }
    }

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Initialize the tracing subscriber with text or JSON output
fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "nearstop_server=debug,presentation_http=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }
}

/// Resolves `timeout` after the shutdown signal fired; never resolves otherwise
async fn drain_deadline(signalled: oneshot::Receiver<()>, timeout: Duration) {
    if signalled.await.is_ok() {
        tokio::time::sleep(timeout).await;
    } else {
        std::future::pending::<()>().await;
    }
}
