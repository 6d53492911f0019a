//! budgetd Server
//!
//! HTTP server for the personal budget tracker: categories, monthly budgets,
//! expenses and monthly summaries over a SQLite store.
//!
//! # Features
//!
//! - OpenAPI documentation with Swagger UI
//! - Prometheus metrics export
//! - Graceful shutdown handling
//! - Health check endpoints
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings
//! budgetd-server
//!
//! # Start with custom config
//! budgetd-server --config /path/to/config.toml
//!
//! # Start with environment overrides
//! BUDGETD__SERVER__PORT=8080 budgetd-server
//! ```

mod config;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use budgetd_api::{create_router, ApiConfig, AppState};
use budgetd_db::Database;

use crate::config::ServerConfig;

// =============================================================================
// CLI Arguments
// =============================================================================

/// budgetd - personal budget tracker backend
#[derive(Parser, Debug)]
#[command(name = "budgetd-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file (TOML, JSON, or YAML)
    #[arg(short, long, env = "BUDGETD_CONFIG")]
    config: Option<String>,

    /// Host to bind to
    #[arg(long, env = "BUDGETD_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "BUDGETD_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format (json, pretty)
    #[arg(long, env = "BUDGETD_LOG_FORMAT")]
    log_format: Option<String>,

    /// SQLite connection URL
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Reject budgets and expenses that reference unknown categories
    #[arg(long)]
    strict_category_refs: bool,
}

// =============================================================================
// Main Entry Point
// =============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let mut server_config = ServerConfig::load(args.config.as_deref())?;
    apply_args(&mut server_config, args);

    // Initialize logging
    init_logging(&server_config.logging)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting budgetd server"
    );

    // Validate configuration
    validate_config(&server_config)?;

    // Initialize database
    let db = init_database(&server_config).await?;

    // Create application state
    let state = Arc::new(
        AppState::new(db).with_strict_category_refs(server_config.api.strict_category_refs),
    );

    // Create router
    let api_config = ApiConfig::from(&server_config.api);
    let app = create_router(state, api_config);

    // Start metrics server if enabled
    if server_config.metrics.enabled {
        start_metrics_server(&server_config.metrics)?;
    }

    // Get bind address
    let addr = server_config.server.socket_addr()?;

    tracing::info!(
        host = %server_config.server.host,
        port = %server_config.server.port,
        "Server listening"
    );

    // Start server with graceful shutdown
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(server_config.server.shutdown_timeout()))
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// CLI flags override file and environment configuration
fn apply_args(config: &mut ServerConfig, args: Args) {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(db_url) = args.database_url {
        config.database.url = db_url;
    }
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }
    if let Some(format) = args.log_format {
        config.logging.format = format;
    }
    if args.strict_category_refs {
        config.api.strict_category_refs = true;
    }
}

// =============================================================================
// Initialization Functions
// =============================================================================

/// Initialize tracing/logging
fn init_logging(config: &config::LoggingConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))?;

    let subscriber = tracing_subscriber::registry().with(env_filter);

    match config.format.as_str() {
        "json" => {
            subscriber
                .with(fmt::layer().json().with_target(true))
                .try_init()?;
        }
        _ => {
            subscriber
                .with(fmt::layer().pretty().with_target(true))
                .try_init()?;
        }
    }

    Ok(())
}

/// Validate configuration
fn validate_config(config: &ServerConfig) -> anyhow::Result<()> {
    if !matches!(config.logging.format.as_str(), "json" | "pretty") {
        tracing::warn!(format = %config.logging.format, "Unknown log format, using pretty");
    }

    if config.database.min_connections > config.database.max_connections {
        anyhow::bail!(
            "database.min_connections ({}) exceeds database.max_connections ({})",
            config.database.min_connections,
            config.database.max_connections
        );
    }

    if config.metrics.enabled && config.metrics.port == config.server.port {
        anyhow::bail!("Metrics port {} collides with the server port", config.metrics.port);
    }

    if config.api.max_body_size == 0 {
        anyhow::bail!("api.max_body_size must be greater than zero");
    }

    Ok(())
}

/// Initialize database connection
async fn init_database(config: &ServerConfig) -> anyhow::Result<Arc<Database>> {
    tracing::info!("Connecting to database...");

    let db = Database::connect(&config.database_config()).await?;

    if config.database.run_migrations {
        db.migrate().await?;
    } else {
        tracing::warn!("Skipping migrations; the schema must already exist");
    }

    // Run health check
    let health = db.health_check().await?;
    if !health.healthy {
        anyhow::bail!("Database health check failed");
    }

    tracing::info!(
        database = %db.name(),
        latency_ms = health.latency_ms,
        "Database health check passed"
    );

    Ok(Arc::new(db))
}

/// Start Prometheus metrics server
fn start_metrics_server(config: &config::MetricsConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    tracing::info!(port = config.port, "Starting metrics server");

    // The exporter serves /metrics from a background task
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()?;

    Ok(())
}

// =============================================================================
// Graceful Shutdown
// =============================================================================

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    // Allow time for in-flight requests to complete
    tracing::info!(
        timeout_secs = timeout.as_secs(),
        "Waiting for in-flight requests to complete..."
    );

    tokio::time::sleep(timeout).await;
}

// =============================================================================
// Tests
// =============================================================================
