//! Snippetbox server entry point.

use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use snippetbox::adapters::http::{app_router, AppState, RouterOptions, SessionKeyError};
use snippetbox::adapters::postgres::{
    connect_pool, run_migrations, PostgresSnippetRepository, PostgresUserRepository,
};
use snippetbox::config::{AppConfig, ConfigError, ServerConfig, ValidationError};
use snippetbox::ports::{SnippetRepository, UserRepository};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("Database unavailable: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    SessionKey(#[from] SessionKeyError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);

    if let Err(e) = config.validate() {
        error!(error = %e, "invalid configuration");
        return Err(e.into());
    }

    // Each repository owns its own pool.
    let snippet_pool = connect_pool(&config.database).await?;
    let user_pool = connect_pool(&config.database).await?;

    if config.database.run_migrations {
        run_migrations(&snippet_pool).await?;
    }

    let snippets = Arc::new(PostgresSnippetRepository::new(snippet_pool));
    let users = Arc::new(PostgresUserRepository::new(user_pool));

    let state = AppState::new(snippets.clone(), users.clone());
    let options = RouterOptions::from_config(&config)?;
    if options.static_dir.is_none() {
        warn!(dir = %config.server.static_dir.display(), "static directory not found, /static disabled");
    }

    let addr = config
        .server
        .socket_addr()
        .map_err(|_| ValidationError::InvalidHost(config.server.host.clone()))?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "starting server");

    axum::serve(listener, app_router(state, options))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    snippets.close().await;
    users.close().await;
    info!("server stopped");
    Ok(())
}

/// JSON logs in production, human-readable otherwise. `RUST_LOG` wins over
/// the configured filter.
fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let result = if server.is_production() {
        fmt().with_env_filter(filter).json().try_init()
    } else {
        fmt().with_env_filter(filter).try_init()
    };

    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to listen for SIGTERM");
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

    info!("shutdown signal received");
}
