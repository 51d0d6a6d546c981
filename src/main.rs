//! info-server
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌──────────────────────────────────────────────────────────┐
//!                  │                      INFO SERVER                          │
//!                  │                                                           │
//!  Client Request  │  ┌──────────┐   ┌────────────────────────┐   ┌────────┐  │
//!  ────────────────┼─▶│  http    │──▶│ middleware chain       │──▶│routing │  │
//!                  │  │ server   │   │ logging → recovery →   │   │ router │  │
//!                  │  │ (axum)   │   │ counting (counter++)   │   └───┬────┘  │
//!                  │  └──────────┘   └────────────────────────┘       │       │
//!                  │                                                   ▼       │
//!  Client Response │                                            ┌──────────┐  │
//!  ◀───────────────┼────────────────────────────────────────────│ handlers │  │
//!                  │                                            └──────────┘  │
//!                  │  ┌─────────┐ ┌───────────────┐ ┌───────────┐             │
//!                  │  │ config  │ │ observability │ │ lifecycle │             │
//!                  │  └─────────┘ └───────────────┘ └───────────┘             │
//!                  └──────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use info_server::config::{parse_config, validate_config, ConfigError, ServerConfig};
use info_server::lifecycle::{shutdown_signal, Shutdown};
use info_server::observability::logging;
use info_server::HttpServer;

#[derive(Debug, Parser)]
#[command(name = "info-server")]
#[command(about = "Minimal HTTP info and diagnostics service", version)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, e.g. 127.0.0.1:8080.
    #[arg(short, long)]
    bind: Option<String>,

    /// Listen port; replaces the port of the listen address.
    #[arg(short, long)]
    port: Option<u16>,
}

/// File (or defaults), then CLI overrides, then one validation pass.
fn resolve_config(cli: Cli) -> Result<ServerConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => parse_config(path)?,
        None => ServerConfig::default(),
    };
    config.apply_overrides(cli.bind, cli.port);
    validate_config(&config)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(Cli::parse())?;

    logging::init(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "info-server starting"
    );
    tracing::info!(
        bind_address = %config.listener.bind_address,
        max_body_bytes = config.limits.max_body_bytes,
        log_format = ?config.observability.log_format,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    let mut server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    tokio::select! {
        _ = shutdown_signal() => {
            shutdown.trigger();
            server_task.await??;
        }
        // Server exited on its own (accept loop error).
        result = &mut server_task => result??,
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
