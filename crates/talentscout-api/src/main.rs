//! TalentScout REST API entry point.
//!
//! Binary name: `tscout`
//!
//! Parses CLI arguments, wires the screening engine against the Gemini
//! backend, then starts the REST API server.

mod cli;
mod http;
mod state;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use talentscout_core::chat::engine::ScreeningConfig;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,talentscout=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    match cli.command {
        Commands::Serve {
            port,
            host,
            model,
            temperature,
        } => {
            let config = ScreeningConfig {
                model,
                temperature,
                ..ScreeningConfig::default()
            };
            let state = AppState::init(config)?;

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            info!(%addr, "TalentScout API listening");
            println!("TalentScout API listening on http://{addr}");
            println!("Press Ctrl+C to stop");

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\nServer stopped.");
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
