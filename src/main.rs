use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use inventory_api::{app, AppConfig, AppState};

#[derive(Parser)]
#[command(name = "inventory-api")]
#[command(about = "Inventory REST API server")]
#[command(version)]
struct Args {
    #[arg(long, help = "Bind host (overrides INVENTORY_API_HOST)")]
    host: Option<String>,

    #[arg(long, help = "Bind port (overrides INVENTORY_API_PORT / PORT)")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_KEY, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("inventory_api=info,tower_http=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = AppConfig::from_env().context("invalid configuration")?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    tracing::info!(
        "Starting Inventory API in {:?} mode (token delivery: {:?}, token lifetime: {} min)",
        config.environment,
        config.security.token_delivery,
        config.jwt.expiration_minutes
    );

    let bind_addr = config.server.bind_address();
    let state = AppState::new(config).context("failed to initialize application state")?;

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Inventory API listening on http://{}", bind_addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Inventory API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
