use anyhow::Context;
use thumbnails_server::{config::Config, AppState};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Checked before binding so no request is ever served without a key.
    let config = Config::from_env().context("failed to load configuration")?;
    info!(?config, "Starting thumbnails server");

    let state = AppState::new(&config)?;

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!("Listening on {address}");

    thumbnails_server::run(listener, state).await?;
    Ok(())
}
