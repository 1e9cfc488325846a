mod card;
mod carousel;
mod config;
mod manifest;
mod price_feed;
mod rounds;
mod server;
mod state;
mod types;
mod web;

#[cfg(test)]
mod tests;

use anyhow::Result;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.parse().unwrap_or_default()),
        )
        .with_target(false)
        .init();

    let port = config.http_port;

    tracing::info!(
        pair = %config.pair_label,
        asset = %config.price_asset_id,
        layout = ?config.carousel_layout,
        port,
        "updown-frame starting"
    );

    let app_state = state::AppState::new(config);

    // Both timers hang off one token so the serving scope owns them.
    let cancel = CancellationToken::new();
    tokio::spawn(price_feed::run(app_state.clone(), cancel.child_token()));
    tokio::spawn(carousel::run_ticker(app_state.clone(), cancel.child_token()));

    let router = server::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!("HTTP server listening on 0.0.0.0:{port}");
    tracing::info!("open http://localhost:{port} in your browser");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal(cancel))
        .await?;

    Ok(())
}

async fn shutdown_signal(cancel: CancellationToken) {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received — stopping background tasks");
    cancel.cancel();
}
