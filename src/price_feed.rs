use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::config::Config;
use crate::state::AppState;

/// The one modeled failure class. Every variant degrades to stale-data
/// mode at the snapshot; nothing here ever surfaces as a hard fault.
#[derive(Debug, thiserror::Error)]
pub enum PriceFetchError {
    #[error("invalid price endpoint: {0}")]
    BadEndpoint(#[from] url::ParseError),
    #[error("price request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("price endpoint returned {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed price response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("price response has no entry for {0}")]
    MissingAsset(String),
    #[error("unrepresentable price value: {0}")]
    BadNumber(f64),
}

#[derive(Debug, Deserialize)]
struct AssetQuote {
    usd: f64,
    #[serde(default)]
    usd_24h_change: f64,
}

/// Decode a simple-price payload for one asset:
/// `{"<asset>": {"usd": 4000.12, "usd_24h_change": -1.5}}`
pub fn parse_quote(body: &str, asset_id: &str) -> Result<(Decimal, Decimal), PriceFetchError> {
    let quotes: HashMap<String, AssetQuote> = serde_json::from_str(body)?;
    let quote = quotes
        .get(asset_id)
        .ok_or_else(|| PriceFetchError::MissingAsset(asset_id.to_string()))?;
    let price = decimal_from_f64(quote.usd).ok_or(PriceFetchError::BadNumber(quote.usd))?;
    let change = decimal_from_f64(quote.usd_24h_change)
        .ok_or(PriceFetchError::BadNumber(quote.usd_24h_change))?;
    Ok((price, change))
}

fn decimal_from_f64(v: f64) -> Option<Decimal> {
    Decimal::from_str(&v.to_string()).ok()
}

/// One GET against the price source: asset id, USD quote, 24h change flag.
pub async fn fetch_quote(
    client: &reqwest::Client,
    config: &Config,
) -> Result<(Decimal, Decimal), PriceFetchError> {
    let url = Url::parse_with_params(
        &config.price_api_url,
        &[
            ("ids", config.price_asset_id.as_str()),
            ("vs_currencies", "usd"),
            ("include_24hr_change", "true"),
        ],
    )?;

    let resp = client.get(url).send().await?;
    if !resp.status().is_success() {
        return Err(PriceFetchError::Status(resp.status()));
    }
    let body = resp.text().await?;
    parse_quote(&body, &config.price_asset_id)
}

/// Polls the price source until cancelled. The first fetch fires
/// immediately; each subsequent tick waits for the previous fetch to
/// finish, so requests never overlap. Cancellation drops any in-flight
/// request before its response can touch the snapshot.
pub async fn run(app: Arc<AppState>, cancel: CancellationToken) {
    let (poll_secs, endpoint) = {
        let config = app.config.read().unwrap();
        (config.price_poll_secs, config.price_api_url.clone())
    };
    let client = reqwest::Client::new();

    tracing::info!(endpoint, every_secs = poll_secs, "price poller started");

    let mut interval = tokio::time::interval(Duration::from_secs(poll_secs));
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                app.price.write().unwrap().loading = true;
                let config = app.config.read().unwrap().clone();
                // Race the fetch against cancellation so a late response is
                // never applied after teardown.
                let result = tokio::select! {
                    result = fetch_quote(&client, &config) => result,
                    _ = cancel.cancelled() => {
                        tracing::debug!("price poller stopped mid-fetch");
                        return;
                    }
                };
                match result {
                    Ok((price, change)) => {
                        app.price.write().unwrap().on_success(price, change);
                        tracing::debug!(price = %price, change_24h = %change, "price refreshed");
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "price fetch failed — keeping last quote");
                        app.price.write().unwrap().on_failure(&e);
                        app.push_event("warn", &format!("price fetch failed: {e}"));
                    }
                }
            }
            _ = cancel.cancelled() => {
                tracing::debug!("price poller stopped");
                break;
            }
        }
    }
}
