use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

use crate::carousel::CarouselLayout;

#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub http_port: u16,
    pub log_level: String,

    pub pair_label: String,
    pub price_api_url: String,
    pub price_asset_id: String,
    pub price_poll_secs: u64,
    /// Shown until the first successful poll, and kept on failure.
    pub fallback_price: Decimal,
    /// Fixed stake recorded on every bet, in ETH.
    pub stake_eth: Decimal,
    pub carousel_layout: CarouselLayout,

    // frame manifest metadata
    pub app_url: String,
    pub app_name: String,
    pub app_subtitle: String,
    pub app_description: String,
    pub app_icon_url: String,
    pub app_splash_image_url: String,
    pub app_splash_background_color: String,
    pub app_primary_category: String,
    pub app_hero_image_url: String,
    pub app_tagline: String,
    pub app_og_title: String,
    pub app_og_description: String,
    pub app_og_image_url: String,
    pub farcaster_header: String,
    pub farcaster_payload: String,
    pub farcaster_signature: String,
    pub allowed_addresses: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            http_port: env_or("HTTP_PORT", "3000").parse()?,
            log_level: env_or("LOG_LEVEL", "info"),

            pair_label: env_or("PAIR_LABEL", "ETH/USD"),
            price_api_url: env_or(
                "PRICE_API_URL",
                "https://api.coingecko.com/api/v3/simple/price",
            ),
            price_asset_id: env_or("PRICE_ASSET_ID", "ethereum"),
            price_poll_secs: env_or("PRICE_POLL_SECS", "30").parse()?,
            fallback_price: decimal_env("FALLBACK_PRICE", "3856.5453")?,
            stake_eth: decimal_env("STAKE_ETH", "0.001")?,
            carousel_layout: CarouselLayout::parse(&env_or("CAROUSEL_LAYOUT", "horizontal")),

            app_url: env_or("APP_URL", ""),
            app_name: env_or("APP_NAME", "ETH Updown"),
            app_subtitle: env_or("APP_SUBTITLE", ""),
            app_description: env_or("APP_DESCRIPTION", ""),
            app_icon_url: env_or("APP_ICON_URL", ""),
            app_splash_image_url: env_or("APP_SPLASH_IMAGE_URL", ""),
            app_splash_background_color: env_or("APP_SPLASH_BACKGROUND_COLOR", ""),
            app_primary_category: env_or("APP_PRIMARY_CATEGORY", ""),
            app_hero_image_url: env_or("APP_HERO_IMAGE_URL", ""),
            app_tagline: env_or("APP_TAGLINE", ""),
            app_og_title: env_or("APP_OG_TITLE", ""),
            app_og_description: env_or("APP_OG_DESCRIPTION", ""),
            app_og_image_url: env_or("APP_OG_IMAGE_URL", ""),
            farcaster_header: env_or("FARCASTER_HEADER", ""),
            farcaster_payload: env_or("FARCASTER_PAYLOAD", ""),
            farcaster_signature: env_or("FARCASTER_SIGNATURE", ""),
            allowed_addresses: csv_env(
                "ALLOWED_ADDRESSES",
                "0xA60B225D55B60A1A30DA8Db294C154eaeb63A96A",
            ),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn decimal_env(key: &str, default: &str) -> Result<Decimal> {
    let raw = env_or(key, default);
    Decimal::from_str(&raw).with_context(|| format!("invalid decimal for {key}: {raw}"))
}

fn csv_env(key: &str, default: &str) -> Vec<String> {
    env_or(key, default)
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
