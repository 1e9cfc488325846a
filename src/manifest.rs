use serde_json::{json, Map, Value};

use crate::config::Config;

pub const FRAME_VERSION: &str = "1";
pub const FRAME_TAGS: &[&str] = &["prediction", "crypto", "ethereum", "game", "defi"];

fn put(map: &mut Map<String, Value>, key: &str, value: &str) {
    if !value.is_empty() {
        map.insert(key.to_string(), Value::String(value.to_string()));
    }
}

fn put_list(map: &mut Map<String, Value>, key: &str, values: &[String]) {
    let kept: Vec<Value> = values
        .iter()
        .filter(|v| !v.is_empty())
        .map(|v| json!(v))
        .collect();
    if !kept.is_empty() {
        map.insert(key.to_string(), Value::Array(kept));
    }
}

/// The frame descriptor served to the hosting platform. Unset display
/// fields are omitted entirely rather than serialized as empty strings.
pub fn build_manifest(config: &Config) -> Value {
    let url = config.app_url.trim_end_matches('/');

    let mut frame = Map::new();
    put(&mut frame, "version", FRAME_VERSION);
    put(&mut frame, "name", &config.app_name);
    put(&mut frame, "subtitle", &config.app_subtitle);
    put(&mut frame, "description", &config.app_description);
    if !url.is_empty() {
        put_list(
            &mut frame,
            "screenshotUrls",
            &[format!("{url}/screenshot.png")],
        );
    }
    put(&mut frame, "iconUrl", &config.app_icon_url);
    put(&mut frame, "splashImageUrl", &config.app_splash_image_url);
    put(
        &mut frame,
        "splashBackgroundColor",
        &config.app_splash_background_color,
    );
    put(&mut frame, "homeUrl", url);
    if !url.is_empty() {
        put(&mut frame, "webhookUrl", &format!("{url}/api/webhook"));
    }
    put(&mut frame, "primaryCategory", &config.app_primary_category);
    put(&mut frame, "heroImageUrl", &config.app_hero_image_url);
    put(&mut frame, "tagline", &config.app_tagline);
    put(&mut frame, "ogTitle", &config.app_og_title);
    put(&mut frame, "ogDescription", &config.app_og_description);
    put(&mut frame, "ogImageUrl", &config.app_og_image_url);
    frame.insert("tags".to_string(), json!(FRAME_TAGS));
    frame.insert("noindex".to_string(), json!(false));

    let mut account = Map::new();
    put(&mut account, "header", &config.farcaster_header);
    put(&mut account, "payload", &config.farcaster_payload);
    put(&mut account, "signature", &config.farcaster_signature);

    let mut builder = Map::new();
    put_list(&mut builder, "allowedAddresses", &config.allowed_addresses);

    json!({
        "accountAssociation": account,
        "baseBuilder": builder,
        "frame": frame,
    })
}
