use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::card::{CardView, HeaderView};
use crate::carousel::{CarouselLayout, SlideDirection};
use crate::manifest;
use crate::state::AppState;
use crate::types::Direction;
use crate::web;

type S = Arc<AppState>;

pub fn build_router(state: S) -> Router {
    Router::new()
        .route("/", get(serve_ui))
        .route("/.well-known/farcaster.json", get(get_manifest))
        .route("/api/status", get(get_status))
        .route("/api/rounds", get(get_rounds))
        .route("/api/events", get(get_events))
        .route("/api/select", post(post_select))
        .route("/api/advance", post(post_advance))
        .route("/api/bet", post(post_bet))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ── UI ──────────────────────────────────────────────────────────────────────

async fn serve_ui() -> axum::response::Html<&'static str> {
    axum::response::Html(web::INDEX_HTML)
}

// ── Manifest ────────────────────────────────────────────────────────────────

async fn get_manifest(State(state): State<S>) -> Json<serde_json::Value> {
    let config = state.config.read().unwrap();
    Json(manifest::build_manifest(&config))
}

// ── Status ──────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct StatusResponse {
    header: HeaderView,
    current_index: usize,
    round_count: usize,
    layout: CarouselLayout,
    stake: Decimal,
    loading: bool,
    price_error: Option<String>,
}

async fn get_status(State(state): State<S>) -> Json<StatusResponse> {
    let config = state.config.read().unwrap();
    let carousel = state.carousel.lock().unwrap();
    let snapshot = state.price.read().unwrap().clone();

    Json(StatusResponse {
        header: HeaderView::build(&config.pair_label, &snapshot, &carousel.stats()),
        current_index: carousel.current_index(),
        round_count: carousel.len(),
        layout: config.carousel_layout,
        stake: carousel.stake(),
        loading: snapshot.loading,
        price_error: snapshot.error,
    })
}

// ── Rounds ──────────────────────────────────────────────────────────────────

async fn get_rounds(State(state): State<S>) -> Json<Vec<CardView>> {
    let carousel = state.carousel.lock().unwrap();
    let live_price = state.price.read().unwrap().price;
    let current = carousel.current_index();

    let views = carousel
        .rounds()
        .iter()
        .enumerate()
        .map(|(i, round)| {
            CardView::build(
                round,
                live_price,
                carousel.remaining_secs(round),
                carousel.user_choice(&round.id),
                i == current,
            )
        })
        .collect();
    Json(views)
}

// ── Events ──────────────────────────────────────────────────────────────────

async fn get_events(State(state): State<S>) -> Json<Vec<crate::state::EventEntry>> {
    let events = state.events.lock().unwrap();
    Json(events.iter().cloned().collect())
}

// ── Navigation ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SelectRequest {
    index: i64,
}

async fn post_select(
    State(state): State<S>,
    Json(body): Json<SelectRequest>,
) -> Json<serde_json::Value> {
    let mut carousel = state.carousel.lock().unwrap();
    carousel.select_index(body.index);
    Json(serde_json::json!({"ok": true, "index": carousel.current_index()}))
}

#[derive(Deserialize)]
struct AdvanceRequest {
    direction: String,
}

async fn post_advance(
    State(state): State<S>,
    Json(body): Json<AdvanceRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    let direction = SlideDirection::parse(&body.direction)
        .ok_or_else(|| (StatusCode::BAD_REQUEST, format!("unknown direction: {}", body.direction)))?;

    let mut carousel = state.carousel.lock().unwrap();
    carousel.advance(direction);
    Ok(Json(serde_json::json!({"ok": true, "index": carousel.current_index()})))
}

// ── Bets ────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct BetRequest {
    round_id: String,
    direction: String,
}

async fn post_bet(
    State(state): State<S>,
    Json(body): Json<BetRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    let direction = Direction::parse(&body.direction)
        .ok_or_else(|| (StatusCode::BAD_REQUEST, format!("unknown direction: {}", body.direction)))?;

    let choice = {
        let mut carousel = state.carousel.lock().unwrap();
        carousel.place_bet(&body.round_id, direction)
    };

    tracing::info!(round = %choice.round_id, direction = %choice.direction, amount = %choice.amount, "bet recorded");
    state.push_event(
        "bet",
        &format!("{} on round {} ({} ETH)", choice.direction, choice.round_id, choice.amount),
    );

    Ok(Json(serde_json::json!({"ok": true, "choice": choice})))
}
