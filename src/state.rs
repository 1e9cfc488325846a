use std::collections::VecDeque;
use std::sync::{Arc, Mutex, RwLock};

use serde::Serialize;

use crate::carousel::Carousel;
use crate::config::Config;
use crate::rounds;
use crate::types::PriceSnapshot;

#[derive(Debug, Clone, Serialize)]
pub struct EventEntry {
    pub ts: String,
    pub kind: String,
    pub detail: String,
}

/// Shared state for the whole app. The carousel and price snapshot are
/// mutated only from discrete events (timer tick, poll completion, user
/// command) and read synchronously by the render handlers.
pub struct AppState {
    pub config: RwLock<Config>,
    pub carousel: Mutex<Carousel>,
    pub price: RwLock<PriceSnapshot>,
    pub events: Mutex<VecDeque<EventEntry>>,
}

const MAX_EVENTS: usize = 200;

impl AppState {
    pub fn new(config: Config) -> Arc<Self> {
        let carousel = Carousel::new(
            rounds::sample_rounds(config.fallback_price),
            config.stake_eth,
        );
        let price = PriceSnapshot::initial(config.fallback_price);
        Arc::new(Self {
            config: RwLock::new(config),
            carousel: Mutex::new(carousel),
            price: RwLock::new(price),
            events: Mutex::new(VecDeque::with_capacity(MAX_EVENTS)),
        })
    }

    pub fn push_event(&self, kind: &str, detail: &str) {
        let entry = EventEntry {
            ts: chrono::Utc::now().format("%H:%M:%S").to_string(),
            kind: kind.to_string(),
            detail: detail.to_string(),
        };
        let mut events = self.events.lock().unwrap();
        if events.len() >= MAX_EVENTS {
            events.pop_front();
        }
        events.push_back(entry);
    }
}
