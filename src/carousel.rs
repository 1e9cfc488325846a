use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;
use crate::types::{Direction, Round, RoundStatus, UserChoice};

/// Relative navigation over the round list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideDirection {
    Forward,
    Backward,
}

impl SlideDirection {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "forward" => Some(SlideDirection::Forward),
            "backward" => Some(SlideDirection::Backward),
            _ => None,
        }
    }
}

/// Axis of the card track in the UI. One parameterized page replaces the
/// two near-identical component variants of the original layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarouselLayout {
    Horizontal,
    Vertical,
}

impl CarouselLayout {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "vertical" => CarouselLayout::Vertical,
            _ => CarouselLayout::Horizontal,
        }
    }
}

/// Header aggregation over pools and recorded choices
#[derive(Debug, Clone, Serialize)]
pub struct PoolStats {
    pub up_count: usize,
    pub down_count: usize,
    pub up_pool: Decimal,
    pub down_pool: Decimal,
    pub total_pool: Decimal,
}

/// Ordered round list, focal index, and the user's recorded choices.
///
/// Every operation is total: indices are clamped or wrapped rather than
/// rejected, and a bet on any round id is unconditionally accepted.
pub struct Carousel {
    rounds: Vec<Round>,
    current: usize,
    choices: Vec<UserChoice>,
    stake: Decimal,
    /// Remaining seconds per live round, keyed by round id. Seeded lazily
    /// from the round's configured countdown, so a changed round identity
    /// restarts its clock.
    remaining: HashMap<String, u64>,
}

impl Carousel {
    /// Starts focused on the first `live` round, falling back to index 0.
    pub fn new(rounds: Vec<Round>, stake: Decimal) -> Self {
        let current = rounds
            .iter()
            .position(|r| r.status == RoundStatus::Live)
            .unwrap_or(0);
        Self {
            rounds,
            current,
            choices: Vec::new(),
            stake,
            remaining: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn stake(&self) -> Decimal {
        self.stake
    }

    /// Direct jump: clamps into `[0, len-1]`. Never fails.
    pub fn select_index(&mut self, index: i64) {
        if self.rounds.is_empty() {
            self.current = 0;
            return;
        }
        let max = (self.rounds.len() - 1) as i64;
        self.current = index.clamp(0, max) as usize;
    }

    /// Relative move: wraps at both boundaries. Never fails.
    pub fn advance(&mut self, direction: SlideDirection) {
        let len = self.rounds.len();
        if len == 0 {
            return;
        }
        self.current = match direction {
            SlideDirection::Forward => (self.current + 1) % len,
            SlideDirection::Backward => (self.current + len - 1) % len,
        };
    }

    /// Record a choice at the fixed stake. A prior choice for the same
    /// round is replaced; the round id is not validated against the list.
    pub fn place_bet(&mut self, round_id: &str, direction: Direction) -> UserChoice {
        let choice = UserChoice {
            round_id: round_id.to_string(),
            direction,
            amount: self.stake,
        };
        self.choices.retain(|c| c.round_id != round_id);
        self.choices.push(choice.clone());
        choice
    }

    pub fn user_choice(&self, round_id: &str) -> Option<&UserChoice> {
        self.choices.iter().find(|c| c.round_id == round_id)
    }

    pub fn choices(&self) -> &[UserChoice] {
        &self.choices
    }

    /// One-second tick for every live round's clock, floored at zero.
    pub fn tick(&mut self) {
        self.remaining.retain(|id, _| {
            self.rounds
                .iter()
                .any(|r| r.id == *id && r.status == RoundStatus::Live)
        });
        for round in &self.rounds {
            if round.status != RoundStatus::Live {
                continue;
            }
            let left = self
                .remaining
                .entry(round.id.clone())
                .or_insert_with(|| round.countdown.unwrap_or(0));
            *left = left.saturating_sub(1);
        }
    }

    /// Seconds left on a round's clock. Before the first tick this is the
    /// configured countdown, so the full time shows immediately.
    pub fn remaining_secs(&self, round: &Round) -> u64 {
        self.remaining
            .get(&round.id)
            .copied()
            .unwrap_or_else(|| round.countdown.unwrap_or(0))
    }

    /// Pool totals for the header. The up/down split is the original's
    /// fixed 60/40 estimate — display only, nothing settles against it.
    pub fn stats(&self) -> PoolStats {
        let total_pool: Decimal = self.rounds.iter().map(|r| r.prize_pool).sum();
        PoolStats {
            up_count: self
                .choices
                .iter()
                .filter(|c| c.direction == Direction::Up)
                .count(),
            down_count: self
                .choices
                .iter()
                .filter(|c| c.direction == Direction::Down)
                .count(),
            up_pool: total_pool * dec!(0.6),
            down_pool: total_pool * dec!(0.4),
            total_pool,
        }
    }
}

/// Drives the live-round countdowns once per second until cancelled.
/// The immediate first interval tick is skipped so cards show their full
/// countdown before the clock starts.
pub async fn run_ticker(app: Arc<AppState>, cancel: CancellationToken) {
    let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));
    interval.tick().await;
    loop {
        tokio::select! {
            _ = interval.tick() => {
                app.carousel.lock().unwrap().tick();
            }
            _ = cancel.cancelled() => {
                tracing::debug!("countdown ticker stopped");
                break;
            }
        }
    }
}
