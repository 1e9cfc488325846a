use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which way the user thinks the price goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Parse a raw string into a direction. Accepts "up"/"down", any case.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Up => write!(f, "UP"),
            Direction::Down => write!(f, "DOWN"),
        }
    }
}

/// Lifecycle phase of a betting round.
/// Anything we don't recognize maps to `Unknown` and renders unstyled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundStatus {
    Expired,
    Live,
    Next,
    Later,
    Unknown,
}

impl RoundStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "expired" => RoundStatus::Expired,
            "live" => RoundStatus::Live,
            "next" => RoundStatus::Next,
            "later" => RoundStatus::Later,
            _ => RoundStatus::Unknown,
        }
    }

    /// Badge text for the card header. Empty for unrecognized statuses.
    pub fn label(self) -> &'static str {
        match self {
            RoundStatus::Live => "LIVE",
            RoundStatus::Next => "Next",
            RoundStatus::Later => "Later",
            RoundStatus::Expired => "Expired",
            RoundStatus::Unknown => "",
        }
    }
}

/// One discrete betting period for the up/down market
#[derive(Debug, Clone, Serialize)]
pub struct Round {
    pub id: String,
    pub status: RoundStatus,
    pub current_price: Decimal,
    pub locked_price: Option<Decimal>,
    pub prize_pool: Decimal,
    pub up_payout: Decimal,
    pub down_payout: Decimal,
    /// Seconds remaining in the round. Set only while `live`.
    pub countdown: Option<u64>,
    /// Seconds until the entry window opens. Set only while `later`.
    pub entry_starts: Option<u64>,
}

/// A user's recorded direction-and-stake intent for one round.
/// `round_id` is a lookup key, not an owning reference — at most one
/// choice exists per round id (last call wins).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserChoice {
    pub round_id: String,
    pub direction: Direction,
    pub amount: Decimal,
}

/// Last-known state of the external price source
#[derive(Debug, Clone, Serialize)]
pub struct PriceSnapshot {
    pub price: Decimal,
    pub change_24h: Decimal,
    pub loading: bool,
    pub error: Option<String>,
}

impl PriceSnapshot {
    /// State before the first response arrives: the hard-coded fallback
    /// price, zero change, loading, no error.
    pub fn initial(fallback_price: Decimal) -> Self {
        Self {
            price: fallback_price,
            change_24h: Decimal::ZERO,
            loading: true,
            error: None,
        }
    }

    /// Replace price and change wholesale, clear any stored error.
    pub fn on_success(&mut self, price: Decimal, change_24h: Decimal) {
        self.price = price;
        self.change_24h = change_24h;
        self.loading = false;
        self.error = None;
    }

    /// Keep the last good price and change, record the error description.
    pub fn on_failure(&mut self, error: impl std::fmt::Display) {
        self.loading = false;
        self.error = Some(error.to_string());
    }
}

// ── display formatting ──────────────────────────────────────────────────────

pub fn format_price(price: Decimal) -> String {
    format!("${:.4}", price)
}

pub fn format_change(change: Decimal) -> String {
    if change >= Decimal::ZERO {
        format!("+{:.2}%", change)
    } else {
        format!("{:.2}%", change)
    }
}

pub fn format_payout(multiplier: Decimal) -> String {
    format!("{:.2}x Payout", multiplier)
}

pub fn format_pool(pool: Decimal) -> String {
    format!("{:.4} ETH", pool)
}

/// MM:SS, zero-padded
pub fn format_countdown(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
