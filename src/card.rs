use rust_decimal::Decimal;
use serde::Serialize;

use crate::carousel::PoolStats;
use crate::types::{
    format_change, format_countdown, format_payout, format_pool, format_price, Direction,
    PriceSnapshot, Round, RoundStatus, UserChoice,
};

/// The user's recorded choice, shaped for display
#[derive(Debug, Clone, Serialize)]
pub struct ChoiceView {
    pub direction: Direction,
    pub amount: String,
}

/// Everything the UI needs to paint one round card. Built fresh on every
/// poll; the live price is injected here, never stored on the round.
#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    pub id: String,
    pub status: RoundStatus,
    pub status_label: &'static str,
    pub price_label: &'static str,
    pub price: String,
    /// Secondary "Locked:" line, shown only on live rounds.
    pub locked: Option<String>,
    /// MM:SS clock. Ticking for live rounds, static for later rounds.
    pub countdown: Option<String>,
    pub prize_pool: String,
    pub up_payout: String,
    pub down_payout: String,
    pub can_bet: bool,
    pub choice: Option<ChoiceView>,
    pub is_center: bool,
}

impl CardView {
    pub fn build(
        round: &Round,
        live_price: Decimal,
        remaining_secs: u64,
        choice: Option<&UserChoice>,
        is_center: bool,
    ) -> Self {
        // Headline price by status. An expired round with no locked price
        // falls through to the plain current-price branch.
        let (price_label, price, locked) = match (round.status, round.locked_price) {
            (RoundStatus::Expired, Some(locked)) => ("Closed Price", format_price(locked), None),
            (RoundStatus::Live, Some(locked)) => (
                "Last Price",
                format_price(live_price),
                Some(format!("Locked: {}", format_price(locked))),
            ),
            _ => ("Current Price", format_price(live_price), None),
        };

        let countdown = match round.status {
            RoundStatus::Live => Some(format_countdown(remaining_secs)),
            RoundStatus::Later => round.entry_starts.map(format_countdown),
            _ => None,
        };

        Self {
            id: round.id.clone(),
            status: round.status,
            status_label: round.status.label(),
            price_label,
            price,
            locked,
            countdown,
            prize_pool: format_pool(round.prize_pool),
            up_payout: format_payout(round.up_payout),
            down_payout: format_payout(round.down_payout),
            can_bet: round.status == RoundStatus::Next && choice.is_none(),
            choice: choice.map(|c| ChoiceView {
                direction: c.direction,
                amount: format!("{} ETH", c.amount),
            }),
            is_center,
        }
    }
}

/// Pair header above the card track: live price, 24h change, pool totals
#[derive(Debug, Clone, Serialize)]
pub struct HeaderView {
    pub pair: String,
    pub price_label: String,
    /// Signed percent change. Absent while the first fetch is in flight.
    pub change_label: Option<String>,
    pub change_positive: bool,
    pub up_count: usize,
    pub down_count: usize,
    pub up_pool: String,
    pub down_pool: String,
    pub total_pool: String,
}

impl HeaderView {
    pub fn build(pair: &str, snapshot: &PriceSnapshot, stats: &PoolStats) -> Self {
        Self {
            pair: pair.to_string(),
            price_label: if snapshot.loading {
                "Loading...".to_string()
            } else {
                format_price(snapshot.price)
            },
            change_label: if snapshot.loading {
                None
            } else {
                Some(format_change(snapshot.change_24h))
            },
            change_positive: snapshot.change_24h >= Decimal::ZERO,
            up_count: stats.up_count,
            down_count: stats.down_count,
            up_pool: format_pool(stats.up_pool),
            down_pool: format_pool(stats.down_pool),
            total_pool: format_pool(stats.total_pool),
        }
    }
}
