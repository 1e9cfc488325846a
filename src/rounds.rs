use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{Round, RoundStatus};

/// Countdown configured on the live sample round, in seconds.
pub const LIVE_COUNTDOWN_SECS: u64 = 219;

/// Entry-start offset on the trailing "later" sample round, in seconds.
pub const ENTRY_STARTS_SECS: u64 = 359;

/// The fixed demo round set, built once from a base price. Locked prices
/// are small offsets from the base, frozen at construction; the display
/// price is injected from the live feed at render time and the literal
/// `current_price` here only covers the gap before the first poll lands.
pub fn sample_rounds(base_price: Decimal) -> Vec<Round> {
    vec![
        Round {
            id: "410431".to_string(),
            status: RoundStatus::Expired,
            current_price: base_price,
            locked_price: Some(base_price - dec!(0.3278)),
            prize_pool: dec!(15.906),
            up_payout: dec!(1.94),
            down_payout: dec!(2.06),
            countdown: None,
            entry_starts: None,
        },
        Round {
            id: "410432".to_string(),
            status: RoundStatus::Expired,
            current_price: base_price,
            locked_price: Some(base_price + dec!(0.3025)),
            prize_pool: dec!(14.895),
            up_payout: dec!(1.58),
            down_payout: dec!(2.79),
            countdown: None,
            entry_starts: None,
        },
        Round {
            id: "410433".to_string(),
            status: RoundStatus::Live,
            current_price: base_price,
            locked_price: Some(base_price - dec!(0.0071)),
            prize_pool: dec!(19.024),
            up_payout: dec!(1.87),
            down_payout: dec!(2.15),
            countdown: Some(LIVE_COUNTDOWN_SECS),
            entry_starts: None,
        },
        Round {
            id: "410434".to_string(),
            status: RoundStatus::Next,
            current_price: base_price,
            locked_price: None,
            prize_pool: dec!(0.0001),
            up_payout: dec!(2.1),
            down_payout: dec!(1.9),
            countdown: None,
            entry_starts: None,
        },
        Round {
            id: "410435".to_string(),
            status: RoundStatus::Later,
            current_price: base_price,
            locked_price: None,
            prize_pool: Decimal::ZERO,
            up_payout: dec!(2.0),
            down_payout: dec!(2.0),
            countdown: None,
            entry_starts: Some(ENTRY_STARTS_SECS),
        },
    ]
}
