/// Tests for the status-driven card render rules and display formatting.
use crate::card::{CardView, HeaderView};
use crate::carousel::Carousel;
use crate::rounds::sample_rounds;
use crate::types::{
    format_change, format_countdown, format_payout, format_pool, format_price, Direction,
    PriceSnapshot, Round, RoundStatus, UserChoice,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn round_with_status(status: RoundStatus, locked: Option<Decimal>) -> Round {
    Round {
        id: "410440".to_string(),
        status,
        current_price: dec!(4000),
        locked_price: locked,
        prize_pool: dec!(1.5),
        up_payout: dec!(2.0),
        down_payout: dec!(2.0),
        countdown: None,
        entry_starts: None,
    }
}

fn choice(direction: Direction) -> UserChoice {
    UserChoice {
        round_id: "410440".to_string(),
        direction,
        amount: dec!(0.001),
    }
}

// ── expired ───────────────────────────────────────────────────────────────────

#[test]
fn expired_card_headlines_the_locked_price() {
    let rounds = sample_rounds(dec!(4000));
    let view = CardView::build(&rounds[0], dec!(4000.12), 0, None, true);
    assert_eq!(view.price_label, "Closed Price");
    assert_eq!(view.price, "$3999.6722"); // 4000 - 0.3278
    assert!(view.locked.is_none(), "locked price IS the headline");
    assert!(view.countdown.is_none());
    assert!(!view.can_bet);
}

#[test]
fn expired_card_without_locked_price_falls_back_to_current() {
    let round = round_with_status(RoundStatus::Expired, None);
    let view = CardView::build(&round, dec!(4000.12), 0, None, true);
    assert_eq!(view.price_label, "Current Price");
    assert_eq!(view.price, "$4000.1200");
}

// ── live ──────────────────────────────────────────────────────────────────────

#[test]
fn live_card_shows_last_price_with_locked_secondary_line() {
    let rounds = sample_rounds(dec!(4000));
    let view = CardView::build(&rounds[2], dec!(4000.12), 219, None, true);
    assert_eq!(view.price_label, "Last Price");
    assert_eq!(view.price, "$4000.1200");
    assert_eq!(view.locked.as_deref(), Some("Locked: $3999.9929")); // 4000 - 0.0071
    assert_eq!(view.countdown.as_deref(), Some("03:39"));
    assert!(!view.can_bet);
}

#[test]
fn live_countdown_decrements_through_the_card_view() {
    let mut carousel = Carousel::new(sample_rounds(dec!(4000)), dec!(0.001));
    let before = {
        let live = &carousel.rounds()[2];
        CardView::build(live, dec!(4000.12), carousel.remaining_secs(live), None, true)
    };
    assert_eq!(before.countdown.as_deref(), Some("03:39"));

    carousel.tick();
    let live = carousel.rounds()[2].clone();
    let after = CardView::build(&live, dec!(4000.12), carousel.remaining_secs(&live), None, true);
    assert_eq!(after.countdown.as_deref(), Some("03:38"));
}

// ── next ──────────────────────────────────────────────────────────────────────

#[test]
fn next_card_enables_bets_when_no_choice_exists() {
    let rounds = sample_rounds(dec!(4000));
    let view = CardView::build(&rounds[3], dec!(4000.12), 0, None, true);
    assert_eq!(view.price_label, "Current Price");
    assert!(view.countdown.is_none());
    assert!(view.can_bet);
}

#[test]
fn next_card_disables_bets_once_a_choice_exists() {
    let rounds = sample_rounds(dec!(4000));
    let picked = choice(Direction::Up);
    let view = CardView::build(&rounds[3], dec!(4000.12), 0, Some(&picked), true);
    assert!(!view.can_bet);
    let shown = view.choice.unwrap();
    assert_eq!(shown.direction, Direction::Up);
    assert_eq!(shown.amount, "0.001 ETH");
}

// ── later ─────────────────────────────────────────────────────────────────────

#[test]
fn later_card_shows_a_static_entry_countdown() {
    let mut carousel = Carousel::new(sample_rounds(dec!(4000)), dec!(0.001));
    carousel.tick();
    carousel.tick();
    carousel.tick();

    let later = carousel.rounds()[4].clone();
    let view = CardView::build(&later, dec!(4000.12), carousel.remaining_secs(&later), None, false);
    assert_eq!(view.countdown.as_deref(), Some("05:59")); // 359s, untouched by ticks
    assert!(!view.can_bet);
}

#[test]
fn later_card_without_entry_offset_shows_no_countdown() {
    let round = round_with_status(RoundStatus::Later, None);
    let view = CardView::build(&round, dec!(4000.12), 0, None, true);
    assert!(view.countdown.is_none());
}

// ── unknown status ────────────────────────────────────────────────────────────

#[test]
fn unrecognized_status_renders_as_an_unstyled_default() {
    assert_eq!(RoundStatus::parse("settling"), RoundStatus::Unknown);
    let round = round_with_status(RoundStatus::Unknown, None);
    let view = CardView::build(&round, dec!(4000.12), 0, None, true);
    assert_eq!(view.status_label, "");
    assert_eq!(view.price_label, "Current Price");
    assert!(!view.can_bet);
    assert!(view.countdown.is_none());
}

// ── formatting ────────────────────────────────────────────────────────────────

#[test]
fn prices_format_with_four_decimals() {
    assert_eq!(format_price(dec!(4000.12)), "$4000.1200");
    assert_eq!(format_price(dec!(3856.5453)), "$3856.5453");
}

#[test]
fn change_formats_signed_with_two_decimals() {
    assert_eq!(format_change(dec!(-1.5)), "-1.50%");
    assert_eq!(format_change(dec!(2.34)), "+2.34%");
    assert_eq!(format_change(Decimal::ZERO), "+0.00%");
}

#[test]
fn countdown_formats_as_zero_padded_minutes_and_seconds() {
    assert_eq!(format_countdown(219), "03:39");
    assert_eq!(format_countdown(0), "00:00");
    assert_eq!(format_countdown(59), "00:59");
    assert_eq!(format_countdown(600), "10:00");
}

#[test]
fn payout_and_pool_formatting() {
    assert_eq!(format_payout(dec!(1.94)), "1.94x Payout");
    assert_eq!(format_payout(dec!(2.1)), "2.10x Payout");
    assert_eq!(format_pool(dec!(15.906)), "15.9060 ETH");
}

// ── header ────────────────────────────────────────────────────────────────────

#[test]
fn header_hides_the_change_while_loading() {
    let carousel = Carousel::new(sample_rounds(dec!(3856.5453)), dec!(0.001));
    let snapshot = PriceSnapshot::initial(dec!(3856.5453));
    let header = HeaderView::build("ETH/USD", &snapshot, &carousel.stats());
    assert_eq!(header.price_label, "Loading...");
    assert!(header.change_label.is_none());
}

#[test]
fn header_shows_price_and_change_after_a_successful_poll() {
    let carousel = Carousel::new(sample_rounds(dec!(3856.5453)), dec!(0.001));
    let mut snapshot = PriceSnapshot::initial(dec!(3856.5453));
    snapshot.on_success(dec!(4000.12), dec!(-1.5));

    let header = HeaderView::build("ETH/USD", &snapshot, &carousel.stats());
    assert_eq!(header.pair, "ETH/USD");
    assert_eq!(header.price_label, "$4000.1200");
    assert_eq!(header.change_label.as_deref(), Some("-1.50%"));
    assert!(!header.change_positive);
}
