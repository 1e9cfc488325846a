/// Tests for carousel navigation, bet bookkeeping, countdown ticks, and
/// the pool statistics header.
use crate::carousel::{Carousel, SlideDirection};
use crate::rounds::{sample_rounds, LIVE_COUNTDOWN_SECS};
use crate::types::{Direction, RoundStatus};
use rust_decimal_macros::dec;

fn sample_carousel() -> Carousel {
    Carousel::new(sample_rounds(dec!(3856.5453)), dec!(0.001))
}

// ── sample data ───────────────────────────────────────────────────────────────

#[test]
fn sample_data_has_five_rounds_in_display_order() {
    let carousel = sample_carousel();
    assert_eq!(carousel.len(), 5);
    let statuses: Vec<RoundStatus> = carousel.rounds().iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        vec![
            RoundStatus::Expired,
            RoundStatus::Expired,
            RoundStatus::Live,
            RoundStatus::Next,
            RoundStatus::Later,
        ]
    );
}

#[test]
fn sample_data_keeps_exactly_one_live_round() {
    let carousel = sample_carousel();
    let live = carousel
        .rounds()
        .iter()
        .filter(|r| r.status == RoundStatus::Live)
        .count();
    assert_eq!(live, 1);
}

#[test]
fn carousel_starts_focused_on_the_live_round() {
    let carousel = sample_carousel();
    assert_eq!(carousel.current_index(), 2);
}

// ── advance ───────────────────────────────────────────────────────────────────

#[test]
fn advancing_forward_len_times_is_a_full_cycle() {
    let mut carousel = sample_carousel();
    let start = carousel.current_index();
    for _ in 0..carousel.len() {
        carousel.advance(SlideDirection::Forward);
    }
    assert_eq!(carousel.current_index(), start);
}

#[test]
fn advancing_backward_from_zero_wraps_to_last() {
    let mut carousel = sample_carousel();
    carousel.select_index(0);
    carousel.advance(SlideDirection::Backward);
    assert_eq!(carousel.current_index(), carousel.len() - 1);
}

#[test]
fn advancing_forward_from_last_wraps_to_zero() {
    let mut carousel = sample_carousel();
    carousel.select_index(4);
    carousel.advance(SlideDirection::Forward);
    assert_eq!(carousel.current_index(), 0);
}

// ── select_index ──────────────────────────────────────────────────────────────

#[test]
fn select_index_within_range_moves_focus() {
    let mut carousel = sample_carousel();
    carousel.select_index(1);
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn select_index_clamps_above_the_last_round() {
    let mut carousel = sample_carousel();
    carousel.select_index(99);
    assert_eq!(carousel.current_index(), 4);
}

#[test]
fn select_index_clamps_negative_input_to_zero() {
    let mut carousel = sample_carousel();
    carousel.select_index(-3);
    assert_eq!(carousel.current_index(), 0);
}

// ── place_bet ─────────────────────────────────────────────────────────────────

#[test]
fn bet_is_recorded_with_the_fixed_stake() {
    let mut carousel = sample_carousel();
    carousel.place_bet("410434", Direction::Up);
    let choice = carousel.user_choice("410434").unwrap();
    assert_eq!(choice.direction, Direction::Up);
    assert_eq!(choice.amount, dec!(0.001));
}

#[test]
fn repeat_bet_on_the_same_round_replaces_the_prior_choice() {
    let mut carousel = sample_carousel();
    carousel.place_bet("410434", Direction::Up);
    carousel.place_bet("410434", Direction::Down);

    let for_round: Vec<_> = carousel
        .choices()
        .iter()
        .filter(|c| c.round_id == "410434")
        .collect();
    assert_eq!(for_round.len(), 1, "exactly one choice per round");
    assert_eq!(for_round[0].direction, Direction::Down);
}

#[test]
fn bets_on_different_rounds_accumulate() {
    let mut carousel = sample_carousel();
    carousel.place_bet("410433", Direction::Up);
    carousel.place_bet("410434", Direction::Down);
    assert_eq!(carousel.choices().len(), 2);
}

#[test]
fn bet_on_an_unlisted_round_id_is_accepted() {
    // Round ids are lookup keys, not validated references.
    let mut carousel = sample_carousel();
    carousel.place_bet("999999", Direction::Up);
    assert!(carousel.user_choice("999999").is_some());
}

// ── countdown ticks ───────────────────────────────────────────────────────────

#[test]
fn live_round_shows_full_countdown_before_the_first_tick() {
    let carousel = sample_carousel();
    let live = &carousel.rounds()[2];
    assert_eq!(carousel.remaining_secs(live), LIVE_COUNTDOWN_SECS);
}

#[test]
fn countdown_reaches_zero_and_never_goes_negative() {
    let mut carousel = sample_carousel();
    for _ in 0..LIVE_COUNTDOWN_SECS {
        carousel.tick();
    }
    let live = carousel.rounds()[2].clone();
    assert_eq!(carousel.remaining_secs(&live), 0);

    carousel.tick();
    carousel.tick();
    assert_eq!(carousel.remaining_secs(&live), 0);
}

#[test]
fn ticks_leave_non_live_rounds_untouched() {
    let mut carousel = sample_carousel();
    carousel.tick();
    carousel.tick();
    let later = &carousel.rounds()[4];
    assert_eq!(later.entry_starts, Some(359));
    assert_eq!(carousel.remaining_secs(later), 0);
}

// ── stats ─────────────────────────────────────────────────────────────────────

#[test]
fn stats_count_choices_by_direction() {
    let mut carousel = sample_carousel();
    carousel.place_bet("410433", Direction::Up);
    carousel.place_bet("410434", Direction::Down);
    carousel.place_bet("410435", Direction::Down);

    let stats = carousel.stats();
    assert_eq!(stats.up_count, 1);
    assert_eq!(stats.down_count, 2);
}

#[test]
fn stats_split_the_total_pool_sixty_forty() {
    let carousel = sample_carousel();
    let stats = carousel.stats();
    // 15.906 + 14.895 + 19.024 + 0.0001 + 0
    assert_eq!(stats.total_pool, dec!(49.8251));
    assert_eq!(stats.up_pool, dec!(49.8251) * dec!(0.6));
    assert_eq!(stats.down_pool, dec!(49.8251) * dec!(0.4));
}

// ── degenerate input ──────────────────────────────────────────────────────────

#[test]
fn empty_carousel_navigation_is_a_no_op() {
    let mut carousel = Carousel::new(Vec::new(), dec!(0.001));
    carousel.advance(SlideDirection::Forward);
    carousel.select_index(7);
    assert_eq!(carousel.current_index(), 0);
    assert!(carousel.is_empty());
}
