use crate::domain::scoring::{preview, score_round, ScorePreview};
use crate::domain::state::CurrentInput;

fn input(bid: Option<i64>, won: Option<i64>) -> CurrentInput {
    CurrentInput { bid, won }
}

#[test]
fn exact_bid_earns_base_plus_ten_per_trick() {
    assert_eq!(score_round(5, 5), 70);
    assert_eq!(score_round(0, 0), 20);
    assert_eq!(score_round(1, 1), 30);
    assert_eq!(score_round(20, 20), 220);
}

#[test]
fn miss_costs_ten_per_trick_either_direction() {
    assert_eq!(score_round(3, 5), -20);
    assert_eq!(score_round(0, 3), -30);
    assert_eq!(score_round(5, 3), -20);
    assert_eq!(score_round(1, 0), -10);
}

#[test]
fn miss_is_symmetric() {
    for bid in 0..=12u32 {
        for won in 0..=12u32 {
            assert_eq!(score_round(bid, won), score_round(won, bid));
            if bid != won {
                assert!(score_round(bid, won) < 0);
            } else {
                assert!(score_round(bid, won) >= 20);
            }
        }
    }
}

#[test]
fn preview_waits_for_both_values() {
    assert_eq!(preview(&input(None, None), Some(3)), ScorePreview::Incomplete);
    assert_eq!(preview(&input(Some(1), None), Some(3)), ScorePreview::Incomplete);
    assert_eq!(preview(&input(None, Some(1)), Some(3)), ScorePreview::Incomplete);
}

#[test]
fn preview_flags_values_above_hand_size() {
    assert_eq!(preview(&input(Some(4), Some(1)), Some(3)), ScorePreview::OutOfRange);
    assert_eq!(preview(&input(Some(1), Some(4)), Some(3)), ScorePreview::OutOfRange);
    assert_eq!(preview(&input(Some(-1), Some(0)), Some(3)), ScorePreview::OutOfRange);
}

#[test]
fn preview_scores_valid_inputs() {
    assert_eq!(preview(&input(Some(2), Some(2)), Some(3)), ScorePreview::Score(40));
    assert_eq!(preview(&input(Some(0), Some(2)), Some(3)), ScorePreview::Score(-20));
    // no hand size (manual, unset): still previews
    assert_eq!(preview(&input(Some(7), Some(7)), None), ScorePreview::Score(90));
}
