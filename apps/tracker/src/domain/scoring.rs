use serde::{Deserialize, Serialize};

use crate::domain::state::CurrentInput;

/// Points for one player in one round.
///
/// An exact prediction earns `20 + 10 * won`; a miss costs ten points per
/// trick of difference.
pub fn score_round(bid: u32, won: u32) -> i64 {
    if bid == won {
        20 + 10 * i64::from(won)
    } else {
        -10 * (i64::from(bid) - i64::from(won)).abs()
    }
}

/// What the score sheet shows for a player's unsaved inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ScorePreview {
    /// Bid or tricks still missing.
    Incomplete,
    /// A value is negative or above the current hand size.
    OutOfRange,
    Score(i64),
}

pub fn preview(input: &CurrentInput, hand_size: Option<u8>) -> ScorePreview {
    let (Some(bid), Some(won)) = (input.bid, input.won) else {
        return ScorePreview::Incomplete;
    };
    if bid < 0 || won < 0 {
        return ScorePreview::OutOfRange;
    }
    if let Some(hs) = hand_size {
        let hs = i64::from(hs);
        if bid > hs || won > hs {
            return ScorePreview::OutOfRange;
        }
    }
    match (u32::try_from(bid), u32::try_from(won)) {
        (Ok(bid), Ok(won)) => ScorePreview::Score(score_round(bid, won)),
        _ => ScorePreview::OutOfRange,
    }
}
