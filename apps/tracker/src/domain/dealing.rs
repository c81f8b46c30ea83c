//! Hand-size sequencing for the three dealing modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::rules::{auto_max_hand, clamp_hand, recommended_max_hand};
use crate::domain::state::SessionState;

/// How the number of cards per player evolves from round to round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DealingMode {
    /// 1, 2, 3, ... saturating at the maximum hand.
    #[serde(rename = "up")]
    Ascending,
    /// 1, 2, ..., max, ..., 2, 1 and then the game is over.
    #[default]
    #[serde(rename = "updown")]
    Pyramid,
    /// Hand size typed in by the table before every round.
    #[serde(rename = "manual")]
    Manual,
}

impl DealingMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            DealingMode::Ascending => "up",
            DealingMode::Pyramid => "updown",
            DealingMode::Manual => "manual",
        }
    }

    /// Short label for badges.
    pub const fn label(self) -> &'static str {
        match self {
            DealingMode::Ascending => "1→Max",
            DealingMode::Pyramid => "Up/Down",
            DealingMode::Manual => "Manual",
        }
    }

    pub const fn is_auto(self) -> bool {
        !matches!(self, DealingMode::Manual)
    }
}

impl fmt::Display for DealingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown dealing mode '{}'", self.0)
    }
}

impl std::error::Error for UnknownMode {}

impl FromStr for DealingMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(DealingMode::Ascending),
            "updown" => Ok(DealingMode::Pyramid),
            "manual" => Ok(DealingMode::Manual),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

/// `1, 2, ..., max_hand, max_hand - 1, ..., 1`, length `2 * max_hand - 1`.
pub fn pyramid_sequence(max_hand: u8) -> Vec<u8> {
    let max = max_hand.max(1);
    (1..=max).chain((1..max).rev()).collect()
}

/// Hand size for the round after `completed_rounds` rounds.
///
/// `max_hand` falls back to the deck rule for `player_count` when unset.
/// `manual_hand` is only consulted in [`DealingMode::Manual`].
/// Ascending saturates at the maximum; Pyramid returns `None` once the
/// sequence is exhausted.
pub fn hand_size_for(
    mode: DealingMode,
    max_hand: Option<u8>,
    player_count: usize,
    completed_rounds: usize,
    manual_hand: Option<u8>,
) -> Option<u8> {
    let max = max_hand
        .map(|m| clamp_hand(i64::from(m)))
        .unwrap_or_else(|| auto_max_hand(player_count));
    match mode {
        DealingMode::Manual => manual_hand.map(|h| clamp_hand(i64::from(h))),
        DealingMode::Ascending => {
            let next = completed_rounds.saturating_add(1);
            Some(next.clamp(1, usize::from(max)) as u8)
        }
        DealingMode::Pyramid => pyramid_sequence(max).get(completed_rounds).copied(),
    }
}

/// Maximum hand in effect for `state`: the configured value or the deck rule.
pub fn effective_max_hand(state: &SessionState) -> u8 {
    state
        .settings
        .max_hand
        .map(|m| clamp_hand(i64::from(m)))
        .unwrap_or_else(|| auto_max_hand(state.players.len()))
}

/// Hand size for the round about to be played.
pub fn current_hand_size(state: &SessionState) -> Option<u8> {
    hand_size_for(
        state.settings.mode,
        state.settings.max_hand,
        state.players.len(),
        state.rounds.len(),
        state.settings.manual_hand,
    )
}

/// Number of rounds the configured game is expected to last, for display.
///
/// Automatic modes use the effective maximum capped at the recommended
/// maximum for the current table size. Manual games are open-ended.
pub fn planned_round_count(state: &SessionState) -> Option<usize> {
    let mode = state.settings.mode;
    if !mode.is_auto() {
        return None;
    }
    let mut max = effective_max_hand(state);
    if let Some(recommended) = recommended_max_hand(state.players.len()) {
        max = max.min(recommended);
    }
    let max = usize::from(max);
    match mode {
        DealingMode::Ascending => Some(max),
        DealingMode::Pyramid => Some(max * 2 - 1),
        DealingMode::Manual => None,
    }
}
