//! Round ledger: append and undo rounds, keeping player totals in step.

use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::domain::dealing::current_hand_size;
use crate::domain::rules::{valid_bid_range, MIN_PLAYERS};
use crate::domain::scoring::score_round;
use crate::domain::state::{CurrentInput, PlayerId, Round, RoundEntry, RoundId, SessionState};
use crate::errors::domain::{DomainError, ValidationKind};

/// Identity and creation time for a round about to be appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundStamp {
    pub id: RoundId,
    pub created_at: i64,
}

/// Validate `entries` against the roster and the current hand size, then
/// record the round and refold every player's total from the ledger.
///
/// Nothing is modified when validation fails.
pub fn append_round<'a>(
    state: &'a mut SessionState,
    entries: &BTreeMap<PlayerId, CurrentInput>,
    stamp: RoundStamp,
) -> Result<&'a Round, DomainError> {
    if state.players.len() < MIN_PLAYERS {
        return Err(DomainError::validation(
            ValidationKind::NotEnoughPlayers,
            format!(
                "at least {MIN_PLAYERS} players are needed, {} registered",
                state.players.len()
            ),
        ));
    }

    let hand_size = current_hand_size(state).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::HandSizeUndetermined,
            format!(
                "hand size for round {} is not set (mode: {})",
                state.rounds.len() + 1,
                state.settings.mode.label()
            ),
        )
    })?;

    let mut entry = BTreeMap::new();
    for player in &state.players {
        let input = entries.get(&player.id).copied().unwrap_or_default();
        let (Some(bid), Some(won)) = (input.bid, input.won) else {
            return Err(DomainError::validation(
                ValidationKind::MissingEntry,
                format!("enter bid and tricks for {}", player.name),
            ));
        };
        let bid = checked_value(bid, hand_size, "bid", &player.name)?;
        let won = checked_value(won, hand_size, "tricks", &player.name)?;
        entry.insert(player.id.clone(), RoundEntry { bid, won });
    }

    let scores: BTreeMap<PlayerId, i64> = entry
        .iter()
        .map(|(pid, e)| (pid.clone(), score_round(e.bid, e.won)))
        .collect();

    let round = Round {
        id: stamp.id,
        index: state.rounds.len() as u32 + 1,
        hand_size,
        mode: state.settings.mode,
        entry,
        scores,
        created_at: stamp.created_at,
    };

    info!(
        round_id = %round.id,
        index = round.index,
        hand_size,
        "round saved"
    );
    state.ui.last_saved_round_id = Some(round.id.clone());
    state.rounds.push(round);
    recompute_totals(state);
    state.current_inputs = state.fresh_inputs();

    let last = state.rounds.len() - 1;
    Ok(&state.rounds[last])
}

fn checked_value(value: i64, hand_size: u8, what: &str, name: &str) -> Result<u32, DomainError> {
    if value < 0 {
        return Err(DomainError::validation(
            ValidationKind::EntryOutOfRange,
            format!("{what} for {name} cannot be negative (got {value})"),
        ));
    }
    u8::try_from(value)
        .ok()
        .filter(|v| valid_bid_range(hand_size).contains(v))
        .map(u32::from)
        .ok_or_else(|| {
            DomainError::validation(
                ValidationKind::EntryOutOfRange,
                format!("{what} for {name} can be at most {hand_size} this round (got {value})"),
            )
        })
}

/// Remove the round with `round_id`, renumber the rest and refold totals.
/// Returns the removed round, or `None` (and changes nothing) when no
/// such round exists.
pub fn undo_round(state: &mut SessionState, round_id: &str) -> Option<Round> {
    let Some(pos) = state.rounds.iter().position(|r| r.id == round_id) else {
        warn!(round_id, "undo ignored: unknown round");
        return None;
    };

    let round = state.rounds.remove(pos);
    renumber(&mut state.rounds);
    recompute_totals(state);
    if state.ui.last_saved_round_id.as_deref() == Some(round_id) {
        state.ui.last_saved_round_id = None;
    }
    info!(round_id, index = round.index, "round undone");
    Some(round)
}

/// Undo whatever round was saved last, if it is still in the ledger.
pub fn undo_last_saved(state: &mut SessionState) -> Option<Round> {
    let round_id = state.ui.last_saved_round_id.clone()?;
    undo_round(state, &round_id)
}

/// Restore `index == position + 1` across the ledger.
pub fn renumber(rounds: &mut [Round]) {
    for (i, round) in rounds.iter_mut().enumerate() {
        round.index = i as u32 + 1;
    }
}

/// Totals folded from the ledger in index order. Scores for players no longer
/// on the roster are ignored.
pub fn folded_totals(state: &SessionState) -> BTreeMap<PlayerId, i64> {
    let mut totals: BTreeMap<PlayerId, i64> =
        state.players.iter().map(|p| (p.id.clone(), 0)).collect();
    let mut ordered: Vec<&Round> = state.rounds.iter().collect();
    ordered.sort_by_key(|r| r.index);
    for round in ordered {
        for (pid, total) in totals.iter_mut() {
            *total = total.saturating_add(round.score_for(pid));
        }
    }
    totals
}

/// Overwrite every player's total with the ledger fold.
pub fn recompute_totals(state: &mut SessionState) {
    let totals = folded_totals(state);
    for player in &mut state.players {
        player.total = totals.get(&player.id).copied().unwrap_or(0);
    }
}
