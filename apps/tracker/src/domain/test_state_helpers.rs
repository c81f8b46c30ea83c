//! Test-only session builders for domain unit tests.

use std::collections::BTreeMap;

use crate::domain::dealing::DealingMode;
use crate::domain::ledger::{append_round, RoundStamp};
use crate::domain::roster::add_player;
use crate::domain::state::{CurrentInput, PlayerId, Round, SessionState};

/// Session with players named `names` (ids `p0`, `p1`, ...) and `mode`.
pub fn session_with(names: &[&str], mode: DealingMode) -> SessionState {
    let mut state = SessionState::fresh();
    state.settings.mode = mode;
    for (i, name) in names.iter().enumerate() {
        add_player(&mut state, name, format!("p{i}")).expect("add player");
    }
    state
}

/// Inputs for every player from `(bid, won)` pairs in roster order.
pub fn inputs(state: &SessionState, pairs: &[(i64, i64)]) -> BTreeMap<PlayerId, CurrentInput> {
    state
        .players
        .iter()
        .zip(pairs)
        .map(|(p, &(bid, won))| {
            (
                p.id.clone(),
                CurrentInput {
                    bid: Some(bid),
                    won: Some(won),
                },
            )
        })
        .collect()
}

pub fn stamp(n: u32) -> RoundStamp {
    RoundStamp {
        id: format!("r{n}"),
        created_at: 1_700_000_000_000 + i64::from(n),
    }
}

/// Append a round from `(bid, won)` pairs; panics on validation failure.
pub fn play(state: &mut SessionState, n: u32, pairs: &[(i64, i64)]) -> Round {
    let entries = inputs(state, pairs);
    append_round(state, &entries, stamp(n))
        .expect("valid round")
        .clone()
}

pub fn totals(state: &SessionState) -> Vec<i64> {
    state.players.iter().map(|p| p.total).collect()
}

pub fn indices(state: &SessionState) -> Vec<u32> {
    state.rounds.iter().map(|r| r.index).collect()
}
