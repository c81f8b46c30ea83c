//! Read model for the score sheet: badges, standings, previews and history.

use serde::{Deserialize, Serialize};

use crate::domain::dealing::{current_hand_size, effective_max_hand, planned_round_count, DealingMode};
use crate::domain::rules::MIN_PLAYERS;
use crate::domain::scoring::{preview, ScorePreview};
use crate::domain::state::{PlayerId, RoundEntry, RoundId, SessionState};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based; ties keep roster order.
    pub rank: usize,
    pub player_id: PlayerId,
    pub name: String,
    pub total: i64,
    pub preview: ScorePreview,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryLine {
    pub player_id: PlayerId,
    pub name: String,
    pub entry: Option<RoundEntry>,
    pub score: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryRow {
    pub round_id: RoundId,
    pub index: u32,
    pub hand_size: u8,
    pub mode: DealingMode,
    pub created_at: i64,
    pub lines: Vec<HistoryLine>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Number of the round about to be played.
    pub round_no: usize,
    pub hand_size: Option<u8>,
    pub mode: DealingMode,
    pub max_hand: u8,
    pub planned_rounds: Option<usize>,
    pub leader: Option<Standing>,
    /// Roster order.
    pub standings: Vec<Standing>,
    pub can_save: bool,
    pub roster_locked: bool,
    /// Latest round first.
    pub history: Vec<HistoryRow>,
}

/// Ranks in roster order: highest total first, earlier roster position wins ties.
fn ranks(state: &SessionState) -> Vec<usize> {
    let mut order: Vec<usize> = (0..state.players.len()).collect();
    order.sort_by(|&a, &b| state.players[b].total.cmp(&state.players[a].total));
    let mut ranks = vec![0; state.players.len()];
    for (rank, &pos) in order.iter().enumerate() {
        ranks[pos] = rank + 1;
    }
    ranks
}

pub fn history(state: &SessionState) -> Vec<HistoryRow> {
    let mut rounds: Vec<_> = state.rounds.iter().collect();
    rounds.sort_by(|a, b| b.index.cmp(&a.index));
    rounds
        .into_iter()
        .map(|r| HistoryRow {
            round_id: r.id.clone(),
            index: r.index,
            hand_size: r.hand_size,
            mode: r.mode,
            created_at: r.created_at,
            lines: state
                .players
                .iter()
                .map(|p| HistoryLine {
                    player_id: p.id.clone(),
                    name: p.name.clone(),
                    entry: r.entry.get(&p.id).copied(),
                    score: r.scores.get(&p.id).copied(),
                })
                .collect(),
        })
        .collect()
}

pub fn snapshot(state: &SessionState) -> SessionSnapshot {
    let hand_size = current_hand_size(state);
    let ranks = ranks(state);
    let standings: Vec<Standing> = state
        .players
        .iter()
        .zip(ranks)
        .map(|(p, rank)| Standing {
            rank,
            player_id: p.id.clone(),
            name: p.name.clone(),
            total: p.total,
            preview: state
                .current_inputs
                .get(&p.id)
                .map(|i| preview(i, hand_size))
                .unwrap_or(ScorePreview::Incomplete),
        })
        .collect();
    let leader = standings.iter().find(|s| s.rank == 1).cloned();

    SessionSnapshot {
        round_no: state.rounds.len() + 1,
        hand_size,
        mode: state.settings.mode,
        max_hand: effective_max_hand(state),
        planned_rounds: planned_round_count(state),
        leader,
        standings,
        can_save: state.players.len() >= MIN_PLAYERS && hand_size.is_some(),
        roster_locked: state.has_rounds(),
        history: history(state),
    }
}
