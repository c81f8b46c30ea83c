//! Pre-game roster and settings edits, plus unsaved input updates.

use tracing::{debug, warn};
use unicode_normalization::UnicodeNormalization;

use crate::domain::dealing::DealingMode;
use crate::domain::rules::{auto_max_hand, clamp_hand};
use crate::domain::state::{CurrentInput, Player, PlayerId, SessionState};
use crate::errors::domain::{DomainError, ValidationKind};

/// Comparison key for player names: NFC-normalized and lowercased.
pub fn name_key(name: &str) -> String {
    name.trim().nfc().collect::<String>().to_lowercase()
}

fn ensure_roster_open(state: &SessionState) -> Result<(), DomainError> {
    if state.has_rounds() {
        return Err(DomainError::validation(
            ValidationKind::RosterLocked,
            "players cannot change once the first round is saved",
        ));
    }
    Ok(())
}

/// Register a new player. Only allowed before the first round.
///
/// Re-derives the maximum hand from the new table size and resets the
/// unsaved inputs.
pub fn add_player<'a>(
    state: &'a mut SessionState,
    name: &str,
    id: PlayerId,
) -> Result<&'a Player, DomainError> {
    ensure_roster_open(state)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerName,
            "player name cannot be empty",
        ));
    }
    let key = name_key(name);
    if state.players.iter().any(|p| name_key(&p.name) == key) {
        return Err(DomainError::validation(
            ValidationKind::DuplicatePlayerName,
            format!("a player named '{name}' already exists"),
        ));
    }

    state.players.push(Player {
        id,
        name: name.to_string(),
        total: 0,
    });
    state.current_inputs = state.fresh_inputs();
    state.settings.max_hand = Some(auto_max_hand(state.players.len()));
    debug!(
        players = state.players.len(),
        max_hand = ?state.settings.max_hand,
        "player added"
    );

    let last = state.players.len() - 1;
    Ok(&state.players[last])
}

/// Remove a player before the first round. Returns whether anyone was removed.
pub fn remove_player(state: &mut SessionState, id: &str) -> Result<bool, DomainError> {
    ensure_roster_open(state)?;
    let before = state.players.len();
    state.players.retain(|p| p.id != id);
    if state.players.len() == before {
        return Ok(false);
    }
    state.current_inputs.remove(id);
    state.settings.max_hand = Some(auto_max_hand(state.players.len()));
    debug!(player_id = id, players = state.players.len(), "player removed");
    Ok(true)
}

/// Find a player by id, or by name compared case-insensitively.
pub fn find_player<'a>(state: &'a SessionState, id_or_name: &str) -> Option<&'a Player> {
    state.player(id_or_name).or_else(|| {
        let key = name_key(id_or_name);
        state.players.iter().find(|p| name_key(&p.name) == key)
    })
}

/// Change the dealing mode. Once rounds exist this only affects rounds still
/// to be played; recorded rounds keep their own snapshot.
pub fn set_mode(state: &mut SessionState, mode: DealingMode) {
    if state.has_rounds() && state.settings.mode != mode {
        debug!(from = %state.settings.mode, to = %mode, "mode changed mid-game");
    }
    state.settings.mode = mode;
}

/// Set the maximum hand, clamped to 1..=60. Missing input falls back to the
/// deck rule for the current table.
pub fn set_max_hand(state: &mut SessionState, raw: Option<i64>) -> u8 {
    let value = raw
        .map(clamp_hand)
        .unwrap_or_else(|| auto_max_hand(state.players.len()));
    state.settings.max_hand = Some(value);
    value
}

/// Hand size for the next round in manual mode; `None` clears it.
pub fn set_manual_hand(state: &mut SessionState, raw: Option<i64>) -> Option<u8> {
    let value = raw.map(clamp_hand);
    state.settings.manual_hand = value;
    value
}

/// Update a present player's unsaved bid/tricks. `None` leaves a value as it
/// is. Returns `false` for unknown players.
pub fn set_input(
    state: &mut SessionState,
    player_id: &str,
    bid: Option<i64>,
    won: Option<i64>,
) -> bool {
    if state.player(player_id).is_none() {
        warn!(player_id, "input ignored: unknown player");
        return false;
    }
    let input = state
        .current_inputs
        .entry(player_id.to_string())
        .or_insert_with(CurrentInput::default);
    if bid.is_some() {
        input.bid = bid;
    }
    if won.is_some() {
        input.won = won;
    }
    true
}

/// Clear a player's unsaved values.
pub fn clear_input(state: &mut SessionState, player_id: &str) -> bool {
    match state.current_inputs.get_mut(player_id) {
        Some(input) => {
            *input = CurrentInput::default();
            true
        }
        None => false,
    }
}
