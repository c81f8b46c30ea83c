//! Best-effort normalization of foreign session documents.
//!
//! Every field has exactly one default rule, so any JSON object maps to one
//! canonical [`SessionState`]. Player totals in the input are never trusted:
//! they are folded from the round ledger.

use std::collections::{BTreeMap, HashSet};

use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::dealing::DealingMode;
use crate::domain::ids::{new_id, now_ms};
use crate::domain::ledger::{recompute_totals, renumber};
use crate::domain::rules::{clamp_hand, MAX_ROUND_INDEX};
use crate::domain::state::{
    CurrentInput, Player, Round, RoundEntry, SessionState, Settings, UiState, SCHEMA_VERSION,
};
use crate::errors::domain::DomainError;

const DEFAULT_PLAYER_NAME: &str = "Player";

/// Normalize `raw` into a canonical session. `None` only when `raw` is not a
/// JSON object.
pub fn reconcile(raw: &Value) -> Option<SessionState> {
    let obj = raw.as_object()?;

    if let Some(version) = obj.get("version") {
        if lenient_int(version).unwrap_or(i64::from(SCHEMA_VERSION)) != i64::from(SCHEMA_VERSION) {
            debug!(?version, "unknown schema version, reading as version 1");
        }
    }

    let settings_obj = obj.get("settings").and_then(Value::as_object);
    let settings = Settings {
        mode: settings_obj
            .and_then(|s| s.get("mode"))
            .map(mode_or_default)
            .unwrap_or_default(),
        max_hand: settings_obj
            .and_then(|s| s.get("maxHand"))
            .and_then(lenient_int)
            .map(clamp_hand),
        manual_hand: settings_obj
            .and_then(|s| s.get("manualHand"))
            .and_then(lenient_int)
            .map(clamp_hand),
    };

    let players = obj
        .get("players")
        .and_then(Value::as_array)
        .map(|arr| players_from(arr.as_slice()))
        .unwrap_or_default();

    let mut rounds: Vec<Round> = obj
        .get("rounds")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .enumerate()
                .filter_map(|(i, r)| r.as_object().map(|r| round_from(r, i)))
                .collect()
        })
        .unwrap_or_default();
    dedupe_round_ids(&mut rounds);
    // stable: rounds sharing an index keep their document order
    rounds.sort_by_key(|r| r.index);
    renumber(&mut rounds);

    let raw_inputs = obj.get("currentInputs").and_then(Value::as_object);
    let current_inputs: BTreeMap<_, _> = players
        .iter()
        .map(|p| {
            let input = raw_inputs
                .and_then(|m| m.get(&p.id))
                .and_then(Value::as_object)
                .map(|i| CurrentInput {
                    bid: i.get("bid").and_then(lenient_int),
                    won: i.get("won").and_then(lenient_int),
                })
                .unwrap_or_default();
            (p.id.clone(), input)
        })
        .collect();

    let last_saved_round_id = obj
        .get("ui")
        .and_then(|ui| ui.get("lastSavedRoundId"))
        .and_then(Value::as_str)
        .filter(|id| rounds.iter().any(|r| r.id == *id))
        .map(str::to_string);

    let mut state = SessionState {
        version: SCHEMA_VERSION,
        settings,
        players,
        rounds,
        current_inputs,
        ui: UiState {
            last_saved_round_id,
        },
    };
    recompute_totals(&mut state);
    Some(state)
}

/// Parse and reconcile an import document. Either the whole document becomes
/// a session or an error is returned.
pub fn parse_document(text: &str) -> Result<SessionState, DomainError> {
    let raw: Value = serde_json::from_str(text.trim())
        .map_err(|e| DomainError::malformed(format!("invalid JSON: {e}")))?;
    reconcile(&raw).ok_or_else(|| DomainError::malformed("document is not a JSON object"))
}

fn players_from(arr: &[Value]) -> Vec<Player> {
    let mut seen = HashSet::new();
    let mut players = Vec::with_capacity(arr.len());
    for p in arr.iter().filter_map(Value::as_object) {
        let id = p.get("id").and_then(truthy_string).unwrap_or_else(new_id);
        if !seen.insert(id.clone()) {
            debug!(player_id = %id, "duplicate player id dropped");
            continue;
        }
        let name = p
            .get("name")
            .and_then(truthy_string)
            .unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_string());
        players.push(Player { id, name, total: 0 });
    }
    players
}

/// Later rounds reusing an id get a fresh one; the first keeps it.
fn dedupe_round_ids(rounds: &mut [Round]) {
    let mut seen = HashSet::new();
    for round in rounds.iter_mut() {
        if !seen.insert(round.id.clone()) {
            let fresh = new_id();
            debug!(round_id = %round.id, new_id = %fresh, "duplicate round id replaced");
            round.id = fresh;
        }
    }
}

fn round_from(r: &Map<String, Value>, position: usize) -> Round {
    let index = r
        .get("index")
        .and_then(lenient_int)
        .map(|i| i.clamp(1, MAX_ROUND_INDEX) as u32)
        .unwrap_or(position as u32 + 1);
    let entry = r
        .get("entry")
        .and_then(Value::as_object)
        .map(|m| {
            m.iter()
                .filter_map(|(pid, e)| entry_from(e).map(|e| (pid.clone(), e)))
                .collect()
        })
        .unwrap_or_default();
    let scores = r
        .get("scores")
        .and_then(Value::as_object)
        .map(|m| {
            m.iter()
                .filter_map(|(pid, s)| lenient_int(s).map(|s| (pid.clone(), s)))
                .collect::<BTreeMap<_, _>>()
        })
        .unwrap_or_default();

    Round {
        id: r.get("id").and_then(truthy_string).unwrap_or_else(new_id),
        index,
        hand_size: r
            .get("handSize")
            .and_then(lenient_int)
            .map(clamp_hand)
            .unwrap_or(1),
        mode: r.get("mode").map(mode_or_default).unwrap_or_default(),
        entry,
        scores,
        created_at: r
            .get("createdAt")
            .and_then(lenient_int)
            .filter(|t| *t != 0)
            .unwrap_or_else(now_ms),
    }
}

fn entry_from(e: &Value) -> Option<RoundEntry> {
    let e = e.as_object()?;
    let bid = e.get("bid").and_then(lenient_int)?;
    let won = e.get("won").and_then(lenient_int)?;
    Some(RoundEntry {
        bid: u32::try_from(bid).ok()?,
        won: u32::try_from(won).ok()?,
    })
}

fn mode_or_default(v: &Value) -> DealingMode {
    v.as_str()
        .and_then(|s| s.parse::<DealingMode>().ok())
        .unwrap_or_default()
}

/// Integer view of a JSON value: numbers are truncated, strings are read as
/// an optionally signed run of leading digits. Anything else is `None`.
pub fn lenient_int(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i);
            }
            let f = n.as_f64()?;
            if !f.is_finite() {
                return None;
            }
            Some(f.trunc().clamp(i64::MIN as f64, i64::MAX as f64) as i64)
        }
        Value::String(s) => leading_int(s),
        _ => None,
    }
}

fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1i64, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(sign * magnitude)
}

/// Non-empty string form of an id/name field; empty, zero, false and null
/// count as missing.
fn truthy_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}
