// Proptest generators for domain types.
// Round entries are generated as raw bytes and reduced modulo the hand size
// at play time, so every generated script is valid by construction.

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use crate::domain::dealing::DealingMode;

/// Generate a random DealingMode
pub fn mode() -> impl Strategy<Value = DealingMode> {
    prop_oneof![
        Just(DealingMode::Ascending),
        Just(DealingMode::Pyramid),
        Just(DealingMode::Manual),
    ]
}

/// Generate an automatic DealingMode (hand size derivable from round count)
pub fn auto_mode() -> impl Strategy<Value = DealingMode> {
    prop_oneof![Just(DealingMode::Ascending), Just(DealingMode::Pyramid)]
}

/// A table plus a sequence of rounds to play on it.
#[derive(Debug, Clone)]
pub struct GameScript {
    pub player_count: usize,
    pub mode: DealingMode,
    pub max_hand: u8,
    /// Per round, per seat: raw (bid, won) bytes.
    pub rounds: Vec<Vec<(u8, u8)>>,
}

pub fn game_script() -> impl Strategy<Value = GameScript> {
    (2usize..=6, auto_mode(), 1u8..=8).prop_flat_map(|(player_count, mode, max_hand)| {
        let round_cap = match mode {
            DealingMode::Pyramid => usize::from(max_hand) * 2 - 1,
            _ => 12,
        };
        prop::collection::vec(
            prop::collection::vec((any::<u8>(), any::<u8>()), player_count),
            0..=round_cap,
        )
        .prop_map(move |rounds| GameScript {
            player_count,
            mode,
            max_hand,
            rounds,
        })
    })
}

/// Arbitrary JSON, including objects that look nothing like a session.
pub fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        (-1.0e6f64..1.0e6).prop_map(|f| json!(f)),
        "[a-z0-9]{0,6}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-zA-Z]{1,8}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Loose integer-ish values as they show up in hand-edited documents.
fn loose_int() -> impl Strategy<Value = Value> {
    prop_oneof![
        (-20i64..80).prop_map(|n| json!(n)),
        (-20i64..80).prop_map(|n| json!(n.to_string())),
        (0.0f64..30.0).prop_map(|f| json!(f)),
        Just(Value::Null),
        Just(json!("x")),
    ]
}

fn player_key() -> impl Strategy<Value = String> {
    prop_oneof![Just("a"), Just("b"), Just("c"), Just("d")].prop_map(str::to_string)
}

fn player_json() -> impl Strategy<Value = Value> {
    (
        prop_oneof![player_key().prop_map(Value::String), Just(json!("")), Just(json!(0)), Just(Value::Null)],
        prop_oneof!["[A-Za-z]{0,5}".prop_map(Value::String), Just(Value::Null)],
        any::<i32>(),
    )
        .prop_map(|(id, name, total)| json!({ "id": id, "name": name, "total": total }))
}

fn round_json() -> impl Strategy<Value = Value> {
    (
        prop_oneof!["r[0-9]{1,2}".prop_map(Value::String), Just(Value::Null)],
        loose_int(),
        loose_int(),
        prop_oneof![Just(json!("up")), Just(json!("updown")), Just(json!("manual")), Just(json!("?"))],
        prop::collection::btree_map(player_key(), (loose_int(), loose_int()), 0..4),
        prop::collection::btree_map(player_key(), loose_int(), 0..4),
        prop_oneof![any::<u32>().prop_map(|t| json!(t)), Just(Value::Null)],
    )
        .prop_map(|(id, index, hand, mode, entry, scores, created)| {
            let entry: Map<String, Value> = entry
                .into_iter()
                .map(|(k, (bid, won))| (k, json!({ "bid": bid, "won": won })))
                .collect();
            let scores: Map<String, Value> = scores.into_iter().collect();
            json!({
                "id": id,
                "index": index,
                "handSize": hand,
                "mode": mode,
                "entry": entry,
                "scores": scores,
                "createdAt": created,
            })
        })
}

/// Objects shaped like a (possibly corrupted) saved session.
pub fn session_like() -> impl Strategy<Value = Value> {
    (
        prop_oneof![Just(json!(1)), Just(json!(2)), Just(Value::Null)],
        prop_oneof![Just(json!("up")), Just(json!("updown")), Just(json!("manual")), Just(json!(3))],
        loose_int(),
        prop::collection::vec(player_json(), 0..6),
        prop::collection::vec(round_json(), 0..6),
        prop::collection::btree_map(player_key(), (loose_int(), loose_int()), 0..4),
        prop_oneof!["r[0-9]{1,2}".prop_map(Value::String), Just(Value::Null)],
    )
        .prop_map(|(version, mode, max_hand, players, rounds, inputs, last)| {
            let inputs: Map<String, Value> = inputs
                .into_iter()
                .map(|(k, (bid, won))| (k, json!({ "bid": bid, "won": won })))
                .collect();
            json!({
                "version": version,
                "settings": { "mode": mode, "maxHand": max_hand },
                "players": players,
                "rounds": rounds,
                "currentInputs": inputs,
                "ui": { "lastSavedRoundId": last },
            })
        })
}
