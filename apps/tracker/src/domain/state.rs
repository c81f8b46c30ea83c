//! Canonical session state and its schema-version-1 wire shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::dealing::DealingMode;

pub type PlayerId = String;
pub type RoundId = String;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub mode: DealingMode,
    /// `None` means "derive from the player count".
    pub max_hand: Option<u8>,
    /// Hand size for the next round in manual mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_hand: Option<u8>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: DealingMode::Pyramid,
            max_hand: None,
            manual_hand: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Sum of this player's round scores; recomputed on load.
    pub total: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundEntry {
    pub bid: u32,
    pub won: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub id: RoundId,
    /// Position in the history, 1-based. Recomputed whenever a round is removed.
    pub index: u32,
    pub hand_size: u8,
    pub mode: DealingMode,
    pub entry: BTreeMap<PlayerId, RoundEntry>,
    pub scores: BTreeMap<PlayerId, i64>,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
}

impl Round {
    pub fn score_for(&self, player_id: &str) -> i64 {
        self.scores.get(player_id).copied().unwrap_or(0)
    }
}

/// Unsaved bid/tricks values as typed, possibly incomplete or out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CurrentInput {
    pub bid: Option<i64>,
    pub won: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    /// Most recently saved round, for the one-shot undo affordance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_saved_round_id: Option<RoundId>,
}

/// Entire session: settings, roster, round ledger and unsaved inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub version: u32,
    pub settings: Settings,
    pub players: Vec<Player>,
    /// Ordered by `index`, which always equals position + 1.
    pub rounds: Vec<Round>,
    pub current_inputs: BTreeMap<PlayerId, CurrentInput>,
    pub ui: UiState,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::fresh()
    }
}

impl SessionState {
    /// Empty game: pyramid dealing, no players, no rounds.
    pub fn fresh() -> Self {
        Self {
            version: SCHEMA_VERSION,
            settings: Settings::default(),
            players: Vec::new(),
            rounds: Vec::new(),
            current_inputs: BTreeMap::new(),
            ui: UiState::default(),
        }
    }

    pub fn has_rounds(&self) -> bool {
        !self.rounds.is_empty()
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn round(&self, id: &str) -> Option<&Round> {
        self.rounds.iter().find(|r| r.id == id)
    }

    /// One blank input per current player.
    pub fn fresh_inputs(&self) -> BTreeMap<PlayerId, CurrentInput> {
        self.players
            .iter()
            .map(|p| (p.id.clone(), CurrentInput::default()))
            .collect()
    }

    /// Canonical export: pretty-printed JSON of the whole state.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
