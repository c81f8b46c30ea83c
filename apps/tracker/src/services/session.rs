//! Explicitly owned session: the live state plus its persistence collaborator.
//!
//! Every mutating call goes through the domain contracts and then saves the
//! whole state, best-effort. A failed save is logged and otherwise ignored;
//! it never rolls back or fails the operation that triggered it.

use tracing::{info, warn};

use crate::domain::dealing::DealingMode;
use crate::domain::ids::{new_id, now_ms};
use crate::domain::ledger::{self, RoundStamp};
use crate::domain::reconcile::parse_document;
use crate::domain::roster;
use crate::domain::snapshot::{snapshot, SessionSnapshot};
use crate::domain::state::{Player, Round, SessionState};
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::store::SessionStore;

pub struct Session<S: SessionStore> {
    state: SessionState,
    store: S,
}

impl<S: SessionStore> Session<S> {
    /// Start from whatever the store holds. Unreadable or malformed blobs
    /// start a fresh game instead of failing.
    pub fn open(store: S) -> Self {
        let state = match store.load() {
            Ok(Some(blob)) => match parse_document(&blob) {
                Ok(state) => state,
                Err(e) => {
                    warn!(error = %e, "saved state unusable, starting fresh");
                    SessionState::fresh()
                }
            },
            Ok(None) => SessionState::fresh(),
            Err(e) => {
                warn!(error = %e, "cannot load saved state, starting fresh");
                SessionState::fresh()
            }
        };
        Self { state, store }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        snapshot(&self.state)
    }

    fn persist(&self) {
        let blob = match serde_json::to_string(&self.state) {
            Ok(blob) => blob,
            Err(e) => {
                warn!(error = %e, "state not serializable, skipping save");
                return;
            }
        };
        if let Err(e) = self.store.save(&blob) {
            warn!(error = %e, "saving state failed, continuing in memory");
        }
    }

    pub fn add_player(&mut self, name: &str) -> Result<Player, AppError> {
        let player = roster::add_player(&mut self.state, name, new_id())?.clone();
        self.persist();
        Ok(player)
    }

    /// Remove by id or name. Returns the removed player.
    pub fn remove_player(&mut self, id_or_name: &str) -> Result<Option<Player>, AppError> {
        let Some(player) = roster::find_player(&self.state, id_or_name).cloned() else {
            return Ok(None);
        };
        let removed = roster::remove_player(&mut self.state, &player.id)?;
        self.persist();
        Ok(removed.then_some(player))
    }

    pub fn set_mode(&mut self, mode: DealingMode) {
        roster::set_mode(&mut self.state, mode);
        self.persist();
    }

    pub fn set_max_hand(&mut self, raw: Option<i64>) -> u8 {
        let value = roster::set_max_hand(&mut self.state, raw);
        self.persist();
        value
    }

    pub fn set_manual_hand(&mut self, raw: Option<i64>) -> Option<u8> {
        let value = roster::set_manual_hand(&mut self.state, raw);
        self.persist();
        value
    }

    /// Record unsaved bid/tricks for a player given by id or name.
    pub fn set_input(
        &mut self,
        id_or_name: &str,
        bid: Option<i64>,
        won: Option<i64>,
    ) -> Result<(), AppError> {
        let id = self.resolve_player_id(id_or_name)?;
        roster::set_input(&mut self.state, &id, bid, won);
        self.persist();
        Ok(())
    }

    pub fn clear_input(&mut self, id_or_name: &str) -> Result<(), AppError> {
        let id = self.resolve_player_id(id_or_name)?;
        roster::clear_input(&mut self.state, &id);
        self.persist();
        Ok(())
    }

    fn resolve_player_id(&self, id_or_name: &str) -> Result<String, AppError> {
        roster::find_player(&self.state, id_or_name)
            .map(|p| p.id.clone())
            .ok_or_else(|| {
                DomainError::validation_other(format!("no player named '{id_or_name}'")).into()
            })
    }

    /// Save the round from the unsaved inputs.
    pub fn save_round(&mut self) -> Result<Round, AppError> {
        let entries = self.state.current_inputs.clone();
        let stamp = RoundStamp {
            id: new_id(),
            created_at: now_ms(),
        };
        let round = ledger::append_round(&mut self.state, &entries, stamp)?.clone();
        self.persist();
        Ok(round)
    }

    pub fn undo_round(&mut self, round_id: &str) -> Option<Round> {
        let removed = ledger::undo_round(&mut self.state, round_id);
        if removed.is_some() {
            self.persist();
        }
        removed
    }

    /// The one-shot undo offered right after a save.
    pub fn undo_last_saved(&mut self) -> Option<Round> {
        let removed = ledger::undo_last_saved(&mut self.state);
        if removed.is_some() {
            self.persist();
        }
        removed
    }

    pub fn new_game(&mut self) {
        self.state = SessionState::fresh();
        info!("new game started");
        self.persist();
    }

    pub fn export_json(&self) -> Result<String, AppError> {
        self.state
            .to_pretty_json()
            .map_err(|e| AppError::storage(format!("cannot serialize state: {e}")))
    }

    /// Replace the whole state with a reconciled document. Nothing changes on
    /// error.
    pub fn import_json(&mut self, text: &str) -> Result<(), AppError> {
        let state = parse_document(text)?;
        info!(
            players = state.players.len(),
            rounds = state.rounds.len(),
            "state imported"
        );
        self.state = state;
        self.persist();
        Ok(())
    }
}
