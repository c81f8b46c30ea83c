//! Domain layer: pure scoring, sequencing, ledger and reconciliation logic.

pub mod dealing;
pub mod ids;
pub mod ledger;
pub mod reconcile;
pub mod roster;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_roster;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use dealing::{current_hand_size, hand_size_for, pyramid_sequence, DealingMode};
pub use ledger::{append_round, undo_round, RoundStamp};
pub use reconcile::{parse_document, reconcile};
pub use scoring::score_round;
pub use snapshot::{snapshot, SessionSnapshot};
pub use state::{CurrentInput, Player, PlayerId, Round, RoundEntry, SessionState};
