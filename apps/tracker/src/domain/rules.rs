use std::ops::RangeInclusive;

/// Cards in a Wizard deck (52 plus 4 wizards and 4 jesters).
pub const DECK_SIZE: u8 = 60;
/// Upper bound for any hand size, stored or configured.
pub const MAX_HAND_LIMIT: u8 = 60;
/// Largest hand printed on the official score sheets.
pub const SHEET_CAP: u8 = 20;
/// Round index ceiling accepted from foreign documents.
pub const MAX_ROUND_INDEX: i64 = 9999;
/// A round cannot be saved with fewer players.
pub const MIN_PLAYERS: usize = 2;

/// Largest hand that can be dealt to every player from one deck:
/// `max(1, floor(60 / max(1, players)))`.
pub fn auto_max_hand(player_count: usize) -> u8 {
    let n = player_count.max(1);
    (usize::from(DECK_SIZE) / n).max(1) as u8
}

/// Display-side maximum for the automatic modes: the dealable maximum capped
/// at the sheet size. `None` when there are no players to deal to.
pub fn recommended_max_hand(player_count: usize) -> Option<u8> {
    if player_count == 0 {
        return None;
    }
    let dealable = usize::from(DECK_SIZE) / player_count;
    if dealable == 0 {
        return None;
    }
    Some((dealable as u8).min(SHEET_CAP))
}

pub fn clamp_hand(value: i64) -> u8 {
    value.clamp(1, i64::from(MAX_HAND_LIMIT)) as u8
}

pub fn valid_bid_range(hand_size: u8) -> RangeInclusive<u8> {
    0..=hand_size
}
