use crate::domain::dealing::DealingMode;
use crate::domain::roster::{
    add_player, clear_input, find_player, name_key, remove_player, set_input, set_manual_hand,
    set_max_hand, set_mode,
};
use crate::domain::state::{CurrentInput, SessionState};
use crate::domain::test_state_helpers::{play, session_with};
use crate::errors::domain::ValidationKind;

#[test]
fn adding_players_rederives_max_hand() {
    let mut state = SessionState::fresh();
    add_player(&mut state, "Ada", "a".into()).unwrap();
    assert_eq!(state.settings.max_hand, Some(60));
    add_player(&mut state, "Bea", "b".into()).unwrap();
    assert_eq!(state.settings.max_hand, Some(30));
    add_player(&mut state, "Cy", "c".into()).unwrap();
    assert_eq!(state.settings.max_hand, Some(20));
    assert_eq!(state.current_inputs.len(), 3);

    assert!(remove_player(&mut state, "b").unwrap());
    assert_eq!(state.settings.max_hand, Some(30));
    assert!(!state.current_inputs.contains_key("b"));
}

#[test]
fn names_are_trimmed_and_must_not_be_blank() {
    let mut state = SessionState::fresh();
    let p = add_player(&mut state, "  Ada  ", "a".into()).unwrap();
    assert_eq!(p.name, "Ada");

    let err = add_player(&mut state, "   ", "b".into()).unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::InvalidPlayerName));
    assert_eq!(state.players.len(), 1);
}

#[test]
fn duplicate_names_compare_case_insensitively() {
    let mut state = SessionState::fresh();
    add_player(&mut state, "Ada", "a".into()).unwrap();
    let err = add_player(&mut state, "aDA", "b".into()).unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::DuplicatePlayerName));

    // composed and decomposed forms of the same name collide
    add_player(&mut state, "Jos\u{e9}", "c".into()).unwrap();
    let err = add_player(&mut state, "JOSE\u{301}", "d".into()).unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::DuplicatePlayerName));
    assert_eq!(state.players.len(), 2);
}

#[test]
fn name_key_normalizes() {
    assert_eq!(name_key(" Ada "), "ada");
    assert_eq!(name_key("Jose\u{301}"), name_key("jos\u{e9}"));
}

#[test]
fn roster_is_frozen_once_a_round_exists() {
    let mut state = session_with(&["A", "B"], DealingMode::Pyramid);
    play(&mut state, 1, &[(1, 1), (0, 0)]);
    let players = state.players.clone();

    let err = add_player(&mut state, "Late", "late".into()).unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::RosterLocked));
    let err = remove_player(&mut state, "p0").unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::RosterLocked));
    assert_eq!(state.players, players);
}

#[test]
fn removing_unknown_player_reports_false() {
    let mut state = session_with(&["A", "B"], DealingMode::Pyramid);
    assert!(!remove_player(&mut state, "nobody").unwrap());
    assert_eq!(state.players.len(), 2);
}

#[test]
fn find_player_by_id_or_name() {
    let state = session_with(&["Ada", "Bea"], DealingMode::Pyramid);
    assert_eq!(find_player(&state, "p1").map(|p| p.name.as_str()), Some("Bea"));
    assert_eq!(find_player(&state, "ADA").map(|p| p.id.as_str()), Some("p0"));
    assert!(find_player(&state, "Cy").is_none());
}

#[test]
fn max_hand_is_clamped_or_derived() {
    let mut state = session_with(&["A", "B", "C", "D"], DealingMode::Ascending);
    assert_eq!(set_max_hand(&mut state, Some(0)), 1);
    assert_eq!(set_max_hand(&mut state, Some(99)), 60);
    assert_eq!(set_max_hand(&mut state, Some(12)), 12);
    assert_eq!(set_max_hand(&mut state, None), 15);
    assert_eq!(state.settings.max_hand, Some(15));
}

#[test]
fn manual_hand_is_clamped_and_clearable() {
    let mut state = session_with(&["A", "B"], DealingMode::Manual);
    assert_eq!(set_manual_hand(&mut state, Some(80)), Some(60));
    assert_eq!(set_manual_hand(&mut state, Some(-2)), Some(1));
    assert_eq!(set_manual_hand(&mut state, None), None);
    assert_eq!(state.settings.manual_hand, None);
}

#[test]
fn mode_changes_are_recorded() {
    let mut state = session_with(&["A", "B"], DealingMode::Pyramid);
    set_mode(&mut state, DealingMode::Manual);
    assert_eq!(state.settings.mode, DealingMode::Manual);
}

#[test]
fn inputs_update_partially_and_ignore_strangers() {
    let mut state = session_with(&["A", "B"], DealingMode::Pyramid);
    assert!(set_input(&mut state, "p0", Some(2), None));
    assert!(set_input(&mut state, "p0", None, Some(1)));
    assert_eq!(
        state.current_inputs["p0"],
        CurrentInput {
            bid: Some(2),
            won: Some(1)
        }
    );
    assert!(!set_input(&mut state, "ghost", Some(1), Some(1)));
    assert!(!state.current_inputs.contains_key("ghost"));

    assert!(clear_input(&mut state, "p0"));
    assert_eq!(state.current_inputs["p0"], CurrentInput::default());
}
