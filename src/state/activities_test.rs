use super::*;

fn activity(max: u32, participants: &[&str]) -> Activity {
    Activity {
        description: "desc".to_owned(),
        schedule: "Mon".to_owned(),
        max_participants: max,
        participants: participants.iter().map(|p| (*p).to_owned()).collect(),
    }
}

// =============================================================
// Wire shape
// =============================================================

const CHESS_JSON: &str =
    r#"{"Chess":{"description":"d","schedule":"Mon","max_participants":2,"participants":[]}}"#;

#[test]
fn snapshot_deserializes_wire_shape() {
    let snapshot: Snapshot = serde_json::from_str(CHESS_JSON).unwrap();
    assert_eq!(snapshot.len(), 1);

    let chess = &snapshot["Chess"];
    assert_eq!(chess.description, "d");
    assert_eq!(chess.schedule, "Mon");
    assert_eq!(chess.max_participants, 2);
    assert!(chess.participants.is_empty());
}

#[test]
fn snapshot_deserializes_participant_emails() {
    let json = r#"{"Art":{"description":"d","schedule":"Tue","max_participants":3,"participants":["a@x.com","b@x.com"]}}"#;
    let snapshot: Snapshot = serde_json::from_str(json).unwrap();
    assert_eq!(snapshot["Art"].participants, vec!["a@x.com", "b@x.com"]);
}

// =============================================================
// Spots left
// =============================================================

#[test]
fn spots_left_is_capacity_minus_participants() {
    assert_eq!(activity(2, &[]).spots_left(), 2);
    assert_eq!(activity(5, &["a@x.com", "b@x.com"]).spots_left(), 3);
}

#[test]
fn spots_left_saturates_at_zero() {
    assert_eq!(activity(1, &["a@x.com", "b@x.com"]).spots_left(), 0);
}

// =============================================================
// ActivitiesState transitions
// =============================================================

#[test]
fn default_state_has_no_snapshot() {
    let state = ActivitiesState::default();
    assert!(state.snapshot.is_none());
    assert!(!state.load_failed);
    assert!(state.activity_names().is_empty());
}

#[test]
fn loaded_replaces_snapshot_wholesale() {
    let mut state = ActivitiesState::default();
    state.loaded(Snapshot::from([("Chess".to_owned(), activity(2, &[]))]));
    state.loaded(Snapshot::from([("Art".to_owned(), activity(3, &[]))]));

    assert_eq!(state.activity_names(), vec!["Art"]);
}

#[test]
fn loaded_clears_failure_marker() {
    let mut state = ActivitiesState::default();
    state.mark_load_failed();
    state.loaded(Snapshot::new());
    assert!(!state.load_failed);
}

#[test]
fn failed_load_keeps_previous_snapshot() {
    let mut state = ActivitiesState::default();
    state.loaded(Snapshot::from([("Chess".to_owned(), activity(2, &[]))]));
    state.mark_load_failed();

    assert!(state.load_failed);
    assert_eq!(state.activity_names(), vec!["Chess"]);
}

// =============================================================
// Dropdown derivation
// =============================================================

#[test]
fn activity_names_are_sorted_and_idempotent() {
    let mut state = ActivitiesState::default();
    state.loaded(Snapshot::from([
        ("Drama".to_owned(), activity(4, &[])),
        ("Art".to_owned(), activity(3, &[])),
        ("Chess".to_owned(), activity(2, &[])),
    ]));

    let first = state.activity_names();
    let second = state.activity_names();
    assert_eq!(first, vec!["Art", "Chess", "Drama"]);
    assert_eq!(first, second);
}
