//! Snapshot and event serialization for interface front ends.

use ninarow::{GameStatus, Mark, Session, SessionEvent, SessionView};
use serde_json::json;

#[test]
fn test_view_serializes_for_rendering() {
    let mut session = Session::new();
    for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 2), (0, 2)] {
        session.on_cell_activated(row, col).unwrap();
    }

    let value = serde_json::to_value(session.view()).unwrap();
    assert_eq!(value["size"], 3);
    assert_eq!(value["rows"][0], json!(["x", "x", "x"]));
    assert_eq!(value["rows"][2], json!([null, null, null]));
    assert_eq!(value["status"], json!({ "state": "won", "winner": "x" }));
    assert_eq!(value["current_mark"], "o");
    assert_eq!(value["turn"], 5);
    assert_eq!(value["symbols"], json!(["x", "o", "Δ", "Ω"]));
    assert_eq!(value["win_lines"][0]["direction"], "horizontal");
    assert_eq!(
        value["win_lines"][0]["cells"],
        json!([{ "row": 0, "col": 0 }, { "row": 0, "col": 1 }, { "row": 0, "col": 2 }])
    );
}

#[test]
fn test_view_round_trips() {
    let mut session = Session::new();
    session.on_cell_activated(1, 1).unwrap();
    session.expand();
    let view = session.view();

    let text = serde_json::to_string(&view).unwrap();
    let back: SessionView = serde_json::from_str(&text).unwrap();
    assert_eq!(back, view);
    assert_eq!(back.status, GameStatus::InProgress);
    assert_eq!(back.rows[2][2], Some(Mark::new('x')));
}

#[test]
fn test_events_parse_from_tagged_json() {
    let events: Vec<SessionEvent> = serde_json::from_value(json!([
        { "kind": "cell_activated", "row": 1, "col": 2 },
        { "kind": "expand" },
        { "kind": "set_win_size", "value": 4 },
        { "kind": "set_players", "value": 3 }
    ]))
    .unwrap();

    assert_eq!(
        events,
        vec![
            SessionEvent::CellActivated { row: 1, col: 2 },
            SessionEvent::Expand,
            SessionEvent::SetWinSize { value: 4 },
            SessionEvent::SetPlayers { value: 3 },
        ]
    );
}
