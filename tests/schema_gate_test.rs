//! Snapshot JSON shape: field names are camelCase and stable for external renderers.

use tui_2048::core::{Board, GameSession, GameSnapshot, ScoreTracker};

use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn snapshot_serializes_with_camel_case_fields() {
    let board = Board::from_values([[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 4]]).unwrap();
    let snap = GameSession::from_board(board, StdRng::seed_from_u64(1), ScoreTracker::in_memory(16)).snapshot();

    let json = serde_json::to_value(&snap).unwrap();
    let obj = json.as_object().unwrap();
    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["bestScore", "board", "episodeId", "isOver", "maxTile", "moves", "score", "tiles"]
    );

    assert_eq!(json["bestScore"], 16);
    assert_eq!(json["board"][3][3], 4);
    assert_eq!(json["maxTile"], 4);

    let tiles = json["tiles"].as_array().unwrap();
    assert_eq!(tiles.len(), 2);
    assert_eq!(
        tiles[0],
        serde_json::json!({
            "id": 1,
            "value": 2,
            "row": 0,
            "col": 0,
            "isNew": false,
            "justMerged": false,
        })
    );
}

#[test]
fn snapshot_json_parses_back() {
    let snap = GameSession::new(8).snapshot();
    let text = serde_json::to_string(&snap).unwrap();
    let back: GameSnapshot = serde_json::from_str(&text).unwrap();
    assert_eq!(back, snap);
}
