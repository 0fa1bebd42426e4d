use serde_json::json;

use quantum_chess::chess::setup::Setup;
use quantum_chess::config::GameConfig;
use quantum_chess::error::EngineError;
use quantum_chess::game::Game;
use quantum_chess::snapshot::{Move, Snapshot};

fn piece(color: u8, a: &str, b: &str) -> serde_json::Value {
    json!({
        "action": "PauliX",
        "color": color,
        "initialState": { a: [0.5, 0.0], b: [0.5, 0.0] },
        "stateSpace": [a, b],
        "state": { a: [0.5, 0.0], b: [0.5, 0.0] },
        "moved": false,
    })
}

fn board(entries: &[(usize, u32)]) -> Vec<u32> {
    let mut cells = vec![0; 64];
    for &(sq, id) in entries {
        cells[sq] = id;
    }
    cells
}

fn entangled_pair_message() -> serde_json::Value {
    let record = json!({
        "elements": [1, 2],
        "state": [[0.5, 0.0], [0.0, 0.0], [0.0, 0.0], [0.5, 0.0]],
    });
    json!({
        "board": board(&[(40, 1), (24, 2), (7, 3)]),
        "pieces": {
            "1": piece(0, "Rook", "Pawn"),
            "2": piece(1, "Bishop", "Knight"),
            "3": piece(1, "Queen", "Pawn"),
        },
        "entanglements": { "1": record.clone(), "2": record, "3": null },
    })
}

#[test]
fn move_decodes_from_index_pair() {
    let mv: Move = serde_json::from_str("[48, 40]").unwrap();
    assert_eq!(mv, Move::new(48, 40));
    assert_eq!(serde_json::to_string(&mv).unwrap(), "[48,40]");
}

#[test]
fn identical_records_are_restored_as_one_shared_record() {
    let snapshot: Snapshot = serde_json::from_value(entangled_pair_message()).unwrap();
    let (board, pieces, ents) = snapshot.restore().unwrap();

    assert_eq!(board.id_at(24), 2);
    assert_eq!(pieces.len(), 3);
    assert_eq!(ents.record_count(), 1);
    assert!(ents.shares_group(1, 2));
    assert!(!ents.is_entangled(3));
}

#[test]
fn capture_after_restore_round_trips_through_json() {
    let snapshot: Snapshot = serde_json::from_value(entangled_pair_message()).unwrap();
    let game = Game::from_snapshot(snapshot.clone(), GameConfig::new().with_seed(Some(1))).unwrap();

    let captured = game.snapshot();
    assert_eq!(captured.entanglements.len(), 2);
    assert_eq!(captured.entanglements[&1], captured.entanglements[&2]);
    assert_eq!(captured.pieces, snapshot.pieces);
    assert_eq!(captured.board, snapshot.board);

    let text = serde_json::to_string(&captured).unwrap();
    let decoded: Snapshot = serde_json::from_str(&text).unwrap();
    assert_eq!(decoded, captured);
}

#[test]
fn game_state_is_visible_in_next_snapshot() {
    let snapshot: Snapshot = serde_json::from_value(entangled_pair_message()).unwrap();
    let mut game = Game::from_snapshot(snapshot, GameConfig::new().with_seed(Some(5))).unwrap();

    // White 1 captures Black 2, which it shares a record with.
    game.board.set(32, 2);
    game.board.clear(24);
    game.apply_move(Move::new(40, 32)).unwrap();

    let after = game.snapshot();
    assert!(after.entanglements.is_empty());
    assert!(!after.pieces.contains_key(&2));
    assert!(after.pieces[&1].moved);
    assert_eq!(after.board.id_at(32), 1);
}

#[test]
fn malformed_record_is_rejected() {
    let mut message = entangled_pair_message();
    message["entanglements"]["1"]["state"] = json!([[1.0, 0.0], [0.0, 0.0], [0.0, 0.0]]);
    let snapshot: Snapshot = serde_json::from_value(message).unwrap();
    assert_eq!(
        snapshot.restore().unwrap_err(),
        EngineError::MalformedEntanglement(1)
    );
}

#[test]
fn record_must_list_its_own_id() {
    let mut message = entangled_pair_message();
    message["entanglements"]["3"] = message["entanglements"]["1"].clone();
    let snapshot: Snapshot = serde_json::from_value(message).unwrap();
    assert_eq!(
        snapshot.restore().unwrap_err(),
        EngineError::MalformedEntanglement(3)
    );
}

#[test]
fn board_ids_must_be_registered() {
    let mut message = entangled_pair_message();
    message["board"][10] = json!(9);
    let snapshot: Snapshot = serde_json::from_value(message).unwrap();
    assert_eq!(
        snapshot.restore().unwrap_err(),
        EngineError::InvalidPieceAccess(9)
    );
}

#[test]
fn short_board_fails_to_decode() {
    let mut message = entangled_pair_message();
    message["board"] = json!([0, 1, 2]);
    assert!(serde_json::from_value::<Snapshot>(message).is_err());
}

#[test]
fn classical_setup_snapshot_has_no_entanglements() {
    let game = Game::new(Setup::classical(), GameConfig::new());
    let snap = game.snapshot();
    assert_eq!(snap.pieces.len(), 32);
    assert!(snap.entanglements.is_empty());
    assert_eq!(snap.board.id_at(4), 5);
}
