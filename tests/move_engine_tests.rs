//! Move engine tests: fixed scenarios plus invariant sweeps over seeded random play.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tui_2048::core::{
    apply_move, can_move, has_available_merge, is_terminal, slide, spawn, Board, GameSession,
    ScoreTracker, TileIdGen,
};
use tui_2048::types::{Direction, BOARD_SIZE, CELL_COUNT, MAX_TILE_VALUE};

fn board_with_top_row(row: [u32; 4]) -> Board {
    Board::from_values([row, [0; 4], [0; 4], [0; 4]]).unwrap()
}

fn top_row(board: &Board) -> [u32; 4] {
    board.values()[0]
}

#[test]
fn test_pair_merges_and_merged_tile_stays_put() {
    let mut board = board_with_top_row([2, 2, 4, 0]);
    let result = apply_move(&mut board, Direction::Left);
    assert!(result.changed);
    assert_eq!(result.score_delta, 4);
    assert_eq!(top_row(&board), [4, 4, 0, 0]);
}

#[test]
fn test_each_pair_merges_once() {
    let mut board = board_with_top_row([2, 2, 2, 2]);
    let result = apply_move(&mut board, Direction::Left);
    assert!(result.changed);
    assert_eq!(result.score_delta, 8);
    assert_eq!(result.merges, 2);
    assert_eq!(top_row(&board), [4, 4, 0, 0]);
}

#[test]
fn test_tiles_slide_across_gap_and_merge() {
    let mut board = board_with_top_row([2, 0, 0, 2]);
    let result = apply_move(&mut board, Direction::Left);
    assert!(result.changed);
    assert_eq!(result.score_delta, 4);
    assert_eq!(top_row(&board), [4, 0, 0, 0]);
    assert_eq!(board.len(), 1);
}

#[test]
fn test_blocked_row_is_a_no_op() {
    let before = board_with_top_row([2, 4, 2, 4]);
    let mut board = before.clone();
    let result = apply_move(&mut board, Direction::Left);
    assert!(!result.changed);
    assert_eq!(result.score_delta, 0);
    assert_eq!(board, before);
    assert!(!can_move(&before, Direction::Left));
}

#[test]
fn test_last_empty_cell_decides_terminality() {
    // Checkerboard of 2/4 with one hole: nothing can merge, but the board is not full.
    let mut board = Board::from_values([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 0]]).unwrap();
    assert!(!has_available_merge(&board));
    assert!(!is_terminal(&board));

    // Keep drawing until the spawn produces a 2, which has no equal neighbour at (3, 3).
    let mut seed = 0;
    loop {
        let mut candidate = board.clone();
        let mut ids = TileIdGen::starting_after(candidate.max_id().unwrap());
        let mut rng = StdRng::seed_from_u64(seed);
        let tile = spawn(&mut candidate, &mut ids, &mut rng).unwrap();
        if tile.value == 2 {
            board = candidate;
            break;
        }
        seed += 1;
    }
    assert!(board.is_full());
    assert!(is_terminal(&board));
}

#[test]
fn test_right_and_vertical_moves() {
    let mut board = board_with_top_row([2, 2, 0, 4]);
    apply_move(&mut board, Direction::Right);
    assert_eq!(top_row(&board), [0, 0, 4, 4]);

    let mut board = Board::from_values([[2, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 0], [0, 0, 0, 0]]).unwrap();
    let result = apply_move(&mut board, Direction::Down);
    assert_eq!(result.score_delta, 4);
    let col: Vec<u32> = board.values().iter().map(|r| r[0]).collect();
    assert_eq!(col, vec![0, 0, 4, 4]);

    let result = apply_move(&mut board, Direction::Up);
    assert_eq!(result.score_delta, 8);
    assert_eq!(board.value_at(0, 0), 8);
    assert_eq!(board.len(), 1);
}

#[test]
fn test_slide_leaves_input_untouched() {
    let board = board_with_top_row([0, 0, 0, 2]);
    let (next, result) = slide(&board, Direction::Left);
    assert!(result.changed);
    assert_eq!(top_row(&board), [0, 0, 0, 2]);
    assert_eq!(top_row(&next), [2, 0, 0, 0]);
    // Sliding keeps identity.
    assert_eq!(next.tile_at(0, 0).unwrap().id, board.tile_at(0, 3).unwrap().id);
}

#[test]
fn test_random_play_preserves_invariants() {
    for seed in 0..40u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new();
        let mut ids = TileIdGen::new();
        spawn(&mut board, &mut ids, &mut rng);
        spawn(&mut board, &mut ids, &mut rng);

        for _ in 0..400 {
            if is_terminal(&board) {
                break;
            }
            let dir = Direction::ALL[rng.gen_range(0..4)];
            let before = board.clone();
            let mut after = board.clone();
            let result = apply_move(&mut after, dir);

            if !result.changed {
                // Idempotent no-op.
                assert_eq!(result.score_delta, 0);
                let mut again = after.clone();
                assert!(!apply_move(&mut again, dir).changed);
                assert_eq!(again.values(), before.values());
                continue;
            }

            // Merges conserve the value sum; each merge removes exactly one tile
            // and leaves exactly one just-merged tile.
            assert_eq!(after.value_sum(), before.value_sum());
            let merged = after.tiles().filter(|t| t.just_merged).count();
            assert_eq!(merged, result.merges as usize);
            assert_eq!(after.len() + merged, before.len());
            assert_eq!(result.score_delta, after.tiles().filter(|t| t.just_merged).map(|t| t.value).sum::<u32>());

            // Every surviving id existed before the move, at the same or a lower value.
            for tile in after.tiles() {
                let old = before.find(tile.id).expect("move invented a tile id");
                assert!(tile.value == old.value || tile.value == old.value * 2);
                assert!(!tile.is_new);
            }

            let new_tile = spawn(&mut after, &mut ids, &mut rng).expect("changed move leaves a hole");
            assert!(new_tile.value == 2 || new_tile.value == 4);
            assert_eq!(
                after.value_sum(),
                before.value_sum() + new_tile.value as u64
            );
            board = after;
        }
    }
}

#[test]
fn test_terminal_matches_definition_on_random_boards() {
    let mut rng = StdRng::seed_from_u64(2048);
    for _ in 0..2000 {
        let mut grid = [[0u32; 4]; 4];
        for row in grid.iter_mut() {
            for cell in row.iter_mut() {
                // Mostly full boards with few distinct values so both outcomes occur.
                *cell = if rng.gen_ratio(1, 30) { 0 } else { 2 << rng.gen_range(0..3u32) };
            }
        }
        let board = Board::from_values(grid).unwrap();

        let n = BOARD_SIZE as usize;
        let full = grid.iter().flatten().all(|&v| v != 0);
        let mut neighbour_pair = false;
        for r in 0..n {
            for c in 0..n {
                if r + 1 < n && grid[r][c] == grid[r + 1][c] && grid[r][c] != 0 {
                    neighbour_pair = true;
                }
                if c + 1 < n && grid[r][c] == grid[r][c + 1] && grid[r][c] != 0 {
                    neighbour_pair = true;
                }
            }
        }

        assert_eq!(is_terminal(&board), full && !neighbour_pair, "{grid:?}");
        assert_eq!(board.len() == CELL_COUNT, full);
        if is_terminal(&board) {
            assert!(Direction::ALL.iter().all(|&d| !can_move(&board, d)));
        }
    }
}

#[test]
fn test_session_no_op_keeps_board_and_score() {
    let board = board_with_top_row([2, 4, 8, 16]);
    let mut session = GameSession::from_board(board.clone(), StdRng::seed_from_u64(5), ScoreTracker::in_memory(0));

    let outcome = session.apply_move(Direction::Up);
    assert!(!outcome.changed);
    assert!(outcome.spawned.is_none());
    assert_eq!(session.board(), &board);
    assert_eq!(session.score(), 0);
    assert_eq!(session.moves(), 0);
}

#[test]
fn test_values_that_would_overflow_are_rejected() {
    assert!(Board::from_values([[1 << 31, 1 << 31, 0, 0], [0; 4], [0; 4], [0; 4]]).is_none());
    assert!(Board::from_values([[MAX_TILE_VALUE * 2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_none());
    assert!(Board::from_values([[MAX_TILE_VALUE, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_some());
}

#[test]
fn test_capped_tiles_stop_merging() {
    let half = MAX_TILE_VALUE / 2;
    let mut board = board_with_top_row([MAX_TILE_VALUE, MAX_TILE_VALUE, half, half]);
    let result = apply_move(&mut board, Direction::Left);

    assert!(result.changed);
    assert_eq!(result.merges, 1);
    assert_eq!(result.score_delta, MAX_TILE_VALUE);
    assert_eq!(top_row(&board), [MAX_TILE_VALUE, MAX_TILE_VALUE, MAX_TILE_VALUE, 0]);

    // Nothing left to merge, and nothing can slide into the hole from the left.
    assert!(!apply_move(&mut board, Direction::Left).changed);
    assert!(board.tiles().all(|t| t.value <= MAX_TILE_VALUE));
}
