//! Game state module - one game session
//!
//! The session ties the components together and runs the move pipeline one
//! command at a time:
//!
//! 1. the move engine slides/merges a copy of the board
//! 2. if nothing changed, the session is left exactly as it was
//! 3. otherwise the copy is committed, one tile spawns, the merge points are
//!    scored, and the terminal detector runs on the post-spawn board
//!
//! Once the game is over every move is a no-op until [`GameSession::new_game`].

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::moves::{apply_move_with_locks, MergeLocks};
use crate::scoring::ScoreTracker;
use crate::snapshot::{GameSnapshot, TileSnapshot};
use crate::spawn::spawn;
use crate::store::KeyValueStore;
use crate::terminal::is_terminal;
use crate::tile::{Tile, TileIdGen};
use crate::types::{Direction, GameAction, INITIAL_TILES};

/// What a single command did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    pub changed: bool,
    pub score_delta: u32,
    pub spawned: Option<Tile>,
    /// Terminal flag after the command.
    pub is_over: bool,
}

/// A running game
#[derive(Debug, Clone)]
pub struct GameSession<R = StdRng> {
    board: Board,
    /// Scratch board the move engine works on before a move is committed.
    scratch: Board,
    locks: MergeLocks,
    rng: R,
    ids: TileIdGen,
    scores: ScoreTracker,
    over: bool,
    /// Monotonic episode id (increments on new game).
    episode_id: u32,
    /// State-changing moves in the current episode.
    moves: u32,
}

impl GameSession<StdRng> {
    /// New game with a seeded RNG and no persistence
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), ScoreTracker::default())
    }

    /// New game with a seeded RNG and a persisted best score
    pub fn with_store(seed: u64, store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), ScoreTracker::load(store))
    }
}

impl<R: Rng> GameSession<R> {
    /// Start a game on an empty board with two spawned tiles.
    pub fn with_rng(rng: R, scores: ScoreTracker) -> Self {
        let mut session = Self::from_board(Board::new(), rng, scores);
        session.spawn_initial();
        session
    }

    /// Resume from an arbitrary board (no spawns).
    ///
    /// Tile ids continue after the largest id already on the board.
    pub fn from_board(board: Board, rng: R, scores: ScoreTracker) -> Self {
        let ids = board
            .max_id()
            .map_or_else(TileIdGen::new, TileIdGen::starting_after);
        let over = is_terminal(&board);
        Self {
            scratch: board.clone(),
            board,
            locks: MergeLocks::default(),
            rng,
            ids,
            scores,
            over,
            episode_id: 0,
            moves: 0,
        }
    }

    fn spawn_initial(&mut self) {
        for _ in 0..INITIAL_TILES {
            spawn(&mut self.board, &mut self.ids, &mut self.rng);
        }
    }

    /// Throw away the board and start over. The best score survives.
    pub fn new_game(&mut self) {
        self.board.clear();
        self.scores.reset();
        self.over = false;
        self.moves = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.spawn_initial();
        log::info!("new game (episode {})", self.episode_id);
    }

    /// Run one direction command through the pipeline
    pub fn apply_move(&mut self, dir: Direction) -> MoveOutcome {
        if self.over {
            return MoveOutcome {
                is_over: true,
                ..MoveOutcome::default()
            };
        }

        self.scratch.clone_from(&self.board);
        let result = apply_move_with_locks(&mut self.scratch, dir, &mut self.locks);
        if !result.changed {
            // Nothing moved, but the flags from the previous step still expire.
            self.board.clear_transient_flags();
            return MoveOutcome::default();
        }

        std::mem::swap(&mut self.board, &mut self.scratch);
        let spawned = spawn(&mut self.board, &mut self.ids, &mut self.rng);
        self.scores.add(result.score_delta);
        self.moves = self.moves.wrapping_add(1);
        self.over = is_terminal(&self.board);
        if self.over {
            log::info!(
                "game over after {} moves: score {}, max tile {}",
                self.moves,
                self.scores.score(),
                self.board.max_value()
            );
        }

        MoveOutcome {
            changed: true,
            score_delta: result.score_delta,
            spawned,
            is_over: self.over,
        }
    }

    /// Apply a game action. Returns true if the session changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action.direction() {
            Some(dir) => self.apply_move(dir).changed,
            None => {
                self.new_game();
                true
            }
        }
    }

    /// Apply a textual command (`"left"`, `"moveUp"`, `"newGame"`, ...).
    ///
    /// Unrecognized commands are ignored.
    pub fn apply_command(&mut self, command: &str) -> bool {
        match GameAction::from_str(command) {
            Some(action) => self.apply_action(action),
            None => {
                log::debug!("ignoring unknown command {command:?}");
                false
            }
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.scores.score()
    }

    pub fn best_score(&self) -> u32 {
        self.scores.best()
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.tiles.clear();
        out.tiles
            .extend(self.board.tiles().map(|&t| TileSnapshot::from(t)));
        self.board.write_values(&mut out.board);
        out.score = self.scores.score();
        out.best_score = self.scores.best();
        out.is_over = self.over;
        out.episode_id = self.episode_id;
        out.moves = self.moves;
        out.max_tile = self.board.max_value();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameSession<StdRng> {
    fn default() -> Self {
        Self::new(1)
    }
}
