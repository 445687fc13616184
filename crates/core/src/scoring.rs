//! Scoring module - running score and persisted best score
//!
//! Every merge is worth the value of the tile it produces. The tracker adds
//! each move's delta to the running score and, whenever the running score
//! overtakes the best score, raises the best score and writes it through the
//! key-value store. Store failures are logged and otherwise ignored: losing a
//! best-score write must never cost the player a move.

use std::fmt;
use std::sync::Arc;

use crate::store::KeyValueStore;
use crate::types::BEST_SCORE_KEY;

/// Score and best-score bookkeeping
#[derive(Clone, Default)]
pub struct ScoreTracker {
    score: u32,
    best: u32,
    store: Option<Arc<dyn KeyValueStore>>,
}

impl fmt::Debug for ScoreTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoreTracker")
            .field("score", &self.score)
            .field("best", &self.best)
            .field("persistent", &self.store.is_some())
            .finish()
    }
}

impl ScoreTracker {
    /// A tracker with no persistence and the given starting best.
    pub fn in_memory(best: u32) -> Self {
        Self {
            score: 0,
            best,
            store: None,
        }
    }

    /// A tracker whose best score is read once from `store` and written back
    /// on every improvement.
    ///
    /// A missing or unreadable entry starts the best score at 0.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let best = match store.get(BEST_SCORE_KEY) {
            Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|err| {
                log::warn!("ignoring unparseable best score {raw:?}: {err}");
                0
            }),
            Ok(None) => 0,
            Err(err) => {
                log::warn!("could not read best score: {err}");
                0
            }
        };
        log::info!("best score loaded: {best}");
        Self {
            score: 0,
            best,
            store: Some(store),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Add a move's merge points. Returns true if the best score went up.
    pub fn add(&mut self, delta: u32) -> bool {
        self.score = self.score.saturating_add(delta);
        if self.score <= self.best {
            return false;
        }
        self.best = self.score;
        self.persist_best();
        true
    }

    /// Start a new session: score back to 0, best kept.
    pub fn reset(&mut self) {
        self.score = 0;
    }

    fn persist_best(&self) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(err) = store.set(BEST_SCORE_KEY, &self.best.to_string()) {
            log::warn!("could not persist best score {}: {err}", self.best);
        }
    }
}
