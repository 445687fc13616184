//! Terminal 2048 runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `tui_2048::term`. The loop is
//! event driven: nothing is redrawn until a key or resize arrives.

use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_2048::config::AppConfig;
use tui_2048::core::{GameSession, GameSnapshot, KeyValueStore, MemoryStore, ScoreTracker};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::logging;
use tui_2048::store::{JsonFileStore, WriteBehindStore};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(config.log_path.as_deref())?;
    info!("starting with {config:?}");

    let mut session = GameSession::with_rng(rng_for(&config), ScoreTracker::load(open_store(&config)));

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &mut session));

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(
        "exiting: score {} best {} after {} moves",
        session.score(),
        session.best_score(),
        session.moves()
    );
    result
}

fn rng_for(config: &AppConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Best-score store for this run. Falls back to memory if the file cannot be used.
fn open_store(config: &AppConfig) -> Arc<dyn KeyValueStore> {
    let Some(path) = config.best_path.as_deref() else {
        return Arc::new(MemoryStore::new());
    };

    let opened = JsonFileStore::open(path).and_then(|file| WriteBehindStore::new(Arc::new(file)));
    match opened {
        Ok(store) => Arc::new(store),
        Err(err) => {
            warn!("best score file {} unavailable, keeping it in memory: {err}", path.display());
            Arc::new(MemoryStore::new())
        }
    }
}

fn run(term: &mut TerminalRenderer, session: &mut GameSession) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            session.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    // Even a no-op expires the highlight flags.
                    session.apply_action(action);
                    dirty = true;
                }
            }
            Event::Resize(_, _) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }
}
