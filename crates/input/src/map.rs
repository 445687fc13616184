//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Key releases are ignored so terminals that report them do not double-move.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::MoveUp)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::MoveDown)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::MoveRight)
        }

        // New game
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char('n') | KeyCode::Char('N') => {
            Some(GameAction::NewGame)
        }

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Up)), Some(GameAction::MoveUp));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Down)), Some(GameAction::MoveDown));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left)), Some(GameAction::MoveLeft));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Right)), Some(GameAction::MoveRight));
    }

    #[test]
    fn test_vim_and_wasd_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('K'))), Some(GameAction::MoveUp));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('j'))), Some(GameAction::MoveDown));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('a'))), Some(GameAction::MoveLeft));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('D'))), Some(GameAction::MoveRight));
    }

    #[test]
    fn test_new_game_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('r'))), Some(GameAction::NewGame));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('N'))), Some(GameAction::NewGame));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key_event(release), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
