use super::mode::Mode;
use super::state::AppState;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Result<()> {
    match state.mode {
        Mode::Navigate => handle_navigate_mode(key, state),
        Mode::Insert => handle_insert_mode(key, state),
    }
    Ok(())
}

fn handle_navigate_mode(key: KeyEvent, state: &mut AppState) {
    match (key.code, key.modifiers) {
        // Navigation
        (KeyCode::Up, KeyModifiers::NONE) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
            state.move_cursor_up();
        }
        (KeyCode::Down, KeyModifiers::NONE) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
            state.move_cursor_down();
        }

        // Copy selected value to the clipboard
        (KeyCode::Enter, KeyModifiers::NONE) | (KeyCode::Char('y'), KeyModifiers::NONE) => {
            state.copy_selected();
        }

        // New value
        (KeyCode::Char('a'), KeyModifiers::NONE) | (KeyCode::Char('n'), KeyModifiers::NONE) => {
            state.input.clear();
            state.mode = Mode::Insert;
        }

        // Delete value
        (KeyCode::Char('d'), KeyModifiers::NONE) => {
            state.delete_selected();
        }

        // Help toggle
        (KeyCode::Char('?'), KeyModifiers::NONE) => {
            state.show_help = !state.show_help;
        }

        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => {
            state.should_quit = true;
        }

        _ => {}
    }
}

fn handle_insert_mode(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Esc => {
            state.input.clear();
            state.mode = Mode::Navigate;
        }
        KeyCode::Enter => {
            state.save_input();
            state.mode = Mode::Navigate;
        }
        KeyCode::Backspace => state.input.backspace(),
        KeyCode::Left => state.input.move_left(),
        KeyCode::Right => state.input.move_right(),
        KeyCode::Home => state.input.move_home(),
        KeyCode::End => state.input.move_end(),
        KeyCode::Char(c) => state.input.insert(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipboardWriter;
    use crate::store::ValueStore;
    use crate::ui::theme::Theme;
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    use tempfile::TempDir;

    fn setup_state() -> (TempDir, AppState) {
        let temp_dir = TempDir::new().unwrap();
        let store = ValueStore::new(temp_dir.path().join("clipboard-values.json"));
        let state = AppState::new(
            store,
            ClipboardWriter::with_strategies(Vec::new()),
            Theme::default(),
            Duration::from_millis(3000),
        );
        (temp_dir, state)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_q_quits() {
        let (_dir, mut state) = setup_state();
        handle_key_event(press(KeyCode::Char('q')), &mut state).unwrap();
        assert!(state.should_quit);
    }

    #[test]
    fn test_typing_a_value_and_committing_it() {
        let (_dir, mut state) = setup_state();

        handle_key_event(press(KeyCode::Char('a')), &mut state).unwrap();
        assert_eq!(state.mode, Mode::Insert);

        for c in "hi".chars() {
            handle_key_event(press(KeyCode::Char(c)), &mut state).unwrap();
        }
        handle_key_event(press(KeyCode::Enter), &mut state).unwrap();

        assert_eq!(state.mode, Mode::Navigate);
        assert_eq!(state.values, vec!["hi"]);
        assert_eq!(state.store.load().unwrap(), vec!["hi"]);
    }

    #[test]
    fn test_escape_discards_the_input() {
        let (_dir, mut state) = setup_state();

        handle_key_event(press(KeyCode::Char('n')), &mut state).unwrap();
        handle_key_event(press(KeyCode::Char('x')), &mut state).unwrap();
        handle_key_event(press(KeyCode::Esc), &mut state).unwrap();

        assert_eq!(state.mode, Mode::Navigate);
        assert_eq!(state.values, Vec::<String>::new());
        assert!(!state.store.path().exists());
    }

    #[test]
    fn test_d_deletes_the_selected_value() {
        let (_dir, mut state) = setup_state();
        state.store.add("gone").unwrap();
        state.refresh_from_store();

        handle_key_event(press(KeyCode::Char('d')), &mut state).unwrap();

        assert_eq!(state.values, Vec::<String>::new());
        assert_eq!(state.store.load().unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_navigation_keys_move_the_cursor() {
        let (_dir, mut state) = setup_state();
        state.store.add("one").unwrap();
        state.store.add("two").unwrap();
        state.refresh_from_store();

        handle_key_event(press(KeyCode::Char('j')), &mut state).unwrap();
        assert_eq!(state.cursor_position, 1);
        handle_key_event(press(KeyCode::Char('k')), &mut state).unwrap();
        assert_eq!(state.cursor_position, 0);
    }
}
