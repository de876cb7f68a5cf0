use super::input::InputBuffer;
use super::mode::Mode;
use crate::clipboard::ClipboardWriter;
use crate::notifier::{Kind, Notifier};
use crate::store::ValueStore;
use crate::ui::theme::Theme;
use std::time::{Duration, Instant};

pub struct StatusMessage {
    pub kind: Kind,
    pub title: String,
    pub body: String,
    pub shown_at: Instant,
}

pub struct AppState {
    pub store: ValueStore,
    pub writer: ClipboardWriter,
    /// Rendering mirror of the persisted list. Replaced wholesale by the
    /// list each store operation returns; never mutated directly.
    pub values: Vec<String>,
    pub cursor_position: usize,
    pub mode: Mode,
    pub input: InputBuffer,
    pub should_quit: bool,
    pub show_help: bool,
    pub theme: Theme,
    pub status: Option<StatusMessage>,
    pub status_timeout: Duration,
}

impl AppState {
    pub fn new(store: ValueStore, writer: ClipboardWriter, theme: Theme, status_timeout: Duration) -> Self {
        Self {
            store,
            writer,
            values: Vec::new(),
            cursor_position: 0,
            mode: Mode::Navigate,
            input: InputBuffer::default(),
            should_quit: false,
            show_help: false,
            theme,
            status: None,
            status_timeout,
        }
    }

    /// Refresh the mirror from the persisted record. A corrupt record is
    /// reported and rendered as an empty list; a read failure keeps the
    /// current mirror.
    pub fn refresh_from_store(&mut self) {
        match self.store.load() {
            Ok(values) => self.values = values,
            Err(err) if err.is_corrupt() => {
                tracing::warn!(%err, "saved values are corrupt");
                self.values = Vec::new();
                self.notify(Kind::Error, "Error", "Failed to load saved values");
            }
            Err(err) => {
                tracing::error!(%err, "could not read saved values");
                self.notify(Kind::Error, "Error", "Failed to load saved values");
            }
        }
        self.clamp_cursor();
    }

    /// Persist the input buffer as a new value. Blank input is ignored.
    pub fn save_input(&mut self) {
        if self.input.is_blank() {
            self.input.clear();
            return;
        }

        let value = self.input.take();
        match self.store.add(&value) {
            Ok(values) => {
                self.values = values;
                self.cursor_position = self.values.len().saturating_sub(1);
            }
            Err(err) => {
                tracing::error!(%err, "could not save value");
                self.notify(Kind::Error, "Error", "Failed to save value");
            }
        }
    }

    /// Delete the value under the cursor (and any duplicates of it).
    pub fn delete_selected(&mut self) {
        let Some(value) = self.selected_value().cloned() else {
            return;
        };

        match self.store.remove(&value) {
            Ok(values) => {
                self.values = values;
                self.clamp_cursor();
            }
            Err(err) => {
                tracing::error!(%err, "could not delete value");
                self.notify(Kind::Error, "Error", "Failed to delete value");
            }
        }
    }

    /// Copy the value under the cursor to the system clipboard.
    pub fn copy_selected(&mut self) {
        let Some(value) = self.selected_value().cloned() else {
            return;
        };

        if self.writer.write(&value) {
            self.notify(Kind::Success, "Success", "Value copied to clipboard");
        } else {
            self.notify(Kind::Error, "Error", "Failed to copy to clipboard");
        }
    }

    pub fn selected_value(&self) -> Option<&String> {
        self.values.get(self.cursor_position)
    }

    pub fn move_cursor_up(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_down(&mut self) {
        if !self.values.is_empty() && self.cursor_position < self.values.len() - 1 {
            self.cursor_position += 1;
        }
    }

    pub fn clamp_cursor(&mut self) {
        if !self.values.is_empty() {
            self.cursor_position = self.cursor_position.min(self.values.len() - 1);
        } else {
            self.cursor_position = 0;
        }
    }

    pub fn clear_expired_status_message(&mut self) {
        if let Some(status) = &self.status {
            if status.shown_at.elapsed() >= self.status_timeout {
                self.status = None;
            }
        }
    }
}

impl Notifier for AppState {
    fn notify(&mut self, kind: Kind, title: &str, body: &str) {
        self.status = Some(StatusMessage {
            kind,
            title: title.to_string(),
            body: body.to_string(),
            shown_at: Instant::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
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

    #[test]
    fn test_save_input_appends_and_refreshes_mirror() {
        let (_dir, mut state) = setup_state();

        for c in "hello".chars() {
            state.input.insert(c);
        }
        state.save_input();

        assert_eq!(state.values, vec!["hello"]);
        assert_eq!(state.cursor_position, 0);
        assert_eq!(state.input.text(), "");
    }

    #[test]
    fn test_save_blank_input_changes_nothing() {
        let (_dir, mut state) = setup_state();

        state.input.insert(' ');
        state.save_input();

        assert_eq!(state.values, Vec::<String>::new());
        assert!(!state.store.path().exists());
    }

    #[test]
    fn test_delete_selected_removes_duplicates_and_clamps() {
        let (_dir, mut state) = setup_state();
        state.store.add("a").unwrap();
        state.store.add("b").unwrap();
        state.store.add("a").unwrap();
        state.refresh_from_store();

        state.cursor_position = 2;
        state.delete_selected();

        assert_eq!(state.values, vec!["b"]);
        assert_eq!(state.cursor_position, 0);
    }

    #[test]
    fn test_copy_failure_sets_error_status() {
        let (_dir, mut state) = setup_state();
        state.store.add("snippet").unwrap();
        state.refresh_from_store();

        // The writer was built with no strategies, so the copy fails.
        state.copy_selected();

        let status = state.status.as_ref().unwrap();
        assert_eq!(status.kind, Kind::Error);
        assert_eq!(status.body, "Failed to copy to clipboard");
    }

    #[test]
    fn test_refresh_falls_back_to_empty_on_corrupt_record() {
        let (_dir, mut state) = setup_state();
        fs::write(state.store.path(), "not json").unwrap();

        state.refresh_from_store();

        assert_eq!(state.values, Vec::<String>::new());
        assert_eq!(state.status.as_ref().unwrap().kind, Kind::Error);
    }

    #[test]
    fn test_status_message_expires() {
        let (_dir, mut state) = setup_state();
        state.status_timeout = Duration::from_millis(0);

        state.notify(Kind::Success, "Success", "done");
        state.clear_expired_status_message();

        assert!(state.status.is_none());
    }

    #[test]
    fn test_cursor_navigation_stays_in_bounds() {
        let (_dir, mut state) = setup_state();
        state.store.add("one").unwrap();
        state.store.add("two").unwrap();
        state.refresh_from_store();

        state.move_cursor_up();
        assert_eq!(state.cursor_position, 0);

        state.move_cursor_down();
        state.move_cursor_down();
        assert_eq!(state.cursor_position, 1);
    }
}
