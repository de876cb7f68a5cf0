use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use clip_tui::app::AppState;
use clip_tui::cli::{Cli, Commands};
use clip_tui::clipboard::ClipboardWriter;
use clip_tui::config::Config;
use clip_tui::notifier::{ConsoleNotifier, Kind, Notifier};
use clip_tui::store::ValueStore;
use clip_tui::ui;
use clip_tui::ui::theme::Theme;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let store = ValueStore::open_default()?;

    match cli.command {
        Some(Commands::Add { value }) => handle_add(&store, &value),
        Some(Commands::Show) => handle_show(&store),
        Some(Commands::Copy { position }) => handle_copy(&store, position),
        Some(Commands::Remove { position }) => handle_remove(&store, position),
        None => {
            // No command - launch TUI
            let theme = Theme::from_config(&config);
            let timeout = Duration::from_millis(config.status_timeout_ms);
            let state = AppState::new(store, ClipboardWriter::new(), theme, timeout);

            ui::run_tui(state)
        }
    }
}

fn handle_add(store: &ValueStore, value: &str) -> Result<()> {
    let mut notifier = ConsoleNotifier;

    if value.trim().is_empty() {
        notifier.notify(Kind::Error, "Error", "Nothing to save");
        return Ok(());
    }

    match store.add(value) {
        Ok(_) => notifier.notify(Kind::Success, "Success", "Value saved"),
        Err(err) => {
            tracing::error!(%err, "could not save value");
            notifier.notify(Kind::Error, "Error", "Failed to save value");
        }
    }

    Ok(())
}

fn handle_show(store: &ValueStore) -> Result<()> {
    let values = load_or_empty(store);

    if values.is_empty() {
        println!("No saved values yet!");
        return Ok(());
    }

    for (idx, value) in values.iter().enumerate() {
        println!("{}. {}", idx + 1, value);
    }

    Ok(())
}

fn handle_copy(store: &ValueStore, position: usize) -> Result<()> {
    let mut notifier = ConsoleNotifier;

    let values = load_or_empty(store);
    let Some(value) = position.checked_sub(1).and_then(|i| values.get(i)) else {
        notifier.notify(Kind::Error, "Error", "No value at that position");
        return Ok(());
    };

    if ClipboardWriter::new().write(value) {
        notifier.notify(Kind::Success, "Success", "Value copied to clipboard");
    } else {
        notifier.notify(Kind::Error, "Error", "Failed to copy to clipboard");
    }

    Ok(())
}

fn handle_remove(store: &ValueStore, position: usize) -> Result<()> {
    let mut notifier = ConsoleNotifier;

    let values = load_or_empty(store);
    let Some(value) = position.checked_sub(1).and_then(|i| values.get(i)) else {
        notifier.notify(Kind::Error, "Error", "No value at that position");
        return Ok(());
    };

    match store.remove(value) {
        Ok(_) => notifier.notify(Kind::Success, "Success", "Value deleted"),
        Err(err) => {
            tracing::error!(%err, "could not delete value");
            notifier.notify(Kind::Error, "Error", "Failed to delete value");
        }
    }

    Ok(())
}

/// A corrupt record is reported once and shown as an empty list; the
/// store stays usable.
fn load_or_empty(store: &ValueStore) -> Vec<String> {
    match store.load() {
        Ok(values) => values,
        Err(err) => {
            tracing::warn!(%err, "could not load saved values");
            ConsoleNotifier.notify(Kind::Error, "Error", "Failed to load saved values");
            Vec::new()
        }
    }
}
