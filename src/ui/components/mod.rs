pub mod status_bar;
pub mod value_list;

use crate::app::{AppState, Mode};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, state: &AppState) {
    let input_height = if state.mode == Mode::Insert { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(input_height), // New value input (insert mode only)
            Constraint::Min(1),               // Saved values
            Constraint::Length(1),            // Status bar
        ])
        .split(f.area());

    if state.mode == Mode::Insert {
        render_input(f, state, chunks[0]);
    }

    value_list::render(f, state, chunks[1]);
    status_bar::render(f, state, chunks[2]);

    if state.show_help {
        render_help_overlay(f, state);
    }
}

fn render_input(f: &mut Frame, state: &AppState, area: Rect) {
    use ratatui::style::Modifier;
    use ratatui::text::{Line, Span};

    let (before, under, after) = state.input.split_at_cursor();

    let cursor_style = Style::default()
        .bg(state.theme.cursor)
        .fg(state.theme.background)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![Span::styled(before.to_string(), Style::default())];
    if under.is_empty() {
        spans.push(Span::styled("█", Style::default().fg(state.theme.cursor)));
    } else {
        spans.push(Span::styled(under.to_string(), cursor_style));
        spans.push(Span::styled(after.to_string(), Style::default()));
    }

    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Enter text to save "),
    );

    f.render_widget(input, area);
}

fn render_help_overlay(f: &mut Frame, state: &AppState) {
    let help_text = r#"
    CLIP-TUI Help

    Navigate Mode:
      ↑/↓ or j/k    Move cursor
      Enter or y    Copy value to clipboard
      a or n        Save a new value
      d             Delete value
      ?             Toggle help
      q             Quit

    Insert Mode:
      Esc           Cancel
      Enter         Save value
      ←/→           Move cursor
      Home/End      Jump to start/end
      Backspace     Delete character
    "#;

    // Center the help popup
    let area = centered_rect(60, 60, f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(state.theme.background));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(state.theme.foreground))
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
