use crate::app::{AppState, Mode};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let available_width = area.width.saturating_sub(2) as usize;
    let mut items: Vec<ListItem> = Vec::new();

    for (idx, value) in state.values.iter().enumerate() {
        let is_cursor = idx == state.cursor_position && state.mode == Mode::Navigate;

        let style = if is_cursor {
            Style::default()
                .fg(state.theme.cursor)
                .add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(state.theme.foreground)
        };

        let marker = if is_cursor { "▸ " } else { "  " };
        let text = single_line_preview(value, available_width.saturating_sub(marker.width()));

        items.push(ListItem::new(Line::from(vec![
            Span::styled(marker.to_string(), style),
            Span::styled(text, style),
        ])));
    }

    if state.values.is_empty() && state.mode != Mode::Insert {
        items.push(ListItem::new(Line::from(Span::styled(
            "",
            Style::default(),
        ))));
        items.push(ListItem::new(Line::from(Span::styled(
            "  No saved values yet. Press 'a' to add some text!",
            Style::default().fg(state.theme.foreground),
        ))));
        items.push(ListItem::new(Line::from(Span::styled(
            "  Press '?' for help",
            Style::default().fg(state.theme.foreground),
        ))));
    }

    let title = format!(" Saved Values ({}) ", state.values.len());

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(Style::default().fg(state.theme.foreground));

    f.render_widget(list, area);
}

/// Flatten a value to one display line, eliding what does not fit.
fn single_line_preview(value: &str, max_width: usize) -> String {
    let flat: String = value
        .chars()
        .map(|c| if c == '\n' || c == '\t' { ' ' } else { c })
        .collect();

    if flat.width() <= max_width {
        return flat;
    }

    let mut out = String::new();
    let mut used = 0;
    for c in flat.chars() {
        let w = c.to_string().width();
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_short_values_pass_through() {
        assert_eq!(single_line_preview("hello", 20), "hello");
    }

    #[test]
    fn test_newlines_are_flattened() {
        assert_eq!(single_line_preview("a\nb\tc", 20), "a b c");
    }

    #[test]
    fn test_long_values_are_elided() {
        let preview = single_line_preview("abcdefghij", 6);
        assert!(preview.ends_with('…'));
        assert!(preview.width() <= 6);
    }
}
