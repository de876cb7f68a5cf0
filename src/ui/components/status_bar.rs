use crate::app::AppState;
use crate::notifier::Kind;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let base_style = Style::default()
        .fg(state.theme.status_bar_fg)
        .bg(state.theme.status_bar_bg);

    // A live notification takes over the hint slot until it expires.
    let (middle, middle_style) = match &state.status {
        Some(status) => {
            let color = match status.kind {
                Kind::Success => state.theme.success,
                Kind::Error => state.theme.error,
            };
            (
                format!("{}: {}", status.title, status.body),
                base_style.fg(color).add_modifier(Modifier::BOLD),
            )
        }
        None => ("? help  q quit".to_string(), base_style),
    };

    let left_content = format!(" {} | {} values", state.mode, state.values.len());
    let version_text = format!("v{VERSION}");

    let padding = area.width.saturating_sub(
        left_content.len() as u16 + middle.len() as u16 + version_text.len() as u16 + 3,
    );

    let status = Paragraph::new(Line::from(vec![
        Span::styled(left_content, base_style),
        Span::styled(" ", base_style),
        Span::styled(middle, middle_style),
        Span::styled(format!(" {:>width$} ", "", width = padding as usize), base_style),
        Span::styled(version_text, base_style),
    ]));

    f.render_widget(status, area);
}
