use crate::app::state::AppState;
use crate::ui::theme::Theme;
use chrono::Local;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const KEY_HELP: &str = " ↑↓ move · s sort · ⏎ details · g/a/w/m map · r reload · q quit ";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" sorted by {} ", state.sort_mode),
        Theme::status_bar(),
    ));

    if let Some(status) = &state.status {
        parts.push(Span::styled(format!("| {} ", status), Theme::status_error()));
    } else if let Some(updated) = state.last_update {
        let age = Local::now().signed_duration_since(updated).num_seconds();
        parts.push(Span::styled(
            format!("| updated {}s ago ", age.max(0)),
            Theme::status_bar(),
        ));
    } else {
        parts.push(Span::styled("| no data yet ", Theme::status_bar()));
    }

    // Pad to fill remaining space, key help pinned right
    let used: usize = parts.iter().map(|s| s.content.chars().count()).sum();
    let help_len = KEY_HELP.chars().count();
    let remaining = (area.width as usize).saturating_sub(used + help_len);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(KEY_HELP, Theme::key_hint()));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
