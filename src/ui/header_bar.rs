use crate::app::state::AppState;
use crate::stations::SortMode;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Header row inside the card: entry count on the left, the sort-mode
/// selector on the right (the two-option `<select>` of the original).
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let count_text = format!(" {} stations", state.items.len());

    let selector = [SortMode::Distance, SortMode::Price];
    let mut right: Vec<Span> = vec![Span::styled("Sort: ", Theme::muted())];
    for mode in selector {
        let style = if state.sort_mode == mode {
            Theme::sort_active()
        } else {
            Theme::sort_inactive()
        };
        right.push(Span::styled(format!(" {} ", mode.label()), style));
        right.push(Span::raw(" "));
    }

    let right_width: usize = right.iter().map(|s| s.content.chars().count()).sum();
    let pad = (area.width as usize)
        .saturating_sub(count_text.chars().count() + right_width);

    let mut parts = vec![Span::styled(count_text, Theme::muted()), Span::raw(" ".repeat(pad))];
    parts.extend(right);

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
