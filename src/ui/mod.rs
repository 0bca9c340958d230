mod header_bar;
mod layout;
mod station_list;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let card_layout = layout::compute_layout(frame.area(), state.config.max_height);

    let block = Block::default()
        .title(" ⛽ Nearby Fuel Stations ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(card_layout.card);
    frame.render_widget(block, card_layout.card);

    if inner.height >= 3 {
        let header_area = Rect::new(inner.x, inner.y, inner.width, 1);
        let sep_area = Rect::new(inner.x, inner.y + 1, inner.width, 1);
        let list_area = Rect::new(
            inner.x,
            inner.y + 2,
            inner.width,
            inner.height.saturating_sub(2),
        );

        header_bar::render(frame, header_area, state);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "─".repeat(inner.width as usize),
                Theme::border(),
            ))),
            sep_area,
        );
        station_list::render(frame, list_area, state);
    }

    status_bar::render(frame, card_layout.status_bar, state);
}
