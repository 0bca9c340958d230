use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct CardLayout {
    /// Bordered card area (header + list inside).
    pub card: Rect,
    pub status_bar: Rect,
}

/// The card behaves like its browser ancestor: it takes the width it is
/// given but caps its own height at `max_height` list rows (plus header
/// and borders), leaving the rest of the screen empty.
pub fn compute_layout(area: Rect, max_height: u16) -> CardLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Card + filler
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // borders (2) + header row (1) + separator (1) + list rows
    let wanted = max_height.saturating_add(4);
    let card_height = wanted.min(content.height);
    let card = Rect::new(content.x, content.y, content.width, card_height);

    CardLayout { card, status_bar }
}
