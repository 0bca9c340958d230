use crate::app::state::AppState;
use crate::stations::DisplayItem;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const PRICE_COL: usize = 11;
const DISTANCE_COL: usize = 10;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if area.height == 0 || area.width < 20 {
        return;
    }

    if !state.snapshot_seen {
        let msg = format!(
            "  Waiting for state snapshot ({})...",
            state.config.snapshot_path.display()
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(msg, Theme::empty_message()))),
            area,
        );
        return;
    }

    if state.items.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "  No station data available.",
                Theme::empty_message(),
            ))),
            area,
        );
        return;
    }

    let list_h = area.height as usize;
    let mut lines: Vec<Line> = Vec::new();
    let mut rows_shown = 0usize;

    for (idx, item) in state.items.iter().enumerate().skip(state.scroll_offset) {
        if lines.len() >= list_h {
            break;
        }
        let selected = idx == state.selected;
        lines.push(station_row(item, selected, area.width as usize));
        rows_shown += 1;

        if state.expanded.as_ref() == Some(&item.key) {
            for detail in detail_lines(item) {
                if lines.len() >= list_h {
                    break;
                }
                lines.push(detail);
            }
        }
    }

    frame.render_widget(
        Paragraph::new(lines),
        Rect::new(area.x, area.y, area.width.saturating_sub(1), area.height),
    );

    // Scrollbar only when rows overflow the viewport
    if state.items.len() > rows_shown {
        let scrollbar_area = Rect::new(
            area.x + area.width.saturating_sub(1),
            area.y,
            1,
            area.height,
        );
        let mut scrollbar_state =
            ScrollbarState::new(state.items.len().saturating_sub(rows_shown))
                .position(state.scroll_offset);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }
}

fn station_row(item: &DisplayItem, selected: bool, width: usize) -> Line<'static> {
    let icon = format!("{} ", item.icon);
    let icon_w = icon.width();
    let name_w = width.saturating_sub(1 + icon_w + PRICE_COL + DISTANCE_COL + 2);
    let name = fit_width(&item.name, name_w);

    let price = format!("{:>width$}", fmt_price(item.price), width = PRICE_COL);
    let distance = format!("{:>width$}", fmt_distance(item.distance_km), width = DISTANCE_COL);

    let row_style = if selected {
        Theme::selected_row()
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::styled("▌", Style::default().fg(item.color)),
        Span::styled(icon, row_style),
        Span::styled(name, Theme::station_name().patch(row_style)),
        Span::styled(price, Theme::price().patch(row_style)),
        Span::styled(" ", row_style),
        Span::styled(distance, Theme::distance().patch(row_style)),
    ])
}

fn detail_lines(item: &DisplayItem) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let place = match (&item.address, &item.locality) {
        (Some(a), Some(l)) => format!("{}, {}", a, l),
        (Some(a), None) => a.clone(),
        (None, Some(l)) => l.clone(),
        (None, None) => "no address".to_string(),
    };
    lines.push(Line::from(Span::styled(
        format!("    {} · {}", place, item.source_name),
        Theme::detail(),
    )));

    let coords = match (item.latitude, item.longitude) {
        (Some(lat), Some(lon)) => {
            format!("    {:.4}, {:.4} · g/a/w/m opens map", lat, lon)
        }
        _ => "    coordinates unavailable · no map links".to_string(),
    };
    lines.push(Line::from(Span::styled(coords, Theme::muted())));

    lines
}

fn fmt_price(price: f64) -> String {
    if price.is_nan() {
        "- €/L".to_string()
    } else {
        format!("{:.3} €/L", price)
    }
}

fn fmt_distance(distance_km: f64) -> String {
    if distance_km.is_nan() {
        "- km".to_string()
    } else {
        format!("{:.2} km", distance_km)
    }
}

/// Pad or truncate to an exact display width, unicode-aware.
fn fit_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return format!("{}{}", s, " ".repeat(max - s.width()));
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    used += 1;
    format!("{}{}", out, " ".repeat(max.saturating_sub(used)))
}
