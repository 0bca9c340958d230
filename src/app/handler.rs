use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::maplink;
use crate::stations::SortMode;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::info;

enum MapTarget {
    Google,
    Apple,
    Waze,
    Geo,
}

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::SnapshotLoaded { snapshot } => {
            info!(entities = snapshot.len(), "applying state snapshot");
            state.apply_snapshot(&snapshot);
            vec![]
        }
        AppEvent::SnapshotError { error } => {
            state.set_status(error);
            vec![]
        }
        AppEvent::Tick => {
            // keeps the "updated Ns ago" readout moving
            state.dirty = true;
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_prev();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_next();
            vec![]
        }
        KeyCode::PageUp => {
            state.select_page_up();
            vec![]
        }
        KeyCode::PageDown => {
            state.select_page_down();
            vec![]
        }
        KeyCode::Home => {
            state.select_first();
            vec![]
        }
        KeyCode::End => {
            state.select_last();
            vec![]
        }
        KeyCode::Char('s') => {
            state.set_sort_mode(state.sort_mode.toggle());
            vec![]
        }
        KeyCode::Char('d') => {
            state.set_sort_mode(SortMode::Distance);
            vec![]
        }
        KeyCode::Char('p') => {
            state.set_sort_mode(SortMode::Price);
            vec![]
        }
        KeyCode::Enter => {
            state.toggle_expanded();
            vec![]
        }
        KeyCode::Char('r') => vec![Action::Reload],
        KeyCode::Char('g') => open_map(state, MapTarget::Google),
        KeyCode::Char('a') => open_map(state, MapTarget::Apple),
        KeyCode::Char('w') => open_map(state, MapTarget::Waze),
        KeyCode::Char('m') => open_map(state, MapTarget::Geo),
        _ => vec![],
    }
}

fn open_map(state: &mut AppState, target: MapTarget) -> Vec<Action> {
    let Some(item) = state.selected_item() else {
        return vec![];
    };
    match maplink::resolve(item.latitude, item.longitude) {
        Some(links) => {
            let url = match target {
                MapTarget::Google => links.google,
                MapTarget::Apple => links.apple,
                MapTarget::Waze => links.waze,
                MapTarget::Geo => links.geo,
            };
            vec![Action::OpenMap { url }]
        }
        None => {
            state.set_status("no map links available for this station");
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CardConfig, SourceConfig};
    use crate::snapshot::Snapshot;

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn test_state() -> AppState {
        let config = CardConfig {
            sources: vec![SourceConfig {
                entity: "sensor.a".to_string(),
                name: None,
                icon: None,
                color: None,
            }],
            ..CardConfig::default()
        };
        let mut state = AppState::new(config);
        let snap = Snapshot::parse(
            r#"{"sensor.a": {"state": "2", "attributes": {"stations": [
                {"name": "Close", "price": 1.8, "distance_km": 1.0,
                 "latitude": 40.0, "longitude": -3.0},
                {"name": "Cheap", "price": 1.2, "distance_km": 9.0}
            ]}}}"#,
        )
        .unwrap();
        state.apply_snapshot(&snap);
        state
    }

    #[test]
    fn test_quit_keys() {
        let mut state = test_state();
        assert_eq!(handle_event(&mut state, key(KeyCode::Char('q'))), vec![Action::Quit]);
        assert_eq!(handle_event(&mut state, key(KeyCode::Esc)), vec![Action::Quit]);
    }

    #[test]
    fn test_sort_toggle_reorders_without_rebuild() {
        let mut state = test_state();
        assert_eq!(state.items[0].name, "Close");
        let actions = handle_event(&mut state, key(KeyCode::Char('s')));
        assert!(actions.is_empty());
        assert_eq!(state.sort_mode, SortMode::Price);
        assert_eq!(state.items[0].name, "Cheap");
        // toggling back restores distance order
        handle_event(&mut state, key(KeyCode::Char('s')));
        assert_eq!(state.items[0].name, "Close");
    }

    #[test]
    fn test_enter_toggles_expanded_row() {
        let mut state = test_state();
        handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(state.expanded.as_ref().map(|k| k.index), Some(0));
        handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(state.expanded, None);
    }

    #[test]
    fn test_open_map_with_coordinates() {
        let mut state = test_state();
        let actions = handle_event(&mut state, key(KeyCode::Char('g')));
        assert_eq!(
            actions,
            vec![Action::OpenMap {
                url: "https://www.google.com/maps?q=40,-3".to_string()
            }]
        );
    }

    #[test]
    fn test_open_map_without_coordinates_sets_status() {
        let mut state = test_state();
        handle_event(&mut state, key(KeyCode::Down));
        let actions = handle_event(&mut state, key(KeyCode::Char('w')));
        assert!(actions.is_empty());
        assert!(state.status.is_some());
    }

    #[test]
    fn test_snapshot_error_goes_to_status_line() {
        let mut state = test_state();
        let before = state.items.len();
        handle_event(
            &mut state,
            AppEvent::SnapshotError {
                error: "snapshot unreadable".to_string(),
            },
        );
        assert_eq!(state.status.as_deref(), Some("snapshot unreadable"));
        // the previous list is kept
        assert_eq!(state.items.len(), before);
    }

    #[test]
    fn test_reload_key() {
        let mut state = test_state();
        assert_eq!(handle_event(&mut state, key(KeyCode::Char('r'))), vec![Action::Reload]);
    }
}
