use crate::config::CardConfig;
use crate::snapshot::Snapshot;
use crate::stations::{self, DisplayItem, ItemKey, SortMode};
use chrono::{DateTime, Local};

/// UI-owned state of the card. The event loop owns this exclusively;
/// the builder itself keeps nothing between calls.
#[derive(Debug)]
pub struct AppState {
    pub config: CardConfig,
    /// Current flattened, sorted list.
    pub items: Vec<DisplayItem>,
    pub sort_mode: SortMode,
    pub selected: usize,
    pub scroll_offset: usize,
    /// At most one row shows its detail lines, keyed by item identity so
    /// it survives re-sorts and rebuilds.
    pub expanded: Option<ItemKey>,
    pub last_update: Option<DateTime<Local>>,
    /// Transient status/error line; cleared by the next snapshot.
    pub status: Option<String>,
    /// False until the first snapshot arrives.
    pub snapshot_seen: bool,
    pub dirty: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: CardConfig) -> Self {
        let sort_mode = config.initial_sort;
        Self {
            config,
            items: Vec::new(),
            sort_mode,
            selected: 0,
            scroll_offset: 0,
            expanded: None,
            last_update: None,
            status: None,
            snapshot_seen: false,
            dirty: true,
            should_quit: false,
        }
    }

    fn page(&self) -> usize {
        self.config.max_height.max(1) as usize
    }

    /// Full rebuild from raw source data. Selection and the expanded row
    /// follow their item keys when those still exist.
    pub fn apply_snapshot(&mut self, snapshot: &Snapshot) {
        let selected_key = self.selected_item().map(|i| i.key.clone());
        self.items = stations::build(
            &self.config.sources,
            snapshot,
            self.config.home,
            self.sort_mode,
        );
        self.snapshot_seen = true;
        self.last_update = Some(Local::now());
        self.status = None;
        if let Some(key) = self.expanded.clone() {
            if !self.items.iter().any(|i| i.key == key) {
                self.expanded = None;
            }
        }
        self.restore_selection(selected_key);
        self.dirty = true;
    }

    /// Sort-mode change is a pure re-sort of the already-built list; raw
    /// source data is not consulted.
    pub fn set_sort_mode(&mut self, mode: SortMode) {
        if self.sort_mode == mode {
            return;
        }
        self.sort_mode = mode;
        let selected_key = self.selected_item().map(|i| i.key.clone());
        stations::sort(&mut self.items, mode);
        self.restore_selection(selected_key);
        self.dirty = true;
    }

    fn restore_selection(&mut self, key: Option<ItemKey>) {
        self.selected = key
            .and_then(|k| self.items.iter().position(|i| i.key == k))
            .unwrap_or(0)
            .min(self.items.len().saturating_sub(1));
        self.scroll_to_selected();
    }

    pub fn selected_item(&self) -> Option<&DisplayItem> {
        self.items.get(self.selected)
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.scroll_to_selected();
        self.dirty = true;
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
        self.scroll_to_selected();
        self.dirty = true;
    }

    pub fn select_page_up(&mut self) {
        self.selected = self.selected.saturating_sub(self.page());
        self.scroll_to_selected();
        self.dirty = true;
    }

    pub fn select_page_down(&mut self) {
        self.selected = (self.selected + self.page()).min(self.items.len().saturating_sub(1));
        self.scroll_to_selected();
        self.dirty = true;
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.scroll_to_selected();
        self.dirty = true;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
        self.scroll_to_selected();
        self.dirty = true;
    }

    fn scroll_to_selected(&mut self) {
        let page = self.page();
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + page {
            self.scroll_offset = self.selected + 1 - page;
        }
        self.scroll_offset = self
            .scroll_offset
            .min(self.items.len().saturating_sub(page));
    }

    pub fn toggle_expanded(&mut self) {
        let Some(item) = self.selected_item() else {
            return;
        };
        let key = item.key.clone();
        self.expanded = if self.expanded.as_ref() == Some(&key) {
            None
        } else {
            Some(key)
        };
        self.dirty = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SourceConfig;

    fn state_with_snapshot(json: &str) -> AppState {
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
        state.apply_snapshot(&Snapshot::parse(json).unwrap());
        state
    }

    const THREE_STATIONS: &str = r#"{"sensor.a": {"state": "3", "attributes": {"stations": [
        {"name": "Near", "price": 1.8, "distance_km": 1.0},
        {"name": "Mid", "price": 1.5, "distance_km": 2.0},
        {"name": "Far", "price": 1.2, "distance_km": 3.0}
    ]}}}"#;

    #[test]
    fn test_apply_snapshot_builds_and_timestamps() {
        let state = state_with_snapshot(THREE_STATIONS);
        assert!(state.snapshot_seen);
        assert!(state.last_update.is_some());
        assert_eq!(state.items.len(), 3);
        assert_eq!(state.items[0].name, "Near");
    }

    #[test]
    fn test_sort_mode_change_keeps_selection_on_item() {
        let mut state = state_with_snapshot(THREE_STATIONS);
        state.select_next(); // "Mid"
        assert_eq!(state.selected_item().unwrap().name, "Mid");
        state.set_sort_mode(SortMode::Price);
        // order is now Far, Mid, Near; selection still points at Mid
        assert_eq!(state.items[0].name, "Far");
        assert_eq!(state.selected_item().unwrap().name, "Mid");
    }

    #[test]
    fn test_expanded_row_survives_rebuild_when_key_exists() {
        let mut state = state_with_snapshot(THREE_STATIONS);
        state.toggle_expanded();
        let key = state.expanded.clone().unwrap();
        state.apply_snapshot(&Snapshot::parse(THREE_STATIONS).unwrap());
        assert_eq!(state.expanded, Some(key));
    }

    #[test]
    fn test_expanded_row_cleared_when_key_vanishes() {
        let mut state = state_with_snapshot(THREE_STATIONS);
        state.select_last();
        state.toggle_expanded();
        assert!(state.expanded.is_some());
        let one = r#"{"sensor.a": {"state": "1", "attributes": {"stations": [
            {"name": "Near", "price": 1.8, "distance_km": 1.0}
        ]}}}"#;
        state.apply_snapshot(&Snapshot::parse(one).unwrap());
        assert_eq!(state.expanded, None);
        assert!(state.selected < state.items.len());
    }

    #[test]
    fn test_selection_clamps_on_empty_list() {
        let mut state = state_with_snapshot(r#"{}"#);
        assert!(state.items.is_empty());
        state.select_next();
        state.select_last();
        assert_eq!(state.selected, 0);
        assert!(state.selected_item().is_none());
    }

    #[test]
    fn test_scroll_follows_selection() {
        let mut state = state_with_snapshot(THREE_STATIONS);
        state.config.max_height = 2;
        state.select_last();
        assert_eq!(state.scroll_offset, 1);
        state.select_first();
        assert_eq!(state.scroll_offset, 0);
    }
}
