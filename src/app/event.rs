use crate::snapshot::Snapshot;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// A fresh state snapshot was read from the host dashboard
    SnapshotLoaded { snapshot: Snapshot },

    /// The snapshot file could not be read or parsed
    SnapshotError { error: String },

    /// Tick for UI refresh
    Tick,
}
