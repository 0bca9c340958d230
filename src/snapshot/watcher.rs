//! Polls the snapshot file and pushes fresh snapshots into the app
//! event channel.

use crate::app::event::AppEvent;
use crate::snapshot::Snapshot;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

/// Spawn the watcher task. Re-reads the file whenever its mtime changes;
/// a vanished or unparseable file is reported on the status line, never
/// fatal.
pub fn spawn(path: PathBuf, poll_interval: Duration, tx: UnboundedSender<AppEvent>) {
    tokio::spawn(async move {
        let mut last_modified: Option<SystemTime> = None;
        let mut interval = tokio::time::interval(poll_interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            interval.tick().await;

            let modified = match std::fs::metadata(&path).and_then(|m| m.modified()) {
                Ok(m) => m,
                Err(e) => {
                    // Only report the transition to missing, not every poll.
                    if last_modified.take().is_some() {
                        warn!(path = %path.display(), error = %e, "snapshot file unreadable");
                        let _ = tx.send(AppEvent::SnapshotError {
                            error: format!("snapshot unreadable: {}", e),
                        });
                    }
                    continue;
                }
            };

            if last_modified == Some(modified) {
                continue;
            }
            last_modified = Some(modified);

            match Snapshot::load(&path) {
                Ok(snapshot) => {
                    debug!(path = %path.display(), entities = snapshot.len(), "snapshot reloaded");
                    if tx.send(AppEvent::SnapshotLoaded { snapshot }).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %format!("{e:#}"), "snapshot parse failed");
                    if tx
                        .send(AppEvent::SnapshotError {
                            error: format!("{e:#}"),
                        })
                        .is_err()
                    {
                        break;
                    }
                }
            }
        }
    });
}
