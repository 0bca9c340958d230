//! List normalization and sorting engine.
//!
//! Turns the raw station arrays found in a state snapshot into a single
//! flattened, normalized, sorted list of display-ready items. Pure data
//! transformation: no I/O, no shared state. The UI layer re-invokes
//! [`build`] when source data changes and [`sort`] when only the sort
//! mode changes.

pub mod builder;
pub mod item;
pub mod record;

pub use builder::{build, sort};
pub use item::{DisplayItem, ItemKey, SortMode, DEFAULT_COLOR, DEFAULT_ICON, FALLBACK_NAME};
pub use record::StationRecord;
