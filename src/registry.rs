//! Process-wide card type registry.
//!
//! The host dashboard discovers cards by type name. Registration happens
//! once at startup and is idempotent: registering a name that is already
//! taken is a no-op, matching the `customElements.get(...)` guard of the
//! browser original.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

pub const CARD_TYPE: &str = "fuel-stations-list";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardInfo {
    pub name: &'static str,
    pub description: &'static str,
}

fn registry() -> &'static Mutex<HashMap<String, CardInfo>> {
    static REGISTRY: OnceLock<Mutex<HashMap<String, CardInfo>>> = OnceLock::new();
    REGISTRY.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Register a card type. Returns `false` when the name was already
/// registered (the existing entry wins).
pub fn register(card_type: &str, info: CardInfo) -> bool {
    let mut map = registry().lock().expect("card registry poisoned");
    if map.contains_key(card_type) {
        return false;
    }
    map.insert(card_type.to_string(), info);
    true
}

pub fn is_registered(card_type: &str) -> bool {
    registry()
        .lock()
        .expect("card registry poisoned")
        .contains_key(card_type)
}

pub fn lookup(card_type: &str) -> Option<CardInfo> {
    registry()
        .lock()
        .expect("card registry poisoned")
        .get(card_type)
        .copied()
}
