//! Flatten, normalize and sort the configured sources into one list.

use crate::config::model::{HomePosition, SourceConfig};
use crate::snapshot::Snapshot;
use crate::stations::item::{DisplayItem, ItemKey, SortMode, DEFAULT_COLOR, DEFAULT_ICON, FALLBACK_NAME};
use crate::stations::record::StationRecord;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Build the full display list from scratch.
///
/// Sources are visited in configuration order and their entries in feed
/// order; that order is what sort ties fall back to. A source with no
/// data in the snapshot contributes nothing.
pub fn build(
    sources: &[SourceConfig],
    snapshot: &Snapshot,
    home: Option<HomePosition>,
    mode: SortMode,
) -> Vec<DisplayItem> {
    let mut items = Vec::new();
    for source in sources {
        for (index, raw) in snapshot.entity_stations(&source.entity).iter().enumerate() {
            let record = StationRecord::from_value(raw);
            items.push(display_item(source, record, index, home));
        }
    }
    sort(&mut items, mode);
    items
}

/// Stable sort by the mode's key. Equal keys keep their flatten order so
/// rows with identical prices don't jitter between rebuilds; NaN orders
/// after every numeric value.
pub fn sort(items: &mut [DisplayItem], mode: SortMode) {
    items.sort_by(|a, b| a.sort_value(mode).total_cmp(&b.sort_value(mode)));
}

fn display_item(
    source: &SourceConfig,
    record: StationRecord,
    index: usize,
    home: Option<HomePosition>,
) -> DisplayItem {
    let mut distance_km = record.distance_km;
    if distance_km.is_nan() {
        // The feed sometimes omits the precomputed distance; fall back to
        // great-circle distance from the configured reference location.
        if let (Some(home), Some(lat), Some(lon)) = (home, record.latitude, record.longitude) {
            distance_km = round2(haversine_km(home.latitude, home.longitude, lat, lon));
        }
    }

    DisplayItem {
        key: ItemKey::new(source.entity.clone(), index),
        source_name: source
            .name
            .clone()
            .unwrap_or_else(|| source.entity.clone()),
        icon: source.icon.clone().unwrap_or_else(|| DEFAULT_ICON.to_string()),
        color: source.color.unwrap_or(DEFAULT_COLOR),
        name: record.name.unwrap_or_else(|| FALLBACK_NAME.to_string()),
        price: record.price,
        distance_km,
        address: record.address,
        locality: record.locality,
        latitude: record.latitude,
        longitude: record.longitude,
    }
}

fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();
    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn source(entity: &str) -> SourceConfig {
        SourceConfig {
            entity: entity.to_string(),
            name: None,
            icon: None,
            color: None,
        }
    }

    fn snapshot(json: &str) -> Snapshot {
        Snapshot::parse(json).unwrap()
    }

    #[test]
    fn test_sort_by_price() {
        let snap = snapshot(
            r#"{"sensor.a": {"state": "2", "attributes": {"stations": [
                {"name": "X", "price": 1.5, "distance_km": 2.0},
                {"name": "Y", "price": 1.2, "distance_km": 5.0}
            ]}}}"#,
        );
        let items = build(&[source("sensor.a")], &snap, None, SortMode::Price);
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Y", "X"]);
    }

    #[test]
    fn test_sort_by_distance() {
        let snap = snapshot(
            r#"{"sensor.a": {"state": "2", "attributes": {"stations": [
                {"name": "X", "price": 1.5, "distance_km": 2.0},
                {"name": "Y", "price": 1.2, "distance_km": 5.0}
            ]}}}"#,
        );
        let items = build(&[source("sensor.a")], &snap, None, SortMode::Distance);
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["X", "Y"]);
    }

    #[test]
    fn test_source_without_data_contributes_nothing() {
        let snap = snapshot(r#"{"sensor.other": {"state": "1", "attributes": {}}}"#);
        let items = build(&[source("sensor.b")], &snap, None, SortMode::Distance);
        assert!(items.is_empty());
    }

    #[test]
    fn test_empty_source_list() {
        let snap = snapshot(r#"{"sensor.a": {"state": "0", "attributes": {"stations": []}}}"#);
        assert!(build(&[], &snap, None, SortMode::Price).is_empty());
    }

    #[test]
    fn test_unparseable_price_sorts_last() {
        let snap = snapshot(
            r#"{"sensor.a": {"state": "3", "attributes": {"stations": [
                {"name": "A", "price": "n/a", "distance_km": 0.1},
                {"name": "B", "price": 1.8, "distance_km": 9.0},
                {"name": "C", "price": 1.2, "distance_km": 4.0}
            ]}}}"#,
        );
        let items = build(&[source("sensor.a")], &snap, None, SortMode::Price);
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["C", "B", "A"]);
        assert!(items[2].price.is_nan());
    }

    #[test]
    fn test_equal_prices_keep_flatten_order() {
        let snap = snapshot(
            r#"{"sensor.a": {"state": "3", "attributes": {"stations": [
                {"name": "First", "price": 1.5},
                {"name": "Second", "price": 1.5},
                {"name": "Cheap", "price": 1.0}
            ]}}}"#,
        );
        let items = build(&[source("sensor.a")], &snap, None, SortMode::Price);
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Cheap", "First", "Second"]);
    }

    #[test]
    fn test_nan_rows_keep_flatten_order() {
        let snap = snapshot(
            r#"{"sensor.a": {"state": "3", "attributes": {"stations": [
                {"name": "NoPriceA"},
                {"name": "NoPriceB"},
                {"name": "Priced", "price": 1.4}
            ]}}}"#,
        );
        let items = build(&[source("sensor.a")], &snap, None, SortMode::Price);
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Priced", "NoPriceA", "NoPriceB"]);
    }

    #[test]
    fn test_completeness_across_sources() {
        let snap = snapshot(
            r#"{
                "sensor.a": {"state": "2", "attributes": {"stations": [
                    {"name": "A1", "distance_km": 3.0}, {"name": "A2", "distance_km": 1.0}
                ]}},
                "sensor.b": {"state": "1", "attributes": {"gasolineras": [
                    {"nombre": "B1", "distancia_km": 2.0}
                ]}}
            }"#,
        );
        let items = build(
            &[source("sensor.a"), source("sensor.b"), source("sensor.gone")],
            &snap,
            None,
            SortMode::Distance,
        );
        assert_eq!(items.len(), 3);
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["A2", "B1", "A1"]);
    }

    #[test]
    fn test_keys_are_unique_and_positional() {
        let snap = snapshot(
            r#"{"sensor.a": {"state": "2", "attributes": {"stations": [
                {"name": "N1"}, {"name": "N2"}
            ]}}}"#,
        );
        let items = build(&[source("sensor.a")], &snap, None, SortMode::Distance);
        let keys: Vec<_> = items.iter().map(|i| i.key.to_string()).collect();
        assert_eq!(keys, ["sensor.a::0", "sensor.a::1"]);
    }

    #[test]
    fn test_display_overrides_and_defaults() {
        let snap = snapshot(
            r#"{"sensor.a": {"state": "1", "attributes": {"stations": [{}]}}}"#,
        );
        let styled = SourceConfig {
            entity: "sensor.a".to_string(),
            name: Some("North".to_string()),
            icon: Some("⛟".to_string()),
            color: Some(Color::Rgb(255, 165, 0)),
        };
        let items = build(&[styled], &snap, None, SortMode::Distance);
        assert_eq!(items[0].source_name, "North");
        assert_eq!(items[0].icon, "⛟");
        assert_eq!(items[0].color, Color::Rgb(255, 165, 0));
        assert_eq!(items[0].name, FALLBACK_NAME);

        let items = build(&[source("sensor.a")], &snap, None, SortMode::Distance);
        assert_eq!(items[0].source_name, "sensor.a");
        assert_eq!(items[0].icon, DEFAULT_ICON);
        assert_eq!(items[0].color, DEFAULT_COLOR);
    }

    #[test]
    fn test_haversine_fallback_distance() {
        let snap = snapshot(
            r#"{"sensor.a": {"state": "2", "attributes": {"stations": [
                {"name": "HasCoords", "latitude": 0.0, "longitude": 1.0},
                {"name": "NoCoords"}
            ]}}}"#,
        );
        let home = HomePosition {
            latitude: 0.0,
            longitude: 0.0,
        };
        let items = build(&[source("sensor.a")], &snap, Some(home), SortMode::Distance);
        // one degree of longitude at the equator
        assert!((items[0].distance_km - 111.19).abs() < 0.5);
        assert!(items[1].distance_km.is_nan());
    }

    #[test]
    fn test_feed_distance_wins_over_haversine() {
        let snap = snapshot(
            r#"{"sensor.a": {"state": "1", "attributes": {"stations": [
                {"name": "S", "distance_km": 7.5, "latitude": 0.0, "longitude": 1.0}
            ]}}}"#,
        );
        let home = HomePosition {
            latitude: 0.0,
            longitude: 0.0,
        };
        let items = build(&[source("sensor.a")], &snap, Some(home), SortMode::Distance);
        assert_eq!(items[0].distance_km, 7.5);
    }

    #[test]
    fn test_build_is_idempotent() {
        let snap = snapshot(
            r#"{"sensor.a": {"state": "3", "attributes": {"stations": [
                {"name": "A", "price": 1.4}, {"name": "B"}, {"name": "C", "price": 1.1}
            ]}}}"#,
        );
        let first = build(&[source("sensor.a")], &snap, None, SortMode::Price);
        let second = build(&[source("sensor.a")], &snap, None, SortMode::Price);
        let order = |items: &[DisplayItem]| {
            items
                .iter()
                .map(|i| i.key.to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(order(&first), order(&second));
    }

    #[test]
    fn test_resort_is_pure() {
        let snap = snapshot(
            r#"{"sensor.a": {"state": "3", "attributes": {"stations": [
                {"name": "A", "price": 1.4}, {"name": "B"}, {"name": "C", "price": 1.1}
            ]}}}"#,
        );
        let mut items = build(&[source("sensor.a")], &snap, None, SortMode::Price);
        let before: Vec<_> = items.iter().map(|i| i.key.clone()).collect();
        sort(&mut items, SortMode::Price);
        let after: Vec<_> = items.iter().map(|i| i.key.clone()).collect();
        assert_eq!(before, after);
    }
}
