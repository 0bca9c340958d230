//! Field aliasing and per-record normalization.
//!
//! The upstream feeds disagree on field names (`price` vs `precio`,
//! `latitude` vs `latitud` vs `lat`), so every canonical field resolves
//! through an explicit ordered candidate list. Numeric strings may use a
//! decimal comma; both `"1.459"` and `"1,459"` parse to the same value.

use serde_json::Value;

const NAME_FIELDS: &[&str] = &["name", "nombre"];
const PRICE_FIELDS: &[&str] = &["price", "precio"];
const DISTANCE_FIELDS: &[&str] = &["distance_km", "distancia_km"];
const ADDRESS_FIELDS: &[&str] = &["address", "direccion"];
const LOCALITY_FIELDS: &[&str] = &["locality", "localidad"];
const LATITUDE_FIELDS: &[&str] = &["latitude", "latitud", "lat"];
const LONGITUDE_FIELDS: &[&str] = &["longitude", "longitud", "lon"];

/// One raw station entry with its fields resolved to canonical names.
///
/// A field that is absent or fails to parse degrades (NaN for price and
/// distance, `None` elsewhere); a malformed entry never aborts a build.
#[derive(Debug, Clone)]
pub struct StationRecord {
    pub name: Option<String>,
    pub price: f64,
    pub distance_km: f64,
    pub address: Option<String>,
    pub locality: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl StationRecord {
    pub fn from_value(raw: &Value) -> Self {
        Self {
            name: text_field(raw, NAME_FIELDS),
            price: number_field(raw, PRICE_FIELDS).unwrap_or(f64::NAN),
            distance_km: number_field(raw, DISTANCE_FIELDS).unwrap_or(f64::NAN),
            address: text_field(raw, ADDRESS_FIELDS),
            locality: text_field(raw, LOCALITY_FIELDS),
            latitude: number_field(raw, LATITUDE_FIELDS),
            longitude: number_field(raw, LONGITUDE_FIELDS),
        }
    }
}

/// First non-null value among the candidate field names.
fn lookup<'a>(raw: &'a Value, candidates: &[&str]) -> Option<&'a Value> {
    candidates
        .iter()
        .find_map(|field| raw.get(*field))
        .filter(|v| !v.is_null())
}

fn text_field(raw: &Value, candidates: &[&str]) -> Option<String> {
    match lookup(raw, candidates)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

fn number_field(raw: &Value, candidates: &[&str]) -> Option<f64> {
    parse_number(lookup(raw, candidates)?)
}

fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', ".").parse().ok(),
        _ => None,
    }
}
