//! Coordinate and address value types.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A resolved map position.
///
/// `id` is only set when the coordinate was read from an entity address
/// field, formatted as `"{entityId}-{fieldHandle}"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng, id: None }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Whether both axes are finite numbers. Only finite coordinates survive
    /// serialization as numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Reads a coordinate from untyped JSON.
    ///
    /// Both `lat` and `lng` must be present and numeric (numbers or numeric
    /// strings); otherwise the value is not a coordinate and `None` is
    /// returned.
    pub fn from_json(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let lat = numeric(object.get("lat")?)?;
        let lng = numeric(object.get("lng")?)?;
        let id = object.get("id").and_then(Value::as_str).map(str::to_string);
        Some(Self { lat, lng, id })
    }
}

fn numeric(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|v| v.is_finite())
}

/// Reads an optional axis the way [`Coordinate::from_json`] does; anything
/// non-numeric leaves the axis unset.
fn lenient_axis<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(numeric))
}

/// A location value object wrapping exactly one coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationValue {
    coordinate: Coordinate,
}

impl LocationValue {
    pub fn new(coordinate: Coordinate) -> Self {
        Self { coordinate }
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }
}

impl From<Coordinate> for LocationValue {
    fn from(coordinate: Coordinate) -> Self {
        Self::new(coordinate)
    }
}

/// The value stored in an address field.
///
/// Addresses may be saved before geocoding has run, so the coordinate is
/// optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_axis",
        skip_serializing_if = "Option::is_none"
    )]
    pub lat: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_axis",
        skip_serializing_if = "Option::is_none"
    )]
    pub lng: Option<f64>,
}

impl Address {
    /// Creates an address holding only a coordinate.
    pub fn at(lat: f64, lng: f64) -> Self {
        Self {
            lat: Some(lat),
            lng: Some(lng),
            ..Self::default()
        }
    }

    /// Returns the coordinate when both `lat` and `lng` are set and finite.
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => {
                Some(Coordinate::new(lat, lng)).filter(Coordinate::is_finite)
            }
            _ => None,
        }
    }

    pub fn has_coordinate(&self) -> bool {
        self.coordinate().is_some()
    }
}
