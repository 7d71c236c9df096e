//! JSON map scripts: one map-construction call plus a list of chained calls.
//!
//! ```json
//! {
//!   "locations": [{"lat": 59.91, "lng": 10.75}],
//!   "options": {"id": "map-office", "height": 400},
//!   "calls": [
//!     {"markers": {"locations": {"entity": {"id": "7", "fields": [...], "addresses": {...}}}}},
//!     {"zoom": 12},
//!     "fit"
//!   ]
//! }
//! ```

use dynmap_dna::{AssetRegistrar, DynamicMap, Location};
use dynmap_model::{Coordinate, EntityRecord, LocationValue, MapOptions, RecordOptions};
use serde::Deserialize;
use serde_json::Value;

/// A location as written in a script.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScriptLocation {
    Entity { entity: EntityRecord },
    Value { location: Coordinate },
    Coords(Coordinate),
    List(Vec<ScriptLocation>),
    Other(Value),
}

impl Default for ScriptLocation {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl ScriptLocation {
    pub fn as_location(&self) -> Location<'_> {
        match self {
            Self::Entity { entity } => Location::Entity(entity),
            Self::Value { location } => Location::Value(LocationValue::new(location.clone())),
            Self::Coords(coordinate) => Location::Coords(coordinate.clone()),
            Self::List(items) => Location::List(items.iter().map(Self::as_location).collect()),
            Self::Other(value) => Location::from_json(value),
        }
    }
}

/// One chained call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ScriptCall {
    Markers {
        #[serde(default)]
        locations: ScriptLocation,
        #[serde(default)]
        options: RecordOptions,
    },
    Kml {
        url: String,
        #[serde(default)]
        options: RecordOptions,
    },
    Styles(Value),
    Zoom(f64),
    Center(ScriptLocation),
    Fit,
    Refresh,
    PanToMarker(String),
    SetMarkerIcon {
        marker_id: String,
        icon: Value,
    },
    HideMarker(String),
    ShowMarker(String),
}

impl ScriptCall {
    pub fn apply<'r>(&self, map: DynamicMap<'r>) -> DynamicMap<'r> {
        match self {
            Self::Markers { locations, options } => {
                map.markers(locations.as_location(), options.clone())
            }
            Self::Kml { url, options } => map.kml(url.as_str(), options.clone()),
            Self::Styles(style_set) => map.styles(style_set.clone()),
            Self::Zoom(level) => map.zoom(*level),
            Self::Center(coords) => map.center(coords.as_location()),
            Self::Fit => map.fit(),
            Self::Refresh => map.refresh(),
            Self::PanToMarker(marker_id) => map.pan_to_marker(marker_id.as_str()),
            Self::SetMarkerIcon { marker_id, icon } => {
                map.set_marker_icon(marker_id.as_str(), icon.clone())
            }
            Self::HideMarker(marker_id) => map.hide_marker(marker_id.as_str()),
            Self::ShowMarker(marker_id) => map.show_marker(marker_id.as_str()),
        }
    }
}

/// A complete map script.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MapScript {
    #[serde(default)]
    pub locations: ScriptLocation,
    /// Untyped construction options, normalized by [`MapOptions::from_value`].
    #[serde(default)]
    pub options: Value,
    #[serde(default)]
    pub calls: Vec<ScriptCall>,
}

impl MapScript {
    pub fn from_json(source: &str) -> serde_json::Result<Self> {
        serde_json::from_str(source)
    }

    /// Runs the script against a fresh builder.
    pub fn build<'r>(&self, registrar: &'r dyn AssetRegistrar) -> DynamicMap<'r> {
        let map = DynamicMap::new(
            self.locations.as_location(),
            MapOptions::from_value(self.options.clone()),
            registrar,
        );
        self.calls.iter().fold(map, |map, call| call.apply(map))
    }
}
