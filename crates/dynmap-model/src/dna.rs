//! DNA records: the instruction log of a dynamic map.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coordinate::Coordinate;
use crate::error::DnaError;
use crate::options::{MapOptions, RecordOptions};

/// One instruction in a map's DNA.
///
/// Serialized with an internal `tag` field, e.g. `{"tag":"zoom","level":5.0}`.
/// The first record of every DNA sequence is [`DnaRecord::Map`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DnaRecord {
    /// Creates the map. Only legal as the head of the sequence.
    Map {
        locations: Vec<Coordinate>,
        options: MapOptions,
    },
    Markers {
        locations: Vec<Coordinate>,
        #[serde(default)]
        options: RecordOptions,
    },
    Kml {
        url: String,
        #[serde(default)]
        options: RecordOptions,
    },
    Styles {
        style_set: Value,
    },
    /// Fractional levels are allowed.
    Zoom {
        level: f64,
    },
    Center {
        coords: Coordinate,
    },
    /// Fits the viewport to every marker.
    Fit,
    Refresh,
    PanToMarker {
        marker_id: String,
    },
    SetMarkerIcon {
        marker_id: String,
        icon: Value,
    },
    HideMarker {
        marker_id: String,
    },
    ShowMarker {
        marker_id: String,
    },
}

impl DnaRecord {
    /// The serialized tag of this record.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Map { .. } => "map",
            Self::Markers { .. } => "markers",
            Self::Kml { .. } => "kml",
            Self::Styles { .. } => "styles",
            Self::Zoom { .. } => "zoom",
            Self::Center { .. } => "center",
            Self::Fit => "fit",
            Self::Refresh => "refresh",
            Self::PanToMarker { .. } => "panToMarker",
            Self::SetMarkerIcon { .. } => "setMarkerIcon",
            Self::HideMarker { .. } => "hideMarker",
            Self::ShowMarker { .. } => "showMarker",
        }
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map { .. })
    }
}

/// Checks the head invariant of a DNA sequence.
///
/// # Errors
///
/// [`DnaError::EmptyDna`] for an empty sequence and
/// [`DnaError::InvalidDnaHead`] when the first record is not `map`.
pub fn validate_dna(records: &[DnaRecord]) -> Result<(), DnaError> {
    match records.first() {
        None => Err(DnaError::EmptyDna),
        Some(head) if head.is_map() => Ok(()),
        Some(head) => Err(DnaError::InvalidDnaHead { found: head.tag() }),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn tag_matches_serialized_discriminator() {
        let records = vec![
            DnaRecord::Map {
                locations: vec![],
                options: MapOptions::default(),
            },
            DnaRecord::Markers {
                locations: vec![],
                options: RecordOptions::new(),
            },
            DnaRecord::Kml {
                url: "https://example.com/a.kml".to_string(),
                options: RecordOptions::new(),
            },
            DnaRecord::Styles {
                style_set: json!([{"featureType": "water"}]),
            },
            DnaRecord::Zoom { level: 3.5 },
            DnaRecord::Center {
                coords: Coordinate::new(1.0, 2.0),
            },
            DnaRecord::Fit,
            DnaRecord::Refresh,
            DnaRecord::PanToMarker {
                marker_id: "7-home".to_string(),
            },
            DnaRecord::SetMarkerIcon {
                marker_id: "7-home".to_string(),
                icon: json!("pin.png"),
            },
            DnaRecord::HideMarker {
                marker_id: "7-home".to_string(),
            },
            DnaRecord::ShowMarker {
                marker_id: "7-home".to_string(),
            },
        ];
        for record in &records {
            let value = serde_json::to_value(record).expect("serialize record");
            assert_eq!(value["tag"], record.tag());
        }
    }

    #[test]
    fn field_names_are_camel_case() {
        let value = serde_json::to_value(DnaRecord::SetMarkerIcon {
            marker_id: "7-home".to_string(),
            icon: json!({"url": "pin.png"}),
        })
        .unwrap();
        assert_eq!(
            value,
            json!({"tag": "setMarkerIcon", "markerId": "7-home", "icon": {"url": "pin.png"}})
        );
        assert_eq!(serde_json::to_value(DnaRecord::Fit).unwrap(), json!({"tag": "fit"}));
    }

    #[test]
    fn validate_checks_head() {
        assert!(matches!(validate_dna(&[]), Err(DnaError::EmptyDna)));
        assert!(matches!(
            validate_dna(&[DnaRecord::Fit]),
            Err(DnaError::InvalidDnaHead { found: "fit" })
        ));
        let head = DnaRecord::Map {
            locations: vec![],
            options: MapOptions::default(),
        };
        assert!(validate_dna(&[head, DnaRecord::Fit]).is_ok());
    }

    #[test]
    fn stored_dna_deserializes() {
        let records: Vec<DnaRecord> = serde_json::from_value(json!([
            {"tag": "map", "locations": [{"lat": 1, "lng": 2}], "options": {"id": "map-a"}},
            {"tag": "kml", "url": "https://example.com/a.kml"},
            {"tag": "panToMarker", "markerId": "7-home"}
        ]))
        .expect("deserialize dna");
        assert_eq!(records.len(), 3);
        assert!(records[0].is_map());
        assert_eq!(records[2].tag(), "panToMarker");
    }
}
