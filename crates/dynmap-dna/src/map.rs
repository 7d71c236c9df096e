//! The dynamic map builder.

use std::fmt;

use dynmap_model::{
    DnaError, DnaRecord, ExtractOptions, MapId, MapOptions, RecordOptions, validate_dna,
};
use serde_json::Value;
use tracing::{debug, trace};

use crate::extract::{extract_coordinates, extract_coordinates_with};
use crate::location::Location;
use crate::registrar::AssetRegistrar;
use crate::tag::MapTag;

/// A map under construction.
///
/// Every method appends at most one record to the DNA and hands the builder
/// back, so calls always chain. A call whose argument is unusable is skipped
/// silently; only [`DynamicMap::tag`] can fail.
pub struct DynamicMap<'r> {
    id: MapId,
    dna: Vec<DnaRecord>,
    registrar: &'r dyn AssetRegistrar,
}

impl fmt::Debug for DynamicMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicMap")
            .field("id", &self.id)
            .field("dna", &self.dna)
            .finish_non_exhaustive()
    }
}

impl<'r> DynamicMap<'r> {
    /// Starts a map at `locations`.
    ///
    /// The map id is `options.id` when set, otherwise a generated
    /// `map-xxxxxx` token; the stored options carry the resolved id. Unless
    /// `options.js` is `false` the registrar is asked to preload the
    /// rendering library.
    pub fn new<'l>(
        locations: impl Into<Location<'l>>,
        options: MapOptions,
        registrar: &'r dyn AssetRegistrar,
    ) -> Self {
        let mut options = options;
        let id = match options.id.as_deref().map(MapId::new) {
            Some(Ok(id)) => id,
            _ => {
                let id = MapId::generate();
                debug!(map_id = %id, "generated map id");
                id
            }
        };
        options.id = Some(id.to_string());

        if options.preload_js() {
            registrar.preload_library();
        }

        let input: Location<'l> = locations.into();
        let locations = extract_coordinates(&input);
        debug!(map_id = %id, locations = locations.len(), "created map");

        Self {
            id,
            dna: vec![DnaRecord::Map { locations, options }],
            registrar,
        }
    }

    /// Restores a map from a stored DNA sequence.
    ///
    /// The sequence is not checked here; [`DynamicMap::tag`] rejects an empty
    /// sequence or one that does not start with a `map` record.
    pub fn from_dna(id: MapId, dna: Vec<DnaRecord>, registrar: &'r dyn AssetRegistrar) -> Self {
        Self { id, dna, registrar }
    }

    pub fn id(&self) -> &MapId {
        &self.id
    }

    /// The DNA sequence recorded so far.
    pub fn dna(&self) -> &[DnaRecord] {
        &self.dna
    }

    pub fn to_dna(&self) -> Vec<DnaRecord> {
        self.dna.clone()
    }

    pub fn into_dna(self) -> Vec<DnaRecord> {
        self.dna
    }

    /// Adds markers. Skipped when `locations` is an empty list.
    ///
    /// A `field` key in `options` restricts which entity address fields are
    /// read.
    #[must_use]
    pub fn markers<'l>(self, locations: impl Into<Location<'l>>, options: RecordOptions) -> Self {
        let input: Location<'l> = locations.into();
        if input.is_empty() {
            return self.skip("markers", "no locations");
        }
        let extract = ExtractOptions::from_record_options(&options);
        let locations = extract_coordinates_with(&input, &extract);
        self.push(DnaRecord::Markers { locations, options })
    }

    /// Adds a KML layer. Skipped when `url` is empty.
    #[must_use]
    pub fn kml(self, url: impl Into<String>, options: RecordOptions) -> Self {
        let url = url.into();
        if url.is_empty() {
            return self.skip("kml", "empty url");
        }
        self.push(DnaRecord::Kml { url, options })
    }

    /// Applies a style set. Skipped unless it is a non-empty object or array.
    #[must_use]
    pub fn styles(self, style_set: Value) -> Self {
        let usable = match &style_set {
            Value::Object(map) => !map.is_empty(),
            Value::Array(items) => !items.is_empty(),
            _ => false,
        };
        if !usable {
            return self.skip("styles", "empty or malformed style set");
        }
        self.push(DnaRecord::Styles { style_set })
    }

    /// Sets the zoom level. Skipped when `level` is not finite.
    #[must_use]
    pub fn zoom(self, level: impl Into<f64>) -> Self {
        let level = level.into();
        if !level.is_finite() {
            return self.skip("zoom", "non-finite level");
        }
        self.push(DnaRecord::Zoom { level })
    }

    /// Centers on the first coordinate `coords` resolves to. Skipped when it
    /// resolves to none.
    #[must_use]
    pub fn center<'l>(self, coords: impl Into<Location<'l>>) -> Self {
        let input: Location<'l> = coords.into();
        match extract_coordinates(&input).into_iter().next() {
            Some(coords) => self.push(DnaRecord::Center { coords }),
            None => self.skip("center", "no coordinates"),
        }
    }

    #[must_use]
    pub fn fit(self) -> Self {
        self.push(DnaRecord::Fit)
    }

    #[must_use]
    pub fn refresh(self) -> Self {
        self.push(DnaRecord::Refresh)
    }

    #[must_use]
    pub fn pan_to_marker(self, marker_id: impl Into<String>) -> Self {
        self.push(DnaRecord::PanToMarker {
            marker_id: marker_id.into(),
        })
    }

    #[must_use]
    pub fn set_marker_icon(self, marker_id: impl Into<String>, icon: impl Into<Value>) -> Self {
        self.push(DnaRecord::SetMarkerIcon {
            marker_id: marker_id.into(),
            icon: icon.into(),
        })
    }

    #[must_use]
    pub fn hide_marker(self, marker_id: impl Into<String>) -> Self {
        self.push(DnaRecord::HideMarker {
            marker_id: marker_id.into(),
        })
    }

    #[must_use]
    pub fn show_marker(self, marker_id: impl Into<String>) -> Self {
        self.push(DnaRecord::ShowMarker {
            marker_id: marker_id.into(),
        })
    }

    /// Finalizes the map into its container element.
    ///
    /// With `auto_init` the registrar is asked to initialize the map once the
    /// page has loaded. The DNA is left untouched, so a map can be tagged more
    /// than once.
    ///
    /// # Errors
    ///
    /// [`DnaError::EmptyDna`] or [`DnaError::InvalidDnaHead`] when the
    /// sequence breaks the head invariant.
    pub fn tag(&self, auto_init: bool) -> Result<MapTag, DnaError> {
        validate_dna(&self.dna)?;
        let dna_json = serde_json::to_string(&self.dna)?;
        if auto_init {
            self.registrar.register_init(&self.id);
        }
        debug!(map_id = %self.id, records = self.dna.len(), auto_init, "tagged map");
        Ok(MapTag::new(self.id.clone(), dna_json))
    }

    fn push(mut self, record: DnaRecord) -> Self {
        trace!(map_id = %self.id, tag = record.tag(), "appending record");
        self.dna.push(record);
        self
    }

    fn skip(self, operation: &'static str, reason: &'static str) -> Self {
        debug!(map_id = %self.id, operation, reason, "skipping map call");
        self
    }
}
