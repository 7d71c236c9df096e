use dynmap_dna::{DynamicMap, Location, NoopRegistrar, RecordingRegistrar, RegistrarCall};
use dynmap_model::{
    Address, Coordinate, DnaError, DnaRecord, EntityRecord, MapId, MapOptions, RecordOptions,
};
use proptest::prelude::*;
use serde_json::json;

fn options(id: &str) -> MapOptions {
    MapOptions::new().with_id(id)
}

#[test]
fn zoom_and_fit_scenario() {
    let registrar = RecordingRegistrar::new();
    let map = DynamicMap::new(
        vec![Coordinate::new(10.0, 20.0)],
        options("map-test01"),
        &registrar,
    )
    .zoom(5)
    .fit();

    assert_eq!(
        serde_json::to_value(map.dna()).unwrap(),
        json!([
            {"tag": "map", "locations": [{"lat": 10.0, "lng": 20.0}], "options": {"id": "map-test01"}},
            {"tag": "zoom", "level": 5.0},
            {"tag": "fit"}
        ])
    );

    let tag = map.tag(true).expect("tag map");
    insta::assert_snapshot!(tag.to_html(), @r#"<div id="map-test01" class="dynamic-map" data-dna="[{&quot;tag&quot;:&quot;map&quot;,&quot;locations&quot;:[{&quot;lat&quot;:10.0,&quot;lng&quot;:20.0}],&quot;options&quot;:{&quot;id&quot;:&quot;map-test01&quot;}},{&quot;tag&quot;:&quot;zoom&quot;,&quot;level&quot;:5.0},{&quot;tag&quot;:&quot;fit&quot;}]"></div>"#);

    let embedded: Vec<DnaRecord> = serde_json::from_str(tag.dna_json()).unwrap();
    assert_eq!(embedded, map.to_dna());
    assert_eq!(
        registrar.calls(),
        vec![
            RegistrarCall::PreloadLibrary,
            RegistrarCall::RegisterInit(MapId::new("map-test01").unwrap()),
        ]
    );
}

#[test]
fn empty_map_still_tags() {
    let map = DynamicMap::new(Location::empty(), MapOptions::new(), &NoopRegistrar);
    assert_eq!(
        map.dna(),
        [DnaRecord::Map {
            locations: vec![],
            options: MapOptions::new().with_id(map.id().as_str()),
        }]
    );
    assert!(map.tag(true).is_ok());
}

#[test]
fn unknown_option_keys_pass_through() {
    let map = DynamicMap::new(
        Location::empty(),
        MapOptions::from_value(json!({"id": "map-x", "js": false, "gestureHandling": "cooperative"})),
        &NoopRegistrar,
    );
    let head = serde_json::to_value(&map.dna()[0]).unwrap();
    assert_eq!(
        head["options"],
        json!({"id": "map-x", "js": false, "gestureHandling": "cooperative"})
    );
}

#[test]
fn entity_markers_then_marker_operations() {
    let entity = EntityRecord::new("7")
        .with_address("A", Address::at(1.0, 2.0))
        .with_address("B", Address::at(3.0, 4.0));
    let mut marker_options = RecordOptions::new();
    marker_options.insert("field".to_string(), json!("B"));

    let map = DynamicMap::new(&entity, options("map-e"), &NoopRegistrar)
        .markers(&entity, marker_options.clone())
        .pan_to_marker("7-B")
        .set_marker_icon("7-B", "https://example.com/pin.png")
        .hide_marker("7-A")
        .show_marker("7-A")
        .refresh();

    let dna = map.into_dna();
    assert_eq!(
        dna[0],
        DnaRecord::Map {
            locations: vec![
                Coordinate::new(1.0, 2.0).with_id("7-A"),
                Coordinate::new(3.0, 4.0).with_id("7-B"),
            ],
            options: options("map-e"),
        }
    );
    assert_eq!(
        dna[1],
        DnaRecord::Markers {
            locations: vec![Coordinate::new(3.0, 4.0).with_id("7-B")],
            options: marker_options,
        }
    );
    let tags: Vec<&str> = dna.iter().map(DnaRecord::tag).collect();
    assert_eq!(
        tags,
        [
            "map",
            "markers",
            "panToMarker",
            "setMarkerIcon",
            "hideMarker",
            "showMarker",
            "refresh"
        ]
    );
}

#[test]
fn kml_and_styles_record_their_arguments() {
    let map = DynamicMap::new(Location::empty(), options("map-k"), &NoopRegistrar)
        .kml("https://example.com/routes.kml", RecordOptions::new())
        .styles(json!([{"featureType": "road", "stylers": [{"visibility": "off"}]}]));
    assert_eq!(
        serde_json::to_value(&map.dna()[1..]).unwrap(),
        json!([
            {"tag": "kml", "url": "https://example.com/routes.kml", "options": {}},
            {"tag": "styles", "styleSet": [{"featureType": "road", "stylers": [{"visibility": "off"}]}]}
        ])
    );
}

#[test]
fn non_finite_coordinates_never_reach_the_dna() {
    let map = DynamicMap::new(
        vec![Coordinate::new(f64::NAN, 2.0), Coordinate::new(1.0, 2.0)],
        options("map-nan"),
        &NoopRegistrar,
    )
    .markers(Coordinate::new(f64::INFINITY, 0.0), RecordOptions::new())
    .center(vec![Coordinate::new(0.0, f64::NAN), Coordinate::new(3.0, 4.0)]);

    let tag = map.tag(false).expect("tag map");
    let embedded: Vec<DnaRecord> = serde_json::from_str(tag.dna_json()).expect("read DNA back");
    assert_eq!(embedded, map.to_dna());
    assert_eq!(
        embedded,
        [
            DnaRecord::Map {
                locations: vec![Coordinate::new(1.0, 2.0)],
                options: options("map-nan"),
            },
            DnaRecord::Markers {
                locations: vec![],
                options: RecordOptions::new(),
            },
            DnaRecord::Center {
                coords: Coordinate::new(3.0, 4.0),
            },
        ]
    );
}

#[test]
fn finalization_rejects_broken_sequences() {
    let id = MapId::new("map-broken").unwrap();
    let empty = DynamicMap::from_dna(id.clone(), vec![], &NoopRegistrar);
    assert!(matches!(empty.tag(true), Err(DnaError::EmptyDna)));

    let headless = DynamicMap::from_dna(id, vec![DnaRecord::Fit], &NoopRegistrar);
    let error = headless.tag(true).unwrap_err();
    assert!(error.is_misconfigured());
    assert!(matches!(error, DnaError::InvalidDnaHead { found: "fit" }));
}

#[test]
fn failed_finalization_does_not_register_init() {
    let registrar = RecordingRegistrar::new();
    let map = DynamicMap::from_dna(MapId::new("map-z").unwrap(), vec![], &registrar);
    assert!(map.tag(true).is_err());
    assert!(registrar.calls().is_empty());
}

#[test]
fn generated_ids_are_distinct() {
    let a = DynamicMap::new(Location::empty(), MapOptions::new(), &NoopRegistrar);
    let b = DynamicMap::new(Location::empty(), MapOptions::new(), &NoopRegistrar);
    assert_ne!(a.id(), b.id());
    for map in [a, b] {
        let token = map.id().as_str().strip_prefix("map-").expect("prefix");
        assert_eq!(token.len(), 6);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}

#[derive(Debug, Clone)]
enum Call {
    Markers(f64, f64),
    Kml(String),
    Zoom(u32),
    Center(f64, f64),
    Fit,
    Refresh,
    Pan(String),
    Icon(String),
    Hide(String),
    Show(String),
}

impl Call {
    fn tag(&self) -> &'static str {
        match self {
            Self::Markers(..) => "markers",
            Self::Kml(_) => "kml",
            Self::Zoom(_) => "zoom",
            Self::Center(..) => "center",
            Self::Fit => "fit",
            Self::Refresh => "refresh",
            Self::Pan(_) => "panToMarker",
            Self::Icon(_) => "setMarkerIcon",
            Self::Hide(_) => "hideMarker",
            Self::Show(_) => "showMarker",
        }
    }

    fn apply<'r>(self, map: DynamicMap<'r>) -> DynamicMap<'r> {
        match self {
            Self::Markers(lat, lng) => map.markers(Coordinate::new(lat, lng), RecordOptions::new()),
            Self::Kml(url) => map.kml(url, RecordOptions::new()),
            Self::Zoom(level) => map.zoom(level),
            Self::Center(lat, lng) => map.center(Coordinate::new(lat, lng)),
            Self::Fit => map.fit(),
            Self::Refresh => map.refresh(),
            Self::Pan(id) => map.pan_to_marker(id),
            Self::Icon(id) => map.set_marker_icon(id, "pin.png"),
            Self::Hide(id) => map.hide_marker(id),
            Self::Show(id) => map.show_marker(id),
        }
    }
}

fn call_strategy() -> impl Strategy<Value = Call> {
    let coord = (-90.0f64..90.0, -180.0f64..180.0);
    let marker = "[a-z0-9]{1,8}";
    prop_oneof![
        coord.clone().prop_map(|(lat, lng)| Call::Markers(lat, lng)),
        "https://[a-z]{1,10}\\.kml".prop_map(Call::Kml),
        (0u32..22).prop_map(Call::Zoom),
        coord.prop_map(|(lat, lng)| Call::Center(lat, lng)),
        Just(Call::Fit),
        Just(Call::Refresh),
        marker.prop_map(Call::Pan),
        marker.prop_map(Call::Icon),
        marker.prop_map(Call::Hide),
        marker.prop_map(Call::Show),
    ]
}

proptest! {
    #[test]
    fn chained_calls_append_in_order(calls in prop::collection::vec(call_strategy(), 0..24)) {
        let expected: Vec<&str> = std::iter::once("map")
            .chain(calls.iter().map(Call::tag))
            .collect();
        let map = calls.into_iter().fold(
            DynamicMap::new(Location::empty(), MapOptions::new(), &NoopRegistrar),
            |map, call| call.apply(map),
        );
        let tags: Vec<&str> = map.dna().iter().map(DnaRecord::tag).collect();
        prop_assert_eq!(tags, expected);
        prop_assert!(map.tag(false).is_ok());
    }
}
