//! Coordinate extraction from heterogeneous location inputs.

use std::slice;

use dynmap_model::{Coordinate, ExtractOptions, HasFieldLayout};
use tracing::trace;

use crate::location::Location;

/// Normalizes `input` into a flat coordinate list with default options.
pub fn extract_coordinates(input: &Location<'_>) -> Vec<Coordinate> {
    extract_coordinates_with(input, &ExtractOptions::default())
}

/// Normalizes `input` into a flat coordinate list.
///
/// A top-level coordinate or location value is returned as a single-element
/// list. Anything else is treated as a list and walked in order: location
/// values and coordinates are appended as-is, entities contribute one
/// coordinate per populated address field (in field layout order, filtered by
/// `options.field`) tagged `"{entityId}-{fieldHandle}"`. Nested lists,
/// entities without a layout, empty address fields, addresses without
/// coordinates and non-finite coordinates are skipped.
pub fn extract_coordinates_with(input: &Location<'_>, options: &ExtractOptions) -> Vec<Coordinate> {
    let items = match input {
        Location::List(items) => items.as_slice(),
        _ => slice::from_ref(input),
    };

    let mut coordinates = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Location::Value(value) => push_finite(&mut coordinates, value.coordinate()),
            Location::Coords(coordinate) => push_finite(&mut coordinates, coordinate),
            Location::Entity(entity) => push_entity_coordinates(&mut coordinates, *entity, options),
            Location::List(_) => trace!("skipping nested location list"),
        }
    }
    coordinates
}

fn push_finite(out: &mut Vec<Coordinate>, coordinate: &Coordinate) {
    if coordinate.is_finite() {
        out.push(coordinate.clone());
    } else {
        trace!(lat = coordinate.lat, lng = coordinate.lng, "skipping non-finite coordinate");
    }
}

fn push_entity_coordinates(
    out: &mut Vec<Coordinate>,
    entity: &dyn HasFieldLayout,
    options: &ExtractOptions,
) {
    let entity_id = entity.entity_id();
    let Some(layout) = entity.field_layout() else {
        trace!(entity_id = %entity_id, "entity has no field layout");
        return;
    };

    for field in layout.iter().filter(|field| field.is_address()) {
        if !options.allows(&field.handle) {
            continue;
        }
        let Some(address) = entity.address_value(&field.handle) else {
            trace!(entity_id = %entity_id, field = %field.handle, "address field is empty");
            continue;
        };
        let Some(coordinate) = address.coordinate() else {
            trace!(entity_id = %entity_id, field = %field.handle, "address has no coordinates");
            continue;
        };
        out.push(coordinate.with_id(format!("{entity_id}-{}", field.handle)));
    }
}
