//! The location input accepted by the extractor and the builder.

use std::fmt;

use dynmap_model::{Coordinate, HasFieldLayout, LocationValue};
use serde_json::Value;

/// Any location argument a map call accepts.
#[derive(Clone)]
pub enum Location<'a> {
    /// A coordinate pair already in final form.
    Coords(Coordinate),
    /// A location value object.
    Value(LocationValue),
    /// A content entity whose address fields are read.
    Entity(&'a dyn HasFieldLayout),
    /// A list of any of the above.
    List(Vec<Location<'a>>),
}

impl<'a> Location<'a> {
    /// An empty list: the "no locations" argument.
    pub fn empty() -> Self {
        Self::List(Vec::new())
    }

    /// True only for an empty list.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::List(items) if items.is_empty())
    }

    /// Converts untyped JSON.
    ///
    /// Objects with numeric `lat` and `lng` become [`Location::Coords`] and
    /// arrays become lists of their converted elements. Anything else is an
    /// empty list.
    pub fn from_json(value: &Value) -> Location<'static> {
        match value {
            Value::Array(items) => Location::List(items.iter().map(Location::from_json).collect()),
            other => Coordinate::from_json(other).map_or_else(Location::empty, Location::Coords),
        }
    }
}

impl fmt::Debug for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coords(coordinate) => f.debug_tuple("Coords").field(coordinate).finish(),
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Entity(entity) => f.debug_tuple("Entity").field(&entity.entity_id()).finish(),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
        }
    }
}

impl From<Coordinate> for Location<'_> {
    fn from(coordinate: Coordinate) -> Self {
        Self::Coords(coordinate)
    }
}

impl From<LocationValue> for Location<'_> {
    fn from(value: LocationValue) -> Self {
        Self::Value(value)
    }
}

impl<'a, T: HasFieldLayout + 'a> From<&'a T> for Location<'a> {
    fn from(entity: &'a T) -> Self {
        Self::Entity(entity)
    }
}

impl From<Vec<Coordinate>> for Location<'_> {
    fn from(coordinates: Vec<Coordinate>) -> Self {
        Self::List(coordinates.into_iter().map(Self::Coords).collect())
    }
}

impl<'a> From<Vec<Location<'a>>> for Location<'a> {
    fn from(items: Vec<Location<'a>>) -> Self {
        Self::List(items)
    }
}

impl<'a, T: Into<Location<'a>>> From<Option<T>> for Location<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Location::empty, Into::into)
    }
}
