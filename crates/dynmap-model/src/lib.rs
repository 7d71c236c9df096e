//! Data model for dynamic maps.
//!
//! A dynamic map is described by its DNA: an ordered, append-only list of
//! [`DnaRecord`]s that an external rendering runtime replays against a real
//! mapping API. This crate holds the record types plus the location data the
//! records are built from.

pub mod coordinate;
pub mod dna;
pub mod error;
pub mod field;
pub mod ids;
pub mod options;

pub use coordinate::{Address, Coordinate, LocationValue};
pub use dna::{DnaRecord, validate_dna};
pub use error::{DnaError, ModelError, Result};
pub use field::{EntityRecord, FieldDescriptor, FieldKind, HasFieldLayout};
pub use ids::MapId;
pub use options::{ExtractOptions, FieldFilter, MapOptions, RecordOptions};
