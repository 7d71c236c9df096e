#![deny(unsafe_code)]
//! Dynamic map construction.
//!
//! [`DynamicMap`] is a fluent builder that records map-building calls as an
//! append-only DNA sequence. Location arguments are resolved through
//! [`extract_coordinates`] before they are recorded. The finished sequence is
//! embedded in a container element by [`DynamicMap::tag`] for the rendering
//! runtime to replay.
//!
//! # Example
//!
//! ```
//! use dynmap_dna::{DynamicMap, NoopRegistrar};
//! use dynmap_model::{Coordinate, MapOptions};
//!
//! let registrar = NoopRegistrar;
//! let tag = DynamicMap::new(
//!     vec![Coordinate::new(10.0, 20.0)],
//!     MapOptions::new().with_id("map-store"),
//!     &registrar,
//! )
//! .zoom(5)
//! .fit()
//! .tag(true)
//! .unwrap();
//! assert_eq!(tag.id().as_str(), "map-store");
//! ```

pub mod extract;
pub mod location;
pub mod map;
pub mod registrar;
pub mod tag;

pub use extract::{extract_coordinates, extract_coordinates_with};
pub use location::Location;
pub use map::DynamicMap;
pub use registrar::{AssetRegistrar, NoopRegistrar, RecordingRegistrar, RegistrarCall};
pub use tag::{MAP_CLASS, MapTag};
