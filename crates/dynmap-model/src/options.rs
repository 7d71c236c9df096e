//! Options records for map construction and coordinate extraction.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque options passed through to the renderer with a record.
pub type RecordOptions = Map<String, Value>;

/// Options for the map-construction call.
///
/// Only `id` and `js` are interpreted here. Every other key is kept in
/// `extra` and handed to the renderer untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapOptions {
    /// DOM id of the map container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Whether to request the rendering library preload. Defaults to true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub js: Option<bool>,

    #[serde(flatten)]
    pub extra: RecordOptions,
}

impl MapOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes untyped options.
    ///
    /// Anything that is not a JSON object becomes the default record. An `id`
    /// that is not a non-blank string and a `js` that is not a boolean are
    /// discarded.
    pub fn from_value(value: Value) -> Self {
        let Value::Object(mut extra) = value else {
            return Self::default();
        };
        let id = match extra.remove("id") {
            Some(Value::String(id)) if !id.trim().is_empty() => Some(id),
            _ => None,
        };
        let js = match extra.remove("js") {
            Some(Value::Bool(js)) => Some(js),
            _ => None,
        };
        Self { id, js, extra }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_js(mut self, enable: bool) -> Self {
        self.js = Some(enable);
        self
    }

    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// True unless `js` is explicitly `false`.
    pub fn preload_js(&self) -> bool {
        self.js != Some(false)
    }
}

/// Restricts extraction to some address fields by handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldFilter {
    One(String),
    Many(BTreeSet<String>),
}

impl FieldFilter {
    pub fn allows(&self, handle: &str) -> bool {
        match self {
            Self::One(name) => name == handle,
            Self::Many(names) => names.contains(handle),
        }
    }
}

/// Options for coordinate extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<FieldFilter>,
}

impl ExtractOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_field(handle: impl Into<String>) -> Self {
        Self {
            field: Some(FieldFilter::One(handle.into())),
        }
    }

    pub fn for_fields<I, S>(handles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            field: Some(FieldFilter::Many(
                handles.into_iter().map(Into::into).collect(),
            )),
        }
    }

    /// Reads the `field` key of a record's options.
    ///
    /// A `field` that is neither a string nor a list of strings is ignored.
    pub fn from_record_options(options: &RecordOptions) -> Self {
        let field = options
            .get("field")
            .and_then(|value| FieldFilter::deserialize(value).ok());
        Self { field }
    }

    /// True if the address field `handle` passes the filter.
    pub fn allows(&self, handle: &str) -> bool {
        self.field.as_ref().is_none_or(|filter| filter.allows(handle))
    }
}
