//! Field layouts and the capability entities expose to the extractor.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::coordinate::Address;

/// The type of a field on an entity's field layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    /// A field whose value is an [`Address`].
    Address,
    /// Any other field type, carrying the host's type name.
    Other(String),
}

/// One entry of a field layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub handle: String,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub fn address(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            kind: FieldKind::Address,
        }
    }

    pub fn other(handle: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            kind: FieldKind::Other(kind.into()),
        }
    }

    pub fn is_address(&self) -> bool {
        matches!(self.kind, FieldKind::Address)
    }
}

/// A content entity that can enumerate its address-bearing fields.
///
/// Hosts implement this for their element types. The extractor never
/// validates layout data; it only walks it.
pub trait HasFieldLayout {
    /// The entity identifier used to build coordinate ids.
    fn entity_id(&self) -> String;

    /// The ordered field layout, or `None` when the entity has no layout
    /// (it is not an element).
    fn field_layout(&self) -> Option<&[FieldDescriptor]>;

    /// The current value of the address field `handle`, if populated.
    fn address_value(&self, handle: &str) -> Option<Address>;
}

/// A plain, serializable entity snapshot.
///
/// Useful when the host hands entities over as data rather than live
/// objects, for example in map scripts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldDescriptor>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub addresses: BTreeMap<String, Address>,
}

impl EntityRecord {
    /// Creates an entity with an empty field layout.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Some(Vec::new()),
            addresses: BTreeMap::new(),
        }
    }

    /// Creates an entity without any field layout.
    pub fn without_layout(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: None,
            addresses: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.get_or_insert_with(Vec::new).push(field);
        self
    }

    /// Adds an address field to the layout and stores its value.
    #[must_use]
    pub fn with_address(mut self, handle: impl Into<String>, address: Address) -> Self {
        let handle = handle.into();
        self.addresses.insert(handle.clone(), address);
        self.with_field(FieldDescriptor::address(handle))
    }
}

impl HasFieldLayout for EntityRecord {
    fn entity_id(&self) -> String {
        self.id.clone()
    }

    fn field_layout(&self) -> Option<&[FieldDescriptor]> {
        self.fields.as_deref()
    }

    fn address_value(&self, handle: &str) -> Option<Address> {
        self.addresses.get(handle).cloned()
    }
}
