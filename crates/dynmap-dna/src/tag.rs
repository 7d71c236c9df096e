//! The container element a finished map renders to.

use std::borrow::Cow;
use std::fmt;

use dynmap_model::MapId;

/// Class marker the rendering runtime looks for.
pub const MAP_CLASS: &str = "dynamic-map";

/// A finalized map: its id plus the serialized DNA.
///
/// `Display` renders the container element
/// `<div id=".." class="dynamic-map" data-dna=".."></div>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapTag {
    id: MapId,
    dna_json: String,
}

impl MapTag {
    pub(crate) fn new(id: MapId, dna_json: String) -> Self {
        Self { id, dna_json }
    }

    pub fn id(&self) -> &MapId {
        &self.id
    }

    /// The DNA sequence as JSON, unescaped.
    pub fn dna_json(&self) -> &str {
        &self.dna_json
    }

    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MapTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<div id="{}" class="{MAP_CLASS}" data-dna="{}"></div>"#,
            escape_attr(self.id.as_str()),
            escape_attr(&self.dna_json)
        )
    }
}

/// Escapes a value for use inside a double-quoted HTML attribute.
fn escape_attr(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 16);
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}
