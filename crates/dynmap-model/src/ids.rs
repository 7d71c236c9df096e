#![deny(unsafe_code)]

use std::fmt;

use rand::Rng;

use crate::ModelError;

/// Prefix of generated map identifiers.
pub const MAP_ID_PREFIX: &str = "map-";

/// Length of the random token after the prefix.
pub const MAP_ID_TOKEN_LEN: usize = 6;

/// Alphanumerics without the easily confused `0 O o 1 l I i`.
const TOKEN_ALPHABET: &[u8] = b"abcdefghjkmnpqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// The DOM identifier of one rendered map.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct MapId(String);

impl MapId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidMapId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Draws a fresh `map-xxxxxx` identifier.
    ///
    /// Not cryptographic; collisions within one page are negligible.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let token: String = (0..MAP_ID_TOKEN_LEN)
            .map(|_| char::from(TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())]))
            .collect();
        Self(format!("{MAP_ID_PREFIX}{token}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
