//! Restoring stored DNA documents.

use anyhow::{Context, Result, bail};
use dynmap_dna::{AssetRegistrar, DynamicMap};
use dynmap_model::{DnaRecord, MapId};

/// Parses a stored DNA document and restores its map.
///
/// The map id is `id` when given, else the id stored in the head record's
/// options, else a generated one. An explicit `id` must agree with a stored
/// one, since the runtime reads the id from both the container and the DNA.
/// The sequence itself is checked when the map is tagged.
pub fn restore_map<'r>(
    source: &str,
    id: Option<&str>,
    registrar: &'r dyn AssetRegistrar,
) -> Result<DynamicMap<'r>> {
    let records: Vec<DnaRecord> = serde_json::from_str(source).context("parse DNA document")?;
    let stored = stored_map_id(&records);
    let id = match id {
        Some(id) => {
            let id = MapId::new(id).context("invalid --id")?;
            if let Some(stored) = stored.filter(|stored| *stored != id) {
                bail!("--id {id} does not match the stored map id {stored}");
            }
            id
        }
        None => stored.unwrap_or_else(MapId::generate),
    };
    Ok(DynamicMap::from_dna(id, records, registrar))
}

/// The id recorded in the options of a leading `map` record.
pub fn stored_map_id(records: &[DnaRecord]) -> Option<MapId> {
    match records.first()? {
        DnaRecord::Map { options, .. } => MapId::new(options.id.clone()?).ok(),
        _ => None,
    }
}
