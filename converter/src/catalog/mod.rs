//! JSON repeater catalog loading.
//!
//! The catalog is a single object whose `repeaters` key maps repeater names to
//! records. Records are kept in document order (`serde_json` is built with
//! `preserve_order`) and decoded into [`RepeaterEntry`] only when needed, so
//! records for modes this tool ignores may carry any shape beyond `mode`.

use serde::de::Error as _;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{selects_modes, RepeaterEntry};

/// Top-level key holding the repeater records.
pub const REPEATERS_KEY: &str = "repeaters";

/// One named record, still undecoded.
#[derive(Debug, Clone)]
pub struct CatalogRecord {
    pub name: String,
    pub raw: Value,
}

impl CatalogRecord {
    /// The record's mode set. A record without one is malformed.
    pub fn modes(&self) -> CatalogResult<&Map<String, Value>> {
        self.raw
            .get("mode")
            .and_then(Value::as_object)
            .ok_or_else(|| self.invalid("missing 'mode' object"))
    }

    /// Whether the record has analog or D-STAR service.
    pub fn is_selected(&self) -> CatalogResult<bool> {
        Ok(selects_modes(self.modes()?))
    }

    /// Mode names for log messages.
    pub fn mode_names(&self) -> Vec<String> {
        self.raw
            .get("mode")
            .and_then(Value::as_object)
            .map(|modes| modes.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Decode the fields used for conversion.
    pub fn decode(&self) -> CatalogResult<RepeaterEntry> {
        RepeaterEntry::deserialize(&self.raw).map_err(|source| CatalogError::InvalidRecord {
            name: self.name.clone(),
            source,
        })
    }

    fn invalid(&self, message: &str) -> CatalogError {
        CatalogError::InvalidRecord {
            name: self.name.clone(),
            source: serde_json::Error::custom(message),
        }
    }
}

/// All records of a catalog, in document order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub records: Vec<CatalogRecord>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Load a catalog from a UTF-8 JSON file.
///
/// # Example
/// ```ignore
/// let catalog = load_catalog("reps.json")?;
/// println!("{} repeaters", catalog.len());
/// ```
pub fn load_catalog<P: AsRef<Path>>(path: P) -> CatalogResult<Catalog> {
    let content = std::fs::read_to_string(path.as_ref())?;
    parse_catalog_str(&content)
}

/// Parse a catalog from JSON text.
pub fn parse_catalog_str(content: &str) -> CatalogResult<Catalog> {
    let document: Value = serde_json::from_str(content)?;
    parse_catalog_value(document)
}

/// Split an already parsed document into named records.
pub fn parse_catalog_value(document: Value) -> CatalogResult<Catalog> {
    let repeaters = match document {
        Value::Object(mut root) => match root.remove(REPEATERS_KEY) {
            Some(Value::Object(repeaters)) => repeaters,
            _ => return Err(CatalogError::MissingRepeaters),
        },
        _ => return Err(CatalogError::MissingRepeaters),
    };

    let records = repeaters
        .into_iter()
        .map(|(name, raw)| CatalogRecord { name, raw })
        .collect();

    Ok(Catalog { records })
}
