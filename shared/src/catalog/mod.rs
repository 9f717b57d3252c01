//! Rule catalog: the read-only list of plant entries the engine evaluates

mod builtin;

use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

pub use builtin::builtin_entries;

use crate::error::CatalogError;
use crate::models::{PlantRule, PlantType};
use crate::validation::validate_plant_rule;

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

/// Validated plant entries in display order, at most one per plant type
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: Vec<PlantRule>,
}

impl Catalog {
    /// The catalog compiled into the crate, built on first use
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| Catalog {
            entries: builtin_entries(),
        })
    }

    /// Keeps the valid entries, skipping invalid ones and repeated plant types
    pub fn from_entries(entries: Vec<PlantRule>) -> Result<Self, CatalogError> {
        let total = entries.len();
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(total);

        for entry in entries {
            if let Err(reason) = validate_plant_rule(&entry) {
                tracing::warn!("Skipping catalog entry {}: {}", entry.plant_type, reason);
                continue;
            }
            if !seen.insert(entry.plant_type) {
                tracing::warn!(
                    "Skipping duplicate catalog entry for {}",
                    entry.plant_type
                );
                continue;
            }
            kept.push(entry);
        }

        if kept.is_empty() {
            return Err(CatalogError::Empty);
        }

        tracing::info!("Loaded catalog with {} of {} entries", kept.len(), total);
        Ok(Self { entries: kept })
    }

    /// Parses a JSON array of entries
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<PlantRule> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Reading catalog from {}", path.display());
        Self::from_json(&json)
    }

    pub fn entries(&self) -> &[PlantRule] {
        &self.entries
    }

    pub fn get(&self, plant_type: PlantType) -> Option<&PlantRule> {
        self.entries.iter().find(|e| e.plant_type == plant_type)
    }

    pub fn plant_types(&self) -> impl Iterator<Item = PlantType> + '_ {
        self.entries.iter().map(|e| e.plant_type)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}
