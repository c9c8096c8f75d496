//! Manual name-override table for identity matching.
//!
//! Administrators maintain a flat JSON object mapping a display name as one
//! system knows it to the name the other system uses. It covers the cases the
//! automatic matching heuristics cannot, such as transliteration mismatches
//! or legal vs. preferred names.

use std::{collections::HashMap, path::Path, sync::Arc};

use tracing::{info, warn};

/// Read-only alias lookup table, loaded once at startup.
///
/// It is designed to be trivially cloneable; the map is shared and never
/// written after load, so no locking is required.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    inner: Arc<HashMap<String, String>>,
}

impl AliasTable {
    /// Load the table from a flat JSON object file.
    ///
    /// A missing or malformed file yields the empty table; startup proceeds
    /// without overrides either way.
    pub fn load(path: &Path) -> Self {
        let raw = match std::fs::read(path) {
            Ok(raw) => raw,
            Err(_) => {
                info!("No alias table at {}; continuing without overrides.", path.display());
                return Self::default();
            }
        };

        match serde_json::from_slice::<HashMap<String, String>>(&raw) {
            Ok(map) => {
                info!("Loaded {} alias entries from {}.", map.len(), path.display());
                Self { inner: Arc::new(map) }
            }
            Err(err) => {
                warn!("Alias table at {} is not a flat JSON object ({}); ignoring it.", path.display(), err);
                Self::default()
            }
        }
    }

    /// Look up the override for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner.get(name).map(String::as_str)
    }

    /// The override for `name`, or `name` itself when there is none.
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.get(name).unwrap_or(name)
    }
}

impl FromIterator<(String, String)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self { inner: Arc::new(iter.into_iter().collect()) }
    }
}

// Tests.
