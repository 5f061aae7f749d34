//! Chord-to-Roman-numeral lookup tables.
//!
//! The tables are plain data keyed by musical key name; nothing here infers
//! harmony. The crate ships a small bundled set, and callers can load their
//! own JSON file with the same shape:
//!
//! ```json
//! { "C": { "C": "I", "Dm": "ii", "G": "V" } }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default tables shipped with the crate (the common guitar keys).
static BUNDLED_JSON: &str = include_str!("../../data/keymaps.json");

/// Chord name to Roman-numeral label mapping for a single musical key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyMap(HashMap<String, String>);

impl KeyMap {
    /// Look up the Roman-numeral label for a chord name, verbatim match only.
    pub fn roman_for(&self, chord: &str) -> Option<&str> {
        self.0.get(chord).map(String::as_str)
    }

    /// Number of chords in this table.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// All known key tables, keyed by musical key name ("C", "G", ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyMaps(HashMap<String, KeyMap>);

impl KeyMaps {
    /// The table for a musical key, if one is known.
    pub fn for_key(&self, key: &str) -> Option<&KeyMap> {
        self.0.get(key)
    }

    /// Names of all keys with a table, in no particular order.
    pub fn key_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// The tables bundled with the crate.
    ///
    /// The bundled JSON is validated by tests, so the parse cannot fail at
    /// runtime.
    #[allow(clippy::expect_used)]
    pub fn bundled() -> Self {
        serde_json::from_str(BUNDLED_JSON).expect("valid bundled keymaps.json")
    }

    /// Load key tables from a user-supplied JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs_err::read_to_string(path)
            .map_err(|e| Error::io(e, Some(path.to_path_buf())))?;
        let maps: Self = serde_json::from_str(&text)
            .map_err(|e| Error::parse(e.to_string(), Some(path.to_path_buf())))?;
        tracing::info!("Loaded {} key tables from {}", maps.0.len(), path.display());
        Ok(maps)
    }
}
