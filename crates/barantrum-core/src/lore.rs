//! Lore data store.
//!
//! The archive content is an immutable JSON asset loaded once at startup.
//! The store does not validate cross references: district jurisdictions and
//! character affiliations are informal names, not foreign keys.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ArchiveResult;
use crate::types::{Association, Character, District, Term, TermCategory};

/// The lore asset compiled into the binary.
const BUILTIN_LORE: &str = include_str!("../assets/lore.json");

/// Preloaded archive content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoreStore {
    /// Message revealed by the typewriter on the intro view
    pub intro: String,
    #[serde(default)]
    pub districts: Vec<District>,
    #[serde(default)]
    pub associations: Vec<Association>,
    #[serde(default)]
    pub terms: Vec<Term>,
    #[serde(default)]
    pub characters: Vec<Character>,
}

impl LoreStore {
    /// Parse the lore asset embedded in the binary.
    pub fn builtin() -> ArchiveResult<Self> {
        Self::from_json(BUILTIN_LORE)
    }

    /// Parse a lore document from a JSON string.
    pub fn from_json(json: &str) -> ArchiveResult<Self> {
        let store: LoreStore = serde_json::from_str(json)?;
        tracing::debug!(
            districts = store.districts.len(),
            associations = store.associations.len(),
            terms = store.terms.len(),
            characters = store.characters.len(),
            "Parsed lore document"
        );
        Ok(store)
    }

    /// Load a lore document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> ArchiveResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        tracing::info!(path = %path.display(), "Loading lore file");
        Self::from_json(&json)
    }

    /// Look up an association by exact name.
    pub fn association(&self, name: &str) -> Option<&Association> {
        self.associations.iter().find(|a| a.name == name)
    }

    /// Look up a character by exact name.
    pub fn character(&self, name: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.name == name)
    }

    /// Terms of one category, in document order.
    pub fn terms_in(&self, category: TermCategory) -> impl Iterator<Item = &Term> {
        self.terms.iter().filter(move |t| t.category == category)
    }
}
