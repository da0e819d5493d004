//! Static catalog
//!
//! The immutable champion and rune reference data loaded once per session.
//! Everything downstream (resolver, presenter, validator) borrows it; nothing
//! mutates it after construction.

pub mod ddragon;
pub mod plugin;

use bevy::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

pub use ddragon::{CatalogError, CatalogSource, DataDragonClient};
pub use plugin::CatalogPlugin;

/// Numeric champion identifier (Data Dragon `key`).
pub type ChampionId = u32;

/// Numeric rune identifier.
pub type RuneId = u32;

/// One selectable champion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRecord {
    pub id: ChampionId,
    /// Data Dragon textual id, only used to build image references
    pub alias: String,
    pub name: String,
    pub tags: Vec<String>,
}

/// One rune, flattened out of its tree/slot grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuneRecord {
    pub id: RuneId,
    pub name: String,
    pub icon_ref: String,
}

/// Champions and runes for a single game version.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    version: String,
    image_base: String,
    /// Sorted by display name
    characters: Vec<CharacterRecord>,
    by_id: HashMap<ChampionId, usize>,
    runes: HashMap<RuneId, RuneRecord>,
}

impl StaticCatalog {
    /// Build a catalog. Characters are sorted by name (case-insensitive);
    /// a rune id seen twice keeps the later record.
    pub fn new(
        version: impl Into<String>,
        image_base: impl Into<String>,
        mut characters: Vec<CharacterRecord>,
        runes: Vec<RuneRecord>,
    ) -> Self {
        characters.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then(a.id.cmp(&b.id))
        });
        let by_id = characters
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id, i))
            .collect();
        let runes = runes.into_iter().map(|r| (r.id, r)).collect();

        Self {
            version: version.into(),
            image_base: image_base.into(),
            characters,
            by_id,
            runes,
        }
    }

    /// Game version the data belongs to
    pub fn version(&self) -> &str {
        &self.version
    }

    /// All characters in display order
    pub fn characters(&self) -> &[CharacterRecord] {
        &self.characters
    }

    pub fn character(&self, id: ChampionId) -> Option<&CharacterRecord> {
        self.by_id.get(&id).map(|&i| &self.characters[i])
    }

    pub fn contains(&self, id: ChampionId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn rune(&self, id: RuneId) -> Option<&RuneRecord> {
        self.runes.get(&id)
    }

    pub fn rune_count(&self) -> usize {
        self.runes.len()
    }

    /// Square portrait URL for a character
    pub fn image_ref(&self, character: &CharacterRecord) -> String {
        format!(
            "{}/cdn/{}/img/champion/{}.png",
            self.image_base, self.version, character.alias
        )
    }

    /// Look a character up by display name (case-insensitive) or numeric id.
    pub fn find(&self, reference: &str) -> Option<&CharacterRecord> {
        let reference = reference.trim();
        if let Ok(id) = reference.parse::<ChampionId>() {
            return self.character(id);
        }
        let wanted = reference.to_lowercase();
        self.characters
            .iter()
            .find(|c| c.name.to_lowercase() == wanted || c.alias.to_lowercase() == wanted)
    }
}

/// Load progress of the shared catalog.
#[derive(Resource, Debug, Clone, Default)]
pub enum CatalogStatus {
    #[default]
    Loading,
    Ready(Arc<StaticCatalog>),
    Failed(String),
}

impl CatalogStatus {
    /// The catalog, if it has finished loading
    pub fn catalog(&self) -> Option<&StaticCatalog> {
        match self {
            CatalogStatus::Ready(catalog) => Some(catalog.as_ref()),
            _ => None,
        }
    }
}

/// User-facing message shown when the catalog cannot be loaded.
pub const CATALOG_LOAD_FAILED: &str =
    "Could not load the champion list. Check your internet connection and reload.";
