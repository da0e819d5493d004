//! Detail panel presenter
//!
//! Merges a champion's catalog entry with the counter and rune statistic
//! tables. Missing statistics are an empty-data condition, never an error.

use bevy::log::{info, warn};
use bevy::prelude::Resource;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::catalog::{ChampionId, RuneId, StaticCatalog};

/// Counters shown in the panel
pub const MAX_COUNTERS: usize = 5;
/// Runes shown in the panel
pub const MAX_RUNES: usize = 3;
/// Joins a champion's role tags
pub const ROLE_SEPARATOR: &str = " · ";
/// Shown instead of an empty counter list
pub const INSUFFICIENT_DATA: &str = "Insufficient data";
/// Shown instead of an empty rune list
pub const NO_RUNE_DATA: &str = "No rune data";

/// One champion's win rate against a specific opponent
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CounterStat {
    #[serde(rename = "enemy_id")]
    pub opponent_id: ChampionId,
    pub winrate: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CounterEntry {
    #[serde(default)]
    pub counters: Vec<CounterStat>,
}

/// One champion's win rate with a given rune
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RuneStat {
    pub rune_id: RuneId,
    pub winrate: f64,
}

/// Precomputed per-champion statistics, already sorted and capped upstream.
#[derive(Resource, Debug, Clone, Default)]
pub struct StatTables {
    pub counters: HashMap<ChampionId, CounterEntry>,
    pub runes: HashMap<ChampionId, Vec<RuneStat>>,
}

impl StatTables {
    /// Parse the two JSON tables
    pub fn from_json(counters: &str, runes: &str) -> Result<Self, String> {
        let counters = serde_json::from_str(counters)
            .map_err(|e| format!("Failed to parse counters table: {}", e))?;
        let runes =
            serde_json::from_str(runes).map_err(|e| format!("Failed to parse runes table: {}", e))?;
        Ok(Self { counters, runes })
    }

    /// Load `counters.json` and `runes.json` from `dir`. A missing or broken
    /// file leaves that table empty.
    pub fn load_from_dir(dir: &Path) -> Self {
        let counters = read_table(&dir.join("counters.json")).unwrap_or_default();
        let runes = read_table(&dir.join("runes.json")).unwrap_or_default();
        let tables = Self { counters, runes };
        info!(
            "Loaded stat tables from {:?}: {} counter rows, {} rune rows",
            dir,
            tables.counters.len(),
            tables.runes.len()
        );
        tables
    }
}

fn read_table<T: serde::de::DeserializeOwned>(path: &Path) -> Option<T> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!("Stat table {:?} unavailable: {}", path, e);
            return None;
        }
    };
    match serde_json::from_str(&contents) {
        Ok(table) => Some(table),
        Err(e) => {
            warn!("Stat table {:?} is malformed: {}", path, e);
            None
        }
    }
}

/// A resolved statistic row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatLine {
    pub label: String,
    pub value: String,
}

/// Everything the detail panel shows for one champion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub id: ChampionId,
    pub name: String,
    pub role_line: String,
    pub image_ref: String,
    pub top_counters: Vec<StatLine>,
    pub top_runes: Vec<StatLine>,
}

impl DisplayRecord {
    /// Counter rows, or the placeholder when there are none
    pub fn counters_or_placeholder(&self) -> Result<&[StatLine], &'static str> {
        if self.top_counters.is_empty() {
            Err(INSUFFICIENT_DATA)
        } else {
            Ok(&self.top_counters)
        }
    }

    /// Rune rows, or the placeholder when there are none
    pub fn runes_or_placeholder(&self) -> Result<&[StatLine], &'static str> {
        if self.top_runes.is_empty() {
            Err(NO_RUNE_DATA)
        } else {
            Ok(&self.top_runes)
        }
    }
}

/// Presenter output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView {
    /// Catalog not loaded yet, or the id is unknown
    NoData,
    Record(DisplayRecord),
}

/// Stored win rate with no further rounding
pub fn format_winrate(winrate: f64) -> String {
    format!("{}% WR", winrate)
}

/// Assemble the detail panel for `id`.
pub fn present(id: ChampionId, catalog: Option<&StaticCatalog>, tables: &StatTables) -> PanelView {
    let Some(catalog) = catalog else {
        return PanelView::NoData;
    };
    let Some(character) = catalog.character(id) else {
        return PanelView::NoData;
    };

    let top_counters = tables
        .counters
        .get(&id)
        .map(|entry| {
            entry
                .counters
                .iter()
                .take(MAX_COUNTERS)
                .map(|stat| StatLine {
                    label: catalog
                        .character(stat.opponent_id)
                        .map(|c| c.name.clone())
                        .unwrap_or_else(|| format!("ID {}", stat.opponent_id)),
                    value: format_winrate(stat.winrate),
                })
                .collect()
        })
        .unwrap_or_default();

    let top_runes = tables
        .runes
        .get(&id)
        .map(|runes| {
            runes
                .iter()
                .take(MAX_RUNES)
                .map(|stat| StatLine {
                    label: catalog
                        .rune(stat.rune_id)
                        .map(|r| r.name.clone())
                        .unwrap_or_else(|| format!("Runa {}", stat.rune_id)),
                    value: format_winrate(stat.winrate),
                })
                .collect()
        })
        .unwrap_or_default();

    PanelView::Record(DisplayRecord {
        id,
        name: character.name.clone(),
        role_line: character.tags.join(ROLE_SEPARATOR),
        image_ref: catalog.image_ref(character),
        top_counters,
        top_runes,
    })
}
