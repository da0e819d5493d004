//! Riot Data Dragon catalog source
//!
//! Three requests build a catalog: the version list (first entry is the
//! latest), the champion dataset and the rune trees for that version.

use bevy::log::info;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

use super::{CharacterRecord, RuneRecord, StaticCatalog};

pub const DEFAULT_DDRAGON_URL: &str = "https://ddragon.leagueoflegends.com";

/// Why a catalog could not be built
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("malformed payload: {0}")]
    Decode(String),
    #[error("version list is empty")]
    NoVersion,
}

/// Anything that can produce a [`StaticCatalog`].
pub trait CatalogSource {
    fn load(&self) -> Result<StaticCatalog, CatalogError>;
}

#[derive(Debug, Deserialize)]
struct ChampionFile {
    data: HashMap<String, ChampionEntry>,
}

#[derive(Debug, Deserialize)]
struct ChampionEntry {
    /// Numeric id as a string
    key: String,
    /// Textual id, e.g. "MonkeyKing"
    id: String,
    name: String,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RuneTree {
    #[serde(default)]
    slots: Vec<RuneSlot>,
}

#[derive(Debug, Deserialize)]
struct RuneSlot {
    #[serde(default)]
    runes: Vec<RuneEntry>,
}

#[derive(Debug, Deserialize)]
struct RuneEntry {
    id: u32,
    name: String,
    icon: String,
}

/// Pick the latest version out of `versions.json`.
pub fn parse_latest_version(body: &str) -> Result<String, CatalogError> {
    let versions: Vec<String> =
        serde_json::from_str(body).map_err(|e| CatalogError::Decode(e.to_string()))?;
    versions.into_iter().next().ok_or(CatalogError::NoVersion)
}

/// Convert `champion.json` into character records.
pub fn parse_champions(body: &str) -> Result<Vec<CharacterRecord>, CatalogError> {
    let file: ChampionFile =
        serde_json::from_str(body).map_err(|e| CatalogError::Decode(e.to_string()))?;

    file.data
        .into_values()
        .map(|entry| {
            let id = entry.key.trim().parse().map_err(|_| {
                CatalogError::Decode(format!(
                    "champion {} has non-numeric key '{}'",
                    entry.id, entry.key
                ))
            })?;
            Ok(CharacterRecord {
                id,
                alias: entry.id,
                name: entry.name,
                tags: entry.tags,
            })
        })
        .collect()
}

/// Flatten `runesReforged.json` (tree → slot → rune) into rune records.
pub fn parse_runes(body: &str, image_base: &str) -> Result<Vec<RuneRecord>, CatalogError> {
    let trees: Vec<RuneTree> =
        serde_json::from_str(body).map_err(|e| CatalogError::Decode(e.to_string()))?;

    Ok(trees
        .into_iter()
        .flat_map(|tree| tree.slots)
        .flat_map(|slot| slot.runes)
        .map(|rune| RuneRecord {
            id: rune.id,
            name: rune.name,
            icon_ref: format!("{}/cdn/img/{}", image_base, rune.icon),
        })
        .collect())
}

/// Blocking Data Dragon client
#[derive(Debug, Clone)]
pub struct DataDragonClient {
    client: Client,
    base_url: String,
    locale: String,
}

impl DataDragonClient {
    pub fn new(
        base_url: impl Into<String>,
        locale: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CatalogError> {
        let base_url: String = base_url.into();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| CatalogError::Transport {
                url: base_url.clone(),
                source,
            })?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            locale: locale.into(),
        })
    }

    fn get_text(&self, url: String) -> Result<String, CatalogError> {
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|source| CatalogError::Transport {
                url: url.clone(),
                source,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                url,
                status: status.as_u16(),
            });
        }
        response
            .text()
            .map_err(|source| CatalogError::Transport { url, source })
    }

    pub fn latest_version(&self) -> Result<String, CatalogError> {
        let body = self.get_text(format!("{}/api/versions.json", self.base_url))?;
        parse_latest_version(&body)
    }
}

impl CatalogSource for DataDragonClient {
    fn load(&self) -> Result<StaticCatalog, CatalogError> {
        let version = self.latest_version()?;
        info!("Loading catalog for version {} ({})", version, self.locale);

        let champions = self.get_text(format!(
            "{}/cdn/{}/data/{}/champion.json",
            self.base_url, version, self.locale
        ))?;
        let characters = parse_champions(&champions)?;

        let runes = self.get_text(format!(
            "{}/cdn/{}/data/{}/runesReforged.json",
            self.base_url, version, self.locale
        ))?;
        let runes = parse_runes(&runes, &self.base_url)?;

        let catalog = StaticCatalog::new(version, self.base_url.clone(), characters, runes);
        info!(
            "Catalog {} loaded: {} champions, {} runes",
            catalog.version(),
            catalog.characters().len(),
            catalog.rune_count()
        );
        Ok(catalog)
    }
}
