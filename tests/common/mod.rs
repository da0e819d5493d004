//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::cell::RefCell;

use draftsight::catalog::{CatalogError, CatalogSource};
use draftsight::draft::Submission;
use draftsight::prediction::{PredictionError, PredictionService};
use draftsight::{CharacterRecord, RuneRecord, StaticCatalog};

/// (id, alias, name, tags)
pub const CHAMPIONS: &[(u32, &str, &str, &[&str])] = &[
    (1, "Annie", "Annie", &["Mage"]),
    (22, "Ashe", "Ashe", &["Marksman", "Support"]),
    (51, "Caitlyn", "Caitlyn", &["Marksman"]),
    (86, "Garen", "Garen", &["Fighter", "Tank"]),
    (103, "Ahri", "Ahri", &["Mage", "Assassin"]),
    (122, "Darius", "Darius", &["Fighter", "Tank"]),
    (222, "Jinx", "Jinx", &["Marksman"]),
    (238, "Zed", "Zed", &["Assassin"]),
    (266, "Aatrox", "Aatrox", &["Fighter", "Tank"]),
    (412, "Thresh", "Thresh", &["Support", "Fighter"]),
    (89, "Leona", "Leona", &["Tank", "Support"]),
    (99, "Lux", "Lux", &["Mage", "Support"]),
    (21, "MissFortune", "Miss Fortune", &["Marksman"]),
    (62, "MonkeyKing", "Wukong", &["Fighter", "Tank"]),
];

pub fn catalog() -> StaticCatalog {
    let characters = CHAMPIONS
        .iter()
        .map(|&(id, alias, name, tags)| CharacterRecord {
            id,
            alias: alias.to_string(),
            name: name.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        })
        .collect();
    let runes = vec![
        RuneRecord {
            id: 8112,
            name: "Electrocutar".to_string(),
            icon_ref: "https://dd/cdn/img/perk-images/Electrocute.png".to_string(),
        },
        RuneRecord {
            id: 8214,
            name: "Invocar a Aery".to_string(),
            icon_ref: "https://dd/cdn/img/perk-images/Aery.png".to_string(),
        },
    ];
    StaticCatalog::new("14.1.1", "https://dd", characters, runes)
}

/// Catalog source returning a fixed catalog, or failing like a dead network
pub struct FakeCatalogSource {
    pub fail: bool,
}

impl CatalogSource for FakeCatalogSource {
    fn load(&self) -> Result<StaticCatalog, CatalogError> {
        if self.fail {
            Err(CatalogError::Status {
                url: "https://dd/api/versions.json".to_string(),
                status: 503,
            })
        } else {
            Ok(catalog())
        }
    }
}

/// Prediction service that records every request
pub struct RecordingService {
    pub reply: Result<f64, (u16, Option<String>)>,
    pub requests: RefCell<Vec<Submission>>,
}

impl RecordingService {
    pub fn answering(winrate: f64) -> Self {
        Self {
            reply: Ok(winrate),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(status: u16, detail: Option<&str>) -> Self {
        Self {
            reply: Err((status, detail.map(String::from))),
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl PredictionService for RecordingService {
    fn predict(&self, submission: &Submission) -> Result<f64, PredictionError> {
        self.requests.borrow_mut().push(submission.clone());
        match &self.reply {
            Ok(winrate) => Ok(*winrate),
            Err((status, detail)) => Err(PredictionError::Server {
                status: *status,
                detail: detail.clone(),
            }),
        }
    }
}
