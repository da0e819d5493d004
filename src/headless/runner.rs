//! Headless draft execution
//!
//! Loads the catalog, fills both rosters through the same intents the UI
//! sends, submits once and reports the prediction.

use bevy::log::{error, info, warn};
use serde::Serialize;
use std::path::Path;

use super::config::HeadlessDraftConfig;
use crate::catalog::{CatalogSource, ChampionId, DataDragonClient, StaticCatalog, CATALOG_LOAD_FAILED};
use crate::draft::{DraftIntent, DraftSession, Effect, RosterSide, SubmissionPolicy};
use crate::prediction::{label_stats, ApiClient, PredictionService};
use crate::settings::AppSettings;

/// One resolved pick
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickReport {
    pub id: ChampionId,
    pub name: String,
}

/// Outcome of a headless draft
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftReport {
    pub catalog_version: String,
    pub team: Vec<PickReport>,
    pub enemy: Vec<PickReport>,
    pub winrate: f64,
    /// Formatted percentage, e.g. "55.2%"
    pub display: String,
    pub confidence: String,
}

fn pick_reports(catalog: &StaticCatalog, ids: &[ChampionId]) -> Vec<PickReport> {
    ids.iter()
        .map(|&id| PickReport {
            id,
            name: catalog
                .character(id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| format!("ID {}", id)),
        })
        .collect()
}

/// Run one draft against the given collaborators.
pub fn run_draft(
    config: &HeadlessDraftConfig,
    source: &impl CatalogSource,
    service: &impl PredictionService,
    policy: SubmissionPolicy,
    confidence_threshold: f64,
) -> Result<DraftReport, String> {
    let catalog = source.load().map_err(|e| {
        error!("Catalog load failed: {}", e);
        format!("{} ({})", CATALOG_LOAD_FAILED, e)
    })?;

    let mut session = DraftSession::new(policy, confidence_threshold);

    for (side, picks) in [(RosterSide::Own, &config.team), (RosterSide::Enemy, &config.enemy)] {
        for (index, reference) in picks.iter().enumerate() {
            let character = catalog
                .find(reference)
                .ok_or_else(|| format!("Unknown champion '{}' in {}", reference, side))?;
            session.update(
                DraftIntent::SelectCharacter {
                    roster: side,
                    index,
                    champion_id: Some(character.id),
                },
                &catalog,
            );
            if session.store().roster(side).pick(index) != Some(character.id) {
                return Err(format!(
                    "{} is already picked in {}",
                    character.name, side
                ));
            }
        }
    }

    let submission = match session.update(DraftIntent::Submit, &catalog) {
        Effect::RequestPrediction(submission) => submission,
        Effect::None => {
            return Err(session
                .notice()
                .map(|n| n.message.clone())
                .unwrap_or_else(|| "Submission rejected".to_string()))
        }
    };

    let outcome = service.predict(&submission);
    session.update(DraftIntent::PredictionSettled(outcome), &catalog);
    if let Some(notice) = session.notice() {
        return Err(notice.message.clone());
    }
    let result = session
        .result()
        .ok_or_else(|| "No prediction received".to_string())?;

    Ok(DraftReport {
        catalog_version: catalog.version().to_string(),
        team: pick_reports(&catalog, &submission.team_champions),
        enemy: pick_reports(&catalog, &submission.enemy_champions),
        winrate: result.winrate,
        display: result.text.clone(),
        confidence: result.confidence.label().to_string(),
    })
}

/// Run a headless draft against the live services
pub fn run_headless_draft(config: HeadlessDraftConfig, settings: &AppSettings) -> Result<DraftReport, String> {
    println!("Starting headless draft...");
    println!("  Team: {:?}", config.team);
    println!("  Enemy: {:?}", config.enemy);

    let source = DataDragonClient::new(
        settings.ddragon_base_url.clone(),
        settings.locale.clone(),
        settings.request_timeout(),
    )
    .map_err(|e| e.to_string())?;
    let api_url = config
        .api_base_url
        .clone()
        .unwrap_or_else(|| settings.api_base_url.clone());
    let service = ApiClient::new(api_url, settings.request_timeout()).map_err(|e| e.to_string())?;

    let report = run_draft(
        &config,
        &source,
        &service,
        config.policy(settings.submission_policy),
        settings.confidence_threshold,
    )?;

    println!(
        "Win probability: {} ({}) on patch {}",
        report.display, report.confidence, report.catalog_version
    );

    if let Some(path) = &config.output_path {
        write_report(&report, Path::new(path))?;
        println!("Report saved to: {}", path);
    }
    Ok(report)
}

fn write_report(report: &DraftReport, path: &Path) -> Result<(), String> {
    let contents = serde_json::to_string_pretty(report)
        .map_err(|e| format!("Failed to serialize report: {}", e))?;
    std::fs::write(path, contents).map_err(|e| format!("Failed to write report: {}", e))
}

/// Print the aggregate champion statistics table
pub fn run_stats_listing(settings: &AppSettings, api_url: Option<String>) -> Result<(), String> {
    let api_url = api_url.unwrap_or_else(|| settings.api_base_url.clone());
    let client = ApiClient::new(api_url, settings.request_timeout()).map_err(|e| e.to_string())?;
    let stats = client.champion_stats().map_err(|e| e.user_message())?;

    let catalog = DataDragonClient::new(
        settings.ddragon_base_url.clone(),
        settings.locale.clone(),
        settings.request_timeout(),
    )
    .and_then(|source| source.load());
    let catalog = match catalog {
        Ok(catalog) => Some(catalog),
        Err(e) => {
            warn!("Champion names unavailable: {}", e);
            None
        }
    };

    info!("Fetched statistics for {} champions", stats.len());
    println!("{:<20} {:>8} {:>9}", "Champion", "Games", "Winrate");
    for (label, stat) in label_stats(&stats, catalog.as_ref()) {
        println!(
            "{:<20} {:>8} {:>8.1}%",
            label,
            stat.games,
            stat.winrate * 100.0
        );
    }
    Ok(())
}
