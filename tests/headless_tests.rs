//! Integration tests for headless draft execution
//!
//! These tests verify that:
//! - Draft configs parse and reject malformed rosters
//! - Headless drafts resolve names and ids against the catalog
//! - Reports carry the picks in slot order and the formatted prediction

mod common;

use draftsight::draft::SubmissionPolicy;
use draftsight::headless::{run_draft, DraftReport, HeadlessDraftConfig};
use draftsight::prediction::DEFAULT_CONFIDENCE_THRESHOLD;

/// Helper to create a draft config
fn create_config(team: Vec<&str>, enemy: Vec<&str>, lenient: bool) -> HeadlessDraftConfig {
    HeadlessDraftConfig {
        team: team.into_iter().map(String::from).collect(),
        enemy: enemy.into_iter().map(String::from).collect(),
        lenient,
        api_base_url: None,
        output_path: None,
    }
}

fn run(config: &HeadlessDraftConfig, service: &common::RecordingService) -> Result<DraftReport, String> {
    run_draft(
        config,
        &common::FakeCatalogSource { fail: false },
        service,
        config.policy(SubmissionPolicy::STRICT),
        DEFAULT_CONFIDENCE_THRESHOLD,
    )
}

// =============================================================================
// Config parsing
// =============================================================================

#[test]
fn test_config_parses_with_defaults() {
    let config = HeadlessDraftConfig::from_json(
        r#"{"team": ["Ahri", "Garen"], "enemy": ["Zed"]}"#,
    )
    .unwrap();

    assert_eq!(config.team, vec!["Ahri", "Garen"]);
    assert_eq!(config.enemy, vec!["Zed"]);
    assert!(!config.lenient);
    assert!(config.api_base_url.is_none());
    assert!(config.output_path.is_none());
}

#[test]
fn test_config_rejects_oversized_roster() {
    let err = HeadlessDraftConfig::from_json(
        r#"{"team": ["Ahri", "Garen", "Lux", "Jinx", "Thresh", "Zed"], "enemy": []}"#,
    )
    .unwrap_err();
    assert!(err.contains("at most 5"), "{}", err);
}

#[test]
fn test_config_rejects_blank_pick() {
    let err = HeadlessDraftConfig::from_json(r#"{"team": ["Ahri", "  "], "enemy": []}"#).unwrap_err();
    assert!(err.contains("empty"), "{}", err);
}

#[test]
fn test_config_rejects_case_insensitive_duplicate() {
    let err = HeadlessDraftConfig::from_json(r#"{"team": [], "enemy": ["Zed", "zed"]}"#).unwrap_err();
    assert!(err.contains("more than once"), "{}", err);
}

#[test]
fn test_config_rejects_malformed_json() {
    assert!(HeadlessDraftConfig::from_json("{\"team\": [").is_err());
}

#[test]
fn test_lenient_flag_overrides_configured_policy() {
    let strict = create_config(vec![], vec![], false);
    let lenient = create_config(vec![], vec![], true);

    assert_eq!(strict.policy(SubmissionPolicy::STRICT), SubmissionPolicy::STRICT);
    assert_eq!(lenient.policy(SubmissionPolicy::STRICT), SubmissionPolicy::LENIENT);
}

// =============================================================================
// Draft execution
// =============================================================================

#[test]
fn test_full_draft_report() {
    let config = create_config(
        vec!["Ahri", "garen", "99", "Jinx", "Thresh"],
        vec!["Zed", "Darius", "266", "Caitlyn", "miss fortune"],
        false,
    );
    let service = common::RecordingService::answering(0.612);

    let report = run(&config, &service).unwrap();

    assert_eq!(report.catalog_version, "14.1.1");
    let team: Vec<u32> = report.team.iter().map(|p| p.id).collect();
    let enemy: Vec<u32> = report.enemy.iter().map(|p| p.id).collect();
    assert_eq!(team, vec![103, 86, 99, 222, 412]);
    assert_eq!(enemy, vec![238, 122, 266, 51, 21]);
    assert_eq!(report.team[2].name, "Lux");
    assert_eq!(report.enemy[4].name, "Miss Fortune");
    assert_eq!(report.display, "61.2%");
    assert_eq!(report.confidence, "Favourable");

    let requests = service.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].team_champions, team);
}

#[test]
fn test_alias_resolves_to_display_name() {
    let config = create_config(vec!["MonkeyKing"], vec!["Ahri"], true);
    let service = common::RecordingService::answering(0.5);

    let report = run(&config, &service).unwrap();
    assert_eq!(report.team[0].id, 62);
    assert_eq!(report.team[0].name, "Wukong");
    assert_eq!(report.confidence, "Even");
}

#[test]
fn test_strict_draft_with_partial_roster_fails_without_request() {
    let config = create_config(vec!["Ahri", "Garen"], vec!["Zed"], false);
    let service = common::RecordingService::answering(0.5);

    let err = run(&config, &service).unwrap_err();
    assert!(err.starts_with("Incomplete roster"), "{}", err);
    assert!(service.requests.borrow().is_empty());
}

#[test]
fn test_unknown_champion_fails_without_request() {
    let config = create_config(vec!["Teemo"], vec!["Zed"], true);
    let service = common::RecordingService::answering(0.5);

    let err = run(&config, &service).unwrap_err();
    assert!(err.contains("Teemo"), "{}", err);
    assert!(service.requests.borrow().is_empty());
}

#[test]
fn test_same_champion_by_name_and_id_is_a_duplicate() {
    let config = create_config(vec!["Ahri", "103"], vec!["Zed"], true);
    let service = common::RecordingService::answering(0.5);

    let err = run(&config, &service).unwrap_err();
    assert!(err.contains("already picked"), "{}", err);
}

#[test]
fn test_server_error_detail_is_reported() {
    let config = create_config(vec!["Ahri"], vec!["Zed"], true);
    let service = common::RecordingService::failing(503, Some("Model not loaded"));

    let err = run(&config, &service).unwrap_err();
    assert_eq!(err, "Model not loaded");
    assert_eq!(service.requests.borrow().len(), 1);
}

#[test]
fn test_report_serializes_to_json() {
    let config = create_config(vec!["Ahri"], vec!["Zed"], true);
    let service = common::RecordingService::answering(0.43);

    let report = run(&config, &service).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["display"], "43.0%");
    assert_eq!(json["confidence"], "Unfavourable");
    assert_eq!(json["team"][0]["name"], "Ahri");
}
