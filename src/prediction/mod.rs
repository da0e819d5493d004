//! Prediction service client
//!
//! Submits completed rosters to the win-probability API and reads the
//! aggregate champion statistics it publishes.

pub mod display;

use bevy::log::{info, warn};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::catalog::{ChampionId, StaticCatalog};
use crate::draft::Submission;

pub use display::{Confidence, WinrateDisplay, DEFAULT_CONFIDENCE_THRESHOLD};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const PREDICT_PATH: &str = "/api/v1/predict";
pub const CHAMPION_STATS_PATH: &str = "/api/v1/stats/champions";

/// Shown when the server gives no detail of its own
pub const GENERIC_PREDICTION_ERROR: &str = "Could not get a prediction. Please try again.";

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-success status; `detail` is the server's own message if it sent one
    #[error("server returned status {status}")]
    Server { status: u16, detail: Option<String> },
    #[error("malformed response: {0}")]
    Decode(String),
}

impl PredictionError {
    /// Message for the user: the server's detail verbatim, else a generic one
    pub fn user_message(&self) -> String {
        match self {
            PredictionError::Server {
                detail: Some(detail),
                ..
            } if !detail.is_empty() => detail.clone(),
            _ => GENERIC_PREDICTION_ERROR.to_string(),
        }
    }
}

/// Request body for the predict endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictRequest<'a> {
    pub team_champions: &'a [ChampionId],
    pub enemy_champions: &'a [ChampionId],
}

#[derive(Debug, Clone, Deserialize)]
struct PredictResponse {
    winrate: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

/// Aggregate performance of one champion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionStat {
    pub champion_id: ChampionId,
    pub games: u64,
    #[serde(default)]
    pub wins: Option<u64>,
    pub winrate: f64,
}

/// Anything that can turn a submission into a win probability.
pub trait PredictionService {
    fn predict(&self, submission: &Submission) -> Result<f64, PredictionError>;
}

/// Decode a predict response from its status and body.
pub fn parse_predict_response(status: u16, body: &str) -> Result<f64, PredictionError> {
    if !(200..300).contains(&status) {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .unwrap_or_default()
            .detail;
        return Err(PredictionError::Server { status, detail });
    }
    let response: PredictResponse =
        serde_json::from_str(body).map_err(|e| PredictionError::Decode(e.to_string()))?;
    if !(0.0..=1.0).contains(&response.winrate) {
        return Err(PredictionError::Decode(format!(
            "winrate {} outside [0, 1]",
            response.winrate
        )));
    }
    Ok(response.winrate)
}

/// Blocking client for the prediction API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, PredictionError> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url: String = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Aggregate per-champion statistics, most played first
    pub fn champion_stats(&self) -> Result<Vec<ChampionStat>, PredictionError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, CHAMPION_STATS_PATH))
            .send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        if !(200..300).contains(&status) {
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .unwrap_or_default()
                .detail;
            return Err(PredictionError::Server { status, detail });
        }
        serde_json::from_str(&body).map_err(|e| PredictionError::Decode(e.to_string()))
    }
}

impl PredictionService for ApiClient {
    fn predict(&self, submission: &Submission) -> Result<f64, PredictionError> {
        let request = PredictRequest {
            team_champions: &submission.team_champions,
            enemy_champions: &submission.enemy_champions,
        };
        info!(
            "Requesting prediction: {:?} vs {:?}",
            request.team_champions, request.enemy_champions
        );
        let response = self
            .client
            .post(format!("{}{}", self.base_url, PREDICT_PATH))
            .json(&request)
            .send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        let result = parse_predict_response(status, &body);
        if let Err(e) = &result {
            warn!("Prediction failed: {}", e);
        }
        result
    }
}

/// Stats rows labelled with champion names, `"Champ {id}"` when unknown.
pub fn label_stats(stats: &[ChampionStat], catalog: Option<&StaticCatalog>) -> Vec<(String, ChampionStat)> {
    stats
        .iter()
        .map(|stat| {
            let label = catalog
                .and_then(|c| c.character(stat.champion_id))
                .map(|c| c.name.clone())
                .unwrap_or_else(|| format!("Champ {}", stat.champion_id));
            (label, stat.clone())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_body_yields_winrate() {
        assert_eq!(parse_predict_response(200, r#"{"winrate": 0.552}"#).unwrap(), 0.552);
    }

    #[test]
    fn test_error_detail_used_verbatim() {
        let err = parse_predict_response(500, r#"{"detail": "Model not loaded"}"#).unwrap_err();
        assert_eq!(err.user_message(), "Model not loaded");
    }

    #[test]
    fn test_error_without_detail_falls_back() {
        let err = parse_predict_response(502, "<html>Bad gateway</html>").unwrap_err();
        assert!(matches!(err, PredictionError::Server { status: 502, detail: None }));
        assert_eq!(err.user_message(), GENERIC_PREDICTION_ERROR);

        let err = parse_predict_response(422, r#"{"detail": ""}"#).unwrap_err();
        assert_eq!(err.user_message(), GENERIC_PREDICTION_ERROR);
    }

    #[test]
    fn test_out_of_range_winrate_rejected() {
        assert!(matches!(
            parse_predict_response(200, r#"{"winrate": 1.7}"#),
            Err(PredictionError::Decode(_))
        ));
    }

    #[test]
    fn test_request_body_shape() {
        let request = PredictRequest {
            team_champions: &[1, 2],
            enemy_champions: &[3],
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"team_champions":[1,2],"enemy_champions":[3]}"#
        );
    }

    #[test]
    fn test_label_stats_falls_back_to_id() {
        let stats = vec![ChampionStat {
            champion_id: 99,
            games: 10,
            wins: Some(6),
            winrate: 0.6,
        }];
        let labelled = label_stats(&stats, None);
        assert_eq!(labelled[0].0, "Champ 99");
    }
}
