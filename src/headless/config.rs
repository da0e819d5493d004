//! JSON configuration parsing for headless mode
//!
//! Champions are referenced by display name (case-insensitive) or numeric
//! id; resolution against the catalog happens in the runner once it loads.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::draft::{SubmissionPolicy, ROSTER_SIZE};

/// Headless draft configuration loaded from JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlessDraftConfig {
    /// Own team picks in slot order
    pub team: Vec<String>,
    /// Enemy team picks in slot order
    pub enemy: Vec<String>,
    /// Accept partial rosters (1-5 picks) instead of requiring five
    #[serde(default)]
    pub lenient: bool,
    /// Prediction API override (default: settings file)
    #[serde(default)]
    pub api_base_url: Option<String>,
    /// Where to write the JSON report (optional)
    #[serde(default)]
    pub output_path: Option<String>,
}

impl HeadlessDraftConfig {
    /// Load configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, String> {
        let config: HeadlessDraftConfig =
            serde_json::from_str(contents).map_err(|e| format!("Failed to parse JSON: {}", e))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), String> {
        for (label, picks) in [("team", &self.team), ("enemy", &self.enemy)] {
            if picks.len() > ROSTER_SIZE {
                return Err(format!(
                    "{} has {} picks; a roster holds at most {}",
                    label,
                    picks.len(),
                    ROSTER_SIZE
                ));
            }
            if let Some(blank) = picks.iter().position(|p| p.trim().is_empty()) {
                return Err(format!("{} pick {} is empty", label, blank + 1));
            }
            for (i, pick) in picks.iter().enumerate() {
                let lowered = pick.trim().to_lowercase();
                if picks[..i].iter().any(|p| p.trim().to_lowercase() == lowered) {
                    return Err(format!("{} lists '{}' more than once", label, pick));
                }
            }
        }
        Ok(())
    }

    /// `lenient` forces the 1-5 policy; otherwise `configured` applies
    pub fn policy(&self, configured: SubmissionPolicy) -> SubmissionPolicy {
        if self.lenient {
            SubmissionPolicy::LENIENT
        } else {
            configured
        }
    }
}
