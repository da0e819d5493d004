//! Application settings
//!
//! Service endpoints, submission policy and window preferences, persisted
//! as `settings.ron` next to the executable.

use bevy::prelude::*;
use bevy::window::{MonitorSelection, PresentMode, WindowMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::ddragon::DEFAULT_DDRAGON_URL;
use crate::draft::SubmissionPolicy;
use crate::prediction::display::DEFAULT_CONFIDENCE_THRESHOLD;
use crate::prediction::DEFAULT_API_URL;

/// User-configurable settings
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Base URL of the prediction API
    pub api_base_url: String,
    /// Base URL of Riot Data Dragon
    pub ddragon_base_url: String,
    /// Data Dragon locale for champion and rune names
    pub locale: String,
    pub request_timeout_secs: u64,
    /// Directory holding `counters.json` and `runes.json`
    pub stats_dir: PathBuf,
    pub submission_policy: SubmissionPolicy,
    /// Win probability above which a prediction is shown as favourable
    pub confidence_threshold: f64,
    pub window_mode: WindowModeOption,
    pub resolution: ResolutionOption,
    pub vsync: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            ddragon_base_url: DEFAULT_DDRAGON_URL.to_string(),
            locale: "es_ES".to_string(),
            request_timeout_secs: 10,
            stats_dir: PathBuf::from("assets/data"),
            submission_policy: SubmissionPolicy::STRICT,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            window_mode: WindowModeOption::Windowed,
            resolution: ResolutionOption::HD720,
            vsync: true,
        }
    }
}

impl AppSettings {
    /// Get the path to the settings file
    fn settings_path() -> PathBuf {
        PathBuf::from("settings.ron")
    }

    /// Load settings from file. A missing file is created with defaults;
    /// an unreadable one falls back to defaults without being overwritten.
    pub fn load() -> Self {
        let path = Self::settings_path();
        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(contents) => match Self::from_ron(&contents) {
                    Ok(settings) => {
                        info!("Loaded settings from {:?}", path);
                        settings
                    }
                    Err(e) => {
                        warn!("Failed to parse settings file: {}", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    warn!("Failed to read settings file: {}", e);
                    Self::default()
                }
            }
        } else {
            info!("No settings file found, writing defaults");
            let settings = Self::default();
            if let Err(e) = settings.save() {
                warn!("Failed to write default settings: {}", e);
            }
            settings
        }
    }

    /// Parse settings, filling any missing fields with defaults
    pub fn from_ron(contents: &str) -> Result<Self, ron::error::SpannedError> {
        let settings: Self = ron::from_str(contents)?;
        Ok(settings.sanitized())
    }

    /// Save settings to file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let path = Self::settings_path();
        let contents = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        fs::write(&path, contents)?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Clamp values that would make the draft unusable
    fn sanitized(mut self) -> Self {
        let policy = &mut self.submission_policy;
        policy.max_filled = policy.max_filled.clamp(1, crate::draft::ROSTER_SIZE);
        policy.min_filled = policy.min_filled.clamp(1, policy.max_filled);
        if !(0.5..1.0).contains(&self.confidence_threshold) {
            warn!(
                "confidence_threshold {} out of range, using {}",
                self.confidence_threshold, DEFAULT_CONFIDENCE_THRESHOLD
            );
            self.confidence_threshold = DEFAULT_CONFIDENCE_THRESHOLD;
        }
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn present_mode(&self) -> PresentMode {
        if self.vsync {
            PresentMode::AutoVsync
        } else {
            PresentMode::AutoNoVsync
        }
    }
}

/// Window mode options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowModeOption {
    Windowed,
    BorderlessFullscreen,
}

impl WindowModeOption {
    pub fn to_bevy(&self) -> WindowMode {
        match self {
            WindowModeOption::Windowed => WindowMode::Windowed,
            WindowModeOption::BorderlessFullscreen => WindowMode::BorderlessFullscreen(MonitorSelection::Current),
        }
    }
}

/// Resolution presets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionOption {
    HD720,
    HD1080,
    QHD1440,
}

impl ResolutionOption {
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            ResolutionOption::HD720 => (1280.0, 720.0),
            ResolutionOption::HD1080 => (1920.0, 1080.0),
            ResolutionOption::QHD1440 => (2560.0, 1440.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_strict_policy_and_spanish_names() {
        let settings = AppSettings::default();
        assert_eq!(settings.submission_policy, SubmissionPolicy::STRICT);
        assert_eq!(settings.locale, "es_ES");
        assert_eq!(settings.confidence_threshold, 0.55);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings = AppSettings::from_ron(
            r#"(api_base_url: "http://predict.local", submission_policy: (min_filled: 1, max_filled: 5))"#,
        )
        .unwrap();
        assert_eq!(settings.api_base_url, "http://predict.local");
        assert_eq!(settings.submission_policy, SubmissionPolicy::LENIENT);
        assert_eq!(settings.ddragon_base_url, DEFAULT_DDRAGON_URL);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let settings = AppSettings::from_ron(
            r#"(submission_policy: (min_filled: 0, max_filled: 9), confidence_threshold: 2.0)"#,
        )
        .unwrap();
        assert_eq!(settings.submission_policy, SubmissionPolicy { min_filled: 1, max_filled: 5 });
        assert_eq!(settings.confidence_threshold, DEFAULT_CONFIDENCE_THRESHOLD);
    }

    #[test]
    fn test_round_trip_through_ron() {
        let settings = AppSettings {
            vsync: false,
            resolution: ResolutionOption::QHD1440,
            ..AppSettings::default()
        };
        let text = ron::ser::to_string_pretty(&settings, ron::ser::PrettyConfig::default()).unwrap();
        assert_eq!(AppSettings::from_ron(&text).unwrap(), settings);
    }
}
