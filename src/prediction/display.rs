//! Win probability presentation

/// Default cut-off above which a prediction counts as favourable
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.55;

/// How strongly the prediction leans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    /// Above the threshold
    High,
    /// Between `1 - threshold` and the threshold
    Even,
    /// Below `1 - threshold`
    Low,
}

impl Confidence {
    pub fn classify(winrate: f64, threshold: f64) -> Self {
        if winrate > threshold {
            Confidence::High
        } else if winrate < 1.0 - threshold {
            Confidence::Low
        } else {
            Confidence::Even
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Confidence::High => "Favourable",
            Confidence::Even => "Even",
            Confidence::Low => "Unfavourable",
        }
    }
}

/// A returned probability ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct WinrateDisplay {
    pub winrate: f64,
    /// Percentage with one decimal, e.g. "55.2%"
    pub text: String,
    pub confidence: Confidence,
}

impl WinrateDisplay {
    pub fn new(winrate: f64, threshold: f64) -> Self {
        Self {
            winrate,
            text: format!("{:.1}%", winrate * 100.0),
            confidence: Confidence::classify(winrate, threshold),
        }
    }
}
