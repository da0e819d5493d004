//! Headless mode for scripted drafts
//!
//! Runs a full draft (catalog load, picks, submission) without a window,
//! suitable for automated checks against a running prediction service.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release -- --headless draft.json
//! ```
//!
//! ## JSON Configuration
//!
//! ```json
//! {
//!   "team": ["Ahri", "Garen", "Lux", "Jinx", "Thresh"],
//!   "enemy": ["Zed", "Darius", "266", "Caitlyn", "Leona"],
//!   "lenient": false,
//!   "output_path": "report.json"
//! }
//! ```

pub mod config;
pub mod runner;

pub use config::HeadlessDraftConfig;
pub use runner::{run_draft, run_headless_draft, run_stats_listing, DraftReport, PickReport};
