//! draftsight - Champion Draft Builder
//!
//! Build your team and the enemy team from the live champion catalog, inspect
//! matchup and rune statistics per champion, and ask the prediction service
//! for the chance of winning.
//!
//! This library exposes the draft engine and its collaborators for testing
//! and reuse.

pub mod catalog;
pub mod cli;
pub mod draft;
pub mod headless;
pub mod prediction;
pub mod settings;
pub mod states;

// Re-export commonly used types
pub use catalog::{CatalogStatus, CharacterRecord, RuneRecord, StaticCatalog};
pub use draft::{DraftIntent, DraftSession, DraftView, RosterSide, SubmissionPolicy};
pub use headless::HeadlessDraftConfig;
