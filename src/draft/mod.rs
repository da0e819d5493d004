//! Draft engine
//!
//! Roster state, per-slot availability, the detail panel and submission
//! gating. Independent of bevy systems and of the network; the app and the
//! headless runner both drive it through [`DraftSession::update`].

pub mod availability;
pub mod presenter;
pub mod roster;
pub mod session;
pub mod validator;
pub mod view;

pub use availability::{is_hidden, matches_search, resolve, resolve_slot, Visibility};
pub use presenter::{present, DisplayRecord, PanelView, StatTables};
pub use roster::{Roster, RosterSide, SelectionError, SelectionStore, Slot, ROSTER_SIZE};
pub use session::{DraftIntent, DraftSession, Effect, Notice, NoticeKind};
pub use validator::{validate, Rejection, Submission, SubmissionPolicy};
pub use view::DraftView;
