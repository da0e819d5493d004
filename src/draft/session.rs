//! Draft session
//!
//! User interactions arrive as [`DraftIntent`] values and are applied by
//! [`DraftSession::update`], which mutates the selection store synchronously
//! and reports any outward work as an [`Effect`]. Rendering reads the session
//! afterwards; nothing here touches the UI or the network.

use bevy::log::{info, warn};
use bevy::prelude::Resource;

use super::roster::{RosterSide, SelectionStore};
use super::validator::{validate, Submission, SubmissionPolicy};
use crate::catalog::{ChampionId, StaticCatalog};
use crate::prediction::{PredictionError, WinrateDisplay, DEFAULT_CONFIDENCE_THRESHOLD};

/// A discrete user or network event
#[derive(Debug)]
pub enum DraftIntent {
    /// Set (or clear, with `None`) one slot
    SelectCharacter {
        roster: RosterSide,
        index: usize,
        champion_id: Option<ChampionId>,
    },
    FocusSlot { roster: RosterSide, index: usize },
    ChangeSearch { roster: RosterSide, text: String },
    Submit,
    /// The in-flight prediction request finished
    PredictionSettled(Result<f64, PredictionError>),
    DismissNotice,
    Reset,
}

/// Work the host must perform after an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Send this submission to the prediction service
    RequestPrediction(Submission),
}

/// Where a notice came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Local form validation; no request was made
    Validation,
    /// The prediction request failed
    Request,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// All mutable draft state
#[derive(Resource, Debug, Clone)]
pub struct DraftSession {
    store: SelectionStore,
    searches: [String; 2],
    focus: Option<(RosterSide, usize)>,
    policy: SubmissionPolicy,
    confidence_threshold: f64,
    in_flight: bool,
    result: Option<WinrateDisplay>,
    notice: Option<Notice>,
}

impl Default for DraftSession {
    fn default() -> Self {
        Self::new(SubmissionPolicy::default(), DEFAULT_CONFIDENCE_THRESHOLD)
    }
}

fn side_index(side: RosterSide) -> usize {
    match side {
        RosterSide::Own => 0,
        RosterSide::Enemy => 1,
    }
}

impl DraftSession {
    pub fn new(policy: SubmissionPolicy, confidence_threshold: f64) -> Self {
        Self {
            store: SelectionStore::default(),
            searches: [String::new(), String::new()],
            focus: None,
            policy,
            confidence_threshold,
            in_flight: false,
            result: None,
            notice: None,
        }
    }

    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    pub fn search(&self, side: RosterSide) -> &str {
        &self.searches[side_index(side)]
    }

    pub fn focus(&self) -> Option<(RosterSide, usize)> {
        self.focus
    }

    /// Champion in the focused slot, if any
    pub fn focused_champion(&self) -> Option<ChampionId> {
        self.focus
            .and_then(|(side, index)| self.store.roster(side).pick(index))
    }

    pub fn policy(&self) -> SubmissionPolicy {
        self.policy
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn result(&self) -> Option<&WinrateDisplay> {
        self.result.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Apply one intent.
    pub fn update(&mut self, intent: DraftIntent, catalog: &StaticCatalog) -> Effect {
        match intent {
            DraftIntent::SelectCharacter {
                roster,
                index,
                champion_id,
            } => {
                if let Some(id) = champion_id {
                    if !catalog.contains(id) {
                        warn!("Ignoring selection of unknown champion {}", id);
                        return Effect::None;
                    }
                }
                match self.store.set_slot(roster, index, champion_id) {
                    Ok(_) => {
                        info!("{} slot {} set to {:?}", roster, index + 1, champion_id);
                        self.focus = Some((roster, index));
                    }
                    Err(e) => warn!("Selection rejected: {}", e),
                }
                Effect::None
            }
            DraftIntent::FocusSlot { roster, index } => {
                if self.store.roster(roster).slot(index).is_some() {
                    self.focus = Some((roster, index));
                }
                Effect::None
            }
            DraftIntent::ChangeSearch { roster, text } => {
                self.searches[side_index(roster)] = text;
                Effect::None
            }
            DraftIntent::Submit => self.submit(),
            DraftIntent::PredictionSettled(outcome) => {
                self.in_flight = false;
                match outcome {
                    Ok(winrate) => {
                        let shown = WinrateDisplay::new(winrate, self.confidence_threshold);
                        info!("Prediction received: {} ({:?})", shown.text, shown.confidence);
                        self.result = Some(shown);
                    }
                    Err(e) => {
                        warn!("Prediction request failed: {}", e);
                        self.notice = Some(Notice {
                            kind: NoticeKind::Request,
                            message: e.user_message(),
                        });
                    }
                }
                Effect::None
            }
            DraftIntent::DismissNotice => {
                self.notice = None;
                Effect::None
            }
            DraftIntent::Reset => {
                let in_flight = self.in_flight;
                *self = Self::new(self.policy, self.confidence_threshold);
                self.in_flight = in_flight;
                Effect::None
            }
        }
    }

    fn submit(&mut self) -> Effect {
        if self.in_flight {
            info!("Submission ignored: a prediction request is already pending");
            return Effect::None;
        }
        self.notice = None;
        self.result = None;

        match validate(
            self.store.roster(RosterSide::Own),
            self.store.roster(RosterSide::Enemy),
            self.policy,
        ) {
            Ok(submission) => {
                self.in_flight = true;
                Effect::RequestPrediction(submission)
            }
            Err(rejection) => {
                info!("Submission rejected: {}", rejection);
                self.notice = Some(Notice {
                    kind: NoticeKind::Validation,
                    message: rejection.to_string(),
                });
                Effect::None
            }
        }
    }
}
