//! Render model
//!
//! A plain snapshot of what the draft screen shows, rebuilt from the session
//! every frame. The egui layer only walks this structure and turns clicks
//! back into intents.

use super::availability::resolve;
use super::presenter::{present, PanelView, StatTables};
use super::roster::RosterSide;
use super::session::{DraftSession, Notice};
use crate::catalog::{CatalogStatus, ChampionId};
use crate::prediction::WinrateDisplay;

/// One entry of a slot's pick list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub id: ChampionId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotView {
    pub index: usize,
    pub selected: Option<OptionView>,
    pub focused: bool,
    /// Visible options only, in catalog order
    pub options: Vec<OptionView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterView {
    pub side: RosterSide,
    pub search: String,
    pub slots: Vec<SlotView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DraftView {
    /// Persistent message shown instead of the form
    pub banner: Option<String>,
    /// Empty until the catalog has loaded
    pub rosters: Vec<RosterView>,
    pub panel: PanelView,
    pub submit_enabled: bool,
    pub result: Option<WinrateDisplay>,
    pub notice: Option<Notice>,
}

impl DraftView {
    pub fn build(status: &CatalogStatus, session: &DraftSession, tables: &StatTables) -> Self {
        let catalog = status.catalog();
        let banner = match status {
            CatalogStatus::Failed(message) => Some(message.clone()),
            _ => None,
        };

        let rosters = catalog
            .map(|catalog| {
                RosterSide::all()
                    .into_iter()
                    .map(|side| {
                        let roster = session.store().roster(side);
                        let search = session.search(side);
                        let visibility = resolve(roster, search, catalog);

                        let slots = visibility
                            .iter()
                            .enumerate()
                            .map(|(index, visible)| SlotView {
                                index,
                                selected: roster.pick(index).and_then(|id| {
                                    catalog.character(id).map(|c| OptionView {
                                        id,
                                        name: c.name.clone(),
                                    })
                                }),
                                focused: session.focus() == Some((side, index)),
                                options: catalog
                                    .characters()
                                    .iter()
                                    .filter(|c| visible.is_visible(c.id))
                                    .map(|c| OptionView {
                                        id: c.id,
                                        name: c.name.clone(),
                                    })
                                    .collect(),
                            })
                            .collect();

                        RosterView {
                            side,
                            search: search.to_string(),
                            slots,
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        let panel = session
            .focused_champion()
            .map(|id| present(id, catalog, tables))
            .unwrap_or(PanelView::NoData);

        Self {
            banner,
            submit_enabled: catalog.is_some() && !session.in_flight(),
            rosters,
            panel,
            result: session.result().cloned(),
            notice: session.notice().cloned(),
        }
    }

    /// Number of pick widgets the screen renders
    pub fn slot_widget_count(&self) -> usize {
        self.rosters.iter().map(|r| r.slots.len()).sum()
    }

    pub fn roster(&self, side: RosterSide) -> Option<&RosterView> {
        self.rosters.iter().find(|r| r.side == side)
    }
}
