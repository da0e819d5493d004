//! Selection state store
//!
//! Two rosters of five slots each. A champion may appear at most once per
//! roster; the same champion on both rosters is allowed.

use std::fmt;
use thiserror::Error;

use crate::catalog::ChampionId;

/// Slots per roster
pub const ROSTER_SIZE: usize = 5;

/// Which side of the draft a roster belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RosterSide {
    Own,
    Enemy,
}

impl RosterSide {
    pub fn all() -> [RosterSide; 2] {
        [RosterSide::Own, RosterSide::Enemy]
    }

    pub fn name(&self) -> &'static str {
        match self {
            RosterSide::Own => "Your team",
            RosterSide::Enemy => "Enemy team",
        }
    }

    fn index(self) -> usize {
        match self {
            RosterSide::Own => 0,
            RosterSide::Enemy => 1,
        }
    }
}

impl fmt::Display for RosterSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One pick position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub roster: RosterSide,
    pub index: usize,
    pub champion_id: Option<ChampionId>,
}

/// Five slots of one side, indices 0..5
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    side: RosterSide,
    picks: [Option<ChampionId>; ROSTER_SIZE],
}

impl Roster {
    pub fn new(side: RosterSide) -> Self {
        Self {
            side,
            picks: [None; ROSTER_SIZE],
        }
    }

    pub fn side(&self) -> RosterSide {
        self.side
    }

    pub fn slot(&self, index: usize) -> Option<Slot> {
        self.picks.get(index).map(|&champion_id| Slot {
            roster: self.side,
            index,
            champion_id,
        })
    }

    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.picks
            .iter()
            .enumerate()
            .map(move |(index, &champion_id)| Slot {
                roster: self.side,
                index,
                champion_id,
            })
    }

    pub fn pick(&self, index: usize) -> Option<ChampionId> {
        self.picks.get(index).copied().flatten()
    }

    /// Slot index holding `id`, ignoring `except`
    pub fn holder_of(&self, id: ChampionId, except: Option<usize>) -> Option<usize> {
        self.picks
            .iter()
            .enumerate()
            .find(|&(i, &pick)| Some(i) != except && pick == Some(id))
            .map(|(i, _)| i)
    }

    pub fn filled_count(&self) -> usize {
        self.picks.iter().filter(|p| p.is_some()).count()
    }

    /// Picked ids in slot order, unfilled slots skipped
    pub fn picked_ids(&self) -> Vec<ChampionId> {
        self.picks.iter().flatten().copied().collect()
    }
}

/// Rejected store mutation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("slot {index} does not exist")]
    NoSuchSlot { index: usize },
    #[error("champion {champion_id} is already picked in slot {held_by} of {side}")]
    AlreadyPicked {
        side: RosterSide,
        champion_id: ChampionId,
        held_by: usize,
    },
}

/// Owns both rosters; the only mutable draft data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionStore {
    rosters: [Roster; 2],
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self {
            rosters: [Roster::new(RosterSide::Own), Roster::new(RosterSide::Enemy)],
        }
    }
}

impl SelectionStore {
    pub fn roster(&self, side: RosterSide) -> &Roster {
        &self.rosters[side.index()]
    }

    /// Set or clear exactly one slot. The other roster is never touched.
    pub fn set_slot(
        &mut self,
        side: RosterSide,
        index: usize,
        champion_id: Option<ChampionId>,
    ) -> Result<&Roster, SelectionError> {
        if index >= ROSTER_SIZE {
            return Err(SelectionError::NoSuchSlot { index });
        }
        let roster = &mut self.rosters[side.index()];
        if let Some(id) = champion_id {
            if let Some(held_by) = roster.holder_of(id, Some(index)) {
                return Err(SelectionError::AlreadyPicked {
                    side,
                    champion_id: id,
                    held_by,
                });
            }
        }
        roster.picks[index] = champion_id;
        Ok(roster)
    }

    /// Clear every slot of both rosters
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
