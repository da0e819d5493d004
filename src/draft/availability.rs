//! Availability resolver
//!
//! Decides which catalog entries a slot's pick list shows. A candidate is
//! hidden when another slot of the same roster already holds it, or when it
//! does not match the roster's search text. The slot's own pick is exempt
//! from the first half of the rule only: a filter that does not match the
//! current pick hides it from its own list too.

use std::collections::BTreeMap;

use super::roster::{Roster, ROSTER_SIZE};
use crate::catalog::{ChampionId, StaticCatalog};

/// Case-insensitive substring match; an empty term matches everything.
pub fn matches_search(name: &str, search: &str) -> bool {
    search.is_empty() || name.to_lowercase().contains(&search.to_lowercase())
}

/// `(taken && !is_mine) || !matches_search` for one slot/candidate pair.
pub fn is_hidden(
    roster: &Roster,
    slot_index: usize,
    candidate_id: ChampionId,
    candidate_name: &str,
    search: &str,
) -> bool {
    let taken = roster.holder_of(candidate_id, Some(slot_index)).is_some();
    let is_mine = roster.pick(slot_index) == Some(candidate_id);
    (taken && !is_mine) || !matches_search(candidate_name, search)
}

/// Visibility of every catalog entry within one slot's list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Visibility {
    entries: BTreeMap<ChampionId, bool>,
}

impl Visibility {
    pub fn is_visible(&self, id: ChampionId) -> bool {
        self.entries.get(&id).copied().unwrap_or(false)
    }

    pub fn visible_count(&self) -> usize {
        self.entries.values().filter(|&&v| v).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChampionId, bool)> + '_ {
        self.entries.iter().map(|(&id, &visible)| (id, visible))
    }
}

/// Visibility mapping for a single slot.
pub fn resolve_slot(
    roster: &Roster,
    slot_index: usize,
    search: &str,
    catalog: &StaticCatalog,
) -> Visibility {
    let entries = catalog
        .characters()
        .iter()
        .map(|c| (c.id, !is_hidden(roster, slot_index, c.id, &c.name, search)))
        .collect();
    Visibility { entries }
}

/// Visibility mappings for every slot of a roster, in slot order.
pub fn resolve(roster: &Roster, search: &str, catalog: &StaticCatalog) -> [Visibility; ROSTER_SIZE] {
    std::array::from_fn(|index| resolve_slot(roster, index, search, catalog))
}
