//! Tests for the availability resolver
//!
//! These tests verify that:
//! - Picks are hidden from the other slots of the same roster only
//! - A slot's own pick stays available to it unless the search excludes it
//! - The resolver is a pure function of roster and search text

mod common;

use draftsight::draft::{is_hidden, resolve, resolve_slot, RosterSide, SelectionStore};
use proptest::prelude::*;

const AHRI: u32 = 103;
const ZED: u32 = 238;

// =============================================================================
// Roster scoping
// =============================================================================

#[test]
fn test_pick_hidden_in_other_slots_of_same_roster() {
    let catalog = common::catalog();
    let mut store = SelectionStore::default();
    store.set_slot(RosterSide::Own, 0, Some(AHRI)).unwrap();

    let own = resolve(store.roster(RosterSide::Own), "", &catalog);
    assert!(own[0].is_visible(AHRI), "own pick stays visible in its slot");
    for slot in &own[1..] {
        assert!(!slot.is_visible(AHRI), "pick must be hidden in sibling slots");
    }
}

#[test]
fn test_pick_does_not_affect_enemy_roster() {
    let catalog = common::catalog();
    let mut store = SelectionStore::default();
    let enemy_before = resolve(store.roster(RosterSide::Enemy), "", &catalog);

    store.set_slot(RosterSide::Own, 0, Some(AHRI)).unwrap();

    let enemy_after = resolve(store.roster(RosterSide::Enemy), "", &catalog);
    assert_eq!(enemy_before, enemy_after);
    assert!(enemy_after.iter().all(|slot| slot.is_visible(AHRI)));
}

#[test]
fn test_clearing_a_slot_releases_its_pick() {
    let catalog = common::catalog();
    let mut store = SelectionStore::default();
    store.set_slot(RosterSide::Enemy, 2, Some(ZED)).unwrap();
    assert!(!resolve_slot(store.roster(RosterSide::Enemy), 4, "", &catalog).is_visible(ZED));

    store.set_slot(RosterSide::Enemy, 2, None).unwrap();
    assert!(resolve_slot(store.roster(RosterSide::Enemy), 4, "", &catalog).is_visible(ZED));
}

// =============================================================================
// Search filtering
// =============================================================================

#[test]
fn test_search_filters_case_insensitively() {
    let catalog = common::catalog();
    let store = SelectionStore::default();

    let slot = resolve_slot(store.roster(RosterSide::Own), 0, "MISS", &catalog);
    assert_eq!(slot.visible_count(), 1);
    assert!(slot.is_visible(21));
}

#[test]
fn test_empty_search_shows_whole_catalog() {
    let catalog = common::catalog();
    let store = SelectionStore::default();

    let slot = resolve_slot(store.roster(RosterSide::Own), 3, "", &catalog);
    assert_eq!(slot.visible_count(), catalog.characters().len());
}

#[test]
fn test_own_pick_hidden_when_search_does_not_match() {
    let catalog = common::catalog();
    let mut store = SelectionStore::default();
    store.set_slot(RosterSide::Own, 1, Some(AHRI)).unwrap();

    let slot = resolve_slot(store.roster(RosterSide::Own), 1, "zed", &catalog);
    assert!(!slot.is_visible(AHRI), "search mismatch hides even the slot's own pick");
    assert!(slot.is_visible(ZED));
    assert_eq!(store.roster(RosterSide::Own).pick(1), Some(AHRI), "pick itself is kept");
}

#[test]
fn test_resolver_is_idempotent() {
    let catalog = common::catalog();
    let mut store = SelectionStore::default();
    store.set_slot(RosterSide::Own, 0, Some(AHRI)).unwrap();
    store.set_slot(RosterSide::Own, 3, Some(ZED)).unwrap();

    let first = resolve(store.roster(RosterSide::Own), "a", &catalog);
    let second = resolve(store.roster(RosterSide::Own), "a", &catalog);
    assert_eq!(first, second);
}

// =============================================================================
// Rule fidelity
// =============================================================================

proptest! {
    #[test]
    fn prop_hidden_matches_rule(
        picks in proptest::collection::vec(proptest::option::of(0usize..14), 5),
        slot in 0usize..5,
        search in "[a-zA-Z ]{0,3}",
    ) {
        let catalog = common::catalog();
        let ids: Vec<u32> = catalog.characters().iter().map(|c| c.id).collect();
        let mut store = SelectionStore::default();
        for (index, pick) in picks.iter().enumerate() {
            // Duplicates are rejected by the store and simply leave the slot empty
            let _ = store.set_slot(RosterSide::Own, index, pick.map(|i| ids[i]));
        }
        let roster = store.roster(RosterSide::Own);
        let visibility = resolve_slot(roster, slot, &search, &catalog);

        for candidate in catalog.characters() {
            let taken = roster
                .slots()
                .any(|s| s.index != slot && s.champion_id == Some(candidate.id));
            let is_mine = roster.pick(slot) == Some(candidate.id);
            let matches = candidate.name.to_lowercase().contains(&search.to_lowercase());
            let expected_hidden = (taken && !is_mine) || !matches;

            prop_assert_eq!(
                is_hidden(roster, slot, candidate.id, &candidate.name, &search),
                expected_hidden
            );
            prop_assert_eq!(visibility.is_visible(candidate.id), !expected_hidden);
        }
    }

    #[test]
    fn prop_store_never_holds_duplicates(
        ops in proptest::collection::vec((0usize..5, proptest::option::of(0u32..6)), 0..40),
    ) {
        let mut store = SelectionStore::default();
        for (index, pick) in ops {
            let _ = store.set_slot(RosterSide::Enemy, index, pick);
            let ids = store.roster(RosterSide::Enemy).picked_ids();
            let mut deduped = ids.clone();
            deduped.sort_unstable();
            deduped.dedup();
            prop_assert_eq!(ids.len(), deduped.len());
        }
    }
}
