//! Submission validator
//!
//! Gates the prediction request on roster completeness. Uniqueness is not
//! rechecked here; the selection store already guarantees it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::roster::{Roster, RosterSide, ROSTER_SIZE};
use crate::catalog::ChampionId;

/// Minimum filled slots per roster under the default policy
pub const MIN_FILLED_SLOTS: usize = ROSTER_SIZE;
/// Maximum filled slots per roster under the default policy
pub const MAX_FILLED_SLOTS: usize = ROSTER_SIZE;

/// Inclusive bounds on how many slots each roster must fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPolicy {
    pub min_filled: usize,
    pub max_filled: usize,
}

impl SubmissionPolicy {
    /// Full five-versus-five rosters
    pub const STRICT: SubmissionPolicy = SubmissionPolicy {
        min_filled: MIN_FILLED_SLOTS,
        max_filled: MAX_FILLED_SLOTS,
    };

    /// Any partial roster with at least one pick
    pub const LENIENT: SubmissionPolicy = SubmissionPolicy {
        min_filled: 1,
        max_filled: ROSTER_SIZE,
    };

    fn admits(&self, filled: usize) -> bool {
        (self.min_filled..=self.max_filled).contains(&filled)
    }
}

impl Default for SubmissionPolicy {
    fn default() -> Self {
        Self::STRICT
    }
}

/// Ids ready to be sent, in slot order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub team_champions: Vec<ChampionId>,
    pub enemy_champions: Vec<ChampionId>,
}

/// Why a roster pair was not submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    IncompleteRoster {
        side: RosterSide,
        filled: usize,
        policy: SubmissionPolicy,
    },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::IncompleteRoster {
                side,
                filled,
                policy,
            } if policy.min_filled == policy.max_filled => write!(
                f,
                "Incomplete roster: {} has {} of {} champions",
                side, filled, policy.min_filled
            ),
            Rejection::IncompleteRoster {
                side,
                filled,
                policy,
            } => write!(
                f,
                "Incomplete roster: {} has {} champions (needs {} to {})",
                side, filled, policy.min_filled, policy.max_filled
            ),
        }
    }
}

/// Check both rosters against `policy` and collect their ids.
pub fn validate(
    own: &Roster,
    enemy: &Roster,
    policy: SubmissionPolicy,
) -> Result<Submission, Rejection> {
    for roster in [own, enemy] {
        let filled = roster.filled_count();
        if !policy.admits(filled) {
            return Err(Rejection::IncompleteRoster {
                side: roster.side(),
                filled,
                policy,
            });
        }
    }

    Ok(Submission {
        team_champions: own.picked_ids(),
        enemy_champions: enemy.picked_ids(),
    })
}
