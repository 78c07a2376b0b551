//! Ambition podium computation
//!
//! A podium names the player indices credited with first and second place on
//! an ambition track. Ties are not broken: a tie for first voids the winner
//! slot and moves every tied player into the runner-up slot, and a tie for
//! second voids the runner-up slot.

use serde::{Serialize, Serializer};

/// Index marking an ambition that was not present in the export
pub const MISSING_AMBITION: i64 = -1;

/// First and second place player indices for one ambition
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Podium {
    pub winners: Vec<i64>,
    pub runners_up: Vec<i64>,
}

impl Podium {
    /// Podium reported for an ambition missing from the export
    pub fn missing() -> Self {
        Self {
            winners: vec![MISSING_AMBITION],
            runners_up: vec![MISSING_AMBITION],
        }
    }

    pub fn is_missing(&self) -> bool {
        *self == Self::missing()
    }
}

// The overlay reads a podium as `[winners, runnersUp]`
impl Serialize for Podium {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.winners, &self.runners_up).serialize(serializer)
    }
}

/// Compute the podium for a ranking vector (one value per player)
pub fn compute_podium(ranking: &[i64]) -> Podium {
    let mut sorted = ranking.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let first = sorted.first().copied();
    let second = sorted.get(1).copied();
    // Fewer than three players: nobody can tie the runner-up
    let third = if ranking.len() >= 3 {
        sorted.get(2).copied()
    } else {
        None
    };

    let tied_for_first = first == second;
    let tied_for_second = second.is_some() && second == third && !tied_for_first;

    if tied_for_first {
        // Every player sharing the top value is a runner-up
        let runners_up = ranking
            .iter()
            .enumerate()
            .filter(|(_, value)| Some(**value) == first)
            .map(|(idx, _)| idx as i64)
            .collect();
        return Podium {
            winners: Vec::new(),
            runners_up,
        };
    }

    let winners = first.and_then(|v| index_of(ranking, v)).into_iter().collect();
    let runners_up = if tied_for_second {
        Vec::new()
    } else {
        second.and_then(|v| index_of(ranking, v)).into_iter().collect()
    };

    Podium {
        winners,
        runners_up,
    }
}

fn index_of(ranking: &[i64], value: i64) -> Option<i64> {
    ranking
        .iter()
        .position(|v| *v == value)
        .map(|idx| idx as i64)
}
