use std::fmt;

use itertools::Itertools;

use crate::error::GameError;

/// Positions of the bandits, as strictly increasing indexes into the danger cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Allocation {
    indexes: Vec<usize>,
}

impl Allocation {
    pub fn new(indexes: Vec<usize>) -> Result<Allocation, GameError> {
        if indexes.is_empty() || indexes.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(GameError::InvalidAllocation(indexes));
        }
        Ok(Allocation { indexes })
    }

    pub fn indexes(&self) -> &[usize] {
        &self.indexes
    }

    /// All `num_bandits`-subsets of the danger cells, in lexicographic order.
    pub fn all(num_bandits: usize, num_dangers: usize) -> Vec<Vec<usize>> {
        (0..num_dangers).combinations(num_bandits).collect()
    }

    /// Legal allocations given the previous one. The first allocation may pick any
    /// subset. A reallocation keeps the bandits off the danger cell the agent stands
    /// on, and moves at most one bandit.
    pub fn possible(
        num_bandits: usize,
        num_dangers: usize,
        previous: Option<&[usize]>,
        agent_index: Option<usize>,
    ) -> Vec<Allocation> {
        let candidates = (0..num_dangers).combinations(num_bandits);
        match previous {
            None => candidates.map(|indexes| Allocation { indexes }).collect(),
            Some(previous) => candidates
                .filter(|candidate| agent_index.map_or(true, |agent| !candidate.contains(&agent)))
                .filter(|candidate| {
                    previous
                        .iter()
                        .filter(|index| !candidate.contains(index))
                        .count()
                        <= 1
                })
                .map(|indexes| Allocation { indexes })
                .collect(),
        }
    }
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Allocate({})", self.indexes.iter().join(","))
    }
}
