use std::collections::HashMap;
use std::fmt;

use log::debug;

use crate::actions::Allocation;
use crate::error::GameError;
use crate::history::Turn;

/// What the player to move knows about the history, in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InfosetKey {
    /// The initial allocation, the bandits know nothing yet.
    BanditRoot,
    /// Reallocation triggered by the agent. `allocation` is the position of the
    /// current placement among all placements, `empty` the position of the agent
    /// among the danger cells no bandit holds.
    BanditReallocation { allocation: usize, empty: usize },
    /// The agent's own moves and the kinds of the other actions, one symbol each.
    Agent(String),
}

impl InfosetKey {
    pub fn encode(&self) -> String {
        match self {
            InfosetKey::BanditRoot => "bandit:root".to_string(),
            InfosetKey::BanditReallocation { allocation, empty } => {
                format!("bandit:A{}E{}", allocation, empty)
            }
            InfosetKey::Agent(symbols) => format!("agent:{}", symbols),
        }
    }
}

/// Maps canonical keys to small ids in first-seen order, starting at 1.
/// Owned by a single game, whose dimensions fix the universe of allocations.
#[derive(Debug, Clone)]
pub struct InfosetRegistry {
    codes: HashMap<String, usize>,
    next_index: usize,
    allocations: Vec<Vec<usize>>,
}

impl InfosetRegistry {
    pub fn new(num_bandits: usize, num_dangers: usize) -> InfosetRegistry {
        InfosetRegistry {
            codes: HashMap::new(),
            next_index: 1,
            allocations: Allocation::all(num_bandits, num_dangers),
        }
    }

    /// Forgets every id handed out so far.
    pub fn reset(&mut self, num_bandits: usize, num_dangers: usize) {
        *self = InfosetRegistry::new(num_bandits, num_dangers);
    }

    pub fn index(&mut self, key: &InfosetKey) -> usize {
        let code = key.encode();
        if let Some(&index) = self.codes.get(&code) {
            return index;
        }
        let index = self.next_index;
        debug!("New infoset I{} for {}", index, code);
        self.codes.insert(code, index);
        self.next_index += 1;
        index
    }

    pub fn allocation_index(&self, indexes: &[usize]) -> Result<usize, GameError> {
        self.allocations
            .iter()
            .position(|allocation| allocation.as_slice() == indexes)
            .ok_or_else(|| GameError::UnknownAllocation(indexes.to_vec()))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Information set of the player to move at some history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Infoset {
    pub turn: Turn,
    pub key: InfosetKey,
    pub index: usize,
}

impl fmt::Display for Infoset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "I{}", self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_encode_canonically() {
        assert_eq!(InfosetKey::BanditRoot.encode(), "bandit:root");
        let reallocation = InfosetKey::BanditReallocation {
            allocation: 3,
            empty: 0,
        };
        assert_eq!(reallocation.encode(), "bandit:A3E0");
        assert_eq!(InfosetKey::Agent("ARRC".to_string()).encode(), "agent:ARRC");
        assert_eq!(InfosetKey::Agent(String::new()).encode(), "agent:");
    }

    #[test]
    fn ids_are_assigned_in_first_seen_order() {
        let mut registry = InfosetRegistry::new(1, 2);
        assert!(registry.is_empty());
        let root = InfosetKey::BanditRoot;
        let agent = InfosetKey::Agent("A".to_string());

        assert_eq!(registry.index(&root), 1);
        assert_eq!(registry.index(&agent), 2);
        assert_eq!(registry.index(&root), 1);
        assert_eq!(registry.len(), 2);

        registry.reset(2, 3);
        assert!(registry.is_empty());
        assert_eq!(registry.index(&agent), 1);
    }

    #[test]
    fn allocation_positions() {
        let registry = InfosetRegistry::new(2, 3);
        assert_eq!(registry.allocation_index(&[0, 1]).unwrap(), 0);
        assert_eq!(registry.allocation_index(&[1, 2]).unwrap(), 2);
        assert!(matches!(
            registry.allocation_index(&[0]),
            Err(GameError::UnknownAllocation(_))
        ));
    }
}
