mod allocation;
mod chance;
mod moves;

pub use allocation::Allocation;
pub use chance::Chance;
pub use moves::Move;

use std::fmt;

/// Every action of the pursuit game. Consumers match on it exhaustively, so a
/// new kind of action has to be handled everywhere before the crate compiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Move(Move),
    Allocation(Allocation),
    Chance(Chance),
}

impl Action {
    /// One-letter class of the action, as observed by the agent. The agent knows
    /// its own moves but neither where the bandits went nor how an attack ended.
    pub fn symbol(&self) -> char {
        match self {
            Action::Move(m) => m.symbol(),
            Action::Allocation(_) => 'A',
            Action::Chance(_) => 'C',
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Action::Move(m) => m.fmt(f),
            Action::Allocation(a) => a.fmt(f),
            Action::Chance(c) => c.fmt(f),
        }
    }
}

impl From<Move> for Action {
    fn from(m: Move) -> Action {
        Action::Move(m)
    }
}

impl From<Allocation> for Action {
    fn from(a: Allocation) -> Action {
        Action::Allocation(a)
    }
}

impl From<Chance> for Action {
    fn from(c: Chance) -> Action {
        Action::Chance(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_hide_bandit_and_chance_content() {
        let actions: Vec<Action> = vec![
            Move::new(1, 0).unwrap().into(),
            Allocation::new(vec![0, 2]).unwrap().into(),
            Move::new(0, -1).unwrap().into(),
            Chance::Hit.into(),
            Chance::Miss.into(),
        ];
        let symbols: String = actions.iter().map(Action::symbol).collect();
        assert_eq!(symbols, "RAUCC");

        let labels: Vec<String> = actions.iter().map(|a| a.to_string()).collect();
        assert_eq!(labels, vec!["Right", "Allocate(0,2)", "Up", "Hit", "Miss"]);
    }
}
