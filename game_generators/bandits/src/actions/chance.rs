use std::fmt;

/// Outcome of a bandit attack.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Chance {
    Hit,
    Miss,
}

impl Chance {
    pub fn possible() -> Vec<Chance> {
        vec![Chance::Miss, Chance::Hit]
    }

    pub fn probability(&self, hit_chance: f64) -> f64 {
        match self {
            Chance::Hit => hit_chance,
            Chance::Miss => 1.0 - hit_chance,
        }
    }
}

impl fmt::Display for Chance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Chance::Hit => write!(f, "Hit"),
            Chance::Miss => write!(f, "Miss"),
        }
    }
}
