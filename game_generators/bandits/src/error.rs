use crate::history::Turn;
use crate::location::Location;

/// Malformed game description. Raised while reading or constructing a game; no
/// partially built game is ever returned alongside it.
#[derive(Debug, thiserror::Error)]
pub enum MazeError {
    #[error("reading maze: {0}")]
    Io(#[from] std::io::Error),

    #[error("input ended before the {0}")]
    MissingLine(&'static str),

    #[error("invalid {what}: {value:?}")]
    InvalidNumber { what: &'static str, value: String },

    #[error("maze needs at least one row and one column")]
    EmptyMaze,

    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength { row: usize, expected: usize, found: usize },

    #[error("unknown cell {symbol:?} at {location}")]
    UnknownCell { symbol: char, location: Location },

    #[error("there only can be one start location")]
    DuplicateStart,

    #[error("there only can be one goal location")]
    DuplicateGoal,

    #[error("start or goal location not specified")]
    MissingStartOrGoal,

    #[error("start and goal are both at {0}")]
    StartIsGoal(Location),

    #[error("cell {0} must be a free cell inside the maze")]
    NotFree(Location),

    #[error("need 0 < num_bandits <= {num_dangers}, got {num_bandits}")]
    BanditCount { num_bandits: usize, num_dangers: usize },

    #[error("hit chance {0} outside of [0, 1]")]
    HitChance(f64),
}

/// Violation of the state machine contract of `History` or of an action's shape.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("{query} is not defined when {turn:?} is to move")]
    WrongTurn { query: &'static str, turn: Turn },

    #[error("action {action} cannot be taken when {turn:?} is to move")]
    UnexpectedAction { action: String, turn: Turn },

    #[error("move ({dx}, {dy}) is not a unit step")]
    InvalidMove { dx: i32, dy: i32 },

    #[error("allocation {0:?} is not a strictly increasing list of danger indices")]
    InvalidAllocation(Vec<usize>),

    #[error("allocation {0:?} is not one of the possible allocations")]
    UnknownAllocation(Vec<usize>),

    #[error("agent at {0} is not on an unguarded danger")]
    AgentNotOnEmptyDanger(Location),
}
