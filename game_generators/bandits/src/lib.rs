// Pursuit game on a grid maze: an agent walks from the start to the goal, collecting
// gold on its way, while hidden bandits guard some of the dangerous cells. Stepping
// into a guarded cell triggers an attack which hits with a fixed probability; stepping
// into an unguarded one while the alarm is armed lets the bandits reallocate.
//
// `History` implements `libgt::GameTreeVertex`, so the game can be handed to the
// sequence-form machinery of `libgt` and `zero_sum_solving`.

pub mod actions;
pub mod error;
pub mod gambit;
pub mod game;
pub mod history;
pub mod infoset;
pub mod location;
pub mod maze;
pub mod reader;
pub mod trail;

pub use crate::actions::{Action, Allocation, Chance, Move};
pub use crate::error::{GameError, MazeError};
pub use crate::gambit::export_gambit;
pub use crate::game::{Game, BASE_UTILITY};
pub use crate::history::{History, Turn};
pub use crate::infoset::{Infoset, InfosetKey, InfosetRegistry};
pub use crate::location::Location;
pub use crate::maze::{Cell, Maze};
pub use crate::reader::read_game;
