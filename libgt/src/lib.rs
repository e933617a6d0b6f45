// (LIB)rary for (G)ame (T)rees.
// Games describe themselves by implementing `GameTreeVertex`; this library walks the
// implicit tree and emits the sequence-form linear program of a two-player zero-sum game.
// Solving that program is left to a `zero_sum_solving::Solver`.

#[macro_use]
extern crate approx;

pub mod error;
pub mod explicit_tree;
pub mod game_tree;
pub mod lp;
pub mod treeplex;

pub use error::SequenceFormError;
pub use game_tree::{GameTreeVertex, Leaf, Player, VertexType};
pub use lp::{LinearConstraint, LinearExpression, LinearProgram, Relation, VariableDefinition, VariableId};
pub use treeplex::{InfosetOrEmpty, SequenceFormBuilder, SequenceFormProgram};
pub use treeplex::{Sequence, SequenceOrEmpty};
