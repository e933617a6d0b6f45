/// Solver-independent description of a linear program. Builders emit a
/// `LinearProgram`; solvers translate it into whatever their backend expects.

mod expression;
mod program;

pub use self::expression::{LinearExpression, VariableId};
pub use self::program::{LinearConstraint, LinearProgram, Relation, VariableDefinition};
