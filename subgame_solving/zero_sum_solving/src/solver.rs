use libgt::SequenceFormProgram;

use crate::error::SolveError;
use crate::zero_sum_solution::ZeroSumSolution;

pub trait Solver<'a> {
    fn new(problem: &'a SequenceFormProgram, solver_config: &'a SolverConfig) -> Self;
    fn solve(&self) -> Result<ZeroSumSolution, SolveError>;
}

pub struct SolverConfig {
    /// Largest bound or constraint violation accepted in a returned solution.
    pub feasibility_tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> SolverConfig {
        SolverConfig {
            feasibility_tolerance: 1e-6,
        }
    }
}
