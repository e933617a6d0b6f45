use good_lp::{microlp, variable, Expression, IntoAffineExpression, ProblemVariables, Solution, SolverModel, Variable};
use libgt::{LinearExpression, Relation, SequenceFormProgram};
use log::{debug, info};

use crate::error::SolveError;
use crate::solver::{Solver, SolverConfig};
use crate::zero_sum_solution::ZeroSumSolution;

/// ===============================================================================================
/// Solves the sequence-form program of the player of interest `p` as built by
/// `libgt::SequenceFormBuilder`
///
/// max_{r,v} v(root)
/// r-constraints: E r = e, 0 <= r <= 1 ---------------(A)
/// v-constraints: A'v <= U r ---------------------------(B)
///
/// where r is the realization plan of `p`, v the values of the opponent's infosets,
/// E, e the sequence-form constraints of `p` and U the (chance-weighted) payoffs of `p`.
/// ===============================================================================================
/// Columns keep the numbering of `LinearProgram`, so column `i` of the backend is
/// `VariableId(i)`. The backend is `microlp`, a pure Rust simplex solver.
/// ===============================================================================================
pub struct GoodLpSolver<'a> {
    problem: &'a SequenceFormProgram,
    solver_config: &'a SolverConfig,
}

impl<'a> GoodLpSolver<'a> {
    fn make_variables(&self, problem_variables: &mut ProblemVariables) -> Vec<Variable> {
        self.problem
            .program()
            .variables()
            .iter()
            .map(|definition| {
                let mut column = variable().name(definition.name.clone());
                if let Some(lower) = definition.lower {
                    column = column.min(lower);
                }
                if let Some(upper) = definition.upper {
                    column = column.max(upper);
                }
                problem_variables.add(column)
            })
            .collect()
    }

    fn make_expression(expression: &LinearExpression, columns: &[Variable]) -> Expression {
        let mut result = expression.constant_term().into_expression();
        for (variable_id, coeff) in expression.terms() {
            result += coeff * columns[variable_id.index()];
        }
        result
    }
}

impl<'a> Solver<'a> for GoodLpSolver<'a> {
    fn new(problem: &'a SequenceFormProgram, solver_config: &'a SolverConfig) -> GoodLpSolver<'a> {
        GoodLpSolver {
            problem,
            solver_config,
        }
    }

    fn solve(&self) -> Result<ZeroSumSolution, SolveError> {
        let program = self.problem.program();

        let mut problem_variables = ProblemVariables::new();
        let columns = self.make_variables(&mut problem_variables);
        debug!("Made {} variables", columns.len());

        let objective = Self::make_expression(program.objective(), &columns);
        let mut model = problem_variables.maximise(objective).using(microlp);
        for linear_constraint in program.constraints() {
            let lhs = Self::make_expression(&linear_constraint.expression, &columns);
            model = model.with(match linear_constraint.relation {
                Relation::Equal => good_lp::constraint::eq(lhs, 0f64),
                Relation::GreaterOrEqual => good_lp::constraint::geq(lhs, 0f64),
            });
        }
        debug!("Made {} constraints", program.num_constraints());

        let solution = model.solve()?;
        let values: Vec<f64> = columns.iter().map(|&column| solution.value(column)).collect();

        if let Some((constraint, violation)) =
            program.worst_violation(&values, self.solver_config.feasibility_tolerance)
        {
            return Err(SolveError::ConstraintViolation { constraint, violation });
        }

        let game_value = program.objective().evaluate(&values);
        info!("Solved program of {:?}, game value {}", self.problem.player(), game_value);

        Ok(ZeroSumSolution::new(
            self.problem.player(),
            game_value,
            self.problem.realization_plan(&values),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use libgt::{LinearProgram, Player, SequenceOrEmpty, VariableDefinition};
    use std::collections::BTreeMap;

    /// Wraps a hand-written program whose only sequence is the empty one.
    fn problem(program: LinearProgram, root_value: libgt::VariableId) -> SequenceFormProgram {
        let mut realization_vars = BTreeMap::new();
        realization_vars.insert(SequenceOrEmpty::Empty, libgt::VariableId(0));
        SequenceFormProgram::new(Player::Player1, program, realization_vars, root_value, vec![], 0, 0)
    }

    fn unit_program() -> (LinearProgram, libgt::VariableId, libgt::VariableId) {
        let mut program = LinearProgram::new();
        let r = program.add_variable(VariableDefinition::bounded("r(root)".to_string(), 0.0, 1.0));
        let v = program.add_variable(VariableDefinition::free("v(root)".to_string()));
        program.maximize(LinearExpression::term(v, 1.0));
        (program, r, v)
    }

    #[test]
    fn solves_bounded_program() {
        // max v s.t. 1 - r == 0, 2.5 r - v >= 0.
        let (mut program, r, v) = unit_program();
        let mut flow = LinearExpression::constant(1.0);
        flow.add_term(r, -1.0);
        program.add_constraint("r-constr root".to_string(), flow, Relation::Equal);
        let mut br = LinearExpression::term(r, 2.5);
        br.add_term(v, -1.0);
        program.add_constraint("v-constr root".to_string(), br, Relation::GreaterOrEqual);

        let problem = problem(program, v);
        let config = SolverConfig::default();
        let solution = GoodLpSolver::new(&problem, &config).solve().unwrap();
        assert_approx_eq!(solution.game_value, 2.5, 1e-6);
        assert_approx_eq!(solution.realization_plan[&SequenceOrEmpty::Empty], 1.0, 1e-6);
    }

    #[test]
    fn reports_unbounded_program() {
        let (program, _, v) = unit_program();
        let problem = problem(program, v);
        let config = SolverConfig::default();
        let result = GoodLpSolver::new(&problem, &config).solve();
        assert!(matches!(result, Err(SolveError::Unbounded)));
    }

    #[test]
    fn reports_infeasible_program() {
        // r <= 1 but r - 2 >= 0.
        let (mut program, r, v) = unit_program();
        let mut impossible = LinearExpression::constant(-2.0);
        impossible.add_term(r, 1.0);
        program.add_constraint("impossible".to_string(), impossible, Relation::GreaterOrEqual);
        program.add_constraint("cap".to_string(), LinearExpression::term(v, -1.0), Relation::GreaterOrEqual);

        let problem = problem(program, v);
        let config = SolverConfig::default();
        let result = GoodLpSolver::new(&problem, &config).solve();
        assert!(matches!(result, Err(SolveError::Infeasible)));
    }
}
