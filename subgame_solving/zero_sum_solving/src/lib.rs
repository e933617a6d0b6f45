// Solving zero-sum extensive form games through their sequence-form linear program.
// `libgt` describes the program; the solvers here hand it to an LP backend.

mod error;
mod good_lp_solver;
mod solver;
mod zero_sum_solution;

pub use crate::error::SolveError;
pub use crate::good_lp_solver::GoodLpSolver;
pub use crate::solver::{Solver, SolverConfig};
pub use crate::zero_sum_solution::ZeroSumSolution;

use libgt::{GameTreeVertex, Player, SequenceFormBuilder};

/// Builds the sequence-form program of `player` below `root` and solves it.
pub fn solve_game<T: GameTreeVertex>(
    root: &T,
    player: Player,
    solver_config: &SolverConfig,
) -> Result<ZeroSumSolution, SolveError> {
    let problem = SequenceFormBuilder::<T>::new(player).make_program(root)?;
    let solver = GoodLpSolver::new(&problem, solver_config);
    solver.solve()
}

/// Expected utility of `player` at the root under equilibrium play.
pub fn root_value<T: GameTreeVertex>(
    root: &T,
    player: Player,
    solver_config: &SolverConfig,
) -> Result<f64, SolveError> {
    Ok(solve_game(root, player, solver_config)?.game_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use libgt::explicit_tree;
    use libgt::SequenceOrEmpty;

    fn value(root: &explicit_tree::ExplicitVertex, player: Player) -> f64 {
        root_value(root, player, &SolverConfig::default()).unwrap()
    }

    #[test]
    fn matching_pennies_is_fair() {
        let root = explicit_tree::matching_pennies();
        assert_approx_eq!(value(&root, Player::Player1), 0.0, 1e-6);
        assert_approx_eq!(value(&root, Player::Player2), 0.0, 1e-6);
    }

    #[test]
    fn consecutive_moves_of_one_player() {
        let root = explicit_tree::consecutive_moves();
        assert_approx_eq!(value(&root, Player::Player1), 1.0, 1e-6);
        assert_approx_eq!(value(&root, Player::Player2), -1.0, 1e-6);
    }

    #[test]
    fn one_card_poker_values_are_negations() {
        let root = explicit_tree::one_card_poker();
        let value_pl1 = value(&root, Player::Player1);
        let value_pl2 = value(&root, Player::Player2);
        assert_approx_eq!(value_pl1, 1.0 / 3.0, 1e-6);
        assert_approx_eq!(value_pl1, -value_pl2, 1e-6);
    }

    #[test]
    fn one_card_poker_equilibrium_strategies() {
        let root = explicit_tree::one_card_poker();
        let config = SolverConfig::default();

        // Player 1 always bets the high card and bluffs the low one a third of the time.
        let solution_pl1 = solve_game(&root, Player::Player1, &config).unwrap();
        assert_eq!(solution_pl1.player, Player::Player1);
        let plan = &solution_pl1.realization_plan;
        assert_approx_eq!(plan[&SequenceOrEmpty::Empty], 1.0, 1e-6);
        assert_approx_eq!(plan[&SequenceOrEmpty::Sequence((0, 1))], 1.0, 1e-6);
        assert_approx_eq!(plan[&SequenceOrEmpty::Sequence((1, 1))], 1.0 / 3.0, 1e-6);

        // Player 2 calls two thirds of the time.
        let solution_pl2 = solve_game(&root, Player::Player2, &config).unwrap();
        assert_approx_eq!(solution_pl2.realization_plan[&SequenceOrEmpty::Sequence((0, 1))], 2.0 / 3.0, 1e-6);
    }

    #[test]
    fn realization_plans_conserve_flow() {
        let config = SolverConfig::default();
        for root in vec![
            explicit_tree::matching_pennies(),
            explicit_tree::consecutive_moves(),
            explicit_tree::one_card_poker(),
        ] {
            for &player in &[Player::Player1, Player::Player2] {
                let problem = SequenceFormBuilder::new(player).make_program(&root).unwrap();
                let solution = GoodLpSolver::new(&problem, &config).solve().unwrap();
                assert!(problem.max_flow_violation(&solution.realization_plan) < 1e-6);
            }
        }
    }
}
