use std::collections::BTreeMap;

use libgt::{Player, SequenceOrEmpty};

/// Optimal value of the sequence-form program of `player`, together with the
/// realization plan of `player` that achieves it.
#[derive(Debug, Clone)]
pub struct ZeroSumSolution {
    pub player: Player,
    pub game_value: f64,
    pub realization_plan: BTreeMap<SequenceOrEmpty, f64>,
}

impl ZeroSumSolution {
    pub fn new(
        player: Player,
        game_value: f64,
        realization_plan: BTreeMap<SequenceOrEmpty, f64>,
    ) -> ZeroSumSolution {
        ZeroSumSolution {
            player,
            game_value,
            realization_plan,
        }
    }
}
