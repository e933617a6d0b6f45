use std::collections::BTreeMap;

use crate::game_tree::Player;
use crate::lp::{LinearProgram, VariableId};
use crate::treeplex::{InfosetInfo, SequenceOrEmpty};

/// Output of `SequenceFormBuilder`: the linear program together with the
/// bookkeeping needed to read a realization plan back out of a solution.
#[derive(Debug, Clone)]
pub struct SequenceFormProgram {
    player: Player,
    program: LinearProgram,
    realization_vars: BTreeMap<SequenceOrEmpty, VariableId>,
    root_value: VariableId,
    infosets: Vec<InfosetInfo>,
    num_opponent_infosets: usize,
    num_leaves: usize,
}

impl SequenceFormProgram {
    pub fn new(
        player: Player,
        program: LinearProgram,
        realization_vars: BTreeMap<SequenceOrEmpty, VariableId>,
        root_value: VariableId,
        infosets: Vec<InfosetInfo>,
        num_opponent_infosets: usize,
        num_leaves: usize,
    ) -> SequenceFormProgram {
        SequenceFormProgram {
            player,
            program,
            realization_vars,
            root_value,
            infosets,
            num_opponent_infosets,
            num_leaves,
        }
    }

    /// The player of interest.
    pub fn player(&self) -> Player {
        self.player
    }

    pub fn program(&self) -> &LinearProgram {
        &self.program
    }

    pub fn realization_vars(&self) -> &BTreeMap<SequenceOrEmpty, VariableId> {
        &self.realization_vars
    }

    /// Value variable of the opponent's empty sequence, which is the objective.
    pub fn root_value(&self) -> VariableId {
        self.root_value
    }

    /// Infosets of the player of interest, indexed as in the sequences.
    pub fn infosets(&self) -> &[InfosetInfo] {
        &self.infosets
    }

    pub fn num_sequences(&self) -> usize {
        self.realization_vars.len()
    }

    pub fn num_opponent_infosets(&self) -> usize {
        self.num_opponent_infosets
    }

    pub fn num_leaves(&self) -> usize {
        self.num_leaves
    }

    /// Extracts the realization plan of the player of interest from one value per column.
    pub fn realization_plan(&self, values: &[f64]) -> BTreeMap<SequenceOrEmpty, f64> {
        self.realization_vars
            .iter()
            .map(|(&sequence, variable)| (sequence, values[variable.index()]))
            .collect()
    }

    /// Largest deviation from `r(parent(I)) == sum_a r(I:a)` over all infosets, and from
    /// `r(root) == 1`. Sequences missing from `plan` count as 0.
    pub fn max_flow_violation(&self, plan: &BTreeMap<SequenceOrEmpty, f64>) -> f64 {
        let get = |sequence: SequenceOrEmpty| plan.get(&sequence).cloned().unwrap_or(0f64);
        let root_violation = (1f64 - get(SequenceOrEmpty::Empty)).abs();

        self.infosets
            .iter()
            .enumerate()
            .map(|(infoset_idx, info)| {
                let children: f64 = info.child_sequences(infoset_idx).map(get).sum();
                (get(info.parent_sequence) - children).abs()
            })
            .fold(root_violation, f64::max)
    }
}
