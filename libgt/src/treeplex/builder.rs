use std::collections::BTreeMap;

use log::{debug, info, warn};

use crate::error::SequenceFormError;
use crate::game_tree::{GameTreeVertex, Player, VertexType};
use crate::lp::{LinearExpression, LinearProgram, Relation, VariableDefinition, VariableId};
use crate::treeplex::{AuxState, InfosetOrEmpty, SequenceFormProgram, SequenceOrEmpty, TreeplexInformation};

/// Builder for the sequence-form linear program of a two-player zero-sum game, solved
/// from the point of view of `player` (the player of interest).
///
/// The program has one realization variable `r(s)` in [0, 1] per sequence `s` of the
/// player of interest and one free value variable `v(I)` per infoset `I` of the
/// opponent (plus `v(root)`). Its constraints are
///
///  r-constr root:  1 - r(root) == 0
///  r-constr I:     r(parent(I)) - sum_a r(I:a) == 0,       for every infoset I of `player`
///  v-constr s:     -v(I_s) + sum_{J after s} v(J)
///                  + sum_{leaves z after s} chance(z) u(z) r(seq(z)) >= 0,
///                                                           for every opponent sequence s
///
/// where `I_s` is the opponent infoset `s` extends (`root` for the empty sequence),
/// and the objective maximizes `v(root)`, the value `player` can guarantee.
///
/// Many tree paths reach the same infoset or sequence, so every variable and
/// constraint is created at most once and later visits only append terms.
pub struct SequenceFormBuilder<T: GameTreeVertex> {
    player: Player,
    program: LinearProgram,

    treeplex_info_player: TreeplexInformation<T::PlayerInfo>,
    treeplex_info_opponent: TreeplexInformation<T::PlayerInfo>,

    // r variables, one per sequence of the player of interest.
    realization_vars: BTreeMap<SequenceOrEmpty, VariableId>,
    // v variables, one per opponent infoset.
    value_vars: BTreeMap<InfosetOrEmpty, VariableId>,

    // Left hand sides of r constraints, one per infoset of the player of interest.
    flow_constraints: BTreeMap<InfosetOrEmpty, LinearExpression>,
    // Left hand sides of v constraints, one per opponent sequence.
    best_response_constraints: BTreeMap<SequenceOrEmpty, LinearExpression>,

    num_leaves: usize,
}

impl<T> SequenceFormBuilder<T>
where
    T: GameTreeVertex,
{
    /// Initializes a builder with the variables and constraints of the empty sequences.
    pub fn new(player: Player) -> SequenceFormBuilder<T> {
        let mut builder = SequenceFormBuilder {
            player,
            program: LinearProgram::new(),
            treeplex_info_player: TreeplexInformation::new(player),
            treeplex_info_opponent: TreeplexInformation::new(-player),
            realization_vars: BTreeMap::new(),
            value_vars: BTreeMap::new(),
            flow_constraints: BTreeMap::new(),
            best_response_constraints: BTreeMap::new(),
            num_leaves: 0,
        };

        // The empty sequence is always played: 1 - r(root) == 0.
        let root_realization = builder.add_realization_var(SequenceOrEmpty::Empty);
        let mut root_flow = LinearExpression::constant(1.0);
        root_flow.add_term(root_realization, -1.0);
        builder.flow_constraints.insert(InfosetOrEmpty::Empty, root_flow);

        let root_value = builder.add_value_var(InfosetOrEmpty::Empty);
        builder
            .best_response_constraints
            .insert(SequenceOrEmpty::Empty, LinearExpression::term(root_value, -1.0));

        builder
    }

    /// Walks the whole tree below `initial_vertex` and returns the finished program.
    /// This is the primary function of the `SequenceFormBuilder`.
    pub fn make_program(mut self, initial_vertex: &T) -> Result<SequenceFormProgram, SequenceFormError> {
        self.traverse_tree(initial_vertex)?;
        Ok(self.finalize())
    }

    /// Depth-first traversal carrying the last sequence of each player and the
    /// cumulative chance factor. The traversal is performed manually using a stack,
    /// so deep trees do not exhaust the call stack. Children are pushed in reverse
    /// so vertices are expanded in the same pre-order a recursion would use.
    fn traverse_tree(&mut self, initial_vertex: &T) -> Result<(), SequenceFormError> {
        let mut vertex_stack = vec![(initial_vertex.clone(), AuxState::initial())];

        while let Some((vertex, aux_state)) = vertex_stack.pop() {
            vertex.validate();
            match vertex.vertex_type() {
                VertexType::Terminal => self.handle_leaf(&vertex, aux_state)?,
                VertexType::Chance => self.handle_chance(&vertex, aux_state, &mut vertex_stack)?,
                VertexType::Player(player) if player == self.player => {
                    self.handle_player(&vertex, aux_state, &mut vertex_stack)?
                }
                VertexType::Player(_) => self.handle_opponent(&vertex, aux_state, &mut vertex_stack)?,
            }
        }
        Ok(())
    }

    /// Adds `chance * u(z) * r(seq)` to the v constraint of the opponent's last sequence.
    fn handle_leaf(&mut self, vertex: &T, aux_state: AuxState) -> Result<(), SequenceFormError> {
        let leaf = vertex.leaf().map_err(SequenceFormError::vertex)?;
        if !leaf.is_zero_sum() {
            warn!("Leaf {:?} is not zero-sum, using payoffs of {:?} only", leaf, self.player);
        }

        let player_seq = aux_state.prev_seq(self.player);
        let opponent_seq = aux_state.prev_seq(-self.player);
        let realization = self.realization_var(player_seq)?;
        let constraint = self
            .best_response_constraints
            .get_mut(&opponent_seq)
            .ok_or(SequenceFormError::MissingSequence(opponent_seq))?;
        constraint.add_term(realization, aux_state.chance_factor * leaf.payoff(self.player));

        self.num_leaves += 1;
        Ok(())
    }

    /// Expands a chance vertex. No LP structure is created here, only the chance
    /// factor of each branch changes.
    fn handle_chance(
        &mut self,
        vertex: &T,
        aux_state: AuxState,
        vertex_stack: &mut Vec<(T, AuxState)>,
    ) -> Result<(), SequenceFormError> {
        let actions = vertex.available_actions();
        let probabilities = actions
            .iter()
            .map(|action| vertex.chance_probability(action))
            .collect::<Result<Vec<f64>, _>>()
            .map_err(SequenceFormError::vertex)?;

        let total_prob: f64 = probabilities.iter().sum();
        let is_distribution = !probabilities.is_empty()
            && probabilities.iter().all(|&p| p >= 0f64 && p <= 1f64)
            && abs_diff_eq!(total_prob, 1.0, epsilon = 1e-9);
        if !is_distribution {
            return Err(SequenceFormError::ChanceDistribution { probabilities });
        }

        for (action, prob) in actions.iter().zip(probabilities.into_iter()).rev() {
            let next_vertex = vertex.next_state(action).map_err(SequenceFormError::vertex)?;
            vertex_stack.push((next_vertex, aux_state.new_with_updated_chance(prob)));
        }
        Ok(())
    }

    /// Expands a decision vertex of the player of interest: the infoset gets its
    /// r constraint and every extended sequence its r variable.
    fn handle_player(
        &mut self,
        vertex: &T,
        aux_state: AuxState,
        vertex_stack: &mut Vec<(T, AuxState)>,
    ) -> Result<(), SequenceFormError> {
        let actions = self.decision_actions(vertex, self.player)?;
        let cur_infoset = vertex.player_information().map_err(SequenceFormError::vertex)?;
        let preceding_sequence = aux_state.prev_seq(self.player);

        let (infoset_idx, is_new_infoset) =
            self.treeplex_info_player
                .insert_or_check(&cur_infoset, preceding_sequence, actions.len())?;

        if is_new_infoset {
            debug!("New infoset {} of {:?}: {:?}", infoset_idx, self.player, cur_infoset);
            let parent_realization = self.realization_var(preceding_sequence)?;
            let mut flow = LinearExpression::term(parent_realization, 1.0);
            for action_idx in 0..actions.len() {
                let new_sequence = SequenceOrEmpty::Sequence((infoset_idx, action_idx));
                let realization = self.add_realization_var(new_sequence);
                flow.add_term(realization, -1.0);
            }
            self.flow_constraints
                .insert(InfosetOrEmpty::Infoset(infoset_idx), flow);
        }

        for (action_idx, action) in actions.iter().enumerate().rev() {
            let next_vertex = vertex.next_state(action).map_err(SequenceFormError::vertex)?;
            let new_aux_state = aux_state.new_with_updated_sequence(self.player, (infoset_idx, action_idx));
            vertex_stack.push((next_vertex, new_aux_state));
        }
        Ok(())
    }

    /// Expands a decision vertex of the opponent: the infoset gets its v variable,
    /// which enters the v constraint of the preceding opponent sequence, and every
    /// extended sequence its own v constraint.
    fn handle_opponent(
        &mut self,
        vertex: &T,
        aux_state: AuxState,
        vertex_stack: &mut Vec<(T, AuxState)>,
    ) -> Result<(), SequenceFormError> {
        let opponent = -self.player;
        let actions = self.decision_actions(vertex, opponent)?;
        let cur_infoset = vertex.player_information().map_err(SequenceFormError::vertex)?;
        let preceding_sequence = aux_state.prev_seq(opponent);

        let (infoset_idx, is_new_infoset) =
            self.treeplex_info_opponent
                .insert_or_check(&cur_infoset, preceding_sequence, actions.len())?;

        if is_new_infoset {
            debug!("New infoset {} of {:?}: {:?}", infoset_idx, opponent, cur_infoset);
            let value = self.add_value_var(InfosetOrEmpty::Infoset(infoset_idx));
            self.best_response_constraints
                .get_mut(&preceding_sequence)
                .ok_or(SequenceFormError::MissingSequence(preceding_sequence))?
                .add_term(value, 1.0);
            for action_idx in 0..actions.len() {
                let new_sequence = SequenceOrEmpty::Sequence((infoset_idx, action_idx));
                self.best_response_constraints
                    .insert(new_sequence, LinearExpression::term(value, -1.0));
            }
        }

        for (action_idx, action) in actions.iter().enumerate().rev() {
            let next_vertex = vertex.next_state(action).map_err(SequenceFormError::vertex)?;
            let new_aux_state = aux_state.new_with_updated_sequence(opponent, (infoset_idx, action_idx));
            vertex_stack.push((next_vertex, new_aux_state));
        }
        Ok(())
    }

    fn decision_actions(&self, vertex: &T, player: Player) -> Result<Vec<T::Action>, SequenceFormError> {
        let actions = vertex.available_actions();
        if actions.is_empty() {
            return Err(SequenceFormError::NoActions { player });
        }
        Ok(actions)
    }

    fn add_realization_var(&mut self, sequence: SequenceOrEmpty) -> VariableId {
        let variable = self
            .program
            .add_variable(VariableDefinition::bounded(format!("r({})", sequence), 0.0, 1.0));
        self.realization_vars.insert(sequence, variable);
        variable
    }

    fn add_value_var(&mut self, infoset: InfosetOrEmpty) -> VariableId {
        let variable = self
            .program
            .add_variable(VariableDefinition::free(format!("v({})", infoset)));
        self.value_vars.insert(infoset, variable);
        variable
    }

    fn realization_var(&self, sequence: SequenceOrEmpty) -> Result<VariableId, SequenceFormError> {
        self.realization_vars
            .get(&sequence)
            .cloned()
            .ok_or(SequenceFormError::MissingSequence(sequence))
    }

    /// Turns the accumulated left hand sides into constraints and sets the objective.
    fn finalize(self) -> SequenceFormProgram {
        let SequenceFormBuilder {
            player,
            mut program,
            treeplex_info_player,
            treeplex_info_opponent,
            realization_vars,
            value_vars,
            flow_constraints,
            best_response_constraints,
            num_leaves,
        } = self;

        for (infoset, lhs) in flow_constraints {
            program.add_constraint(format!("r-constr {}", infoset), lhs, Relation::Equal);
        }
        for (sequence, lhs) in best_response_constraints {
            program.add_constraint(format!("v-constr {}", sequence), lhs, Relation::GreaterOrEqual);
        }

        let root_value = value_vars[&InfosetOrEmpty::Empty];
        program.maximize(LinearExpression::term(root_value, 1.0));

        info!(
            "Sequence-form program for {:?}: {} leaves, {} own infosets, {} opponent infosets, {} variables, {} constraints",
            player,
            num_leaves,
            treeplex_info_player.num_infosets(),
            treeplex_info_opponent.num_infosets(),
            program.num_variables(),
            program.num_constraints(),
        );

        SequenceFormProgram::new(
            player,
            program,
            realization_vars,
            root_value,
            treeplex_info_player.into_infoset_list(),
            treeplex_info_opponent.num_infosets(),
            num_leaves,
        )
    }
}
