use crate::game_tree::Player;
use crate::treeplex::{Sequence, SequenceOrEmpty};

/// `AuxState` records a succinct summary of path taken in the game
/// tree traversal, including the player sequences traversed and cumulative
/// probabilities required by the chance player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuxState {
    /// Last sequence that Player 1 took prior to this state.
    pub prev_seq_pl1: SequenceOrEmpty,

    /// Last sequence that Player 2 took prior to this state.
    pub prev_seq_pl2: SequenceOrEmpty,

    /// Product of chance probabilities taken before reaching this state.
    pub chance_factor: f64,
}

impl AuxState {
    /// State at the root of the game tree.
    pub fn initial() -> AuxState {
        AuxState {
            prev_seq_pl1: SequenceOrEmpty::Empty,
            prev_seq_pl2: SequenceOrEmpty::Empty,
            chance_factor: 1.0,
        }
    }

    pub fn prev_seq(&self, player: Player) -> SequenceOrEmpty {
        match player {
            Player::Player1 => self.prev_seq_pl1,
            Player::Player2 => self.prev_seq_pl2,
        }
    }

    /// Create a new auxillary state with only the chance factor modified.
    pub fn new_with_updated_chance(&self, chance_to_multiply: f64) -> AuxState {
        AuxState {
            prev_seq_pl1: self.prev_seq_pl1,
            prev_seq_pl2: self.prev_seq_pl2,
            chance_factor: chance_to_multiply * self.chance_factor,
        }
    }

    /// Create a new auxillary state with exactly one of the player's sequence modified.
    pub fn new_with_updated_sequence(&self, player: Player, new_seq: Sequence) -> AuxState {
        match player {
            Player::Player1 => AuxState {
                prev_seq_pl1: SequenceOrEmpty::Sequence(new_seq),
                prev_seq_pl2: self.prev_seq_pl2,
                chance_factor: self.chance_factor,
            },
            Player::Player2 => AuxState {
                prev_seq_pl1: self.prev_seq_pl1,
                prev_seq_pl2: SequenceOrEmpty::Sequence(new_seq),
                chance_factor: self.chance_factor,
            },
        }
    }
}
