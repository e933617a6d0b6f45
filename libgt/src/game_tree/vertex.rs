use crate::game_tree::Player;
use std::fmt::Debug;

/// `GameTreeVertex` is the main trait that should be implemented by the game generator.
/// The game generator implicitly defines a game tree based on the implemented functions.
pub trait GameTreeVertex
where
    Self: Debug + Clone,
{
    // Information set for a given state (assuming its a player's move).
    type PlayerInfo: Eq + Ord + Debug + Clone;

    // Actions which could be taken. These could be either from a player's move or chance.
    // Actions are identified by their *position* in `available_actions`, never by value,
    // so two vertices in the same information set must list equivalent actions in the
    // same order.
    type Action: Debug + Clone;

    // Error raised when the vertex is queried outside of its contract, e.g. asking a
    // decision vertex for its payoffs.
    type Error: std::error::Error + Send + Sync + 'static;

    fn vertex_type(&self) -> VertexType;
    fn player_information(&self) -> Result<Self::PlayerInfo, Self::Error>;
    fn available_actions(&self) -> Vec<Self::Action>;
    fn chance_probability(&self, action: &Self::Action) -> Result<f64, Self::Error>;
    fn next_state(&self, action: &Self::Action) -> Result<Self, Self::Error>;
    fn leaf(&self) -> Result<Leaf, Self::Error>;

    /// Used for sanity checks during tree traversals. Can possibly panic when
    /// we reach an impossible state. This function is only for debugging and
    /// is not required to be implemented.
    fn validate(&self) {}
}

/// Indicates if the vertex is a player's decision point, a chance vertex or a leaf.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VertexType {
    Player(Player),
    Chance,
    Terminal,
}

/// Payoffs at a terminal vertex of the game tree.
/// Note that `Leaf` does not include chance factors or sequences preceding
/// it, those are accumulated during the traversal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Leaf {
    pub payoff_pl1: f64,
    pub payoff_pl2: f64,
}

impl Leaf {
    /// Leaf of a zero-sum game, given the payoff of Player 1.
    pub fn zero_sum(payoff_pl1: f64) -> Leaf {
        Leaf {
            payoff_pl1,
            payoff_pl2: -payoff_pl1,
        }
    }

    pub fn payoff(&self, player: Player) -> f64 {
        match player {
            Player::Player1 => self.payoff_pl1,
            Player::Player2 => self.payoff_pl2,
        }
    }

    pub fn is_zero_sum(&self) -> bool {
        relative_eq!(self.payoff_pl1, -self.payoff_pl2)
    }
}
