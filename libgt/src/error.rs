use crate::game_tree::Player;
use crate::treeplex::SequenceOrEmpty;

/// Failures raised while turning a game tree into its sequence-form program.
#[derive(Debug, thiserror::Error)]
pub enum SequenceFormError {
    /// The game implementation itself refused a query.
    #[error("game tree: {0}")]
    Vertex(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Two vertices share an information set but disagree on their actions.
    #[error("infoset {infoset} of {player:?} exposes {found} actions, previously {expected}")]
    InconsistentInfoset {
        player: Player,
        infoset: usize,
        expected: usize,
        found: usize,
    },

    /// An information set reached through two different own sequences.
    #[error("infoset {infoset} of {player:?} is reached through {found}, previously {expected}")]
    ImperfectRecall {
        player: Player,
        infoset: usize,
        expected: SequenceOrEmpty,
        found: SequenceOrEmpty,
    },

    #[error("chance probabilities {probabilities:?} do not form a distribution")]
    ChanceDistribution { probabilities: Vec<f64> },

    #[error("decision vertex of {player:?} has no available actions")]
    NoActions { player: Player },

    /// Internal bookkeeping error: a sequence was referenced before it was created.
    #[error("sequence {0} referenced before creation")]
    MissingSequence(SequenceOrEmpty),
}

impl SequenceFormError {
    pub fn vertex<E>(err: E) -> SequenceFormError
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        SequenceFormError::Vertex(Box::new(err))
    }
}
