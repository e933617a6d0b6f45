// Games given as an explicit tree of vertices, for debugging purposes.
// Useful for checking the sequence-form construction on games small enough
// to solve by hand.

use std::rc::Rc;

use crate::game_tree::{GameTreeVertex, Leaf, Player, VertexType};

#[derive(Debug)]
enum Node {
    Decision {
        player: Player,
        infoset: usize,
        children: Vec<Rc<Node>>,
    },
    Chance {
        branches: Vec<(f64, Rc<Node>)>,
    },
    Terminal {
        payoff_pl1: f64,
    },
}

/// Handle to a vertex of an explicit zero-sum game tree. Actions are child positions.
#[derive(Debug, Clone)]
pub struct ExplicitVertex(Rc<Node>);

#[derive(Debug, thiserror::Error)]
pub enum ExplicitTreeError {
    #[error("{query} is not defined at a {vertex_type:?} vertex")]
    WrongVertexType {
        query: &'static str,
        vertex_type: VertexType,
    },
    #[error("action {action} out of range, vertex has {num_actions} actions")]
    ActionOutOfRange { action: usize, num_actions: usize },
}

impl ExplicitVertex {
    pub fn decision(player: Player, infoset: usize, children: Vec<ExplicitVertex>) -> ExplicitVertex {
        ExplicitVertex(Rc::new(Node::Decision {
            player,
            infoset,
            children: children.into_iter().map(|child| child.0).collect(),
        }))
    }

    pub fn chance(branches: Vec<(f64, ExplicitVertex)>) -> ExplicitVertex {
        ExplicitVertex(Rc::new(Node::Chance {
            branches: branches.into_iter().map(|(prob, child)| (prob, child.0)).collect(),
        }))
    }

    /// Terminal vertex paying `payoff_pl1` to Player 1 and its negation to Player 2.
    pub fn terminal(payoff_pl1: f64) -> ExplicitVertex {
        ExplicitVertex(Rc::new(Node::Terminal { payoff_pl1 }))
    }

    fn wrong_type(&self, query: &'static str) -> ExplicitTreeError {
        ExplicitTreeError::WrongVertexType {
            query,
            vertex_type: self.vertex_type(),
        }
    }
}

impl GameTreeVertex for ExplicitVertex {
    type PlayerInfo = usize;
    type Action = usize;
    type Error = ExplicitTreeError;

    fn vertex_type(&self) -> VertexType {
        match self.0.as_ref() {
            Node::Decision { player, .. } => VertexType::Player(*player),
            Node::Chance { .. } => VertexType::Chance,
            Node::Terminal { .. } => VertexType::Terminal,
        }
    }

    fn player_information(&self) -> Result<usize, ExplicitTreeError> {
        match self.0.as_ref() {
            Node::Decision { infoset, .. } => Ok(*infoset),
            _ => Err(self.wrong_type("player_information")),
        }
    }

    fn available_actions(&self) -> Vec<usize> {
        match self.0.as_ref() {
            Node::Decision { children, .. } => (0..children.len()).collect(),
            Node::Chance { branches } => (0..branches.len()).collect(),
            Node::Terminal { .. } => vec![],
        }
    }

    fn chance_probability(&self, action: &usize) -> Result<f64, ExplicitTreeError> {
        match self.0.as_ref() {
            Node::Chance { branches } => branches
                .get(*action)
                .map(|branch| branch.0)
                .ok_or(ExplicitTreeError::ActionOutOfRange {
                    action: *action,
                    num_actions: branches.len(),
                }),
            _ => Err(self.wrong_type("chance_probability")),
        }
    }

    fn next_state(&self, action: &usize) -> Result<ExplicitVertex, ExplicitTreeError> {
        let child = match self.0.as_ref() {
            Node::Decision { children, .. } => children.get(*action).cloned(),
            Node::Chance { branches } => branches.get(*action).map(|branch| branch.1.clone()),
            Node::Terminal { .. } => return Err(self.wrong_type("next_state")),
        };
        child.map(ExplicitVertex).ok_or(ExplicitTreeError::ActionOutOfRange {
            action: *action,
            num_actions: self.available_actions().len(),
        })
    }

    fn leaf(&self) -> Result<Leaf, ExplicitTreeError> {
        match self.0.as_ref() {
            Node::Terminal { payoff_pl1 } => Ok(Leaf::zero_sum(*payoff_pl1)),
            _ => Err(self.wrong_type("leaf")),
        }
    }
}

/// Matching pennies: Player 2 picks heads or tails without seeing Player 1's coin.
/// Value 0 for both players.
pub fn matching_pennies() -> ExplicitVertex {
    let respond = || {
        ExplicitVertex::decision(
            Player::Player2,
            1,
            vec![ExplicitVertex::terminal(1.0), ExplicitVertex::terminal(-1.0)],
        )
    };
    let respond_flipped = || {
        ExplicitVertex::decision(
            Player::Player2,
            1,
            vec![ExplicitVertex::terminal(-1.0), ExplicitVertex::terminal(1.0)],
        )
    };
    ExplicitVertex::decision(Player::Player1, 0, vec![respond(), respond_flipped()])
}

/// Player 1 moves twice in a row before Player 2 acts. Player 1 can guarantee 1:
/// going left and then stopping, since Player 2 would punish continuing with -1.
pub fn consecutive_moves() -> ExplicitVertex {
    let punish = ExplicitVertex::decision(
        Player::Player2,
        2,
        vec![ExplicitVertex::terminal(4.0), ExplicitVertex::terminal(-1.0)],
    );
    let second_move = ExplicitVertex::decision(Player::Player1, 1, vec![punish, ExplicitVertex::terminal(1.0)]);
    ExplicitVertex::decision(Player::Player1, 0, vec![second_move, ExplicitVertex::terminal(0.5)])
}

/// One-card poker: chance deals Player 1 a high or a low card. Player 1 folds (-1) or
/// bets; Player 2, who does not see the card, folds (+1) or calls (+2 / -2).
/// Player 1 bets low cards with probability 1/3, Player 2 calls with 2/3; value 1/3.
pub fn one_card_poker() -> ExplicitVertex {
    let bet = |showdown: f64| {
        ExplicitVertex::decision(
            Player::Player2,
            2,
            vec![ExplicitVertex::terminal(1.0), ExplicitVertex::terminal(showdown)],
        )
    };
    let deal = |infoset: usize, showdown: f64| {
        ExplicitVertex::decision(
            Player::Player1,
            infoset,
            vec![ExplicitVertex::terminal(-1.0), bet(showdown)],
        )
    };
    ExplicitVertex::chance(vec![(0.5, deal(0, 2.0)), (0.5, deal(1, -2.0))])
}
