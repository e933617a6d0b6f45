use std::ops::Neg;

/// The two players of a zero-sum game. `Player1` has index 0, `Player2` index 1.
#[derive(Debug, Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    /// Zero-based index of the player, as used by command line interfaces.
    pub fn index(self) -> usize {
        match self {
            Player::Player1 => 0,
            Player::Player2 => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Player> {
        match index {
            0 => Some(Player::Player1),
            1 => Some(Player::Player2),
            _ => None,
        }
    }
}

impl Neg for Player {
    type Output = Player;
    fn neg(self) -> Self::Output {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }
}
