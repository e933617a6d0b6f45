use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::error::SequenceFormError;
use crate::game_tree::Player;
use crate::treeplex::SequenceOrEmpty;

/// Summary of one information set of a treeplex: the sequence leading to it and
/// the number of actions (hence child sequences) it offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfosetInfo {
    pub parent_sequence: SequenceOrEmpty,
    pub num_actions: usize,
}

impl InfosetInfo {
    /// Child sequences of the infoset numbered `infoset_idx`, in action order.
    pub fn child_sequences(&self, infoset_idx: usize) -> impl Iterator<Item = SequenceOrEmpty> {
        (0..self.num_actions).map(move |action_idx| SequenceOrEmpty::Sequence((infoset_idx, action_idx)))
    }
}

/// Struct to accumulate the treeplex information for each player while traversing the game
/// tree. Information sets are numbered in the order they are first encountered.
#[derive(Debug, Clone)]
pub struct TreeplexInformation<I: Ord + Clone + Debug> {
    player: Player,
    infosets: BTreeMap<I, usize>,
    infoset_list: Vec<InfosetInfo>,
}

impl<I> TreeplexInformation<I>
where
    I: Ord + Clone + Debug,
{
    pub fn new(player: Player) -> TreeplexInformation<I> {
        TreeplexInformation {
            player,
            infosets: BTreeMap::new(),
            infoset_list: Vec::new(),
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the index of `infoset` and whether it was seen for the first time.
    /// Revisiting a known infoset checks that it is still reached through the same
    /// preceding sequence and offers as many actions as before.
    pub fn insert_or_check(
        &mut self,
        infoset: &I,
        preceding_sequence: SequenceOrEmpty,
        num_actions: usize,
    ) -> Result<(usize, bool), SequenceFormError> {
        if let Some(&infoset_idx) = self.infosets.get(infoset) {
            let known = self.infoset_list[infoset_idx];
            if known.num_actions != num_actions {
                return Err(SequenceFormError::InconsistentInfoset {
                    player: self.player,
                    infoset: infoset_idx,
                    expected: known.num_actions,
                    found: num_actions,
                });
            }
            if known.parent_sequence != preceding_sequence {
                return Err(SequenceFormError::ImperfectRecall {
                    player: self.player,
                    infoset: infoset_idx,
                    expected: known.parent_sequence,
                    found: preceding_sequence,
                });
            }
            return Ok((infoset_idx, false));
        }

        let infoset_idx = self.infoset_list.len();
        self.infosets.insert(infoset.clone(), infoset_idx);
        self.infoset_list.push(InfosetInfo {
            parent_sequence: preceding_sequence,
            num_actions,
        });
        Ok((infoset_idx, true))
    }

    pub fn get_infoset_id(&self, infoset: &I) -> Option<usize> {
        self.infosets.get(infoset).cloned()
    }

    pub fn num_infosets(&self) -> usize {
        self.infoset_list.len()
    }

    /// Number of sequences, including the empty one.
    pub fn num_sequences(&self) -> usize {
        1 + self.infoset_list.iter().map(|info| info.num_actions).sum::<usize>()
    }

    pub fn infoset_list(&self) -> &[InfosetInfo] {
        &self.infoset_list
    }

    pub fn into_infoset_list(self) -> Vec<InfosetInfo> {
        self.infoset_list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infosets_are_numbered_in_first_seen_order() {
        let mut treeplex = TreeplexInformation::<&str>::new(Player::Player1);
        assert_eq!(treeplex.insert_or_check(&"b", SequenceOrEmpty::Empty, 2).unwrap(), (0, true));
        assert_eq!(
            treeplex.insert_or_check(&"a", SequenceOrEmpty::Sequence((0, 1)), 3).unwrap(),
            (1, true)
        );
        assert_eq!(treeplex.insert_or_check(&"b", SequenceOrEmpty::Empty, 2).unwrap(), (0, false));

        assert_eq!(treeplex.get_infoset_id(&"a"), Some(1));
        assert_eq!(treeplex.get_infoset_id(&"c"), None);
        assert_eq!(treeplex.num_infosets(), 2);
        assert_eq!(treeplex.num_sequences(), 6);
        assert_eq!(
            treeplex.infoset_list()[1].child_sequences(1).collect::<Vec<_>>(),
            vec![
                SequenceOrEmpty::Sequence((1, 0)),
                SequenceOrEmpty::Sequence((1, 1)),
                SequenceOrEmpty::Sequence((1, 2)),
            ]
        );
    }

    #[test]
    fn action_count_mismatch_is_rejected() {
        let mut treeplex = TreeplexInformation::<usize>::new(Player::Player2);
        treeplex.insert_or_check(&7, SequenceOrEmpty::Empty, 2).unwrap();
        match treeplex.insert_or_check(&7, SequenceOrEmpty::Empty, 3) {
            Err(SequenceFormError::InconsistentInfoset {
                player,
                infoset,
                expected,
                found,
            }) => {
                assert_eq!(player, Player::Player2);
                assert_eq!((infoset, expected, found), (0, 2, 3));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn different_preceding_sequence_is_rejected() {
        let mut treeplex = TreeplexInformation::<usize>::new(Player::Player1);
        treeplex.insert_or_check(&0, SequenceOrEmpty::Empty, 2).unwrap();
        treeplex.insert_or_check(&1, SequenceOrEmpty::Sequence((0, 0)), 2).unwrap();
        let result = treeplex.insert_or_check(&1, SequenceOrEmpty::Sequence((0, 1)), 2);
        assert!(matches!(result, Err(SequenceFormError::ImperfectRecall { infoset: 1, .. })));
    }
}
