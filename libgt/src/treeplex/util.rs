use std::fmt;

/// A `Sequence` object is just a 2-tuple of (infoset_index, action_index).
/// Note that `Sequence` does not contain `PlayerInfo` or `Action`, it merely
/// contains *indices* to them. The action index alone does not identify a
/// sequence, since the same position means different things in different infosets.
pub type Sequence = (usize, usize);

/// Specifies a sequence (in terms of `PlayerInfo`, `Action` *index* pairs) or whether this is
/// an empty sequence. This representation is cheap and copy-able at
/// constant time.
#[derive(Debug, PartialOrd, Ord, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SequenceOrEmpty {
    Empty,
    Sequence(Sequence),
}

impl fmt::Display for SequenceOrEmpty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SequenceOrEmpty::Empty => write!(f, "root"),
            SequenceOrEmpty::Sequence((infoset, action)) => write!(f, "{}:{}", infoset, action),
        }
    }
}

/// Owner of a flow constraint: either an information set, or the empty sequence
/// whose realization is pinned to 1.
#[derive(Debug, PartialOrd, Ord, PartialEq, Eq, Clone, Copy, Hash)]
pub enum InfosetOrEmpty {
    Empty,
    Infoset(usize),
}

impl fmt::Display for InfosetOrEmpty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InfosetOrEmpty::Empty => write!(f, "root"),
            InfosetOrEmpty::Infoset(infoset) => write!(f, "{}", infoset),
        }
    }
}
