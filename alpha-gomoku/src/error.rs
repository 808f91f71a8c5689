use std::fmt::Display;

use gomoku::{PlayError, Pos};
use thiserror::Error;

/// Which external collaborator produced a bad move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Adapter {
    Policy,
    Rollout,
    Tactics,
}

impl Display for Adapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            Adapter::Policy => "policy",
            Adapter::Rollout => "rollout policy",
            Adapter::Tactics => "tactical shortcut",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum SearchError {
    #[error("cannot select a child of a leaf node")]
    SelectOnLeaf,

    #[error("search ran {playouts} playouts without expanding the root")]
    PlanningFailure { playouts: u32 },

    #[error("the policy has no candidate moves")]
    NoCandidates,

    #[error("the {adapter} proposed {pos}, which cannot be played")]
    IllegalMove {
        adapter: Adapter,
        pos: Pos,
        source: PlayError,
    },

    #[error("the policy gave {pos} a prior of {prior}")]
    InvalidPrior { pos: Pos, prior: f32 },

    #[error("tree move {pos} does not fit the board; update_with_move was probably skipped")]
    Desynced { pos: Pos, source: PlayError },
}
