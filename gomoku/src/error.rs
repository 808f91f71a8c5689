use thiserror::Error;

use crate::Pos;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum PlayError {
    #[error("{0} is not on the board")]
    OutOfBounds(Pos),
    #[error("cannot place a stone on {0} because it is already occupied")]
    Occupied(Pos),
    #[error("there is no stone on {0} to take back")]
    Empty(Pos),
    #[error("the game is already over")]
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    #[error("expected {expected} rows but found {found}")]
    Rows { expected: usize, found: usize },
    #[error("row {row} should have {expected} cells but has {found}")]
    Columns {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown cell character {0:?}")]
    Cell(char),
}
