use std::fmt::Display;

use crate::Direction;

/// A board coordinate. `x` is the row and `y` the column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub const fn new(x: usize, y: usize) -> Self {
        Pos { x, y }
    }

    /// Move `distance` steps along `direction` (negative goes backwards).
    /// Returns `None` when that would leave the non-negative quadrant;
    /// the upper bound is checked by the board.
    pub fn step(self, direction: Direction, distance: isize) -> Option<Pos> {
        let (dx, dy) = direction.delta();
        let x = self.x.checked_add_signed(dx * distance)?;
        let y = self.y.checked_add_signed(dy * distance)?;
        Some(Pos { x, y })
    }

    /// Chebyshev distance.
    pub fn distance(self, other: Pos) -> usize {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

impl From<(usize, usize)> for Pos {
    fn from((x, y): (usize, usize)) -> Self {
        Pos { x, y }
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
