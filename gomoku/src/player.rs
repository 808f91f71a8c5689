#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Numeric cell encoding (empty cells are 0).
    pub const fn index(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}
