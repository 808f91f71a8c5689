use crate::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Winner(Player),
    Draw,
    Ongoing,
}

impl Default for GameResult {
    fn default() -> Self {
        GameResult::Ongoing
    }
}

impl GameResult {
    pub fn is_over(self) -> bool {
        !matches!(self, GameResult::Ongoing)
    }

    /// Reward for `player`: 1 for a win, -1 for a loss, 0 otherwise.
    pub fn reward(self, player: Player) -> f32 {
        match self {
            GameResult::Winner(winner) if winner == player => 1.0,
            GameResult::Winner(_) => -1.0,
            GameResult::Draw | GameResult::Ongoing => 0.0,
        }
    }
}
