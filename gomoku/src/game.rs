use crate::{Board, GameResult, PlayError, Player, Pos};

/// A game in progress: the board plus whose turn it is.
#[derive(Clone, Debug)]
pub struct Game<const N: usize> {
    pub board: Board<N>,
    pub to_move: Player,
    pub ply: u32,
    pub last: Option<Pos>,
    pub result: GameResult,
}

impl<const N: usize> Default for Game<N> {
    fn default() -> Self {
        Self {
            board: Board::default(),
            to_move: Player::One,
            ply: 0,
            last: None,
            result: GameResult::Ongoing,
        }
    }
}

impl<const N: usize> Game<N> {
    /// Play out a list of `(x, y)` coordinates from the starting position.
    pub fn from_moves(moves: &[(usize, usize)]) -> Result<Self, PlayError> {
        let mut game = Game::default();
        for &pos in moves {
            game.play(pos.into())?;
        }
        Ok(game)
    }

    pub fn play(&mut self, pos: Pos) -> Result<GameResult, PlayError> {
        if self.result.is_over() {
            return Err(PlayError::GameOver);
        }
        self.board.place(pos, self.to_move)?;
        self.result = self.board.outcome(pos, self.to_move);
        self.last = Some(pos);
        self.ply += 1;
        self.to_move = self.to_move.next();
        Ok(self.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternates_players() {
        let game = Game::<9>::from_moves(&[(4, 4), (4, 5)]).unwrap();
        assert_eq!(game.board[Pos::new(4, 4)], Some(Player::One));
        assert_eq!(game.board[Pos::new(4, 5)], Some(Player::Two));
        assert_eq!(game.to_move, Player::One);
        assert_eq!(game.ply, 2);
        assert_eq!(game.last, Some(Pos::new(4, 5)));
    }

    #[test]
    fn occupied_move_is_rejected() {
        let mut game = Game::<9>::from_moves(&[(4, 4)]).unwrap();
        assert_eq!(game.play(Pos::new(4, 4)), Err(PlayError::Occupied(Pos::new(4, 4))));
        assert_eq!(game.ply, 1);
        assert_eq!(game.to_move, Player::Two);
    }

    #[test]
    fn no_moves_after_the_end() {
        let mut game =
            Game::<9>::from_moves(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2), (0, 3), (1, 3)])
                .unwrap();
        assert_eq!(game.play(Pos::new(0, 4)), Ok(GameResult::Winner(Player::One)));
        assert_eq!(game.play(Pos::new(1, 4)), Err(PlayError::GameOver));
    }
}
