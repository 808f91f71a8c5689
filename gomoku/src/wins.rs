use crate::{board::FIVE, Board, Direction, GameResult, Player, Pos};

/// An unbroken line of one player's stones through a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
    pub len: usize,
    /// First cell past each end of the run, if it is on the board.
    pub ends: [Option<Pos>; 2],
}

impl<const N: usize> Board<N> {
    /// Measure the run of `player` stones through `pos` along `direction`.
    /// The cell at `pos` itself counts as `player`'s whether or not it is occupied.
    pub fn run(&self, pos: Pos, direction: Direction, player: Player) -> Run {
        let mut len = 1;
        let mut ends = [None; 2];
        for (end, sign) in ends.iter_mut().zip([1, -1]) {
            let mut distance = 1;
            loop {
                match pos.step(direction, sign * distance) {
                    Some(next) if Board::<N>::has(next) => {
                        if self[next] == Some(player) {
                            len += 1;
                            distance += 1;
                        } else {
                            *end = Some(next);
                            break;
                        }
                    }
                    _ => break,
                }
            }
        }
        Run { len, ends }
    }

    /// Whether the stone `mover` put on `last` is part of five in a row.
    /// Only the four lines through `last` are looked at.
    pub fn is_five(&self, last: Pos, mover: Player) -> bool {
        Direction::ALL
            .into_iter()
            .any(|direction| self.run(last, direction, mover).len >= FIVE)
    }

    /// Result of the game right after `mover` played `last`.
    #[must_use]
    pub fn outcome(&self, last: Pos, mover: Player) -> GameResult {
        if self.is_five(last, mover) {
            GameResult::Winner(mover)
        } else if self.full() {
            GameResult::Draw
        } else {
            GameResult::Ongoing
        }
    }
}
