//! Forcing patterns that can be answered without searching.

use crate::{board::FIVE, Board, Direction, Player, Pos};

/// A tactical pattern, looked for from the perspective of the player to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shortcut {
    /// Complete five in a row.
    Win,
    /// Stop the opponent from completing five.
    Block,
    /// Make an unbroken four with both ends open.
    OpenFour,
    /// Take the cell where the opponent would make an open four.
    BlockOpenFour,
    /// Make threats along two or more lines at once.
    Fork,
}

impl Shortcut {
    /// Default priority order.
    pub const CASCADE: [Shortcut; 5] = [
        Shortcut::Win,
        Shortcut::Block,
        Shortcut::OpenFour,
        Shortcut::BlockOpenFour,
        Shortcut::Fork,
    ];

    /// First empty cell (in row-major order) where this pattern applies.
    pub fn find<const N: usize>(self, board: &Board<N>, player: Player) -> Option<Pos> {
        let mut cells = board.empty_cells();
        match self {
            Shortcut::Win => cells.find(|&pos| completes_five(board, pos, player)),
            Shortcut::Block => cells.find(|&pos| completes_five(board, pos, player.next())),
            Shortcut::OpenFour => cells.find(|&pos| makes_open_four(board, pos, player)),
            Shortcut::BlockOpenFour => {
                cells.find(|&pos| makes_open_four(board, pos, player.next()))
            }
            Shortcut::Fork => cells.find(|&pos| threats(board, pos, player) >= 2),
        }
    }
}

/// Whether playing `pos` makes five in a row for `player`.
pub fn completes_five<const N: usize>(board: &Board<N>, pos: Pos, player: Player) -> bool {
    board.is_free(pos) && board.is_five(pos, player)
}

/// Whether playing `pos` makes an unbroken four for `player` with an empty cell at both ends.
pub fn makes_open_four<const N: usize>(board: &Board<N>, pos: Pos, player: Player) -> bool {
    board.is_free(pos)
        && Direction::ALL.into_iter().any(|direction| {
            let run = board.run(pos, direction, player);
            run.len == FIVE - 1 && open_ends(board, run.ends) == 2
        })
}

/// Number of lines through `pos` along which playing it creates a threat:
/// either a four (one more stone makes five) or an open three.
pub fn threats<const N: usize>(board: &Board<N>, pos: Pos, player: Player) -> usize {
    if !board.is_free(pos) {
        return 0;
    }
    Direction::ALL
        .into_iter()
        .filter(|&direction| {
            makes_four(board, pos, direction, player)
                || makes_open_three(board, pos, direction, player)
        })
        .count()
}

fn open_ends<const N: usize>(board: &Board<N>, ends: [Option<Pos>; 2]) -> usize {
    ends.into_iter()
        .flatten()
        .filter(|&end| board[end].is_none())
        .count()
}

/// Some window of five through `pos` would hold four of `player`'s stones and one empty cell.
fn makes_four<const N: usize>(
    board: &Board<N>,
    pos: Pos,
    direction: Direction,
    player: Player,
) -> bool {
    board.windows(pos, direction).into_iter().any(|window| {
        let mut own = 0;
        for cell in window {
            if cell == pos || board[cell] == Some(player) {
                own += 1;
            } else if board[cell].is_some() {
                return false;
            }
        }
        own == FIVE - 1
    })
}

/// An unbroken three with open ends that can still grow into an open four.
fn makes_open_three<const N: usize>(
    board: &Board<N>,
    pos: Pos,
    direction: Direction,
    player: Player,
) -> bool {
    let run = board.run(pos, direction, player);
    if run.len != 3 || open_ends(board, run.ends) != 2 {
        return false;
    }
    // One of the ends must leave room for a second open end after it is filled.
    run.ends.into_iter().zip([1, -1]).any(|(end, sign)| {
        matches!(end.and_then(|end| end.step(direction, sign)), Some(beyond) if board.is_free(beyond))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board<9> {
        "
        .........
        .........
        ..XXX....
        .........
        .........
        .....O...
        .....O...
        .....O...
        .........
        "
        .parse()
        .unwrap()
    }

    #[test]
    fn open_three_becomes_open_four() {
        let board = board();
        assert!(makes_open_four(&board, Pos::new(2, 1), Player::One));
        assert!(makes_open_four(&board, Pos::new(2, 5), Player::One));
        assert!(!makes_open_four(&board, Pos::new(2, 6), Player::One));
        assert_eq!(Shortcut::OpenFour.find(&board, Player::One), Some(Pos::new(2, 1)));
    }

    #[test]
    fn blocked_three_is_no_open_four() {
        let board = board();
        // Two's three touches the bottom edge after one more stone.
        assert!(makes_open_four(&board, Pos::new(4, 5), Player::Two));
        assert!(!makes_open_four(&board, Pos::new(8, 5), Player::Two));
    }

    #[test]
    fn no_win_on_quiet_board() {
        let board = board();
        assert_eq!(Shortcut::Win.find(&board, Player::One), None);
        assert_eq!(Shortcut::Block.find(&board, Player::One), None);
    }

    #[test]
    fn fork_needs_two_lines() {
        let board: Board<9> = "
            .........
            .........
            ..XX.....
            ....X....
            ....X....
            .........
            .........
            .........
            .........
        "
        .parse()
        .unwrap();
        assert_eq!(threats(&board, Pos::new(2, 4), Player::One), 2);
        assert_eq!(Shortcut::Fork.find(&board, Player::One), Some(Pos::new(2, 4)));
    }
}
