//! Static evaluation of candidate cells.
//!
//! Every window of five cells through a candidate is looked at. A window
//! holding only the player's stones is worth more the more stones it holds
//! (attack); a window holding only the opponent's stones is worth the same
//! for blocking it (defence). Windows holding both are dead.

use crate::{Board, Direction, Player, Pos};

/// Weight of an uncontested window by the number of stones already in it.
/// Filling a window with four stones wins, so it dominates everything else.
pub const WINDOW_WEIGHTS: [u32; 5] = [1, 5, 200, 10_000, 100_000];

/// Score an empty cell for `player` to play on. Occupied cells score 0.
pub fn cell_score<const N: usize>(board: &Board<N>, pos: Pos, player: Player) -> u32 {
    if !board.is_free(pos) {
        return 0;
    }
    let mut score = 0;
    for direction in Direction::ALL {
        for window in board.windows(pos, direction) {
            let (mut own, mut other) = (0, 0);
            for cell in window {
                match board[cell] {
                    Some(p) if p == player => own += 1,
                    Some(_) => other += 1,
                    None => {}
                }
            }
            if other == 0 {
                score += WINDOW_WEIGHTS[own];
            }
            if own == 0 {
                score += WINDOW_WEIGHTS[other];
            }
        }
    }
    score
}

/// Score every cell in `cells`, best first. Ties keep the input order.
pub fn rank<const N: usize>(
    board: &Board<N>,
    cells: impl IntoIterator<Item = Pos>,
    player: Player,
) -> Vec<(Pos, u32)> {
    let mut scored: Vec<_> = cells
        .into_iter()
        .map(|pos| (pos, cell_score(board, pos, player)))
        .collect();
    scored.sort_by(|(_, a), (_, b)| b.cmp(a));
    scored
}
