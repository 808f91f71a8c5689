use std::{fmt::Display, ops::Index, str::FromStr};

use arrayvec::ArrayVec;

use crate::{Direction, ParseBoardError, PlayError, Player, Pos};

/// Length of a winning line.
pub const FIVE: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board<const N: usize> {
    data: [[Option<Player>; N]; N],
    empty: usize,
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Board {
            data: [[None; N]; N],
            empty: N * N,
        }
    }
}

impl<const N: usize> Index<Pos> for Board<N> {
    type Output = Option<Player>;

    fn index(&self, index: Pos) -> &Self::Output {
        self.data.index(index.x).index(index.y)
    }
}

impl<const N: usize> Board<N> {
    pub const fn has(pos: Pos) -> bool {
        pos.x < N && pos.y < N
    }

    pub const fn centre() -> Pos {
        Pos::new(N / 2, N / 2)
    }

    pub fn get(&self, pos: Pos) -> Option<Option<Player>> {
        if Board::<N>::has(pos) {
            Some(self[pos])
        } else {
            None
        }
    }

    /// Whether `pos` is on the board and empty.
    pub fn is_free(&self, pos: Pos) -> bool {
        matches!(self.get(pos), Some(None))
    }

    pub fn full(&self) -> bool {
        self.empty == 0
    }

    pub fn is_empty(&self) -> bool {
        self.empty == N * N
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.empty
    }

    /// Put a stone on an empty cell.
    pub fn place(&mut self, pos: Pos, player: Player) -> Result<(), PlayError> {
        match self.get(pos) {
            None => Err(PlayError::OutOfBounds(pos)),
            Some(Some(_)) => Err(PlayError::Occupied(pos)),
            Some(None) => {
                self.data[pos.x][pos.y] = Some(player);
                self.empty -= 1;
                Ok(())
            }
        }
    }

    /// Take a stone back off the board.
    pub fn take(&mut self, pos: Pos) -> Result<Player, PlayError> {
        match self.get(pos) {
            None => Err(PlayError::OutOfBounds(pos)),
            Some(None) => Err(PlayError::Empty(pos)),
            Some(Some(player)) => {
                self.data[pos.x][pos.y] = None;
                self.empty += 1;
                Ok(player)
            }
        }
    }

    /// All coordinates in row-major order.
    pub fn cells() -> impl Iterator<Item = Pos> {
        (0..N).flat_map(|x| (0..N).map(move |y| Pos::new(x, y)))
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        Board::<N>::cells().filter(move |&pos| self[pos].is_none())
    }

    pub fn stones(&self) -> impl Iterator<Item = (Pos, Player)> + '_ {
        Board::<N>::cells().filter_map(move |pos| self[pos].map(|player| (pos, player)))
    }

    /// Empty cells within `radius` (Chebyshev distance) of any stone,
    /// in row-major order. On an empty board this is just the centre.
    pub fn candidates(&self, radius: usize) -> Vec<Pos> {
        if self.is_empty() {
            return vec![Board::<N>::centre()];
        }
        let mut near = [[false; N]; N];
        for (pos, _) in self.stones() {
            for x in pos.x.saturating_sub(radius)..=(pos.x + radius).min(N - 1) {
                for y in pos.y.saturating_sub(radius)..=(pos.y + radius).min(N - 1) {
                    near[x][y] = true;
                }
            }
        }
        self.empty_cells().filter(|pos| near[pos.x][pos.y]).collect()
    }

    /// Every in-bounds window of five cells along `direction` that contains `pos`.
    pub fn windows(&self, pos: Pos, direction: Direction) -> ArrayVec<[Pos; FIVE], FIVE> {
        let mut windows = ArrayVec::new();
        for start in -(FIVE as isize - 1)..=0 {
            let mut window = [pos; FIVE];
            let mut inside = true;
            for (i, cell) in window.iter_mut().enumerate() {
                match pos.step(direction, start + i as isize) {
                    Some(p) if Board::<N>::has(p) => *cell = p,
                    _ => {
                        inside = false;
                        break;
                    }
                }
            }
            if inside {
                windows.push(window);
            }
        }
        windows
    }
}

impl<const N: usize> Display for Board<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.data {
            let line: String = row
                .iter()
                .map(|cell| match cell {
                    None => '.',
                    Some(Player::One) => 'X',
                    Some(Player::Two) => 'O',
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Parses one line per row using `.`, `X` and `O` (or `0`, `1` and `2`).
/// Whitespace inside a line is ignored.
impl<const N: usize> FromStr for Board<N> {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::default();
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if rows.len() != N {
            return Err(ParseBoardError::Rows { expected: N, found: rows.len() });
        }
        for (x, row) in rows.into_iter().enumerate() {
            let cells: Vec<char> = row.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != N {
                return Err(ParseBoardError::Columns {
                    row: x,
                    expected: N,
                    found: cells.len(),
                });
            }
            for (y, c) in cells.into_iter().enumerate() {
                let player = match c {
                    '.' | '0' => continue,
                    'X' | 'x' | '1' => Player::One,
                    'O' | 'o' | '2' => Player::Two,
                    other => return Err(ParseBoardError::Cell(other)),
                };
                board.data[x][y] = Some(player);
                board.empty -= 1;
            }
        }
        Ok(board)
    }
}
