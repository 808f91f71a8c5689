use gomoku::{score, Board, Player, Pos, Shortcut};
use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::{Distribution, WeightedIndex};

/// Proposes moves to expand a leaf with, each with a prior probability.
pub trait Policy<const N: usize> {
    fn priors(&self, board: &Board<N>, to_move: Player) -> Vec<(Pos, f32)>;
}

/// Picks one move per ply during a rollout. The move must be an empty cell.
pub trait Rollout<const N: usize> {
    fn pick(&mut self, board: &Board<N>, to_move: Player) -> Pos;
}

/// Finds a move that should be played without searching.
pub trait Tactics<const N: usize> {
    fn shortcut(&self, board: &Board<N>, player: Player) -> Option<Pos>;
}

impl<const N: usize, F> Policy<N> for F
where
    F: Fn(&Board<N>, Player) -> Vec<(Pos, f32)>,
{
    fn priors(&self, board: &Board<N>, to_move: Player) -> Vec<(Pos, f32)> {
        self(board, to_move)
    }
}

impl<const N: usize, F> Rollout<N> for F
where
    F: FnMut(&Board<N>, Player) -> Pos,
{
    fn pick(&mut self, board: &Board<N>, to_move: Player) -> Pos {
        self(board, to_move)
    }
}

impl<const N: usize, F> Tactics<N> for F
where
    F: Fn(&Board<N>, Player) -> Option<Pos>,
{
    fn shortcut(&self, board: &Board<N>, player: Player) -> Option<Pos> {
        self(board, player)
    }
}

/// Proposes the best scoring cells near existing stones.
/// Priors are the static scores normalised over the proposed cells.
#[derive(Clone, Debug)]
pub struct NeighbourPolicy {
    pub radius: usize,
    pub limit: usize,
}

impl<const N: usize> Policy<N> for NeighbourPolicy {
    fn priors(&self, board: &Board<N>, to_move: Player) -> Vec<(Pos, f32)> {
        let mut ranked = score::rank(board, board.candidates(self.radius), to_move);
        ranked.truncate(self.limit);
        let total: u64 = ranked.iter().map(|&(_, s)| u64::from(s)).sum();
        if total == 0 {
            // Nothing scores, fall back to a uniform prior.
            let uniform = 1.0 / ranked.len().max(1) as f32;
            return ranked.into_iter().map(|(pos, _)| (pos, uniform)).collect();
        }
        ranked
            .into_iter()
            .map(|(pos, s)| (pos, s as f32 / total as f32))
            .collect()
    }
}

/// Samples nearby cells with probability proportional to their static score.
#[derive(Clone, Debug)]
pub struct WeightedRollout {
    pub radius: usize,
    rng: StdRng,
}

impl WeightedRollout {
    pub fn new(radius: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        WeightedRollout { radius, rng }
    }
}

impl<const N: usize> Rollout<N> for WeightedRollout {
    fn pick(&mut self, board: &Board<N>, to_move: Player) -> Pos {
        let mut cells = board.candidates(self.radius);
        if cells.is_empty() {
            cells = board.empty_cells().collect();
        }
        if cells.is_empty() {
            // Full board: the caller should have stopped already.
            return Board::<N>::centre();
        }
        let weights: Vec<u64> = cells
            .iter()
            .map(|&pos| u64::from(score::cell_score(board, pos, to_move)))
            .collect();
        let index = match WeightedIndex::new(&weights) {
            Ok(distr) => distr.sample(&mut self.rng),
            Err(_) => self.rng.gen_range(0..cells.len()),
        };
        cells[index]
    }
}

/// Tries each shortcut in order and plays the first that applies.
#[derive(Clone, Debug)]
pub struct Cascade {
    pub order: Vec<Shortcut>,
}

impl Cascade {
    pub fn new(order: Vec<Shortcut>) -> Self {
        Cascade { order }
    }

    /// A cascade that never fires.
    pub fn none() -> Self {
        Cascade { order: Vec::new() }
    }
}

impl Default for Cascade {
    fn default() -> Self {
        Cascade::new(Shortcut::CASCADE.to_vec())
    }
}

impl<const N: usize> Tactics<N> for Cascade {
    fn shortcut(&self, board: &Board<N>, player: Player) -> Option<Pos> {
        self.order.iter().find_map(|&shortcut| {
            let pos = shortcut.find(board, player)?;
            debug!("{shortcut:?} shortcut for {player:?} at {pos}");
            Some(pos)
        })
    }
}
