use std::time::Instant;

use gomoku::{Board, GameResult, PlayError, Player, Pos};
use log::trace;

use super::tree::Tree;
use crate::{
    agent::{Policy, Rollout},
    config::SearchConfig,
    error::Adapter,
    SearchError,
};

/// How a single playout ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playout {
    /// A leaf was expanded and this many new children were rolled out.
    Expanded(usize),
    /// Selection ran into a finished game.
    Terminal(GameResult),
    /// Selection ended at a leaf the policy has no moves for.
    Barren,
}

/// Stones placed on a borrowed board. Every stone is taken back when the
/// guard is dropped, on every exit path.
pub struct Placements<'a, const N: usize> {
    board: &'a mut Board<N>,
    placed: Vec<Pos>,
}

impl<'a, const N: usize> Placements<'a, N> {
    pub fn new(board: &'a mut Board<N>) -> Self {
        Placements {
            board,
            placed: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board<N> {
        self.board
    }

    pub fn place(&mut self, pos: Pos, player: Player) -> Result<(), PlayError> {
        self.board.place(pos, player)?;
        self.placed.push(pos);
        Ok(())
    }

    /// A guard for further stones that are taken back before this guard's.
    pub fn nested(&mut self) -> Placements<'_, N> {
        Placements::new(&mut *self.board)
    }
}

impl<'a, const N: usize> Drop for Placements<'a, N> {
    fn drop(&mut self) {
        while let Some(pos) = self.placed.pop() {
            let taken = self.board.take(pos);
            debug_assert!(taken.is_ok(), "placed stone went missing at {pos}");
        }
    }
}

impl Tree {
    /// Run one selection, expansion, rollout and backpropagation pass
    /// for `to_move` playing on `board`. The board is left as it was found.
    pub fn playout<const N: usize, P: Policy<N>, R: Rollout<N>>(
        &mut self,
        board: &mut Board<N>,
        mut to_move: Player,
        policy: &P,
        rollout: &mut R,
        config: &SearchConfig,
        deadline: Option<Instant>,
    ) -> Result<Playout, SearchError> {
        let mut path = Placements::new(board);
        let mut node = self.root;
        let mut result = GameResult::Ongoing;

        // Selection.
        while !self[node].is_leaf() {
            let (pos, child) = self.select(node, config.exploration)?;
            path.place(pos, to_move)
                .map_err(|source| SearchError::Desynced { pos, source })?;
            result = path.board().outcome(pos, to_move);
            to_move = to_move.next();
            node = child;
            if result.is_over() {
                break;
            }
        }

        // The player who moved into `node` has just won or drawn.
        if result.is_over() {
            let value = if matches!(result, GameResult::Winner(_)) { 1.0 } else { 0.0 };
            self.update_recursive(node, value);
            return Ok(Playout::Terminal(result));
        }

        if self[node].barren {
            self.update_recursive(node, 0.0);
            return Ok(Playout::Barren);
        }

        // Expansion.
        let candidates = policy.priors(path.board(), to_move);
        check_candidates(path.board(), &candidates)?;
        let children = self.expand(node, candidates);
        if self[node].is_leaf() {
            trace!("no candidates at node {}, marking it barren", node.0);
            self.node_mut(node).barren = true;
            self.update_recursive(node, 0.0);
            return Ok(Playout::Barren);
        }

        // Rollouts and backpropagation.
        for &(pos, child) in &children {
            for _ in 0..config.rollouts_per_child {
                let value = simulate(
                    &mut path,
                    pos,
                    to_move,
                    rollout,
                    config.rollout_depth,
                    deadline,
                )?;
                self.update_recursive(child, value);
            }
        }
        Ok(Playout::Expanded(children.len()))
    }

    pub(crate) fn is_barren_root(&self) -> bool {
        self[self.root].barren
    }
}

/// Every candidate must be an empty cell with a finite, non-negative prior.
pub(crate) fn check_candidates<const N: usize>(
    board: &Board<N>,
    candidates: &[(Pos, f32)],
) -> Result<(), SearchError> {
    for &(pos, prior) in candidates {
        let source = match board.get(pos) {
            None => PlayError::OutOfBounds(pos),
            Some(Some(_)) => PlayError::Occupied(pos),
            Some(None) if prior.is_finite() && prior >= 0.0 => continue,
            Some(None) => return Err(SearchError::InvalidPrior { pos, prior }),
        };
        return Err(SearchError::IllegalMove {
            adapter: Adapter::Policy,
            pos,
            source,
        });
    }
    Ok(())
}

/// Play `first` for `mover`, then let the rollout policy finish the game.
/// Returns the value for `mover`. Running out of plies or time counts as a draw.
fn simulate<const N: usize, R: Rollout<N>>(
    path: &mut Placements<'_, N>,
    first: Pos,
    mover: Player,
    rollout: &mut R,
    depth: usize,
    deadline: Option<Instant>,
) -> Result<f32, SearchError> {
    let mut sim = path.nested();
    sim.place(first, mover).map_err(|source| SearchError::IllegalMove {
        adapter: Adapter::Policy,
        pos: first,
        source,
    })?;
    let mut result = sim.board().outcome(first, mover);
    let mut player = mover.next();
    let mut plies = 0;
    while !result.is_over() {
        if plies >= depth || deadline.map_or(false, |deadline| Instant::now() >= deadline) {
            return Ok(0.0);
        }
        let pos = rollout.pick(sim.board(), player);
        sim.place(pos, player).map_err(|source| SearchError::IllegalMove {
            adapter: Adapter::Rollout,
            pos,
            source,
        })?;
        result = sim.board().outcome(pos, player);
        player = player.next();
        plies += 1;
    }
    Ok(result.reward(mover))
}
