use std::time::{Duration, Instant};

use gomoku::{Board, PlayError, Player, Pos};
use log::{debug, log_enabled, trace, warn, Level};

use crate::{
    agent::{Cascade, NeighbourPolicy, Policy, Rollout, Tactics, WeightedRollout},
    config::{Budget, SearchConfig},
    error::Adapter,
    search::{check_candidates, Playout, Tree},
    SearchError,
};

/// Summary of one call to [`Engine::search`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchStats {
    pub playouts: u32,
    pub root_visits: u32,
    pub nodes: usize,
    pub elapsed: Duration,
}

/// Plays one side of a game, keeping its search tree between moves.
pub struct Engine<const N: usize, P = NeighbourPolicy, R = WeightedRollout, T = Cascade> {
    tree: Tree,
    policy: P,
    rollout: R,
    tactics: T,
    config: SearchConfig,
}

impl<const N: usize> Engine<N> {
    /// An engine using the default policy, rollout and tactics.
    pub fn new(config: SearchConfig) -> Self {
        let policy = NeighbourPolicy {
            radius: config.candidate_radius,
            limit: config.candidates,
        };
        let rollout = WeightedRollout::new(config.rollout_radius, config.seed);
        let tactics = Cascade::new(config.shortcuts.clone());
        Engine::with_adapters(policy, rollout, tactics, config)
    }
}

impl<const N: usize> Default for Engine<N> {
    fn default() -> Self {
        Engine::new(SearchConfig::default())
    }
}

impl<const N: usize, P, R, T> Engine<N, P, R, T>
where
    P: Policy<N>,
    R: Rollout<N>,
    T: Tactics<N>,
{
    pub fn with_adapters(policy: P, rollout: R, tactics: T, config: SearchConfig) -> Self {
        Engine {
            tree: Tree::default(),
            policy,
            rollout,
            tactics,
            config,
        }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Pick a move for `player` on `board`. An explicit `deadline` replaces
    /// the configured budget. The board is not modified.
    pub fn get_action(
        &mut self,
        board: &Board<N>,
        player: Player,
        deadline: Option<Instant>,
    ) -> Result<Pos, SearchError> {
        if let Some(pos) = self.tactics.shortcut(board, player) {
            return checked(board, pos, Adapter::Tactics);
        }

        let budget = match (deadline, self.config.budget) {
            (Some(deadline), _) => Limit::Deadline(deadline),
            (None, Budget::Playouts(playouts)) => Limit::Playouts(playouts),
            (None, Budget::Time(duration)) => Limit::Deadline(Instant::now() + duration),
            (None, Budget::Static) => return self.static_move(board, player),
        };

        let stats = self.run(board, player, budget)?;
        match self.tree.best_move() {
            Some(pos) => {
                debug!(
                    "{player:?} plays {pos} after {} playouts ({} root visits, {} nodes, {:?})\n{}",
                    stats.playouts,
                    stats.root_visits,
                    stats.nodes,
                    stats.elapsed,
                    self.tree.debug(Some(5)),
                );
                if log_enabled!(Level::Debug) {
                    let most_visited = self
                        .tree
                        .improved_policy()
                        .into_iter()
                        .max_by_key(|&(_, visits)| visits);
                    if let Some((visited, visits)) = most_visited.filter(|&(mov, _)| mov != pos) {
                        debug!("{pos} has the best value but {visited} has the most visits ({visits})");
                    }
                }
                Ok(pos)
            }
            None => {
                warn!("no move found for {player:?} after {} playouts", stats.playouts);
                Err(SearchError::PlanningFailure {
                    playouts: stats.playouts,
                })
            }
        }
    }

    /// Run playouts for `player` on `board` without picking a move.
    pub fn search(
        &mut self,
        board: &Board<N>,
        player: Player,
        budget: Budget,
    ) -> Result<SearchStats, SearchError> {
        let budget = match budget {
            Budget::Playouts(playouts) => Limit::Playouts(playouts),
            Budget::Time(duration) => Limit::Deadline(Instant::now() + duration),
            Budget::Static => Limit::Playouts(0),
        };
        self.run(board, player, budget)
    }

    /// Advance the tree past a move that was played in the real game,
    /// by either side.
    pub fn update_with_move(&mut self, pos: Pos) {
        self.tree.reroot(pos);
    }

    fn run(&mut self, board: &Board<N>, player: Player, limit: Limit) -> Result<SearchStats, SearchError> {
        let start = Instant::now();
        let deadline = match limit {
            Limit::Deadline(deadline) => Some(deadline),
            Limit::Playouts(_) => None,
        };
        let mut scratch = board.clone();
        let mut playouts = 0;
        while !limit.reached(playouts) {
            let playout = self.tree.playout(
                &mut scratch,
                player,
                &self.policy,
                &mut self.rollout,
                &self.config,
                deadline,
            );
            playouts += 1;
            match playout {
                Ok(Playout::Barren) if self.tree.is_barren_root() => {
                    trace!("nothing to search from the root");
                    break;
                }
                Ok(_) => {}
                Err(SearchError::Desynced { pos, .. }) => {
                    warn!("tree move {pos} is not playable, discarding the tree");
                    self.tree = Tree::default();
                }
                Err(err) => return Err(err),
            }
        }
        debug_assert_eq!(&scratch, board);

        Ok(SearchStats {
            playouts,
            root_visits: self.tree[self.tree.root()].visits,
            nodes: self.tree.node_count(),
            elapsed: start.elapsed(),
        })
    }

    /// The policy's favourite move, without searching.
    fn static_move(&self, board: &Board<N>, player: Player) -> Result<Pos, SearchError> {
        let candidates = self.policy.priors(board, player);
        check_candidates(board, &candidates)?;
        candidates
            .into_iter()
            .fold(None, |best: Option<(Pos, f32)>, (pos, prior)| match best {
                Some((_, p)) if p >= prior => best,
                _ => Some((pos, prior)),
            })
            .map(|(pos, _)| pos)
            .ok_or(SearchError::NoCandidates)
    }
}

#[derive(Clone, Copy, Debug)]
enum Limit {
    Playouts(u32),
    Deadline(Instant),
}

impl Limit {
    fn reached(self, playouts: u32) -> bool {
        match self {
            Limit::Playouts(limit) => playouts >= limit,
            Limit::Deadline(deadline) => Instant::now() >= deadline,
        }
    }
}

fn checked<const N: usize>(board: &Board<N>, pos: Pos, adapter: Adapter) -> Result<Pos, SearchError> {
    match board.get(pos) {
        Some(None) => Ok(pos),
        Some(Some(_)) => Err(SearchError::IllegalMove {
            adapter,
            pos,
            source: PlayError::Occupied(pos),
        }),
        None => Err(SearchError::IllegalMove {
            adapter,
            pos,
            source: PlayError::OutOfBounds(pos),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SearchConfig {
        SearchConfig::default()
            .with_seed(7)
            .with_shortcuts(Vec::new())
    }

    fn quiet_board() -> Board<9> {
        "
        .........
        .........
        .........
        ...XO....
        ...OX....
        .........
        .........
        .........
        .........
        "
        .parse()
        .unwrap()
    }

    #[test]
    fn shortcut_skips_search() {
        let mut board = Board::<20>::default();
        for y in 5..9 {
            board.place(Pos::new(5, y), Player::One).unwrap();
        }
        for y in 0..3 {
            board.place(Pos::new(10, y), Player::Two).unwrap();
        }
        let mut engine = Engine::<20>::new(SearchConfig::default().with_seed(0));
        let pos = engine.get_action(&board, Player::One, None).unwrap();
        assert!(pos == Pos::new(5, 4) || pos == Pos::new(5, 9));
        assert_eq!(engine.tree().node_count(), 1);
    }

    #[test]
    fn shortcut_blocks_five() {
        let board: Board<9> = "
            .........
            .........
            ..OOOOX..
            .........
            ...X.....
            ....X....
            .........
            .........
            .........
        "
        .parse()
        .unwrap();
        let mut engine = Engine::<9>::new(SearchConfig::default().with_seed(0));
        assert_eq!(engine.get_action(&board, Player::One, None), Ok(Pos::new(2, 1)));
    }

    #[test]
    fn search_finds_win() {
        let board: Board<9> = "
            .........
            .........
            .........
            .........
            XXXX.....
            OOO......
            .........
            ....O....
            .........
        "
        .parse()
        .unwrap();
        let config = config().with_budget(Budget::Playouts(200));
        let mut engine = Engine::<9>::new(config);
        assert_eq!(engine.get_action(&board, Player::One, None), Ok(Pos::new(4, 4)));
        assert!(engine.tree().node_count() > 1);
    }

    #[test]
    fn no_time_no_move() {
        let mut engine = Engine::<9>::new(config());
        let result = engine.get_action(&quiet_board(), Player::One, Some(Instant::now()));
        assert_eq!(result, Err(SearchError::PlanningFailure { playouts: 0 }));

        let mut engine = Engine::<9>::new(config().with_budget(Budget::Playouts(0)));
        let result = engine.get_action(&quiet_board(), Player::One, None);
        assert_eq!(result, Err(SearchError::PlanningFailure { playouts: 0 }));
    }

    #[test]
    fn static_budget_plays_top_prior() {
        let board = quiet_board();
        let mut engine = Engine::<9>::new(config().with_budget(Budget::Static));
        let pos = engine.get_action(&board, Player::One, None).unwrap();
        let priors = engine.policy.priors(&board, Player::One);
        assert_eq!(pos, priors[0].0);
        assert_eq!(engine.tree().node_count(), 1);
    }

    #[test]
    fn bad_shortcut_is_reported() {
        let tactics = |_: &Board<9>, _: Player| -> Option<Pos> { Some(Pos::new(3, 3)) };
        let config = config();
        let policy = NeighbourPolicy { radius: 1, limit: 5 };
        let rollout = WeightedRollout::new(1, Some(0));
        let mut engine = Engine::<9, _, _, _>::with_adapters(policy, rollout, tactics, config);
        assert_eq!(
            engine.get_action(&quiet_board(), Player::One, None),
            Err(SearchError::IllegalMove {
                adapter: Adapter::Tactics,
                pos: Pos::new(3, 3),
                source: PlayError::Occupied(Pos::new(3, 3)),
            })
        );
    }

    #[test]
    fn tree_is_reused_between_moves() {
        let mut board = quiet_board();
        let mut engine = Engine::<9>::new(config().with_budget(Budget::Playouts(0)));
        let stats = engine.search(&board, Player::One, Budget::Playouts(60)).unwrap();
        assert_eq!(stats.playouts, 60);
        assert_eq!(stats.nodes, engine.tree().node_count());

        let (pos, visits) = engine
            .tree()
            .improved_policy()
            .into_iter()
            .max_by_key(|&(_, visits)| visits)
            .unwrap();
        let child = engine.tree().child(engine.tree().root(), pos).unwrap();
        let q = engine.tree()[child].q;

        board.place(pos, Player::One).unwrap();
        engine.update_with_move(pos);
        let root = &engine.tree()[engine.tree().root()];
        assert_eq!(root.visits, visits);
        assert_eq!(root.q, q);
        assert!(!root.is_leaf());

        // No playouts left, but the kept subtree still has an answer.
        let reply = engine.get_action(&board, Player::Two, None).unwrap();
        assert!(board.is_free(reply));
    }

    #[test]
    fn unknown_move_resets_tree() {
        let board = quiet_board();
        let mut engine = Engine::<9>::new(config());
        engine.search(&board, Player::One, Budget::Playouts(20)).unwrap();
        assert!(engine.tree().node_count() > 1);
        engine.update_with_move(Pos::new(8, 8));
        assert_eq!(engine.tree().node_count(), 1);
        assert_eq!(engine.tree()[engine.tree().root()].visits, 0);
    }

    #[test]
    fn time_budget_searches_until_deadline() {
        let board = quiet_board();
        let config = config().with_budget(Budget::Time(Duration::from_millis(50)));
        let mut engine = Engine::<9>::new(config);
        let start = Instant::now();
        let pos = engine.get_action(&board, Player::One, None).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(50));
        assert!(board.is_free(pos));
        assert!(engine.tree()[engine.tree().root()].visits > 0);
    }

    #[test]
    fn static_move_checks_priors() {
        let policy = |_: &Board<9>, _: Player| -> Vec<(Pos, f32)> {
            vec![(Pos::new(2, 2), f32::NAN), (Pos::new(5, 5), 0.5)]
        };
        let rollout = WeightedRollout::new(1, Some(0));
        let config = config().with_budget(Budget::Static);
        let mut engine = Engine::<9, _, _, _>::with_adapters(policy, rollout, Cascade::none(), config);
        let result = engine.get_action(&quiet_board(), Player::One, None);
        assert!(matches!(result, Err(SearchError::InvalidPrior { pos, .. }) if pos == Pos::new(2, 2)));
    }
}
