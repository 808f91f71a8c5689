use std::time::Duration;

use gomoku::Shortcut;

// game settings
pub const N: usize = 20;

// search
pub const EXPLORATION: f32 = 1.0;
pub const PLAYOUTS: u32 = 400;
pub const ROLLOUT_DEPTH: usize = 20;
pub const ROLLOUTS_PER_CHILD: usize = 1;

// policy
pub const CANDIDATES: usize = 10;
pub const CANDIDATE_RADIUS: usize = 2;
pub const ROLLOUT_RADIUS: usize = 1;

/// How much work a single call to `get_action` may do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Budget {
    /// Run exactly this many playouts.
    Playouts(u32),
    /// Keep running playouts until this much time has passed.
    Time(Duration),
    /// Do not search; play the policy's favourite move.
    Static,
}

#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// c_puct: higher values trust the prior more than the observed value.
    pub exploration: f32,
    pub budget: Budget,
    /// Plies a rollout may play before it is scored as a draw.
    pub rollout_depth: usize,
    pub rollouts_per_child: usize,
    /// Number of moves the default policy proposes per expansion.
    pub candidates: usize,
    pub candidate_radius: usize,
    pub rollout_radius: usize,
    /// Tactical shortcuts in priority order.
    pub shortcuts: Vec<Shortcut>,
    /// Seed for the default rollout policy; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            exploration: EXPLORATION,
            budget: Budget::Playouts(PLAYOUTS),
            rollout_depth: ROLLOUT_DEPTH,
            rollouts_per_child: ROLLOUTS_PER_CHILD,
            candidates: CANDIDATES,
            candidate_radius: CANDIDATE_RADIUS,
            rollout_radius: ROLLOUT_RADIUS,
            shortcuts: Shortcut::CASCADE.to_vec(),
            seed: None,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn with_budget(mut self, budget: Budget) -> Self {
        self.budget = budget;
        self
    }

    #[must_use]
    pub fn with_exploration(mut self, exploration: f32) -> Self {
        self.exploration = exploration;
        self
    }

    #[must_use]
    pub fn with_rollout_depth(mut self, depth: usize) -> Self {
        self.rollout_depth = depth;
        self
    }

    #[must_use]
    pub fn with_shortcuts(mut self, shortcuts: Vec<Shortcut>) -> Self {
        self.shortcuts = shortcuts;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
