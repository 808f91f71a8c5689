mod debug;
mod mcts;
mod node;
mod play;
mod tree;

pub(crate) use mcts::check_candidates;
pub use mcts::{Placements, Playout};
pub use node::{Node, NodeId};
pub use tree::Tree;
