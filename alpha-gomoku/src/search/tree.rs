use std::ops::Index;

use gomoku::Pos;

use super::node::{Node, NodeId};
use crate::SearchError;

/// Search tree stored in an arena. Nodes refer to their parent by index,
/// and each node lists the moves leading to its children.
#[derive(Clone, Debug)]
pub struct Tree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) root: NodeId,
}

impl Default for Tree {
    fn default() -> Self {
        Tree {
            nodes: vec![Node::default()],
            root: NodeId(0),
        }
    }
}

impl Index<NodeId> for Tree {
    type Output = Node;

    fn index(&self, index: NodeId) -> &Self::Output {
        &self.nodes[index.index()]
    }
}

impl Tree {
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes in the arena. Never zero, the root is always there.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Child reached by playing `pos` at `id`.
    pub fn child(&self, id: NodeId, pos: Pos) -> Option<NodeId> {
        self[id]
            .children
            .iter()
            .find(|(mov, _)| *mov == pos)
            .map(|&(_, child)| child)
    }

    /// Pick the child maximising Q + U. Ties go to the earliest child.
    pub fn select(&self, id: NodeId, c_puct: f32) -> Result<(Pos, NodeId), SearchError> {
        let node = &self[id];
        let parent_visits_sqrt = (node.visits as f32).sqrt();
        let mut best: Option<(f32, Pos, NodeId)> = None;
        for &(mov, child) in &node.children {
            let ucb = self[child].upper_confidence_bound(parent_visits_sqrt, c_puct);
            if best.map_or(true, |(score, ..)| ucb > score) {
                best = Some((ucb, mov, child));
            }
        }
        best.map(|(_, mov, child)| (mov, child))
            .ok_or(SearchError::SelectOnLeaf)
    }

    /// Add a child for every candidate move that is not a child yet.
    /// Returns the children that were created.
    pub fn expand(
        &mut self,
        id: NodeId,
        candidates: impl IntoIterator<Item = (Pos, f32)>,
    ) -> Vec<(Pos, NodeId)> {
        let mut created = Vec::new();
        for (mov, prior) in candidates {
            if self.child(id, mov).is_some() {
                continue;
            }
            let child = NodeId(self.nodes.len() as u32);
            self.nodes.push(Node::new(Some(id), prior));
            self.node_mut(id).children.push((mov, child));
            created.push((mov, child));
        }
        created
    }

    /// Back up `value` from `id` to the root, flipping its sign at every step.
    pub fn update_recursive(&mut self, id: NodeId, value: f32) {
        let mut current = Some(id);
        let mut value = value;
        while let Some(id) = current {
            let node = self.node_mut(id);
            node.update(value);
            value = -value;
            current = node.parent;
        }
    }
}
