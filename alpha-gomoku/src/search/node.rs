use gomoku::Pos;

/// Index of a node in the tree's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub parent: Option<NodeId>,
    pub children: Vec<(Pos, NodeId)>,
    pub visits: u32,
    /// Running average of the values backed up through this node, from the
    /// perspective of the player who moved into it.
    pub q: f32,
    pub prior: f32,
    /// The policy had nothing to offer at this (non-terminal) leaf.
    pub barren: bool,
}

impl Default for Node {
    fn default() -> Self {
        Node::new(None, 1.0)
    }
}

impl Node {
    pub fn new(parent: Option<NodeId>, prior: f32) -> Self {
        Node {
            parent,
            children: Vec::new(),
            visits: 0,
            q: 0.0,
            prior,
            barren: false,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Fold one more value into the running average.
    pub fn update(&mut self, value: f32) {
        self.visits += 1;
        self.q += (value - self.q) / self.visits as f32;
    }

    pub fn exploration(&self, parent_visits_sqrt: f32, c_puct: f32) -> f32 {
        // U(s, a) = c * P(s, a) * sqrt(N(s)) / (1 + N(s, a))
        c_puct * self.prior * parent_visits_sqrt / (1.0 + self.visits as f32)
    }

    pub fn upper_confidence_bound(&self, parent_visits_sqrt: f32, c_puct: f32) -> f32 {
        self.q + self.exploration(parent_visits_sqrt, c_puct)
    }
}
