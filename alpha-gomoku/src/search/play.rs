use gomoku::Pos;
use log::trace;

use super::{
    node::{Node, NodeId},
    tree::Tree,
};

impl Tree {
    /// The root's child with the highest value; visits break ties.
    pub fn best_move(&self) -> Option<Pos> {
        self[self.root]
            .children
            .iter()
            .map(|&(mov, child)| (mov, &self[child]))
            .fold(None, |best: Option<(Pos, &Node)>, (mov, node)| match best {
                Some((_, b)) if (b.q, b.visits) >= (node.q, node.visits) => best,
                _ => Some((mov, node)),
            })
            .map(|(mov, _)| mov)
    }

    /// Visit counts of the root's children.
    pub fn improved_policy(&self) -> Vec<(Pos, u32)> {
        self[self.root]
            .children
            .iter()
            .map(|&(mov, child)| (mov, self[child].visits))
            .collect()
    }

    /// Step the root forward along `pos`, keeping that subtree and its
    /// statistics. Everything else is dropped. When `pos` was never
    /// expanded the tree starts over. Returns whether the subtree was kept.
    pub fn reroot(&mut self, pos: Pos) -> bool {
        let Some(child) = self.child(self.root, pos) else {
            trace!("{pos} is not in the tree, starting over");
            *self = Tree::default();
            return false;
        };

        // Copy the subtree into a fresh arena, depth first. Children are
        // pushed in reverse so that they keep their order.
        let mut nodes: Vec<Node> = Vec::new();
        let mut stack: Vec<(NodeId, Option<(NodeId, Pos)>)> = vec![(child, None)];
        while let Some((old, parent)) = stack.pop() {
            let id = NodeId(nodes.len() as u32);
            let node = &self[old];
            nodes.push(Node {
                parent: parent.map(|(parent, _)| parent),
                children: Vec::with_capacity(node.children.len()),
                ..*node
            });
            if let Some((parent, mov)) = parent {
                nodes[parent.index()].children.push((mov, id));
            }
            stack.extend(node.children.iter().rev().map(|&(mov, c)| (c, Some((id, mov)))));
        }
        trace!("kept {} of {} nodes after {pos}", nodes.len(), self.nodes.len());
        self.nodes = nodes;
        self.root = NodeId(0);
        true
    }
}
