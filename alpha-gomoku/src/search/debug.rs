use std::collections::VecDeque;

use gomoku::Pos;

use super::{node::NodeId, tree::Tree};

impl Tree {
    /// Table of the root's children, most visited first.
    pub fn debug(&self, limit: Option<usize>) -> String {
        const MAX_CONTINUATION_LEN: usize = 8;
        const MIN_VISIT_COUNT: u32 = 10;
        let mut children: Vec<_> = self[self.root].children.iter().collect();
        children.sort_by_key(|(_, child)| std::cmp::Reverse(self[*child].visits));
        format!(
            "move       visits        q    prior | continuation\n{}",
            children
                .into_iter()
                .take(limit.unwrap_or(usize::MAX))
                .map(|&(mov, child)| {
                    let node = &self[child];
                    let continuation = self
                        .continuation(child, MIN_VISIT_COUNT, MAX_CONTINUATION_LEN)
                        .into_iter()
                        .map(|pos| pos.to_string())
                        .collect::<Vec<_>>()
                        .join(" ");
                    format!(
                        "{: <8} {: >8} {: >8.4} {: >8.4} | {}\n",
                        mov.to_string(),
                        node.visits,
                        node.q,
                        node.prior,
                        continuation,
                    )
                })
                .collect::<String>()
        )
    }

    /// Most visited line of play below `id`, following children with more
    /// than `min_visit_count` visits.
    pub fn continuation(&self, id: NodeId, min_visit_count: u32, depth: usize) -> VecDeque<Pos> {
        if depth == 0 || self[id].visits <= min_visit_count {
            return VecDeque::new();
        }
        let Some(&(mov, child)) = self[id]
            .children
            .iter()
            .max_by_key(|(_, child)| self[*child].visits)
        else {
            return VecDeque::new();
        };
        let mut line = self.continuation(child, min_visit_count, depth - 1);
        line.push_front(mov);
        line
    }
}
