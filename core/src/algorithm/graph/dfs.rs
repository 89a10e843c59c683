//! Iterative depth-first search with an explicit stack
//!
//! Neighbors are pushed in reverse so the smallest id is popped first,
//! matching the recursive visit order. A node may sit on the stack more than
//! once; stale entries are skipped on pop.

use std::collections::{BTreeMap, BTreeSet};

use crate::algorithm::state::{EdgePair, GraphState, Step};
use crate::algorithm::traits::NodeId;
use crate::data_structures::graph::{DemoGraph, TRAVERSAL_GRAPH};
use crate::execution::recorder::{vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function dfs(graph, start):
  stack = [start]
  visited = {}
  while stack is not empty:
    node = stack.pop()
    if node in visited:
      continue
    visited.add(node)
    process(node)
    for neighbor in reverse(graph.neighbors(node)):
      if neighbor not in visited:
        stack.push(neighbor)"#;

const L_INIT: usize = 2;
const L_LOOP: usize = 4;
const L_POP: usize = 5;
const L_SKIP: usize = 7;
const L_VISIT: usize = 8;
const L_PUSH: usize = 12;

struct Walk {
    order: Vec<NodeId>,
    tree_edges: BTreeSet<EdgePair>,
    stack: Vec<NodeId>,
}

impl Walk {
    fn state(&self, graph: &DemoGraph, current: Option<NodeId>, edge: Option<EdgePair>) -> GraphState {
        let mut state = graph.to_state();
        state.visited_nodes = self.order.clone();
        state.visited_edges = self.tree_edges.clone();
        state.current_node = current;
        state.current_edge = edge;
        state.stack = Some(self.stack.clone());
        state
    }
}

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    traverse(n, &TRAVERSAL_GRAPH, NodeId(0))
}

fn traverse(n: &Narrator<'_>, graph: &DemoGraph, start: NodeId) -> Vec<Step> {
    let mut rec = StepRecorder::new();
    let mut visited = BTreeSet::new();
    // Most recent node that pushed each entry; becomes the tree edge on visit
    let mut parent: BTreeMap<NodeId, NodeId> = BTreeMap::new();
    let mut walk = Walk {
        order: Vec::new(),
        tree_edges: BTreeSet::new(),
        stack: vec![start],
    };

    rec.record(
        say!(n, "dfs.start", node = graph.label(start)),
        L_INIT,
        vars!["start" => graph.label(start), "stack" => graph.label(start)],
        walk.state(graph, Some(start), None),
    );

    while let Some(node) = walk.stack.pop() {
        rec.record(
            say!(n, "dfs.pop", node = graph.label(node), stack = graph.labels(&walk.stack)),
            L_POP,
            vars!["node" => graph.label(node), "stack" => graph.labels(&walk.stack)],
            walk.state(graph, Some(node), None),
        );

        if visited.contains(&node) {
            rec.record(
                say!(n, "dfs.skip", node = graph.label(node)),
                L_SKIP,
                vars!["node" => graph.label(node), "visited" => true],
                walk.state(graph, Some(node), None),
            );
            continue;
        }

        visited.insert(node);
        walk.order.push(node);
        let edge = parent.get(&node).map(|p| EdgePair::new(*p, node));
        if let Some(pair) = edge {
            walk.tree_edges.insert(pair);
        }
        rec.print(graph.label(node));
        rec.record(
            say!(n, "dfs.visit", node = graph.label(node)),
            L_VISIT,
            vars!["node" => graph.label(node), "visited" => false],
            walk.state(graph, Some(node), edge),
        );

        for (neighbor, _) in graph.neighbors(node).into_iter().rev() {
            if visited.contains(&neighbor) {
                continue;
            }
            walk.stack.push(neighbor);
            parent.insert(neighbor, node);
            rec.record(
                say!(n, "dfs.push", node = graph.label(neighbor)),
                L_PUSH,
                vars![
                    "node" => graph.label(node),
                    "neighbor" => graph.label(neighbor),
                    "stack" => graph.labels(&walk.stack),
                ],
                walk.state(graph, Some(node), Some(EdgePair::new(node, neighbor))),
            );
        }
    }

    rec.record(
        say!(n, "dfs.done", order = graph.labels(&walk.order)),
        L_LOOP,
        vars!["visited" => walk.order.len()],
        walk.state(graph, None, None),
    );
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::testing;

    #[test]
    fn test_depth_first_order() {
        let steps = testing::run_en(run);
        let last = steps.last().unwrap().graph().unwrap();
        assert_eq!(TRAVERSAL_GRAPH.labels(&last.visited_nodes), "A, B, D, E, G, F, C");
        assert_eq!(last.visited_edges.len(), TRAVERSAL_GRAPH.node_count() - 1);
        assert_eq!(last.stack.as_deref(), Some(&[][..]));
    }

    #[test]
    fn test_stale_entry_is_skipped() {
        let steps = testing::run_en(run);
        assert_eq!(steps.iter().filter(|s| s.code_line == Some(L_SKIP)).count(), 1);
    }
}
