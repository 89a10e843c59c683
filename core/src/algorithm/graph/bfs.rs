//! Breadth-first search over the traversal demo graph
//!
//! `visitedNodes` records dequeue order; discovery (the "seen" set) happens
//! on enqueue so no node enters the queue twice. Tree edges are collected in
//! `visitedEdges`.

use std::collections::{BTreeSet, VecDeque};

use crate::algorithm::state::{EdgePair, GraphState, Step};
use crate::algorithm::traits::NodeId;
use crate::data_structures::graph::{DemoGraph, TRAVERSAL_GRAPH};
use crate::execution::recorder::{vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function bfs(graph, start):
  visited = {start}
  queue = [start]
  while queue is not empty:
    node = queue.dequeue()
    process(node)
    for neighbor in graph.neighbors(node):
      if neighbor not in visited:
        visited.add(neighbor)
        queue.enqueue(neighbor)"#;

const L_INIT: usize = 3;
const L_LOOP: usize = 4;
const L_DEQUEUE: usize = 5;
const L_CHECK: usize = 8;
const L_ENQUEUE: usize = 10;

struct Frontier {
    order: Vec<NodeId>,
    tree_edges: BTreeSet<EdgePair>,
    queue: VecDeque<NodeId>,
}

impl Frontier {
    fn state(&self, graph: &DemoGraph, current: Option<NodeId>, edge: Option<EdgePair>) -> GraphState {
        let mut state = graph.to_state();
        state.visited_nodes = self.order.clone();
        state.visited_edges = self.tree_edges.clone();
        state.current_node = current;
        state.current_edge = edge;
        state.queue = Some(self.queue.iter().copied().collect());
        state
    }
}

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    traverse(n, &TRAVERSAL_GRAPH, NodeId(0))
}

fn traverse(n: &Narrator<'_>, graph: &DemoGraph, start: NodeId) -> Vec<Step> {
    let mut rec = StepRecorder::new();
    let mut seen = BTreeSet::from([start]);
    let mut frontier = Frontier {
        order: Vec::new(),
        tree_edges: BTreeSet::new(),
        queue: VecDeque::from([start]),
    };

    rec.record(
        say!(n, "bfs.start", node = graph.label(start)),
        L_INIT,
        vars!["start" => graph.label(start), "queue" => graph.label(start)],
        frontier.state(graph, Some(start), None),
    );

    while let Some(node) = frontier.queue.pop_front() {
        frontier.order.push(node);
        rec.print(graph.label(node));
        let queued: Vec<NodeId> = frontier.queue.iter().copied().collect();
        rec.record(
            say!(n, "bfs.dequeue", node = graph.label(node), queue = graph.labels(&queued)),
            L_DEQUEUE,
            vars!["node" => graph.label(node), "queue" => graph.labels(&queued)],
            frontier.state(graph, Some(node), None),
        );

        for (neighbor, _) in graph.neighbors(node) {
            let pair = EdgePair::new(node, neighbor);
            if seen.contains(&neighbor) {
                rec.record(
                    say!(n, "graph.already_seen", node = graph.label(neighbor)),
                    L_CHECK,
                    vars!["node" => graph.label(node), "neighbor" => graph.label(neighbor), "visited" => true],
                    frontier.state(graph, Some(node), Some(pair)),
                );
                continue;
            }
            seen.insert(neighbor);
            frontier.queue.push_back(neighbor);
            frontier.tree_edges.insert(pair);
            let queued: Vec<NodeId> = frontier.queue.iter().copied().collect();
            rec.record(
                say!(n, "graph.discover", from = graph.label(node), to = graph.label(neighbor)),
                L_ENQUEUE,
                vars![
                    "node" => graph.label(node),
                    "neighbor" => graph.label(neighbor),
                    "visited" => false,
                    "queue" => graph.labels(&queued),
                ],
                frontier.state(graph, Some(node), Some(pair)),
            );
        }
    }

    rec.record(
        say!(n, "bfs.done", order = graph.labels(&frontier.order)),
        L_LOOP,
        vars!["visited" => frontier.order.len()],
        frontier.state(graph, None, None),
    );
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::testing;
    use std::collections::BTreeMap;

    /// Hop distance from `start`, computed independently of the runner
    fn depths(graph: &DemoGraph, start: NodeId) -> BTreeMap<NodeId, usize> {
        let mut depth = BTreeMap::from([(start, 0)]);
        let mut queue = VecDeque::from([start]);
        while let Some(u) = queue.pop_front() {
            for (v, _) in graph.neighbors(u) {
                if !depth.contains_key(&v) {
                    depth.insert(v, depth[&u] + 1);
                    queue.push_back(v);
                }
            }
        }
        depth
    }

    #[test]
    fn test_visit_order_is_breadth_first() {
        let steps = testing::run_en(run);
        let order = &steps.last().unwrap().graph().unwrap().visited_nodes;
        let depth = depths(&TRAVERSAL_GRAPH, NodeId(0));

        assert_eq!(order.len(), TRAVERSAL_GRAPH.node_count());
        assert_eq!(order.iter().collect::<BTreeSet<_>>().len(), order.len());
        for pair in order.windows(2) {
            assert!(depth[&pair[0]] <= depth[&pair[1]]);
        }
        assert_eq!(TRAVERSAL_GRAPH.labels(order), "A, B, C, D, E, F, G");
    }

    #[test]
    fn test_tree_edges_span_graph() {
        let steps = testing::run_en(run);
        let last = steps.last().unwrap().graph().unwrap();
        assert_eq!(last.visited_edges.len(), TRAVERSAL_GRAPH.node_count() - 1);
        assert!(last.visited_edges.iter().all(|pair| last.has_edge(*pair)));
        assert_eq!(last.queue.as_deref(), Some(&[][..]));
    }
}
