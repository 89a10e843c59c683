//! Prim's minimum spanning tree

use std::collections::BTreeSet;

use crate::algorithm::state::{EdgePair, GraphState, Step};
use crate::algorithm::traits::NodeId;
use crate::data_structures::graph::{DemoGraph, WEIGHTED_GRAPH};
use crate::data_structures::priority_queue::MinQueue;
use crate::execution::recorder::{vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function prim(graph, start):
  inTree = {start}
  pq = edges of start as (w, start, v)
  while pq is not empty and |inTree| < |V|:
    (w, u, v) = pq.popMin()
    if v in inTree:
      continue
    add v to inTree
    add edge (u, v) to MST
    for (x, wx) in graph.neighbors(v):
      if x not in inTree:
        pq.push((wx, v, x))"#;

const L_INIT: usize = 3;
const L_LOOP: usize = 4;
const L_POP: usize = 5;
const L_SKIP: usize = 7;
const L_ADD: usize = 9;
const L_PUSH: usize = 12;

type Candidate = (u32, NodeId, NodeId);

struct Tree {
    members: Vec<NodeId>,
    edges: BTreeSet<EdgePair>,
    pq: MinQueue<Candidate>,
    total: u32,
}

impl Tree {
    fn state(&self, graph: &DemoGraph, current: Option<NodeId>, edge: Option<EdgePair>) -> GraphState {
        let mut state = graph.to_state();
        state.visited_nodes = self.members.clone();
        state.visited_edges = self.edges.clone();
        state.current_node = current;
        state.current_edge = edge;
        state.queue = Some(self.pq.ordered().into_iter().map(|(_, _, v)| v).collect());
        state
    }

    fn push_edges(&mut self, graph: &DemoGraph, from: NodeId) -> Vec<Candidate> {
        let mut pushed = Vec::new();
        for (x, w) in graph.neighbors(from) {
            if !self.members.contains(&x) {
                self.pq.push((w, from, x));
                pushed.push((w, from, x));
            }
        }
        pushed
    }
}

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    spanning_tree(n, &WEIGHTED_GRAPH, NodeId(0))
}

fn spanning_tree(n: &Narrator<'_>, graph: &DemoGraph, start: NodeId) -> Vec<Step> {
    let mut rec = StepRecorder::new();
    let mut tree = Tree {
        members: vec![start],
        edges: BTreeSet::new(),
        pq: MinQueue::new(),
        total: 0,
    };
    tree.push_edges(graph, start);

    rec.record(
        say!(n, "prim.start", node = graph.label(start), count = tree.pq.len()),
        L_INIT,
        vars!["start" => graph.label(start), "inTree" => graph.label(start)],
        tree.state(graph, Some(start), None),
    );

    while tree.members.len() < graph.node_count() {
        let Some((w, u, v)) = tree.pq.pop() else {
            break;
        };
        let pair = EdgePair::new(u, v);
        rec.record(
            say!(n, "prim.pop", from = graph.label(u), to = graph.label(v), weight = w),
            L_POP,
            vars!["w" => w, "u" => graph.label(u), "v" => graph.label(v)],
            tree.state(graph, Some(u), Some(pair)),
        );

        if tree.members.contains(&v) {
            rec.record(
                say!(n, "prim.skip", node = graph.label(v)),
                L_SKIP,
                vars!["w" => w, "u" => graph.label(u), "v" => graph.label(v)],
                tree.state(graph, Some(u), Some(pair)),
            );
            continue;
        }

        tree.members.push(v);
        tree.edges.insert(pair);
        tree.total += w;
        rec.print(format!("{}-{} ({})", graph.label(u), graph.label(v), w));
        rec.record(
            say!(n, "prim.add", from = graph.label(u), to = graph.label(v), weight = w, total = tree.total),
            L_ADD,
            vars!["w" => w, "u" => graph.label(u), "v" => graph.label(v), "total" => tree.total],
            tree.state(graph, Some(v), Some(pair)),
        );

        for (wx, from, x) in tree.push_edges(graph, v) {
            rec.record(
                say!(n, "prim.push", from = graph.label(from), to = graph.label(x), weight = wx),
                L_PUSH,
                vars!["v" => graph.label(from), "x" => graph.label(x), "wx" => wx],
                tree.state(graph, Some(v), Some(EdgePair::new(from, x))),
            );
        }
    }

    rec.print(format!("total = {}", tree.total));
    rec.record(
        say!(n, "prim.done", total = tree.total),
        L_LOOP,
        vars!["total" => tree.total, "inTree" => graph.labels(&tree.members)],
        tree.state(graph, None, None),
    );
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::state::Scalar;
    use crate::algorithm::testing;

    #[test]
    fn test_minimum_spanning_tree() {
        let steps = testing::run_en(run);
        let last = steps.last().unwrap();
        let graph = last.graph().unwrap();

        assert_eq!(graph.visited_edges.len(), WEIGHTED_GRAPH.node_count() - 1);
        assert_eq!(last.variables.get("total"), Some(&Scalar::Int(13)));
        let expected: BTreeSet<EdgePair> = [(0, 2), (1, 2), (1, 3), (3, 4), (4, 5)]
            .into_iter()
            .map(|(a, b)| EdgePair::new(NodeId(a), NodeId(b)))
            .collect();
        assert_eq!(graph.visited_edges, expected);
    }

    #[test]
    fn test_tree_order() {
        let steps = testing::run_en(run);
        let members = &steps.last().unwrap().graph().unwrap().visited_nodes;
        assert_eq!(WEIGHTED_GRAPH.labels(members), "A, C, B, D, E, F");
    }
}
