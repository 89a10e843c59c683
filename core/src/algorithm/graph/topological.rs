//! Kahn's topological sort
//!
//! If the queue drains before every node is output, the remaining nodes
//! lie on a cycle: the runner records a final "cycle detected" step and
//! stops instead of looping.

use std::collections::{BTreeSet, VecDeque};

use crate::algorithm::state::{EdgePair, GraphState, Step};
use crate::algorithm::traits::NodeId;
use crate::data_structures::graph::{DemoGraph, TASK_DAG};
use crate::execution::recorder::{vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function topologicalSort(graph):
  inDegree = count incoming edges per node
  queue = nodes with inDegree 0
  order = []
  while queue is not empty:
    u = queue.dequeue()
    order.append(u)
    for v in graph.successors(u):
      inDegree[v] = inDegree[v] - 1
      if inDegree[v] == 0:
        queue.enqueue(v)
  if length(order) < |V|:
    report "cycle detected"
  return order"#;

const L_DEGREES: usize = 2;
const L_SOURCES: usize = 3;
const L_OUTPUT: usize = 7;
const L_DECREMENT: usize = 9;
const L_ENQUEUE: usize = 11;
const L_CYCLE: usize = 13;
const L_DONE: usize = 14;

struct Kahn {
    order: Vec<NodeId>,
    used_edges: BTreeSet<EdgePair>,
    queue: VecDeque<NodeId>,
    in_degree: Vec<usize>,
}

impl Kahn {
    fn state(&self, graph: &DemoGraph, current: Option<NodeId>, edge: Option<EdgePair>) -> GraphState {
        let mut state = graph.to_state();
        state.visited_nodes = self.order.clone();
        state.visited_edges = self.used_edges.clone();
        state.current_node = current;
        state.current_edge = edge;
        state.queue = Some(self.queue.iter().copied().collect());
        state
    }

    /// `A:0 B:0 C:2 ...` for the variables panel
    fn degrees(&self, graph: &DemoGraph) -> String {
        graph
            .node_ids()
            .map(|id| format!("{}:{}", graph.label(id), self.in_degree[id.as_usize()]))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    sort_graph(n, &TASK_DAG)
}

fn sort_graph(n: &Narrator<'_>, graph: &DemoGraph) -> Vec<Step> {
    let mut rec = StepRecorder::new();
    let mut kahn = Kahn {
        order: Vec::new(),
        used_edges: BTreeSet::new(),
        queue: VecDeque::new(),
        in_degree: graph.in_degrees(),
    };

    rec.record(
        say!(n, "topo.degrees", degrees = kahn.degrees(graph)),
        L_DEGREES,
        vars!["inDegree" => kahn.degrees(graph)],
        kahn.state(graph, None, None),
    );

    kahn.queue = graph
        .node_ids()
        .filter(|id| kahn.in_degree[id.as_usize()] == 0)
        .collect();
    let sources: Vec<NodeId> = kahn.queue.iter().copied().collect();
    rec.record(
        say!(n, "topo.sources", nodes = graph.labels(&sources)),
        L_SOURCES,
        vars!["inDegree" => kahn.degrees(graph), "queue" => graph.labels(&sources)],
        kahn.state(graph, None, None),
    );

    while let Some(u) = kahn.queue.pop_front() {
        kahn.order.push(u);
        rec.print(graph.label(u));
        rec.record(
            say!(n, "topo.output", node = graph.label(u)),
            L_OUTPUT,
            vars!["u" => graph.label(u), "order" => graph.labels(&kahn.order)],
            kahn.state(graph, Some(u), None),
        );

        for (v, _) in graph.neighbors(u) {
            let slot = v.as_usize();
            kahn.in_degree[slot] = kahn.in_degree[slot].saturating_sub(1);
            let pair = EdgePair::new(u, v);
            kahn.used_edges.insert(pair);
            rec.record(
                say!(n, "topo.decrement", node = graph.label(v), degree = kahn.in_degree[slot]),
                L_DECREMENT,
                vars!["u" => graph.label(u), "v" => graph.label(v), "inDegree" => kahn.degrees(graph)],
                kahn.state(graph, Some(u), Some(pair)),
            );

            if kahn.in_degree[slot] == 0 {
                kahn.queue.push_back(v);
                let queued: Vec<NodeId> = kahn.queue.iter().copied().collect();
                rec.record(
                    say!(n, "topo.enqueue", node = graph.label(v)),
                    L_ENQUEUE,
                    vars!["u" => graph.label(u), "v" => graph.label(v), "queue" => graph.labels(&queued)],
                    kahn.state(graph, Some(v), Some(pair)),
                );
            }
        }
    }

    if kahn.order.len() < graph.node_count() {
        log::debug!(
            "topological sort stopped with {} of {} nodes output",
            kahn.order.len(),
            graph.node_count()
        );
        rec.record(
            say!(n, "topo.cycle", count = kahn.order.len(), total = graph.node_count()),
            L_CYCLE,
            vars!["order" => graph.labels(&kahn.order), "inDegree" => kahn.degrees(graph)],
            kahn.state(graph, None, None),
        );
        return rec.finish();
    }

    rec.record(
        say!(n, "topo.done", order = graph.labels(&kahn.order)),
        L_DONE,
        vars!["order" => graph.labels(&kahn.order)],
        kahn.state(graph, None, None),
    );
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::testing;
    use crate::data_structures::graph::{DemoEdge, DemoNode};
    use crate::i18n::Locale;

    #[test]
    fn test_order_respects_every_edge() {
        let steps = testing::run_en(run);
        let last = steps.last().unwrap();
        assert_eq!(last.code_line, Some(L_DONE));

        let order = &last.graph().unwrap().visited_nodes;
        assert_eq!(TASK_DAG.labels(order), "A, B, C, D, E, F");
        let position = |id: usize| order.iter().position(|n| n.as_usize() == id).unwrap();
        for e in TASK_DAG.edges {
            assert!(position(e.from) < position(e.to));
        }
        assert_eq!(last.console_output, vec!["A", "B", "C", "D", "E", "F"]);
    }

    #[test]
    fn test_cycle_is_reported_instead_of_looping() {
        const CYCLIC: DemoGraph = DemoGraph {
            nodes: &[
                DemoNode { label: "X", x: 0.0, y: 0.0 },
                DemoNode { label: "Y", x: 1.0, y: 0.0 },
                DemoNode { label: "Z", x: 2.0, y: 0.0 },
            ],
            edges: &[
                DemoEdge { from: 0, to: 1, weight: 1 },
                DemoEdge { from: 1, to: 2, weight: 1 },
                DemoEdge { from: 2, to: 1, weight: 1 },
            ],
            directed: true,
            weighted: false,
        };
        let narrator = Narrator::builtin(Locale::En);
        let steps = sort_graph(&narrator, &CYCLIC);
        let last = steps.last().unwrap();
        assert_eq!(last.code_line, Some(L_CYCLE));
        assert_eq!(last.graph().unwrap().visited_nodes, vec![NodeId(0)]);
    }
}
