//! Dijkstra's single-source shortest paths
//!
//! Lazy-deletion variant: improved distances are pushed again and stale
//! queue entries are skipped on pop. A finalized node is never relaxed.

use std::collections::{BTreeMap, BTreeSet};

use crate::algorithm::state::{Distance, EdgePair, GraphState, Step};
use crate::algorithm::traits::NodeId;
use crate::data_structures::graph::{DemoGraph, WEIGHTED_GRAPH};
use crate::data_structures::priority_queue::MinQueue;
use crate::execution::recorder::{vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function dijkstra(graph, source):
  dist = map with every node at infinity
  dist[source] = 0
  pq = [(0, source)]
  while pq is not empty:
    (d, u) = pq.popMin()
    if u is finalized: continue
    mark u finalized
    for (v, w) in graph.neighbors(u):
      if v not finalized and d + w < dist[v]:
        dist[v] = d + w
        pq.push((dist[v], v))
  return dist"#;

const L_INIT: usize = 3;
const L_POP: usize = 6;
const L_STALE: usize = 7;
const L_FINALIZE: usize = 8;
const L_CHECK: usize = 10;
const L_RELAX: usize = 11;
const L_DONE: usize = 13;

struct Search {
    dist: BTreeMap<NodeId, Distance>,
    finalized: Vec<NodeId>,
    tree_edges: BTreeSet<EdgePair>,
    pq: MinQueue<(u32, NodeId)>,
}

impl Search {
    fn state(&self, graph: &DemoGraph, current: Option<NodeId>, edge: Option<EdgePair>) -> GraphState {
        let mut state = graph.to_state();
        state.visited_nodes = self.finalized.clone();
        state.visited_edges = self.tree_edges.clone();
        state.current_node = current;
        state.current_edge = edge;
        state.queue = Some(self.pq.ordered().into_iter().map(|(_, id)| id).collect());
        state.distances = Some(self.dist.clone());
        state
    }
}

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    shortest_paths(n, &WEIGHTED_GRAPH, NodeId(0))
}

fn shortest_paths(n: &Narrator<'_>, graph: &DemoGraph, source: NodeId) -> Vec<Step> {
    let mut rec = StepRecorder::new();
    let mut parent: BTreeMap<NodeId, NodeId> = BTreeMap::new();
    let mut search = Search {
        dist: graph.node_ids().map(|id| (id, Distance::Infinite)).collect(),
        finalized: Vec::new(),
        tree_edges: BTreeSet::new(),
        pq: MinQueue::new(),
    };
    search.dist.insert(source, Distance::Finite(0));
    search.pq.push((0, source));

    rec.record(
        say!(n, "dijkstra.start", source = graph.label(source)),
        L_INIT,
        vars!["source" => graph.label(source)],
        search.state(graph, Some(source), None),
    );

    while let Some((d, u)) = search.pq.pop() {
        if search.finalized.contains(&u) {
            rec.record(
                say!(n, "dijkstra.stale", node = graph.label(u), dist = d),
                L_STALE,
                vars!["u" => graph.label(u), "d" => d],
                search.state(graph, Some(u), None),
            );
            continue;
        }

        rec.record(
            say!(n, "dijkstra.pop", node = graph.label(u), dist = d),
            L_POP,
            vars!["u" => graph.label(u), "d" => d],
            search.state(graph, Some(u), None),
        );

        search.finalized.push(u);
        let edge = parent.get(&u).map(|p| EdgePair::new(*p, u));
        if let Some(pair) = edge {
            search.tree_edges.insert(pair);
        }
        rec.print(format!("{}: {}", graph.label(u), d));
        rec.record(
            say!(n, "dijkstra.finalize", node = graph.label(u), dist = d),
            L_FINALIZE,
            vars!["u" => graph.label(u), "d" => d],
            search.state(graph, Some(u), edge),
        );

        for (v, w) in graph.neighbors(u) {
            let pair = EdgePair::new(u, v);
            if search.finalized.contains(&v) {
                rec.record(
                    say!(n, "dijkstra.finalized", node = graph.label(v)),
                    L_CHECK,
                    vars!["u" => graph.label(u), "v" => graph.label(v), "w" => w],
                    search.state(graph, Some(u), Some(pair)),
                );
                continue;
            }

            let current = search.dist.get(&v).copied().unwrap_or(Distance::Infinite);
            let candidate = d + w;
            if Distance::Finite(candidate) < current {
                search.dist.insert(v, Distance::Finite(candidate));
                search.pq.push((candidate, v));
                parent.insert(v, u);
                rec.record(
                    say!(n, "dijkstra.relax", to = graph.label(v), old = current, new = candidate),
                    L_RELAX,
                    vars!["u" => graph.label(u), "v" => graph.label(v), "w" => w, "dist[v]" => candidate],
                    search.state(graph, Some(u), Some(pair)),
                );
            } else {
                rec.record(
                    say!(n, "dijkstra.keep", to = graph.label(v), current = current, candidate = candidate),
                    L_CHECK,
                    vars!["u" => graph.label(u), "v" => graph.label(v), "w" => w, "dist[v]" => current],
                    search.state(graph, Some(u), Some(pair)),
                );
            }
        }
    }

    rec.record(
        say!(n, "dijkstra.done", source = graph.label(source)),
        L_DONE,
        vars!["source" => graph.label(source)],
        search.state(graph, None, None),
    );
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::testing;

    /// Bellman-Ford style brute force over the same edge list
    fn brute_force(graph: &DemoGraph, source: NodeId) -> Vec<Option<u32>> {
        let mut dist = vec![None; graph.node_count()];
        dist[source.as_usize()] = Some(0u32);
        for _ in 0..graph.node_count() {
            for e in graph.edges {
                for (a, b) in [(e.from, e.to), (e.to, e.from)] {
                    if let Some(da) = dist[a] {
                        let via = da + e.weight;
                        if dist[b].map_or(true, |db| via < db) {
                            dist[b] = Some(via);
                        }
                    }
                }
            }
        }
        dist
    }

    #[test]
    fn test_final_distances_match_brute_force() {
        let steps = testing::run_en(run);
        let distances = steps.last().unwrap().graph().unwrap().distances.clone().unwrap();
        let expected = brute_force(&WEIGHTED_GRAPH, NodeId(0));
        for (id, dist) in distances {
            assert_eq!(dist.finite(), expected[id.as_usize()], "node {}", id);
        }
    }

    #[test]
    fn test_finalized_distance_never_changes() {
        let steps = testing::run_en(run);
        for (idx, step) in steps.iter().enumerate() {
            let graph = step.graph().unwrap();
            let distances = graph.distances.as_ref().unwrap();
            for later in &steps[idx..] {
                let later_distances = later.graph().unwrap().distances.as_ref().unwrap();
                for node in &graph.visited_nodes {
                    assert_eq!(distances[node], later_distances[node]);
                }
            }
        }
    }

    #[test]
    fn test_console_lists_settled_distances() {
        let steps = testing::run_en(run);
        let console = &steps.last().unwrap().console_output;
        assert_eq!(console, &vec!["A: 0", "C: 2", "B: 3", "D: 8", "E: 10", "F: 13"]);
    }
}
