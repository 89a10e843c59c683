//! Shared demo graphs
//!
//! The graph runners replay fixed, hand-laid-out topologies. They are
//! `const` data injected into each runner at call time: no runner owns or
//! mutates them, so every runner stays independently testable and
//! parallel-callable.
//!
//! # Adjacency Order
//! Neighbors are always reported in ascending node id, which makes every
//! traversal deterministic.

use crate::algorithm::state::{GraphEdge, GraphNode, GraphState};
use crate::algorithm::traits::NodeId;

/// Node with a fixed 2D layout position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoNode {
    pub label: &'static str,
    pub x: f64,
    pub y: f64,
}

/// Edge between two node indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoEdge {
    pub from: usize,
    pub to: usize,
    pub weight: u32,
}

const fn node(label: &'static str, x: f64, y: f64) -> DemoNode {
    DemoNode { label, x, y }
}

const fn edge(from: usize, to: usize, weight: u32) -> DemoEdge {
    DemoEdge { from, to, weight }
}

/// Immutable demo topology
#[derive(Debug, Clone, Copy)]
pub struct DemoGraph {
    pub nodes: &'static [DemoNode],
    pub edges: &'static [DemoEdge],
    pub directed: bool,
    pub weighted: bool,
}

/// Undirected, unweighted graph used by BFS and DFS
///
/// ```text
///        A
///      /   \
///     B     C
///    / \     \
///   D   E     F
///        \   /
///          G
/// ```
pub const TRAVERSAL_GRAPH: DemoGraph = DemoGraph {
    nodes: &[
        node("A", 300.0, 50.0),
        node("B", 150.0, 150.0),
        node("C", 450.0, 150.0),
        node("D", 75.0, 270.0),
        node("E", 225.0, 270.0),
        node("F", 450.0, 270.0),
        node("G", 300.0, 380.0),
    ],
    edges: &[
        edge(0, 1, 1),
        edge(0, 2, 1),
        edge(1, 3, 1),
        edge(1, 4, 1),
        edge(2, 5, 1),
        edge(4, 6, 1),
        edge(5, 6, 1),
    ],
    directed: false,
    weighted: false,
};

/// Undirected weighted graph used by Dijkstra and Prim
pub const WEIGHTED_GRAPH: DemoGraph = DemoGraph {
    nodes: &[
        node("A", 80.0, 200.0),
        node("B", 220.0, 80.0),
        node("C", 220.0, 320.0),
        node("D", 380.0, 80.0),
        node("E", 380.0, 320.0),
        node("F", 520.0, 200.0),
    ],
    edges: &[
        edge(0, 1, 4),
        edge(0, 2, 2),
        edge(1, 2, 1),
        edge(1, 3, 5),
        edge(2, 3, 8),
        edge(2, 4, 10),
        edge(3, 4, 2),
        edge(3, 5, 6),
        edge(4, 5, 3),
    ],
    directed: false,
    weighted: true,
};

/// Directed acyclic task graph used by Kahn's topological sort
pub const TASK_DAG: DemoGraph = DemoGraph {
    nodes: &[
        node("A", 80.0, 80.0),
        node("B", 80.0, 280.0),
        node("C", 240.0, 80.0),
        node("D", 240.0, 280.0),
        node("E", 400.0, 180.0),
        node("F", 540.0, 180.0),
    ],
    edges: &[
        edge(0, 2, 1),
        edge(1, 2, 1),
        edge(1, 3, 1),
        edge(2, 4, 1),
        edge(3, 4, 1),
        edge(4, 5, 1),
    ],
    directed: true,
    weighted: false,
};

impl DemoGraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Display label; out-of-range ids render as `?`
    pub fn label(&self, id: NodeId) -> &'static str {
        self.nodes.get(id.as_usize()).map_or("?", |n| n.label)
    }

    /// Outgoing neighbors (both directions when undirected), ascending by id
    pub fn neighbors(&self, id: NodeId) -> Vec<(NodeId, u32)> {
        let u = id.as_usize();
        let mut out: Vec<(NodeId, u32)> = self
            .edges
            .iter()
            .filter_map(|e| {
                if e.from == u {
                    Some((NodeId(e.to), e.weight))
                } else if !self.directed && e.to == u {
                    Some((NodeId(e.from), e.weight))
                } else {
                    None
                }
            })
            .collect();
        out.sort_by_key(|(n, _)| *n);
        out
    }

    /// Incoming edge count per node (directed graphs)
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.nodes.len()];
        for e in self.edges {
            degrees[e.to] += 1;
        }
        degrees
    }

    /// Fresh payload carrying the fixed topology
    pub fn to_state(&self) -> GraphState {
        let nodes = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, n)| GraphNode {
                id: NodeId(i),
                label: n.label.to_owned(),
                x: n.x,
                y: n.y,
            })
            .collect();
        let edges = self
            .edges
            .iter()
            .map(|e| GraphEdge {
                from: NodeId(e.from),
                to: NodeId(e.to),
                weight: self.weighted.then_some(e.weight),
            })
            .collect();
        GraphState::new(nodes, edges)
    }

    /// Labels of a node sequence, e.g. `A, B, C`
    pub fn labels(&self, ids: &[NodeId]) -> String {
        ids.iter()
            .map(|id| self.label(*id))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_reference_existing_nodes() {
        for graph in [TRAVERSAL_GRAPH, WEIGHTED_GRAPH, TASK_DAG] {
            for e in graph.edges {
                assert!(e.from < graph.node_count());
                assert!(e.to < graph.node_count());
                assert_ne!(e.from, e.to);
            }
        }
    }

    #[test]
    fn test_neighbors_sorted_and_symmetric() {
        let n = TRAVERSAL_GRAPH.neighbors(NodeId(1));
        assert_eq!(n, vec![(NodeId(0), 1), (NodeId(3), 1), (NodeId(4), 1)]);
        let dag = TASK_DAG.neighbors(NodeId(2));
        assert_eq!(dag, vec![(NodeId(4), 1)]);
    }

    #[test]
    fn test_in_degrees() {
        assert_eq!(TASK_DAG.in_degrees(), vec![0, 0, 2, 1, 2, 1]);
    }

    #[test]
    fn test_weights_only_on_weighted_state() {
        assert!(WEIGHTED_GRAPH.to_state().edges.iter().all(|e| e.weight.is_some()));
        assert!(TRAVERSAL_GRAPH.to_state().edges.iter().all(|e| e.weight.is_none()));
    }
}
