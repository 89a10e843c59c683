//! Graph runners
//!
//! All five replay the shared demo graphs from
//! [`crate::data_structures::graph`]; the topology in every payload is the
//! same fixed node and edge list, only traversal state changes.

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod prim;
pub mod topological;

use crate::algorithm::traits::{Algorithm, Category, Difficulty, Runner, VisualizationKind};

const fn graph(
    id: &'static str,
    name: &'static str,
    difficulty: Difficulty,
    source: &'static str,
    runner: Runner,
) -> Algorithm {
    Algorithm::new(id, name, Category::Graphs, difficulty, VisualizationKind::Graph, source, runner)
}

pub static ALGORITHMS: [Algorithm; 5] = [
    graph("bfs", "Breadth-First Search", Difficulty::Beginner, bfs::SOURCE, bfs::run),
    graph("dfs", "Depth-First Search", Difficulty::Beginner, dfs::SOURCE, dfs::run),
    graph("dijkstra", "Dijkstra's Algorithm", Difficulty::Intermediate, dijkstra::SOURCE, dijkstra::run),
    graph("prim", "Prim's Algorithm", Difficulty::Intermediate, prim::SOURCE, prim::run),
    graph(
        "topological-sort",
        "Topological Sort",
        Difficulty::Intermediate,
        topological::SOURCE,
        topological::run,
    ),
];
