//! Shared immutable demo data and the small containers runners rely on

pub mod graph;
pub mod priority_queue;

pub use self::graph::{DemoGraph, TASK_DAG, TRAVERSAL_GRAPH, WEIGHTED_GRAPH};
pub use self::priority_queue::MinQueue;
