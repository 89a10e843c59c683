//! Trace correctness verification
//!
//! Checks the structural invariants every recorded trace must satisfy,
//! independently of which algorithm produced it:
//!
//! - the trace is non-empty and within the configured step bound
//! - every step carries the payload kind its catalog entry declares
//! - `codeLine` points into the displayed source
//! - array highlights and `sorted` indices lie inside the array
//! - matrix highlight keys lie inside the grid and every row has `cols` cells
//! - graph state only references nodes and edges of its own topology
//! - concept cursors and child links point at existing elements
//!
//! [`validate_catalog`] sweeps the whole catalog in every locale on the
//! rayon pool; runners share no mutable state, so they run in parallel.

use rayon::prelude::*;
use thiserror::Error;

use crate::algorithm::concept::ConceptState;
use crate::algorithm::state::{ArrayState, EdgePair, GraphState, Highlight, MatrixState, Payload, Step};
use crate::algorithm::traits::{Algorithm, NodeId, VisualizationKind};
use crate::catalog::{Catalog, CatalogError};
use crate::i18n::Locale;

/// Invariant violations, each carrying the algorithm id and step index
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("{id}: trace generation failed: {message}")]
    Generation { id: String, message: String },

    #[error("{id}: empty trace")]
    EmptyTrace { id: String },

    #[error("{id}: {len} steps exceeds the bound of {limit}")]
    TooManySteps { id: String, len: usize, limit: usize },

    #[error("{id} step {step}: payload kind {found:?}, expected {expected:?}")]
    KindMismatch {
        id: String,
        step: usize,
        expected: VisualizationKind,
        found: VisualizationKind,
    },

    #[error("{id} step {step}: code line {line} outside 1..={lines}")]
    CodeLineOutOfRange { id: String, step: usize, line: usize, lines: usize },

    #[error("{id} step {step}: array index {index} out of bounds (len {len})")]
    ArrayIndexOutOfBounds { id: String, step: usize, index: usize, len: usize },

    #[error("{id} step {step}: cell ({row},{col}) outside {rows}x{cols} grid")]
    MatrixCellOutOfBounds {
        id: String,
        step: usize,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("{id} step {step}: grid rows do not match the declared shape")]
    RaggedMatrix { id: String, step: usize },

    #[error("{id} step {step}: unknown graph node {node}")]
    UnknownNode { id: String, step: usize, node: NodeId },

    #[error("{id} step {step}: edge {from}-{to} is not in the graph")]
    UnknownEdge { id: String, step: usize, from: NodeId, to: NodeId },

    #[error("{id} step {step}: {what} out of bounds")]
    ConceptOutOfBounds { id: String, step: usize, what: &'static str },

    #[error("{id} step {step}: runner emitted an unknown highlight kind")]
    UnknownHighlight { id: String, step: usize },
}

/// Per-step checker; `id` and `step` are threaded into every error
struct StepCheck<'a> {
    id: &'a str,
    step: usize,
}

impl StepCheck<'_> {
    fn array_index(&self, index: usize, len: usize) -> Result<(), ValidationError> {
        if index < len {
            Ok(())
        } else {
            Err(ValidationError::ArrayIndexOutOfBounds {
                id: self.id.to_owned(),
                step: self.step,
                index,
                len,
            })
        }
    }

    fn highlight(&self, kind: Highlight) -> Result<(), ValidationError> {
        if kind == Highlight::Unknown {
            return Err(ValidationError::UnknownHighlight {
                id: self.id.to_owned(),
                step: self.step,
            });
        }
        Ok(())
    }

    fn concept(&self, ok: bool, what: &'static str) -> Result<(), ValidationError> {
        if ok {
            Ok(())
        } else {
            Err(ValidationError::ConceptOutOfBounds {
                id: self.id.to_owned(),
                step: self.step,
                what,
            })
        }
    }

    fn node(&self, graph: &GraphState, node: NodeId) -> Result<(), ValidationError> {
        if graph.has_node(node) {
            Ok(())
        } else {
            Err(ValidationError::UnknownNode {
                id: self.id.to_owned(),
                step: self.step,
                node,
            })
        }
    }

    fn edge(&self, graph: &GraphState, pair: EdgePair) -> Result<(), ValidationError> {
        if graph.has_edge(pair) {
            Ok(())
        } else {
            Err(ValidationError::UnknownEdge {
                id: self.id.to_owned(),
                step: self.step,
                from: pair.0,
                to: pair.1,
            })
        }
    }

    fn array(&self, state: &ArrayState) -> Result<(), ValidationError> {
        let len = state.array.len();
        for (&index, &kind) in &state.highlights {
            self.array_index(index, len)?;
            self.highlight(kind)?;
        }
        for &index in &state.sorted {
            self.array_index(index, len)?;
        }
        if let Some(aux) = &state.auxiliary {
            for (&index, &kind) in &aux.highlights {
                self.array_index(index, aux.values.len())?;
                self.highlight(kind)?;
            }
        }
        Ok(())
    }

    fn matrix(&self, state: &MatrixState) -> Result<(), ValidationError> {
        if state.values.len() != state.rows || state.values.iter().any(|row| row.len() != state.cols) {
            return Err(ValidationError::RaggedMatrix {
                id: self.id.to_owned(),
                step: self.step,
            });
        }
        for (&key, &kind) in &state.highlights {
            if !state.in_bounds(key) {
                return Err(ValidationError::MatrixCellOutOfBounds {
                    id: self.id.to_owned(),
                    step: self.step,
                    row: key.row,
                    col: key.col,
                    rows: state.rows,
                    cols: state.cols,
                });
            }
            self.highlight(kind)?;
        }
        let labels_fit = state.row_labels.as_ref().map_or(true, |labels| labels.len() == state.rows)
            && state.col_labels.as_ref().map_or(true, |labels| labels.len() == state.cols);
        self.concept(labels_fit, "matrix labels")
    }

    fn graph(&self, state: &GraphState) -> Result<(), ValidationError> {
        for edge in &state.edges {
            self.node(state, edge.from)?;
            self.node(state, edge.to)?;
        }
        let referenced = state
            .visited_nodes
            .iter()
            .chain(state.current_node.iter())
            .chain(state.queue.iter().flatten())
            .chain(state.stack.iter().flatten())
            .chain(state.distances.iter().flat_map(|d| d.keys()));
        for &node in referenced {
            self.node(state, node)?;
        }
        for &pair in state.visited_edges.iter().chain(state.current_edge.iter()) {
            self.edge(state, pair)?;
        }
        Ok(())
    }

    fn concept_state(&self, state: &ConceptState) -> Result<(), ValidationError> {
        match state {
            ConceptState::ComplexityChart(chart) => {
                let points = chart.max_n as usize;
                self.concept(chart.curves.iter().all(|c| c.points.len() == points), "complexity curve")?;
                self.concept(chart.marker_n.map_or(true, |n| n >= 1 && n <= chart.max_n), "complexity marker")
            }
            ConceptState::CallStack(_) | ConceptState::StackQueue(_) | ConceptState::MemoTable(_) => Ok(()),
            ConceptState::LinkedList(list) => {
                self.concept(list.cursor.map_or(true, |c| c < list.nodes.len()), "list cursor")
            }
            ConceptState::HashTable(table) => self.concept(
                table.active_bucket.map_or(true, |b| b < table.buckets.len()),
                "active bucket",
            ),
            ConceptState::BinaryTree(tree) => {
                let len = tree.nodes.len();
                let links_fit = tree
                    .nodes
                    .iter()
                    .flat_map(|node| node.left.into_iter().chain(node.right))
                    .chain(tree.root)
                    .all(|index| index < len);
                self.concept(links_fit, "tree link")?;
                self.concept(
                    tree.heap_array.as_ref().map_or(true, |heap| heap.len() == len),
                    "heap array",
                )
            }
            ConceptState::TwoPointers(pointers) => {
                let len = pointers.array.len();
                self.concept(pointers.left < len && pointers.right < len, "two pointers")
            }
            ConceptState::SlidingWindow(window) => self.concept(
                window.start <= window.end
                    && window.end <= window.array.len()
                    && window.best_start < window.array.len(),
                "sliding window",
            ),
            ConceptState::CoinChange(coins) => self.concept(
                coins.dp.len() == coins.amount as usize + 1
                    && coins.dp_cursor.map_or(true, |c| c < coins.dp.len()),
                "coin change table",
            ),
        }
    }
}

/// Check one trace against its catalog entry
pub fn validate_trace(algorithm: &Algorithm, steps: &[Step], max_steps: usize) -> Result<(), ValidationError> {
    let id = algorithm.id;
    if steps.is_empty() {
        return Err(ValidationError::EmptyTrace { id: id.to_owned() });
    }
    if steps.len() > max_steps {
        return Err(ValidationError::TooManySteps {
            id: id.to_owned(),
            len: steps.len(),
            limit: max_steps,
        });
    }

    let lines = algorithm.source_lines();
    for (index, step) in steps.iter().enumerate() {
        let check = StepCheck { id, step: index };

        let found = step.payload.kind();
        if found != algorithm.kind {
            return Err(ValidationError::KindMismatch {
                id: id.to_owned(),
                step: index,
                expected: algorithm.kind,
                found,
            });
        }
        if let Some(line) = step.code_line {
            if line == 0 || line > lines {
                return Err(ValidationError::CodeLineOutOfRange {
                    id: id.to_owned(),
                    step: index,
                    line,
                    lines,
                });
            }
        }

        match &step.payload {
            Payload::Array(state) => check.array(state)?,
            Payload::Matrix(state) => check.matrix(state)?,
            Payload::Graph(state) => check.graph(state)?,
            Payload::Concept(state) => check.concept_state(state)?,
        }
    }
    Ok(())
}

/// Generate and validate every algorithm in every locale, in parallel.
///
/// Returns all violations found; an empty vector means the catalog is sound.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationError> {
    let max_steps = catalog.config().max_steps;
    let jobs: Vec<(&Algorithm, Locale)> = catalog
        .list()
        .iter()
        .flat_map(|&algorithm| Locale::ALL.into_iter().map(move |locale| (algorithm, locale)))
        .collect();

    jobs.par_iter()
        .filter_map(|&(algorithm, locale)| {
            let result = catalog
                .generate(algorithm.id, locale)
                .map_err(|e| match e {
                    CatalogError::TooManySteps { id, len, limit } => ValidationError::TooManySteps { id, len, limit },
                    other => ValidationError::Generation {
                        id: algorithm.id.to_owned(),
                        message: other.to_string(),
                    },
                })
                .and_then(|steps| validate_trace(algorithm, &steps, max_steps));
            result.err()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::state::{ArrayState, GraphEdge, GraphNode, MatrixState, Variables};

    fn step(payload: impl Into<Payload>, code_line: Option<usize>) -> Step {
        Step {
            description: "x".to_owned(),
            code_line,
            variables: Variables::new(),
            console_output: Vec::new(),
            payload: payload.into(),
        }
    }

    fn bubble() -> &'static Algorithm {
        Catalog::global().find("bubble-sort").unwrap()
    }

    #[test]
    fn test_whole_catalog_is_valid() {
        let _ = env_logger::builder().is_test(true).try_init();
        let errors = validate_catalog(Catalog::global());
        assert!(errors.is_empty(), "{:#?}", errors);
    }

    #[test]
    fn test_detects_empty_and_oversized_traces() {
        assert!(matches!(validate_trace(bubble(), &[], 200), Err(ValidationError::EmptyTrace { .. })));
        let steps = vec![step(ArrayState::new(vec![1]), Some(1)); 3];
        assert!(matches!(
            validate_trace(bubble(), &steps, 2),
            Err(ValidationError::TooManySteps { len: 3, limit: 2, .. })
        ));
    }

    #[test]
    fn test_catalog_sweep_honours_step_limit() {
        let tight = Catalog::new(
            crate::i18n::MessageCatalog::builtin(),
            crate::config::EngineConfig {
                max_steps: 5,
                ..Default::default()
            },
        );
        let errors = validate_catalog(&tight);
        assert!(!errors.is_empty());
        assert!(errors
            .iter()
            .all(|e| matches!(e, ValidationError::TooManySteps { len, limit: 5, .. } if *len > 5)));
    }

    #[test]
    fn test_detects_bad_array_indices() {
        let steps = vec![step(ArrayState::new(vec![3, 1]).highlight(2, Highlight::Comparing), Some(1))];
        assert!(matches!(
            validate_trace(bubble(), &steps, 200),
            Err(ValidationError::ArrayIndexOutOfBounds { index: 2, len: 2, .. })
        ));
        let steps = vec![step(ArrayState::new(vec![3, 1]).with_sorted([5]), Some(1))];
        assert!(validate_trace(bubble(), &steps, 200).is_err());
        let steps = vec![step(ArrayState::new(vec![3, 1]).highlight(0, Highlight::Unknown), Some(1))];
        assert!(matches!(
            validate_trace(bubble(), &steps, 200),
            Err(ValidationError::UnknownHighlight { step: 0, .. })
        ));
    }

    #[test]
    fn test_detects_bad_code_line_and_kind() {
        let lines = bubble().source_lines();
        let steps = vec![step(ArrayState::new(vec![1]), Some(lines + 1))];
        assert!(matches!(
            validate_trace(bubble(), &steps, 200),
            Err(ValidationError::CodeLineOutOfRange { .. })
        ));
        let steps = vec![step(MatrixState::empty(1, 1), Some(1))];
        assert!(matches!(
            validate_trace(bubble(), &steps, 200),
            Err(ValidationError::KindMismatch { expected: VisualizationKind::Array, .. })
        ));
        // a missing code line is tolerated
        let steps = vec![step(ArrayState::new(vec![1]), None)];
        assert!(validate_trace(bubble(), &steps, 200).is_ok());
    }

    #[test]
    fn test_detects_matrix_and_graph_violations() {
        let queens = Catalog::global().find("n-queens").unwrap();
        let steps = vec![step(MatrixState::empty(2, 2).highlight(0, 2, Highlight::Queen), Some(1))];
        assert!(matches!(
            validate_trace(queens, &steps, 200),
            Err(ValidationError::MatrixCellOutOfBounds { row: 0, col: 2, .. })
        ));

        let bfs = Catalog::global().find("bfs").unwrap();
        let node = |id: usize| GraphNode {
            id: NodeId(id),
            label: id.to_string(),
            x: 0.0,
            y: 0.0,
        };
        let mut graph = GraphState::new(
            vec![node(0), node(1)],
            vec![GraphEdge {
                from: NodeId(0),
                to: NodeId(1),
                weight: None,
            }],
        );
        graph.visited_nodes.push(NodeId(0));
        assert!(validate_trace(bfs, &[step(graph.clone(), Some(1))], 200).is_ok());

        graph.current_node = Some(NodeId(9));
        assert!(matches!(
            validate_trace(bfs, &[step(graph.clone(), Some(1))], 200),
            Err(ValidationError::UnknownNode { node: NodeId(9), .. })
        ));
        graph.current_node = None;
        graph.visited_edges.insert(EdgePair::new(NodeId(1), NodeId(1)));
        assert!(matches!(
            validate_trace(bfs, &[step(graph, Some(1))], 200),
            Err(ValidationError::UnknownEdge { .. })
        ));
    }
}
