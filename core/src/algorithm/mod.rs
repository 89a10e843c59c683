//! AlgoViz Algorithm Framework
//! Snapshot model, catalog vocabulary and every instrumented runner
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod traits;
pub mod state;
pub mod concept;

pub mod concepts;
pub mod structures;
pub mod sorting;
pub mod searching;
pub mod graph;
pub mod dynamic;
pub mod backtracking;
pub mod divide;

pub use self::traits::*;
pub use self::state::{
    ArrayState, AuxiliaryArray, CellKey, CellValue, Distance, EdgePair, GraphEdge, GraphNode,
    GraphState, Highlight, MatrixState, Payload, Scalar, Step, Variables,
};
pub use self::concept::{ConceptState, ElementState};

#[cfg(test)]
pub(crate) mod testing {
    use super::state::Step;
    use super::traits::Runner;
    use crate::i18n::{Locale, Narrator};

    /// Run with the bundled English narration
    pub fn run_en(runner: Runner) -> Vec<Step> {
        let _ = env_logger::builder().is_test(true).try_init();
        runner(&Narrator::builtin(Locale::En))
    }
}
