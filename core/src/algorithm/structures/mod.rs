//! Data structure runners

pub mod bst;
pub mod hash_table;
pub mod heap;
pub mod linked_list;
pub mod stack_queue;

use crate::algorithm::traits::{Algorithm, Category, Difficulty, Runner, VisualizationKind};

const fn structure(
    id: &'static str,
    name: &'static str,
    difficulty: Difficulty,
    source: &'static str,
    runner: Runner,
) -> Algorithm {
    Algorithm::new(id, name, Category::DataStructures, difficulty, VisualizationKind::Concept, source, runner)
}

pub static ALGORITHMS: [Algorithm; 5] = [
    structure("stack-queue", "Stack & Queue", Difficulty::Beginner, stack_queue::SOURCE, stack_queue::run),
    structure("linked-list", "Linked List", Difficulty::Beginner, linked_list::SOURCE, linked_list::run),
    structure("hash-table", "Hash Table", Difficulty::Intermediate, hash_table::SOURCE, hash_table::run),
    structure("binary-search-tree", "Binary Search Tree", Difficulty::Intermediate, bst::SOURCE, bst::run),
    structure("binary-heap", "Binary Heap", Difficulty::Intermediate, heap::SOURCE, heap::run),
];
