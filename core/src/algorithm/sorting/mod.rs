//! Sorting runners
//!
//! Every runner here produces array payloads only. The last step of each
//! trace carries the sorted array with every index in `sorted`.

pub mod bubble;
pub mod counting;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;
pub mod shell;

use crate::algorithm::traits::{Algorithm, Category, Difficulty, Runner, VisualizationKind};

const fn sort(
    id: &'static str,
    name: &'static str,
    difficulty: Difficulty,
    source: &'static str,
    runner: Runner,
) -> Algorithm {
    Algorithm::new(id, name, Category::Sorting, difficulty, VisualizationKind::Array, source, runner)
}

/// Catalog entries, in display order
pub static ALGORITHMS: [Algorithm; 9] = [
    sort("bubble-sort", "Bubble Sort", Difficulty::Beginner, bubble::SOURCE, bubble::run),
    sort("selection-sort", "Selection Sort", Difficulty::Beginner, selection::SOURCE, selection::run),
    sort("insertion-sort", "Insertion Sort", Difficulty::Beginner, insertion::SOURCE, insertion::run),
    sort("quick-sort", "Quick Sort", Difficulty::Intermediate, quick::SOURCE, quick::run),
    sort("merge-sort", "Merge Sort", Difficulty::Intermediate, merge::SOURCE, merge::run),
    sort("heap-sort", "Heap Sort", Difficulty::Advanced, heap::SOURCE, heap::run),
    sort("counting-sort", "Counting Sort", Difficulty::Intermediate, counting::SOURCE, counting::run),
    sort("radix-sort", "Radix Sort", Difficulty::Advanced, radix::SOURCE, radix::run),
    sort("shell-sort", "Shell Sort", Difficulty::Intermediate, shell::SOURCE, shell::run),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::testing;

    #[test]
    fn test_every_sort_ends_sorted_with_full_sorted_set() {
        for algorithm in &ALGORITHMS {
            let steps = testing::run_en(algorithm.runner);
            let last = steps.last().unwrap().array().unwrap();
            assert!(last.is_sorted_ascending(), "{} ended unsorted", algorithm.id);
            assert_eq!(last.sorted.len(), last.array.len(), "{}", algorithm.id);
        }
    }
}
