//! Concept runners
//!
//! These teach an idea rather than one textbook algorithm; every step
//! carries a [`ConceptState`](crate::algorithm::concept::ConceptState).

pub mod big_o;
pub mod coin_change;
pub mod memoization;
pub mod recursion;
pub mod sliding_window;
pub mod two_pointers;

use crate::algorithm::traits::{Algorithm, Category, Difficulty, Runner, VisualizationKind};

const fn concept(
    id: &'static str,
    name: &'static str,
    difficulty: Difficulty,
    source: &'static str,
    runner: Runner,
) -> Algorithm {
    Algorithm::new(id, name, Category::Concepts, difficulty, VisualizationKind::Concept, source, runner)
}

pub static ALGORITHMS: [Algorithm; 6] = [
    concept("big-o", "Big O Notation", Difficulty::Beginner, big_o::SOURCE, big_o::run),
    concept("recursion", "Recursion", Difficulty::Beginner, recursion::SOURCE, recursion::run),
    concept("two-pointers", "Two Pointers", Difficulty::Beginner, two_pointers::SOURCE, two_pointers::run),
    concept("sliding-window", "Sliding Window", Difficulty::Intermediate, sliding_window::SOURCE, sliding_window::run),
    concept("memoization", "Memoization", Difficulty::Intermediate, memoization::SOURCE, memoization::run),
    concept("greedy-vs-dp", "Greedy vs Dynamic Programming", Difficulty::Intermediate, coin_change::SOURCE, coin_change::run),
];
