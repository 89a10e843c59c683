//! Searching runners
//!
//! Searches never modify their array; narration and highlights carry the
//! whole story. Each runner prints its return value to the console.

pub mod binary;
pub mod interpolation;
pub mod jump;
pub mod linear;

use crate::algorithm::traits::{Algorithm, Category, Difficulty, Runner, VisualizationKind};

const fn search(
    id: &'static str,
    name: &'static str,
    difficulty: Difficulty,
    source: &'static str,
    runner: Runner,
) -> Algorithm {
    Algorithm::new(id, name, Category::Searching, difficulty, VisualizationKind::Array, source, runner)
}

pub static ALGORITHMS: [Algorithm; 4] = [
    search("linear-search", "Linear Search", Difficulty::Beginner, linear::SOURCE, linear::run),
    search("binary-search", "Binary Search", Difficulty::Beginner, binary::SOURCE, binary::run),
    search("jump-search", "Jump Search", Difficulty::Intermediate, jump::SOURCE, jump::run),
    search(
        "interpolation-search",
        "Interpolation Search",
        Difficulty::Intermediate,
        interpolation::SOURCE,
        interpolation::run,
    ),
];
