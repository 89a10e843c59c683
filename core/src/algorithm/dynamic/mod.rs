//! Dynamic programming runners (matrix payloads)

pub mod fibonacci;
pub mod knapsack;
pub mod lcs;

use crate::algorithm::traits::{Algorithm, Category, Difficulty, Runner, VisualizationKind};

const fn dp(
    id: &'static str,
    name: &'static str,
    difficulty: Difficulty,
    source: &'static str,
    runner: Runner,
) -> Algorithm {
    Algorithm::new(id, name, Category::DynamicProgramming, difficulty, VisualizationKind::Matrix, source, runner)
}

pub static ALGORITHMS: [Algorithm; 3] = [
    dp("fibonacci", "Fibonacci (Tabulation)", Difficulty::Beginner, fibonacci::SOURCE, fibonacci::run),
    dp("knapsack", "0/1 Knapsack", Difficulty::Intermediate, knapsack::SOURCE, knapsack::run),
    dp("lcs", "Longest Common Subsequence", Difficulty::Intermediate, lcs::SOURCE, lcs::run),
];
