//! Divide and conquer runners

pub mod hanoi;

use crate::algorithm::traits::{Algorithm, Category, Difficulty, VisualizationKind};

pub static ALGORITHMS: [Algorithm; 1] = [Algorithm::new(
    "tower-of-hanoi",
    "Tower of Hanoi",
    Category::DivideAndConquer,
    Difficulty::Beginner,
    VisualizationKind::Matrix,
    hanoi::SOURCE,
    hanoi::run,
)];
