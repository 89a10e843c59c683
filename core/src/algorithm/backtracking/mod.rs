//! Backtracking runners (matrix payloads)

pub mod maze;
pub mod n_queens;
pub mod sudoku;

use crate::algorithm::traits::{Algorithm, Category, Difficulty, Runner, VisualizationKind};

const fn backtracking(
    id: &'static str,
    name: &'static str,
    difficulty: Difficulty,
    source: &'static str,
    runner: Runner,
) -> Algorithm {
    Algorithm::new(id, name, Category::Backtracking, difficulty, VisualizationKind::Matrix, source, runner)
}

pub static ALGORITHMS: [Algorithm; 3] = [
    backtracking("n-queens", "N-Queens", Difficulty::Intermediate, n_queens::SOURCE, n_queens::run),
    backtracking("sudoku", "Sudoku Solver", Difficulty::Advanced, sudoku::SOURCE, sudoku::run),
    backtracking("maze", "Maze Solver", Difficulty::Intermediate, maze::SOURCE, maze::run),
];
