//! 4x4 Sudoku (2x2 boxes) by cell-order backtracking
//!
//! The puzzle has a unique solution but the naive digit order walks into
//! dead ends, so the trace shows several undo steps.

use crate::algorithm::state::{CellValue, Highlight, MatrixState, Step};
use crate::execution::recorder::{vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function solveSudoku(grid):
  cell = first empty cell in grid
  if no empty cell:
    return true
  for digit from 1 to 4:
    if isValid(grid, cell, digit):
      grid[cell] = digit
      if solveSudoku(grid):
        return true
      grid[cell] = empty
  return false

function isValid(grid, cell, digit):
  digit must not appear in the cell's row or column
  nor in its 2x2 box"#;

const L_START: usize = 2;
const L_SOLVED: usize = 4;
const L_CHECK: usize = 6;
const L_PLACE: usize = 7;
const L_UNDO: usize = 10;
const L_DEAD_END: usize = 11;

const SIZE: usize = 4;
const BOX: usize = 2;

/// 0 marks an empty cell
const PUZZLE: [[u8; SIZE]; SIZE] = [
    [0, 2, 0, 4],
    [3, 4, 2, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 3],
];

struct Solver<'a, 'n> {
    n: &'a Narrator<'n>,
    grid: [[u8; SIZE]; SIZE],
    rec: StepRecorder,
}

impl Solver<'_, '_> {
    fn state(&self) -> MatrixState {
        let values = self
            .grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&d| if d == 0 { CellValue::Empty } else { CellValue::Number(i64::from(d)) })
                    .collect()
            })
            .collect();
        let mut state = MatrixState::from_values(values);
        for (r, row) in self.grid.iter().enumerate() {
            for (c, &d) in row.iter().enumerate() {
                if d != 0 && PUZZLE[r][c] == 0 {
                    state = state.highlight(r, c, Highlight::Placed);
                }
            }
        }
        state
    }

    fn first_empty(&self) -> Option<(usize, usize)> {
        (0..SIZE * SIZE)
            .map(|i| (i / SIZE, i % SIZE))
            .find(|&(r, c)| self.grid[r][c] == 0)
    }

    /// Cell already holding `digit` in the row, column or box of `(row, col)`
    fn clash(&self, row: usize, col: usize, digit: u8) -> Option<(usize, usize)> {
        let in_row = (0..SIZE).map(|c| (row, c));
        let in_col = (0..SIZE).map(|r| (r, col));
        let (br, bc) = (row / BOX * BOX, col / BOX * BOX);
        let in_box = (0..BOX * BOX).map(move |i| (br + i / BOX, bc + i % BOX));
        in_row
            .chain(in_col)
            .chain(in_box)
            .find(|&(r, c)| (r, c) != (row, col) && self.grid[r][c] == digit)
    }

    fn solve(&mut self) -> bool {
        let n = self.n;
        let Some((row, col)) = self.first_empty() else {
            self.rec.record(
                say!(n, "sudoku.solved"),
                L_SOLVED,
                vars![],
                self.state(),
            );
            return true;
        };

        for digit in 1..=SIZE as u8 {
            let clash = self.clash(row, col, digit);
            let mut state = self.state().highlight(row, col, Highlight::Current);
            let narration = match clash {
                Some((r, c)) => {
                    state = state.highlight(r, c, Highlight::Conflict);
                    say!(n, "sudoku.conflict", digit = digit, row = row, col = col, crow = r, ccol = c)
                }
                None => say!(n, "sudoku.valid", digit = digit, row = row, col = col),
            };
            self.rec.record(
                narration,
                L_CHECK,
                vars!["row" => row, "col" => col, "digit" => digit, "isValid" => clash.is_none()],
                state,
            );
            if clash.is_some() {
                continue;
            }

            self.grid[row][col] = digit;
            self.rec.record(
                say!(n, "sudoku.place", digit = digit, row = row, col = col),
                L_PLACE,
                vars!["row" => row, "col" => col, "digit" => digit],
                self.state().highlight(row, col, Highlight::Active),
            );

            if self.solve() {
                return true;
            }

            self.grid[row][col] = 0;
            self.rec.record(
                say!(n, "sudoku.undo", digit = digit, row = row, col = col),
                L_UNDO,
                vars!["row" => row, "col" => col, "digit" => digit],
                self.state().highlight(row, col, Highlight::Eliminated),
            );
        }

        self.rec.record(
            say!(n, "sudoku.dead_end", row = row, col = col),
            L_DEAD_END,
            vars!["row" => row, "col" => col],
            self.state().highlight(row, col, Highlight::Conflict),
        );
        false
    }
}

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    let mut solver = Solver {
        n,
        grid: PUZZLE,
        rec: StepRecorder::new(),
    };
    let empty = PUZZLE.iter().flatten().filter(|&&d| d == 0).count();
    solver.rec.record(
        say!(n, "sudoku.start", empty = empty),
        L_START,
        vars!["empty" => empty],
        solver.state(),
    );
    solver.solve();
    solver.rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::state::Scalar;
    use crate::algorithm::testing;
    use std::collections::BTreeSet;

    fn digits(cells: impl Iterator<Item = i64>) -> BTreeSet<i64> {
        cells.collect()
    }

    #[test]
    fn test_final_grid_satisfies_constraints() {
        let steps = testing::run_en(run);
        let last = steps.last().unwrap();
        assert_eq!(last.code_line, Some(L_SOLVED));

        let grid: Vec<Vec<i64>> = last
            .matrix()
            .unwrap()
            .values
            .iter()
            .map(|row| row.iter().map(|c| c.as_number().unwrap()).collect())
            .collect();
        let full: BTreeSet<i64> = (1..=SIZE as i64).collect();
        for i in 0..SIZE {
            assert_eq!(digits(grid[i].iter().copied()), full);
            assert_eq!(digits((0..SIZE).map(|r| grid[r][i])), full);
            let (br, bc) = (i / BOX * BOX, i % BOX * BOX);
            assert_eq!(digits((0..SIZE).map(|k| grid[br + k / BOX][bc + k % BOX])), full);
        }
        for (r, row) in PUZZLE.iter().enumerate() {
            for (c, &given) in row.iter().enumerate() {
                if given != 0 {
                    assert_eq!(grid[r][c], i64::from(given));
                }
            }
        }
    }

    #[test]
    fn test_trace_contains_undo() {
        let steps = testing::run_en(run);
        let undos = steps.iter().filter(|s| s.code_line == Some(L_UNDO)).count();
        assert_eq!(undos, 7);
        assert!(steps.len() <= 200);
    }

    #[test]
    fn test_digit_variable_is_numeric() {
        let steps = testing::run_en(run);
        let placed = steps.iter().find(|s| s.code_line == Some(L_PLACE)).unwrap();
        match placed.variables.get("digit") {
            Some(Scalar::Int(digit)) => assert!((1..=SIZE as i64).contains(digit)),
            other => panic!("unexpected digit variable: {:?}", other),
        }
    }
}
