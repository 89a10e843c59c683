//! N-Queens by row-wise backtracking; stops at the first solution

use crate::algorithm::state::{CellValue, Highlight, MatrixState, Step};
use crate::execution::recorder::{vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function solveNQueens(board, row):
  if row == N:
    return true
  for col from 0 to N - 1:
    if isSafe(board, row, col):
      board[row][col] = 'Q'
      if solveNQueens(board, row + 1):
        return true
      board[row][col] = '.'
  return false

function isSafe(board, row, col):
  no queen in column col above row
  no queen on either upper diagonal"#;

const L_START: usize = 1;
const L_SOLVED: usize = 3;
const L_CHECK: usize = 5;
const L_PLACE: usize = 6;
const L_REMOVE: usize = 9;
const L_EXHAUSTED: usize = 10;

const N: usize = 4;

struct Queens<'a, 'n> {
    n: &'a Narrator<'n>,
    /// Queen column per row
    cols: Vec<Option<usize>>,
    rec: StepRecorder,
}

impl Queens<'_, '_> {
    fn board(&self) -> MatrixState {
        let mut values = vec![vec![CellValue::Empty; N]; N];
        for (row, col) in self.cols.iter().enumerate() {
            if let Some(col) = col {
                values[row][*col] = CellValue::text("Q");
            }
        }
        let mut board = MatrixState::from_values(values);
        for (row, col) in self.cols.iter().enumerate() {
            if let Some(col) = col {
                board = board.highlight(row, *col, Highlight::Queen);
            }
        }
        board
    }

    /// First queen attacking `(row, col)`, scanning rows above top-down
    fn attacker(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        (0..row).find_map(|r| {
            let c = self.cols[r]?;
            let same_col = c == col;
            let same_diag = row - r == c.abs_diff(col);
            (same_col || same_diag).then_some((r, c))
        })
    }

    fn solve(&mut self, row: usize) -> bool {
        let n = self.n;
        if row == N {
            self.rec.print(
                self.cols
                    .iter()
                    .map(|c| c.map_or("?".to_owned(), |c| c.to_string()))
                    .collect::<Vec<_>>()
                    .join(" "),
            );
            self.rec.record(
                say!(n, "queens.solved", n = N),
                L_SOLVED,
                vars!["row" => row],
                self.board(),
            );
            return true;
        }

        for col in 0..N {
            let attacker = self.attacker(row, col);
            let safe = attacker.is_none();
            let mut board = self.board().highlight(row, col, Highlight::Current);
            let narration = match attacker {
                Some((r, c)) => {
                    board = board.highlight(r, c, Highlight::Conflict);
                    say!(n, "queens.conflict", row = row, col = col, qrow = r, qcol = c)
                }
                None => say!(n, "queens.safe", row = row, col = col),
            };
            self.rec.record(
                narration,
                L_CHECK,
                vars!["row" => row, "col" => col, "isSafe" => safe],
                board,
            );
            if !safe {
                continue;
            }

            self.cols[row] = Some(col);
            self.rec.record(
                say!(n, "queens.place", row = row, col = col),
                L_PLACE,
                vars!["row" => row, "col" => col, "isSafe" => true],
                self.board(),
            );

            if self.solve(row + 1) {
                return true;
            }

            self.cols[row] = None;
            self.rec.record(
                say!(n, "queens.remove", row = row, col = col),
                L_REMOVE,
                vars!["row" => row, "col" => col, "isSafe" => true],
                self.board().highlight(row, col, Highlight::Eliminated),
            );
        }

        self.rec.record(
            say!(n, "queens.exhausted", row = row),
            L_EXHAUSTED,
            vars!["row" => row],
            self.board(),
        );
        false
    }
}

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    let mut queens = Queens {
        n,
        cols: vec![None; N],
        rec: StepRecorder::new(),
    };
    queens.rec.record(
        say!(n, "queens.start", n = N),
        L_START,
        vars!["N" => N],
        queens.board(),
    );
    queens.solve(0);
    queens.rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::state::Scalar;
    use crate::algorithm::testing;

    #[test]
    fn test_solution_has_n_non_attacking_queens() {
        let steps = testing::run_en(run);
        let last = steps.last().unwrap();
        assert_eq!(last.code_line, Some(L_SOLVED));

        let board = last.matrix().unwrap();
        let mut queens = Vec::new();
        for (r, row) in board.values.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if *cell == CellValue::text("Q") {
                    queens.push((r, c));
                }
            }
        }
        assert_eq!(queens.len(), N);
        for (i, &(r1, c1)) in queens.iter().enumerate() {
            for &(r2, c2) in &queens[i + 1..] {
                assert_ne!(r1, r2);
                assert_ne!(c1, c2);
                assert_ne!(r1.abs_diff(r2), c1.abs_diff(c2));
            }
        }
        assert_eq!(last.console_output, vec!["1 3 0 2"]);
    }

    #[test]
    fn test_backtracks_before_solution() {
        let steps = testing::run_en(run);
        assert!(steps.iter().any(|s| s.code_line == Some(L_REMOVE)));
        for step in steps.iter().filter(|s| s.code_line == Some(L_CHECK)) {
            let board = step.matrix().unwrap();
            let has_conflict = board.highlights.values().any(|h| *h == Highlight::Conflict);
            assert_eq!(step.variables.get("isSafe"), Some(&Scalar::Bool(!has_conflict)));
        }
    }
}
