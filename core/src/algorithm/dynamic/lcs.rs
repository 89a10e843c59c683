//! Longest common subsequence with traceback

use crate::algorithm::state::{CellValue, Highlight, MatrixState, Step};
use crate::execution::recorder::{vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function lcs(a, b):
  dp = (len(a) + 1) x (len(b) + 1) table of 0
  for i from 1 to len(a):
    for j from 1 to len(b):
      if a[i - 1] == b[j - 1]:
        dp[i][j] = dp[i - 1][j - 1] + 1
      else:
        dp[i][j] = max(dp[i - 1][j], dp[i][j - 1])
  walk back from dp[len(a)][len(b)] to recover the sequence
  return dp[len(a)][len(b)]"#;

const L_TABLE: usize = 2;
const L_MATCH: usize = 6;
const L_MAX: usize = 8;
const L_TRACE: usize = 9;
const L_RETURN: usize = 10;

const A: &str = "ABCBDAB";
const B: &str = "BDCABA";

struct Table {
    cells: Vec<Vec<CellValue>>,
    row_labels: Vec<String>,
    col_labels: Vec<String>,
}

impl Table {
    fn new(a: &[char], b: &[char]) -> Self {
        let mut cells = vec![vec![CellValue::Empty; b.len() + 1]; a.len() + 1];
        cells[0] = vec![CellValue::Number(0); b.len() + 1];
        for row in cells.iter_mut() {
            row[0] = CellValue::Number(0);
        }
        let labels = |s: &[char]| {
            std::iter::once("-".to_owned())
                .chain(s.iter().map(char::to_string))
                .collect::<Vec<_>>()
        };
        Self {
            cells,
            row_labels: labels(a),
            col_labels: labels(b),
        }
    }

    fn get(&self, row: usize, col: usize) -> i64 {
        self.cells[row][col].as_number().unwrap_or(0)
    }

    fn state(&self) -> MatrixState {
        MatrixState::from_values(self.cells.clone())
            .with_labels(self.row_labels.clone(), self.col_labels.clone())
    }
}

/// Cells visited walking back from the bottom-right corner, and the recovered subsequence
fn traceback(table: &Table, a: &[char], b: &[char]) -> (Vec<(usize, usize)>, String) {
    let (mut i, mut j) = (a.len(), b.len());
    let mut path = vec![(i, j)];
    let mut picked = Vec::new();
    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            picked.push(a[i - 1]);
            i -= 1;
            j -= 1;
        } else if table.get(i - 1, j) >= table.get(i, j - 1) {
            i -= 1;
        } else {
            j -= 1;
        }
        path.push((i, j));
    }
    (path, picked.into_iter().rev().collect())
}

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    let a: Vec<char> = A.chars().collect();
    let b: Vec<char> = B.chars().collect();
    let mut rec = StepRecorder::new();
    let mut table = Table::new(&a, &b);

    rec.record(
        say!(n, "lcs.start", a = A, b = B),
        L_TABLE,
        vars!["a" => A, "b" => B],
        table.state(),
    );

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            if a[i - 1] == b[j - 1] {
                let value = table.get(i - 1, j - 1) + 1;
                table.cells[i][j] = CellValue::Number(value);
                rec.record(
                    say!(n, "lcs.match", ch = a[i - 1], value = value),
                    L_MATCH,
                    vars!["i" => i, "j" => j, "a[i-1]" => a[i - 1], "b[j-1]" => b[j - 1], "dp[i][j]" => value],
                    table
                        .state()
                        .highlight(i - 1, j - 1, Highlight::Dependency)
                        .highlight(i, j, Highlight::Computed),
                );
            } else {
                let value = table.get(i - 1, j).max(table.get(i, j - 1));
                table.cells[i][j] = CellValue::Number(value);
                rec.record(
                    say!(n, "lcs.no_match", a = a[i - 1], b = b[j - 1], value = value),
                    L_MAX,
                    vars!["i" => i, "j" => j, "a[i-1]" => a[i - 1], "b[j-1]" => b[j - 1], "dp[i][j]" => value],
                    table
                        .state()
                        .highlight(i - 1, j, Highlight::Dependency)
                        .highlight(i, j - 1, Highlight::Dependency)
                        .highlight(i, j, Highlight::Computed),
                );
            }
        }
    }

    let (path, subsequence) = traceback(&table, &a, &b);
    let traced = path
        .iter()
        .fold(table.state(), |state, &(r, c)| state.highlight(r, c, Highlight::Path));
    rec.print(format!("lcs(\"{}\", \"{}\") = \"{}\"", A, B, subsequence));
    rec.record(
        say!(n, "lcs.traceback", sequence = subsequence),
        L_TRACE,
        vars!["sequence" => subsequence.as_str()],
        traced,
    );

    let length = table.get(a.len(), b.len());
    rec.record(
        say!(n, "lcs.done", length = length),
        L_RETURN,
        vars!["sequence" => subsequence.as_str(), "length" => length],
        table.state().highlight(a.len(), b.len(), Highlight::Found),
    );
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::testing;

    #[test]
    fn test_final_cell_is_4() {
        let steps = testing::run_en(run);
        let table = steps.last().unwrap().matrix().unwrap();
        assert_eq!((table.rows, table.cols), (A.len() + 1, B.len() + 1));
        assert_eq!(table.get(A.len(), B.len()).and_then(CellValue::as_number), Some(4));
    }

    #[test]
    fn test_traceback_recovers_subsequence() {
        let steps = testing::run_en(run);
        let trace = steps.iter().find(|s| s.code_line == Some(L_TRACE)).unwrap();
        assert_eq!(trace.console_output, vec![r#"lcs("ABCBDAB", "BDCABA") = "BCBA""#]);
        let path_cells = trace
            .matrix()
            .unwrap()
            .highlights
            .values()
            .filter(|h| **h == Highlight::Path)
            .count();
        assert_eq!(path_cells, 9);
    }
}
