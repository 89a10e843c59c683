//! 0/1 knapsack, bottom-up table of (items + 1) x (capacity + 1)

use crate::algorithm::state::{CellValue, Highlight, MatrixState, Step};
use crate::execution::recorder::{vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function knapsack(weights, values, W):
  n = length(weights)
  dp = (n + 1) x (W + 1) table of 0
  for i from 1 to n:
    for w from 0 to W:
      dp[i][w] = dp[i - 1][w]
      if weights[i - 1] <= w:
        take = values[i - 1] + dp[i - 1][w - weights[i - 1]]
        dp[i][w] = max(dp[i][w], take)
  return dp[n][W]"#;

const L_TABLE: usize = 3;
const L_SKIP: usize = 6;
const L_TAKE: usize = 9;
const L_RETURN: usize = 10;

const WEIGHTS: [usize; 4] = [1, 3, 4, 5];
const VALUES: [i64; 4] = [1, 4, 5, 7];
const CAPACITY: usize = 7;

struct Table {
    cells: Vec<Vec<CellValue>>,
    row_labels: Vec<String>,
    col_labels: Vec<String>,
}

impl Table {
    fn new() -> Self {
        let mut cells = vec![vec![CellValue::Empty; CAPACITY + 1]; WEIGHTS.len() + 1];
        cells[0] = vec![CellValue::Number(0); CAPACITY + 1];
        let mut row_labels = vec!["0".to_owned()];
        row_labels.extend(
            WEIGHTS
                .iter()
                .zip(VALUES)
                .map(|(w, v)| format!("w={} v={}", w, v)),
        );
        Self {
            cells,
            row_labels,
            col_labels: (0..=CAPACITY).map(|w| w.to_string()).collect(),
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

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    let mut rec = StepRecorder::new();
    let mut table = Table::new();
    let items = WEIGHTS.len();

    rec.record(
        say!(n, "knapsack.start", items = items, capacity = CAPACITY),
        L_TABLE,
        vars!["n" => items, "W" => CAPACITY],
        table.state(),
    );

    for i in 1..=items {
        let (weight, value) = (WEIGHTS[i - 1], VALUES[i - 1]);
        for w in 0..=CAPACITY {
            let skip = table.get(i - 1, w);
            if weight > w {
                table.cells[i][w] = CellValue::Number(skip);
                rec.record(
                    say!(n, "knapsack.too_heavy", weight = weight, capacity = w, value = skip),
                    L_SKIP,
                    vars!["i" => i, "w" => w, "weight" => weight, "dp[i][w]" => skip],
                    table
                        .state()
                        .highlight(i - 1, w, Highlight::Dependency)
                        .highlight(i, w, Highlight::Computed),
                );
                continue;
            }

            let take = value + table.get(i - 1, w - weight);
            let best = skip.max(take);
            table.cells[i][w] = CellValue::Number(best);
            let narration = if take > skip {
                say!(n, "knapsack.take", take = take, skip = skip)
            } else {
                say!(n, "knapsack.leave", take = take, skip = skip)
            };
            rec.record(
                narration,
                L_TAKE,
                vars!["i" => i, "w" => w, "weight" => weight, "value" => value, "take" => take, "dp[i][w]" => best],
                table
                    .state()
                    .highlight(i - 1, w, Highlight::Dependency)
                    .highlight(i - 1, w - weight, Highlight::Dependency)
                    .highlight(i, w, Highlight::Computed),
            );
        }
    }

    let answer = table.get(items, CAPACITY);
    rec.print(format!("knapsack(W={}) = {}", CAPACITY, answer));
    rec.record(
        say!(n, "knapsack.done", capacity = CAPACITY, value = answer),
        L_RETURN,
        vars!["n" => items, "W" => CAPACITY, "dp[n][W]" => answer],
        table.state().highlight(items, CAPACITY, Highlight::Found),
    );
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::testing;

    #[test]
    fn test_final_cell_is_9() {
        let steps = testing::run_en(run);
        let table = steps.last().unwrap().matrix().unwrap();
        assert_eq!((table.rows, table.cols), (WEIGHTS.len() + 1, CAPACITY + 1));
        assert_eq!(table.get(WEIGHTS.len(), CAPACITY).and_then(CellValue::as_number), Some(9));
    }

    #[test]
    fn test_one_step_per_cell() {
        let steps = testing::run_en(run);
        let fills = steps
            .iter()
            .filter(|s| matches!(s.code_line, Some(L_SKIP) | Some(L_TAKE)))
            .count();
        assert_eq!(fills, WEIGHTS.len() * (CAPACITY + 1));
    }
}
