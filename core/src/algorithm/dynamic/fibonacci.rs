//! Bottom-up Fibonacci tabulation

use crate::algorithm::state::{CellValue, Highlight, MatrixState, Step};
use crate::execution::recorder::{vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function fibonacci(n):
  dp = array of size n + 1
  dp[0] = 0
  dp[1] = 1
  for i from 2 to n:
    dp[i] = dp[i - 1] + dp[i - 2]
  return dp[n]"#;

const L_ALLOC: usize = 2;
const L_BASE_ZERO: usize = 3;
const L_BASE_ONE: usize = 4;
const L_FILL: usize = 6;
const L_RETURN: usize = 7;

const N: usize = 8;

fn table(dp: &[CellValue]) -> MatrixState {
    let labels = (0..dp.len()).map(|i| i.to_string()).collect();
    MatrixState::from_values(vec![dp.to_vec()]).with_labels(vec!["dp".to_owned()], labels)
}

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    let mut rec = StepRecorder::new();
    let mut dp = vec![CellValue::Empty; N + 1];
    let mut values = vec![0i64; N + 1];

    rec.record(
        say!(n, "fib.alloc", size = N + 1, n = N),
        L_ALLOC,
        vars!["n" => N],
        table(&dp),
    );

    dp[0] = CellValue::Number(0);
    rec.record(
        say!(n, "fib.base", index = 0, value = 0),
        L_BASE_ZERO,
        vars!["n" => N, "dp[0]" => 0],
        table(&dp).highlight(0, 0, Highlight::Computed),
    );

    values[1] = 1;
    dp[1] = CellValue::Number(1);
    rec.record(
        say!(n, "fib.base", index = 1, value = 1),
        L_BASE_ONE,
        vars!["n" => N, "dp[1]" => 1],
        table(&dp).highlight(0, 1, Highlight::Computed),
    );

    for i in 2..=N {
        values[i] = values[i - 1] + values[i - 2];
        dp[i] = CellValue::Number(values[i]);
        rec.record(
            say!(n, "fib.fill", index = i, a = values[i - 1], b = values[i - 2], value = values[i]),
            L_FILL,
            vars!["i" => i, "dp[i-1]" => values[i - 1], "dp[i-2]" => values[i - 2], "dp[i]" => values[i]],
            table(&dp)
                .highlight(0, i - 2, Highlight::Dependency)
                .highlight(0, i - 1, Highlight::Dependency)
                .highlight(0, i, Highlight::Computed),
        );
    }

    rec.print(format!("fibonacci({}) = {}", N, values[N]));
    rec.record(
        say!(n, "fib.done", n = N, value = values[N]),
        L_RETURN,
        vars!["n" => N, "dp[n]" => values[N]],
        table(&dp).highlight(0, N, Highlight::Found),
    );
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::testing;

    #[test]
    fn test_last_cell_is_21() {
        let steps = testing::run_en(run);
        let table = steps.last().unwrap().matrix().unwrap();
        assert_eq!((table.rows, table.cols), (1, N + 1));
        assert_eq!(table.get(0, N).and_then(CellValue::as_number), Some(21));
        let row: Vec<i64> = table.values[0].iter().filter_map(CellValue::as_number).collect();
        assert_eq!(row, vec![0, 1, 1, 2, 3, 5, 8, 13, 21]);
    }
}
