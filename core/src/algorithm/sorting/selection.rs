//! Selection sort

use std::collections::BTreeSet;

use crate::algorithm::state::{ArrayState, Highlight, Step};
use crate::execution::recorder::{fmt_list, vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function selectionSort(arr):
  n = length(arr)
  for i from 0 to n - 2:
    minIdx = i
    for j from i + 1 to n - 1:
      if arr[j] < arr[minIdx]:
        minIdx = j
    if minIdx != i:
      swap(arr[i], arr[minIdx])
  return arr"#;

const L_INIT: usize = 2;
const L_MIN_START: usize = 4;
const L_COMPARE: usize = 6;
const L_NEW_MIN: usize = 7;
const L_CHECK: usize = 8;
const L_SWAP: usize = 9;
const L_DONE: usize = 10;

const INPUT: [i64; 5] = [29, 10, 14, 37, 13];

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    let mut arr = INPUT.to_vec();
    let len = arr.len();
    let mut sorted = BTreeSet::new();
    let mut rec = StepRecorder::new();

    rec.record(
        say!(n, "selection.start", array = fmt_list(&arr)),
        L_INIT,
        vars!["n" => len],
        ArrayState::snapshot(&arr, &sorted),
    );

    for i in 0..len.saturating_sub(1) {
        let mut min_idx = i;
        rec.record(
            say!(n, "selection.assume_min", value = arr[i], index = i),
            L_MIN_START,
            vars!["i" => i, "minIdx" => min_idx],
            ArrayState::snapshot(&arr, &sorted).highlight(i, Highlight::Minimum),
        );

        for j in i + 1..len {
            rec.record(
                say!(n, "sort.compare", a = arr[j], b = arr[min_idx]),
                L_COMPARE,
                vars!["i" => i, "j" => j, "minIdx" => min_idx, "arr[j]" => arr[j], "arr[minIdx]" => arr[min_idx]],
                ArrayState::snapshot(&arr, &sorted)
                    .highlight(min_idx, Highlight::Minimum)
                    .highlight(j, Highlight::Comparing),
            );
            if arr[j] < arr[min_idx] {
                min_idx = j;
                rec.record(
                    say!(n, "selection.new_min", value = arr[j], index = j),
                    L_NEW_MIN,
                    vars!["i" => i, "j" => j, "minIdx" => min_idx],
                    ArrayState::snapshot(&arr, &sorted).highlight(min_idx, Highlight::Minimum),
                );
            }
        }

        if min_idx != i {
            arr.swap(i, min_idx);
            rec.record(
                say!(n, "sort.swap", a = arr[min_idx], b = arr[i]),
                L_SWAP,
                vars!["i" => i, "minIdx" => min_idx],
                ArrayState::snapshot(&arr, &sorted)
                    .highlight(i, Highlight::Swapping)
                    .highlight(min_idx, Highlight::Swapping),
            );
        } else {
            rec.record(
                say!(n, "selection.no_swap", value = arr[i]),
                L_CHECK,
                vars!["i" => i, "minIdx" => min_idx],
                ArrayState::snapshot(&arr, &sorted).highlight(i, Highlight::Minimum),
            );
        }
        sorted.insert(i);
    }

    sorted.extend(0..len);
    rec.record(
        say!(n, "sort.done", array = fmt_list(&arr)),
        L_DONE,
        vars!["n" => len],
        ArrayState::snapshot(&arr, &sorted),
    );
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::testing;

    #[test]
    fn test_final_step_sorted() {
        let steps = testing::run_en(run);
        let last = steps.last().unwrap().array().unwrap();
        assert_eq!(last.array, vec![10, 13, 14, 29, 37]);
        assert_eq!(last.sorted.len(), 5);
    }

    #[test]
    fn test_at_most_one_swap_per_pass() {
        let steps = testing::run_en(run);
        let swaps = steps.iter().filter(|s| s.code_line == Some(L_SWAP)).count();
        assert!(swaps <= INPUT.len() - 1);
        let comparisons = steps.iter().filter(|s| s.code_line == Some(L_COMPARE)).count();
        assert_eq!(comparisons, 10);
    }
}
