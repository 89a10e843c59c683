//! Bubble sort with early exit

use std::collections::BTreeSet;

use crate::algorithm::state::{ArrayState, Highlight, Step};
use crate::execution::recorder::{fmt_list, vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function bubbleSort(arr):
  n = length(arr)
  for i from 0 to n - 2:
    swapped = false
    for j from 0 to n - i - 2:
      if arr[j] > arr[j + 1]:
        swap(arr[j], arr[j + 1])
        swapped = true
    if not swapped:
      break
  return arr"#;

const L_INIT: usize = 2;
const L_PASS: usize = 3;
const L_COMPARE: usize = 6;
const L_SWAP: usize = 7;
const L_EARLY_EXIT: usize = 10;
const L_DONE: usize = 11;

const INPUT: [i64; 6] = [5, 3, 8, 1, 9, 2];

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    let mut arr = INPUT.to_vec();
    let len = arr.len();
    let mut sorted = BTreeSet::new();
    let mut rec = StepRecorder::new();

    rec.record(
        say!(n, "bubble.start", array = fmt_list(&arr)),
        L_INIT,
        vars!["n" => len],
        ArrayState::snapshot(&arr, &sorted),
    );

    for i in 0..len.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..len - i - 1 {
            rec.record(
                say!(n, "sort.compare", a = arr[j], b = arr[j + 1]),
                L_COMPARE,
                vars!["i" => i, "j" => j, "arr[j]" => arr[j], "arr[j + 1]" => arr[j + 1], "swapped" => swapped],
                ArrayState::snapshot(&arr, &sorted)
                    .highlight(j, Highlight::Comparing)
                    .highlight(j + 1, Highlight::Comparing),
            );
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
                rec.record(
                    say!(n, "sort.swap", a = arr[j + 1], b = arr[j]),
                    L_SWAP,
                    vars!["i" => i, "j" => j, "arr[j]" => arr[j], "arr[j + 1]" => arr[j + 1], "swapped" => swapped],
                    ArrayState::snapshot(&arr, &sorted)
                        .highlight(j, Highlight::Swapping)
                        .highlight(j + 1, Highlight::Swapping),
                );
            }
        }

        let settled = len - i - 1;
        sorted.insert(settled);
        if !swapped {
            sorted.extend(0..len);
            rec.record(
                say!(n, "bubble.early_exit"),
                L_EARLY_EXIT,
                vars!["i" => i, "swapped" => swapped],
                ArrayState::snapshot(&arr, &sorted),
            );
            break;
        }
        rec.record(
            say!(n, "sort.in_place", value = arr[settled], index = settled),
            L_PASS,
            vars!["i" => i, "swapped" => swapped],
            ArrayState::snapshot(&arr, &sorted).highlight(settled, Highlight::Sorted),
        );
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
        assert_eq!(last.array, vec![1, 2, 3, 5, 8, 9]);
        assert_eq!(last.sorted, (0..6).collect());
    }

    #[test]
    fn test_each_swap_preceded_by_comparison() {
        let steps = testing::run_en(run);
        for (i, step) in steps.iter().enumerate() {
            if step.code_line == Some(L_SWAP) {
                assert_eq!(steps[i - 1].code_line, Some(L_COMPARE));
            }
        }
        // inversions in [5, 3, 8, 1, 9, 2]
        let swaps = steps.iter().filter(|s| s.code_line == Some(L_SWAP)).count();
        assert_eq!(swaps, 8);
    }
}
