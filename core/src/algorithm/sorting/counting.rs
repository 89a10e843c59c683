//! Counting sort for small non-negative keys
//!
//! Uses the prefix-sum placement pass so the sort is stable.

use std::collections::BTreeSet;

use crate::algorithm::state::{ArrayState, AuxiliaryArray, Highlight, Step};
use crate::execution::recorder::{fmt_list, vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function countingSort(arr):
  maxVal = max(arr)
  count = array of size maxVal + 1 filled with 0
  for x in arr:
    count[x] = count[x] + 1
  for v from 1 to maxVal:
    count[v] = count[v] + count[v - 1]
  output = array of size length(arr)
  for i from length(arr) - 1 down to 0:
    count[arr[i]] = count[arr[i]] - 1
    output[count[arr[i]]] = arr[i]
  return output"#;

const L_MAX: usize = 2;
const L_TALLY: usize = 5;
const L_PREFIX: usize = 7;
const L_PLACE: usize = 11;
const L_DONE: usize = 12;

const INPUT: [i64; 7] = [4, 2, 2, 8, 3, 3, 1];

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    let arr = INPUT.to_vec();
    let none = BTreeSet::new();
    let mut rec = StepRecorder::new();

    let max_val = arr.iter().copied().max().unwrap_or(0);
    let mut count = vec![0i64; max_val as usize + 1];

    rec.record(
        say!(n, "counting.start", max = max_val, size = count.len()),
        L_MAX,
        vars!["maxVal" => max_val],
        ArrayState::snapshot(&arr, &none).with_auxiliary(AuxiliaryArray::new("count", count.clone())),
    );

    for (i, &x) in arr.iter().enumerate() {
        let slot = x as usize;
        count[slot] += 1;
        rec.record(
            say!(n, "counting.tally", value = x, count = count[slot]),
            L_TALLY,
            vars!["i" => i, "x" => x, "count[x]" => count[slot]],
            ArrayState::snapshot(&arr, &none)
                .highlight(i, Highlight::Current)
                .with_auxiliary(AuxiliaryArray::new("count", count.clone()).highlight(slot, Highlight::Active)),
        );
    }

    for v in 1..count.len() {
        count[v] += count[v - 1];
        rec.record(
            say!(n, "counting.prefix", value = v, total = count[v]),
            L_PREFIX,
            vars!["v" => v, "count[v]" => count[v]],
            ArrayState::snapshot(&arr, &none).with_auxiliary(
                AuxiliaryArray::new("count", count.clone())
                    .highlight(v - 1, Highlight::Dependency)
                    .highlight(v, Highlight::Computed),
            ),
        );
    }

    // Output slots start at -1 so the buffer shows which ones are still unfilled
    let mut output = vec![-1i64; arr.len()];
    for i in (0..arr.len()).rev() {
        let slot = arr[i] as usize;
        count[slot] -= 1;
        let target = count[slot] as usize;
        output[target] = arr[i];
        rec.record(
            say!(n, "counting.place", value = arr[i], index = target),
            L_PLACE,
            vars!["i" => i, "arr[i]" => arr[i], "position" => target],
            ArrayState::snapshot(&arr, &none)
                .highlight(i, Highlight::Current)
                .with_auxiliary(AuxiliaryArray::new("output", output.clone()).highlight(target, Highlight::Placed)),
        );
    }

    let sorted: BTreeSet<usize> = (0..output.len()).collect();
    rec.record(
        say!(n, "sort.done", array = fmt_list(&output)),
        L_DONE,
        vars!["maxVal" => max_val],
        ArrayState::snapshot(&output, &sorted),
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
        assert_eq!(last.array, vec![1, 2, 2, 3, 3, 4, 8]);
        assert_eq!(last.sorted.len(), 7);
        assert!(last.auxiliary.is_none());
    }

    #[test]
    fn test_prefix_sums_end_at_length() {
        let steps = testing::run_en(run);
        let last_prefix = steps
            .iter()
            .filter(|s| s.code_line == Some(L_PREFIX))
            .last()
            .unwrap();
        let count = &last_prefix.array().unwrap().auxiliary.as_ref().unwrap().values;
        assert_eq!(*count.last().unwrap(), INPUT.len() as i64);
    }
}
