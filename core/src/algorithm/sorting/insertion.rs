//! Insertion sort

use std::collections::BTreeSet;

use crate::algorithm::state::{ArrayState, Highlight, Step};
use crate::execution::recorder::{fmt_list, vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function insertionSort(arr):
  for i from 1 to length(arr) - 1:
    key = arr[i]
    j = i - 1
    while j >= 0 and arr[j] > key:
      arr[j + 1] = arr[j]
      j = j - 1
    arr[j + 1] = key
  return arr"#;

const L_LOOP: usize = 2;
const L_KEY: usize = 3;
const L_COMPARE: usize = 5;
const L_SHIFT: usize = 6;
const L_INSERT: usize = 8;
const L_DONE: usize = 9;

const INPUT: [i64; 5] = [12, 11, 13, 5, 6];

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    let mut arr = INPUT.to_vec();
    let len = arr.len();
    let none = BTreeSet::new();
    let mut rec = StepRecorder::new();

    rec.record(
        say!(n, "insertion.start", array = fmt_list(&arr)),
        L_LOOP,
        vars!["n" => len],
        ArrayState::snapshot(&arr, &none).highlight(0, Highlight::Placed),
    );

    for i in 1..len {
        let key = arr[i];
        rec.record(
            say!(n, "insertion.pick_key", key = key, index = i),
            L_KEY,
            vars!["i" => i, "key" => key],
            ArrayState::snapshot(&arr, &none)
                .highlight_range(0..=i - 1, Highlight::Placed)
                .highlight(i, Highlight::Current),
        );

        // j is one past the slot being compared so it never underflows
        let mut j = i;
        while j > 0 {
            rec.record(
                say!(n, "insertion.compare", value = arr[j - 1], key = key),
                L_COMPARE,
                vars!["i" => i, "j" => j as i64 - 1, "key" => key, "arr[j]" => arr[j - 1]],
                ArrayState::snapshot(&arr, &none)
                    .highlight(j - 1, Highlight::Comparing)
                    .highlight(j, Highlight::Current),
            );
            if arr[j - 1] <= key {
                break;
            }
            arr[j] = arr[j - 1];
            rec.record(
                say!(n, "insertion.shift", value = arr[j], from = j - 1, to = j),
                L_SHIFT,
                vars!["i" => i, "j" => j as i64 - 1, "key" => key],
                ArrayState::snapshot(&arr, &none).highlight(j, Highlight::Swapping),
            );
            j -= 1;
        }

        arr[j] = key;
        rec.record(
            say!(n, "insertion.insert", key = key, index = j),
            L_INSERT,
            vars!["i" => i, "j" => j as i64 - 1, "key" => key],
            ArrayState::snapshot(&arr, &none)
                .highlight_range(0..=i, Highlight::Placed)
                .highlight(j, Highlight::Found),
        );
    }

    let sorted: BTreeSet<usize> = (0..len).collect();
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
        assert_eq!(last.array, vec![5, 6, 11, 12, 13]);
        assert!(last.is_sorted_ascending());
        assert_eq!(last.sorted.len(), 5);
    }

    #[test]
    fn test_one_insert_per_key() {
        let steps = testing::run_en(run);
        let inserts = steps.iter().filter(|s| s.code_line == Some(L_INSERT)).count();
        assert_eq!(inserts, INPUT.len() - 1);
    }
}
