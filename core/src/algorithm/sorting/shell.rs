//! Shell sort with the halving gap sequence

use std::collections::BTreeSet;

use crate::algorithm::state::{ArrayState, Highlight, Step};
use crate::execution::recorder::{fmt_list, vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function shellSort(arr):
  n = length(arr)
  gap = floor(n / 2)
  while gap > 0:
    for i from gap to n - 1:
      temp = arr[i]
      j = i
      while j >= gap and arr[j - gap] > temp:
        arr[j] = arr[j - gap]
        j = j - gap
      arr[j] = temp
    gap = floor(gap / 2)
  return arr"#;

const L_GAP: usize = 3;
const L_TEMP: usize = 6;
const L_COMPARE: usize = 8;
const L_SHIFT: usize = 9;
const L_INSERT: usize = 11;
const L_HALVE: usize = 12;
const L_DONE: usize = 13;

const INPUT: [i64; 8] = [35, 33, 42, 10, 14, 19, 27, 44];

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    let mut arr = INPUT.to_vec();
    let len = arr.len();
    let none = BTreeSet::new();
    let mut rec = StepRecorder::new();

    let mut gap = len / 2;
    rec.record(
        say!(n, "shell.start", array = fmt_list(&arr), gap = gap),
        L_GAP,
        vars!["n" => len, "gap" => gap],
        ArrayState::snapshot(&arr, &none),
    );

    while gap > 0 {
        for i in gap..len {
            let temp = arr[i];
            rec.record(
                say!(n, "shell.pick", value = temp, index = i, gap = gap),
                L_TEMP,
                vars!["gap" => gap, "i" => i, "temp" => temp],
                ArrayState::snapshot(&arr, &none).highlight(i, Highlight::Current),
            );

            let mut j = i;
            while j >= gap {
                rec.record(
                    say!(n, "shell.compare", value = arr[j - gap], temp = temp),
                    L_COMPARE,
                    vars!["gap" => gap, "i" => i, "j" => j, "temp" => temp],
                    ArrayState::snapshot(&arr, &none)
                        .highlight(j - gap, Highlight::Comparing)
                        .highlight(j, Highlight::Current),
                );
                if arr[j - gap] <= temp {
                    break;
                }
                arr[j] = arr[j - gap];
                rec.record(
                    say!(n, "shell.shift", value = arr[j], from = j - gap, to = j),
                    L_SHIFT,
                    vars!["gap" => gap, "i" => i, "j" => j, "temp" => temp],
                    ArrayState::snapshot(&arr, &none).highlight(j, Highlight::Swapping),
                );
                j -= gap;
            }

            if j != i {
                arr[j] = temp;
                rec.record(
                    say!(n, "shell.insert", value = temp, index = j),
                    L_INSERT,
                    vars!["gap" => gap, "i" => i, "j" => j, "temp" => temp],
                    ArrayState::snapshot(&arr, &none).highlight(j, Highlight::Placed),
                );
            }
        }

        gap /= 2;
        rec.record(
            say!(n, "shell.gap", gap = gap),
            L_HALVE,
            vars!["gap" => gap],
            ArrayState::snapshot(&arr, &none),
        );
    }

    let sorted: BTreeSet<usize> = (0..len).collect();
    rec.record(
        say!(n, "sort.done", array = fmt_list(&arr)),
        L_DONE,
        vars!["n" => len, "gap" => gap],
        ArrayState::snapshot(&arr, &sorted),
    );
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::state::Scalar;
    use crate::algorithm::testing;

    #[test]
    fn test_final_step_sorted() {
        let steps = testing::run_en(run);
        let last = steps.last().unwrap().array().unwrap();
        assert_eq!(last.array, vec![10, 14, 19, 27, 33, 35, 42, 44]);
    }

    #[test]
    fn test_gap_sequence_halves() {
        let steps = testing::run_en(run);
        let gaps: Vec<Scalar> = steps
            .iter()
            .filter(|s| s.code_line == Some(L_HALVE))
            .filter_map(|s| s.variables.get("gap").cloned())
            .collect();
        assert_eq!(gaps, vec![Scalar::Int(2), Scalar::Int(1), Scalar::Int(0)]);
    }
}
