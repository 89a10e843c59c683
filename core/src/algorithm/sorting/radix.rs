//! LSD radix sort, base 10

use std::collections::BTreeSet;

use crate::algorithm::state::{ArrayState, AuxiliaryArray, Highlight, Step};
use crate::execution::recorder::{fmt_list, vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function radixSort(arr):
  maxVal = max(arr)
  exp = 1
  while maxVal / exp >= 1:
    buckets = 10 empty lists
    for x in arr:
      digit = (x / exp) % 10
      append x to buckets[digit]
    arr = concatenate(buckets)
    exp = exp * 10
  return arr"#;

const L_MAX: usize = 2;
const L_PASS: usize = 4;
const L_DIGIT: usize = 7;
const L_COLLECT: usize = 9;
const L_DONE: usize = 11;

const INPUT: [i64; 8] = [170, 45, 75, 90, 802, 24, 2, 66];

fn bucket_sizes(buckets: &[Vec<i64>]) -> Vec<i64> {
    buckets.iter().map(|b| b.len() as i64).collect()
}

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    let mut arr = INPUT.to_vec();
    let none = BTreeSet::new();
    let mut rec = StepRecorder::new();

    let max_val = arr.iter().copied().max().unwrap_or(0);
    rec.record(
        say!(n, "radix.start", max = max_val),
        L_MAX,
        vars!["maxVal" => max_val],
        ArrayState::snapshot(&arr, &none),
    );

    let mut exp = 1i64;
    while max_val / exp >= 1 {
        rec.record(
            say!(n, "radix.pass", exp = exp),
            L_PASS,
            vars!["maxVal" => max_val, "exp" => exp],
            ArrayState::snapshot(&arr, &none)
                .with_auxiliary(AuxiliaryArray::new("buckets", vec![0; 10])),
        );

        let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); 10];
        for (i, &x) in arr.iter().enumerate() {
            let digit = ((x / exp) % 10) as usize;
            buckets[digit].push(x);
            rec.record(
                say!(n, "radix.digit", value = x, digit = digit),
                L_DIGIT,
                vars!["exp" => exp, "x" => x, "digit" => digit],
                ArrayState::snapshot(&arr, &none)
                    .highlight(i, Highlight::Current)
                    .with_auxiliary(AuxiliaryArray::new("buckets", bucket_sizes(&buckets)).highlight(digit, Highlight::Active)),
            );
        }

        arr = buckets.iter().flatten().copied().collect();
        rec.record(
            say!(n, "radix.collect", array = fmt_list(&arr)),
            L_COLLECT,
            vars!["exp" => exp],
            ArrayState::snapshot(&arr, &none)
                .with_auxiliary(AuxiliaryArray::new("buckets", bucket_sizes(&buckets))),
        );
        exp *= 10;
    }

    let sorted: BTreeSet<usize> = (0..arr.len()).collect();
    rec.record(
        say!(n, "sort.done", array = fmt_list(&arr)),
        L_DONE,
        vars!["maxVal" => max_val, "exp" => exp],
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
        assert_eq!(last.array, vec![2, 24, 45, 66, 75, 90, 170, 802]);
    }

    #[test]
    fn test_one_pass_per_digit() {
        let steps = testing::run_en(run);
        let passes = steps.iter().filter(|s| s.code_line == Some(L_COLLECT)).count();
        assert_eq!(passes, 3);
    }
}
