//! Top-down merge sort
//!
//! Stable: on equal keys the left run wins (`<=`).

use std::collections::BTreeSet;

use crate::algorithm::state::{ArrayState, AuxiliaryArray, Highlight, Step};
use crate::execution::recorder::{fmt_list, vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function mergeSort(arr, left, right):
  if left >= right:
    return
  mid = floor((left + right) / 2)
  mergeSort(arr, left, mid)
  mergeSort(arr, mid + 1, right)
  merge(arr, left, mid, right)

function merge(arr, left, mid, right):
  L = arr[left..mid], R = arr[mid+1..right]
  i = 0, j = 0, k = left
  while i < len(L) and j < len(R):
    if L[i] <= R[j]:
      arr[k] = L[i]; i = i + 1
    else:
      arr[k] = R[j]; j = j + 1
    k = k + 1
  copy remaining L[i..] and R[j..] into arr[k..]"#;

const L_START: usize = 1;
const L_SPLIT: usize = 4;
const L_TOP_MERGE: usize = 7;
const L_COPY_RUNS: usize = 10;
const L_COMPARE: usize = 13;
const L_TAKE_LEFT: usize = 14;
const L_TAKE_RIGHT: usize = 16;
const L_REMAINING: usize = 18;

const INPUT: [i64; 7] = [38, 27, 43, 3, 27, 82, 10];

struct MergeSort<'a, 'n> {
    n: &'a Narrator<'n>,
    arr: Vec<i64>,
    none: BTreeSet<usize>,
    rec: StepRecorder,
}

impl MergeSort<'_, '_> {
    fn sort(&mut self, left: usize, right: usize) {
        if left >= right {
            return;
        }
        let n = self.n;
        let mid = (left + right) / 2;
        self.rec.record(
            say!(n, "merge.split", left = left, mid = mid, right = right),
            L_SPLIT,
            vars!["left" => left, "mid" => mid, "right" => right],
            ArrayState::snapshot(&self.arr, &self.none)
                .highlight_range(left..=mid, Highlight::Range)
                .highlight_range(mid + 1..=right, Highlight::Active),
        );
        self.sort(left, mid);
        self.sort(mid + 1, right);
        self.merge(left, mid, right);
    }

    fn merge(&mut self, left: usize, mid: usize, right: usize) {
        let n = self.n;
        let lhs: Vec<i64> = self.arr[left..=mid].to_vec();
        let rhs: Vec<i64> = self.arr[mid + 1..=right].to_vec();
        let buffer = |lhs: &[i64], rhs: &[i64]| {
            let mut values = lhs.to_vec();
            values.extend_from_slice(rhs);
            AuxiliaryArray::new("L | R", values)
        };

        self.rec.record(
            say!(n, "merge.copy_runs", left = fmt_list(&lhs), right = fmt_list(&rhs)),
            L_COPY_RUNS,
            vars!["left" => left, "mid" => mid, "right" => right],
            ArrayState::snapshot(&self.arr, &self.none)
                .highlight_range(left..=right, Highlight::Range)
                .with_auxiliary(buffer(&lhs, &rhs)),
        );

        let (mut i, mut j, mut k) = (0, 0, left);
        while i < lhs.len() && j < rhs.len() {
            self.rec.record(
                say!(n, "sort.compare", a = lhs[i], b = rhs[j]),
                L_COMPARE,
                vars!["i" => i, "j" => j, "k" => k, "L[i]" => lhs[i], "R[j]" => rhs[j]],
                ArrayState::snapshot(&self.arr, &self.none)
                    .highlight(k, Highlight::Current)
                    .with_auxiliary(
                        buffer(&lhs, &rhs)
                            .highlight(i, Highlight::Comparing)
                            .highlight(lhs.len() + j, Highlight::Comparing),
                    ),
            );
            if lhs[i] <= rhs[j] {
                self.arr[k] = lhs[i];
                self.rec.record(
                    say!(n, "merge.take_left", value = lhs[i], k = k),
                    L_TAKE_LEFT,
                    vars!["i" => i, "j" => j, "k" => k, "side" => "L"],
                    ArrayState::snapshot(&self.arr, &self.none)
                        .highlight(k, Highlight::Placed)
                        .with_auxiliary(buffer(&lhs, &rhs).highlight(i, Highlight::Selected)),
                );
                i += 1;
            } else {
                self.arr[k] = rhs[j];
                self.rec.record(
                    say!(n, "merge.take_right", value = rhs[j], k = k),
                    L_TAKE_RIGHT,
                    vars!["i" => i, "j" => j, "k" => k, "side" => "R"],
                    ArrayState::snapshot(&self.arr, &self.none)
                        .highlight(k, Highlight::Placed)
                        .with_auxiliary(buffer(&lhs, &rhs).highlight(lhs.len() + j, Highlight::Selected)),
                );
                j += 1;
            }
            k += 1;
        }

        let remaining: Vec<(usize, i64)> = lhs[i..]
            .iter()
            .enumerate()
            .map(|(offset, v)| (i + offset, *v))
            .chain(rhs[j..].iter().enumerate().map(|(offset, v)| (lhs.len() + j + offset, *v)))
            .collect();
        for (source, value) in remaining {
            self.arr[k] = value;
            self.rec.record(
                say!(n, "merge.copy_rest", value = value, k = k),
                L_REMAINING,
                vars!["k" => k],
                ArrayState::snapshot(&self.arr, &self.none)
                    .highlight(k, Highlight::Placed)
                    .with_auxiliary(buffer(&lhs, &rhs).highlight(source, Highlight::Selected)),
            );
            k += 1;
        }
    }
}

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    let mut ms = MergeSort {
        n,
        arr: INPUT.to_vec(),
        none: BTreeSet::new(),
        rec: StepRecorder::new(),
    };
    let len = ms.arr.len();

    ms.rec.record(
        say!(n, "merge.start", array = fmt_list(&ms.arr)),
        L_START,
        vars!["left" => 0usize, "right" => len - 1],
        ArrayState::snapshot(&ms.arr, &ms.none),
    );
    ms.sort(0, len - 1);

    let sorted: BTreeSet<usize> = (0..len).collect();
    ms.rec.record(
        say!(n, "sort.done", array = fmt_list(&ms.arr)),
        L_TOP_MERGE,
        vars!["left" => 0usize, "right" => len - 1],
        ArrayState::snapshot(&ms.arr, &sorted),
    );
    ms.rec.finish()
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
        assert_eq!(last.array, vec![3, 10, 27, 27, 38, 43, 82]);
        assert_eq!(last.sorted.len(), 7);
    }

    #[test]
    fn test_done_step_points_at_outer_merge() {
        let steps = testing::run_en(run);
        assert_eq!(steps.first().unwrap().code_line, Some(L_START));
        assert_eq!(steps.last().unwrap().code_line, Some(L_TOP_MERGE));
        assert_eq!(SOURCE.lines().nth(L_TOP_MERGE - 1).map(str::trim), Some("merge(arr, left, mid, right)"));
    }

    #[test]
    fn test_equal_keys_take_left_run() {
        let steps = testing::run_en(run);
        let mut saw_tie = false;
        for (idx, step) in steps.iter().enumerate() {
            if step.code_line != Some(L_COMPARE) {
                continue;
            }
            if step.variables.get("L[i]") == step.variables.get("R[j]") {
                saw_tie = true;
                assert_eq!(steps[idx + 1].variables.get("side"), Some(&Scalar::from("L")));
            }
        }
        assert!(saw_tie, "fixed input should exercise a tie");
    }
}
