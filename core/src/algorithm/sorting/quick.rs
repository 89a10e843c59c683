//! Quicksort with Lomuto partitioning

use std::collections::BTreeSet;

use crate::algorithm::state::{ArrayState, Highlight, Step};
use crate::execution::recorder::{fmt_list, vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function quickSort(arr, low, high):
  if low < high:
    p = partition(arr, low, high)
    quickSort(arr, low, p - 1)
    quickSort(arr, p + 1, high)

function partition(arr, low, high):
  pivot = arr[high]
  i = low - 1
  for j from low to high - 1:
    if arr[j] < pivot:
      i = i + 1
      swap(arr[i], arr[j])
  swap(arr[i + 1], arr[high])
  return i + 1"#;

const L_START: usize = 1;
const L_BASE: usize = 2;
const L_RECURSE: usize = 3;
const L_LAST_CALL: usize = 5;
const L_PIVOT: usize = 8;
const L_COMPARE: usize = 11;
const L_ADVANCE: usize = 12;
const L_SWAP: usize = 13;
const L_PLACE_PIVOT: usize = 14;

const INPUT: [i64; 7] = [10, 80, 30, 90, 40, 50, 70];

struct QuickSort<'a, 'n> {
    n: &'a Narrator<'n>,
    arr: Vec<i64>,
    sorted: BTreeSet<usize>,
    rec: StepRecorder,
}

impl QuickSort<'_, '_> {
    fn sort(&mut self, low: usize, high: usize) {
        if low >= high {
            if low == high {
                self.sorted.insert(low);
                let n = self.n;
                self.rec.record(
                    say!(n, "quick.single", value = self.arr[low], index = low),
                    L_BASE,
                    vars!["low" => low, "high" => high],
                    ArrayState::snapshot(&self.arr, &self.sorted).highlight(low, Highlight::Sorted),
                );
            }
            return;
        }

        let n = self.n;
        self.rec.record(
            say!(n, "quick.range", low = low, high = high),
            L_RECURSE,
            vars!["low" => low, "high" => high],
            ArrayState::snapshot(&self.arr, &self.sorted).highlight_range(low..=high, Highlight::Range),
        );

        let p = self.partition(low, high);
        if p > low {
            self.sort(low, p - 1);
        }
        self.sort(p + 1, high);
    }

    fn partition(&mut self, low: usize, high: usize) -> usize {
        let n = self.n;
        let pivot = self.arr[high];
        self.rec.record(
            say!(n, "quick.pivot", pivot = pivot),
            L_PIVOT,
            vars!["low" => low, "high" => high, "pivot" => pivot],
            ArrayState::snapshot(&self.arr, &self.sorted)
                .highlight_range(low..=high, Highlight::Range)
                .highlight(high, Highlight::Pivot),
        );

        // `store` is i + 1: the next slot for a value smaller than the pivot
        let mut store = low;
        for j in low..high {
            self.rec.record(
                say!(n, "quick.compare", value = self.arr[j], pivot = pivot),
                L_COMPARE,
                vars!["low" => low, "high" => high, "pivot" => pivot, "i" => store as i64 - 1, "j" => j],
                ArrayState::snapshot(&self.arr, &self.sorted)
                    .highlight(high, Highlight::Pivot)
                    .highlight(j, Highlight::Comparing),
            );
            if self.arr[j] < pivot {
                if store != j {
                    self.arr.swap(store, j);
                    self.rec.record(
                        say!(n, "sort.swap", a = self.arr[j], b = self.arr[store]),
                        L_SWAP,
                        vars!["pivot" => pivot, "i" => store, "j" => j],
                        ArrayState::snapshot(&self.arr, &self.sorted)
                            .highlight(high, Highlight::Pivot)
                            .highlight(store, Highlight::Swapping)
                            .highlight(j, Highlight::Swapping),
                    );
                } else {
                    self.rec.record(
                        say!(n, "quick.stays", value = self.arr[j]),
                        L_ADVANCE,
                        vars!["pivot" => pivot, "i" => store, "j" => j],
                        ArrayState::snapshot(&self.arr, &self.sorted)
                            .highlight(high, Highlight::Pivot)
                            .highlight(j, Highlight::Placed),
                    );
                }
                store += 1;
            }
        }

        self.arr.swap(store, high);
        self.sorted.insert(store);
        self.rec.record(
            say!(n, "quick.place_pivot", pivot = pivot, index = store),
            L_PLACE_PIVOT,
            vars!["low" => low, "high" => high, "pivot" => pivot, "p" => store],
            ArrayState::snapshot(&self.arr, &self.sorted).highlight(store, Highlight::Sorted),
        );
        store
    }
}

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    let mut qs = QuickSort {
        n,
        arr: INPUT.to_vec(),
        sorted: BTreeSet::new(),
        rec: StepRecorder::new(),
    };
    let len = qs.arr.len();

    qs.rec.record(
        say!(n, "quick.start", array = fmt_list(&qs.arr)),
        L_START,
        vars!["low" => 0usize, "high" => len - 1],
        ArrayState::snapshot(&qs.arr, &qs.sorted),
    );
    qs.sort(0, len - 1);

    qs.sorted.extend(0..len);
    qs.rec.record(
        say!(n, "sort.done", array = fmt_list(&qs.arr)),
        L_LAST_CALL,
        vars!["low" => 0usize, "high" => len - 1],
        ArrayState::snapshot(&qs.arr, &qs.sorted),
    );
    qs.rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::testing;

    #[test]
    fn test_final_step_sorted() {
        let steps = testing::run_en(run);
        let last = steps.last().unwrap().array().unwrap();
        assert_eq!(last.array, vec![10, 30, 40, 50, 70, 80, 90]);
        assert_eq!(last.sorted.len(), 7);
    }

    #[test]
    fn test_done_step_points_at_last_recursive_call() {
        let steps = testing::run_en(run);
        assert_eq!(steps.first().unwrap().code_line, Some(L_START));
        assert_eq!(steps.last().unwrap().code_line, Some(L_LAST_CALL));
        assert_eq!(
            SOURCE.lines().nth(L_LAST_CALL - 1).map(str::trim),
            Some("quickSort(arr, p + 1, high)")
        );
    }

    #[test]
    fn test_pivot_lands_in_final_position() {
        let steps = testing::run_en(run);
        let expected = {
            let mut v = INPUT.to_vec();
            v.sort();
            v
        };
        for step in steps.iter().filter(|s| s.code_line == Some(L_PLACE_PIVOT)) {
            let state = step.array().unwrap();
            let p = step.variables.get("p").unwrap().to_string().parse::<usize>().unwrap();
            assert_eq!(state.array[p], expected[p]);
        }
    }
}
