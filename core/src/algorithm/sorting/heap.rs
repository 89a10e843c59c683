//! Heap sort over an in-place max-heap

use std::collections::BTreeSet;

use crate::algorithm::state::{ArrayState, Highlight, Step};
use crate::execution::recorder::{fmt_list, vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function heapSort(arr):
  n = length(arr)
  for i from floor(n / 2) - 1 down to 0:
    heapify(arr, n, i)
  for end from n - 1 down to 1:
    swap(arr[0], arr[end])
    heapify(arr, end, 0)

function heapify(arr, size, root):
  largest = root
  l = 2 * root + 1, r = 2 * root + 2
  if l < size and arr[l] > arr[largest]: largest = l
  if r < size and arr[r] > arr[largest]: largest = r
  if largest != root:
    swap(arr[root], arr[largest])
    heapify(arr, size, largest)"#;

const L_INIT: usize = 2;
const L_BUILD: usize = 3;
const L_EXTRACT_LOOP: usize = 5;
const L_EXTRACT: usize = 6;
const L_COMPARE_LEFT: usize = 12;
const L_COMPARE_RIGHT: usize = 13;
const L_SWAP: usize = 15;

const INPUT: [i64; 6] = [4, 10, 3, 5, 1, 8];

struct HeapSort<'a, 'n> {
    n: &'a Narrator<'n>,
    arr: Vec<i64>,
    sorted: BTreeSet<usize>,
    rec: StepRecorder,
}

impl HeapSort<'_, '_> {
    fn heapify(&mut self, size: usize, mut root: usize) {
        let n = self.n;
        loop {
            let mut largest = root;
            let left = 2 * root + 1;
            let right = 2 * root + 2;

            for (child, line) in [(left, L_COMPARE_LEFT), (right, L_COMPARE_RIGHT)] {
                if child >= size {
                    continue;
                }
                self.rec.record(
                    say!(n, "heap.compare_child", child = self.arr[child], largest = self.arr[largest]),
                    line,
                    vars!["size" => size, "root" => root, "largest" => largest, "child" => child],
                    ArrayState::snapshot(&self.arr, &self.sorted)
                        .highlight(largest, Highlight::Active)
                        .highlight(child, Highlight::Comparing),
                );
                if self.arr[child] > self.arr[largest] {
                    largest = child;
                }
            }

            if largest == root {
                return;
            }
            self.arr.swap(root, largest);
            self.rec.record(
                say!(n, "sort.swap", a = self.arr[largest], b = self.arr[root]),
                L_SWAP,
                vars!["size" => size, "root" => root, "largest" => largest],
                ArrayState::snapshot(&self.arr, &self.sorted)
                    .highlight(root, Highlight::Swapping)
                    .highlight(largest, Highlight::Swapping),
            );
            root = largest;
        }
    }
}

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    let mut hs = HeapSort {
        n,
        arr: INPUT.to_vec(),
        sorted: BTreeSet::new(),
        rec: StepRecorder::new(),
    };
    let len = hs.arr.len();

    hs.rec.record(
        say!(n, "heap.start", array = fmt_list(&hs.arr)),
        L_INIT,
        vars!["n" => len],
        ArrayState::snapshot(&hs.arr, &hs.sorted),
    );

    for i in (0..len / 2).rev() {
        hs.rec.record(
            say!(n, "heap.build", index = i, value = hs.arr[i]),
            L_BUILD,
            vars!["i" => i],
            ArrayState::snapshot(&hs.arr, &hs.sorted).highlight(i, Highlight::Current),
        );
        hs.heapify(len, i);
    }

    for end in (1..len).rev() {
        hs.arr.swap(0, end);
        hs.sorted.insert(end);
        hs.rec.record(
            say!(n, "heap.extract", value = hs.arr[end], index = end),
            L_EXTRACT,
            vars!["end" => end],
            ArrayState::snapshot(&hs.arr, &hs.sorted)
                .highlight(0, Highlight::Swapping)
                .highlight(end, Highlight::Sorted),
        );
        hs.heapify(end, 0);
    }

    hs.sorted.extend(0..len);
    hs.rec.record(
        say!(n, "sort.done", array = fmt_list(&hs.arr)),
        L_EXTRACT_LOOP,
        vars!["n" => len],
        ArrayState::snapshot(&hs.arr, &hs.sorted),
    );
    hs.rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::testing;

    #[test]
    fn test_done_step_points_at_extraction_loop() {
        let steps = testing::run_en(run);
        let last = steps.last().unwrap();
        assert_eq!(last.code_line, Some(L_EXTRACT_LOOP));
        assert!(last.array().unwrap().is_sorted_ascending());
    }

    #[test]
    fn test_final_step_sorted() {
        let steps = testing::run_en(run);
        let last = steps.last().unwrap().array().unwrap();
        assert_eq!(last.array, vec![1, 3, 4, 5, 8, 10]);
        assert_eq!(last.sorted.len(), 6);
    }

    #[test]
    fn test_max_heap_after_build_phase() {
        let steps = testing::run_en(run);
        let first_extract = steps
            .iter()
            .position(|s| s.code_line == Some(L_EXTRACT))
            .unwrap();
        let heap = &steps[first_extract - 1].array().unwrap().array;
        for i in 0..heap.len() {
            for child in [2 * i + 1, 2 * i + 2] {
                if child < heap.len() {
                    assert!(heap[i] >= heap[child], "{:?}", heap);
                }
            }
        }
    }
}
