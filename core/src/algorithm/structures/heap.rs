//! Binary min-heap: sift-up on insert, sift-down on extract

use crate::algorithm::concept::{BinaryTree, ElementState, TreeNode, TreeVariant};
use crate::algorithm::state::Step;
use crate::execution::recorder::{fmt_list, vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function insert(heap, value):
  heap.append(value)
  i = length(heap) - 1
  while i > 0 and heap[parent(i)] > heap[i]:
    swap(heap[i], heap[parent(i)]); i = parent(i)

function extractMin(heap):
  min = heap[0]; heap[0] = heap.pop()
  i = 0
  while a child of i is smaller than heap[i]:
    swap with the smaller child; i = that child
  return min"#;

const L_APPEND: usize = 2;
const L_COMPARE_UP: usize = 4;
const L_SWAP_UP: usize = 5;
const L_EXTRACT: usize = 8;
const L_COMPARE_DOWN: usize = 10;
const L_SWAP_DOWN: usize = 11;
const L_RETURN: usize = 12;

const VALUES: [i64; 6] = [40, 20, 30, 10, 50, 5];

/// Tree view of the heap array, children of `i` at `2i + 1` and `2i + 2`
fn tree(heap: &[i64], marks: &[(usize, ElementState)]) -> BinaryTree {
    let child = |i: usize| (i < heap.len()).then_some(i);
    let nodes = heap
        .iter()
        .enumerate()
        .map(|(i, &value)| TreeNode {
            value,
            left: child(2 * i + 1),
            right: child(2 * i + 2),
            state: marks
                .iter()
                .find(|(at, _)| *at == i)
                .map_or(ElementState::Idle, |(_, state)| *state),
        })
        .collect();
    BinaryTree {
        variant: TreeVariant::MinHeap,
        nodes,
        root: (!heap.is_empty()).then_some(0),
        heap_array: Some(heap.to_vec()),
    }
}

fn parent(i: usize) -> usize {
    (i - 1) / 2
}

fn insert(n: &Narrator<'_>, rec: &mut StepRecorder, heap: &mut Vec<i64>, value: i64) {
    heap.push(value);
    let mut i = heap.len() - 1;
    rec.record(
        say!(n, "minheap.append", value = value, index = i),
        L_APPEND,
        vars!["value" => value, "i" => i],
        tree(heap, &[(i, ElementState::Entering)]),
    );

    while i > 0 {
        let p = parent(i);
        let marks = [(i, ElementState::Comparing), (p, ElementState::Comparing)];
        if heap[p] <= heap[i] {
            rec.record(
                say!(n, "minheap.settled", value = heap[i], parent = heap[p]),
                L_COMPARE_UP,
                vars!["i" => i, "parent" => p, "heap[i]" => heap[i], "heap[parent]" => heap[p]],
                tree(heap, &marks),
            );
            return;
        }
        rec.record(
            say!(n, "minheap.compare", child = heap[i], parent = heap[p]),
            L_COMPARE_UP,
            vars!["i" => i, "parent" => p, "heap[i]" => heap[i], "heap[parent]" => heap[p]],
            tree(heap, &marks),
        );
        heap.swap(i, p);
        rec.record(
            say!(n, "minheap.swap", child = heap[p], parent = heap[i]),
            L_SWAP_UP,
            vars!["i" => p, "heap[i]" => heap[p]],
            tree(heap, &[(p, ElementState::Active), (i, ElementState::Active)]),
        );
        i = p;
    }
}

fn extract_min(n: &Narrator<'_>, rec: &mut StepRecorder, heap: &mut Vec<i64>) -> Option<i64> {
    let last = heap.pop()?;
    let min = if heap.is_empty() {
        last
    } else {
        std::mem::replace(&mut heap[0], last)
    };
    rec.record(
        say!(n, "minheap.extract", min = min, last = last),
        L_EXTRACT,
        vars!["min" => min, "heap[0]" => heap.first().copied()],
        tree(heap, &[(0, ElementState::Active)]),
    );

    let mut i = 0;
    loop {
        let smallest = [2 * i + 1, 2 * i + 2]
            .into_iter()
            .filter(|&c| c < heap.len())
            .min_by_key(|&c| heap[c]);
        let Some(c) = smallest else { break };
        let marks = [(i, ElementState::Comparing), (c, ElementState::Comparing)];
        rec.record(
            say!(n, "minheap.sift", value = heap[i], child = heap[c]),
            L_COMPARE_DOWN,
            vars!["min" => min, "i" => i, "heap[i]" => heap[i], "smallestChild" => heap[c]],
            tree(heap, &marks),
        );
        if heap[c] >= heap[i] {
            break;
        }
        heap.swap(i, c);
        rec.record(
            say!(n, "minheap.swap_down", value = heap[c], child = heap[i]),
            L_SWAP_DOWN,
            vars!["min" => min, "i" => c, "heap[i]" => heap[c]],
            tree(heap, &[(i, ElementState::Active), (c, ElementState::Active)]),
        );
        i = c;
    }

    rec.print(format!("extractMin() -> {}", min));
    rec.record(
        say!(n, "minheap.return", min = min),
        L_RETURN,
        vars!["min" => min],
        tree(heap, &[]),
    );
    Some(min)
}

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    let mut rec = StepRecorder::new();
    let mut heap = Vec::with_capacity(VALUES.len());

    for value in VALUES {
        insert(n, &mut rec, &mut heap, value);
    }
    rec.print(format!("heap = {}", fmt_list(&heap)));
    extract_min(n, &mut rec, &mut heap);

    rec.record(
        say!(n, "minheap.done", array = fmt_list(&heap)),
        L_RETURN,
        vars!["size" => heap.len()],
        tree(&heap, &[]),
    );
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::concept::ConceptState;
    use crate::algorithm::testing;

    fn heap_array(step: &Step) -> Vec<i64> {
        match step.concept() {
            Some(ConceptState::BinaryTree(tree)) => tree.heap_array.clone().unwrap(),
            _ => panic!("expected binary tree"),
        }
    }

    #[test]
    fn test_heap_property_after_every_step() {
        let steps = testing::run_en(run);
        for step in steps.iter().filter(|s| s.code_line == Some(L_RETURN)) {
            let heap = heap_array(step);
            for i in 1..heap.len() {
                assert!(heap[parent(i)] <= heap[i], "{:?}", heap);
            }
        }
    }

    #[test]
    fn test_insert_and_extract_sequence() {
        let steps = testing::run_en(run);
        let last = steps.last().unwrap();
        assert_eq!(last.console_output, vec!["heap = [5, 20, 10, 40, 50, 30]", "extractMin() -> 5"]);
        assert_eq!(heap_array(last), vec![10, 20, 30, 40, 50]);
    }
}
