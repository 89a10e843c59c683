//! Jump search with block size ⌈√n⌉

use std::collections::BTreeSet;

use crate::algorithm::state::{ArrayState, Highlight, Step};
use crate::execution::recorder::{fmt_list, vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function jumpSearch(arr, target):
  n = length(arr)
  block = ceil(sqrt(n))
  prev = 0, step = block
  while arr[min(step, n) - 1] < target:
    prev = step
    step = step + block
    if prev >= n:
      return -1
  for i from prev to min(step, n) - 1:
    if arr[i] == target:
      return i
  return -1"#;

const L_BLOCK: usize = 3;
const L_PROBE: usize = 5;
const L_JUMP: usize = 7;
const L_PAST_END: usize = 9;
const L_SCAN: usize = 11;
const L_FOUND: usize = 12;
const L_MISSING: usize = 13;

const INPUT: [i64; 12] = [0, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144];
const TARGET: i64 = 55;

/// Smallest `b` with `b * b >= n`
pub fn ceil_sqrt(n: usize) -> usize {
    let mut b = 0;
    while b * b < n {
        b += 1;
    }
    b
}

fn block_state(arr: &[i64], prev: usize, end: usize) -> ArrayState {
    let mut state = ArrayState::snapshot(arr, &BTreeSet::new());
    for i in 0..arr.len() {
        if i < prev {
            state = state.highlight(i, Highlight::Eliminated);
        } else if i < end {
            state = state.highlight(i, Highlight::Range);
        }
    }
    state
}

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    search(n, &INPUT, TARGET)
}

fn search(n: &Narrator<'_>, arr: &[i64], target: i64) -> Vec<Step> {
    let mut rec = StepRecorder::new();
    let len = arr.len();
    let block = ceil_sqrt(len);

    rec.record(
        say!(n, "jump.start", array = fmt_list(arr), target = target, block = block),
        L_BLOCK,
        vars!["n" => len, "block" => block, "target" => target],
        ArrayState::snapshot(arr, &BTreeSet::new()),
    );

    let mut prev = 0;
    let mut step = block;
    loop {
        if len == 0 {
            break;
        }
        let probe = step.min(len) - 1;
        rec.record(
            say!(n, "jump.probe", index = probe, value = arr[probe], target = target),
            L_PROBE,
            vars!["prev" => prev, "step" => step, "arr[probe]" => arr[probe]],
            block_state(arr, prev, step.min(len)).highlight(probe, Highlight::Comparing),
        );
        if arr[probe] >= target {
            break;
        }
        prev = step;
        step += block;
        rec.record(
            say!(n, "jump.jump", prev = prev, step = step),
            L_JUMP,
            vars!["prev" => prev, "step" => step],
            block_state(arr, prev, step.min(len)),
        );
        if prev >= len {
            rec.print(format!("jumpSearch({}) -> -1", target));
            rec.record(
                say!(n, "search.not_found", target = target),
                L_PAST_END,
                vars!["prev" => prev, "step" => step],
                block_state(arr, len, len),
            );
            return rec.finish();
        }
    }

    let end = step.min(len);
    for i in prev..end {
        rec.record(
            say!(n, "search.compare", value = arr[i], index = i, target = target),
            L_SCAN,
            vars!["prev" => prev, "i" => i, "arr[i]" => arr[i]],
            block_state(arr, prev, end).highlight(i, Highlight::Comparing),
        );
        if arr[i] == target {
            rec.print(format!("jumpSearch({}) -> {}", target, i));
            rec.record(
                say!(n, "search.found", target = target, index = i),
                L_FOUND,
                vars!["prev" => prev, "i" => i],
                ArrayState::snapshot(arr, &BTreeSet::new()).highlight(i, Highlight::Found),
            );
            return rec.finish();
        }
    }

    rec.print(format!("jumpSearch({}) -> -1", target));
    rec.record(
        say!(n, "search.not_found", target = target),
        L_MISSING,
        vars!["prev" => prev, "step" => step],
        block_state(arr, end, end),
    );
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::state::Scalar;
    use crate::algorithm::testing;
    use crate::i18n::Locale;

    #[test]
    fn test_ceil_sqrt() {
        assert_eq!(ceil_sqrt(0), 0);
        assert_eq!(ceil_sqrt(1), 1);
        assert_eq!(ceil_sqrt(9), 3);
        assert_eq!(ceil_sqrt(10), 4);
        assert_eq!(ceil_sqrt(12), 4);
    }

    #[test]
    fn test_jumps_by_block_then_scans() {
        let steps = testing::run_en(run);
        let probes: Vec<Scalar> = steps
            .iter()
            .filter(|s| s.code_line == Some(L_PROBE))
            .filter_map(|s| s.variables.get("step").cloned())
            .collect();
        assert_eq!(probes, vec![Scalar::Int(4), Scalar::Int(8), Scalar::Int(12)]);

        let last = steps.last().unwrap();
        assert_eq!(last.code_line, Some(L_FOUND));
        assert_eq!(last.array().unwrap().highlights.get(&9), Some(&Highlight::Found));
    }

    #[test]
    fn test_absent_targets_terminate() {
        let narrator = Narrator::builtin(Locale::En);
        assert_eq!(search(&narrator, &INPUT, 4).last().unwrap().code_line, Some(L_MISSING));
        assert_eq!(search(&narrator, &INPUT, 500).last().unwrap().code_line, Some(L_PAST_END));
        assert_eq!(search(&narrator, &[], 1).last().unwrap().code_line, Some(L_MISSING));
    }
}
