//! Iterative binary search over a sorted array

use std::collections::BTreeSet;

use crate::algorithm::state::{ArrayState, Highlight, Step};
use crate::execution::recorder::{fmt_list, vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function binarySearch(arr, target):
  low = 0
  high = length(arr) - 1
  while low <= high:
    mid = floor((low + high) / 2)
    if arr[mid] == target:
      return mid
    else if arr[mid] < target:
      low = mid + 1
    else:
      high = mid - 1
  return -1"#;

const L_INIT: usize = 3;
const L_MID: usize = 5;
const L_FOUND: usize = 7;
const L_GO_RIGHT: usize = 9;
const L_GO_LEFT: usize = 11;
const L_MISSING: usize = 12;

const INPUT: [i64; 10] = [2, 5, 8, 12, 16, 23, 38, 56, 72, 91];
const TARGET: i64 = 23;

/// Range / mid / eliminated highlighting for the current window.
///
/// `low` and `high` are signed so that an empty window (`high = low - 1`)
/// needs no special casing.
fn window(arr: &[i64], low: i64, high: i64, mid: Option<usize>) -> ArrayState {
    let mut state = ArrayState::snapshot(arr, &BTreeSet::new());
    for i in 0..arr.len() {
        let inside = (i as i64) >= low && (i as i64) <= high;
        state = state.highlight(i, if inside { Highlight::Range } else { Highlight::Eliminated });
    }
    match mid {
        Some(mid) => state.highlight(mid, Highlight::Mid),
        None => state,
    }
}

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    search(n, &INPUT, TARGET)
}

fn search(n: &Narrator<'_>, arr: &[i64], target: i64) -> Vec<Step> {
    let mut rec = StepRecorder::new();
    let mut low: i64 = 0;
    let mut high: i64 = arr.len() as i64 - 1;

    rec.record(
        say!(n, "binary.start", array = fmt_list(arr), target = target),
        L_INIT,
        vars!["target" => target, "low" => low, "high" => high],
        window(arr, low, high, None),
    );

    while low <= high {
        let mid = ((low + high) / 2) as usize;
        let value = arr[mid];
        rec.record(
            say!(n, "binary.mid", low = low, high = high, mid = mid, value = value),
            L_MID,
            vars!["target" => target, "low" => low, "high" => high, "mid" => mid, "arr[mid]" => value],
            window(arr, low, high, Some(mid)),
        );

        if value == target {
            rec.print(format!("binarySearch({}) -> {}", target, mid));
            rec.record(
                say!(n, "search.found", target = target, index = mid),
                L_FOUND,
                vars!["target" => target, "low" => low, "high" => high, "mid" => mid],
                window(arr, low, high, None).highlight(mid, Highlight::Found),
            );
            return rec.finish();
        }

        if value < target {
            low = mid as i64 + 1;
            rec.record(
                say!(n, "binary.go_right", value = value, target = target),
                L_GO_RIGHT,
                vars!["target" => target, "low" => low, "high" => high, "mid" => mid],
                window(arr, low, high, None),
            );
        } else {
            high = mid as i64 - 1;
            rec.record(
                say!(n, "binary.go_left", value = value, target = target),
                L_GO_LEFT,
                vars!["target" => target, "low" => low, "high" => high, "mid" => mid],
                window(arr, low, high, None),
            );
        }
    }

    rec.print(format!("binarySearch({}) -> -1", target));
    rec.record(
        say!(n, "search.not_found", target = target),
        L_MISSING,
        vars!["target" => target, "low" => low, "high" => high],
        window(arr, low, high, None),
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
    fn test_found_highlight_on_target_and_array_unchanged_after() {
        let steps = testing::run_en(run);
        let found_at = steps
            .iter()
            .position(|s| s.array().unwrap().highlights.values().any(|h| *h == Highlight::Found))
            .unwrap();
        let state = steps[found_at].array().unwrap();
        let (&index, _) = state
            .highlights
            .iter()
            .find(|(_, h)| **h == Highlight::Found)
            .unwrap();
        assert_eq!(state.array[index], TARGET);
        for later in &steps[found_at..] {
            assert_eq!(later.array().unwrap().array, INPUT.to_vec());
        }
    }

    #[test]
    fn test_probe_sequence() {
        let steps = testing::run_en(run);
        let mids: Vec<Scalar> = steps
            .iter()
            .filter(|s| s.code_line == Some(L_MID))
            .filter_map(|s| s.variables.get("mid").cloned())
            .collect();
        assert_eq!(mids, vec![Scalar::Int(4), Scalar::Int(7), Scalar::Int(5)]);
    }

    #[test]
    fn test_boundaries_and_absent_target() {
        let narrator = Narrator::builtin(Locale::En);
        for (target, expected) in [(2, "0"), (91, "9")] {
            let steps = search(&narrator, &INPUT, target);
            let last = steps.last().unwrap();
            assert_eq!(last.code_line, Some(L_FOUND));
            assert_eq!(last.variables.get("mid").unwrap().to_string(), expected);
        }
        for target in [1, 50, 100] {
            let steps = search(&narrator, &INPUT, target);
            assert_eq!(steps.last().unwrap().code_line, Some(L_MISSING));
        }
        let steps = search(&narrator, &[], 3);
        assert_eq!(steps.len(), 2);
    }
}
