//! Interpolation search over uniformly distributed sorted keys

use std::collections::BTreeSet;

use crate::algorithm::state::{ArrayState, Highlight, Step};
use crate::execution::recorder::{fmt_list, vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function interpolationSearch(arr, target):
  low = 0
  high = length(arr) - 1
  while low <= high and arr[low] <= target <= arr[high]:
    if arr[high] == arr[low]:
      return low if arr[low] == target else -1
    pos = low + ((target - arr[low]) * (high - low)) / (arr[high] - arr[low])
    if arr[pos] == target:
      return pos
    if arr[pos] < target:
      low = pos + 1
    else:
      high = pos - 1
  return -1"#;

const L_INIT: usize = 3;
const L_FLAT: usize = 6;
const L_POS: usize = 7;
const L_FOUND: usize = 9;
const L_GO_RIGHT: usize = 11;
const L_GO_LEFT: usize = 13;
const L_MISSING: usize = 14;

const INPUT: [i64; 15] = [10, 12, 13, 16, 18, 19, 20, 21, 22, 23, 24, 33, 35, 42, 47];
const TARGET: i64 = 18;

fn window(arr: &[i64], low: i64, high: i64) -> ArrayState {
    let mut state = ArrayState::snapshot(arr, &BTreeSet::new());
    for i in 0..arr.len() {
        let inside = (i as i64) >= low && (i as i64) <= high;
        state = state.highlight(i, if inside { Highlight::Range } else { Highlight::Eliminated });
    }
    state
}

/// Probe position; the caller guarantees `arr[low] < arr[high]`
fn probe(arr: &[i64], low: usize, high: usize, target: i64) -> usize {
    let span = (high - low) as i64;
    let offset = (target - arr[low]) * span / (arr[high] - arr[low]);
    low + offset as usize
}

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    search(n, &INPUT, TARGET)
}

fn search(n: &Narrator<'_>, arr: &[i64], target: i64) -> Vec<Step> {
    let mut rec = StepRecorder::new();
    let mut low: i64 = 0;
    let mut high: i64 = arr.len() as i64 - 1;

    rec.record(
        say!(n, "interpolation.start", array = fmt_list(arr), target = target),
        L_INIT,
        vars!["target" => target, "low" => low, "high" => high],
        window(arr, low, high),
    );

    while low <= high && arr[low as usize] <= target && target <= arr[high as usize] {
        let (lo, hi) = (low as usize, high as usize);

        if arr[hi] == arr[lo] {
            let hit = arr[lo] == target;
            rec.print(format!("interpolationSearch({}) -> {}", target, if hit { low } else { -1 }));
            let state = window(arr, low, high);
            rec.record(
                if hit {
                    say!(n, "search.found", target = target, index = lo)
                } else {
                    say!(n, "search.not_found", target = target)
                },
                L_FLAT,
                vars!["target" => target, "low" => low, "high" => high],
                if hit { state.highlight(lo, Highlight::Found) } else { state },
            );
            return rec.finish();
        }

        let pos = probe(arr, lo, hi, target);
        rec.record(
            say!(n, "interpolation.probe", pos = pos, value = arr[pos]),
            L_POS,
            vars!["target" => target, "low" => low, "high" => high, "pos" => pos, "arr[pos]" => arr[pos]],
            window(arr, low, high).highlight(pos, Highlight::Mid),
        );

        if arr[pos] == target {
            rec.print(format!("interpolationSearch({}) -> {}", target, pos));
            rec.record(
                say!(n, "search.found", target = target, index = pos),
                L_FOUND,
                vars!["target" => target, "low" => low, "high" => high, "pos" => pos],
                window(arr, low, high).highlight(pos, Highlight::Found),
            );
            return rec.finish();
        }

        if arr[pos] < target {
            low = pos as i64 + 1;
            rec.record(
                say!(n, "binary.go_right", value = arr[pos], target = target),
                L_GO_RIGHT,
                vars!["target" => target, "low" => low, "high" => high, "pos" => pos],
                window(arr, low, high),
            );
        } else {
            high = pos as i64 - 1;
            rec.record(
                say!(n, "binary.go_left", value = arr[pos], target = target),
                L_GO_LEFT,
                vars!["target" => target, "low" => low, "high" => high, "pos" => pos],
                window(arr, low, high),
            );
        }
    }

    rec.print(format!("interpolationSearch({}) -> -1", target));
    rec.record(
        say!(n, "search.not_found", target = target),
        L_MISSING,
        vars!["target" => target, "low" => low, "high" => high],
        window(arr, low, high),
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
    fn test_probe_positions() {
        let steps = testing::run_en(run);
        let positions: Vec<Scalar> = steps
            .iter()
            .filter(|s| s.code_line == Some(L_POS))
            .filter_map(|s| s.variables.get("pos").cloned())
            .collect();
        assert_eq!(positions, vec![Scalar::Int(3), Scalar::Int(4)]);
        assert_eq!(steps.last().unwrap().code_line, Some(L_FOUND));
    }

    #[test]
    fn test_out_of_range_and_flat_inputs() {
        let narrator = Narrator::builtin(Locale::En);
        assert_eq!(search(&narrator, &INPUT, 5).last().unwrap().code_line, Some(L_MISSING));
        assert_eq!(search(&narrator, &INPUT, 17).last().unwrap().code_line, Some(L_MISSING));
        assert_eq!(search(&narrator, &[], 5).last().unwrap().code_line, Some(L_MISSING));
        let flat = search(&narrator, &[7, 7, 7], 7);
        assert_eq!(flat.last().unwrap().code_line, Some(L_FLAT));
        assert_eq!(flat.last().unwrap().console_output, vec!["interpolationSearch(7) -> 0"]);
    }
}
