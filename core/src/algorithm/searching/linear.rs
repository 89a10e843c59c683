//! Linear search

use std::collections::BTreeSet;

use crate::algorithm::state::{ArrayState, Highlight, Step};
use crate::execution::recorder::{fmt_list, vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function linearSearch(arr, target):
  for i from 0 to length(arr) - 1:
    if arr[i] == target:
      return i
  return -1"#;

const L_LOOP: usize = 2;
const L_COMPARE: usize = 3;
const L_FOUND: usize = 4;
const L_MISSING: usize = 5;

const INPUT: [i64; 6] = [7, 3, 9, 4, 1, 8];
const TARGET: i64 = 4;

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    search(n, &INPUT, TARGET)
}

fn search(n: &Narrator<'_>, arr: &[i64], target: i64) -> Vec<Step> {
    let none = BTreeSet::new();
    let mut rec = StepRecorder::new();

    rec.record(
        say!(n, "search.start", array = fmt_list(arr), target = target),
        L_LOOP,
        vars!["target" => target, "n" => arr.len()],
        ArrayState::snapshot(arr, &none),
    );

    for (i, &value) in arr.iter().enumerate() {
        let mut state = ArrayState::snapshot(arr, &none);
        for checked in 0..i {
            state = state.highlight(checked, Highlight::Eliminated);
        }
        rec.record(
            say!(n, "search.compare", value = value, index = i, target = target),
            L_COMPARE,
            vars!["target" => target, "i" => i, "arr[i]" => value],
            state.highlight(i, Highlight::Comparing),
        );

        if value == target {
            rec.print(format!("linearSearch({}) -> {}", target, i));
            rec.record(
                say!(n, "search.found", target = target, index = i),
                L_FOUND,
                vars!["target" => target, "i" => i],
                ArrayState::snapshot(arr, &none).highlight(i, Highlight::Found),
            );
            return rec.finish();
        }
    }

    let state = (0..arr.len()).fold(ArrayState::snapshot(arr, &none), |state, i| {
        state.highlight(i, Highlight::Eliminated)
    });
    rec.print(format!("linearSearch({}) -> -1", target));
    rec.record(
        say!(n, "search.not_found", target = target),
        L_MISSING,
        vars!["target" => target],
        state,
    );
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::testing;

    #[test]
    fn test_found_step_is_last() {
        let steps = testing::run_en(run);
        let last = steps.last().unwrap();
        assert_eq!(last.code_line, Some(L_FOUND));
        assert_eq!(last.array().unwrap().highlights.get(&3), Some(&Highlight::Found));
        assert_eq!(last.console_output, vec!["linearSearch(4) -> 3"]);
    }

    #[test]
    fn test_absent_target_scans_everything() {
        let narrator = Narrator::builtin(crate::i18n::Locale::En);
        let steps = search(&narrator, &INPUT, 5);
        let compares = steps.iter().filter(|s| s.code_line == Some(L_COMPARE)).count();
        assert_eq!(compares, INPUT.len());
        assert_eq!(steps.last().unwrap().code_line, Some(L_MISSING));
    }
}
