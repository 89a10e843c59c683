//! Pair-with-sum using two pointers over a sorted array

use crate::algorithm::concept::{ElementState, TwoPointers};
use crate::algorithm::state::Step;
use crate::execution::recorder::{fmt_list, vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function pairWithSum(arr, target):
  left = 0
  right = length(arr) - 1
  while left < right:
    sum = arr[left] + arr[right]
    if sum == target:
      return (left, right)
    else if sum < target:
      left = left + 1
    else:
      right = right - 1
  return none"#;

const L_INIT: usize = 3;
const L_SUM: usize = 5;
const L_FOUND: usize = 7;
const L_LEFT: usize = 9;
const L_RIGHT: usize = 11;
const L_NONE: usize = 12;

const INPUT: [i64; 7] = [1, 2, 4, 6, 8, 11, 15];
const TARGET: i64 = 14;

fn pointers(left: usize, right: usize, sum: Option<i64>, state: ElementState) -> TwoPointers {
    TwoPointers {
        array: INPUT.to_vec(),
        left,
        right,
        target: TARGET,
        sum,
        state,
    }
}

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    let mut rec = StepRecorder::new();
    let mut left = 0;
    let mut right = INPUT.len() - 1;

    rec.record(
        say!(n, "two_pointers.start", array = fmt_list(&INPUT), target = TARGET),
        L_INIT,
        vars!["left" => left, "right" => right, "target" => TARGET],
        pointers(left, right, None, ElementState::Idle),
    );

    while left < right {
        let sum = INPUT[left] + INPUT[right];
        rec.record(
            say!(n, "two_pointers.sum", a = INPUT[left], b = INPUT[right], sum = sum),
            L_SUM,
            vars!["left" => left, "right" => right, "sum" => sum, "target" => TARGET],
            pointers(left, right, Some(sum), ElementState::Comparing),
        );

        if sum == TARGET {
            rec.print(format!("pairWithSum({}) -> ({}, {})", TARGET, left, right));
            rec.record(
                say!(n, "two_pointers.found", a = INPUT[left], b = INPUT[right], left = left, right = right),
                L_FOUND,
                vars!["left" => left, "right" => right, "sum" => sum, "target" => TARGET],
                pointers(left, right, Some(sum), ElementState::Found),
            );
            return rec.finish();
        }

        if sum < TARGET {
            left += 1;
            rec.record(
                say!(n, "two_pointers.move_left", sum = sum, target = TARGET),
                L_LEFT,
                vars!["left" => left, "right" => right, "sum" => sum, "target" => TARGET],
                pointers(left, right, Some(sum), ElementState::Active),
            );
        } else {
            right -= 1;
            rec.record(
                say!(n, "two_pointers.move_right", sum = sum, target = TARGET),
                L_RIGHT,
                vars!["left" => left, "right" => right, "sum" => sum, "target" => TARGET],
                pointers(left, right, Some(sum), ElementState::Active),
            );
        }
    }

    rec.print(format!("pairWithSum({}) -> none", TARGET));
    rec.record(
        say!(n, "two_pointers.none", target = TARGET),
        L_NONE,
        vars!["left" => left, "right" => right, "target" => TARGET],
        pointers(left, right, None, ElementState::Missing),
    );
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::concept::ConceptState;
    use crate::algorithm::testing;

    #[test]
    fn test_finds_pair_6_and_8() {
        let steps = testing::run_en(run);
        let Some(ConceptState::TwoPointers(last)) = steps.last().unwrap().concept() else {
            panic!("expected two pointers");
        };
        assert_eq!(last.state, ElementState::Found);
        assert_eq!((INPUT[last.left], INPUT[last.right]), (6, 8));
        assert_eq!(steps.iter().filter(|s| s.code_line == Some(L_SUM)).count(), 6);
    }
}
