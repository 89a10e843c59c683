//! Maximum sum of a fixed-size window

use crate::algorithm::concept::SlidingWindow;
use crate::algorithm::state::Step;
use crate::execution::recorder::{fmt_list, vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function maxWindowSum(arr, k):
  windowSum = sum(arr[0..k])
  best = windowSum, bestStart = 0
  for end from k to length(arr) - 1:
    windowSum = windowSum + arr[end] - arr[end - k]
    if windowSum > best:
      best = windowSum, bestStart = end - k + 1
  return best"#;

const L_FIRST: usize = 2;
const L_BEST_INIT: usize = 3;
const L_SLIDE: usize = 5;
const L_NEW_BEST: usize = 7;
const L_RETURN: usize = 8;

const INPUT: [i64; 8] = [2, 1, 5, 1, 3, 2, 6, 1];
const K: usize = 3;

fn window(start: usize, window_sum: i64, best_sum: i64, best_start: usize) -> SlidingWindow {
    SlidingWindow {
        array: INPUT.to_vec(),
        start,
        end: start + K,
        window_sum,
        best_sum,
        best_start,
    }
}

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    let mut rec = StepRecorder::new();
    let mut window_sum: i64 = INPUT[..K].iter().sum();

    rec.record(
        say!(n, "window.first", k = K, array = fmt_list(&INPUT[..K]), sum = window_sum),
        L_FIRST,
        vars!["k" => K, "windowSum" => window_sum],
        window(0, window_sum, window_sum, 0),
    );

    let mut best = window_sum;
    let mut best_start = 0;
    rec.record(
        say!(n, "window.best_init", sum = best),
        L_BEST_INIT,
        vars!["k" => K, "windowSum" => window_sum, "best" => best, "bestStart" => best_start],
        window(0, window_sum, best, best_start),
    );

    for end in K..INPUT.len() {
        let start = end + 1 - K;
        window_sum += INPUT[end] - INPUT[end - K];
        rec.record(
            say!(n, "window.slide", added = INPUT[end], removed = INPUT[end - K], sum = window_sum),
            L_SLIDE,
            vars!["end" => end, "windowSum" => window_sum, "best" => best, "bestStart" => best_start],
            window(start, window_sum, best, best_start),
        );

        if window_sum > best {
            best = window_sum;
            best_start = start;
            rec.record(
                say!(n, "window.new_best", sum = best, start = start),
                L_NEW_BEST,
                vars!["end" => end, "windowSum" => window_sum, "best" => best, "bestStart" => best_start],
                window(start, window_sum, best, best_start),
            );
        }
    }

    rec.print(format!("maxWindowSum(k={}) = {}", K, best));
    rec.record(
        say!(n, "window.done", sum = best, start = best_start),
        L_RETURN,
        vars!["best" => best, "bestStart" => best_start],
        window(best_start, best, best, best_start),
    );
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::concept::ConceptState;
    use crate::algorithm::testing;

    #[test]
    fn test_best_window_is_11_at_4() {
        let steps = testing::run_en(run);
        let Some(ConceptState::SlidingWindow(last)) = steps.last().unwrap().concept() else {
            panic!("expected sliding window");
        };
        assert_eq!((last.best_sum, last.best_start), (11, 4));
        for step in &steps {
            if let Some(ConceptState::SlidingWindow(w)) = step.concept() {
                assert_eq!(w.end - w.start, K);
                assert!(w.end <= w.array.len());
                assert_eq!(w.window_sum, w.array[w.start..w.end].iter().sum::<i64>());
            }
        }
    }
}
