//! Growth-rate comparison of the common complexity classes

use crate::algorithm::concept::{ComplexityChart, ComplexityCurve, ElementState};
use crate::algorithm::state::Step;
use crate::execution::recorder::{vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"// O(1): constant
function first(arr): return arr[0]
// O(log n): halving
function halvings(n): while n > 1: n = n / 2
// O(n): one pass
function sum(arr): for x in arr: total = total + x
// O(n log n): split and merge
function mergeSort(arr): split in half, sort both, merge
// O(n^2): all pairs
function pairs(arr): for x in arr: for y in arr: visit(x, y)
// O(2^n): every subset
function subsets(arr): for each element: include it or not"#;

const MAX_N: u32 = 8;

struct Class {
    notation: &'static str,
    key: &'static str,
    line: usize,
    cost: fn(f64) -> f64,
}

static CLASSES: [Class; 6] = [
    Class { notation: "O(1)", key: "big_o.constant", line: 2, cost: |_| 1.0 },
    Class { notation: "O(log n)", key: "big_o.logarithmic", line: 4, cost: f64::log2 },
    Class { notation: "O(n)", key: "big_o.linear", line: 6, cost: |n| n },
    Class { notation: "O(n log n)", key: "big_o.linearithmic", line: 8, cost: |n| n * n.log2() },
    Class { notation: "O(n²)", key: "big_o.quadratic", line: 10, cost: |n| n * n },
    Class { notation: "O(2ⁿ)", key: "big_o.exponential", line: 12, cost: |n| n.exp2() },
];

fn curve(class: &Class, state: ElementState) -> ComplexityCurve {
    ComplexityCurve {
        notation: class.notation.to_owned(),
        points: (1..=MAX_N).map(|n| (class.cost)(f64::from(n))).collect(),
        state,
    }
}

fn chart(shown: usize, entering: Option<usize>, marker_n: Option<u32>, state: ElementState) -> ComplexityChart {
    ComplexityChart {
        max_n: MAX_N,
        curves: CLASSES[..shown]
            .iter()
            .enumerate()
            .map(|(i, class)| curve(class, if Some(i) == entering { ElementState::Entering } else { state }))
            .collect(),
        marker_n,
    }
}

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    let mut rec = StepRecorder::new();

    rec.record(
        say!(n, "big_o.start", max = MAX_N),
        1,
        vars!["maxN" => MAX_N],
        chart(0, None, None, ElementState::Idle),
    );

    for (i, class) in CLASSES.iter().enumerate() {
        let at_max = (class.cost)(f64::from(MAX_N));
        rec.record(
            n.text(class.key, &[("ops", format!("{:.0}", at_max)), ("n", MAX_N.to_string())]),
            class.line,
            vars!["notation" => class.notation, "n" => MAX_N, "operations" => at_max],
            chart(i + 1, Some(i), None, ElementState::Idle),
        );
    }

    for marker in [2, 4, MAX_N] {
        let mut variables = vars!["n" => marker];
        for class in &CLASSES {
            variables.set(class.notation, (class.cost)(f64::from(marker)));
        }
        rec.record(
            say!(n, "big_o.marker", n = marker),
            CLASSES[CLASSES.len() - 1].line,
            variables,
            chart(CLASSES.len(), None, Some(marker), ElementState::Active),
        );
    }

    rec.record(
        say!(n, "big_o.done"),
        CLASSES[CLASSES.len() - 1].line,
        vars!["n" => MAX_N],
        chart(CLASSES.len(), None, Some(MAX_N), ElementState::Done),
    );
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::concept::ConceptState;
    use crate::algorithm::testing;

    #[test]
    fn test_curves_are_ordered_at_max_n() {
        let steps = testing::run_en(run);
        let Some(ConceptState::ComplexityChart(chart)) = steps.last().unwrap().concept() else {
            panic!("expected a complexity chart");
        };
        assert_eq!(chart.curves.len(), 6);
        let at_max: Vec<f64> = chart.curves.iter().map(|c| *c.points.last().unwrap()).collect();
        assert!(at_max.windows(2).all(|w| w[0] < w[1]), "{:?}", at_max);
        assert_eq!(at_max[5], 256.0);
    }
}
