//! Step recording for runners
//!
//! [`StepRecorder`] is the only write path into a trace. Every call to
//! [`StepRecorder::record`] takes ownership of a freshly built payload, so
//! steps never share mutable state; the accumulated console output is copied
//! into each step as it is recorded.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use crate::algorithm::state::{Payload, Step, Variables};

/// Collects the ordered steps of one runner invocation
#[derive(Debug, Default)]
pub struct StepRecorder {
    steps: Vec<Step>,
    console: Vec<String>,
}

impl StepRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a console line; visible from the next recorded step on
    pub fn print(&mut self, line: impl Into<String>) {
        self.console.push(line.into());
    }

    /// Record one snapshot
    pub fn record(
        &mut self,
        description: String,
        code_line: usize,
        variables: Variables,
        payload: impl Into<Payload>,
    ) {
        self.steps.push(Step {
            description,
            code_line: Some(code_line),
            variables,
            console_output: self.console.clone(),
            payload: payload.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn finish(self) -> Vec<Step> {
        self.steps
    }
}

/// `vars!["i" => i, "j" => j]` builds an ordered [`Variables`] map
macro_rules! vars {
    () => {
        $crate::algorithm::state::Variables::new()
    };
    ($($name:literal => $value:expr),+ $(,)?) => {{
        let mut variables = $crate::algorithm::state::Variables::new();
        $(variables.set($name, $value);)+
        variables
    }};
}

pub(crate) use vars;

/// `[1, 2, 3]` rendering used in narration and console lines
pub fn fmt_list<T: std::fmt::Display>(values: &[T]) -> String {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::state::{ArrayState, Scalar};

    #[test]
    fn test_console_is_copied_per_step() {
        let mut rec = StepRecorder::new();
        rec.record("a".into(), 1, vars![], Payload::Array(ArrayState::new(vec![1])));
        rec.print("hello");
        rec.record("b".into(), 2, vars!["i" => 0usize], Payload::Array(ArrayState::new(vec![1])));
        rec.print("world");
        rec.record("c".into(), 3, vars![], Payload::Array(ArrayState::new(vec![1])));

        let steps = rec.finish();
        assert!(steps[0].console_output.is_empty());
        assert_eq!(steps[1].console_output, vec!["hello"]);
        assert_eq!(steps[2].console_output, vec!["hello", "world"]);
        assert_eq!(steps[1].variables.get("i"), Some(&Scalar::Int(0)));
        assert_eq!(steps[2].code_line, Some(3));
    }

    #[test]
    fn test_fmt_list() {
        assert_eq!(fmt_list(&[1, 2, 3]), "[1, 2, 3]");
        assert_eq!(fmt_list::<i64>(&[]), "[]");
    }
}
