//! Recursion shown as a growing and shrinking call stack (factorial)

use crate::algorithm::concept::{CallStack, ElementState, StackFrame};
use crate::algorithm::state::Step;
use crate::execution::recorder::{vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function factorial(n):
  if n <= 1:
    return 1
  return n * factorial(n - 1)"#;

const L_CALL: usize = 1;
const L_BASE: usize = 3;
const L_RETURN: usize = 4;

const INPUT: i64 = 4;

struct Calls<'a, 'n> {
    n: &'a Narrator<'n>,
    frames: Vec<StackFrame>,
    rec: StepRecorder,
}

impl Calls<'_, '_> {
    /// Snapshot with every frame waiting except the top one in `top_state`
    fn stack(&self, top_state: ElementState) -> CallStack {
        let mut frames = self.frames.clone();
        let top = frames.len().saturating_sub(1);
        for (i, frame) in frames.iter_mut().enumerate() {
            frame.state = if i == top { top_state } else { ElementState::Waiting };
        }
        CallStack { frames }
    }

    fn factorial(&mut self, arg: i64) -> i64 {
        let n = self.n;
        self.frames.push(StackFrame {
            function: "factorial".to_owned(),
            argument: arg,
            state: ElementState::Entering,
            result: None,
        });
        self.rec.record(
            say!(n, "recursion.call", n = arg, depth = self.frames.len()),
            L_CALL,
            vars!["n" => arg, "depth" => self.frames.len()],
            self.stack(ElementState::Entering),
        );

        let result = if arg <= 1 {
            if let Some(top) = self.frames.last_mut() {
                top.result = Some(1);
            }
            self.rec.print(format!("factorial({}) = 1", arg));
            self.rec.record(
                say!(n, "recursion.base", n = arg),
                L_BASE,
                vars!["n" => arg, "result" => 1],
                self.stack(ElementState::Returning),
            );
            1
        } else {
            let inner = self.factorial(arg - 1);
            let result = arg * inner;
            if let Some(top) = self.frames.last_mut() {
                top.result = Some(result);
            }
            self.rec.print(format!("factorial({}) = {}", arg, result));
            self.rec.record(
                say!(n, "recursion.return", n = arg, inner = inner, result = result),
                L_RETURN,
                vars!["n" => arg, "factorial(n-1)" => inner, "result" => result],
                self.stack(ElementState::Returning),
            );
            result
        };

        if self.frames.len() > 1 {
            self.frames.pop();
        }
        result
    }
}

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    let mut calls = Calls {
        n,
        frames: Vec::new(),
        rec: StepRecorder::new(),
    };
    let result = calls.factorial(INPUT);
    calls.rec.record(
        say!(n, "recursion.done", n = INPUT, result = result),
        L_RETURN,
        vars!["n" => INPUT, "result" => result],
        calls.stack(ElementState::Done),
    );
    calls.rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::concept::ConceptState;
    use crate::algorithm::testing;

    fn depth(step: &Step) -> usize {
        match step.concept() {
            Some(ConceptState::CallStack(stack)) => stack.frames.len(),
            _ => panic!("expected a call stack"),
        }
    }

    #[test]
    fn test_stack_grows_to_depth_n_then_unwinds() {
        let steps = testing::run_en(run);
        let depths: Vec<usize> = steps.iter().map(depth).collect();
        assert_eq!(depths.iter().max(), Some(&(INPUT as usize)));
        assert_eq!(*depths.last().unwrap(), 1);
        assert_eq!(
            steps.last().unwrap().console_output,
            vec!["factorial(1) = 1", "factorial(2) = 2", "factorial(3) = 6", "factorial(4) = 24"]
        );
    }
}
