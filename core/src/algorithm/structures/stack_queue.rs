//! Stack (LIFO) and queue (FIFO) fed the same values side by side

use crate::algorithm::concept::{ElementState, SlotItem, StackQueue};
use crate::algorithm::state::Step;
use crate::execution::recorder::{fmt_list, vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"for x in [10, 20, 30]:
  stack.push(x)
  queue.enqueue(x)
repeat 2 times:
  stack.pop()
  queue.dequeue()"#;

const L_LOOP: usize = 1;
const L_PUSH: usize = 2;
const L_ENQUEUE: usize = 3;
const L_POP: usize = 5;
const L_DEQUEUE: usize = 6;

const VALUES: [i64; 3] = [10, 20, 30];
const REMOVALS: usize = 2;

/// Snapshot with `focus` marking one slot of the stack or the queue
fn panel(stack: &[i64], queue: &[i64], focus: Option<(bool, usize, ElementState)>, last_removed: Option<i64>) -> StackQueue {
    let slots = |values: &[i64], is_stack: bool| {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| match focus {
                Some((on_stack, at, state)) if on_stack == is_stack && at == i => SlotItem::new(value, state),
                _ => SlotItem::new(value, ElementState::Idle),
            })
            .collect()
    };
    StackQueue {
        stack: slots(stack, true),
        queue: slots(queue, false),
        last_removed,
    }
}

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    let mut rec = StepRecorder::new();
    let mut stack: Vec<i64> = Vec::new();
    let mut queue: Vec<i64> = Vec::new();

    rec.record(
        say!(n, "sq.start", values = fmt_list(&VALUES)),
        L_LOOP,
        vars!["stackSize" => 0usize, "queueSize" => 0usize],
        panel(&stack, &queue, None, None),
    );

    for x in VALUES {
        stack.push(x);
        rec.record(
            say!(n, "sq.push", value = x),
            L_PUSH,
            vars!["x" => x, "stackSize" => stack.len(), "queueSize" => queue.len()],
            panel(&stack, &queue, Some((true, stack.len() - 1, ElementState::Entering)), None),
        );
        queue.push(x);
        rec.record(
            say!(n, "sq.enqueue", value = x),
            L_ENQUEUE,
            vars!["x" => x, "stackSize" => stack.len(), "queueSize" => queue.len()],
            panel(&stack, &queue, Some((false, queue.len() - 1, ElementState::Entering)), None),
        );
    }

    for _ in 0..REMOVALS {
        let Some(popped) = stack.pop() else { break };
        rec.print(format!("pop -> {}", popped));
        let top = stack.len().checked_sub(1).map(|i| (true, i, ElementState::Active));
        rec.record(
            say!(n, "sq.pop", value = popped),
            L_POP,
            vars!["removed" => popped, "stackSize" => stack.len(), "queueSize" => queue.len()],
            panel(&stack, &queue, top, Some(popped)),
        );

        if queue.is_empty() {
            break;
        }
        let dequeued = queue.remove(0);
        rec.print(format!("dequeue -> {}", dequeued));
        let front = (!queue.is_empty()).then_some((false, 0, ElementState::Active));
        rec.record(
            say!(n, "sq.dequeue", value = dequeued),
            L_DEQUEUE,
            vars!["removed" => dequeued, "stackSize" => stack.len(), "queueSize" => queue.len()],
            panel(&stack, &queue, front, Some(dequeued)),
        );
    }

    rec.record(
        say!(n, "sq.done", stack = fmt_list(&stack), queue = fmt_list(&queue)),
        L_DEQUEUE,
        vars!["stackSize" => stack.len(), "queueSize" => queue.len()],
        panel(&stack, &queue, None, None),
    );
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::testing;

    #[test]
    fn test_lifo_versus_fifo_order() {
        let steps = testing::run_en(run);
        assert_eq!(
            steps.last().unwrap().console_output,
            vec!["pop -> 30", "dequeue -> 10", "pop -> 20", "dequeue -> 20"]
        );
    }

    #[test]
    fn test_final_contents() {
        use crate::algorithm::concept::ConceptState;
        let steps = testing::run_en(run);
        let Some(ConceptState::StackQueue(last)) = steps.last().unwrap().concept() else {
            panic!("expected stack/queue state");
        };
        let stack: Vec<i64> = last.stack.iter().map(|s| s.value).collect();
        let queue: Vec<i64> = last.queue.iter().map(|s| s.value).collect();
        assert_eq!(stack, vec![10]);
        assert_eq!(queue, vec![30]);
    }
}
