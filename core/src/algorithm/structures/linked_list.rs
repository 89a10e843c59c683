//! Singly linked list: append, insert after, find, remove

use crate::algorithm::concept::{ElementState, LinkedList, SlotItem};
use crate::algorithm::state::Step;
use crate::execution::recorder::{fmt_list, vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function append(list, value):
  list.tail.next = Node(value)

function insertAfter(list, target, value):
  node = list.head
  while node.value != target:
    node = node.next
  node.next = Node(value, node.next)

function find(list, value):
  node = list.head
  while node != none and node.value != value:
    node = node.next
  return node

function remove(list, value):
  prev = none, node = list.head
  while node.value != value:
    prev = node, node = node.next
  prev.next = node.next"#;

const L_APPEND: usize = 2;
const L_INSERT_HEAD: usize = 5;
const L_INSERT_WALK: usize = 7;
const L_INSERT: usize = 8;
const L_FIND_HEAD: usize = 11;
const L_FIND_WALK: usize = 13;
const L_FIND_RETURN: usize = 14;
const L_REMOVE_HEAD: usize = 17;
const L_REMOVE_WALK: usize = 19;
const L_UNLINK: usize = 20;

const INITIAL: [i64; 3] = [3, 7, 9];
const INSERT_AFTER: i64 = 3;
const INSERT_VALUE: i64 = 5;
const FIND: i64 = 9;
const REMOVE: i64 = 7;

fn list(values: &[i64], cursor: Option<usize>, focus: Option<(usize, ElementState)>) -> LinkedList {
    let nodes = values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let state = match focus {
                Some((at, state)) if at == i => state,
                _ if cursor == Some(i) => ElementState::Active,
                _ => ElementState::Idle,
            };
            SlotItem::new(value, state)
        })
        .collect();
    LinkedList { nodes, cursor }
}

/// Walk from the head towards `target`, one step per visited node.
///
/// Returns the index of the first match.
fn walk(
    n: &Narrator<'_>,
    rec: &mut StepRecorder,
    values: &[i64],
    target: i64,
    head_line: usize,
    walk_line: usize,
) -> Option<usize> {
    for (i, &value) in values.iter().enumerate() {
        rec.record(
            say!(n, "list.walk", value = value, target = target),
            if i == 0 { head_line } else { walk_line },
            vars!["node" => value, "index" => i, "target" => target],
            list(values, Some(i), Some((i, ElementState::Comparing))),
        );
        if value == target {
            return Some(i);
        }
    }
    None
}

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    let mut rec = StepRecorder::new();
    let mut values: Vec<i64> = Vec::new();

    for value in INITIAL {
        values.push(value);
        rec.record(
            say!(n, "list.append", value = value),
            L_APPEND,
            vars!["value" => value, "length" => values.len()],
            list(&values, None, Some((values.len() - 1, ElementState::Entering))),
        );
    }

    if let Some(at) = walk(n, &mut rec, &values, INSERT_AFTER, L_INSERT_HEAD, L_INSERT_WALK) {
        values.insert(at + 1, INSERT_VALUE);
        rec.record(
            say!(n, "list.insert", value = INSERT_VALUE, after = INSERT_AFTER),
            L_INSERT,
            vars!["value" => INSERT_VALUE, "target" => INSERT_AFTER, "length" => values.len()],
            list(&values, Some(at), Some((at + 1, ElementState::Entering))),
        );
    }

    match walk(n, &mut rec, &values, FIND, L_FIND_HEAD, L_FIND_WALK) {
        Some(at) => {
            rec.print(format!("find({}) -> index {}", FIND, at));
            rec.record(
                say!(n, "list.found", value = FIND, index = at),
                L_FIND_RETURN,
                vars!["value" => FIND, "index" => at],
                list(&values, Some(at), Some((at, ElementState::Found))),
            );
        }
        None => {
            rec.print(format!("find({}) -> none", FIND));
            rec.record(
                say!(n, "list.missing", value = FIND),
                L_FIND_RETURN,
                vars!["value" => FIND],
                list(&values, None, None),
            );
        }
    }

    if let Some(at) = walk(n, &mut rec, &values, REMOVE, L_REMOVE_HEAD, L_REMOVE_WALK) {
        rec.record(
            say!(n, "list.unlink", value = REMOVE),
            L_UNLINK,
            vars!["value" => REMOVE, "index" => at],
            list(&values, Some(at), Some((at, ElementState::Leaving))),
        );
        values.remove(at);
    }

    rec.print(format!("list = {}", fmt_list(&values)));
    rec.record(
        say!(n, "list.done", list = fmt_list(&values)),
        L_UNLINK,
        vars!["length" => values.len()],
        list(&values, None, None),
    );
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::concept::ConceptState;
    use crate::algorithm::testing;

    fn values(step: &Step) -> Vec<i64> {
        match step.concept() {
            Some(ConceptState::LinkedList(list)) => list.nodes.iter().map(|node| node.value).collect(),
            _ => panic!("expected linked list"),
        }
    }

    #[test]
    fn test_final_list_after_insert_and_remove() {
        let steps = testing::run_en(run);
        assert_eq!(values(steps.last().unwrap()), vec![3, 5, 9]);
        assert!(steps.last().unwrap().console_output.contains(&"find(9) -> index 3".to_owned()));
    }

    #[test]
    fn test_unlinked_node_leaves_before_removal() {
        let steps = testing::run_en(run);
        let unlink = steps.iter().find(|s| s.code_line == Some(L_UNLINK)).unwrap();
        let Some(ConceptState::LinkedList(list)) = unlink.concept() else {
            panic!("expected linked list");
        };
        assert_eq!(list.nodes[2].value, REMOVE);
        assert_eq!(list.nodes[2].state, ElementState::Leaving);
    }
}
