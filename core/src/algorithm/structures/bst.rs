//! Binary search tree: insertion and search

use crate::algorithm::concept::{BinaryTree, ElementState, TreeNode, TreeVariant};
use crate::algorithm::state::Step;
use crate::execution::recorder::{fmt_list, vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function insert(node, value):
  if node == none: return Node(value)
  if value < node.value:
    node.left = insert(node.left, value)
  else:
    node.right = insert(node.right, value)
  return node

function search(node, value):
  if node == none: return false
  if value == node.value: return true
  if value < node.value: return search(node.left, value)
  return search(node.right, value)"#;

const L_PLACE: usize = 2;
const L_INSERT_LEFT: usize = 4;
const L_INSERT_RIGHT: usize = 6;
const L_MISSING: usize = 10;
const L_FOUND: usize = 11;
const L_SEARCH_LEFT: usize = 12;
const L_SEARCH_RIGHT: usize = 13;

const VALUES: [i64; 8] = [50, 30, 70, 20, 40, 60, 80, 35];
const SEARCHES: [i64; 2] = [35, 65];

/// Arena-backed tree; indices into `nodes` are stable
#[derive(Default)]
struct Tree {
    nodes: Vec<TreeNode>,
    root: Option<usize>,
}

impl Tree {
    fn snapshot(&self, path: &[usize], focus: Option<(usize, ElementState)>) -> BinaryTree {
        let nodes = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, node)| {
                let state = match focus {
                    Some((at, state)) if at == i => state,
                    _ if path.contains(&i) => ElementState::Active,
                    _ => ElementState::Idle,
                };
                TreeNode { state, ..node.clone() }
            })
            .collect();
        BinaryTree {
            variant: TreeVariant::SearchTree,
            nodes,
            root: self.root,
            heap_array: None,
        }
    }

    fn child(&self, at: usize, left: bool) -> Option<usize> {
        let node = &self.nodes[at];
        if left {
            node.left
        } else {
            node.right
        }
    }

    fn attach(&mut self, parent: Option<(usize, bool)>, value: i64) -> usize {
        let index = self.nodes.len();
        self.nodes.push(TreeNode {
            value,
            left: None,
            right: None,
            state: ElementState::Idle,
        });
        match parent {
            Some((at, true)) => self.nodes[at].left = Some(index),
            Some((at, false)) => self.nodes[at].right = Some(index),
            None => self.root = Some(index),
        }
        index
    }

    fn in_order(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = Vec::new();
        let mut cursor = self.root;
        while cursor.is_some() || !stack.is_empty() {
            while let Some(at) = cursor {
                stack.push(at);
                cursor = self.nodes[at].left;
            }
            if let Some(at) = stack.pop() {
                out.push(self.nodes[at].value);
                cursor = self.nodes[at].right;
            }
        }
        out
    }
}

fn insert(n: &Narrator<'_>, rec: &mut StepRecorder, tree: &mut Tree, value: i64) {
    let mut path = Vec::new();
    let mut parent = None;
    let mut cursor = tree.root;

    while let Some(at) = cursor {
        let node_value = tree.nodes[at].value;
        let go_left = value < node_value;
        rec.record(
            if go_left {
                say!(n, "bst.go_left", value = value, node = node_value)
            } else {
                say!(n, "bst.go_right", value = value, node = node_value)
            },
            if go_left { L_INSERT_LEFT } else { L_INSERT_RIGHT },
            vars!["value" => value, "node.value" => node_value],
            tree.snapshot(&path, Some((at, ElementState::Comparing))),
        );
        path.push(at);
        parent = Some((at, go_left));
        cursor = tree.child(at, go_left);
    }

    let index = tree.attach(parent, value);
    rec.record(
        if parent.is_none() {
            say!(n, "bst.root", value = value)
        } else {
            say!(n, "bst.place", value = value)
        },
        L_PLACE,
        vars!["value" => value, "size" => tree.nodes.len()],
        tree.snapshot(&path, Some((index, ElementState::Entering))),
    );
}

fn search(n: &Narrator<'_>, rec: &mut StepRecorder, tree: &Tree, value: i64) -> bool {
    let mut path = Vec::new();
    let mut cursor = tree.root;

    while let Some(at) = cursor {
        let node_value = tree.nodes[at].value;
        if value == node_value {
            rec.print(format!("search({}) -> true", value));
            rec.record(
                say!(n, "bst.found", value = value),
                L_FOUND,
                vars!["value" => value, "node.value" => node_value],
                tree.snapshot(&path, Some((at, ElementState::Found))),
            );
            return true;
        }
        let go_left = value < node_value;
        rec.record(
            if go_left {
                say!(n, "bst.go_left", value = value, node = node_value)
            } else {
                say!(n, "bst.go_right", value = value, node = node_value)
            },
            if go_left { L_SEARCH_LEFT } else { L_SEARCH_RIGHT },
            vars!["value" => value, "node.value" => node_value],
            tree.snapshot(&path, Some((at, ElementState::Comparing))),
        );
        path.push(at);
        cursor = tree.child(at, go_left);
    }

    rec.print(format!("search({}) -> false", value));
    rec.record(
        say!(n, "bst.missing", value = value),
        L_MISSING,
        vars!["value" => value],
        tree.snapshot(&path, None),
    );
    false
}

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    let mut rec = StepRecorder::new();
    let mut tree = Tree::default();

    for value in VALUES {
        insert(n, &mut rec, &mut tree, value);
    }
    for value in SEARCHES {
        search(n, &mut rec, &tree, value);
    }

    let sorted = tree.in_order();
    rec.record(
        say!(n, "bst.done", values = fmt_list(&sorted)),
        L_FOUND,
        vars!["size" => tree.nodes.len()],
        tree.snapshot(&[], None),
    );
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::concept::ConceptState;
    use crate::algorithm::testing;

    #[test]
    fn test_search_results() {
        let steps = testing::run_en(run);
        assert_eq!(
            steps.last().unwrap().console_output,
            vec!["search(35) -> true", "search(65) -> false"]
        );
    }

    #[test]
    fn test_tree_is_ordered() {
        let steps = testing::run_en(run);
        let Some(ConceptState::BinaryTree(tree)) = steps.last().unwrap().concept() else {
            panic!("expected binary tree");
        };
        assert_eq!(tree.nodes.len(), VALUES.len());
        for node in &tree.nodes {
            if let Some(left) = node.left {
                assert!(tree.nodes[left].value < node.value);
            }
            if let Some(right) = node.right {
                assert!(tree.nodes[right].value >= node.value);
            }
        }
        let mut expected = VALUES.to_vec();
        expected.sort_unstable();
        let rebuilt = Tree {
            nodes: tree.nodes.clone(),
            root: tree.root,
        };
        assert_eq!(rebuilt.in_order(), expected);
    }
}
