//! Abstract-structure payloads
//!
//! Ten concept visualizations that are neither plain arrays, graphs nor
//! grids. Each variant is simple data: the current contents of the structure
//! plus the transient [`ElementState`] of every element.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use serde::{Deserialize, Serialize};

use crate::algorithm::state::Payload;

/// Transient state of one element inside a concept payload
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementState {
    #[default]
    Idle,
    Entering,
    Leaving,
    Comparing,
    Active,
    Found,
    Missing,
    Done,
    Waiting,
    Returning,
}

/// Concept payload, discriminated by `concept`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "concept", content = "data", rename_all = "camelCase")]
pub enum ConceptState {
    ComplexityChart(ComplexityChart),
    CallStack(CallStack),
    StackQueue(StackQueue),
    LinkedList(LinkedList),
    HashTable(HashTable),
    BinaryTree(BinaryTree),
    TwoPointers(TwoPointers),
    SlidingWindow(SlidingWindow),
    MemoTable(MemoTable),
    CoinChange(CoinChange),
}

impl ConceptState {
    /// Stable name of the variant, matching the serialized discriminant
    pub fn name(&self) -> &'static str {
        match self {
            ConceptState::ComplexityChart(_) => "complexityChart",
            ConceptState::CallStack(_) => "callStack",
            ConceptState::StackQueue(_) => "stackQueue",
            ConceptState::LinkedList(_) => "linkedList",
            ConceptState::HashTable(_) => "hashTable",
            ConceptState::BinaryTree(_) => "binaryTree",
            ConceptState::TwoPointers(_) => "twoPointers",
            ConceptState::SlidingWindow(_) => "slidingWindow",
            ConceptState::MemoTable(_) => "memoTable",
            ConceptState::CoinChange(_) => "coinChange",
        }
    }
}

macro_rules! concept_payload {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for ConceptState {
                fn from(state: $variant) -> Self {
                    ConceptState::$variant(state)
                }
            }

            impl From<$variant> for Payload {
                fn from(state: $variant) -> Self {
                    Payload::Concept(ConceptState::$variant(state))
                }
            }
        )+
    };
}

concept_payload!(
    ComplexityChart,
    CallStack,
    StackQueue,
    LinkedList,
    HashTable,
    BinaryTree,
    TwoPointers,
    SlidingWindow,
    MemoTable,
    CoinChange,
);

/// Growth-rate chart: one curve per complexity class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityChart {
    /// Input sizes 1..=max_n are plotted
    pub max_n: u32,
    pub curves: Vec<ComplexityCurve>,
    /// Input size currently marked on the x axis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker_n: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityCurve {
    /// Big-O label, e.g. `O(n log n)`
    pub notation: String,
    /// Operation count for n = 1..=max_n
    pub points: Vec<f64>,
    pub state: ElementState,
}

/// Recursion call stack, bottom frame first
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CallStack {
    pub frames: Vec<StackFrame>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackFrame {
    pub function: String,
    pub argument: i64,
    pub state: ElementState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<i64>,
}

/// A LIFO stack and a FIFO queue side by side
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackQueue {
    /// Bottom to top
    pub stack: Vec<SlotItem>,
    /// Front to back
    pub queue: Vec<SlotItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_removed: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotItem {
    pub value: i64,
    pub state: ElementState,
}

impl SlotItem {
    pub fn new(value: i64, state: ElementState) -> Self {
        Self { value, state }
    }
}

/// Singly linked list, head first
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LinkedList {
    pub nodes: Vec<SlotItem>,
    /// Node the traversal pointer is on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<usize>,
}

/// Hash table with separate chaining
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HashTable {
    pub buckets: Vec<Vec<HashEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_bucket: Option<usize>,
    /// Rendered hash computation, e.g. `h("kiwi") = 437 % 5 = 2`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashEntry {
    pub key: String,
    pub value: i64,
    pub state: ElementState,
}

/// Which ordering a binary tree payload maintains
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TreeVariant {
    SearchTree,
    MinHeap,
}

/// Binary search tree or binary heap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryTree {
    pub variant: TreeVariant,
    /// Arena of nodes; `left`/`right` index into it
    pub nodes: Vec<TreeNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<usize>,
    /// Backing array (heaps only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heap_array: Option<Vec<i64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub value: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<usize>,
    pub state: ElementState,
}

/// Two indices walking toward each other over a sorted array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoPointers {
    pub array: Vec<i64>,
    pub left: usize,
    pub right: usize,
    pub target: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sum: Option<i64>,
    pub state: ElementState,
}

/// Fixed-size window sliding over an array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlidingWindow {
    pub array: Vec<i64>,
    /// Inclusive start of the window
    pub start: usize,
    /// Exclusive end of the window
    pub end: usize,
    pub window_sum: i64,
    pub best_sum: i64,
    pub best_start: usize,
}

/// Top-down memoization table
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoTable {
    pub entries: Vec<MemoEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<u32>,
    pub calls: u32,
    pub hits: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoEntry {
    pub n: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
    pub state: ElementState,
}

/// Greedy vs. dynamic-programming phase of a coin change comparison
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoinPhase {
    Greedy,
    Dp,
    Compare,
}

/// Coin change solved greedily and with a DP table, shown side by side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinChange {
    pub coins: Vec<u32>,
    pub amount: u32,
    pub phase: CoinPhase,
    /// Coins picked by the greedy strategy so far
    pub greedy_picked: Vec<u32>,
    pub greedy_remaining: u32,
    /// `dp[a]` = fewest coins for amount `a` (`None` = unreachable / not yet computed)
    pub dp: Vec<Option<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dp_cursor: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dp_coin: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concept_discriminant_matches_name() {
        let state = ConceptState::CallStack(CallStack {
            frames: vec![StackFrame {
                function: "factorial".to_owned(),
                argument: 3,
                state: ElementState::Active,
                result: None,
            }],
        });
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["concept"], state.name());
        assert_eq!(json["data"]["frames"][0]["state"], "active");

        let back: ConceptState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_element_state_default_is_idle() {
        assert_eq!(ElementState::default(), ElementState::Idle);
    }
}
