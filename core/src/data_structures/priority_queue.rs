//! Deterministic min-priority queue
//!
//! A thin wrapper over [`BinaryHeap`] with `Reverse` ordering. Items are
//! compared as whole tuples, so ties on priority are broken by the remaining
//! tuple fields (node ids), never by insertion timing. Stale entries are not
//! removed; callers skip them on pop (lazy deletion).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Min-heap over totally ordered items
#[derive(Debug, Clone)]
pub struct MinQueue<T: Ord> {
    heap: BinaryHeap<Reverse<T>>,
}

impl<T: Ord + Clone> MinQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, item: T) {
        self.heap.push(Reverse(item));
    }

    /// Remove and return the smallest item
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(item)| item)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// All queued items, smallest first
    pub fn ordered(&self) -> Vec<T> {
        let mut items: Vec<T> = self.heap.iter().map(|Reverse(item)| item.clone()).collect();
        items.sort();
        items
    }
}

impl<T: Ord + Clone> Default for MinQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::traits::NodeId;

    #[test]
    fn test_default_is_empty() {
        let queue: MinQueue<(u32, NodeId)> = MinQueue::default();
        assert!(queue.is_empty());
        assert!(queue.ordered().is_empty());
    }

    #[test]
    fn test_pops_in_priority_order() {
        let mut queue = MinQueue::new();
        queue.push((5, NodeId(1)));
        queue.push((2, NodeId(4)));
        queue.push((2, NodeId(3)));
        queue.push((9, NodeId(0)));

        assert_eq!(
            queue.ordered(),
            vec![(2, NodeId(3)), (2, NodeId(4)), (5, NodeId(1)), (9, NodeId(0))]
        );
        assert_eq!(queue.pop(), Some((2, NodeId(3))));
        assert_eq!(queue.pop(), Some((2, NodeId(4))));
        assert_eq!(queue.pop(), Some((5, NodeId(1))));
        assert_eq!(queue.pop(), Some((9, NodeId(0))));
        assert!(queue.is_empty());
        assert_eq!(queue.pop(), None);
    }
}
