//! The search engine's priority queue.
//!
//! Grounded on the scheduler's binary-heap priority queue, adapted from a
//! job-priority ordering to the search's `(cost, depth, seed, sequence)`
//! ordering. Unlike the scheduler's queue, entries are never removed or
//! re-prioritized once pushed, so no side lookup table is needed — only
//! the heap and the counters that make tie-breaking deterministic.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::cost::Cost;

#[derive(Debug)]
struct Entry<T> {
    cost: Cost,
    depth: usize,
    rand: u64,
    seq: u64,
    payload: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
            && self.depth == other.depth
            && self.rand == other.rand
            && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reverse every key so the entry with the
        // smallest cost (then deepest, then tie-break) pops first.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| self.depth.cmp(&other.depth))
            .then_with(|| other.rand.cmp(&self.rand))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// A min-cost, deepest-first, seed-stable priority queue over search
/// states.
#[derive(Debug)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    rng: SmallRng,
    seq: u64,
}

impl<T> PriorityQueue<T> {
    /// Create an empty queue whose tie-breaking PRNG is seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            heap: BinaryHeap::new(),
            rng: SmallRng::seed_from_u64(seed),
            seq: 0,
        }
    }

    /// Push `payload` at the given `cost` and search `depth`.
    pub fn push(&mut self, payload: T, cost: Cost, depth: usize) {
        let entry = Entry {
            cost,
            depth,
            rand: self.rng.r#gen(),
            seq: self.seq,
            payload,
        };
        self.seq += 1;
        self.heap.push(entry);
    }

    /// Pop the entry with the smallest `(cost, -depth, rand, seq)` key.
    pub fn pop(&mut self) -> Option<(T, Cost, usize)> {
        self.heap.pop().map(|e| (e.payload, e.cost, e.depth))
    }

    /// Number of entries currently queued.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Remove all queued entries.
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_lowest_cost_first() {
        let mut q = PriorityQueue::new(0);
        q.push("high", Cost::new(3.0, 1), 0);
        q.push("low", Cost::new(1.0, 1), 0);
        q.push("mid", Cost::new(2.0, 1), 0);

        assert_eq!(q.pop().unwrap().0, "low");
        assert_eq!(q.pop().unwrap().0, "mid");
        assert_eq!(q.pop().unwrap().0, "high");
        assert!(q.pop().is_none());
    }

    #[test]
    fn test_equal_cost_prefers_deeper() {
        let mut q = PriorityQueue::new(0);
        q.push("shallow", Cost::new(1.0, 1), 1);
        q.push("deep", Cost::new(1.0, 1), 5);

        assert_eq!(q.pop().unwrap().0, "deep");
        assert_eq!(q.pop().unwrap().0, "shallow");
    }

    #[test]
    fn test_same_seed_is_deterministic() {
        let mut q1 = PriorityQueue::new(42);
        let mut q2 = PriorityQueue::new(42);
        for i in 0..20 {
            q1.push(i, Cost::new(1.0, 1), 0);
            q2.push(i, Cost::new(1.0, 1), 0);
        }
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();
        while let Some((v, _, _)) = q1.pop() {
            out1.push(v);
        }
        while let Some((v, _, _)) = q2.pop() {
            out2.push(v);
        }
        assert_eq!(out1, out2);
    }
}
