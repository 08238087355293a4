//! The resumable best-first search engine.
//!
//! Transliterates the reference `BestFirstSearch`/`BestFirstPriorityQueue`
//! control flow: a pop immediately updates the "minimum reached" flag and
//! is checked against both the tightening upper bound and any fixed
//! stopping bound *before* it counts as visited or is goal-tested.

use tracing::{debug, instrument};

use crate::cost::Cost;
use crate::error::CutSearchResult;
use crate::queue::PriorityQueue;
use crate::search_space::SearchSpace;
use crate::state::SubCircuitsState;

/// Point-in-time counters for a search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// States popped from the queue and goal-tested.
    pub visited: u64,
    /// Successor states produced by expansion.
    pub generated: u64,
    /// Successor states that passed the upper-bound filter and were queued.
    pub enqueued: u64,
    /// Pops whose depth did not exceed the previous pop's depth.
    pub backjumps: u64,
}

/// A resumable best-first search over a [`SearchSpace`].
#[derive(Debug)]
pub struct BestFirstSearch {
    queue: PriorityQueue<SubCircuitsState>,
    upper_bound_cost: Cost,
    min_reached: bool,
    prev_depth: Option<usize>,
    stats: Stats,
    prior_goal_stats: Stats,
    penultimate_stats: Stats,
    max_backjumps: u64,
}

impl BestFirstSearch {
    /// Start a new search from `initial`, seeding the queue's tie-breaking
    /// PRNG with `seed`.
    pub fn new(
        initial: SubCircuitsState,
        space: &impl SearchSpace,
        seed: u64,
        max_backjumps: u64,
    ) -> Self {
        let mut queue = PriorityQueue::new(seed);
        let cost = space.cost(&initial);
        queue.push(initial, cost, 0);
        Self {
            queue,
            upper_bound_cost: Cost::gamma_only(f64::INFINITY),
            min_reached: false,
            prev_depth: None,
            stats: Stats::default(),
            prior_goal_stats: Stats::default(),
            penultimate_stats: Stats::default(),
            max_backjumps,
        }
    }

    /// Whether the search has exhausted its bound: the queue drained, or
    /// the most recently popped cost reached the upper bound.
    pub fn min_reached(&self) -> bool {
        self.min_reached
    }

    /// Current statistics, or the snapshot as of the previous goal if
    /// `penultimate` is set.
    pub fn stats(&self, penultimate: bool) -> Stats {
        if penultimate {
            self.penultimate_stats
        } else {
            self.stats
        }
    }

    /// The current pruning bound on gamma.
    pub fn upper_bound_cost(&self) -> Cost {
        self.upper_bound_cost
    }

    /// Tighten the upper bound if `cost` improves on it.
    pub fn update_upper_bound_cost(&mut self, cost: Cost) {
        if cost < self.upper_bound_cost {
            self.upper_bound_cost = cost;
        }
    }

    fn update_minimum_reached(&mut self, cost: Cost) {
        if cost >= self.upper_bound_cost {
            self.min_reached = true;
        }
    }

    fn cost_bounds_exceeded(&self, cost: Cost, min_cost_bound: Option<Cost>) -> bool {
        if cost > self.upper_bound_cost {
            return true;
        }
        if let Some(bound) = min_cost_bound {
            if cost > bound {
                return true;
            }
        }
        false
    }

    /// Run until the next goal is found, the queue drains, or the
    /// backjump budget is exceeded. Returns `None` in the latter two
    /// cases; callers distinguish them via [`Self::min_reached`].
    #[instrument(skip(self, space))]
    pub fn pass(
        &mut self,
        space: &impl SearchSpace,
    ) -> CutSearchResult<Option<(SubCircuitsState, Cost)>> {
        let min_cost_bound = space.min_cost_bound();

        loop {
            let Some((state, cost, depth)) = self.queue.pop() else {
                self.min_reached = true;
                return Ok(None);
            };

            self.update_minimum_reached(cost);
            if self.cost_bounds_exceeded(cost, min_cost_bound) {
                return Ok(None);
            }

            self.stats.visited += 1;
            if let Some(prev) = self.prev_depth {
                if depth <= prev {
                    self.stats.backjumps += 1;
                    if self.stats.backjumps > self.max_backjumps {
                        debug!("backjump budget exceeded, stopping pass");
                        return Ok(None);
                    }
                }
            }
            self.prev_depth = Some(depth);

            if space.goal_test(&state) {
                self.penultimate_stats = self.prior_goal_stats;
                self.prior_goal_stats = self.stats;
                let bound = space.upper_bound_cost(&state);
                self.update_upper_bound_cost(bound);
                self.update_minimum_reached(cost);
                debug!(gamma = cost.gamma, "goal reached");
                return Ok(Some((state, cost)));
            }

            for successor in space.next_states(&state)? {
                let succ_cost = space.cost(&successor);
                self.stats.generated += 1;
                if succ_cost <= self.upper_bound_cost {
                    self.queue.push(successor, succ_cost, depth + 1);
                    self.stats.enqueued += 1;
                }
            }
        }
    }
}
