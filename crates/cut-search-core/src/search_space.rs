//! The five callbacks that parameterize the best-first search engine.
//!
//! Bundled the way the compiler framework bundles a unit of work behind a
//! trait ([`crate::pass`] in spirit): the engine stays generic over any
//! problem that can produce a cost, an upper bound, a stopping bound,
//! successors, and a goal test.

use crate::cost::Cost;
use crate::error::CutSearchResult;
use crate::state::SubCircuitsState;

/// A problem definition the [`crate::engine::BestFirstSearch`] can explore.
pub trait SearchSpace {
    /// The state's ordering cost: `(gamma_lb, max_width)`.
    fn cost(&self, state: &SubCircuitsState) -> Cost;

    /// The pruning bound derived from a (goal) state: `(gamma_ub, inf)`.
    fn upper_bound_cost(&self, state: &SubCircuitsState) -> Cost;

    /// A fixed stopping bound derived from settings, if any.
    fn min_cost_bound(&self) -> Option<Cost>;

    /// Expand `state` into its successors, or an error if a gate cannot be
    /// processed under the current action catalogue.
    fn next_states(&self, state: &SubCircuitsState) -> CutSearchResult<Vec<SubCircuitsState>>;

    /// Whether `state` is a goal (every gate has been decided).
    fn goal_test(&self, state: &SubCircuitsState) -> bool;
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// A trivial search space over a single integer counter, used to
    /// exercise [`crate::engine::BestFirstSearch`] independent of the
    /// quantum-circuit domain.
    pub struct CountdownSpace {
        pub target: usize,
    }

    impl SearchSpace for CountdownSpace {
        fn cost(&self, state: &SubCircuitsState) -> Cost {
            Cost::new(state.search_level() as f64, 0)
        }

        fn upper_bound_cost(&self, state: &SubCircuitsState) -> Cost {
            Cost::gamma_only(state.search_level() as f64)
        }

        fn min_cost_bound(&self) -> Option<Cost> {
            None
        }

        fn next_states(&self, state: &SubCircuitsState) -> CutSearchResult<Vec<SubCircuitsState>> {
            if state.search_level() >= self.target {
                return Ok(vec![]);
            }
            Ok(vec![state.record_action(state.search_level(), "Tick")])
        }

        fn goal_test(&self, state: &SubCircuitsState) -> bool {
            state.search_level() >= self.target
        }
    }
}
