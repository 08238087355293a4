//! Wires the circuit view, constraints, and settings into a resumable
//! cut-optimization search.

use tracing::{info, instrument};

use cut_search_ir::{CircuitView, GateSpec};

use crate::actions::ActionCatalogue;
use crate::constraints::DeviceConstraints;
use crate::cost::Cost;
use crate::engine::{BestFirstSearch, Stats};
use crate::error::CutSearchResult;
use crate::gamma::factors_for;
use crate::search_space::SearchSpace;
use crate::settings::OptimizationSettings;
use crate::state::SubCircuitsState;

/// The cut-optimization problem definition: a fixed gate list plus the
/// device width and gamma budget it must respect.
#[derive(Debug)]
struct CutOptimizationSpace {
    gates: Vec<GateSpec>,
    qpu_width: u32,
    max_gamma: f64,
    enabled_groups: Vec<crate::actions::ActionGroup>,
}

impl SearchSpace for CutOptimizationSpace {
    fn cost(&self, state: &SubCircuitsState) -> Cost {
        Cost::new(state.lower_bound_gamma(), state.max_width())
    }

    fn upper_bound_cost(&self, state: &SubCircuitsState) -> Cost {
        Cost::gamma_only(state.upper_bound_gamma())
    }

    fn min_cost_bound(&self) -> Option<Cost> {
        self.max_gamma.is_finite().then(|| Cost::gamma_only(self.max_gamma))
    }

    fn next_states(&self, state: &SubCircuitsState) -> CutSearchResult<Vec<SubCircuitsState>> {
        let level = state.search_level();
        let Some(gate) = self.gates.get(level) else {
            return Ok(vec![]);
        };
        if gate.gate.arity() != 2 {
            return Err(crate::error::CutSearchError::UnsupportedGate {
                gate_name: gate.gate.name.clone(),
                index: gate.index,
                arity: gate.gate.arity(),
            });
        }
        let factors = factors_for(&gate.gate.name);
        let actions = ActionCatalogue::filter(&self.enabled_groups, gate);
        Ok(actions
            .into_iter()
            .flat_map(|action| action.next_states(state, gate, self.qpu_width, factors))
            .collect())
    }

    fn goal_test(&self, state: &SubCircuitsState) -> bool {
        state.is_goal(self.gates.len())
    }
}

/// Greedily walk to a goal by always taking the cheapest successor at each
/// step, with no backtracking. Used to seed the full search's upper bound.
fn greedy_cut_optimization(
    space: &CutOptimizationSpace,
    mut state: SubCircuitsState,
) -> CutSearchResult<Option<(SubCircuitsState, Cost)>> {
    loop {
        if space.goal_test(&state) {
            let cost = space.cost(&state);
            return Ok(Some((state, cost)));
        }
        let successors = space.next_states(&state)?;
        let best = successors
            .into_iter()
            .min_by(|a, b| space.cost(a).cmp(&space.cost(b)));
        match best {
            Some(next) => state = next,
            None => return Ok(None),
        }
    }
}

fn max_wire_cuts_from_gamma(gamma_ub_seed: f64) -> usize {
    if !gamma_ub_seed.is_finite() {
        return usize::MAX;
    }
    let bound = ((gamma_ub_seed + 1.0).log2() - 1.0).ceil();
    if bound <= 0.0 {
        0
    } else {
        bound as usize
    }
}

/// Drives a resumable cut-optimization search over a circuit view.
#[derive(Debug)]
pub struct CutOptimizationDriver {
    space: CutOptimizationSpace,
    engine: BestFirstSearch,
    greedy_goal: Option<(SubCircuitsState, Cost)>,
    returned_any: bool,
}

impl CutOptimizationDriver {
    /// Build a driver for `circuit` under `constraints`, tuned by
    /// `settings`. Runs the greedy pre-pass immediately to seed the
    /// engine's upper bound and derive the wire-cut budget.
    #[instrument(skip(circuit, constraints, settings))]
    pub fn new(
        circuit: &dyn CircuitView,
        constraints: DeviceConstraints,
        settings: OptimizationSettings,
    ) -> CutSearchResult<Self> {
        let gates = circuit.multi_qubit_gates().to_vec();
        let num_qubits = circuit.num_qubits();
        let total_arity: usize = gates.iter().map(|g| g.gate.arity()).sum();

        let space = CutOptimizationSpace {
            gates,
            qpu_width: constraints.qpu_width(),
            max_gamma: settings.max_gamma(),
            enabled_groups: settings.enabled_groups().to_vec(),
        };

        // Greedy pre-pass: unconstrained wire budget, since the real
        // budget is derived from its result.
        let greedy_initial = SubCircuitsState::initial(num_qubits, total_arity);
        let greedy_goal = greedy_cut_optimization(&space, greedy_initial)?;

        let gamma_ub_seed = greedy_goal
            .as_ref()
            .map(|(state, _)| state.upper_bound_gamma())
            .unwrap_or(settings.max_gamma());
        let max_wire_cuts = total_arity.min(max_wire_cuts_from_gamma(gamma_ub_seed));

        info!(
            total_arity,
            max_wire_cuts,
            had_greedy_goal = greedy_goal.is_some(),
            "cut-optimization driver initialized"
        );

        let initial = SubCircuitsState::initial(num_qubits, max_wire_cuts);
        let mut engine = BestFirstSearch::new(initial, &space, settings.seed(), settings.max_backjumps());
        if let Some((goal, _)) = &greedy_goal {
            engine.update_upper_bound_cost(space.upper_bound_cost(goal));
        }

        Ok(Self {
            space,
            engine,
            greedy_goal,
            returned_any: false,
        })
    }

    /// Return the next goal state in non-decreasing cost order, or `None`
    /// once the search is exhausted.
    pub fn pass(&mut self) -> CutSearchResult<Option<(SubCircuitsState, Cost)>> {
        if let Some(result) = self.engine.pass(&self.space)? {
            self.returned_any = true;
            return Ok(Some(result));
        }
        if !self.returned_any {
            self.returned_any = true;
            return Ok(self.greedy_goal.take());
        }
        Ok(None)
    }

    /// Whether the engine has exhausted its bound.
    pub fn min_reached(&self) -> bool {
        self.engine.min_reached()
    }

    /// Current or penultimate search statistics.
    pub fn stats(&self, penultimate: bool) -> Stats {
        self.engine.stats(penultimate)
    }

    /// The current pruning bound on gamma.
    pub fn upper_bound_cost(&self) -> Cost {
        self.engine.upper_bound_cost()
    }

    /// Tighten the pruning bound externally.
    pub fn update_upper_bound_cost(&mut self, cost: Cost) {
        self.engine.update_upper_bound_cost(cost);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cut_search_ir::{Gate, QubitId, SimpleGateList};

    fn single_cx() -> SimpleGateList {
        SimpleGateList::from_gates(2, vec![Gate::new("cx", vec![QubitId(0), QubitId(1)])]).unwrap()
    }

    #[test]
    fn test_single_cx_width_one_forces_gate_cut() {
        let circuit = single_cx();
        let constraints = DeviceConstraints::new(1, 1).unwrap();
        let settings = OptimizationSettings::default_for_two_qubit_gates(0);
        let mut driver = CutOptimizationDriver::new(&circuit, constraints, settings).unwrap();

        let (goal, cost) = driver.pass().unwrap().expect("a goal must exist");
        assert_eq!(cost.gamma, 3.0);
        assert_eq!(goal.actions().len(), 1);
        assert_eq!(goal.actions()[0].action, "GateCut");
    }

    #[test]
    fn test_two_disjoint_cx_width_two_needs_no_cut() {
        let circuit = SimpleGateList::from_gates(
            4,
            vec![
                Gate::new("cx", vec![QubitId(0), QubitId(1)]),
                Gate::new("cx", vec![QubitId(2), QubitId(3)]),
            ],
        )
        .unwrap();
        let constraints = DeviceConstraints::new(2, 2).unwrap();
        let settings = OptimizationSettings::default_for_two_qubit_gates(0);
        let mut driver = CutOptimizationDriver::new(&circuit, constraints, settings).unwrap();

        let (goal, cost) = driver.pass().unwrap().expect("a goal must exist");
        assert_eq!(cost.gamma, 1.0);
        assert!(goal.same_partition(0, 1));
        assert!(goal.same_partition(2, 3));
        assert!(!goal.same_partition(0, 2));
    }

    #[test]
    fn test_max_gamma_budget_forces_exhaustion() {
        let circuit = single_cx();
        let constraints = DeviceConstraints::new(1, 1).unwrap();
        let settings = OptimizationSettings::new(1.0, u64::MAX, 0, vec![crate::actions::ActionGroup::TwoQubitGates]).unwrap();
        let mut driver = CutOptimizationDriver::new(&circuit, constraints, settings).unwrap();

        assert!(driver.pass().unwrap().is_none());
        assert!(driver.min_reached());
    }

    #[test]
    fn test_seeded_reproducibility() {
        let settings = || OptimizationSettings::default_for_two_qubit_gates(42);
        let constraints = DeviceConstraints::new(1, 1).unwrap();

        let circuit_a = single_cx();
        let mut driver_a = CutOptimizationDriver::new(&circuit_a, constraints, settings()).unwrap();
        let circuit_b = single_cx();
        let mut driver_b = CutOptimizationDriver::new(&circuit_b, constraints, settings()).unwrap();

        assert_eq!(
            driver_a.pass().unwrap().map(|(_, c)| c.gamma),
            driver_b.pass().unwrap().map(|(_, c)| c.gamma)
        );
    }

    #[test]
    fn test_unsupported_gate_arity_errors() {
        let circuit = SimpleGateList::from_gates(
            3,
            vec![Gate::new("ccx", vec![QubitId(0), QubitId(1), QubitId(2)])],
        )
        .unwrap();
        let constraints = DeviceConstraints::new(2, 2).unwrap();
        let settings = OptimizationSettings::default_for_two_qubit_gates(0);
        let err = CutOptimizationDriver::new(&circuit, constraints, settings).unwrap_err();

        assert!(matches!(
            err,
            crate::error::CutSearchError::UnsupportedGate { .. }
        ));
    }
}
