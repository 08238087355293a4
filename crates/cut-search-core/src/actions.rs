//! The cut-action catalogue: state transitions for one decided gate.

use cut_search_ir::{CutConstraint, CutKind, GateSpec};

use crate::gamma::GammaFactors;
use crate::state::SubCircuitsState;

/// The group an action belongs to, used to enable/disable whole families
/// of actions via [`crate::settings::OptimizationSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionGroup {
    /// Actions applicable to two-qubit gates — the only arity supported by
    /// the current action implementations.
    TwoQubitGates,
    /// Reserved for gates with more than two qubits; no action currently
    /// populates this group.
    MultiqubitGates,
}

/// A cut action: a named transition from one [`SubCircuitsState`] to zero
/// or more successors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CutAction {
    /// Apply the gate unchanged, merging sub-circuits if needed.
    None,
    /// Sever the gate with a quasi-probability decomposition.
    GateCut,
    /// Split one of the gate's wires before applying it.
    WireCut,
    /// No-cost merge: the qubits already share a sub-circuit.
    AbsorbGate,
}

impl CutAction {
    /// All four actions, in a fixed, documented order.
    pub const ALL: [CutAction; 4] = [
        CutAction::None,
        CutAction::GateCut,
        CutAction::WireCut,
        CutAction::AbsorbGate,
    ];

    /// Stable action name, used in goal-state action trails.
    pub fn name(&self) -> &'static str {
        match self {
            CutAction::None => "None",
            CutAction::GateCut => "GateCut",
            CutAction::WireCut => "WireCut",
            CutAction::AbsorbGate => "AbsorbGate",
        }
    }

    /// The action group this action belongs to.
    pub fn group(&self) -> ActionGroup {
        ActionGroup::TwoQubitGates
    }

    /// The [`CutKind`] this action corresponds to, for constraint checks.
    pub fn kind(&self) -> CutKind {
        match self {
            CutAction::None => CutKind::None,
            CutAction::GateCut => CutKind::GateCut,
            CutAction::WireCut => CutKind::WireCut,
            CutAction::AbsorbGate => CutKind::AbsorbGate,
        }
    }

    /// Whether `constraints` permits this action on its gate.
    pub fn permitted_by(&self, constraints: &CutConstraint) -> bool {
        constraints.permits(self.kind())
    }

    /// Generate the successor states this action produces for `gate` in
    /// `state`, respecting `qpu_width`. Returns an empty vector if the
    /// action is infeasible (e.g. width would be exceeded, or the wire-cut
    /// budget is exhausted).
    ///
    /// Assumes `gate.gate.arity() == 2`; callers must reject wider gates
    /// before reaching this point (see [`crate::search_space`]).
    pub fn next_states(
        &self,
        state: &SubCircuitsState,
        gate: &GateSpec,
        qpu_width: u32,
        factors: GammaFactors,
    ) -> Vec<SubCircuitsState> {
        let a = gate.gate.qubits[0].0 as usize;
        let b = gate.gate.qubits[1].0 as usize;

        match self {
            CutAction::None => {
                if state.same_partition(a, b) {
                    vec![state.record_action(gate.index, self.name())]
                } else {
                    state
                        .merge(a, b, qpu_width)
                        .map(|s| s.record_action(gate.index, self.name()))
                        .into_iter()
                        .collect()
                }
            }
            CutAction::GateCut => {
                let next = state
                    .record_bell_pair(a, b)
                    .scale_gamma(factors.gate_cut, factors.gate_cut)
                    .record_action(gate.index, self.name());
                vec![next]
            }
            CutAction::WireCut => {
                let mut successors = Vec::with_capacity(2);
                for (cut_side, other_side) in [(a, b), (b, a)] {
                    let Some(with_wire) = state.push_wire() else {
                        continue;
                    };
                    let new_wire = with_wire.num_wires() - 1;
                    let _ = cut_side; // the severed side's history stays on its old wire
                    if let Some(merged) = with_wire.merge(new_wire, other_side, qpu_width) {
                        successors.push(
                            merged
                                .scale_gamma(factors.wire_cut_lb, factors.wire_cut_ub)
                                .record_action(gate.index, self.name()),
                        );
                    }
                }
                successors
            }
            CutAction::AbsorbGate => {
                if state.same_partition(a, b) {
                    vec![state.record_action(gate.index, self.name())]
                } else {
                    vec![]
                }
            }
        }
    }
}

/// The full action catalogue, filterable by enabled groups and per-gate
/// constraints.
pub struct ActionCatalogue;

impl ActionCatalogue {
    /// All actions belonging to `group`.
    pub fn get_group(group: ActionGroup) -> Vec<CutAction> {
        CutAction::ALL
            .into_iter()
            .filter(|a| a.group() == group)
            .collect()
    }

    /// Actions enabled for `gate`: intersection of the groups enabled in
    /// `enabled_groups` and the cut kinds `gate`'s constraints permit.
    pub fn filter(enabled_groups: &[ActionGroup], gate: &GateSpec) -> Vec<CutAction> {
        CutAction::ALL
            .into_iter()
            .filter(|a| enabled_groups.contains(&a.group()))
            .filter(|a| a.permitted_by(&gate.constraints))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cut_search_ir::{Gate, QubitId};

    fn cx_spec(index: usize) -> GateSpec {
        GateSpec::new(index, Gate::new("cx", vec![QubitId(0), QubitId(1)]))
    }

    #[test]
    fn test_none_merges_cross_partition() {
        let state = SubCircuitsState::initial(2, 0);
        let gate = cx_spec(0);
        let successors = CutAction::None.next_states(&state, &gate, 2, GammaFactors {
            gate_cut: 3.0,
            wire_cut_lb: 4.0,
            wire_cut_ub: 4.0,
        });
        assert_eq!(successors.len(), 1);
        assert!(successors[0].same_partition(0, 1));
    }

    #[test]
    fn test_none_rejected_when_width_exceeded() {
        let state = SubCircuitsState::initial(2, 0);
        let gate = cx_spec(0);
        let successors = CutAction::None.next_states(&state, &gate, 1, GammaFactors {
            gate_cut: 3.0,
            wire_cut_lb: 4.0,
            wire_cut_ub: 4.0,
        });
        assert!(successors.is_empty());
    }

    #[test]
    fn test_gate_cut_always_feasible_and_raises_gamma() {
        let state = SubCircuitsState::initial(2, 0);
        let gate = cx_spec(0);
        let successors = CutAction::GateCut.next_states(&state, &gate, 1, GammaFactors {
            gate_cut: 3.0,
            wire_cut_lb: 4.0,
            wire_cut_ub: 4.0,
        });
        assert_eq!(successors.len(), 1);
        assert_eq!(successors[0].lower_bound_gamma(), 3.0);
        assert!(!successors[0].same_partition(0, 1));
    }

    #[test]
    fn test_absorb_gate_requires_existing_partition() {
        let state = SubCircuitsState::initial(2, 0);
        let gate = cx_spec(0);
        let successors = CutAction::AbsorbGate.next_states(&state, &gate, 2, GammaFactors {
            gate_cut: 3.0,
            wire_cut_lb: 4.0,
            wire_cut_ub: 4.0,
        });
        assert!(successors.is_empty());

        let merged = state.merge(0, 1, 2).unwrap();
        let successors = CutAction::AbsorbGate.next_states(&merged, &gate, 2, GammaFactors {
            gate_cut: 3.0,
            wire_cut_lb: 4.0,
            wire_cut_ub: 4.0,
        });
        assert_eq!(successors.len(), 1);
        assert_eq!(successors[0].lower_bound_gamma(), merged.lower_bound_gamma());
    }

    #[test]
    fn test_wire_cut_exhausted_budget_yields_no_successors() {
        let state = SubCircuitsState::initial(2, 0);
        let gate = cx_spec(0);
        let successors = CutAction::WireCut.next_states(&state, &gate, 2, GammaFactors {
            gate_cut: 3.0,
            wire_cut_lb: 4.0,
            wire_cut_ub: 4.0,
        });
        assert!(successors.is_empty());
    }

    #[test]
    fn test_wire_cut_produces_candidate_per_side() {
        let state = SubCircuitsState::initial(2, 2);
        let gate = cx_spec(0);
        let successors = CutAction::WireCut.next_states(&state, &gate, 2, GammaFactors {
            gate_cut: 3.0,
            wire_cut_lb: 4.0,
            wire_cut_ub: 4.0,
        });
        assert_eq!(successors.len(), 2);
        for s in &successors {
            assert_eq!(s.lower_bound_gamma(), 4.0);
            assert_eq!(s.num_wires(), 3);
        }
    }
}
