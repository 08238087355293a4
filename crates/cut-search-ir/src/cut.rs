//! Cut kinds and per-gate cut constraints.

use serde::{Deserialize, Serialize};

/// The kind of action that can be taken on a gate during cut search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CutKind {
    /// Apply the gate unchanged; may merge two sub-circuits.
    None,
    /// Sever the gate with a quasi-probability decomposition.
    GateCut,
    /// Split one of the gate's wires before applying it.
    WireCut,
    /// Merge with no cost because the qubits already share a sub-circuit.
    AbsorbGate,
}

/// The set of cut kinds a particular gate occurrence may use.
///
/// Mirrors a per-gate annotation supplied by the circuit view: most gates
/// are unconstrained, but a caller may forbid cutting a gate entirely, or
/// restrict it to a specific subset of [`CutKind`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CutConstraint {
    /// Any [`CutKind`] is permitted.
    Unconstrained,
    /// Only [`CutKind::None`] is permitted — the gate can never be cut.
    NoCut,
    /// Exactly the listed kinds are permitted.
    Allowed(Vec<CutKind>),
}

impl CutConstraint {
    /// Whether `kind` is permitted under this constraint.
    pub fn permits(&self, kind: CutKind) -> bool {
        match self {
            CutConstraint::Unconstrained => true,
            CutConstraint::NoCut => kind == CutKind::None,
            CutConstraint::Allowed(kinds) => kinds.contains(&kind),
        }
    }
}

impl Default for CutConstraint {
    fn default() -> Self {
        CutConstraint::Unconstrained
    }
}
