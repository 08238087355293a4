//! Gate identity as seen by the cut search: a name and an operand list.
//!
//! The host circuit library owns gate semantics (unitary matrices,
//! parameters, decompositions); this crate only needs enough to index into
//! a cut-factor table and to know which wires a gate touches.

use serde::{Deserialize, Serialize};

use crate::qubit::QubitId;

/// A gate occurrence: its name and the qubits it acts on, in operand order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gate {
    /// Gate name, e.g. `"cx"`, `"rzz"`, `"barrier"`.
    pub name: String,
    /// Operand qubits, in original program order.
    pub qubits: Vec<QubitId>,
}

impl Gate {
    /// Create a new gate occurrence.
    pub fn new(name: impl Into<String>, qubits: Vec<QubitId>) -> Self {
        Self {
            name: name.into(),
            qubits,
        }
    }

    /// Number of qubits this occurrence acts on.
    pub fn arity(&self) -> usize {
        self.qubits.len()
    }

    /// Whether this is a two-qubit gate, the only arity the current cut
    /// actions support.
    pub fn is_two_qubit(&self) -> bool {
        self.arity() == 2
    }

    /// Whether this occurrence is a barrier directive rather than an
    /// operation: barriers are never candidates for cutting.
    pub fn is_barrier(&self) -> bool {
        self.name == "barrier"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_arity() {
        let cx = Gate::new("cx", vec![QubitId(0), QubitId(1)]);
        assert_eq!(cx.arity(), 2);
        assert!(cx.is_two_qubit());
        assert!(!cx.is_barrier());
    }

    #[test]
    fn test_barrier_detection() {
        let b = Gate::new("barrier", vec![QubitId(0), QubitId(1), QubitId(2)]);
        assert!(b.is_barrier());
    }
}
