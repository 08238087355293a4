//! A single entry in a circuit view's gate list.

use serde::{Deserialize, Serialize};

use crate::cut::CutConstraint;
use crate::gate::Gate;

/// One multi-qubit gate occurrence, as handed to the search core.
///
/// `index` is the occurrence's position in the original circuit, preserved
/// so that cut decisions can be replayed back into the circuit view's
/// action trail regardless of the order the search visits gates in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateSpec {
    /// Position in the original gate list.
    pub index: usize,
    /// The gate occurrence.
    pub gate: Gate,
    /// The cut kinds permitted for this occurrence.
    pub constraints: CutConstraint,
}

impl GateSpec {
    /// Create a new gate spec with the default (unconstrained) constraint.
    pub fn new(index: usize, gate: Gate) -> Self {
        Self {
            index,
            gate,
            constraints: CutConstraint::default(),
        }
    }

    /// Create a new gate spec with an explicit constraint.
    pub fn with_constraints(index: usize, gate: Gate, constraints: CutConstraint) -> Self {
        Self {
            index,
            gate,
            constraints,
        }
    }
}
