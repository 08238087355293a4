//! Qubit and wire identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a qubit in the original, uncut circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QubitId(pub u32);

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

impl From<usize> for QubitId {
    fn from(id: usize) -> Self {
        QubitId(u32::try_from(id).expect("QubitId overflow: exceeds u32::MAX"))
    }
}

/// Unique identifier for a wire.
///
/// Wires start out in 1:1 correspondence with qubits (`WireId(q.0) == q`'s
/// wire) but a wire cut allocates a fresh [`WireId`] beyond the original
/// qubit count, so `WireId` and [`QubitId`] diverge once cuts are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WireId(pub u32);

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}

impl From<u32> for WireId {
    fn from(id: u32) -> Self {
        WireId(id)
    }
}

impl From<QubitId> for WireId {
    fn from(id: QubitId) -> Self {
        WireId(id.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qubit_display() {
        let q = QubitId(3);
        assert_eq!(format!("{q}"), "q3");
    }

    #[test]
    fn test_wire_from_qubit() {
        let q = QubitId(2);
        let w: WireId = q.into();
        assert_eq!(w, WireId(2));
    }
}
