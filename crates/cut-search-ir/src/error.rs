//! Error types for the IR crate.

use thiserror::Error;

use crate::qubit::QubitId;

/// Errors that can occur while building or querying a circuit view.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// A gate occurrence repeats the same qubit in its operand list.
    #[error("duplicate qubit {qubit} in gate '{gate_name}' at index {index}")]
    DuplicateQubit {
        /// The repeated qubit.
        qubit: QubitId,
        /// Name of the offending gate.
        gate_name: String,
        /// Index of the offending gate in the gate list.
        index: usize,
    },

    /// A cut was requested at an index outside the gate list.
    #[error("gate index {index} out of range (circuit has {len} multi-qubit gates)")]
    GateIndexOutOfRange {
        /// The out-of-range index.
        index: usize,
        /// Number of multi-qubit gates in the circuit.
        len: usize,
    },

    /// A wire ID referenced in a partition definition does not exist.
    #[error("wire {0} not found")]
    WireNotFound(u32),

    /// A partition assignment left one or more wires unassigned, or
    /// assigned a wire to more than one partition.
    #[error("invalid partition definition: {0}")]
    InvalidPartition(String),
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
