//! Circuit-view intermediate representation for the cut search core.
//!
//! This crate provides just enough circuit structure for the search core to
//! operate on: numbered qubits and wires, multi-qubit gate occurrences with
//! optional per-gate cut constraints, and a read-only [`CircuitView`] the
//! search consumes. Gate semantics (unitaries, parameters, decompositions)
//! belong to the host circuit library and are out of scope here.
//!
//! # Example
//!
//! ```rust
//! use cut_search_ir::{CircuitView, Gate, QubitId, SimpleGateList};
//!
//! let occurrences = vec![
//!     Gate::new("cx", vec![QubitId(0), QubitId(1)]),
//!     Gate::new("cx", vec![QubitId(1), QubitId(2)]),
//! ];
//! let view = SimpleGateList::from_gates(3, occurrences).unwrap();
//! assert_eq!(view.num_qubits(), 3);
//! assert_eq!(view.multi_qubit_gates().len(), 2);
//! ```

pub mod circuit_view;
pub mod cut;
pub mod error;
pub mod gate;
pub mod gate_spec;
pub mod name_map;
pub mod qubit;

pub use circuit_view::{CircuitView, RecordedCut, SimpleGateList};
pub use cut::{CutConstraint, CutKind};
pub use error::{IrError, IrResult};
pub use gate::Gate;
pub use gate_spec::GateSpec;
pub use name_map::NameToIdMap;
pub use qubit::{QubitId, WireId};
