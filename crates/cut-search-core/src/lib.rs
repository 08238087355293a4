//! Cut-search core: a best-first search for low-overhead circuit cuts.
//!
//! Given a narrow circuit view (numbered qubits, an ordered multi-qubit
//! gate list with optional per-gate cut constraints) and a target device's
//! width budget, this crate searches for the cheapest combination of gate
//! cuts, wire cuts, and no-cost absorptions that partitions the circuit
//! into sub-circuits no wider than the device allows.
//!
//! # Architecture
//!
//! ```text
//! CircuitView + DeviceConstraints + OptimizationSettings
//!       │
//!       ▼
//! ┌───────────────────────┐
//! │ CutOptimizationDriver │ ◄── greedy pre-pass seeds the upper bound
//! └───────────────────────┘
//!       │
//!       ├── BestFirstSearch  (priority queue, bounds, backjump accounting)
//!       ├── SubCircuitsState (union-find partition, gamma bounds, width)
//!       └── CutAction        (None, GateCut, WireCut, AbsorbGate)
//! ```
//!
//! # Example
//!
//! ```rust
//! use cut_search_core::{CutOptimizationDriver, DeviceConstraints, OptimizationSettings};
//! use cut_search_ir::{Gate, QubitId, SimpleGateList};
//!
//! let circuit = SimpleGateList::from_gates(
//!     2,
//!     vec![Gate::new("cx", vec![QubitId(0), QubitId(1)])],
//! )
//! .unwrap();
//!
//! let constraints = DeviceConstraints::new(1, 1).unwrap();
//! let settings = OptimizationSettings::default_for_two_qubit_gates(0);
//! let mut driver = CutOptimizationDriver::new(&circuit, constraints, settings).unwrap();
//!
//! let (goal, cost) = driver.pass().unwrap().expect("a goal must exist");
//! assert_eq!(cost.gamma, 3.0);
//! ```

pub mod actions;
pub mod constraints;
pub mod cost;
pub mod driver;
pub mod engine;
pub mod error;
pub mod gamma;
pub mod queue;
pub mod search_space;
pub mod settings;
pub mod state;

pub use actions::{ActionCatalogue, ActionGroup, CutAction};
pub use constraints::DeviceConstraints;
pub use cost::Cost;
pub use driver::CutOptimizationDriver;
pub use engine::{BestFirstSearch, Stats};
pub use error::{CutSearchError, CutSearchResult};
pub use gamma::{factors_for, GammaFactors};
pub use queue::PriorityQueue;
pub use search_space::SearchSpace;
pub use settings::OptimizationSettings;
pub use state::{ActionRecord, SubCircuitsState};
