//! Error types for the cut search core.

use thiserror::Error;

/// Errors that can occur while configuring or running a cut search.
///
/// Exhaustion of the search space and exceeding the backjump budget are
/// *not* represented here: both are expected outcomes, observed by the
/// caller through [`crate::driver::CutOptimizationDriver::pass`] returning
/// `None` together with `min_reached()`/`stats()`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CutSearchError {
    /// Device constraints or optimization settings failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A gate occurrence has an arity the current action catalogue cannot
    /// handle (only two-qubit gates support cutting).
    #[error("unsupported gate '{gate_name}' at index {index}: arity {arity} (only 2-qubit gates can be cut)")]
    UnsupportedGate {
        /// Name of the offending gate.
        gate_name: String,
        /// Index of the offending gate in the multi-qubit gate list.
        index: usize,
        /// The gate's arity.
        arity: usize,
    },

    /// An action name referenced by [`crate::settings::OptimizationSettings`]
    /// is not a member of any known action group.
    #[error("unknown action group: {0}")]
    UnknownActionGroup(String),

    /// The circuit-view IR layer reported an error.
    #[error(transparent)]
    Ir(#[from] cut_search_ir::IrError),
}

/// Result type for cut search operations.
pub type CutSearchResult<T> = Result<T, CutSearchError>;
