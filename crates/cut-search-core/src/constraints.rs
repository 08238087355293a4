//! Device constraints: the QPU width budget the search must respect.

use crate::error::{CutSearchError, CutSearchResult};

/// Immutable description of the target device(s) a cut circuit must fit.
///
/// Grounded on the reference `QuantumDeviceConstraints` record: a flat pair
/// of positive integers, validated once at construction so every later
/// consumer can treat the value as trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceConstraints {
    qubits_per_qpu: u32,
    num_qpus: u32,
}

impl DeviceConstraints {
    /// Build device constraints, rejecting non-positive values.
    pub fn new(qubits_per_qpu: u32, num_qpus: u32) -> CutSearchResult<Self> {
        if qubits_per_qpu < 1 {
            return Err(CutSearchError::InvalidConfig(
                "qubits_per_qpu must be at least 1".to_string(),
            ));
        }
        if num_qpus < 1 {
            return Err(CutSearchError::InvalidConfig(
                "num_qpus must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            qubits_per_qpu,
            num_qpus,
        })
    }

    /// Number of qubits available on a single QPU.
    pub fn qubits_per_qpu(&self) -> u32 {
        self.qubits_per_qpu
    }

    /// Number of QPUs available.
    pub fn num_qpus(&self) -> u32 {
        self.num_qpus
    }

    /// The per-partition width budget a sub-circuit must not exceed.
    pub fn qpu_width(&self) -> u32 {
        self.qubits_per_qpu
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_constraints() {
        let c = DeviceConstraints::new(4, 2).unwrap();
        assert_eq!(c.qpu_width(), 4);
        assert_eq!(c.num_qpus(), 2);
    }

    #[test]
    fn test_zero_width_rejected() {
        assert!(DeviceConstraints::new(0, 2).is_err());
    }

    #[test]
    fn test_zero_qpus_rejected() {
        assert!(DeviceConstraints::new(4, 0).is_err());
    }
}
