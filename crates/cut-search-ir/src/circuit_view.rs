//! The read-only circuit façade consumed by the cut search.
//!
//! Grounded directly in the reference `SimpleGateList`/`CircuitInterface`
//! design: a circuit view hands the search core numbered qubits and an
//! ordered list of multi-qubit gate occurrences, and later accepts cut
//! decisions and a partition assignment so it can export the cut circuit.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cut::CutKind;
use crate::error::{IrError, IrResult};
use crate::gate::Gate;
use crate::gate_spec::GateSpec;
use crate::qubit::{QubitId, WireId};

/// Read-only view the search core operates against.
pub trait CircuitView {
    /// Number of qubits in the original, uncut circuit.
    fn num_qubits(&self) -> usize;

    /// Multi-qubit gate occurrences, in original program order. Barriers
    /// and single-qubit gates are excluded.
    fn multi_qubit_gates(&self) -> &[GateSpec];

    /// Record that `gate_index`'s gate was decided with cut kind `kind`.
    fn record_cut(&mut self, gate_index: usize, kind: CutKind) -> IrResult<()>;

    /// Assign every wire to exactly one partition. `partitions[i]` lists
    /// the wires belonging to sub-circuit `i`.
    fn define_partitions(&mut self, partitions: Vec<Vec<WireId>>) -> IrResult<()>;

    /// Total wire count, including wires allocated by cuts.
    fn num_wires(&self) -> usize;

    /// Allocate and return a fresh wire beyond the current count.
    fn allocate_wire(&mut self) -> WireId;
}

/// A decision recorded against one gate occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedCut {
    /// Index of the gate this decision was made for.
    pub gate_index: usize,
    /// The cut kind chosen.
    pub kind: CutKind,
}

/// A straightforward, in-memory [`CircuitView`] backed by a flat gate list.
#[derive(Debug, Clone, Default)]
pub struct SimpleGateList {
    num_qubits: usize,
    gates: Vec<GateSpec>,
    num_wires: usize,
    /// Maps a cut-allocated wire back to the wire it was split from, used
    /// to compute adjacency-preserving export order.
    wire_parent: FxHashMap<WireId, WireId>,
    cuts: Vec<RecordedCut>,
    partitions: Option<Vec<Vec<WireId>>>,
}

impl SimpleGateList {
    /// Build a view from a qubit count and the circuit's multi-qubit gate
    /// occurrences (already filtered to arity ≥ 2, non-barrier).
    pub fn new(num_qubits: usize, gates: Vec<GateSpec>) -> Self {
        Self {
            num_qubits,
            num_wires: num_qubits,
            gates,
            wire_parent: FxHashMap::default(),
            cuts: Vec::new(),
            partitions: None,
        }
    }

    /// Convenience constructor that derives the gate spec list from a flat
    /// list of gate occurrences, keeping only those with arity ≥ 2 and
    /// excluding barriers, and checks for duplicate operand qubits.
    pub fn from_gates(num_qubits: usize, occurrences: Vec<Gate>) -> IrResult<Self> {
        let mut gates = Vec::new();
        for (index, gate) in occurrences.into_iter().enumerate() {
            if gate.is_barrier() || gate.arity() < 2 {
                continue;
            }
            let mut seen = std::collections::HashSet::new();
            for &q in &gate.qubits {
                if !seen.insert(q) {
                    return Err(IrError::DuplicateQubit {
                        qubit: q,
                        gate_name: gate.name.clone(),
                        index,
                    });
                }
            }
            gates.push(GateSpec::new(index, gate));
        }
        Ok(Self::new(num_qubits, gates))
    }

    /// Decisions recorded so far, in the order they were made.
    pub fn recorded_cuts(&self) -> &[RecordedCut] {
        &self.cuts
    }

    /// Assigned partitions, if [`CircuitView::define_partitions`] has been
    /// called.
    pub fn partitions(&self) -> Option<&[Vec<WireId>]> {
        self.partitions.as_deref()
    }

    /// Fractional sort key placing cut-children adjacent to their parent
    /// wire: `floor(id) + 0.5 * frac(parent_key) + 0.5`, applied
    /// recursively for wires cut more than once.
    fn sort_key(&self, wire: WireId) -> f64 {
        match self.wire_parent.get(&wire) {
            Some(&parent) => {
                let p = self.sort_key(parent);
                p.trunc() + 0.5 * p.fract() + 0.5
            }
            None => wire.0 as f64,
        }
    }

    /// Export wires in the order cut-adjacency places them, each paired
    /// with the numeric name `name_mapping` assigns it.
    pub fn export_wire_order(&self, name_mapping: &FxHashMap<WireId, usize>) -> Vec<usize> {
        let mut wires: Vec<WireId> = (0..self.num_wires as u32).map(WireId).collect();
        wires.sort_by(|a, b| self.sort_key(*a).partial_cmp(&self.sort_key(*b)).unwrap());
        wires
            .into_iter()
            .map(|w| *name_mapping.get(&w).unwrap_or(&(w.0 as usize)))
            .collect()
    }

    /// Render the subcircuit assignment as one letter per wire (`'A'`,
    /// `'B'`, …), a diagnostic helper for tests and logs — never used for
    /// execution.
    pub fn export_subcircuits_as_string(&self) -> IrResult<String> {
        let partitions = self.partitions.as_ref().ok_or_else(|| {
            IrError::InvalidPartition("no partitions defined yet".to_string())
        })?;
        let mut labels = vec!['?'; self.num_wires];
        for (i, wires) in partitions.iter().enumerate() {
            let letter = char::from(b'A' + (i % 26) as u8);
            for &w in wires {
                let idx = w.0 as usize;
                if idx >= labels.len() {
                    return Err(IrError::WireNotFound(w.0));
                }
                labels[idx] = letter;
            }
        }
        Ok(labels.into_iter().collect())
    }
}

impl CircuitView for SimpleGateList {
    fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    fn multi_qubit_gates(&self) -> &[GateSpec] {
        &self.gates
    }

    fn record_cut(&mut self, gate_index: usize, kind: CutKind) -> IrResult<()> {
        if !self.gates.iter().any(|g| g.index == gate_index) {
            return Err(IrError::GateIndexOutOfRange {
                index: gate_index,
                len: self.gates.len(),
            });
        }
        self.cuts.push(RecordedCut { gate_index, kind });
        Ok(())
    }

    fn define_partitions(&mut self, partitions: Vec<Vec<WireId>>) -> IrResult<()> {
        let mut assigned = vec![false; self.num_wires];
        for group in &partitions {
            for &w in group {
                let idx = w.0 as usize;
                if idx >= assigned.len() {
                    return Err(IrError::WireNotFound(w.0));
                }
                if assigned[idx] {
                    return Err(IrError::InvalidPartition(format!(
                        "wire {w} assigned to more than one partition"
                    )));
                }
                assigned[idx] = true;
            }
        }
        if let Some(pos) = assigned.iter().position(|&a| !a) {
            return Err(IrError::InvalidPartition(format!(
                "wire {pos} not assigned to any partition"
            )));
        }
        self.partitions = Some(partitions);
        Ok(())
    }

    fn num_wires(&self) -> usize {
        self.num_wires
    }

    fn allocate_wire(&mut self) -> WireId {
        let new_wire = WireId(self.num_wires as u32);
        self.num_wires += 1;
        new_wire
    }
}

impl SimpleGateList {
    /// Allocate a wire cut from `parent`, recording the parent link used
    /// for export adjacency ordering.
    pub fn allocate_wire_cut(&mut self, parent: WireId) -> WireId {
        let child = self.allocate_wire();
        self.wire_parent.insert(child, parent);
        child
    }
}

/// Convenience: treat a bare qubit count and gate list as a gate spec
/// factory for tests and callers that do not need per-gate constraints.
pub fn qubit_pair(a: u32, b: u32) -> Vec<QubitId> {
    vec![QubitId(a), QubitId(b)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cx(index: usize, a: u32, b: u32) -> GateSpec {
        GateSpec::new(index, Gate::new("cx", qubit_pair(a, b)))
    }

    #[test]
    fn test_from_gates_filters_single_qubit_and_barriers() {
        let occurrences = vec![
            Gate::new("h", vec![QubitId(0)]),
            Gate::new("cx", qubit_pair(0, 1)),
            Gate::new("barrier", qubit_pair(0, 1)),
        ];
        let view = SimpleGateList::from_gates(2, occurrences).unwrap();
        assert_eq!(view.multi_qubit_gates().len(), 1);
        assert_eq!(view.multi_qubit_gates()[0].index, 1);
    }

    #[test]
    fn test_duplicate_qubit_rejected() {
        let occurrences = vec![Gate::new("cx", vec![QubitId(0), QubitId(0)])];
        let err = SimpleGateList::from_gates(2, occurrences).unwrap_err();
        assert!(matches!(err, IrError::DuplicateQubit { .. }));
    }

    #[test]
    fn test_record_cut_and_partitions() {
        let mut view = SimpleGateList::new(2, vec![cx(0, 0, 1)]);
        view.record_cut(0, CutKind::GateCut).unwrap();
        assert_eq!(view.recorded_cuts().len(), 1);

        view.define_partitions(vec![vec![WireId(0)], vec![WireId(1)]])
            .unwrap();
        assert_eq!(
            view.export_subcircuits_as_string().unwrap(),
            "AB".to_string()
        );
    }

    #[test]
    fn test_define_partitions_rejects_gap() {
        let mut view = SimpleGateList::new(2, vec![cx(0, 0, 1)]);
        let err = view.define_partitions(vec![vec![WireId(0)]]).unwrap_err();
        assert!(matches!(err, IrError::InvalidPartition(_)));
    }

    #[test]
    fn test_wire_cut_sort_key_keeps_child_adjacent() {
        let mut view = SimpleGateList::new(2, vec![cx(0, 0, 1)]);
        let child = view.allocate_wire_cut(WireId(0));
        assert_eq!(child, WireId(2));
        let key_parent = view.sort_key(WireId(0));
        let key_child = view.sort_key(child);
        let key_other = view.sort_key(WireId(1));
        assert!(key_parent < key_child);
        assert!(key_child < key_other);
    }
}
