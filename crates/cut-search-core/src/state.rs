//! The search vertex: a partition of wires into width-bounded sub-circuits.

use rustc_hash::FxHashMap;

/// One entry in a goal state's solution trail.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionRecord {
    /// Index of the gate this decision was made for.
    pub gate_index: usize,
    /// Stable name of the action taken, e.g. `"GateCut"`.
    pub action: &'static str,
}

/// A partition of wires into sub-circuits, with running gamma bounds.
///
/// Wires are addressed by plain `usize` indices matching
/// `cut_search_ir::WireId::0 as usize`; the core never needs the newtype's
/// display/serde machinery, only a dense integer range it can index arrays
/// with. The union-find (`parent`) uses path compression on every merge,
/// so `find` stays cheap even on deep cut chains.
#[derive(Debug, Clone, PartialEq)]
pub struct SubCircuitsState {
    parent: Vec<usize>,
    width: FxHashMap<usize, u32>,
    max_wire_cuts: usize,
    wire_cuts_used: usize,
    gamma_lb: f64,
    gamma_ub: f64,
    bell_pairs: Vec<(usize, usize)>,
    search_level: usize,
    actions: Vec<ActionRecord>,
}

impl SubCircuitsState {
    /// The initial state: every qubit is its own sub-circuit, gamma is 1.
    pub fn initial(num_qubits: usize, max_wire_cuts: usize) -> Self {
        let parent: Vec<usize> = (0..num_qubits).collect();
        let width = parent.iter().map(|&w| (w, 1u32)).collect();
        Self {
            parent,
            width,
            max_wire_cuts,
            wire_cuts_used: 0,
            gamma_lb: 1.0,
            gamma_ub: 1.0,
            bell_pairs: Vec::new(),
            search_level: 0,
            actions: Vec::new(),
        }
    }

    /// Find the root sub-circuit a wire currently belongs to.
    pub fn find(&self, wire: usize) -> usize {
        let mut root = wire;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        root
    }

    fn compress_path(&mut self, wire: usize, root: usize) {
        let mut cur = wire;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
    }

    /// Whether `a` and `b` currently sit in the same sub-circuit.
    pub fn same_partition(&self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Current width of the sub-circuit `wire` belongs to.
    pub fn width_of(&self, wire: usize) -> u32 {
        let root = self.find(wire);
        *self.width.get(&root).unwrap_or(&1)
    }

    /// The widest sub-circuit currently in the state.
    pub fn max_width(&self) -> u32 {
        self.width.values().copied().max().unwrap_or(1)
    }

    /// Lower bound on the accumulated gamma.
    pub fn lower_bound_gamma(&self) -> f64 {
        self.gamma_lb
    }

    /// Upper bound on the accumulated gamma.
    pub fn upper_bound_gamma(&self) -> f64 {
        self.gamma_ub
    }

    /// Number of gates already decided.
    pub fn search_level(&self) -> usize {
        self.search_level
    }

    /// Number of wires currently tracked (original qubits plus cut wires).
    pub fn num_wires(&self) -> usize {
        self.parent.len()
    }

    /// Remaining wire-cut budget.
    pub fn wire_cuts_remaining(&self) -> usize {
        self.max_wire_cuts - self.wire_cuts_used
    }

    /// Decided actions so far, in the order they were taken.
    pub fn actions(&self) -> &[ActionRecord] {
        &self.actions
    }

    /// Whether every gate up to `num_gates` has been decided.
    pub fn is_goal(&self, num_gates: usize) -> bool {
        self.search_level >= num_gates
    }

    /// Merge the sub-circuits containing `a` and `b`, rejecting the merge
    /// if the combined width would exceed `qpu_width`. A no-op (returns a
    /// clone of `self`) if `a` and `b` already share a sub-circuit.
    pub fn merge(&self, a: usize, b: usize, qpu_width: u32) -> Option<Self> {
        let mut next = self.clone();
        let ra = next.find(a);
        let rb = next.find(b);
        if ra == rb {
            return Some(next);
        }
        let wa = *next.width.get(&ra).unwrap_or(&1);
        let wb = *next.width.get(&rb).unwrap_or(&1);
        if wa + wb > qpu_width {
            return None;
        }
        let (new_root, old_root) = if wa >= wb { (ra, rb) } else { (rb, ra) };
        next.parent[old_root] = new_root;
        next.compress_path(a, new_root);
        next.compress_path(b, new_root);
        next.width.remove(&old_root);
        next.width.insert(new_root, wa + wb);
        Some(next)
    }

    /// Allocate a new singleton wire, consuming one unit of wire-cut
    /// budget. Returns `None` if the budget is exhausted.
    pub fn push_wire(&self) -> Option<Self> {
        if self.wire_cuts_remaining() == 0 {
            return None;
        }
        let mut next = self.clone();
        let new_wire = next.parent.len();
        next.parent.push(new_wire);
        next.width.insert(new_wire, 1);
        next.wire_cuts_used += 1;
        Some(next)
    }

    /// Scale both gamma bounds by the given factors.
    pub fn scale_gamma(&self, lb_factor: f64, ub_factor: f64) -> Self {
        let mut next = self.clone();
        next.gamma_lb *= lb_factor;
        next.gamma_ub *= ub_factor;
        next
    }

    /// Record a gate cut's cross-partition root pair.
    pub fn record_bell_pair(&self, a: usize, b: usize) -> Self {
        let mut next = self.clone();
        let ra = next.find(a);
        let rb = next.find(b);
        let pair = if ra <= rb { (ra, rb) } else { (rb, ra) };
        next.bell_pairs.push(pair);
        next
    }

    /// Cross-partition root pairs recorded by gate cuts.
    pub fn bell_pairs(&self) -> &[(usize, usize)] {
        &self.bell_pairs
    }

    /// Append `action` to the solution trail and advance past the gate at
    /// `gate_index`.
    pub fn record_action(&self, gate_index: usize, action: &'static str) -> Self {
        let mut next = self.clone();
        next.actions.push(ActionRecord { gate_index, action });
        next.search_level += 1;
        next
    }
}
