//! A bidirectional, gap-filling name-to-numeric-ID allocator.
//!
//! Lets a circuit view accept caller-supplied qubit names of any hashable
//! type while the search core continues to address wires by dense integer
//! ID. IDs are assigned on first use in increasing order, but a name may
//! also be pinned to an explicit ID ahead of time, leaving a gap that later
//! `get_id` calls fill in as they allocate.

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Allocates and looks up numeric IDs for arbitrary hashable names.
#[derive(Debug, Clone, Default)]
pub struct NameToIdMap<T> {
    name_to_id: FxHashMap<T, usize>,
    id_to_name: FxHashMap<usize, T>,
    next_id: usize,
}

impl<T: Eq + Hash + Clone> NameToIdMap<T> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            name_to_id: FxHashMap::default(),
            id_to_name: FxHashMap::default(),
            next_id: 0,
        }
    }

    /// Return `name`'s ID, allocating a fresh one (the smallest unused
    /// non-negative integer) if `name` has not been seen before.
    pub fn get_id(&mut self, name: &T) -> usize {
        if let Some(&id) = self.name_to_id.get(name) {
            return id;
        }
        while self.id_to_name.contains_key(&self.next_id) {
            self.next_id += 1;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.name_to_id.insert(name.clone(), id);
        self.id_to_name.insert(id, name.clone());
        id
    }

    /// Pin `name` to an explicit `id`, possibly leaving a gap that future
    /// [`Self::get_id`] calls will fill before allocating beyond `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is already assigned to a different name.
    pub fn define_id(&mut self, name: T, id: usize) {
        if let Some(existing) = self.id_to_name.get(&id) {
            assert!(
                *existing == name,
                "id already assigned to a different name"
            );
            return;
        }
        self.name_to_id.insert(name.clone(), id);
        self.id_to_name.insert(id, name);
    }

    /// Look up the name assigned to `id`, if any.
    pub fn get_name(&self, id: usize) -> Option<&T> {
        self.id_to_name.get(&id)
    }

    /// Number of distinct names registered.
    pub fn num_items(&self) -> usize {
        self.name_to_id.len()
    }

    /// Smallest array length that can be indexed by every assigned ID.
    pub fn array_size_needed(&self) -> usize {
        self.id_to_name.keys().map(|id| id + 1).max().unwrap_or(0)
    }

    /// All registered names, in unspecified order.
    pub fn items(&self) -> impl Iterator<Item = (&T, &usize)> {
        self.name_to_id.iter()
    }

    /// All assigned IDs, in unspecified order.
    pub fn ids(&self) -> impl Iterator<Item = &usize> {
        self.id_to_name.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_allocation() {
        let mut map: NameToIdMap<String> = NameToIdMap::new();
        assert_eq!(map.get_id(&"a".to_string()), 0);
        assert_eq!(map.get_id(&"b".to_string()), 1);
        assert_eq!(map.get_id(&"a".to_string()), 0);
        assert_eq!(map.num_items(), 2);
    }

    #[test]
    fn test_gap_filling() {
        let mut map: NameToIdMap<String> = NameToIdMap::new();
        map.define_id("x".to_string(), 5);
        assert_eq!(map.get_id(&"y".to_string()), 0);
        assert_eq!(map.array_size_needed(), 6);
    }

    #[test]
    fn test_get_name_roundtrip() {
        let mut map: NameToIdMap<String> = NameToIdMap::new();
        let id = map.get_id(&"q0".to_string());
        assert_eq!(map.get_name(id), Some(&"q0".to_string()));
    }
}
