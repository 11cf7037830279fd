use crate::core::models::descriptor::AtomTable;
use std::collections::HashMap;
use std::fmt;

/// Dense 1-based atom number used to address atoms in emitted directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SimulationId(pub usize);

impl fmt::Display for SimulationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source ID to [`SimulationId`] lookup, fixed once at assignment.
///
/// LAMMPS numbers atoms in the order `create_atoms` runs, so IDs follow atom
/// declaration order and are unrelated to molecule numbering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationIdMap {
    ids: HashMap<String, SimulationId>,
}

impl SimulationIdMap {
    pub fn assign(atoms: &AtomTable) -> Self {
        let ids = atoms
            .iter()
            .enumerate()
            .map(|(i, atom)| (atom.source_id.clone(), SimulationId(i + 1)))
            .collect();
        Self { ids }
    }

    pub fn get(&self, source_id: &str) -> Option<SimulationId> {
        self.ids.get(source_id).copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::{AtomRecord, FractionalPosition};

    fn table(ids: &[&str]) -> AtomTable {
        ids.iter()
            .map(|id| AtomRecord::new(id, "X", FractionalPosition::default()))
            .collect()
    }

    #[test]
    fn ids_follow_declaration_order_starting_at_one() {
        let map = SimulationIdMap::assign(&table(&["40", "7", "13"]));
        assert_eq!(map.get("40"), Some(SimulationId(1)));
        assert_eq!(map.get("7"), Some(SimulationId(2)));
        assert_eq!(map.get("13"), Some(SimulationId(3)));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn redeclared_atoms_do_not_leave_gaps() {
        let map = SimulationIdMap::assign(&table(&["1", "2", "1", "3"]));
        assert_eq!(map.len(), 3);
        assert_eq!(map.get("1"), Some(SimulationId(1)));
        assert_eq!(map.get("3"), Some(SimulationId(3)));
    }

    #[test]
    fn unknown_ids_are_absent() {
        let map = SimulationIdMap::assign(&AtomTable::new());
        assert!(map.is_empty());
        assert_eq!(map.get("1"), None);
        assert_eq!(SimulationId(42).to_string(), "42");
    }
}
