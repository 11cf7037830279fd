use super::atom::AtomRecord;
use super::cell::CellGeometry;
use super::topology::BondEdge;
use std::collections::HashMap;

/// Atom records keyed by source ID, iterated in declaration order.
///
/// Re-declaring an ID replaces the stored record but keeps the position of the
/// first declaration, so the table never holds two entries for one ID.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtomTable {
    records: Vec<AtomRecord>,
    index: HashMap<String, usize>,
}

impl AtomTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, returning the record it replaced, if any.
    pub fn insert(&mut self, record: AtomRecord) -> Option<AtomRecord> {
        match self.index.get(&record.source_id) {
            Some(&slot) => Some(std::mem::replace(&mut self.records[slot], record)),
            None => {
                self.index
                    .insert(record.source_id.clone(), self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    pub fn get(&self, source_id: &str) -> Option<&AtomRecord> {
        self.index.get(source_id).map(|&slot| &self.records[slot])
    }

    pub fn contains(&self, source_id: &str) -> bool {
        self.index.contains_key(source_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AtomRecord> {
        self.records.iter()
    }
}

impl FromIterator<AtomRecord> for AtomTable {
    fn from_iter<I: IntoIterator<Item = AtomRecord>>(iter: I) -> Self {
        let mut table = Self::new();
        for record in iter {
            table.insert(record);
        }
        table
    }
}

/// Counters collected while scanning a descriptor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub lines_read: usize,
    pub skipped_lines: usize,
    pub weak_bonds_excluded: usize,
    pub duplicate_atom_ids: usize,
}

/// Everything the importer needs from a descriptor file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrystalDescriptor {
    pub atoms: AtomTable,
    pub bonds: Vec<BondEdge>,
    /// `None` when the file declared no space group.
    pub cell: Option<CellGeometry>,
    pub stats: ScanStats,
}
