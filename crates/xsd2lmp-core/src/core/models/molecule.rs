/// One connected component of the bond graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoleculeGroup {
    /// 1-based molecule index, in discovery order.
    pub index: usize,
    /// Member source IDs, in visitation order.
    pub atom_ids: Vec<String>,
}

impl MoleculeGroup {
    pub fn new(index: usize, atom_ids: Vec<String>) -> Self {
        Self { index, atom_ids }
    }

    pub fn len(&self) -> usize {
        self.atom_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atom_ids.is_empty()
    }

    pub fn contains(&self, atom_id: &str) -> bool {
        self.atom_ids.iter().any(|id| id == atom_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.atom_ids.iter().map(String::as_str)
    }
}
