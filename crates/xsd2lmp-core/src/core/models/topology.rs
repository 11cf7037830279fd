use std::fmt;

/// Classification of a bond declaration found in a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BondKind {
    /// A regular bond; becomes an edge of the molecule graph.
    #[default]
    Covalent,
    /// A secondary interaction such as a hydrogen bond; never becomes an edge.
    Weak,
}

impl fmt::Display for BondKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Covalent => "Covalent",
                Self::Weak => "Weak",
            }
        )
    }
}

/// An unordered pair of source identifiers joined by a declared bond.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BondEdge {
    pub atom1_id: String, // Source ID of the first atom, as declared
    pub atom2_id: String, // Source ID of the second atom, as declared
}

impl BondEdge {
    pub fn new(atom1_id: &str, atom2_id: &str) -> Self {
        Self {
            atom1_id: atom1_id.to_string(),
            atom2_id: atom2_id.to_string(),
        }
    }
}
