use crate::core::models::molecule::MoleculeGroup;
use crate::core::models::topology::BondEdge;
use std::collections::HashMap;

/// Undirected bond graph over source IDs.
///
/// Vertices are ordered by their first appearance in the bond sequence and each
/// neighbor list is ordered by insertion. Both orders feed directly into
/// [`find_molecules`], which makes molecule discovery reproducible for a given
/// bond declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoleculeGraph {
    vertices: Vec<String>,
    index: HashMap<String, usize>,
    adjacency: Vec<Vec<usize>>,
}

impl MoleculeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the graph from bonds in declaration order, inserting each edge in
    /// both directions.
    pub fn from_bonds<'a>(bonds: impl IntoIterator<Item = &'a BondEdge>) -> Self {
        let mut graph = Self::new();
        for bond in bonds {
            graph.add_edge(&bond.atom1_id, &bond.atom2_id);
        }
        graph
    }

    pub fn add_edge(&mut self, atom1_id: &str, atom2_id: &str) {
        let a = self.vertex(atom1_id);
        let b = self.vertex(atom2_id);
        if !self.adjacency[a].contains(&b) {
            self.adjacency[a].push(b);
        }
        if !self.adjacency[b].contains(&a) {
            self.adjacency[b].push(a);
        }
    }

    fn vertex(&mut self, atom_id: &str) -> usize {
        if let Some(&idx) = self.index.get(atom_id) {
            return idx;
        }
        let idx = self.vertices.len();
        self.vertices.push(atom_id.to_string());
        self.index.insert(atom_id.to_string(), idx);
        self.adjacency.push(Vec::new());
        idx
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, atom_id: &str) -> bool {
        self.index.contains_key(atom_id)
    }

    /// Vertex IDs in first-appearance order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.vertices.iter().map(String::as_str)
    }

    /// Neighbors of `atom_id` in insertion order; empty for unknown IDs.
    pub fn neighbors(&self, atom_id: &str) -> impl Iterator<Item = &str> {
        self.index
            .get(atom_id)
            .map(|&idx| self.adjacency[idx].as_slice())
            .unwrap_or_default()
            .iter()
            .map(|&n| self.vertices[n].as_str())
    }
}

/// Partitions the graph into connected components.
///
/// Vertices are scanned in graph order; every unvisited vertex starts a new
/// group, filled by a depth-first walk. Groups are numbered from 1.
pub fn find_molecules(graph: &MoleculeGraph) -> Vec<MoleculeGroup> {
    let mut visited = vec![false; graph.len()];
    let mut molecules = Vec::new();

    for start in 0..graph.len() {
        if visited[start] {
            continue;
        }
        let members = walk_component(graph, start, &mut visited);
        let atom_ids = members
            .into_iter()
            .map(|idx| graph.vertices[idx].clone())
            .collect();
        molecules.push(MoleculeGroup::new(molecules.len() + 1, atom_ids));
    }
    molecules
}

/// Depth-first walk from `start` using an explicit frontier stack.
///
/// Neighbors are pushed in reverse so they pop in insertion order, and a vertex
/// is marked only when popped. The resulting visitation order equals the
/// preorder of a recursive walk over the same neighbor lists.
fn walk_component(graph: &MoleculeGraph, start: usize, visited: &mut [bool]) -> Vec<usize> {
    let mut members = Vec::new();
    let mut frontier = vec![start];

    while let Some(current) = frontier.pop() {
        if visited[current] {
            continue;
        }
        visited[current] = true;
        members.push(current);
        for &neighbor in graph.adjacency[current].iter().rev() {
            if !visited[neighbor] {
                frontier.push(neighbor);
            }
        }
    }
    members
}
