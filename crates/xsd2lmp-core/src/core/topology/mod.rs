//! # Topology Module
//!
//! Recovers molecules from declared bond connectivity.
//!
//! ## Overview
//!
//! A descriptor lists bonds but not molecules. This module builds an undirected
//! graph from the bond sequence and partitions it into connected components,
//! each of which becomes one molecule.
//!
//! ## Key Components
//!
//! - [`graph`] - The ordered adjacency structure and molecule discovery
//!
//! ## Usage
//!
//! ```ignore
//! use xsd2lmp::core::topology::graph::{MoleculeGraph, find_molecules};
//!
//! let graph = MoleculeGraph::from_bonds(&descriptor.bonds);
//! let molecules = find_molecules(&graph);
//! ```

pub mod graph;
