//! # Core Models Module
//!
//! Data structures describing a crystal as read from a descriptor file.
//!
//! ## Key Components
//!
//! - [`atom`] - Atom records with their species label and fractional position text
//! - [`topology`] - Bond edges between source identifiers
//! - [`cell`] - Unit-cell lattice vectors and the orthogonal box they imply
//! - [`molecule`] - Connected components of the bond graph
//! - [`descriptor`] - The complete parse result, with atoms kept in declaration order
//!
//! ## Usage
//!
//! ```ignore
//! use xsd2lmp::core::models::atom::{AtomRecord, FractionalPosition};
//!
//! let atom = AtomRecord::new("1", "O", FractionalPosition::new("0.2", "0.2", "0.2"));
//! assert_eq!(atom.label, "O");
//! ```

pub mod atom;
pub mod cell;
pub mod descriptor;
pub mod molecule;
pub mod topology;
