//! # Workflows Module
//!
//! High-level entry points that run the complete importer.
//!
//! - **Import Workflow** ([`import`]) - Descriptor file in, LAMMPS directive text out:
//!   parse, build the bond graph, discover molecules, assign simulation IDs,
//!   transform coordinates and emit.

pub mod import;
