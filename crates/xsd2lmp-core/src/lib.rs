//! # xsd2lmp Core Library
//!
//! Converts crystallographic structure descriptors (Materials Studio `.xsd` files)
//! into the directive text a LAMMPS input script needs to build the crystal:
//! atom creation, molecule assignment, grouping, partial charges, bond creation
//! and box sizing.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`AtomRecord`, `BondEdge`,
//!   `CellGeometry`), the heuristic descriptor reader, the bond graph used to
//!   recover molecules, and coordinate geometry.
//!
//! - **[`engine`]: The Logic Core.** Import configuration (including the
//!   externally supplied footer table), the error taxonomy, simulation ID
//!   remapping and the directive emitter.
//!
//! - **[`workflows`]: The Public API.** Ties `core` and `engine` together into a
//!   single import call that turns a descriptor path into directive text.

pub mod core;
pub mod engine;
pub mod workflows;
