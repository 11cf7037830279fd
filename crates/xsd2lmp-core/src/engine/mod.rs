//! # Engine Module
//!
//! Turns parsed crystal data into LAMMPS directive text.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - The footer table (groups, charges, bond windows), its
//!   built-in presets, and emitter layout options
//! - **Error Handling** ([`error`]) - The import error taxonomy shared by every stage
//! - **ID Remapping** ([`remap`]) - Dense simulation IDs in atom declaration order
//! - **Directive Model** ([`directives`]) - Typed directives and their text rendering
//! - **Emission** ([`emitter`]) - Assembly of the ordered directive script
//!
//! The engine holds no state between calls; everything it needs is passed in.

pub mod config;
pub mod directives;
pub mod emitter;
pub mod error;
pub mod remap;
