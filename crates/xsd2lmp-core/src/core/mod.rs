//! # Core Module
//!
//! Fundamental building blocks of the importer.
//!
//! ## Architecture
//!
//! - **Crystal Representation** ([`models`]) - Atom records, bond edges, cell geometry and molecule groups
//! - **File I/O** ([`io`]) - The descriptor reader interface and its line-oriented `.xsd` implementation
//! - **Connectivity** ([`topology`]) - Bond graph construction and molecule discovery
//! - **Geometry** ([`utils`]) - Fractional to Cartesian coordinate conversion
//!
//! Nothing here takes configuration. The reader reports skipped and suspicious
//! lines through `tracing` events; the [`crate::engine`] layer decides how these
//! pieces are combined and rendered.

pub mod io;
pub mod models;
pub mod topology;
pub mod utils;
