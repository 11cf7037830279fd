//! Provides input functionality for crystal descriptor files.
//!
//! Readers implement the [`traits::DescriptorReader`] trait, which hides the
//! scanning strategy from the rest of the importer. The only implementation
//! today is [`xsd::XsdFile`], a line-oriented heuristic scan of Materials
//! Studio `.xsd` documents; a validating XML reader can replace it without
//! touching graph, geometry or emission code.

pub mod traits;
pub mod xsd;
