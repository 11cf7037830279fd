use crate::core::models::descriptor::CrystalDescriptor;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading crystal descriptor files.
///
/// Implementors turn a text source into a [`CrystalDescriptor`]: atoms in
/// declaration order, bonds in declaration order, and the unit cell.
pub trait DescriptorReader {
    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads a descriptor from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to scan.
    ///
    /// # Return
    ///
    /// Returns the parsed descriptor. A source with no recognizable records
    /// yields an empty descriptor rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or a record is unusable in a way the
    /// format cannot tolerate.
    fn read_from(reader: &mut impl BufRead) -> Result<CrystalDescriptor, Self::Error>;

    /// Builds the error reported when `path` cannot be opened.
    fn open_failed(path: &Path, source: io::Error) -> Self::Error;

    /// Reads a descriptor from a file path.
    ///
    /// The file is opened once and closed when this call returns, whether or
    /// not parsing succeeded.
    ///
    /// # Errors
    ///
    /// Returns the error built by [`Self::open_failed`] if the file cannot be
    /// opened, or any error from [`Self::read_from`].
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<CrystalDescriptor, Self::Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Self::open_failed(path, e))?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}
