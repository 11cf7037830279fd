use thiserror::Error;

use super::config::{ConfigError, FooterLoadError};
use crate::core::io::xsd::XsdError;
use crate::core::models::atom::Axis;
use crate::core::utils::geometry::CoordinateError;
use std::path::PathBuf;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Descriptor file '{path}' not found or unreadable: {source}", path = path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Atom '{atom_id}' has an invalid fractional {axis} coordinate '{value}'")]
    InvalidCoordinate {
        atom_id: String,
        axis: Axis,
        value: String,
    },

    #[error("Malformed cell geometry: {0}")]
    MalformedCellGeometry(String),

    #[error("Molecule {molecule} references atom '{atom_id}', which is never declared")]
    UnknownAtom { atom_id: String, molecule: usize },

    #[error("Footer configuration error: {0}")]
    Footer(#[from] FooterLoadError),

    #[error("Invalid import configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error while reading descriptor: {0}")]
    Io(#[from] std::io::Error),
}

impl From<XsdError> for ImportError {
    fn from(e: XsdError) -> Self {
        match e {
            XsdError::FileNotFound { path, source } => ImportError::FileNotFound { path, source },
            XsdError::Io(source) => ImportError::Io(source),
            XsdError::MalformedCellGeometry { line, source } => {
                ImportError::MalformedCellGeometry(format!("line {line}: {source}"))
            }
        }
    }
}

impl ImportError {
    pub(crate) fn invalid_coordinate(atom_id: &str, e: CoordinateError) -> Self {
        ImportError::InvalidCoordinate {
            atom_id: atom_id.to_string(),
            axis: e.axis,
            value: e.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::cell::CellVectorError;
    use std::io;

    #[test]
    fn reader_errors_map_onto_import_taxonomy() {
        let not_found = XsdError::FileNotFound {
            path: PathBuf::from("missing.xsd"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(matches!(
            ImportError::from(not_found),
            ImportError::FileNotFound { ref path, .. } if path == &PathBuf::from("missing.xsd")
        ));

        let cell = XsdError::MalformedCellGeometry {
            line: 12,
            source: CellVectorError::Missing { name: "CVector" },
        };
        let mapped = ImportError::from(cell);
        assert_eq!(
            mapped.to_string(),
            "Malformed cell geometry: line 12: Lattice vector CVector is missing"
        );
    }

    #[test]
    fn invalid_coordinate_names_the_atom() {
        let err = ImportError::invalid_coordinate(
            "17",
            CoordinateError {
                axis: Axis::X,
                value: "n/a".to_string(),
            },
        );
        assert_eq!(
            err.to_string(),
            "Atom '17' has an invalid fractional x coordinate 'n/a'"
        );
    }
}
