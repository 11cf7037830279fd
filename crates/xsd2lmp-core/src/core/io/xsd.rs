use crate::core::io::traits::DescriptorReader;
use crate::core::models::atom::{AtomRecord, FractionalPosition};
use crate::core::models::cell::{CellGeometry, CellVectorError};
use crate::core::models::descriptor::CrystalDescriptor;
use crate::core::models::topology::{BondEdge, BondKind};
use regex::Regex;
use std::collections::HashMap;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;
use tracing::{debug, trace, warn};

const ATOM_MARKER: &str = "<Atom3d";
const USER_ID_MARKER: &str = "UserID";
const BOND_MARKER: &str = "<Bond";
const CONNECTS_MARKER: &str = "Connects";
const WEAK_BOND_MARKER: &str = "HBond";
const SPACE_GROUP_MARKER: &str = "SpaceGroup";

static ATTRIBUTE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_][A-Za-z0-9_.:-]*)="([^"]*)""#).expect("attribute pattern is valid")
});

#[derive(Debug, Error)]
pub enum XsdError {
    #[error("Descriptor file '{path}' could not be opened: {source}", path = path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed cell geometry on line {line}: {source}")]
    MalformedCellGeometry {
        line: usize,
        #[source]
        source: CellVectorError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Atom,
    Bond(BondKind),
    Cell,
    Other,
}

fn classify(line: &str) -> LineKind {
    if line.contains(ATOM_MARKER) && line.contains(USER_ID_MARKER) {
        LineKind::Atom
    } else if line.contains(CONNECTS_MARKER)
        && (line.contains(BOND_MARKER) || line.contains(WEAK_BOND_MARKER))
    {
        if line.contains(WEAK_BOND_MARKER) {
            LineKind::Bond(BondKind::Weak)
        } else {
            LineKind::Bond(BondKind::Covalent)
        }
    } else if line.contains(SPACE_GROUP_MARKER) {
        LineKind::Cell
    } else {
        LineKind::Other
    }
}

/// Decodes one raw line as Latin-1, the encoding `.xsd` documents declare,
/// dropping the line terminator. Every byte maps to a char, so decoding never fails.
fn decode_latin1(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    raw.iter().map(|&b| char::from(b)).collect()
}

/// `name="value"` pairs found on a single line, looked up by exact name.
struct LineAttributes<'a> {
    values: HashMap<&'a str, &'a str>,
}

impl<'a> LineAttributes<'a> {
    fn scan(line: &'a str) -> Self {
        let mut values = HashMap::new();
        for caps in ATTRIBUTE_PATTERN.captures_iter(line) {
            if let (Some(name), Some(value)) = (caps.get(1), caps.get(2)) {
                values.entry(name.as_str()).or_insert(value.as_str());
            }
        }
        Self { values }
    }

    fn get(&self, name: &str) -> Option<&'a str> {
        self.values.get(name).copied()
    }

    /// The attribute value, or a blank placeholder when absent.
    fn get_or_blank(&self, name: &str) -> &'a str {
        self.get(name).unwrap_or("")
    }
}

/// Line-oriented reader for Materials Studio `.xsd` crystal documents.
///
/// The scan is heuristic: a line is recognized by the markers it contains,
/// and attributes are picked out by name. Candidate lines whose attributes do
/// not fit are skipped and logged rather than reported as errors.
pub struct XsdFile;

impl XsdFile {
    fn read_atom(line_num: usize, line: &str, descriptor: &mut CrystalDescriptor) {
        let attrs = LineAttributes::scan(line);
        for name in ["ID", "Name", "XYZ"] {
            if attrs.get(name).is_none() {
                warn!(
                    line = line_num,
                    attribute = name,
                    "Atom record lacks attribute; using a blank placeholder."
                );
            }
        }

        let record = AtomRecord::new(
            attrs.get_or_blank("ID"),
            attrs.get_or_blank("Name"),
            FractionalPosition::from_xyz_attribute(attrs.get_or_blank("XYZ")),
        );
        trace!(line = line_num, id = %record.source_id, label = %record.label, "Atom record.");

        if let Some(previous) = descriptor.atoms.insert(record) {
            descriptor.stats.duplicate_atom_ids += 1;
            warn!(
                line = line_num,
                id = %previous.source_id,
                "Atom ID declared more than once; the later declaration replaces the earlier one."
            );
        }
    }

    fn read_bond(line_num: usize, line: &str, kind: BondKind, descriptor: &mut CrystalDescriptor) {
        if kind == BondKind::Weak {
            descriptor.stats.weak_bonds_excluded += 1;
            debug!(line = line_num, "Skipping {} bond; it does not join molecules.", kind);
            return;
        }

        let attrs = LineAttributes::scan(line);
        let Some(connects) = attrs.get(CONNECTS_MARKER) else {
            descriptor.stats.skipped_lines += 1;
            warn!(line = line_num, "Skipping bond line: no readable Connects attribute.");
            return;
        };

        let ends: Vec<&str> = connects.split(',').map(str::trim).collect();
        match ends.as_slice() {
            [a, b] if !a.is_empty() && !b.is_empty() => {
                trace!(line = line_num, atom1 = a, atom2 = b, "Bond record.");
                descriptor.bonds.push(BondEdge::new(a, b));
            }
            _ => {
                descriptor.stats.skipped_lines += 1;
                warn!(
                    line = line_num,
                    connects,
                    "Skipping bond line: Connects must name exactly two atoms."
                );
            }
        }
    }

    fn read_cell(
        line_num: usize,
        line: &str,
        descriptor: &mut CrystalDescriptor,
    ) -> Result<(), XsdError> {
        let attrs = LineAttributes::scan(line);
        let vectors = [attrs.get("AVector"), attrs.get("BVector"), attrs.get("CVector")];
        if vectors.iter().all(Option::is_none) {
            descriptor.stats.skipped_lines += 1;
            debug!(line = line_num, "Space-group line carries no lattice vectors; ignoring it.");
            return Ok(());
        }

        let cell = CellGeometry::from_vector_attributes(vectors[0], vectors[1], vectors[2])
            .map_err(|source| XsdError::MalformedCellGeometry {
                line: line_num,
                source,
            })?;
        if descriptor.cell.is_some() {
            warn!(line = line_num, "Cell declared more than once; using the later declaration.");
        }
        if !cell.is_orthogonal() {
            debug!(line = line_num, "Cell has off-diagonal components; they will be ignored.");
        }
        descriptor.cell = Some(cell);
        Ok(())
    }
}

impl DescriptorReader for XsdFile {
    type Error = XsdError;

    fn read_from(reader: &mut impl BufRead) -> Result<CrystalDescriptor, Self::Error> {
        let mut descriptor = CrystalDescriptor::default();
        let mut buf = Vec::new();
        let mut line_num = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = decode_latin1(&buf);
            line_num += 1;
            descriptor.stats.lines_read += 1;

            match classify(&line) {
                LineKind::Atom => Self::read_atom(line_num, &line, &mut descriptor),
                LineKind::Bond(kind) => Self::read_bond(line_num, &line, kind, &mut descriptor),
                LineKind::Cell => Self::read_cell(line_num, &line, &mut descriptor)?,
                LineKind::Other => {}
            }
        }

        debug!(
            atoms = descriptor.atoms.len(),
            bonds = descriptor.bonds.len(),
            weak_bonds = descriptor.stats.weak_bonds_excluded,
            skipped = descriptor.stats.skipped_lines,
            "Descriptor scan finished."
        );
        Ok(descriptor)
    }

    fn open_failed(path: &Path, source: io::Error) -> Self::Error {
        XsdError::FileNotFound {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Axis;
    use nalgebra::Vector3;
    use std::io::{BufReader, Cursor};

    const SAMPLE_XSD: &str = r#"<?xml version="1.0" encoding="latin1"?>
<XSD Version="6.0">
 <AtomisticTreeRoot ID="1">
  <Molecule ID="2" Name="NAM" Children="3,4,5">
   <Atom3d ID="3" Mapping="20" Parent="2" Name="O[Hydronium]" UserID="1" XYZ="0.49825,0.26078,0.42656" Connections="5" Components="O"/>
   <Atom3d ID="4" Mapping="21" Parent="2" Name="H[Hydronium]" UserID="2" XYZ="0.67698,0.24161,0.39310" Connections="5" Components="H"/>
   <Bond ID="5" Mapping="22" Parent="2" Connects="3,4"/>
   <Atom3d ID="6" Mapping="23" Parent="2" Name="O[Nitrate]" UserID="3" XYZ="0.23008,0.05078,0.28464" Components="O"/>
   <Bond ID="7" Mapping="24" Parent="2" Type="HBond" Connects="4,6"/>
  </Molecule>
  <SpaceGroup ID="8" Parent="1" AVector="5.5648,0,0" BVector="0,8.9619,0" CVector="0,0,6.4184" Name="P1"/>
 </AtomisticTreeRoot>
</XSD>
"#;

    fn read_str(content: &str) -> Result<CrystalDescriptor, XsdError> {
        let mut reader = BufReader::new(Cursor::new(content));
        XsdFile::read_from(&mut reader)
    }

    #[test]
    fn reads_atoms_in_declaration_order() {
        let descriptor = read_str(SAMPLE_XSD).unwrap();
        let ids: Vec<&str> = descriptor.atoms.iter().map(|a| a.source_id.as_str()).collect();
        assert_eq!(ids, ["3", "4", "6"]);

        let oxygen = descriptor.atoms.get("3").unwrap();
        assert_eq!(oxygen.label, "O[Hydronium]");
        assert_eq!(oxygen.fractional.component(Axis::X), "0.49825");
        assert_eq!(oxygen.fractional.component(Axis::Z), "0.42656");
    }

    #[test]
    fn id_attribute_is_not_confused_with_user_id() {
        let line = r#"<Atom3d UserID="99" Name="C" ID="12" XYZ="0,0,0"/>"#;
        let descriptor = read_str(line).unwrap();
        assert!(descriptor.atoms.contains("12"));
        assert!(!descriptor.atoms.contains("99"));
    }

    #[test]
    fn weak_bonds_are_excluded_from_bond_sequence() {
        let descriptor = read_str(SAMPLE_XSD).unwrap();
        assert_eq!(descriptor.bonds, vec![BondEdge::new("3", "4")]);
        assert_eq!(descriptor.stats.weak_bonds_excluded, 1);
    }

    #[test]
    fn cell_is_read_from_space_group_line() {
        let descriptor = read_str(SAMPLE_XSD).unwrap();
        let cell = descriptor.cell.unwrap();
        assert_eq!(cell.diagonal(), Vector3::new(5.5648, 8.9619, 6.4184));
    }

    #[test]
    fn atom_line_without_user_id_is_ignored() {
        let descriptor = read_str(r#"<Atom3d ID="1" Name="O" XYZ="0,0,0"/>"#).unwrap();
        assert!(descriptor.atoms.is_empty());
    }

    #[test]
    fn missing_atom_attributes_become_blank_placeholders() {
        let descriptor = read_str(r#"<Atom3d ID="1" UserID="1" Name="O"/>"#).unwrap();
        let atom = descriptor.atoms.get("1").unwrap();
        assert_eq!(atom.label, "O");
        assert!(atom.fractional.components().iter().all(String::is_empty));
    }

    #[test]
    fn bond_with_wrong_arity_is_skipped() {
        let content = "<Bond ID=\"1\" Connects=\"1,2,3\"/>\n<Bond ID=\"2\" Connects=\"4\"/>\n";
        let descriptor = read_str(content).unwrap();
        assert!(descriptor.bonds.is_empty());
        assert_eq!(descriptor.stats.skipped_lines, 2);
    }

    #[test]
    fn duplicate_atom_id_keeps_last_record_and_counts_it() {
        let content = concat!(
            "<Atom3d ID=\"1\" UserID=\"1\" Name=\"O\" XYZ=\"0,0,0\"/>\n",
            "<Atom3d ID=\"2\" UserID=\"2\" Name=\"H\" XYZ=\"0,0,0\"/>\n",
            "<Atom3d ID=\"1\" UserID=\"3\" Name=\"N\" XYZ=\"0.5,0.5,0.5\"/>\n",
        );
        let descriptor = read_str(content).unwrap();
        assert_eq!(descriptor.atoms.len(), 2);
        assert_eq!(descriptor.atoms.get("1").unwrap().label, "N");
        assert_eq!(descriptor.stats.duplicate_atom_ids, 1);
    }

    #[test]
    fn malformed_cell_vector_is_an_error() {
        let content = "<SpaceGroup AVector=\"5,0,0\" BVector=\"0,5\" CVector=\"0,0,5\"/>\n";
        let err = read_str(content).unwrap_err();
        assert!(matches!(err, XsdError::MalformedCellGeometry { line: 1, .. }));
    }

    #[test]
    fn space_group_mention_without_vectors_is_ignored() {
        let descriptor = read_str("<SymmetrySystem SpaceGroup=\"P1\"/>\n").unwrap();
        assert!(descriptor.cell.is_none());
        assert_eq!(descriptor.stats.skipped_lines, 1);
    }

    #[test]
    fn empty_source_yields_empty_descriptor() {
        let descriptor = read_str("<XSD>\n</XSD>\n").unwrap();
        assert!(descriptor.atoms.is_empty());
        assert!(descriptor.bonds.is_empty());
        assert!(descriptor.cell.is_none());
        assert_eq!(descriptor.stats.lines_read, 2);
    }

    #[test]
    fn read_from_path_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.xsd");
        let err = XsdFile::read_from_path(&path).unwrap_err();
        match err {
            XsdError::FileNotFound { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn read_from_path_parses_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crystal.xsd");
        std::fs::write(&path, SAMPLE_XSD).unwrap();
        let descriptor = XsdFile::read_from_path(&path).unwrap();
        assert_eq!(descriptor.atoms.len(), 3);
        assert_eq!(descriptor.bonds.len(), 1);
    }

    #[test]
    fn latin1_bytes_on_unrelated_lines_do_not_stop_the_scan() {
        let mut content: Vec<u8> = b"<?xml version=\"1.0\" encoding=\"latin1\"?>\n".to_vec();
        content.extend_from_slice(b"<Molecule ID=\"2\" Name=\"Caf\xe9\"/>\n");
        content.extend_from_slice(
            b"<Atom3d ID=\"3\" UserID=\"1\" Name=\"O\xb2\" XYZ=\"0.1,0.2,0.3\"/>\n",
        );
        content.extend_from_slice(
            b"<SpaceGroup AVector=\"5,0,0\" BVector=\"0,6,0\" CVector=\"0,0,7\"/>\n",
        );

        let mut reader = BufReader::new(Cursor::new(content));
        let descriptor = XsdFile::read_from(&mut reader).unwrap();

        assert_eq!(descriptor.atoms.len(), 1);
        assert_eq!(descriptor.atoms.get("3").unwrap().label, "O\u{b2}");
        assert_eq!(
            descriptor.cell.unwrap().diagonal(),
            Vector3::new(5.0, 6.0, 7.0)
        );
        assert_eq!(descriptor.stats.lines_read, 4);
    }

    #[test]
    fn crlf_line_endings_are_stripped() {
        let content = "<Atom3d ID=\"1\" UserID=\"1\" Name=\"H\" XYZ=\"0,0,0.5\"/>\r\n\
                       <Bond ID=\"9\" Connects=\"1,2\"/>\r\n";
        let descriptor = read_str(content).unwrap();
        let atom = descriptor.atoms.get("1").unwrap();
        assert_eq!(atom.fractional.component(Axis::Z), "0.5");
        assert_eq!(descriptor.bonds, [BondEdge::new("1", "2")]);
    }
}
