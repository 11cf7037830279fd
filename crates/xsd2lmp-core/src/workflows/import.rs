use crate::core::io::traits::DescriptorReader;
use crate::core::io::xsd::XsdFile;
use crate::core::models::descriptor::CrystalDescriptor;
use crate::core::models::molecule::MoleculeGroup;
use crate::core::topology::graph::{MoleculeGraph, find_molecules};
use crate::engine::config::{ImportConfig, UnbondedAtomPolicy};
use crate::engine::emitter;
use crate::engine::error::ImportError;
use crate::engine::remap::SimulationIdMap;
use nalgebra::Vector3;
use std::io::BufRead;
use std::path::Path;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct ImportSummary {
    pub atoms: usize,
    pub bonds: usize,
    pub molecules: usize,
    /// Atoms that appear in no bond, whatever the policy did with them.
    pub unbonded_atoms: usize,
    pub weak_bonds_excluded: usize,
    pub skipped_lines: usize,
    pub duplicate_atom_ids: usize,
    pub cell_diagonal: Vector3<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportOutput {
    /// The directive text handed to the job-script assembler.
    pub directives: String,
    pub summary: ImportSummary,
}

/// Imports the descriptor at `path`.
///
/// # Errors
///
/// Fails with [`ImportError::FileNotFound`] if the file cannot be opened, and
/// otherwise as described for [`run_descriptor`]. No partial text is returned.
#[instrument(skip_all, name = "import_workflow", fields(path = %path.display()))]
pub fn run(path: &Path, config: &ImportConfig) -> Result<ImportOutput, ImportError> {
    info!("Reading crystal descriptor.");
    let descriptor = XsdFile::read_from_path(path)?;
    run_descriptor(&descriptor, config)
}

/// Imports a descriptor read from an arbitrary buffered source.
pub fn run_from_reader(
    reader: &mut impl BufRead,
    config: &ImportConfig,
) -> Result<ImportOutput, ImportError> {
    let descriptor = XsdFile::read_from(reader)?;
    run_descriptor(&descriptor, config)
}

/// Runs every stage after parsing: molecule discovery, ID assignment,
/// coordinate transformation and emission.
///
/// # Errors
///
/// - [`ImportError::MalformedCellGeometry`] when the descriptor declares no cell.
/// - [`ImportError::InvalidCoordinate`] when a fractional component is not a number.
/// - [`ImportError::UnknownAtom`] when a bond names an atom that is never declared.
pub fn run_descriptor(
    descriptor: &CrystalDescriptor,
    config: &ImportConfig,
) -> Result<ImportOutput, ImportError> {
    let cell = descriptor.cell.ok_or_else(|| {
        ImportError::MalformedCellGeometry(
            "no space group with AVector, BVector and CVector was declared".to_string(),
        )
    })?;
    let diagonal = cell.diagonal();

    let graph = MoleculeGraph::from_bonds(&descriptor.bonds);
    let mut molecules = find_molecules(&graph);
    let unbonded_atoms = apply_unbonded_policy(
        descriptor,
        &graph,
        &mut molecules,
        config.emitter.unbonded_atoms,
    );

    let ids = SimulationIdMap::assign(&descriptor.atoms);
    let directives = emitter::emit(&descriptor.atoms, &molecules, &ids, &diagonal, config)?;

    let summary = ImportSummary {
        atoms: descriptor.atoms.len(),
        bonds: descriptor.bonds.len(),
        molecules: molecules.len(),
        unbonded_atoms,
        weak_bonds_excluded: descriptor.stats.weak_bonds_excluded,
        skipped_lines: descriptor.stats.skipped_lines,
        duplicate_atom_ids: descriptor.stats.duplicate_atom_ids,
        cell_diagonal: diagonal,
    };
    info!(
        atoms = summary.atoms,
        bonds = summary.bonds,
        molecules = summary.molecules,
        "Import complete."
    );
    Ok(ImportOutput {
        directives,
        summary,
    })
}

/// Counts atoms missing from the bond graph and, under
/// [`UnbondedAtomPolicy::Singleton`], appends one molecule per such atom in
/// declaration order.
fn apply_unbonded_policy(
    descriptor: &CrystalDescriptor,
    graph: &MoleculeGraph,
    molecules: &mut Vec<MoleculeGroup>,
    policy: UnbondedAtomPolicy,
) -> usize {
    let unbonded: Vec<&str> = descriptor
        .atoms
        .iter()
        .map(|atom| atom.source_id.as_str())
        .filter(|id| !graph.contains(id))
        .collect();
    if unbonded.is_empty() {
        return 0;
    }

    match policy {
        UnbondedAtomPolicy::Exclude => warn!(
            count = unbonded.len(),
            "Atoms without bonds receive no molecule assignment."
        ),
        UnbondedAtomPolicy::Singleton => {
            info!(
                count = unbonded.len(),
                "Placing each atom without bonds in its own molecule."
            );
            for id in &unbonded {
                molecules.push(MoleculeGroup::new(molecules.len() + 1, vec![id.to_string()]));
            }
        }
    }
    unbonded.len()
}
