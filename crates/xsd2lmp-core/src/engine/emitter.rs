use super::config::{FooterConfig, ImportConfig};
use super::directives::{Directive, DirectiveScript};
use super::error::ImportError;
use super::remap::SimulationIdMap;
use crate::core::models::descriptor::AtomTable;
use crate::core::models::molecule::MoleculeGroup;
use crate::core::utils::geometry::to_cartesian;
use nalgebra::Vector3;
use tracing::{debug, instrument};

/// Builds the directive script for one crystal.
///
/// Blocks, in order: one `create_atoms` per atom (declaration order), one block
/// of `set atom ... mol ...` per molecule (discovery order, members in
/// visitation order), then the footer groups, charges, bond windows and the
/// final `change_box`.
///
/// # Errors
///
/// Returns [`ImportError::InvalidCoordinate`] for an atom whose fractional
/// position does not parse, and [`ImportError::UnknownAtom`] when a molecule
/// names an atom that was never declared.
#[instrument(skip_all, name = "build_script")]
pub fn build_script(
    atoms: &AtomTable,
    molecules: &[MoleculeGroup],
    ids: &SimulationIdMap,
    diagonal: &Vector3<f64>,
    config: &ImportConfig,
) -> Result<DirectiveScript, ImportError> {
    let mut script = DirectiveScript::new();

    script.push_section(atom_directives(atoms, diagonal)?);
    for molecule in molecules {
        script.push_section(molecule_directives(
            molecule,
            atoms,
            ids,
            config.emitter.annotate_species,
        )?);
    }
    push_footer(&mut script, &config.footer, diagonal);

    debug!(directives = script.len(), "Directive script assembled.");
    Ok(script)
}

/// Renders the directive script as text, one directive per line.
pub fn emit(
    atoms: &AtomTable,
    molecules: &[MoleculeGroup],
    ids: &SimulationIdMap,
    diagonal: &Vector3<f64>,
    config: &ImportConfig,
) -> Result<String, ImportError> {
    let script = build_script(atoms, molecules, ids, diagonal, config)?;
    Ok(script.render(config.emitter.section_spacing))
}

fn atom_directives(
    atoms: &AtomTable,
    diagonal: &Vector3<f64>,
) -> Result<Vec<Directive>, ImportError> {
    atoms
        .iter()
        .map(|atom| {
            let position = to_cartesian(&atom.fractional, diagonal)
                .map_err(|e| ImportError::invalid_coordinate(&atom.source_id, e))?;
            Ok(Directive::CreateAtom {
                label: atom.label.clone(),
                position,
            })
        })
        .collect()
}

fn molecule_directives(
    molecule: &MoleculeGroup,
    atoms: &AtomTable,
    ids: &SimulationIdMap,
    annotate_species: bool,
) -> Result<Vec<Directive>, ImportError> {
    molecule
        .iter()
        .map(|atom_id| {
            let unknown = || ImportError::UnknownAtom {
                atom_id: atom_id.to_string(),
                molecule: molecule.index,
            };
            let sim_id = ids.get(atom_id).ok_or_else(unknown)?;
            let annotation = if annotate_species {
                Some(atoms.get(atom_id).ok_or_else(unknown)?.label.clone())
            } else {
                None
            };
            Ok(Directive::SetMolecule {
                atom: sim_id,
                molecule: molecule.index,
                annotation,
            })
        })
        .collect()
}

fn push_footer(script: &mut DirectiveScript, footer: &FooterConfig, diagonal: &Vector3<f64>) {
    script.push_section(
        footer
            .groups
            .iter()
            .map(|g| Directive::Group {
                name: g.name.clone(),
                type_index: g.type_index,
            })
            .collect(),
    );
    script.push_section(
        footer
            .charges
            .iter()
            .map(|c| Directive::SetCharge {
                group: c.group.clone(),
                charge: c.charge,
            })
            .collect(),
    );
    script.push_section(
        footer
            .bonds
            .iter()
            .map(|b| Directive::CreateBonds {
                group_a: b.groups[0].clone(),
                group_b: b.groups[1].clone(),
                bond_type: b.bond_type,
                r_min: b.r_min,
                r_max: b.r_max,
            })
            .collect(),
    );
    script.push_section(vec![Directive::ChangeBox { lengths: *diagonal }]);
}
