use super::remap::SimulationId;
use nalgebra::{Point3, Vector3};
use std::fmt;

/// Renders an `f64` in shortest round-trip form, always with a fractional part
/// (`1.0`, `1.5`, `-0.445`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Real(pub f64);

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// One line of LAMMPS input produced by the importer.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    CreateAtom {
        label: String,
        position: Point3<f64>,
    },
    SetMolecule {
        atom: SimulationId,
        molecule: usize,
        /// Species label appended as a trailing comment, when annotation is on.
        annotation: Option<String>,
    },
    Group {
        name: String,
        type_index: u32,
    },
    SetCharge {
        group: String,
        charge: f64,
    },
    CreateBonds {
        group_a: String,
        group_b: String,
        bond_type: u32,
        r_min: f64,
        r_max: f64,
    },
    ChangeBox {
        lengths: Vector3<f64>,
    },
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::CreateAtom { label, position } => write!(
                f,
                "create_atoms {} single {} {} {} remap yes",
                label,
                Real(position.x),
                Real(position.y),
                Real(position.z)
            ),
            Directive::SetMolecule {
                atom,
                molecule,
                annotation,
            } => {
                write!(f, "set atom {} mol {}", atom, molecule)?;
                if let Some(label) = annotation {
                    write!(f, " #{}", label)?;
                }
                Ok(())
            }
            Directive::Group { name, type_index } => {
                write!(f, "group {} type {}", name, type_index)
            }
            Directive::SetCharge { group, charge } => {
                write!(f, "set group {} charge {}", group, Real(*charge))
            }
            Directive::CreateBonds {
                group_a,
                group_b,
                bond_type,
                r_min,
                r_max,
            } => write!(
                f,
                "create_bonds many {} {} {} {} {}",
                group_a,
                group_b,
                bond_type,
                Real(*r_min),
                Real(*r_max)
            ),
            Directive::ChangeBox { lengths } => write!(
                f,
                "change_box all x final 0.0 {} y final 0.0 {} z final 0.0 {}",
                Real(lengths.x),
                Real(lengths.y),
                Real(lengths.z)
            ),
        }
    }
}

/// Directives grouped into blocks, in emission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectiveScript {
    sections: Vec<Vec<Directive>>,
}

impl DirectiveScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a block; empty blocks are dropped.
    pub fn push_section(&mut self, section: Vec<Directive>) {
        if !section.is_empty() {
            self.sections.push(section);
        }
    }

    pub fn sections(&self) -> &[Vec<Directive>] {
        &self.sections
    }

    pub fn directives(&self) -> impl Iterator<Item = &Directive> {
        self.sections.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.sections.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// One directive per line; with `section_spacing`, each block is preceded
    /// by an empty line.
    pub fn render(&self, section_spacing: bool) -> String {
        let mut text = String::new();
        for section in &self.sections {
            if section_spacing {
                text.push('\n');
            }
            for directive in section {
                text.push_str(&directive.to_string());
                text.push('\n');
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reals_always_carry_a_fractional_part() {
        assert_eq!(Real(1.0).to_string(), "1.0");
        assert_eq!(Real(1.5).to_string(), "1.5");
        assert_eq!(Real(-0.445).to_string(), "-0.445");
        assert_eq!(Real(0.0).to_string(), "0.0");
        assert_eq!(Real(5.5648).to_string(), "5.5648");
    }

    #[test]
    fn directives_render_lammps_syntax() {
        let cases = [
            (
                Directive::CreateAtom {
                    label: "O[Water]".into(),
                    position: Point3::new(1.0, 2.5, 0.0),
                },
                "create_atoms O[Water] single 1.0 2.5 0.0 remap yes",
            ),
            (
                Directive::SetMolecule {
                    atom: SimulationId(3),
                    molecule: 2,
                    annotation: None,
                },
                "set atom 3 mol 2",
            ),
            (
                Directive::SetMolecule {
                    atom: SimulationId(3),
                    molecule: 2,
                    annotation: Some("H[Water]".into()),
                },
                "set atom 3 mol 2 #H[Water]",
            ),
            (
                Directive::Group {
                    name: "WaterOxygenAtoms".into(),
                    type_index: 5,
                },
                "group WaterOxygenAtoms type 5",
            ),
            (
                Directive::SetCharge {
                    group: "WaterOxygenAtoms".into(),
                    charge: -0.8476,
                },
                "set group WaterOxygenAtoms charge -0.8476",
            ),
            (
                Directive::CreateBonds {
                    group_a: "NitricOxygen2Atoms".into(),
                    group_b: "NitricHydrogenAtoms".into(),
                    bond_type: 1,
                    r_min: 0.95,
                    r_max: 1.0,
                },
                "create_bonds many NitricOxygen2Atoms NitricHydrogenAtoms 1 0.95 1.0",
            ),
            (
                Directive::ChangeBox {
                    lengths: Vector3::new(5.0, 6.5, 7.0),
                },
                "change_box all x final 0.0 5.0 y final 0.0 6.5 z final 0.0 7.0",
            ),
        ];
        for (directive, expected) in cases {
            assert_eq!(directive.to_string(), expected);
        }
    }

    #[test]
    fn render_separates_sections_only_when_asked() {
        let mut script = DirectiveScript::new();
        script.push_section(vec![Directive::Group {
            name: "A".into(),
            type_index: 1,
        }]);
        script.push_section(Vec::new());
        script.push_section(vec![Directive::SetCharge {
            group: "A".into(),
            charge: 0.5,
        }]);

        assert_eq!(script.sections().len(), 2);
        assert_eq!(script.len(), 2);
        assert_eq!(script.render(false), "group A type 1\nset group A charge 0.5\n");
        assert_eq!(
            script.render(true),
            "\ngroup A type 1\n\nset group A charge 0.5\n"
        );
    }

    #[test]
    fn empty_script_renders_nothing() {
        let script = DirectiveScript::new();
        assert!(script.is_empty());
        assert_eq!(script.render(true), "");
    }
}
