use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

const PRESETS: &[(&str, &str)] = &[
    (
        "nitric-acid-hydrates",
        include_str!("../../data/presets/nitric-acid-hydrates.toml"),
    ),
    (
        "nitric-acid-hydrates-spce",
        include_str!("../../data/presets/nitric-acid-hydrates-spce.toml"),
    ),
];

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Group '{0}' is declared more than once")]
    DuplicateGroup(String),

    #[error("Group '{0}' must have a type index of at least 1")]
    InvalidTypeIndex(String),

    #[error("{rule} rule references undeclared group '{group}'")]
    UndeclaredGroup { rule: &'static str, group: String },

    #[error("Bond rule {group_a}-{group_b} has bond type 0; types start at 1")]
    InvalidBondType { group_a: String, group_b: String },

    #[error("Bond rule {group_a}-{group_b} has an empty search window ({r_min} > {r_max})")]
    InvalidBondWindow {
        group_a: String,
        group_b: String,
        r_min: f64,
        r_max: f64,
    },
}

#[derive(Debug, Error)]
pub enum FooterLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Unknown footer preset '{0}'")]
    UnknownPreset(String),
    #[error("Invalid footer table in '{path}': {source}")]
    Invalid { path: String, source: ConfigError },
}

/// Binds every atom of one LAMMPS type to a named group.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupRule {
    pub name: String,
    #[serde(rename = "type")]
    pub type_index: u32,
}

/// A static partial charge applied to a whole group.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChargeRule {
    pub group: String,
    pub charge: f64,
}

/// A distance window in which LAMMPS creates bonds between two groups.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct BondRule {
    pub groups: [String; 2],
    pub bond_type: u32,
    pub r_min: f64,
    pub r_max: f64,
}

/// The chemistry-specific tail of the directive text: grouping, charges and
/// bond-creation windows.
///
/// None of these values come from the descriptor file. They are supplied as a
/// TOML table, either one of the built-in presets or a user file.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterConfig {
    #[serde(default)]
    pub groups: Vec<GroupRule>,
    #[serde(default)]
    pub charges: Vec<ChargeRule>,
    #[serde(default)]
    pub bonds: Vec<BondRule>,
}

impl FooterConfig {
    pub fn load(path: &Path) -> Result<Self, FooterLoadError> {
        let path_str = path.to_string_lossy().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| FooterLoadError::Io {
            path: path_str.clone(),
            source: e,
        })?;
        Self::from_toml_str(&content, &path_str)
    }

    /// Loads one of the built-in tables listed by [`FooterConfig::preset_names`].
    pub fn preset(name: &str) -> Result<Self, FooterLoadError> {
        let source = Self::preset_source(name)
            .ok_or_else(|| FooterLoadError::UnknownPreset(name.to_string()))?;
        Self::from_toml_str(source, &format!("preset:{name}"))
    }

    pub fn preset_names() -> impl Iterator<Item = &'static str> {
        PRESETS.iter().map(|(name, _)| *name)
    }

    /// The TOML text of a built-in table, suitable as a starting point for a custom one.
    pub fn preset_source(name: &str) -> Option<&'static str> {
        PRESETS
            .iter()
            .find(|(preset, _)| *preset == name)
            .map(|(_, source)| *source)
    }

    fn from_toml_str(content: &str, origin: &str) -> Result<Self, FooterLoadError> {
        let footer: FooterConfig = toml::from_str(content).map_err(|e| FooterLoadError::Toml {
            path: origin.to_string(),
            source: e,
        })?;
        footer.validate().map_err(|e| FooterLoadError::Invalid {
            path: origin.to_string(),
            source: e,
        })?;
        Ok(footer)
    }

    /// Checks that every rule refers to a declared group and that numeric
    /// parameters are usable by LAMMPS.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut declared = HashSet::new();
        for group in &self.groups {
            if group.type_index == 0 {
                return Err(ConfigError::InvalidTypeIndex(group.name.clone()));
            }
            if !declared.insert(group.name.as_str()) {
                return Err(ConfigError::DuplicateGroup(group.name.clone()));
            }
        }

        for charge in &self.charges {
            if !declared.contains(charge.group.as_str()) {
                return Err(ConfigError::UndeclaredGroup {
                    rule: "Charge",
                    group: charge.group.clone(),
                });
            }
        }

        for bond in &self.bonds {
            let [group_a, group_b] = &bond.groups;
            for group in [group_a, group_b] {
                if !declared.contains(group.as_str()) {
                    return Err(ConfigError::UndeclaredGroup {
                        rule: "Bond",
                        group: group.clone(),
                    });
                }
            }
            if bond.bond_type == 0 {
                return Err(ConfigError::InvalidBondType {
                    group_a: group_a.clone(),
                    group_b: group_b.clone(),
                });
            }
            if bond.r_min > bond.r_max {
                return Err(ConfigError::InvalidBondWindow {
                    group_a: group_a.clone(),
                    group_b: group_b.clone(),
                    r_min: bond.r_min,
                    r_max: bond.r_max,
                });
            }
        }
        Ok(())
    }
}

/// What to do with atoms that appear in no bond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnbondedAtomPolicy {
    /// Leave them without a molecule assignment.
    #[default]
    Exclude,
    /// Give each one its own molecule, numbered after the bonded molecules.
    Singleton,
}

#[derive(Debug, Error)]
#[error("Invalid unbonded-atom policy '{0}'. Expected 'exclude' or 'singleton'.")]
pub struct ParseUnbondedAtomPolicyError(String);

impl FromStr for UnbondedAtomPolicy {
    type Err = ParseUnbondedAtomPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exclude" => Ok(Self::Exclude),
            "singleton" | "singletons" => Ok(Self::Singleton),
            _ => Err(ParseUnbondedAtomPolicyError(s.to_string())),
        }
    }
}

/// Layout options for the emitted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmitterConfig {
    /// Append ` #<label>` to each molecule assignment.
    pub annotate_species: bool,
    /// Precede each block of directives with a blank line.
    pub section_spacing: bool,
    pub unbonded_atoms: UnbondedAtomPolicy,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportConfig {
    pub footer: FooterConfig,
    pub emitter: EmitterConfig,
}

#[derive(Default)]
pub struct ImportConfigBuilder {
    footer: Option<FooterConfig>,
    annotate_species: Option<bool>,
    section_spacing: Option<bool>,
    unbonded_atoms: Option<UnbondedAtomPolicy>,
}

impl ImportConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn footer(mut self, footer: FooterConfig) -> Self {
        self.footer = Some(footer);
        self
    }
    pub fn annotate_species(mut self, enabled: bool) -> Self {
        self.annotate_species = Some(enabled);
        self
    }
    pub fn section_spacing(mut self, enabled: bool) -> Self {
        self.section_spacing = Some(enabled);
        self
    }
    pub fn unbonded_atoms(mut self, policy: UnbondedAtomPolicy) -> Self {
        self.unbonded_atoms = Some(policy);
        self
    }

    pub fn build(self) -> Result<ImportConfig, ConfigError> {
        let footer = self.footer.ok_or(ConfigError::MissingParameter("footer"))?;
        footer.validate()?;
        Ok(ImportConfig {
            footer,
            emitter: EmitterConfig {
                annotate_species: self.annotate_species.unwrap_or(false),
                section_spacing: self.section_spacing.unwrap_or(false),
                unbonded_atoms: self.unbonded_atoms.unwrap_or_default(),
            },
        })
    }
}
