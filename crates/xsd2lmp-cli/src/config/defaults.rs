use xsd2lmp::engine::config::UnbondedAtomPolicy;

pub struct DefaultsConfig {
    pub preset: String,
    pub annotate_species: bool,
    pub section_spacing: bool,
    pub unbonded_atoms: UnbondedAtomPolicy,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            preset: "nitric-acid-hydrates".to_string(),
            annotate_species: false,
            section_spacing: false,
            unbonded_atoms: UnbondedAtomPolicy::Exclude,
        }
    }
}
