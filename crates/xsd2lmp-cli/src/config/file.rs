use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Import settings as written in a TOML configuration file. Every key is
/// optional; absent keys fall through to the built-in defaults.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub preset: Option<String>,
    pub footer: Option<PathBuf>,
    pub annotate_species: Option<bool>,
    pub section_spacing: Option<bool>,
    pub unbonded_atoms: Option<String>,
}

impl FileConfig {
    /// Reads the file and resolves a relative `footer` against the file's own
    /// directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let mut config: FileConfig =
            toml::from_str(&content).map_err(|e| CliError::FileParsing {
                path: path.to_path_buf(),
                source: e.into(),
            })?;

        if let (Some(footer), Some(base)) = (config.footer.as_mut(), path.parent()) {
            if footer.is_relative() {
                *footer = base.join(&*footer);
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_all_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("import.toml");
        fs::write(
            &path,
            r#"
            preset = "nitric-acid-hydrates-spce"
            annotate-species = true
            section-spacing = false
            unbonded-atoms = "singleton"
            "#,
        )
        .unwrap();

        let config = FileConfig::from_file(&path).unwrap();
        assert_eq!(config.preset.as_deref(), Some("nitric-acid-hydrates-spce"));
        assert_eq!(config.annotate_species, Some(true));
        assert_eq!(config.section_spacing, Some(false));
        assert_eq!(config.unbonded_atoms.as_deref(), Some("singleton"));
        assert_eq!(config.footer, None);
    }

    #[test]
    fn relative_footer_is_resolved_next_to_the_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("import.toml");
        fs::write(&path, "footer = \"tables/water.toml\"\n").unwrap();

        let config = FileConfig::from_file(&path).unwrap();
        assert_eq!(config.footer, Some(dir.path().join("tables/water.toml")));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("import.toml");
        fs::write(&path, "annotate = true\n").unwrap();

        let result = FileConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let result = FileConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
