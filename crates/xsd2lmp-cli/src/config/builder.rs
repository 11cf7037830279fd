use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::ImportArgs;
use crate::error::{CliError, Result};
use std::path::PathBuf;
use tracing::{debug, info};
use xsd2lmp::engine::config as core_config;

/// Where the footer table comes from.
#[derive(Debug, Clone, PartialEq)]
enum FooterSource {
    Preset(String),
    File(PathBuf),
}

pub fn build_config(args: &ImportArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };
    if file_config.preset.is_some() && file_config.footer.is_some() {
        return Err(CliError::Config(
            "`preset` and `footer` are mutually exclusive in the configuration file.".to_string(),
        ));
    }

    let file_config = apply_set_values(file_config, &args.set_values)?;

    let footer_source = resolve_footer_source(args, &file_config, &defaults);
    let footer = load_footer(&footer_source)?;

    let annotate_species = args.annotate_species
        || file_config
            .annotate_species
            .unwrap_or(defaults.annotate_species);
    let section_spacing = args.section_spacing
        || file_config
            .section_spacing
            .unwrap_or(defaults.section_spacing);
    let unbonded_atoms = match (args.unbonded_atoms, file_config.unbonded_atoms.as_deref()) {
        (Some(policy), _) => policy,
        (None, Some(raw)) => raw
            .parse::<core_config::UnbondedAtomPolicy>()
            .map_err(|e| CliError::Config(e.to_string()))?,
        (None, None) => defaults.unbonded_atoms,
    };

    let core_config = core_config::ImportConfigBuilder::new()
        .footer(footer)
        .annotate_species(annotate_species)
        .section_spacing(section_spacing)
        .unbonded_atoms(unbonded_atoms)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        input_path: args.input.clone(),
        output_path: args.output.clone(),
        core_config,
    })
}

fn resolve_footer_source(
    args: &ImportArgs,
    file_config: &FileConfig,
    defaults: &DefaultsConfig,
) -> FooterSource {
    if let Some(name) = &args.preset {
        FooterSource::Preset(name.clone())
    } else if let Some(path) = &args.footer {
        FooterSource::File(path.clone())
    } else if let Some(name) = &file_config.preset {
        FooterSource::Preset(name.clone())
    } else if let Some(path) = &file_config.footer {
        FooterSource::File(path.clone())
    } else {
        FooterSource::Preset(defaults.preset.clone())
    }
}

fn load_footer(source: &FooterSource) -> Result<core_config::FooterConfig> {
    match source {
        FooterSource::Preset(name) => {
            info!("Using built-in footer preset '{}'.", name);
            Ok(core_config::FooterConfig::preset(name)?)
        }
        FooterSource::File(path) => {
            info!("Loading footer table from {:?}", path);
            Ok(core_config::FooterConfig::load(path)?)
        }
    }
}

/// Applies `-S KEY=VALUE` overrides on top of the file layer. Setting one
/// footer source clears the other.
fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };
        debug!("Applying override {} = {}", key, value_str);

        let parse_bool = |value: &str| -> Result<bool> {
            value.parse().map_err(|_| {
                CliError::Config(format!("Invalid boolean value for {}: {}", key, value))
            })
        };

        match key {
            "preset" => {
                config.preset = Some(value_str.to_string());
                config.footer = None;
            }
            "footer" => {
                config.footer = Some(PathBuf::from(value_str));
                config.preset = None;
            }
            "annotate-species" => config.annotate_species = Some(parse_bool(value_str)?),
            "section-spacing" => config.section_spacing = Some(parse_bool(value_str)?),
            "unbonded-atoms" => config.unbonded_atoms = Some(value_str.to_string()),
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
