use crate::cli::{PresetArgs, PresetCommands};
use crate::error::{CliError, Result};
use xsd2lmp::engine::config::FooterConfig;

pub fn run(args: PresetArgs) -> Result<()> {
    match args.command {
        PresetCommands::List => {
            for line in list_lines()? {
                println!("{}", line);
            }
        }
        PresetCommands::Show { name } => {
            print!("{}", show(&name)?);
        }
    }
    Ok(())
}

fn list_lines() -> Result<Vec<String>> {
    FooterConfig::preset_names()
        .map(|name| -> Result<String> {
            let footer = FooterConfig::preset(name)?;
            Ok(format!(
                "{:<28} {} groups, {} charges, {} bond windows",
                name,
                footer.groups.len(),
                footer.charges.len(),
                footer.bonds.len()
            ))
        })
        .collect()
}

fn show(name: &str) -> Result<&'static str> {
    FooterConfig::preset_source(name).ok_or_else(|| {
        let available: Vec<&str> = FooterConfig::preset_names().collect();
        CliError::Argument(format!(
            "Unknown preset '{}'. Available presets: {}",
            name,
            available.join(", ")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_describes_every_preset() {
        let lines = list_lines().unwrap();
        assert_eq!(lines.len(), FooterConfig::preset_names().count());
        assert!(lines[0].starts_with("nitric-acid-hydrates "));
        assert!(lines[0].contains("10 groups, 8 charges, 6 bond windows"));
        assert!(lines[1].contains("10 charges"));
    }

    #[test]
    fn show_returns_parseable_toml() {
        let source = show("nitric-acid-hydrates-spce").unwrap();
        let footer: FooterConfig = toml::from_str(source).unwrap();
        assert!(footer.validate().is_ok());
    }

    #[test]
    fn show_lists_alternatives_for_unknown_names() {
        let err = show("zeolite").unwrap_err();
        assert!(matches!(err, CliError::Argument(ref msg) if msg.contains("nitric-acid-hydrates")));
    }
}
