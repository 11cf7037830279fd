use crate::cli::ImportArgs;
use crate::config::{AppConfig, build_config};
use crate::error::{CliError, Result};
use std::io::Write;
use tracing::info;
use xsd2lmp::workflows::import::{self, ImportSummary};

pub fn run(args: ImportArgs) -> Result<()> {
    info!("Merging configuration from defaults, file and CLI arguments...");
    let config = build_config(&args)?;
    execute(&config)
}

fn execute(config: &AppConfig) -> Result<()> {
    info!("Invoking the import workflow on {:?}", &config.input_path);
    let output = import::run(&config.input_path, &config.core_config)?;
    let summary = &output.summary;

    match &config.output_path {
        Some(path) => {
            std::fs::write(path, &output.directives).map_err(|e| CliError::Output {
                path: path.clone(),
                source: e,
            })?;
            println!("{}", describe(summary));
            println!("✓ Directives written to: {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.directives.as_bytes())?;
            stdout.flush()?;
            eprintln!("{}", describe(summary));
        }
    }
    Ok(())
}

fn describe(summary: &ImportSummary) -> String {
    let mut text = format!(
        "Imported {} atom(s), {} bond(s), {} molecule(s); box {} x {} x {}",
        summary.atoms,
        summary.bonds,
        summary.molecules,
        summary.cell_diagonal.x,
        summary.cell_diagonal.y,
        summary.cell_diagonal.z
    );
    if summary.weak_bonds_excluded > 0 {
        text.push_str(&format!(
            "; {} hydrogen bond(s) ignored",
            summary.weak_bonds_excluded
        ));
    }
    if summary.unbonded_atoms > 0 {
        text.push_str(&format!("; {} atom(s) in no bond", summary.unbonded_atoms));
    }
    if summary.skipped_lines > 0 {
        text.push_str(&format!("; {} line(s) skipped", summary.skipped_lines));
    }
    if summary.duplicate_atom_ids > 0 {
        text.push_str(&format!(
            "; {} duplicate atom ID(s)",
            summary.duplicate_atom_ids
        ));
    }
    text
}
