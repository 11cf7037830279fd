use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use xsd2lmp::engine::config::UnbondedAtomPolicy;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "xsd2lmp - Converts Materials Studio crystal descriptors (.xsd) into LAMMPS structure-building directives.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a crystal descriptor into LAMMPS directives.
    Import(ImportArgs),
    /// Inspect the built-in footer tables (groups, charges, bond windows).
    Preset(PresetArgs),
}

/// Arguments for the `import` subcommand.
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Path to the input crystal descriptor (e.g., crystal.xsd).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the directive text. Written to stdout when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to an import configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Footer Source ---
    /// Use a built-in footer table (see `xsd2lmp preset list`).
    #[arg(long, value_name = "NAME", conflicts_with = "footer")]
    pub preset: Option<String>,

    /// Use a footer table from a TOML file.
    #[arg(long, value_name = "PATH")]
    pub footer: Option<PathBuf>,

    // --- Layout Overrides ---
    /// Append the species label as a comment to each molecule assignment.
    #[arg(long)]
    pub annotate_species: bool,

    /// Separate directive blocks with blank lines.
    #[arg(long)]
    pub section_spacing: bool,

    /// How to treat atoms that appear in no bond: 'exclude' or 'singleton'.
    #[arg(long = "unbonded", value_name = "POLICY")]
    pub unbonded_atoms: Option<UnbondedAtomPolicy>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S section-spacing=true
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

/// Arguments for the `preset` subcommand.
#[derive(Args, Debug)]
pub struct PresetArgs {
    #[command(subcommand)]
    pub command: PresetCommands,
}

#[derive(Subcommand, Debug)]
pub enum PresetCommands {
    /// List the names of the built-in footer tables.
    List,
    /// Print a built-in footer table as TOML.
    Show {
        /// Name of the preset.
        #[arg(required = true)]
        name: String,
    },
}
