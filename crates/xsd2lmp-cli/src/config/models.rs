use std::path::PathBuf;
use xsd2lmp::engine::config as core_config;

pub struct AppConfig {
    pub input_path: PathBuf,
    /// `None` sends the directives to stdout.
    pub output_path: Option<PathBuf>,
    pub core_config: core_config::ImportConfig,
}
