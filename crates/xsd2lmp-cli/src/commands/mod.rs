pub mod import;
pub mod preset;
