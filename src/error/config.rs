use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse YAML config '{path}': {source}")]
    ParseYaml {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },
    #[error("Failed to parse JSON config '{path}': {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unsupported config extension '{ext}'. Use .yaml, .yml or .json.")]
    UnsupportedExtension { ext: String },
    #[error("Config file must have a .yaml, .yml or .json extension.")]
    MissingExtension,
    #[error("No such format '{name}'. Pass --format '?' to list available formats.")]
    UnknownFormat { name: String },
    #[error("Format '{format}' requires options. Syntax: {format}:<options>.")]
    MissingFormatOptions { format: String },
}
