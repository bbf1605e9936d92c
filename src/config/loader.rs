use std::path::Path;

use crate::error::{AppError, AppResult, ConfigError};

use super::types::CaseConfig;

/// Loads the case configuration document from `path`, dispatching the
/// decoder on the file extension.
///
/// # Errors
///
/// Returns an error when the file cannot be read or parsed, or when the
/// extension names no supported config format.
pub fn load_case_config(path: &Path) -> AppResult<CaseConfig> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::config(ConfigError::ReadConfig {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml" | "yml") => serde_yml::from_str(&content).map_err(|err| {
            AppError::config(ConfigError::ParseYaml {
                path: path.to_path_buf(),
                source: err,
            })
        }),
        Some("json") => serde_json::from_str(&content).map_err(|err| {
            AppError::config(ConfigError::ParseJson {
                path: path.to_path_buf(),
                source: err,
            })
        }),
        Some(ext) => Err(AppError::config(ConfigError::UnsupportedExtension {
            ext: ext.to_owned(),
        })),
        None => Err(AppError::config(ConfigError::MissingExtension)),
    }
}
