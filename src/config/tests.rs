use super::*;
use crate::error::{AppError, ConfigError};

use tempfile::tempdir;

fn write_config(
    dir: &tempfile::TempDir,
    name: &str,
    content: &str,
) -> Result<std::path::PathBuf, String> {
    let path = dir.path().join(name);
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;
    Ok(path)
}

#[test]
fn parse_yaml_config_with_named_cases() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let content = "cases:\n  - smoke\n  - name: probe\n    retries: 3\n  - deep\n";
    let path = write_config(&dir, "cases.yaml", content)?;

    let config = load_case_config(&path).map_err(|err| format!("load failed: {}", err))?;
    let names: Vec<&str> = config.cases.iter().map(CaseEntry::name).collect();
    if names != ["smoke", "probe", "deep"] {
        return Err(format!("Unexpected case order: {:?}", names));
    }
    Ok(())
}

#[test]
fn parse_json_config_with_named_cases() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let content = r#"{ "cases": ["smoke", { "name": "probe", "retries": 3 }] }"#;
    let path = write_config(&dir, "cases.json", content)?;

    let config = load_case_config(&path).map_err(|err| format!("load failed: {}", err))?;
    let names: Vec<&str> = config.cases.iter().map(CaseEntry::name).collect();
    if names != ["smoke", "probe"] {
        return Err(format!("Unexpected case order: {:?}", names));
    }
    Ok(())
}

#[test]
fn missing_config_file_reports_the_path() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("absent.yaml");

    match load_case_config(&path) {
        Err(AppError::Config(ConfigError::ReadConfig { path: reported, .. })) => {
            if reported == path {
                Ok(())
            } else {
                Err(format!("Unexpected path: {}", reported.display()))
            }
        }
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected a read error".to_owned()),
    }
}

#[test]
fn invalid_yaml_config_is_rejected() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = write_config(&dir, "cases.yaml", "cases: [unclosed\n")?;

    match load_case_config(&path) {
        Err(AppError::Config(ConfigError::ParseYaml { .. })) => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected a parse error".to_owned()),
    }
}

#[test]
fn unsupported_extension_is_rejected() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = write_config(&dir, "cases.toml", "cases = []\n")?;

    match load_case_config(&path) {
        Err(AppError::Config(ConfigError::UnsupportedExtension { ext })) => {
            if ext == "toml" {
                Ok(())
            } else {
                Err(format!("Unexpected extension: {}", ext))
            }
        }
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected an unsupported-extension error".to_owned()),
    }
}

#[test]
fn detailed_case_keeps_extra_settings() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let content = "cases:\n  - name: probe\n    retries: 3\n    timeout: 10s\n";
    let path = write_config(&dir, "cases.yml", content)?;

    let config = load_case_config(&path).map_err(|err| format!("load failed: {}", err))?;
    let case = config
        .cases
        .first()
        .ok_or_else(|| "Expected one case".to_owned())?;
    match case {
        CaseEntry::Detailed { name, settings } => {
            if name != "probe" {
                return Err(format!("Unexpected name: {}", name));
            }
            let keys: Vec<&str> = settings.keys().map(String::as_str).collect();
            if keys != ["retries", "timeout"] {
                return Err(format!("Unexpected settings keys: {:?}", keys));
            }
            Ok(())
        }
        CaseEntry::Name(name) => Err(format!("Expected a detailed case, got '{}'", name)),
    }
}
