use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{AppError, AppResult, FormatError};

use super::{InputParser, TargetStream, read_source, sequence_targets};

/// JSON input: the whole file is one document whose root must be a sequence;
/// every element becomes one target. Options are ignored.
pub struct JsonParser {
    path: PathBuf,
}

impl JsonParser {
    pub(crate) fn construct(
        path: &Path,
        _options: Option<&str>,
    ) -> AppResult<Box<dyn InputParser>> {
        Ok(Box::new(Self {
            path: path.to_path_buf(),
        }))
    }
}

impl InputParser for JsonParser {
    fn produce_targets(self: Box<Self>) -> AppResult<TargetStream> {
        let content = read_source(&self.path)?;
        let document: Value = serde_json::from_str(&content).map_err(|err| {
            AppError::format(FormatError::ParseJson {
                path: self.path.clone(),
                source: err,
            })
        })?;
        sequence_targets(document, &self.path)
    }
}
