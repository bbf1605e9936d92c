use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult, FormatError};

use super::{InputParser, TargetStream};

/// Flat text input: every line is one target, kept verbatim including its
/// line terminator. Options are ignored.
pub struct FlatParser {
    path: PathBuf,
}

impl FlatParser {
    pub(crate) fn construct(
        path: &Path,
        _options: Option<&str>,
    ) -> AppResult<Box<dyn InputParser>> {
        Ok(Box::new(Self {
            path: path.to_path_buf(),
        }))
    }
}

impl InputParser for FlatParser {
    fn produce_targets(self: Box<Self>) -> AppResult<TargetStream> {
        let file = File::open(&self.path).map_err(|err| {
            AppError::format(FormatError::OpenSource {
                path: self.path.clone(),
                source: err,
            })
        })?;
        Ok(Box::new(LineStream {
            path: self.path,
            reader: BufReader::new(file),
        }))
    }
}

/// Pull-based line reader. `BufRead::lines` would strip terminators, which
/// have to stay part of the target.
struct LineStream {
    path: PathBuf,
    reader: BufReader<File>,
}

impl Iterator for LineStream {
    type Item = AppResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(Ok(line)),
            Err(err) => Some(Err(AppError::format(FormatError::ReadSource {
                path: self.path.clone(),
                source: err,
            }))),
        }
    }
}
