use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{AppError, AppResult, ConfigError, FormatError};

use super::{InputParser, TargetStream};

/// Regex input: every non-overlapping match of the pattern on each
/// whitespace-trimmed line becomes one target, left to right. The pattern is
/// mandatory and arrives as the options suffix of the selector.
pub struct RegexParser {
    path: PathBuf,
    pattern: Regex,
}

impl RegexParser {
    pub(crate) fn construct(path: &Path, options: Option<&str>) -> AppResult<Box<dyn InputParser>> {
        let pattern = options.ok_or_else(|| {
            AppError::config(ConfigError::MissingFormatOptions {
                format: "regex".to_owned(),
            })
        })?;
        let compiled = Regex::new(pattern).map_err(|err| {
            AppError::format(FormatError::InvalidPattern {
                pattern: pattern.to_owned(),
                source: err,
            })
        })?;
        Ok(Box::new(Self {
            path: path.to_path_buf(),
            pattern: compiled,
        }))
    }
}

impl InputParser for RegexParser {
    fn produce_targets(self: Box<Self>) -> AppResult<TargetStream> {
        let file = File::open(&self.path).map_err(|err| {
            AppError::format(FormatError::OpenSource {
                path: self.path.clone(),
                source: err,
            })
        })?;
        Ok(Box::new(MatchStream {
            path: self.path,
            pattern: self.pattern,
            lines: BufReader::new(file).lines(),
            pending: VecDeque::new(),
        }))
    }
}

/// Streams matches line by line; `pending` holds the matches of the line
/// currently being drained.
struct MatchStream {
    path: PathBuf,
    pattern: Regex,
    lines: Lines<BufReader<File>>,
    pending: VecDeque<String>,
}

impl Iterator for MatchStream {
    type Item = AppResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(found) = self.pending.pop_front() {
                return Some(Ok(found));
            }
            match self.lines.next()? {
                Ok(line) => {
                    let trimmed = line.trim();
                    self.pending.extend(
                        self.pattern
                            .find_iter(trimmed)
                            .map(|found| found.as_str().to_owned()),
                    );
                }
                Err(err) => {
                    return Some(Err(AppError::format(FormatError::ReadSource {
                        path: self.path.clone(),
                        source: err,
                    })));
                }
            }
        }
    }
}
