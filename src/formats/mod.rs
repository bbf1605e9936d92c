//! Input-format registry and the parser variants behind `--format`.
//!
//! Each format is a strategy for extracting target strings from a source
//! file. Formats are registered under a short name in a [`FormatRegistry`]
//! built at startup; the selected format constructs an [`InputParser`] from
//! the source path plus the free-form options suffix of the selector.
mod flat;
mod json;
mod regex;
mod registry;
mod yaml;


pub use flat::FlatParser;
pub use json::JsonParser;
pub use regex::RegexParser;
pub use registry::{FormatDescriptor, FormatRegistry, ParserConstructor};
pub use yaml::YamlParser;

use std::path::Path;

use serde_json::Value;

use crate::error::{AppError, AppResult, FormatError};

/// A finite, single-pass stream of target strings.
///
/// Pulling the next item is what performs file I/O, so a missing or
/// unreadable source file surfaces at the first pull rather than at parser
/// construction. The stream is not restartable.
pub type TargetStream = Box<dyn Iterator<Item = AppResult<String>>>;

/// One input-format strategy, constructed from a source path plus the
/// options suffix of the format selector.
pub trait InputParser {
    /// Consumes the parser, opens the source file and returns the lazy
    /// target stream.
    ///
    /// # Errors
    ///
    /// Fails when the source file cannot be opened, read or decoded in the
    /// format this parser handles.
    fn produce_targets(self: Box<Self>) -> AppResult<TargetStream>;
}

pub(crate) fn read_source(path: &Path) -> AppResult<String> {
    std::fs::read_to_string(path).map_err(|err| {
        AppError::format(FormatError::OpenSource {
            path: path.to_path_buf(),
            source: err,
        })
    })
}

/// Turns a decoded document into the target stream. The document root must
/// be a sequence; strings pass through verbatim, every other element keeps
/// its compact JSON rendering.
pub(crate) fn sequence_targets(document: Value, path: &Path) -> AppResult<TargetStream> {
    match document {
        Value::Array(elements) => Ok(Box::new(
            elements
                .into_iter()
                .map(|element| Ok(element_to_target(element))),
        )),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Object(_) => {
            Err(AppError::format(FormatError::RootNotSequence {
                path: path.to_path_buf(),
            }))
        }
    }
}

fn element_to_target(element: Value) -> String {
    if let Value::String(text) = element {
        text
    } else {
        element.to_string()
    }
}
