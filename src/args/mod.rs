//! CLI argument types and parsing helpers.
mod cli;
mod parsers;


pub use cli::RunnerArgs;
pub use parsers::{FormatSelector, parse_format_selector};
