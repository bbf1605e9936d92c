use std::collections::BTreeMap;
use std::path::Path;

use crate::error::AppResult;

use super::{FlatParser, InputParser, JsonParser, RegexParser, YamlParser};

/// Constructor for one parser variant. Validates the selector options
/// eagerly but never touches the source file.
pub type ParserConstructor = fn(&Path, Option<&str>) -> AppResult<Box<dyn InputParser>>;

/// Registry entry describing one input format.
#[derive(Clone, Copy)]
pub struct FormatDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    constructor: ParserConstructor,
}

impl FormatDescriptor {
    #[must_use]
    pub const fn new(
        name: &'static str,
        description: &'static str,
        constructor: ParserConstructor,
    ) -> Self {
        Self {
            name,
            description,
            constructor,
        }
    }

    /// Builds a parser for `path` with the selector's options suffix.
    ///
    /// # Errors
    ///
    /// Fails when the options do not satisfy the format, e.g. a missing or
    /// invalid regex pattern.
    pub fn construct(
        &self,
        path: &Path,
        options: Option<&str>,
    ) -> AppResult<Box<dyn InputParser>> {
        (self.constructor)(path, options)
    }
}

/// Built-in parser variants, registered in one place so every format is
/// available before the first lookup.
const BUILTIN_FORMATS: [FormatDescriptor; 4] = [
    FormatDescriptor::new(
        "flat",
        "Flat text file with one target per line; no extra parsing.",
        FlatParser::construct,
    ),
    FormatDescriptor::new(
        "json",
        "JSON file holding a sequence of targets at the top level.",
        JsonParser::construct,
    ),
    FormatDescriptor::new(
        "yaml",
        "YAML file holding a sequence of targets at the top level.",
        YamlParser::construct,
    ),
    FormatDescriptor::new(
        "regex",
        "Usage: regex:<pattern>. Flat text file; every match on each line becomes a target.",
        RegexParser::construct,
    ),
];

/// Maps short format names to their descriptors. Entries are written once
/// during startup and only read afterwards; there is no removal operation.
pub struct FormatRegistry {
    entries: BTreeMap<&'static str, FormatDescriptor>,
}

impl FormatRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Registry preloaded with the built-in parser variants.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for descriptor in BUILTIN_FORMATS {
            registry.register(descriptor);
        }
        registry
    }

    /// Inserts `descriptor`, replacing any entry registered under the same
    /// name.
    pub fn register(&mut self, descriptor: FormatDescriptor) {
        self.entries.insert(descriptor.name, descriptor);
    }

    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&FormatDescriptor> {
        self.entries.get(name)
    }

    /// All registered formats in name order, for `--format '?'` listings.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &FormatDescriptor> {
        self.entries.values()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}
