use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde_json::Value;

/// Case configuration document: an ordered list of named cases. The schema
/// beyond `cases` being that list is deliberately open; unknown keys ride
/// along in each entry's settings.
#[derive(Debug, Default, Deserialize)]
pub struct CaseConfig {
    pub cases: Vec<CaseEntry>,
}

/// One named case: either a bare name or a mapping carrying a `name` plus
/// arbitrary case-specific settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CaseEntry {
    Name(String),
    Detailed {
        name: String,
        #[serde(flatten)]
        settings: BTreeMap<String, Value>,
    },
}

impl CaseEntry {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Detailed { name, .. } => name,
        }
    }
}

impl fmt::Display for CaseEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Detailed { name, settings } => {
                f.write_str(name)?;
                if settings.is_empty() {
                    return Ok(());
                }
                f.write_str(" {")?;
                let mut first = true;
                for (key, value) in settings {
                    if first {
                        first = false;
                    } else {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}
