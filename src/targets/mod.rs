//! Combines explicit CLI targets with targets drawn lazily from a source
//! file.


use std::path::Path;
use std::vec;

use crate::args::FormatSelector;
use crate::error::{AppError, AppResult, ConfigError};
use crate::formats::{FormatRegistry, InputParser, TargetStream};

/// One lazy sequence over every target of a run: explicit targets first, in
/// the order given, then everything the selected input parser produces.
///
/// Single pass. Pulling the file segment is what opens and reads the source
/// file, so I/O and decode errors surface as `Err` items during iteration;
/// selector problems (unknown format, bad options) fail in
/// [`TargetSource::new`] before any target is yielded.
pub struct TargetSource {
    explicit: vec::IntoIter<String>,
    file: FileTargets,
}

enum FileTargets {
    None,
    Pending(Box<dyn InputParser>),
    Active(TargetStream),
    Done,
}

impl TargetSource {
    /// Performs the eager half of target resolution: looks the selector up
    /// in `registry` and constructs the parser when `load` names a source
    /// file. The file itself is not touched.
    ///
    /// # Errors
    ///
    /// Fails when the selector names an unregistered format or its options
    /// do not satisfy the selected format.
    pub fn new(
        registry: &FormatRegistry,
        explicit: Vec<String>,
        selector: &FormatSelector,
        load: Option<&Path>,
    ) -> AppResult<Self> {
        let file = match load {
            Some(path) => {
                let descriptor = registry.lookup(&selector.name).ok_or_else(|| {
                    AppError::config(ConfigError::UnknownFormat {
                        name: selector.name.clone(),
                    })
                })?;
                FileTargets::Pending(descriptor.construct(path, selector.options.as_deref())?)
            }
            None => FileTargets::None,
        };
        Ok(Self {
            explicit: explicit.into_iter(),
            file,
        })
    }
}

impl Iterator for TargetSource {
    type Item = AppResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(target) = self.explicit.next() {
            return Some(Ok(target));
        }
        loop {
            match std::mem::replace(&mut self.file, FileTargets::Done) {
                FileTargets::None | FileTargets::Done => return None,
                FileTargets::Pending(parser) => match parser.produce_targets() {
                    Ok(stream) => {
                        self.file = FileTargets::Active(stream);
                    }
                    Err(err) => return Some(Err(err)),
                },
                FileTargets::Active(mut stream) => {
                    let item = stream.next();
                    if item.is_some() {
                        self.file = FileTargets::Active(stream);
                    }
                    return item;
                }
            }
        }
    }
}
