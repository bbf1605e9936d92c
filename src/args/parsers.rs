/// A `--format` value split into its registry name and options suffix.
///
/// The suffix is everything after the first `:`; the name portion is looked
/// up in the format registry verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSelector {
    pub name: String,
    pub options: Option<String>,
}

#[must_use]
pub fn parse_format_selector(value: &str) -> FormatSelector {
    value.split_once(':').map_or_else(
        || FormatSelector {
            name: value.to_owned(),
            options: None,
        },
        |(name, options)| FormatSelector {
            name: name.to_owned(),
            options: Some(options.to_owned()),
        },
    )
}
