use clap::Parser;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Configuration-driven test runner - applies an ordered list of named cases to every target, with pluggable input formats for loading targets from files."
)]
pub struct RunnerArgs {
    /// Case configuration document (YAML or JSON)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<String>,

    /// Report output path (reporting is not implemented yet)
    #[arg(long, short = 'o', value_name = "PATH", default_value = "report.yaml")]
    pub output: String,

    /// Load targets from a file, parsed according to --format
    #[arg(long, short = 'l', value_name = "PATH")]
    pub load: Option<String>,

    /// Input format as name or name:options; pass '?' to list formats
    #[arg(long, short = 'f', default_value = "flat")]
    pub format: String,

    /// Explicit target (repeatable); tested in order, before targets loaded from a file
    #[arg(long = "target", short = 't', value_name = "STRING")]
    pub targets: Vec<String>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
