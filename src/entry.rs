use std::path::{Path, PathBuf};

use clap::{CommandFactory, FromArgMatches};

use crate::args::{RunnerArgs, parse_format_selector};
use crate::config::load_case_config;
use crate::error::{AppError, AppResult};
use crate::formats::FormatRegistry;
use crate::runner::CaseRunner;
use crate::targets::TargetSource;

/// Selector value that lists the registered formats instead of running.
const LIST_FORMATS_SELECTOR: &str = "?";

enum RunPlan {
    ListFormats,
    SkipNoTargets,
    SkipNoConfig,
    Run { config: PathBuf, args: RunnerArgs },
}

pub(crate) fn run() -> AppResult<()> {
    let args = parse_args()?;

    crate::logger::init_logging(args.verbose);

    let registry = FormatRegistry::with_builtins();
    match build_plan(args) {
        RunPlan::ListFormats => {
            list_formats(&registry);
            Ok(())
        }
        RunPlan::SkipNoTargets => {
            tracing::warn!("Target list is empty. Use --target or --load to supply targets.");
            Ok(())
        }
        RunPlan::SkipNoConfig => {
            tracing::warn!("No case config file given. Use --config to supply one.");
            Ok(())
        }
        RunPlan::Run { config, args } => execute_run(&registry, &config, args),
    }
}

fn parse_args() -> AppResult<RunnerArgs> {
    let matches = RunnerArgs::command().get_matches();
    RunnerArgs::from_arg_matches(&matches).map_err(AppError::from)
}

fn build_plan(mut args: RunnerArgs) -> RunPlan {
    if args.format == LIST_FORMATS_SELECTOR {
        return RunPlan::ListFormats;
    }
    if args.targets.is_empty() && args.load.is_none() {
        return RunPlan::SkipNoTargets;
    }
    args.config
        .take()
        .map_or(RunPlan::SkipNoConfig, |config| RunPlan::Run {
            config: PathBuf::from(config),
            args,
        })
}

fn list_formats(registry: &FormatRegistry) {
    println!("Available formats:");
    for descriptor in registry.iter() {
        println!(" * {:10} : {}", descriptor.name, descriptor.description);
    }
}

fn execute_run(registry: &FormatRegistry, config_path: &Path, args: RunnerArgs) -> AppResult<()> {
    tracing::debug!(
        output = %args.output,
        "report output path recorded; reporting is not implemented yet"
    );

    let selector = parse_format_selector(&args.format);
    let load = args.load.as_deref().map(Path::new);
    let targets = TargetSource::new(registry, args.targets, &selector, load)?;

    let config = load_case_config(config_path)?;
    tracing::debug!(cases = config.cases.len(), "case config loaded");

    let stdout = std::io::stdout();
    let mut runner = CaseRunner::new(config, stdout.lock());
    let summary = runner.run(targets)?;
    tracing::info!(
        targets = summary.targets,
        applications = summary.applications,
        "run complete"
    );
    Ok(())
}
