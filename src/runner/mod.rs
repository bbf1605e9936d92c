//! Applies every configured case to every target, in order.


use std::io::Write;

use crate::config::CaseConfig;
use crate::error::AppResult;

/// Totals for one completed run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub targets: u64,
    pub applications: u64,
}

/// Drives the target x case cross product. Holds the loaded case list for
/// the duration of one run and writes one display line per application to
/// the sink.
pub struct CaseRunner<W> {
    config: CaseConfig,
    out: W,
}

impl<W: Write> CaseRunner<W> {
    #[must_use]
    pub const fn new(config: CaseConfig, out: W) -> Self {
        Self { config, out }
    }

    /// Pulls each target in sequence order and applies every case to it in
    /// declared order. Total applications over a full run equal
    /// `targets x cases`; an individual application never short-circuits the
    /// remaining cases or targets.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by the target sequence, or an I/O
    /// error from the display sink. A failed pull aborts the run.
    pub fn run<I>(&mut self, targets: I) -> AppResult<RunSummary>
    where
        I: IntoIterator<Item = AppResult<String>>,
    {
        let mut summary = RunSummary::default();
        for target in targets {
            let target = target?;
            self.run_on_target(&target)?;
            summary.targets = summary.targets.saturating_add(1);
            summary.applications = summary
                .applications
                .saturating_add(self.config.cases.len() as u64);
        }
        Ok(summary)
    }

    fn run_on_target(&mut self, target: &str) -> AppResult<()> {
        for case in &self.config.cases {
            tracing::debug!(case = case.name(), %target, "applying case");
            writeln!(self.out, "{}\t{}", case, target)?;
        }
        Ok(())
    }
}
