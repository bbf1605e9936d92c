//! Core library for the `caseload` CLI.
//!
//! This crate provides the internal building blocks used by the binary: CLI
//! argument types, case configuration loading, the input-format registry with
//! its parser variants, the target source combinator, and the case runner.
//! The primary user-facing interface is the `caseload` command-line
//! application; library APIs may evolve as the CLI grows.
pub mod args;
pub mod config;
pub mod error;
pub mod formats;
pub mod runner;
pub mod targets;
