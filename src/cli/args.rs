// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for datakit.

use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::{Path, PathBuf};

/// Positional value that selects standard input instead of a file.
pub const STDIN_MARKER: &str = "-";

/// datakit - analyze and export data files
#[derive(Parser, Debug)]
#[command(name = "datakit")]
#[command(version, about = "Analyze and export data files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze input data
    Analyze(AnalyzeArgs),

    /// Export processed data
    Export(ExportArgs),
}

impl Commands {
    /// Number of `-v` flags given, for commands that accept them
    pub fn verbosity(&self) -> u8 {
        match self {
            Commands::Analyze(args) => args.verbose,
            Commands::Export(_) => 0,
        }
    }
}

/// Arguments for the analyze subcommand
#[derive(clap::Args, Debug)]
pub struct AnalyzeArgs {
    /// Input file or '-' for stdin
    #[arg(default_value = STDIN_MARKER)]
    pub input: PathBuf,

    /// Input format (auto-detected if not specified)
    #[arg(long)]
    pub format: Option<String>,

    /// Output file path
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Year to analyze
    #[arg(long, allow_negative_numbers = true)]
    pub year: Option<i64>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl AnalyzeArgs {
    /// Where the input should be read from
    pub fn source(&self) -> InputSource {
        InputSource::from_arg(&self.input)
    }
}

/// Arguments for the export subcommand
#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Input file
    pub input: PathBuf,

    /// Export format
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,
}

/// Formats the export subcommand can produce
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values
    #[default]
    Csv,

    /// JSON document
    Json,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

/// Input location for the analyze subcommand
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == STDIN_MARKER {
            InputSource::Stdin
        } else {
            InputSource::File(arg.to_path_buf())
        }
    }

    pub fn is_stdin(&self) -> bool {
        matches!(self, InputSource::Stdin)
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
