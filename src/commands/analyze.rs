// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Analyze command

use std::io::Write;

use crate::cli::args::AnalyzeArgs;
use crate::error::Result;

/// Execute the analyze command
pub fn execute(args: &AnalyzeArgs, out: &mut dyn Write) -> Result<()> {
    let source = args.source();
    tracing::info!(
        input = %source,
        format = args.format.as_deref().unwrap_or("auto"),
        output = ?args.output,
        year = ?args.year,
        "analyze requested"
    );
    if source.is_stdin() {
        tracing::debug!("reading input from stdin");
    }

    writeln!(out, "Analyzing {}", args.input.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn analyze_args(input: &str) -> AnalyzeArgs {
        AnalyzeArgs {
            input: PathBuf::from(input),
            format: None,
            output: None,
            year: None,
            verbose: 0,
        }
    }

    #[test]
    fn test_execute_names_input() {
        let mut out = Vec::new();
        execute(&analyze_args("report.csv"), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Analyzing report.csv\n");
    }

    #[test]
    fn test_execute_stdin_marker() {
        let mut out = Vec::new();
        execute(&analyze_args("-"), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Analyzing -\n");
    }

    #[test]
    #[cfg(unix)]
    fn test_execute_non_utf8_input() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let args = AnalyzeArgs {
            input: PathBuf::from(OsStr::from_bytes(b"d\xff.t")),
            ..analyze_args("-")
        };

        let mut out = Vec::new();
        execute(&args, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Analyzing d\u{FFFD}.t\n");
    }

    #[test]
    fn test_execute_ignores_optional_flags() {
        let args = AnalyzeArgs {
            format: Some("json".to_string()),
            output: Some(PathBuf::from("out.txt")),
            year: Some(2023),
            verbose: 2,
            ..analyze_args("data.json")
        };

        let mut out = Vec::new();
        execute(&args, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Analyzing data.json\n");
    }
}
