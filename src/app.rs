// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Process-level driver
//!
//! Parses arguments, sets up settings and logging, dispatches the command and
//! maps the outcome to an exit status. Usage errors are rendered by clap and
//! never reach the dispatcher; everything after parsing is reported as
//! `Error: <message>` with status 1.

use std::ffi::OsString;
use std::io::Write;
use std::path::Path;

use clap::{CommandFactory, Parser};

use crate::cli::{Cli, Commands};
use crate::commands;
use crate::config::Settings;
use crate::error::Result;
use crate::logging;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Run with settings from the default location.
pub fn run<I, T>(argv: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    run_with(argv, &Settings::default_path(), out, err)
}

/// Run with settings loaded from `settings_path`, returning the exit status.
pub fn run_with<I, T>(
    argv: I,
    settings_path: &Path,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(&e, out, err),
    };

    let Some(command) = cli.command else {
        let help = Cli::command().render_help();
        if let Err(e) = write!(out, "{help}") {
            let _ = writeln!(err, "Error: {e}");
        }
        return EXIT_FAILURE;
    };

    match execute(&command, settings_path, out) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            let _ = writeln!(err, "Error: {e}");
            EXIT_FAILURE
        }
    }
}

fn execute(command: &Commands, settings_path: &Path, out: &mut dyn Write) -> Result<()> {
    let settings = Settings::load_from(settings_path)?;
    logging::init(&settings.logging, command.verbosity())?;
    commands::dispatch(command, out)?;
    out.flush()?;
    Ok(())
}

/// Help and version requests go to stdout with status 0; usage errors go to
/// stderr with clap's usage status. A help or version text that cannot be
/// written fails the run.
fn report_parse_error(e: &clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    let rendered = e.render();
    if e.use_stderr() {
        let _ = write!(err, "{rendered}");
        return e.exit_code();
    }

    match write!(out, "{rendered}").and_then(|()| out.flush()) {
        Ok(()) => e.exit_code(),
        Err(write_err) => {
            let _ = writeln!(err, "Error: {write_err}");
            EXIT_FAILURE
        }
    }
}
