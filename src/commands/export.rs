// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Export command

use std::io::Write;

use crate::cli::args::ExportArgs;
use crate::error::Result;

/// Execute the export command
pub fn execute(args: &ExportArgs, out: &mut dyn Write) -> Result<()> {
    tracing::info!(input = %args.input.display(), format = %args.format, "export requested");

    writeln!(out, "Exporting {} as {}", args.input.display(), args.format)?;
    Ok(())
}
