// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Subcommand handlers
//!
//! Each handler writes its report to the provided writer. Parsing, analysis
//! and export backends are not implemented yet; handlers only describe the
//! request they received.

pub mod analyze;
pub mod export;

use std::io::Write;

use crate::cli::Commands;
use crate::error::Result;

/// Route a parsed command to its handler
pub fn dispatch(command: &Commands, out: &mut dyn Write) -> Result<()> {
    match command {
        Commands::Analyze(args) => analyze::execute(args, out),
        Commands::Export(args) => export::execute(args, out),
    }
}
