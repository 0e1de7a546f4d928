// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! datakit - analyze and export data files
//!
//! Entry point for the datakit CLI application.

use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let code = datakit::app::run(
        std::env::args_os(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
