// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Tracing subscriber setup
//!
//! Logs go to stderr so stdout only carries command output.

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::Result;

/// Level implied by a `-v` count, if any.
pub fn verbosity_level(verbose: u8) -> Option<Level> {
    match verbose {
        0 => None,
        1 => Some(Level::INFO),
        2 => Some(Level::DEBUG),
        _ => Some(Level::TRACE),
    }
}

/// The more verbose of the configured level and the `-v` level.
pub fn effective_level(config: &LoggingConfig, verbose: u8) -> Result<Level> {
    let base = config.base_level()?;
    Ok(verbosity_level(verbose).map_or(base, |level| level.max(base)))
}

/// Install the global subscriber. `RUST_LOG` directives are layered on top.
///
/// Later calls in the same process are no-ops.
pub fn init(config: &LoggingConfig, verbose: u8) -> Result<()> {
    let level = effective_level(config, verbose)?;
    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(config.ansi)
        .with_writer(std::io::stderr)
        .try_init();

    tracing::debug!(%level, "logging initialized");
    Ok(())
}
