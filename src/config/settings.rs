// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for datakit
//!
//! Handles loading settings from ~/.datakit/settings.json

use serde::{Deserialize, Serialize};

mod io;
mod validation;

/// Main settings structure, stored in ~/.datakit/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Base log level when no `-v` flags are given (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Colorize log output
    #[serde(default = "default_true")]
    pub ansi: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            ansi: true,
        }
    }
}
