// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use tracing::Level;

use crate::error::{DatakitError, Result};

use super::LoggingConfig;

impl LoggingConfig {
    /// Parse the configured level name.
    pub fn base_level(&self) -> Result<Level> {
        self.level.trim().parse::<Level>().map_err(|_| {
            DatakitError::Config(format!(
                "invalid logging.level '{}' (expected error, warn, info, debug or trace)",
                self.level
            ))
        })
    }
}
