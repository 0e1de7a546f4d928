// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for datakit
//!
//! Every failure past argument parsing collapses into [`DatakitError`] and is
//! reported once at the top level as `Error: <message>`.

use thiserror::Error;

/// Main error type for datakit operations
#[derive(Error, Debug)]
pub enum DatakitError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for datakit operations
pub type Result<T> = std::result::Result<T, DatakitError>;
