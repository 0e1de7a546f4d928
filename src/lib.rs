// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! datakit - command-line entry point for analyzing and exporting data files.
//!
//! - `cli`: argument definitions for the `analyze` and `export` subcommands
//! - `commands`: per-subcommand handlers and the dispatcher
//! - `app`: parse, dispatch, and map the outcome to an exit status
//! - `config`, `logging`: settings file and tracing setup

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use error::{DatakitError, Result};
