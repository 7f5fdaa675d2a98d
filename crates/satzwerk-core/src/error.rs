// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Satzwerk.

use thiserror::Error;

/// Top-level error type for all Satzwerk operations.
#[derive(Debug, Error)]
pub enum SatzwerkError {
    // -- External command errors --
    #[error("could not run `{command}`: {detail}")]
    CommandSpawn { command: String, detail: String },

    #[error("`{command}` failed: {detail}")]
    CommandFailed { command: String, detail: String },

    // -- Queue / printer errors --
    #[error("printer not found: {0}")]
    PrinterNotFound(String),

    #[error("no default printer configured")]
    NoDefaultPrinter,

    #[error("discovered device has no URI: {0}")]
    MissingDeviceUri(String),

    // -- Job option errors --
    #[error("unrecognized option key: {0}")]
    UnknownOption(String),

    #[error("invalid value for option {key}: {value}")]
    InvalidOptionValue { key: String, value: String },

    // -- I/O and serialization --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SatzwerkError>;
