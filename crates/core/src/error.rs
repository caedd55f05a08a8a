// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for fathom-core operations.

use thiserror::Error;

/// All possible errors that can occur in fathom-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "no state directory available\n  hint: set FATHOM_STATE_DIR or ensure a home directory exists"
    )]
    StateDirUnavailable,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for fathom-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
