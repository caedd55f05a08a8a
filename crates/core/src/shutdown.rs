// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Graceful-shutdown signalling.
//!
//! A [`ShutdownFlag`] records that the process received SIGTERM so that
//! long-running work can drain instead of being cut off mid-request. The flag
//! is constructed once near the process entry point and handed to every
//! component that needs to observe it; clones share the same underlying cell.
//!
//! Setting the flag is irreversible. There is deliberately no way to clear it,
//! a process that has been asked to stop does not change its mind.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared marker that the process has been asked to terminate.
///
/// Cheap to clone; all clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct ShutdownFlag {
    received: Arc<AtomicBool>,
}

impl ShutdownFlag {
    /// Creates a flag in the not-received state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks SIGTERM as received.
    ///
    /// Idempotent; later calls are no-ops beyond the log line.
    pub fn set_sigterm_received(&self) {
        tracing::info!("received SIGTERM, shutting down gracefully");
        self.received.store(true, Ordering::SeqCst);
    }

    /// Returns whether SIGTERM has been received.
    pub fn is_sigterm_received(&self) -> bool {
        let received = self.received.load(Ordering::SeqCst);
        tracing::debug!("checking if sigterm received: {}", received);
        received
    }
}

#[cfg(test)]
#[path = "shutdown_tests.rs"]
mod tests;
