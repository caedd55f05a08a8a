// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! fathom-core: process-level utilities for the fathom observability platform
//!
//! This crate provides the persisted per-project environment-visibility
//! preferences behind trace filtering, the file-backed preference store they
//! live in, and the shutdown flag consulted during graceful termination.

pub mod env_filter;
pub mod error;
pub mod shutdown;
pub mod storage;

pub use env_filter::{EnvironmentFilter, VisibilityMap};
pub use error::{Error, Result};
pub use shutdown::ShutdownFlag;
pub use storage::PreferenceStore;
