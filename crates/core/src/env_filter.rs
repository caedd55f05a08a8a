// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-project environment visibility preferences.
//!
//! Trace views can be filtered by deployment environment. Which environments
//! a user has chosen to see is persisted per project so the selection
//! survives reloads. Environments seen for the first time become visible by
//! default, except those provisioned by Langfuse-compatible SDK internals,
//! which stay hidden until explicitly selected.
//!
//! The selection is not reflected in shareable URLs; it lives only in the
//! preference store.

use std::collections::{BTreeMap, BTreeSet};

use crate::storage::PreferenceStore;

/// Persisted mapping from environment name to whether it is shown.
///
/// Entries for environments that are no longer reported as available are kept
/// until the next full rewrite of the selection.
pub type VisibilityMap = BTreeMap<String, bool>;

/// Environments whose name starts with this prefix are provisioned by
/// SDK-internal features (prompt experiments, evaluator runs) and default to
/// hidden.
const HIDDEN_BY_DEFAULT_PREFIX: &str = "langfuse";

/// Per-project environment visibility selection, backed by a
/// [`PreferenceStore`].
///
/// `available` is the environment list reported by the backend for the
/// project; `None` means it has not been loaded yet, in which case reads
/// return no environments and nothing is persisted.
#[derive(Debug)]
pub struct EnvironmentFilter {
    store: PreferenceStore,
    available: Option<Vec<String>>,
    key: String,
}

impl EnvironmentFilter {
    /// Creates a filter scoped to `project_id` over the given available
    /// environments. No I/O happens until the selection is read or written.
    pub fn new(store: PreferenceStore, available: Option<Vec<String>>, project_id: &str) -> Self {
        EnvironmentFilter {
            store,
            available,
            key: storage_key(project_id),
        }
    }

    /// Returns the environments currently selected for display.
    ///
    /// Loads the persisted map, fills in defaults for environments seen for
    /// the first time (persisting the map only when something was added), and
    /// filters the available list down to the entries explicitly marked
    /// visible. The result is always a subsequence of the available list.
    pub fn selected_environments(&self) -> Vec<String> {
        let Some(available) = self.available.as_deref() else {
            return Vec::new();
        };

        let mut map: VisibilityMap = self.store.get(&self.key);
        if let Some(updated) = fill_defaults(&map, available) {
            self.persist(&updated);
            map = updated;
        }
        visible_environments(&map, available)
    }

    /// Replaces the selection with exactly the given set of environments.
    ///
    /// The persisted map is rebuilt from the current available list: every
    /// available environment becomes visible iff it appears in `selected`.
    /// Entries for environments that are no longer available are dropped by
    /// the rebuild, not merged. Membership of `selected` in the available
    /// list is not enforced; unknown names are simply ignored.
    pub fn set_selected_environments(&self, selected: &[String]) {
        let selected: BTreeSet<&str> = selected.iter().map(String::as_str).collect();
        let map: VisibilityMap = self
            .available
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|env| (env.clone(), selected.contains(env.as_str())))
            .collect();
        self.persist(&map);
    }

    fn persist(&self, map: &VisibilityMap) {
        if let Err(e) = self.store.set(&self.key, map) {
            tracing::warn!("failed to persist environment visibility: {}", e);
        }
    }
}

/// Builds the storage key scoping a project's visibility map.
fn storage_key(project_id: &str) -> String {
    format!("fathom-environment-visibility-{project_id}")
}

/// Filters `available` down to the entries explicitly marked visible.
///
/// The result preserves the relative order of `available` and never contains
/// an environment outside it.
pub fn visible_environments(map: &VisibilityMap, available: &[String]) -> Vec<String> {
    available
        .iter()
        .filter(|env| map.get(env.as_str()) == Some(&true))
        .cloned()
        .collect()
}

/// Inserts a default visibility for every available environment missing from
/// the map: hidden for SDK-internal names, visible otherwise.
///
/// Returns the updated map only when at least one default was inserted.
/// Entries for environments that are no longer available are left untouched.
pub fn fill_defaults(map: &VisibilityMap, available: &[String]) -> Option<VisibilityMap> {
    let missing: Vec<&String> = available
        .iter()
        .filter(|env| !map.contains_key(env.as_str()))
        .collect();
    if missing.is_empty() {
        return None;
    }

    let mut updated = map.clone();
    for env in missing {
        updated.insert(env.clone(), default_visibility(env));
    }
    Some(updated)
}

/// Default visibility for an environment seen for the first time.
fn default_visibility(name: &str) -> bool {
    !name.starts_with(HIDDEN_BY_DEFAULT_PREFIX)
}

#[cfg(test)]
#[path = "env_filter_tests.rs"]
mod tests;
