use serde_json::Value;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

use super::{FormKey, FormStore};

/// Owner of every form store, keyed by boundary identity.
///
/// A pass calls [`FormArena::begin_pass`], opens one scope per boundary it
/// visits, then [`FormArena::end_pass`] drops the stores of boundaries that
/// were not visited.
#[derive(Debug, Default)]
pub struct FormArena {
    stores: HashMap<FormKey, FormStore>,
    visited: HashSet<FormKey>,
}

impl FormArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_pass(&mut self) {
        self.visited.clear();
    }

    /// Open (or reopen) the scope for the boundary at `path`.
    ///
    /// A path already opened in this pass gets a `#n` suffix so duplicated
    /// ids never share a store.
    pub fn open(&mut self, path: &str) -> FormKey {
        let mut key = FormKey::new(path);
        if self.visited.contains(&key) {
            let mut n = 2;
            while self.visited.contains(&FormKey::new(format!("{path}#{n}"))) {
                n += 1;
            }
            warn!(path, suffix = n, "duplicate form boundary id path");
            key = FormKey::new(format!("{path}#{n}"));
        }

        self.visited.insert(key.clone());
        self.stores.entry(key.clone()).or_insert_with(|| {
            debug!(form = %key, "allocating form store");
            FormStore::new()
        });
        key
    }

    /// Drop stores whose boundary was not visited since `begin_pass`.
    pub fn end_pass(&mut self) {
        let before = self.stores.len();
        let visited = &self.visited;
        self.stores.retain(|key, _| visited.contains(key));
        let dropped = before - self.stores.len();
        if dropped > 0 {
            debug!(dropped, "discarded stores of removed form boundaries");
        }
    }

    pub fn store(&self, key: &FormKey) -> Option<&FormStore> {
        self.stores.get(key)
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    /// Field read through an optional scope. Without a scope, a field name or
    /// a store the value is empty.
    pub fn read_field(&self, scope: Option<&FormKey>, field: Option<&str>) -> String {
        match (scope.and_then(|key| self.stores.get(key)), field) {
            (Some(store), Some(field)) => store.text(field),
            _ => String::new(),
        }
    }

    /// Field write through an optional scope. Returns `false` and changes
    /// nothing when there is no scope, field name or store.
    pub fn write_field(&mut self, scope: Option<&FormKey>, field: Option<&str>, value: Value) -> bool {
        match (scope.and_then(|key| self.stores.get_mut(key)), field) {
            (Some(store), Some(field)) => {
                store.update_field(field, value);
                true
            }
            _ => false,
        }
    }
}
