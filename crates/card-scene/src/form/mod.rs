//! Form scopes opened by `formContainer` nodes.
//!
//! Each boundary owns a [`FormStore`] inside the renderer's [`FormArena`].
//! Stores are keyed by the boundary's id path so user input survives
//! re-renders for as long as the boundary stays in the tree.

mod arena;
mod store;

pub use arena::FormArena;
pub use store::{FieldValues, FormState, FormStore};

use serde::Serialize;
use std::fmt;

/// Identity of a form boundary: the ids from the root down to the boundary,
/// joined with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FormKey(String);

impl FormKey {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The nearest enclosing form, as seen by descendants during a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormScope {
    pub key: FormKey,
    /// `props.onSubmitUrl` of the boundary.
    pub destination: Option<String>,
}
