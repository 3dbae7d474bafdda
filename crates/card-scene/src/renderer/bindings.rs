//! Interaction lookup for rendered nodes.
//!
//! Every interactive leaf registers what it is bound to while the pass runs.
//! Events name nodes by id; this registry resolves them against the most
//! recent pass.

use std::collections::HashMap;
use tracing::warn;

use crate::form::FormKey;
use crate::primitives::FieldBinding;

/// Form a submit button hands its values from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SubmitTarget {
    pub form: FormKey,
    pub destination: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NodeBinding {
    /// Input-capable leaf; `None` when unbound (no field or no form).
    Field(Option<FieldBinding>),
    Button {
        submit: Option<SubmitTarget>,
        intent: Option<String>,
    },
}

#[derive(Debug, Default)]
pub(crate) struct BindingRegistry {
    nodes: HashMap<String, NodeBinding>,
}

impl BindingRegistry {
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Register `node_id`. A repeated id replaces the earlier registration.
    pub fn register(&mut self, node_id: &str, binding: NodeBinding) {
        if self.nodes.insert(node_id.to_string(), binding).is_some() {
            warn!(node_id, "duplicate interactive node id; events go to the last one");
        }
    }

    pub fn get(&self, node_id: &str) -> Option<&NodeBinding> {
        self.nodes.get(node_id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}
