//! Core card renderer: the recursive dispatcher.

use std::collections::HashMap;

use card_ir::{CardSchema, ComponentConfig, SchemaSource};
use tracing::{debug, warn};

use super::bindings::{BindingRegistry, NodeBinding, SubmitTarget};
use crate::elements::{button, inputs::FieldSlot, placeholder};
use crate::form::{FormArena, FormScope};
use crate::primitives::{CardOutput, FieldBinding, Primitive, RenderNode};
use crate::registry::{self, Handler};
use crate::theme::{DEFAULT_PRIMARY, ThemeContext};

/// Grid columns when `columns` has no usable `cols`.
pub const DEFAULT_COLS: u32 = 2;
/// Grid gap when `columns` has no usable `gap`.
pub const DEFAULT_GAP: u32 = 4;

/// Renderer that turns card schemas into [`CardOutput`] trees.
///
/// # State
///
/// Schemas are stateless; the renderer keeps the form stores of every
/// boundary still present in the tree and the interaction bindings of the
/// last pass. Each call to [`CardRenderer::render`] is a complete traversal.
///
/// # Usage
///
/// ```ignore
/// let mut renderer = CardRenderer::new();
/// let card = renderer.render(&SchemaSource::from_text(&editor_text));
/// renderer.handle_event(&UiEvent::change("reason_input", "Looks good"), &mut sink);
/// let card = renderer.render(&source); // reflects the edit
/// ```
pub struct CardRenderer {
    /// Stores of form boundaries, keyed by id path
    pub(super) forms: FormArena,

    /// Interactive nodes of the last pass
    pub(super) bindings: BindingRegistry,

    /// Primary color for cards without one
    default_primary: String,

    /// Completed passes
    passes: u64,
}

impl Default for CardRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CardRenderer {
    pub fn new() -> Self {
        Self::with_default_primary(DEFAULT_PRIMARY)
    }

    pub fn with_default_primary(primary: impl Into<String>) -> Self {
        Self {
            forms: FormArena::new(),
            bindings: BindingRegistry::default(),
            default_primary: primary.into(),
            passes: 0,
        }
    }

    pub fn forms(&self) -> &FormArena {
        &self.forms
    }

    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Render whatever the host produced. A broken source renders the
    /// broken-schema state and drops all form state.
    pub fn render(&mut self, source: &SchemaSource) -> CardOutput {
        match source {
            SchemaSource::Ready(schema) => self.render_schema(schema),
            SchemaSource::Broken { reason } => {
                debug!(%reason, "rendering broken schema state");
                self.forms.begin_pass();
                self.bindings.clear();
                self.forms.end_pass();
                self.passes += 1;
                CardOutput::broken(reason.clone())
            }
        }
    }

    /// Render one full pass over `schema`.
    pub fn render_schema(&mut self, schema: &CardSchema) -> CardOutput {
        let theme = ThemeContext::resolve(schema.theme.as_ref(), &self.default_primary);

        self.forms.begin_pass();
        self.bindings.clear();
        let body = self.render_nodes(&schema.body, &theme, None, "");
        self.forms.end_pass();
        self.passes += 1;

        debug!(
            pass = self.passes,
            forms = self.forms.len(),
            interactive = self.bindings.len(),
            "card rendered"
        );

        CardOutput::Card {
            title: schema.title.clone(),
            primary: theme.primary().to_string(),
            header: theme.header(),
            body,
        }
    }

    /// Render a node and, for containers, its subtree.
    ///
    /// `form` is the nearest enclosing form scope; `path` the node's own id
    /// path as computed by [`sibling_paths`].
    fn render_node(
        &mut self,
        node: &ComponentConfig,
        theme: &ThemeContext,
        form: Option<&FormScope>,
        path: &str,
    ) -> RenderNode {
        let handler = registry::lookup(&node.kind);
        debug!(id = %node.id, tag = node.kind.as_tag(), handler = handler.name(), "dispatch");

        if !node.children.is_empty() && !node.kind.accepts_children() {
            debug!(id = %node.id, tag = node.kind.as_tag(), "ignoring children of leaf node");
        }

        let primitive = match handler {
            Handler::Region => Primitive::Region {
                children: self.render_nodes(&node.children, theme, form, path),
            },
            Handler::Grid => {
                let props = node.props();
                Primitive::Grid {
                    cols: props.positive_int_or("cols", DEFAULT_COLS),
                    gap: props.uint_or("gap", DEFAULT_GAP),
                    children: self.render_nodes(&node.children, theme, form, path),
                }
            }
            Handler::FormBoundary => {
                let scope = FormScope {
                    key: self.forms.open(path),
                    destination: node.props().str("onSubmitUrl").map(str::to_string),
                };
                let children = self.render_nodes(&node.children, theme, Some(&scope), path);
                let state = self
                    .forms
                    .store(&scope.key)
                    .map(|store| store.state())
                    .unwrap_or_default();
                Primitive::Form {
                    scope: scope.key,
                    destination: scope.destination,
                    state,
                    children,
                }
            }
            Handler::Display(build) => build(node, theme),
            Handler::Field(build) => {
                let binding = match (form, node.field.as_deref()) {
                    (Some(scope), Some(field)) => Some(FieldBinding {
                        form: scope.key.clone(),
                        field: field.to_string(),
                    }),
                    _ => None,
                };
                let value = self
                    .forms
                    .read_field(form.map(|scope| &scope.key), node.field.as_deref());
                self.bindings
                    .register(&node.id, NodeBinding::Field(binding.clone()));
                build(node, theme, FieldSlot { value, binding })
            }
            Handler::Button => {
                let submit = form
                    .filter(|_| button::is_submit(node))
                    .map(|scope| SubmitTarget {
                        form: scope.key.clone(),
                        destination: scope.destination.clone(),
                    });
                self.bindings.register(
                    &node.id,
                    NodeBinding::Button {
                        submit: submit.clone(),
                        intent: button::click_intent(node),
                    },
                );
                button::button(node, theme, submit.map(|target| target.form))
            }
            Handler::Unsupported => placeholder::unsupported(node.kind.as_tag()),
        };

        RenderNode {
            id: node.id.clone(),
            style: node.style.clone(),
            primitive,
        }
    }

    /// Siblings in document order, one output per node.
    fn render_nodes(
        &mut self,
        nodes: &[ComponentConfig],
        theme: &ThemeContext,
        form: Option<&FormScope>,
        parent_path: &str,
    ) -> Vec<RenderNode> {
        let paths = sibling_paths(nodes, parent_path);
        nodes
            .iter()
            .zip(&paths)
            .map(|(node, path)| self.render_node(node, theme, form, path))
            .collect()
    }
}

/// Id paths of `nodes` under `parent_path`.
///
/// A node's segment is its id. When several siblings share an id, each of
/// them gets `id@index` instead, `index` being its position among the
/// siblings, so one of them never inherits another's identity.
fn sibling_paths(nodes: &[ComponentConfig], parent_path: &str) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for node in nodes {
        *counts.entry(node.id.as_str()).or_default() += 1;
    }

    nodes
        .iter()
        .enumerate()
        .map(|(index, node)| {
            let segment = if counts[node.id.as_str()] > 1 {
                warn!(id = %node.id, index, parent = parent_path, "duplicate sibling id");
                format!("{}@{index}", node.id)
            } else {
                node.id.clone()
            };
            if parent_path.is_empty() {
                segment
            } else {
                format!("{parent_path}/{segment}")
            }
        })
        .collect()
}
