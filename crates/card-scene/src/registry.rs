//! Fixed mapping from component tag to handler.

use card_ir::{ComponentConfig, ComponentKind};

use crate::elements::{chart, heading, inputs, text};
use crate::primitives::Primitive;
use crate::theme::ThemeContext;

pub use crate::elements::inputs::FieldFn;

/// Builder for a stateless leaf.
pub type DisplayFn = fn(&ComponentConfig, &ThemeContext) -> Primitive;

/// How the renderer treats a node.
#[derive(Clone, Copy)]
pub enum Handler {
    /// `container`: children in a plain region.
    Region,
    /// `columns`: children in a grid.
    Grid,
    /// `formContainer`: opens a form scope.
    FormBoundary,
    /// Stateless leaf.
    Display(DisplayFn),
    /// Leaf bound to a form field.
    Field(FieldFn),
    /// `button`: click intent and optional form submission.
    Button,
    /// Tag without an implementation.
    Unsupported,
}

impl Handler {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Region => "region",
            Self::Grid => "grid",
            Self::FormBoundary => "form",
            Self::Display(_) => "display",
            Self::Field(_) => "field",
            Self::Button => "button",
            Self::Unsupported => "unsupported",
        }
    }
}

impl std::fmt::Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve the handler for `kind`. Pure; the vocabulary tags without an
/// implementation share the unknown-tag placeholder.
pub fn lookup(kind: &ComponentKind) -> Handler {
    match kind {
        ComponentKind::Container => Handler::Region,
        ComponentKind::Columns => Handler::Grid,
        ComponentKind::FormContainer => Handler::FormBoundary,
        ComponentKind::Title => Handler::Display(heading::title),
        ComponentKind::Text => Handler::Display(text::paragraph),
        ComponentKind::Divider => Handler::Display(text::divider),
        ComponentKind::Remark => Handler::Display(text::remark),
        ComponentKind::DualText => Handler::Display(text::dual_text),
        ComponentKind::Chart => Handler::Display(chart::chart),
        ComponentKind::Input => Handler::Field(inputs::text_input),
        ComponentKind::DatePicker => Handler::Field(inputs::date_input),
        ComponentKind::PersonPicker => Handler::Field(inputs::person_select),
        ComponentKind::Button => Handler::Button,
        _ => Handler::Unsupported,
    }
}

/// [`lookup`] from a raw tag string.
pub fn lookup_tag(tag: &str) -> Handler {
    lookup(&ComponentKind::from_tag(tag))
}
