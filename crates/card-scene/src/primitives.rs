//! Render output: a tree of visual primitives mirroring the card schema.

use serde::Serialize;

use crate::elements::{ButtonPaint, ButtonVariant, ChartKind, ChartPoint, PersonOption, RemarkTone};
use crate::form::{FormKey, FormState};
use crate::theme::HeaderOrnament;

/// Headline of the broken-schema state.
pub const BROKEN_HEADLINE: &str = "Broken Schema";
/// Guidance shown with the broken-schema state.
pub const BROKEN_MESSAGE: &str = "Please fix the JSON errors in the editor to resume live preview.";

/// Result of one render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CardOutput {
    Card {
        title: String,
        primary: String,
        header: HeaderOrnament,
        body: Vec<RenderNode>,
    },
    /// No valid schema was available.
    Broken {
        headline: String,
        message: String,
        reason: String,
    },
}

impl CardOutput {
    pub fn broken(reason: impl Into<String>) -> Self {
        Self::Broken {
            headline: BROKEN_HEADLINE.to_string(),
            message: BROKEN_MESSAGE.to_string(),
            reason: reason.into(),
        }
    }

    pub fn body(&self) -> &[RenderNode] {
        match self {
            Self::Card { body, .. } => body,
            Self::Broken { .. } => &[],
        }
    }

    pub fn is_broken(&self) -> bool {
        matches!(self, Self::Broken { .. })
    }

    /// First node with `id`, depth-first.
    pub fn find(&self, id: &str) -> Option<&RenderNode> {
        self.body().iter().find_map(|node| node.find(id))
    }
}

/// One rendered node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderNode {
    pub id: String,
    /// Presentation hint copied from the schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(flatten)]
    pub primitive: Primitive,
}

impl RenderNode {
    pub fn children(&self) -> &[RenderNode] {
        match &self.primitive {
            Primitive::Region { children }
            | Primitive::Grid { children, .. }
            | Primitive::Form { children, .. } => children,
            _ => &[],
        }
    }

    pub fn find(&self, id: &str) -> Option<&RenderNode> {
        if self.id == id {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(id))
    }
}

/// Link between an interactive leaf and a form slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldBinding {
    pub form: FormKey,
    pub field: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "primitive", rename_all = "snake_case")]
pub enum Primitive {
    /// Plain wrapping region (`container`).
    Region { children: Vec<RenderNode> },
    /// Grid region (`columns`).
    Grid {
        cols: u32,
        gap: u32,
        children: Vec<RenderNode>,
    },
    /// Form boundary wrapper.
    Form {
        scope: FormKey,
        #[serde(skip_serializing_if = "Option::is_none")]
        destination: Option<String>,
        state: FormState,
        children: Vec<RenderNode>,
    },
    Heading { text: String, level: u8 },
    Paragraph { content: String },
    Remark {
        label: String,
        content: String,
        tone: RemarkTone,
    },
    LabeledValue { label: String, value: String },
    Rule,
    Chart {
        kind: ChartKind,
        color: String,
        points: Vec<ChartPoint>,
    },
    TextInput {
        label: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
        multiline: bool,
        value: String,
        /// Focus border color.
        accent: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        binding: Option<FieldBinding>,
    },
    DateInput {
        label: String,
        /// ISO date text; empty when no date is chosen.
        value: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        binding: Option<FieldBinding>,
    },
    PersonSelect {
        label: String,
        options: Vec<PersonOption>,
        #[serde(skip_serializing_if = "Option::is_none")]
        selected: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        binding: Option<FieldBinding>,
    },
    Button {
        label: String,
        variant: ButtonVariant,
        paint: ButtonPaint,
        /// Form this button submits, when it is a submit trigger inside one.
        #[serde(skip_serializing_if = "Option::is_none")]
        submits: Option<FormKey>,
        #[serde(skip_serializing_if = "Option::is_none")]
        intent: Option<String>,
    },
    /// Inert stand-in for a node that cannot be rendered.
    Unsupported { tag: String },
}
