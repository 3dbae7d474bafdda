use card_ir::ComponentConfig;
use serde::Serialize;
use serde_json::Value;

use crate::form::FormKey;
use crate::primitives::Primitive;
use crate::theme::ThemeContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Danger,
}

impl ButtonVariant {
    /// Missing variant is primary; any other value that is not a known name,
    /// `null` and non-strings included, renders as ghost.
    pub fn parse(value: Option<&Value>) -> Self {
        match value {
            None => Self::Primary,
            Some(Value::String(name)) => match name.as_str() {
                "primary" => Self::Primary,
                "secondary" => Self::Secondary,
                "danger" => Self::Danger,
                _ => Self::Ghost,
            },
            Some(_) => Self::Ghost,
        }
    }
}

/// Resolved button colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonPaint {
    pub background: String,
    pub foreground: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<String>,
}

impl ButtonPaint {
    /// Only the primary variant takes the theme color.
    pub fn for_variant(variant: ButtonVariant, theme: &ThemeContext) -> Self {
        match variant {
            ButtonVariant::Primary => {
                let primary = theme.primary();
                Self {
                    background: primary.to_string(),
                    foreground: "#ffffff".into(),
                    border: None,
                    shadow: Some(format!("0 10px 15px -3px {primary}20")),
                }
            }
            ButtonVariant::Secondary => Self {
                background: "#ffffff".into(),
                foreground: "#334155".into(),
                border: Some("#e2e8f0".into()),
                shadow: None,
            },
            ButtonVariant::Danger => Self {
                background: "#fef2f2".into(),
                foreground: "#dc2626".into(),
                border: Some("#fee2e2".into()),
                shadow: None,
            },
            ButtonVariant::Ghost => Self {
                background: "transparent".into(),
                foreground: "#64748b".into(),
                border: None,
                shadow: None,
            },
        }
    }
}

/// Whether the node asks to submit its enclosing form.
pub fn is_submit(node: &ComponentConfig) -> bool {
    node.props().flag("isSubmit")
}

/// Click intent named by `props.onClick`.
pub fn click_intent(node: &ComponentConfig) -> Option<String> {
    node.props()
        .str("onClick")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// `button`: `submits` is the enclosing form when this is a submit trigger.
pub fn button(node: &ComponentConfig, theme: &ThemeContext, submits: Option<FormKey>) -> Primitive {
    let props = node.props();
    let variant = ButtonVariant::parse(props.get("variant"));
    Primitive::Button {
        label: props.text("label"),
        variant,
        paint: ButtonPaint::for_variant(variant, theme),
        submits,
        intent: click_intent(node),
    }
}
