use card_ir::ComponentConfig;
use serde::Serialize;

use crate::primitives::Primitive;
use crate::theme::ThemeContext;

/// Badge color of a `remark`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RemarkTone {
    #[default]
    Blue,
    Red,
    Green,
    Orange,
    Gray,
}

impl RemarkTone {
    /// Unknown names fall back to blue.
    pub fn parse(name: &str) -> Self {
        match name {
            "red" => Self::Red,
            "green" => Self::Green,
            "orange" => Self::Orange,
            "gray" => Self::Gray,
            _ => Self::Blue,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Gray => "gray",
        }
    }
}

/// `text`: paragraph from `content`.
pub fn paragraph(node: &ComponentConfig, _theme: &ThemeContext) -> Primitive {
    Primitive::Paragraph {
        content: node.props().text("content"),
    }
}

/// `remark`: `label` plus a `content` badge tinted by `color`.
pub fn remark(node: &ComponentConfig, _theme: &ThemeContext) -> Primitive {
    let props = node.props();
    Primitive::Remark {
        label: props.text("label"),
        content: props.text("content"),
        tone: props.str("color").map(RemarkTone::parse).unwrap_or_default(),
    }
}

/// `dualText`: stacked `label` / `value`.
pub fn dual_text(node: &ComponentConfig, _theme: &ThemeContext) -> Primitive {
    let props = node.props();
    Primitive::LabeledValue {
        label: props.text("label"),
        value: props.text("value"),
    }
}

pub fn divider(_node: &ComponentConfig, _theme: &ThemeContext) -> Primitive {
    Primitive::Rule
}
