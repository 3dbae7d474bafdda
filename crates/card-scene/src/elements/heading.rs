use card_ir::ComponentConfig;

use crate::primitives::Primitive;
use crate::theme::ThemeContext;

/// Highest heading level with its own presentation.
pub const MAX_LEVEL: u8 = 4;

/// `title`: `text` (default empty) at `level` 1–4; anything else is level 1.
pub fn title(node: &ComponentConfig, _theme: &ThemeContext) -> Primitive {
    let props = node.props();
    let level = match props.positive_int_or("level", 1) {
        n if n <= u32::from(MAX_LEVEL) => n as u8,
        _ => 1,
    };
    Primitive::Heading {
        text: props.text("text"),
        level,
    }
}
