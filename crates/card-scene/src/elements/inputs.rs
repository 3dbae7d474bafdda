use card_ir::ComponentConfig;
use serde::Serialize;

use crate::primitives::{FieldBinding, Primitive};
use crate::theme::ThemeContext;

/// Label of the empty choice of a person picker.
pub const NO_SELECTION_LABEL: &str = "Select a person...";

/// A selectable person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonOption {
    pub id: String,
    pub name: String,
}

/// People offered by every `personPicker`.
pub const PERSON_DIRECTORY: [(&str, &str); 3] = [
    ("user_1", "Alice Freeman"),
    ("user_2", "Bob Robertson"),
    ("user_3", "Charlie Davis"),
];

/// What the renderer resolved for an interactive leaf before building it.
#[derive(Debug, Clone, Default)]
pub struct FieldSlot {
    /// Current value from the enclosing form, empty when unbound.
    pub value: String,
    pub binding: Option<FieldBinding>,
}

pub type FieldFn = fn(&ComponentConfig, &ThemeContext, FieldSlot) -> Primitive;

/// `input`: single or multi-line text entry.
pub fn text_input(node: &ComponentConfig, theme: &ThemeContext, slot: FieldSlot) -> Primitive {
    let props = node.props();
    Primitive::TextInput {
        label: props.text("label"),
        placeholder: props.str("placeholder").map(str::to_string),
        multiline: props.flag("multiline"),
        value: slot.value,
        accent: theme.primary().to_string(),
        binding: slot.binding,
    }
}

/// `datePicker`: the value is kept as entered, empty meaning no date.
pub fn date_input(node: &ComponentConfig, _theme: &ThemeContext, slot: FieldSlot) -> Primitive {
    Primitive::DateInput {
        label: node.props().text("label"),
        value: slot.value,
        binding: slot.binding,
    }
}

/// `personPicker`: choose one entry of [`PERSON_DIRECTORY`].
pub fn person_select(node: &ComponentConfig, _theme: &ThemeContext, slot: FieldSlot) -> Primitive {
    let options = PERSON_DIRECTORY
        .iter()
        .map(|(id, name)| PersonOption {
            id: id.to_string(),
            name: name.to_string(),
        })
        .collect();
    Primitive::PersonSelect {
        label: node.props().text("label"),
        options,
        selected: Some(slot.value).filter(|v| !v.is_empty()),
        binding: slot.binding,
    }
}
