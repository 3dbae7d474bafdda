use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Behavioral grouping of a component tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Wraps children in a visual region.
    Container,
    /// Opens a new form scope for its subtree.
    FormBoundary,
    /// Stateless leaf that only reads its props.
    Display,
    /// Leaf that reads from and writes to the enclosing form.
    Interactive,
    /// Known tag composed of several primitives.
    Compound,
    /// Tag outside the vocabulary.
    Unknown,
}

/// Discriminant of a component node.
///
/// Every tag of the card vocabulary has a variant; anything else is carried
/// verbatim in [`ComponentKind::Unknown`] so placeholders can name it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    // Containers
    Container,
    Columns,
    FormContainer,
    LoopContainer,
    InteractiveContainer,

    // Display
    Text,
    RichText,
    Title,
    Divider,
    Image,
    MultiImage,
    Person,
    PersonList,
    Chart,
    Table,

    // Interaction
    Input,
    Button,
    CollapseButton,
    Dropdown,
    DropdownMulti,
    DatePicker,
    TimePicker,
    DatetimePicker,
    PersonPicker,
    PersonPickerMulti,

    // Compound
    ButtonGroup,
    Remark,
    DualText,
    TextButton,
    TextImage,
    TextDropdown,
    TextPersonPicker,
    TextDatetimePicker,
    TextDatePicker,
    TextTimePicker,

    Unknown(String),
}

impl ComponentKind {
    /// Resolve a raw `type` string. Matching is exact and case-sensitive.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "container" => Self::Container,
            "columns" => Self::Columns,
            "formContainer" => Self::FormContainer,
            "loopContainer" => Self::LoopContainer,
            "interactiveContainer" => Self::InteractiveContainer,
            "text" => Self::Text,
            "richText" => Self::RichText,
            "title" => Self::Title,
            "divider" => Self::Divider,
            "image" => Self::Image,
            "multiImage" => Self::MultiImage,
            "person" => Self::Person,
            "personList" => Self::PersonList,
            "chart" => Self::Chart,
            "table" => Self::Table,
            "input" => Self::Input,
            "button" => Self::Button,
            "collapseButton" => Self::CollapseButton,
            "dropdown" => Self::Dropdown,
            "dropdownMulti" => Self::DropdownMulti,
            "datePicker" => Self::DatePicker,
            "timePicker" => Self::TimePicker,
            "datetimePicker" => Self::DatetimePicker,
            "personPicker" => Self::PersonPicker,
            "personPickerMulti" => Self::PersonPickerMulti,
            "buttonGroup" => Self::ButtonGroup,
            "remark" => Self::Remark,
            "dualText" => Self::DualText,
            "textButton" => Self::TextButton,
            "textImage" => Self::TextImage,
            "textDropdown" => Self::TextDropdown,
            "textPersonPicker" => Self::TextPersonPicker,
            "textDatetimePicker" => Self::TextDatetimePicker,
            "textDatePicker" => Self::TextDatePicker,
            "textTimePicker" => Self::TextTimePicker,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The canonical tag string, or the raw string for unknown tags.
    pub fn as_tag(&self) -> &str {
        match self {
            Self::Container => "container",
            Self::Columns => "columns",
            Self::FormContainer => "formContainer",
            Self::LoopContainer => "loopContainer",
            Self::InteractiveContainer => "interactiveContainer",
            Self::Text => "text",
            Self::RichText => "richText",
            Self::Title => "title",
            Self::Divider => "divider",
            Self::Image => "image",
            Self::MultiImage => "multiImage",
            Self::Person => "person",
            Self::PersonList => "personList",
            Self::Chart => "chart",
            Self::Table => "table",
            Self::Input => "input",
            Self::Button => "button",
            Self::CollapseButton => "collapseButton",
            Self::Dropdown => "dropdown",
            Self::DropdownMulti => "dropdownMulti",
            Self::DatePicker => "datePicker",
            Self::TimePicker => "timePicker",
            Self::DatetimePicker => "datetimePicker",
            Self::PersonPicker => "personPicker",
            Self::PersonPickerMulti => "personPickerMulti",
            Self::ButtonGroup => "buttonGroup",
            Self::Remark => "remark",
            Self::DualText => "dualText",
            Self::TextButton => "textButton",
            Self::TextImage => "textImage",
            Self::TextDropdown => "textDropdown",
            Self::TextPersonPicker => "textPersonPicker",
            Self::TextDatetimePicker => "textDatetimePicker",
            Self::TextDatePicker => "textDatePicker",
            Self::TextTimePicker => "textTimePicker",
            Self::Unknown(tag) => tag,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Self::Container
            | Self::Columns
            | Self::LoopContainer
            | Self::InteractiveContainer => Category::Container,
            Self::FormContainer => Category::FormBoundary,
            Self::Text
            | Self::RichText
            | Self::Title
            | Self::Divider
            | Self::Image
            | Self::MultiImage
            | Self::Person
            | Self::PersonList
            | Self::Chart
            | Self::Table => Category::Display,
            Self::Input
            | Self::Button
            | Self::CollapseButton
            | Self::Dropdown
            | Self::DropdownMulti
            | Self::DatePicker
            | Self::TimePicker
            | Self::DatetimePicker
            | Self::PersonPicker
            | Self::PersonPickerMulti => Category::Interactive,
            Self::ButtonGroup
            | Self::Remark
            | Self::DualText
            | Self::TextButton
            | Self::TextImage
            | Self::TextDropdown
            | Self::TextPersonPicker
            | Self::TextDatetimePicker
            | Self::TextDatePicker
            | Self::TextTimePicker => Category::Compound,
            Self::Unknown(_) => Category::Unknown,
        }
    }

    /// Whether nodes of this kind may own children.
    pub fn accepts_children(&self) -> bool {
        matches!(
            self.category(),
            Category::Container | Category::FormBoundary | Category::Compound
        )
    }
}

impl Serialize for ComponentKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for ComponentKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}
