//! Card document model.

mod kind;
mod props;

pub use kind::{Category, ComponentKind};
pub use props::Props;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

pub type ComponentId = String;

/// Tag recorded for a node whose `type` key is absent.
pub const MISSING_TYPE_TAG: &str = "(missing type)";
/// Tag recorded for a body/children entry that is not a JSON object.
pub const INVALID_NODE_TAG: &str = "(invalid node)";

/// Root of a card document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardSchema {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<CardTheme>,
    pub body: Vec<ComponentConfig>,
}

/// Primary color of a card whose theme declares none.
pub const DEFAULT_PRIMARY: &str = "#6366f1";

/// Card-wide color configuration. All keys are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_to: Option<String>,
}

/// A single component node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentConfig {
    pub id: ComponentId,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub props: Map<String, Value>,
    /// Opaque presentation hint, passed through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ComponentConfig>,
    /// Form slot this node reads from and writes to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl CardSchema {
    /// Build a schema from an already-parsed JSON value.
    ///
    /// Returns `None` only when the root is not an object; every other
    /// irregularity is absorbed (missing `title` becomes empty, a missing or
    /// non-array `body` becomes an empty body).
    pub fn from_value(value: &Value) -> Option<Self> {
        let root = value.as_object()?;
        let title = root
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let theme = root.get("theme").and_then(CardTheme::from_value);
        let body = nodes_from_value(root.get("body"));
        Some(Self { title, theme, body })
    }

    /// Depth-first iterator over every node in document order.
    pub fn walk(&self) -> impl Iterator<Item = &ComponentConfig> {
        let mut stack: Vec<&ComponentConfig> = self.body.iter().rev().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    pub fn find(&self, id: &str) -> Option<&ComponentConfig> {
        self.walk().find(|node| node.id == id)
    }
}

impl CardTheme {
    /// Read a theme object; non-string color entries are dropped.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let color = |key: &str| obj.get(key).and_then(Value::as_str).map(str::to_string);
        Some(Self {
            primary: color("primary"),
            gradient_from: color("gradientFrom"),
            gradient_to: color("gradientTo"),
        })
    }
}

impl ComponentConfig {
    pub fn new(id: impl Into<ComponentId>, kind: ComponentKind) -> Self {
        Self {
            id: id.into(),
            kind,
            props: Map::new(),
            style: None,
            children: Vec::new(),
            field: None,
        }
    }

    /// Read a node leniently from JSON.
    ///
    /// A non-object value or a missing `type` produces an unknown-kind node so
    /// the renderer can show a placeholder in its place.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::new(String::new(), ComponentKind::Unknown(INVALID_NODE_TAG.into()));
        };

        let id = match obj.get("id") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };
        let kind = match obj.get("type") {
            Some(Value::String(tag)) => ComponentKind::from_tag(tag),
            Some(other) => ComponentKind::Unknown(other.to_string()),
            None => ComponentKind::Unknown(MISSING_TYPE_TAG.into()),
        };
        let props = obj
            .get("props")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        let style = obj.get("style").and_then(Value::as_str).map(str::to_string);
        let field = obj
            .get("field")
            .and_then(Value::as_str)
            .filter(|f| !f.is_empty())
            .map(str::to_string);
        let children = nodes_from_value(obj.get("children"));

        Self {
            id,
            kind,
            props,
            style,
            children,
            field,
        }
    }

    pub fn props(&self) -> Props<'_> {
        Props::new(&self.props)
    }

    pub fn with_props(mut self, props: Value) -> Self {
        if let Value::Object(map) = props {
            self.props = map;
        }
        self
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_children(mut self, children: Vec<ComponentConfig>) -> Self {
        self.children = children;
        self
    }
}

fn nodes_from_value(value: Option<&Value>) -> Vec<ComponentConfig> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().map(ComponentConfig::from_value).collect())
        .unwrap_or_default()
}

impl<'de> Deserialize<'de> for ComponentConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

impl<'de> Deserialize<'de> for CardTheme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value).unwrap_or_default())
    }
}
