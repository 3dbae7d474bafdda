use card_ir::ComponentConfig;
use serde::Serialize;
use serde_json::Value;

use crate::primitives::Primitive;
use crate::theme::ThemeContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
}

/// One `{name, value}` sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
}

impl ChartPoint {
    /// Non-object entries are skipped; a `value` that is not a finite number
    /// counts as zero.
    fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let name = match obj.get("name") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };
        let value = match obj.get("value") {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
        .filter(|v| v.is_finite())
        .unwrap_or(0.0);
        Some(Self { name, value })
    }
}

/// `chart`: `data` points drawn in the theme primary. `chartType` (or `type`)
/// selects `line`; anything else is a bar chart.
pub fn chart(node: &ComponentConfig, theme: &ThemeContext) -> Primitive {
    let props = node.props();
    let kind = match props.str("chartType").or_else(|| props.str("type")) {
        Some("line") => ChartKind::Line,
        _ => ChartKind::Bar,
    };
    let points = props
        .array("data")
        .iter()
        .filter_map(ChartPoint::from_value)
        .collect();
    Primitive::Chart {
        kind,
        color: theme.primary().to_string(),
        points,
    }
}
