use serde_json::{Map, Value};

/// Read-only view over a node's `props` map.
///
/// Every accessor has a fallback; a missing or mistyped key never errors.
#[derive(Debug, Clone, Copy)]
pub struct Props<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Props<'a> {
    pub fn new(map: &'a Map<String, Value>) -> Self {
        Self { map }
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key)
    }

    /// String value of `key`, only if it is a JSON string.
    pub fn str(&self, key: &str) -> Option<&'a str> {
        self.map.get(key).and_then(Value::as_str)
    }

    /// Display text for `key`. Strings are used as-is, numbers and booleans
    /// are stringified, anything else yields an empty string.
    pub fn text(&self, key: &str) -> String {
        match self.map.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }

    /// Truthiness of `key`: `true`, non-zero numbers and the string `"true"`.
    pub fn flag(&self, key: &str) -> bool {
        match self.map.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    /// Positive integer value of `key`, falling back to `default` when the key
    /// is missing, not numeric, zero, negative or fractional.
    pub fn positive_int_or(&self, key: &str, default: u32) -> u32 {
        let parsed = match self.map.get(key) {
            Some(Value::Number(n)) => n.as_u64(),
            Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
            _ => None,
        };
        parsed
            .filter(|v| *v > 0)
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(default)
    }

    /// Like [`Props::positive_int_or`] but zero is accepted.
    pub fn uint_or(&self, key: &str, default: u32) -> u32 {
        let parsed = match self.map.get(key) {
            Some(Value::Number(n)) => n.as_u64(),
            Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
            _ => None,
        };
        parsed
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(default)
    }

    /// Array value of `key`, empty when missing or not an array.
    pub fn array(&self, key: &str) -> &'a [Value] {
        self.map
            .get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
