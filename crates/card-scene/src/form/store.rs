use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Field name to current value. Ordered so snapshots are deterministic.
pub type FieldValues = BTreeMap<String, Value>;

/// Whether any field of a form has been written. Purely observational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FormState {
    #[default]
    Clean,
    Edited,
}

/// Values collected by one form boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormStore {
    values: FieldValues,
    state: FormState,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Current value of `field` as display text; empty when unset.
    pub fn text(&self, field: &str) -> String {
        match self.values.get(field) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }

    /// Write `value` under `field`, creating the key on first write.
    pub fn update_field(&mut self, field: &str, value: Value) {
        self.values.insert(field.to_string(), value);
        self.state = FormState::Edited;
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn snapshot(&self) -> FieldValues {
        self.values.clone()
    }

    pub fn state(&self) -> FormState {
        self.state
    }
}
