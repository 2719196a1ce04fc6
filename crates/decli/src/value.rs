//! Dynamic values flowing from tokens to actions.

use std::fmt;

use decli_argparse::FlagValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use serde_json::Value;

/// Resolved field values keyed by field name, in declaration order.
pub type ValueMap = IndexMap<String, Value>;

/// Declared type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValueType {
    #[default]
    String,
    Number,
    Float,
    Boolean,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Number => "Number",
            Self::Float => "Float",
            Self::Boolean => "Boolean",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a slot counts as filled.
///
/// `null`, `false`, `0`, `""` and `[]` are empty; everything else is filled.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) => true,
    }
}

/// Human-readable rendering used in messages (strings are not quoted).
pub fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => render_list(items),
        other => other.to_string(),
    }
}

/// Items rendered and joined by `", "`.
pub fn render_list(items: &[Value]) -> String {
    items.iter().map(render).collect::<Vec<_>>().join(", ")
}

/// Raw flag value as seen by the validation engine.
pub fn from_flag(flag: &FlagValue) -> Value {
    match flag {
        FlagValue::Present => Value::Bool(true),
        FlagValue::Single(v) => Value::String(v.clone()),
        FlagValue::Multiple(all) => Value::Array(all.iter().cloned().map(Value::String).collect()),
    }
}
