//! Rules shared by arguments and options, and the checks that apply them.

use std::fmt;

use crate::error::{Failure, FieldKind};
use crate::value::{Value, ValueType, is_truthy, render_list};

/// Custom validator. It receives the raw value (after default resolution)
/// and replaces type coercion, the required check and include/exclude.
pub type Validator = Box<dyn Fn(Option<&Value>) -> Result<Value, String>>;

/// The validation envelope every field carries.
#[derive(Default)]
pub struct FieldRules {
    pub value_type: ValueType,
    pub required: bool,
    pub variadic: bool,
    pub default: Option<Value>,
    pub include: Option<Vec<Value>>,
    pub exclude: Option<Vec<Value>>,
    pub validator: Option<Validator>,
}

impl fmt::Debug for FieldRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRules")
            .field("value_type", &self.value_type)
            .field("required", &self.required)
            .field("variadic", &self.variadic)
            .field("default", &self.default)
            .field("include", &self.include)
            .field("exclude", &self.exclude)
            .field("validator", &self.validator.is_some())
            .finish()
    }
}

impl FieldRules {
    /// The default, if it counts as a filled value.
    pub fn truthy_default(&self) -> Option<&Value> {
        self.default.as_ref().filter(|v| is_truthy(v))
    }
}

/// Outcome of validating one field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationStats {
    pub success: Vec<String>,
    pub fail: Vec<String>,
    pub data: Option<Value>,
}

impl ValidationStats {
    pub fn push(&mut self, failure: Failure) {
        self.fail.push(failure.to_string());
    }

    pub fn is_ok(&self) -> bool {
        self.fail.is_empty()
    }
}

/// Coerce `value` to `value_type`. `None` means the value does not fit.
pub fn coerce(value: &Value, value_type: ValueType) -> Option<Value> {
    match value_type {
        ValueType::String => match value {
            Value::String(s) => s
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphanumeric())
                .then(|| value.clone()),
            Value::Bool(_) | Value::Number(_) => Some(value.clone()),
            _ => None,
        },
        ValueType::Number => match value {
            Value::String(s) => parse_integer(s),
            Value::Number(n) if n.is_i64() || n.is_u64() => Some(value.clone()),
            Value::Number(n) => n.as_f64().and_then(integral),
            _ => None,
        },
        ValueType::Float => {
            let f = match value {
                Value::String(s) => s.trim().parse::<f64>().ok()?,
                Value::Number(n) if !(n.is_i64() || n.is_u64()) => n.as_f64()?,
                _ => return None,
            };
            (f.is_finite() && f.fract() != 0.0).then(|| Value::from(f))
        }
        ValueType::Boolean => match value {
            Value::Bool(_) => Some(value.clone()),
            Value::String(s) if s == "true" => Some(Value::Bool(true)),
            Value::String(s) if s == "false" => Some(Value::Bool(false)),
            _ => None,
        },
    }
}

fn parse_integer(s: &str) -> Option<Value> {
    let s = s.trim();
    if let Ok(n) = s.parse::<i64>() {
        return Some(Value::from(n));
    }
    s.parse::<f64>().ok().and_then(integral)
}

fn integral(f: f64) -> Option<Value> {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Some(Value::from(f as i64))
    } else {
        None
    }
}

/// Record a missing required field. Returns whether the field was required.
pub fn check_required(
    kind: FieldKind,
    name: &str,
    rules: &FieldRules,
    stats: &mut ValidationStats,
) -> bool {
    if rules.required {
        stats.push(Failure::RequiredMissing {
            kind,
            name: name.to_string(),
        });
    }
    rules.required
}

/// Include/exclude membership; both lists are checked.
pub fn check_membership(
    kind: FieldKind,
    name: &str,
    value: &Value,
    rules: &FieldRules,
    stats: &mut ValidationStats,
) {
    if let Some(include) = &rules.include
        && !include.contains(value)
    {
        stats.push(Failure::NotInAllowList {
            kind,
            name: name.to_string(),
            set: render_list(include),
        });
    }
    if let Some(exclude) = &rules.exclude
        && exclude.contains(value)
    {
        stats.push(Failure::InExcludeList {
            kind,
            name: name.to_string(),
            set: render_list(exclude),
        });
    }
}

/// Coerce one value and check membership.
///
/// Returns the coerced value, or the raw one when coercion failed (in which
/// case membership is not checked).
pub fn apply(
    kind: FieldKind,
    name: &str,
    value: &Value,
    rules: &FieldRules,
    stats: &mut ValidationStats,
) -> Value {
    match coerce(value, rules.value_type) {
        Some(coerced) => {
            check_membership(kind, name, &coerced, rules, stats);
            stats.success.push(name.to_string());
            coerced
        }
        None => {
            stats.push(Failure::TypeMismatch {
                kind,
                name: name.to_string(),
                type_name: rules.value_type.as_str(),
            });
            value.clone()
        }
    }
}

/// Coerce every element of a variadic value, naming elements `name[i]`.
pub fn apply_each(
    kind: FieldKind,
    name: &str,
    items: &[Value],
    rules: &FieldRules,
    stats: &mut ValidationStats,
) -> Value {
    Value::Array(
        items
            .iter()
            .enumerate()
            .map(|(i, item)| apply(kind, &format!("{name}[{i}]"), item, rules, stats))
            .collect(),
    )
}

/// Run a custom validator, recording its message on failure.
pub fn run_validator(validator: &Validator, value: Option<&Value>, stats: &mut ValidationStats) {
    match validator(value) {
        Ok(Value::Null) => {}
        Ok(data) => stats.data = Some(data),
        Err(message) => stats.push(Failure::Custom(message)),
    }
}
