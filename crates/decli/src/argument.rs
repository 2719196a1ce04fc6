//! Positional argument descriptors.

use decli_argparse::ArgumentSynopsis;
use decli_argparse::help::FieldMeta;

use crate::error::{DefinitionError, FieldKind};
use crate::validation::{self, FieldRules, ValidationStats};
use crate::value::{Value, ValueType, render};

/// A declared positional argument.
///
/// Built from a synopsis string (`<name>`, `[name]`, `<...name>`, `name`)
/// and refined with consuming builder methods:
///
/// ```
/// use decli::ArgumentDef;
///
/// let id = ArgumentDef::new("<...id>", "Row ids").number();
/// assert!(id.is_required());
/// assert!(id.is_variadic());
/// ```
#[derive(Debug)]
pub struct ArgumentDef {
    synopsis: String,
    description: String,
    name: String,
    rules: FieldRules,
    defect: Option<DefinitionError>,
}

/// Result of validating one argument slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentOutcome {
    pub stats: ValidationStats,
    /// Extra positional tokens taken by a variadic argument.
    pub consumed: usize,
}

impl ArgumentDef {
    pub fn new(synopsis: impl Into<String>, description: impl Into<String>) -> Self {
        let synopsis = synopsis.into();
        let parsed = ArgumentSynopsis::parse(&synopsis);
        Self {
            synopsis,
            description: description.into(),
            name: parsed.name,
            rules: FieldRules {
                required: parsed.required,
                variadic: parsed.variadic,
                ..Default::default()
            },
            defect: None,
        }
    }

    pub fn string(mut self) -> Self {
        self.rules.value_type = ValueType::String;
        self
    }

    pub fn number(mut self) -> Self {
        self.rules.value_type = ValueType::Number;
        self
    }

    pub fn float(mut self) -> Self {
        self.rules.value_type = ValueType::Float;
        self
    }

    pub fn boolean(mut self) -> Self {
        self.rules.value_type = ValueType::Boolean;
        self
    }

    pub fn required(mut self) -> Self {
        self.rules.required = true;
        self
    }

    pub fn variadic(mut self) -> Self {
        self.rules.variadic = true;
        self
    }

    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.rules.default = Some(value.into());
        self
    }

    /// Allowed values. An empty list is a definition error.
    pub fn include<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            self.record_empty("include");
        }
        self.rules.include = Some(values);
        self
    }

    /// Forbidden values. An empty list is a definition error.
    pub fn exclude<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            self.record_empty("exclude");
        }
        self.rules.exclude = Some(values);
        self
    }

    pub fn validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(Option<&Value>) -> Result<Value, String> + 'static,
    {
        self.rules.validator = Some(Box::new(validator));
        self
    }

    fn record_empty(&mut self, rule: &'static str) {
        self.defect.get_or_insert(DefinitionError::EmptyCollection {
            kind: FieldKind::Arguments,
            name: self.name.clone(),
            rule,
        });
    }

    pub fn synopsis(&self) -> &str {
        &self.synopsis
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &FieldRules {
        &self.rules
    }

    pub fn value_type(&self) -> ValueType {
        self.rules.value_type
    }

    pub fn is_required(&self) -> bool {
        self.rules.required
    }

    pub fn is_variadic(&self) -> bool {
        self.rules.variadic
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.rules.default.as_ref()
    }

    pub(crate) fn defect(&self) -> Option<&DefinitionError> {
        self.defect.as_ref()
    }

    /// Validate the slot at `index` of the residual positional tokens.
    ///
    /// A variadic argument takes every token from `index` on and reports how
    /// many it consumed so the caller can skip past them.
    pub fn validate(&self, tokens: &[String], index: usize) -> ArgumentOutcome {
        let kind = FieldKind::Arguments;
        let mut stats = ValidationStats::default();
        let rest = tokens.get(index..).unwrap_or_default();

        let (raw, consumed) = if self.rules.variadic {
            let items: Vec<Value> = rest.iter().cloned().map(Value::String).collect();
            let consumed = items.len();
            ((!items.is_empty()).then_some(Value::Array(items)), consumed)
        } else {
            let raw = rest.first().filter(|t| !t.is_empty()).cloned().map(Value::String);
            (raw, 0)
        };

        let value = raw.or_else(|| self.rules.truthy_default().cloned());

        if let Some(validator) = &self.rules.validator {
            validation::run_validator(validator, value.as_ref(), &mut stats);
            return ArgumentOutcome { stats, consumed };
        }

        let Some(value) = value else {
            validation::check_required(kind, &self.name, &self.rules, &mut stats);
            return ArgumentOutcome { stats, consumed };
        };

        let data = match value {
            Value::Array(items) if self.rules.variadic => {
                validation::apply_each(kind, &self.name, &items, &self.rules, &mut stats)
            }
            other if self.rules.variadic => {
                validation::apply_each(kind, &self.name, &[other], &self.rules, &mut stats)
            }
            other => validation::apply(kind, &self.name, &other, &self.rules, &mut stats),
        };
        stats.data = Some(data);

        ArgumentOutcome { stats, consumed }
    }
}

impl FieldMeta for ArgumentDef {
    fn synopsis(&self) -> &str {
        &self.synopsis
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn required(&self) -> bool {
        self.rules.required
    }

    fn default_value(&self) -> Option<String> {
        self.rules.default.as_ref().map(render)
    }
}
