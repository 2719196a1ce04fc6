//! Named option descriptors.

use decli_argparse::OptionSynopsis;
use decli_argparse::help::FieldMeta;
use indexmap::IndexMap;

use crate::env::EnvSource;
use crate::error::{DefinitionError, Failure, FieldKind};
use crate::validation::{self, FieldRules, ValidationStats};
use crate::value::{Value, ValueMap, ValueType, is_truthy, render};

/// A declared option such as `-c, --cheese <type>`.
#[derive(Debug)]
pub struct OptionDef {
    synopsis: OptionSynopsis,
    description: String,
    hidden: bool,
    rules: FieldRules,
    conflicts: Vec<String>,
    implies: IndexMap<String, Value>,
    env: Option<String>,
    defect: Option<DefinitionError>,
}

impl OptionDef {
    pub fn new(synopsis: impl AsRef<str>, description: impl Into<String>) -> Self {
        let synopsis = OptionSynopsis::parse(synopsis.as_ref());
        let rules = FieldRules {
            required: synopsis.required,
            variadic: synopsis.variadic,
            ..Default::default()
        };
        Self {
            synopsis,
            description: description.into(),
            hidden: false,
            rules,
            conflicts: Vec::new(),
            implies: IndexMap::new(),
            env: None,
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

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.rules.default = Some(value.into());
        self
    }

    pub fn include<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            self.record(self.empty("include"));
        }
        self.rules.include = Some(values);
        self
    }

    pub fn exclude<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            self.record(self.empty("exclude"));
        }
        self.rules.exclude = Some(values);
        self
    }

    /// Options (by synopsis, long name or short char) that must not be
    /// combined with this one.
    pub fn conflicts<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        if ids.is_empty() {
            self.record(self.empty("conflicts"));
        }
        self.conflicts = ids;
        self
    }

    /// Keys to set when this option is given and the user did not set them.
    pub fn implies<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.implies = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Read the value from this environment variable at every exec.
    pub fn env(mut self, var: impl Into<String>) -> Self {
        self.env = Some(var.into());
        self
    }

    pub fn validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(Option<&Value>) -> Result<Value, String> + 'static,
    {
        self.rules.validator = Some(Box::new(validator));
        self
    }

    fn empty(&self, rule: &'static str) -> DefinitionError {
        DefinitionError::EmptyCollection {
            kind: FieldKind::Options,
            name: self.key().to_string(),
            rule,
        }
    }

    pub(crate) fn record(&mut self, defect: DefinitionError) {
        self.defect.get_or_insert(defect);
    }

    pub(crate) fn defect(&self) -> Option<&DefinitionError> {
        self.defect.as_ref()
    }

    /// Normalized synopsis, always starting with a dash.
    pub fn synopsis(&self) -> &str {
        &self.synopsis.synopsis
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn short(&self) -> Option<&str> {
        self.synopsis.short.as_deref()
    }

    pub fn long(&self) -> Option<&str> {
        self.synopsis.long.as_deref()
    }

    /// Result key: the long name, else the short char.
    pub fn key(&self) -> &str {
        self.synopsis.key()
    }

    pub fn is_named(&self, id: &str) -> bool {
        self.synopsis.is_named(id)
    }

    pub fn answers_to(&self, flag: &str) -> bool {
        self.synopsis.flag_keys().any(|k| k == flag)
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn rules(&self) -> &FieldRules {
        &self.rules
    }

    pub fn conflicting(&self) -> &[String] {
        &self.conflicts
    }

    pub fn implied(&self) -> &IndexMap<String, Value> {
        &self.implies
    }

    pub fn env_var(&self) -> Option<&str> {
        self.env.as_deref()
    }

    /// Raw flag value, looked up by long name first, then short char.
    pub fn current<'f>(&self, flags: &'f ValueMap) -> Option<&'f Value> {
        self.synopsis.flag_keys().find_map(|k| flags.get(k))
    }

    fn is_set(&self, flags: &ValueMap) -> bool {
        self.current(flags).is_some_and(is_truthy)
    }

    /// Fill the keys this option implies, unless the user already set them.
    ///
    /// A target naming a sibling option counts as set when any of the
    /// sibling's flag keys is present.
    pub fn apply_implies(&self, flags: &mut ValueMap, siblings: &[&OptionDef]) {
        if self.implies.is_empty() || !self.is_set(flags) {
            return;
        }
        for (target, value) in &self.implies {
            let already = match siblings.iter().find(|o| o.is_named(target)) {
                Some(sibling) => sibling.current(flags).is_some(),
                None => flags.contains_key(target),
            };
            if !already {
                tracing::debug!(option = self.key(), target = %target, "implied");
                flags.insert(target.clone(), value.clone());
            }
        }
    }

    /// Validate this option against the parsed flags.
    pub fn validate(
        &self,
        flags: &ValueMap,
        siblings: &[&OptionDef],
        env: &dyn EnvSource,
    ) -> ValidationStats {
        let kind = FieldKind::Options;
        let name = self.key();
        let mut stats = ValidationStats::default();

        let mut value = self.current(flags).cloned();

        if let Some(var) = &self.env
            && let Some(from_env) = env.var(var)
        {
            value = Some(Value::String(from_env));
        }

        if !value.as_ref().is_some_and(is_truthy) {
            value = self.rules.truthy_default().cloned();
        }

        let value = value.filter(is_truthy).map(|v| match v {
            Value::Array(items) if !self.rules.variadic => {
                items.into_iter().next().unwrap_or_default()
            }
            Value::Array(items) => Value::Array(items),
            single if self.rules.variadic => Value::Array(vec![single]),
            other => other,
        });

        if value.is_some() {
            let clash = self.conflicts.iter().find_map(|id| {
                siblings
                    .iter()
                    .find(|o| !std::ptr::eq(**o, self) && o.is_named(id) && o.is_set(flags))
            });
            if let Some(other) = clash {
                stats.push(Failure::OptionConflict {
                    this: self.synopsis().to_string(),
                    other: other.synopsis().to_string(),
                });
            }
        }

        if let Some(validator) = &self.rules.validator {
            validation::run_validator(validator, value.as_ref(), &mut stats);
            return stats;
        }

        let Some(value) = value else {
            validation::check_required(kind, name, &self.rules, &mut stats);
            return stats;
        };

        let data = match value {
            Value::Array(items) if self.rules.variadic => {
                validation::apply_each(kind, name, &items, &self.rules, &mut stats)
            }
            other => validation::apply(kind, name, &other, &self.rules, &mut stats),
        };
        stats.data = Some(data);
        stats
    }
}

impl FieldMeta for OptionDef {
    fn synopsis(&self) -> &str {
        &self.synopsis.synopsis
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

    fn hidden(&self) -> bool {
        self.hidden
    }
}
