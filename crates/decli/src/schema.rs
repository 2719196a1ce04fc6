//! Serializable snapshot of a program's declarations.

use indexmap::IndexMap;
use serde::Serialize;

use crate::argument::ArgumentDef;
use crate::command::Command;
use crate::option::OptionDef;
use crate::program::Program;
use crate::value::{Value, ValueType};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProgramSchema {
    pub name: String,
    pub version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    pub commands: Vec<CommandSchema>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldSchema>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CommandSchema {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<FieldSchema>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldSchema>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<String>,
    pub allow_unknown_option: bool,
    pub has_action: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct FieldSchema {
    pub name: String,
    pub synopsis: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(rename = "type")]
    pub value_type: ValueType,
    pub required: bool,
    pub variadic: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conflicts: Vec<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub implies: IndexMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub custom_validator: bool,
}

impl From<&ArgumentDef> for FieldSchema {
    fn from(a: &ArgumentDef) -> Self {
        let rules = a.rules();
        Self {
            name: a.name().to_string(),
            synopsis: a.synopsis().to_string(),
            description: a.description().to_string(),
            value_type: rules.value_type,
            required: rules.required,
            variadic: rules.variadic,
            hidden: false,
            short: None,
            long: None,
            default: rules.default.clone(),
            include: rules.include.clone(),
            exclude: rules.exclude.clone(),
            conflicts: Vec::new(),
            implies: IndexMap::new(),
            env: None,
            custom_validator: rules.validator.is_some(),
        }
    }
}

impl From<&OptionDef> for FieldSchema {
    fn from(o: &OptionDef) -> Self {
        let rules = o.rules();
        Self {
            name: o.key().to_string(),
            synopsis: o.synopsis().to_string(),
            description: o.description().to_string(),
            value_type: rules.value_type,
            required: rules.required,
            variadic: rules.variadic,
            hidden: o.is_hidden(),
            short: o.short().map(str::to_string),
            long: o.long().map(str::to_string),
            default: rules.default.clone(),
            include: rules.include.clone(),
            exclude: rules.exclude.clone(),
            conflicts: o.conflicting().to_vec(),
            implies: o.implied().clone(),
            env: o.env_var().map(str::to_string),
            custom_validator: rules.validator.is_some(),
        }
    }
}

impl CommandSchema {
    fn new(program: &Program, command: &Command) -> Self {
        Self {
            name: command.name().to_string(),
            description: command.description().to_string(),
            aliases: command.aliases().to_vec(),
            arguments: command.arguments().iter().map(FieldSchema::from).collect(),
            options: command.options().iter().map(FieldSchema::from).collect(),
            commands: command
                .nested()
                .iter()
                .filter_map(|i| program.commands().get(*i))
                .map(|c| c.name().to_string())
                .collect(),
            allow_unknown_option: command.allows_unknown_options(),
            has_action: command.has_action(),
        }
    }
}

impl ProgramSchema {
    pub fn new(program: &Program) -> Self {
        Self {
            name: program.name().to_string(),
            version: program.version().to_string(),
            description: program.description().to_string(),
            usage: program.usage_text().map(str::to_string),
            commands: program
                .commands()
                .iter()
                .map(|c| CommandSchema::new(program, c))
                .collect(),
            options: program
                .global_options()
                .iter()
                .map(FieldSchema::from)
                .collect(),
        }
    }
}
