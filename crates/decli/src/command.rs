//! Commands and the builder used to wire them.

use std::fmt;

use crate::argument::ArgumentDef;
use crate::error::ActionError;
use crate::option::OptionDef;
use crate::program::Program;
use crate::value::{Value, ValueMap};

/// A command's action.
pub type Action = Box<dyn Fn(&Invocation<'_>) -> Result<Value, ActionError>>;

/// What an action receives.
pub struct Invocation<'a> {
    /// Resolved arguments, or `None` when no argument produced a value.
    pub arguments: Option<&'a ValueMap>,
    /// Resolved options keyed by long name (short char when there is none).
    pub options: &'a ValueMap,
    /// Unknown options, kept only when the command allows them.
    pub unknown: &'a ValueMap,
    pub command: &'a Command,
}

impl Invocation<'_> {
    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments.and_then(|a| a.get(name))
    }

    /// Option value by long name, short char or synopsis.
    pub fn option(&self, id: &str) -> Option<&Value> {
        if let Some(v) = self.options.get(id) {
            return Some(v);
        }
        self.command
            .options()
            .iter()
            .find(|o| o.is_named(id))
            .and_then(|o| self.options.get(o.key()))
    }

    /// Whether a boolean-ish option was given.
    pub fn flag(&self, id: &str) -> bool {
        self.option(id).is_some_and(crate::value::is_truthy)
    }
}

/// A named operation with its declared fields.
pub struct Command {
    name: String,
    description: String,
    arguments: Vec<ArgumentDef>,
    options: Vec<OptionDef>,
    aliases: Vec<String>,
    nested: Vec<usize>,
    allow_unknown: bool,
    action: Option<Action>,
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("arguments", &self.arguments)
            .field("options", &self.options)
            .field("aliases", &self.aliases)
            .field("nested", &self.nested)
            .field("allow_unknown", &self.allow_unknown)
            .field("action", &self.action.is_some())
            .finish()
    }
}

impl Command {
    pub(crate) fn new(name: String, description: String) -> Self {
        Self {
            name,
            description,
            arguments: Vec::new(),
            options: Vec::new(),
            aliases: Vec::new(),
            nested: Vec::new(),
            allow_unknown: false,
            action: None,
        }
    }

    /// Full space-separated name, e.g. `order list`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> impl Iterator<Item = &str> {
        self.name.split(' ')
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn arguments(&self) -> &[ArgumentDef] {
        &self.arguments
    }

    pub fn options(&self) -> &[OptionDef] {
        &self.options
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Indices of nested commands in the program's registry.
    pub fn nested(&self) -> &[usize] {
        &self.nested
    }

    pub fn allows_unknown_options(&self) -> bool {
        self.allow_unknown
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    pub(crate) fn action(&self) -> Option<&Action> {
        self.action.as_ref()
    }

    /// A trailing variadic argument absorbs any number of tokens.
    pub fn ends_variadic(&self) -> bool {
        self.arguments.last().is_some_and(ArgumentDef::is_variadic)
    }
}

/// Adds fields and behavior to a registered command.
///
/// Obtained from [`Program::command`]. Every method returns the builder
/// again, so definitions chain:
///
/// ```
/// use decli::{Program, ProgramConfig};
/// use serde_json::json;
///
/// let mut program = Program::new("pizza", "Pizza ordering", ProgramConfig::default());
/// program
///     .command("order", "Order a pizza")
///     .option("-p, --peppers", "Add peppers")
///     .action(|inv| Ok(json!({ "peppers": inv.flag("peppers") })));
///
/// let response = program.exec("order -p").unwrap();
/// assert_eq!(response.stdout, Some(json!({ "peppers": true })));
/// ```
pub struct CommandBuilder<'p> {
    program: &'p mut Program,
    index: usize,
}

impl<'p> CommandBuilder<'p> {
    pub(crate) fn new(program: &'p mut Program, index: usize) -> Self {
        Self { program, index }
    }

    fn command_mut(&mut self) -> &mut Command {
        self.program.command_mut(self.index)
    }

    /// Registry index of the command being built.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &str {
        self.program.commands()[self.index].name()
    }

    /// Register a nested command named `"<this> <name>"`.
    pub fn command(
        &mut self,
        name: impl AsRef<str>,
        description: impl Into<String>,
    ) -> CommandBuilder<'_> {
        let full = format!("{} {}", self.name(), name.as_ref().trim());
        let child = self.program.register(full, description.into());
        self.command_mut().nested.push(child);
        CommandBuilder::new(&mut *self.program, child)
    }

    pub fn argument(
        &mut self,
        synopsis: impl Into<String>,
        description: impl Into<String>,
    ) -> &mut Self {
        self.add_argument(ArgumentDef::new(synopsis, description))
    }

    /// Declare an argument and refine it, e.g. `|a| a.number().default(1)`.
    pub fn argument_with<F>(
        &mut self,
        synopsis: impl Into<String>,
        description: impl Into<String>,
        configure: F,
    ) -> &mut Self
    where
        F: FnOnce(ArgumentDef) -> ArgumentDef,
    {
        self.add_argument(configure(ArgumentDef::new(synopsis, description)))
    }

    pub fn add_argument(&mut self, argument: ArgumentDef) -> &mut Self {
        self.command_mut().arguments.push(argument);
        self
    }

    pub fn option(
        &mut self,
        synopsis: impl AsRef<str>,
        description: impl Into<String>,
    ) -> &mut Self {
        self.add_option(OptionDef::new(synopsis, description))
    }

    pub fn option_with<F>(
        &mut self,
        synopsis: impl AsRef<str>,
        description: impl Into<String>,
        configure: F,
    ) -> &mut Self
    where
        F: FnOnce(OptionDef) -> OptionDef,
    {
        self.add_option(configure(OptionDef::new(synopsis, description)))
    }

    pub fn add_option(&mut self, option: OptionDef) -> &mut Self {
        let option = self.program.admit(option);
        self.command_mut().options.push(option);
        self
    }

    pub fn alias<I, S>(&mut self, aliases: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.command_mut()
            .aliases
            .extend(aliases.into_iter().map(Into::into));
        self
    }

    pub fn action<F>(&mut self, action: F) -> &mut Self
    where
        F: Fn(&Invocation<'_>) -> Result<Value, ActionError> + 'static,
    {
        self.command_mut().action = Some(Box::new(action));
        self
    }

    pub fn allow_unknown_option(&mut self, allow: bool) -> &mut Self {
        self.command_mut().allow_unknown = allow;
        self
    }
}
