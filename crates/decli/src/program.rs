//! The program: command registry, global options and the dispatcher.

use std::collections::HashSet;
use std::fmt;

use decli_argparse::args::{self, IntoTokens, Tokens};
use serde::{Deserialize, Serialize};

use crate::command::{Command, CommandBuilder, Invocation};
use crate::env::{EnvSource, ProcessEnv};
use crate::error::{DefinitionError, Diagnostics, ExecError, Failure};
use crate::help;
use crate::hooks::{HookContext, HookKind, Hooks};
use crate::matcher::{self, Selection};
use crate::option::OptionDef;
use crate::schema::ProgramSchema;
use crate::sink::{self, ErrorSink, Reporter};
use crate::suggest;
use crate::value::{self, Value, ValueMap};

/// Version reported when none is configured.
pub const DEFAULT_VERSION: &str = "1.0.0";

const VERSION_FLAGS: [&str; 2] = ["v", "version"];
const HELP_SYNOPSIS: &str = "-h, --help";

/// Program-wide settings, loadable from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgramConfig {
    pub version: Option<String>,
    /// Append a "Did you mean" message after unknown commands and options.
    pub suggest_after_error: bool,
}

/// Result of one [`Program::exec`].
///
/// Exactly one side is set after a dispatch that reached a decision;
/// both are `None` when an action returned `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stdout: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stderr: Option<Vec<String>>,
}

impl Response {
    fn output(value: Value) -> Self {
        Self {
            stdout: (!value.is_null()).then_some(value),
            stderr: None,
        }
    }

    fn text(text: String) -> Self {
        Self::output(Value::String(text))
    }

    fn failure(messages: Vec<String>) -> Self {
        Self {
            stdout: None,
            stderr: Some(messages),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.stderr.is_none()
    }
}

#[derive(Debug, Default)]
struct Resolved {
    arguments: ValueMap,
    options: ValueMap,
    unknown: ValueMap,
}

/// A declarative command-line program.
pub struct Program {
    name: String,
    description: String,
    config: ProgramConfig,
    commands: Vec<Command>,
    options: Vec<OptionDef>,
    help: Option<OptionDef>,
    usage: Option<String>,
    hooks: Hooks,
    sink: ErrorSink,
    env: Box<dyn EnvSource>,
    reporter: Reporter,
    errors: Vec<String>,
    defects: Vec<DefinitionError>,
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Program")
            .field("name", &self.name)
            .field("config", &self.config)
            .field("commands", &self.commands)
            .field("options", &self.options)
            .field("hooks", &self.hooks)
            .field("errors", &self.errors)
            .field("pending", &self.reporter.pending())
            .finish_non_exhaustive()
    }
}

impl Program {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        config: ProgramConfig,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            config,
            commands: Vec::new(),
            options: Vec::new(),
            help: Some(OptionDef::new(HELP_SYNOPSIS, "Show help")),
            usage: None,
            hooks: Hooks::default(),
            sink: sink::stderr_sink(),
            env: Box::new(ProcessEnv),
            reporter: Reporter::default(),
            errors: Vec::new(),
            defects: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn config(&self) -> &ProgramConfig {
        &self.config
    }

    pub fn version(&self) -> &str {
        self.config.version.as_deref().unwrap_or(DEFAULT_VERSION)
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Commands that are not nested under another command.
    pub fn roots(&self) -> impl Iterator<Item = &Command> {
        let nested: HashSet<usize> = self
            .commands
            .iter()
            .flat_map(|c| c.nested().iter().copied())
            .collect();
        self.commands
            .iter()
            .enumerate()
            .filter(move |(i, _)| !nested.contains(i))
            .map(|(_, c)| c)
    }

    pub fn global_options(&self) -> &[OptionDef] {
        &self.options
    }

    pub fn help_flag(&self) -> Option<&OptionDef> {
        self.help.as_ref()
    }

    pub fn usage_text(&self) -> Option<&str> {
        self.usage.as_deref()
    }

    pub(crate) fn command_mut(&mut self, index: usize) -> &mut Command {
        &mut self.commands[index]
    }

    pub(crate) fn register(&mut self, name: String, description: String) -> usize {
        if self.commands.iter().any(|c| c.name() == name) {
            self.defects.push(DefinitionError::DuplicateCommand { name: name.clone() });
        }
        tracing::trace!(command = %name, "registered");
        self.commands.push(Command::new(name, description));
        self.commands.len() - 1
    }

    /// Record definition-time problems on an option before it is stored.
    pub(crate) fn admit(&self, mut option: OptionDef) -> OptionDef {
        let missing = option
            .env_var()
            .filter(|var| self.env.var(var).is_none())
            .map(|var| DefinitionError::MissingEnv {
                option: option.key().to_string(),
                var: var.to_string(),
            });
        if let Some(defect) = missing {
            option.record(defect);
        }
        option
    }

    /// Register a top-level command and return a builder for it.
    pub fn command(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> CommandBuilder<'_> {
        let index = self.register(name.into(), description.into());
        CommandBuilder::new(self, index)
    }

    /// Declare a global option, validated for every command.
    pub fn option(
        &mut self,
        synopsis: impl AsRef<str>,
        description: impl Into<String>,
    ) -> &mut Self {
        self.add_option(OptionDef::new(synopsis, description))
    }

    pub fn add_option(&mut self, option: OptionDef) -> &mut Self {
        let option = self.admit(option);
        self.options.push(option);
        self
    }

    /// Replace the help option (default `-h, --help`).
    pub fn help_option(
        &mut self,
        synopsis: impl AsRef<str>,
        description: impl Into<String>,
    ) -> &mut Self {
        self.help = Some(OptionDef::new(synopsis, description));
        self
    }

    pub fn no_help_option(&mut self) -> &mut Self {
        self.help = None;
        self
    }

    pub fn usage(&mut self, usage: impl Into<String>) -> &mut Self {
        self.usage = Some(usage.into());
        self
    }

    pub fn hook<F>(&mut self, kind: HookKind, hook: F) -> &mut Self
    where
        F: Fn(&HookContext<'_>) + 'static,
    {
        self.hooks.add(kind, hook);
        self
    }

    /// Replace the error sink (default: an `Error:` block on stderr).
    pub fn stderr<F>(&mut self, sink: F) -> &mut Self
    where
        F: Fn(&[String]) + 'static,
    {
        self.sink = Box::new(sink);
        self
    }

    /// Replace the environment source. Set it before declaring options
    /// that read from the environment.
    pub fn env_source(&mut self, env: impl EnvSource + 'static) -> &mut Self {
        self.env = Box::new(env);
        self
    }

    /// Queue messages that fail the next exec.
    pub fn error<I, S>(&mut self, messages: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reporter.error(messages);
        self
    }

    /// Handle for queueing messages from validators, hooks and actions.
    pub fn reporter(&self) -> Reporter {
        self.reporter.clone()
    }

    /// Messages of the last exec, followed by anything queued since.
    pub fn errors(&self) -> Vec<String> {
        let mut errors = self.errors.clone();
        errors.extend(self.reporter.pending());
        errors
    }

    /// First definition error in the registry, if any.
    pub fn check(&self) -> Result<(), DefinitionError> {
        if let Some(defect) = self.defects.first() {
            return Err(defect.clone());
        }
        let arguments = self
            .commands
            .iter()
            .flat_map(|c| c.arguments())
            .filter_map(|a| a.defect());
        let options = self
            .commands
            .iter()
            .flat_map(|c| c.options())
            .chain(&self.options)
            .filter_map(|o| o.defect());
        match arguments.chain(options).next() {
            Some(defect) => Err(defect.clone()),
            None => Ok(()),
        }
    }

    pub fn parse(&self, input: impl IntoTokens) -> Tokens {
        args::tokenize(input)
    }

    pub fn help(&self) -> String {
        help::program_help(self)
    }

    pub fn command_help(&self, command: &Command) -> String {
        help::command_help(self, command)
    }

    pub fn schema(&self) -> ProgramSchema {
        ProgramSchema::new(self)
    }

    /// Tokenize, match, validate and dispatch.
    ///
    /// User mistakes come back as `Response::stderr` after being sent to the
    /// error sink. `Err` is reserved for definition errors and failing
    /// actions.
    pub fn exec(&mut self, input: impl IntoTokens) -> Result<Response, ExecError> {
        self.errors.clear();
        self.check()?;

        let raw = input.into_tokens();
        let tokens = args::parse(raw.clone());
        let response = self.dispatch(&raw, &tokens);
        let dropped = self.reporter.drain();
        if !dropped.is_empty() {
            tracing::debug!(?dropped, "queued messages not used by this exec");
        }
        let response = response?;

        if let Some(messages) = &response.stderr {
            self.errors.extend(messages.iter().cloned());
        }
        Ok(response)
    }

    fn dispatch(&self, raw: &[String], tokens: &Tokens) -> Result<Response, ExecError> {
        tracing::debug!(
            positional = ?tokens.positional,
            flags = ?tokens.flags.keys().collect::<Vec<_>>(),
            "dispatch"
        );

        if self.wants_version(tokens) {
            return Ok(Response::text(self.version().to_string()));
        }
        if tokens.positional.is_empty() && self.wants_help(tokens) {
            return Ok(Response::text(self.help()));
        }

        let index = match matcher::select(&self.commands, &tokens.positional) {
            Selection::Matched(index) => index,
            Selection::NotFound => {
                let mut diagnostics = Diagnostics::new();
                diagnostics.push(Failure::CommandNotFound {
                    input: raw.join(" "),
                });
                if self.config.suggest_after_error
                    && let Some(candidate) = suggest::command(&tokens.positional, &self.commands)
                {
                    diagnostics.push(Failure::Suggestion { candidate });
                }
                return Ok(self.fail(None, diagnostics, false));
            }
        };
        let command = &self.commands[index];

        if self.wants_help(tokens) {
            return Ok(Response::text(self.command_help(command)));
        }

        let mut diagnostics = Diagnostics::new();
        let resolved = self.resolve(command, tokens, &mut diagnostics);
        diagnostics.extend(self.reporter.drain());
        if !diagnostics.is_empty() {
            return Ok(self.fail(Some(command), diagnostics, true));
        }

        let Some(action) = command.action() else {
            diagnostics.push(Failure::ActionMissing {
                command: command.name().to_string(),
            });
            return Ok(self.fail(Some(command), diagnostics, false));
        };

        self.run_hooks(HookKind::PreAction, Some(command), &[]);
        if !self.reporter.is_empty() {
            diagnostics.extend(self.reporter.drain());
            return Ok(self.fail(Some(command), diagnostics, true));
        }
        let invocation = Invocation {
            arguments: (!resolved.arguments.is_empty()).then_some(&resolved.arguments),
            options: &resolved.options,
            unknown: &resolved.unknown,
            command,
        };
        let output = action(&invocation).map_err(|source| ExecError::Action {
            command: command.name().to_string(),
            source,
        })?;
        self.run_hooks(HookKind::PostAction, Some(command), &[]);

        Ok(Response::output(output))
    }

    /// Validate arguments, then options, then look for unknown flags.
    fn resolve(
        &self,
        command: &Command,
        tokens: &Tokens,
        diagnostics: &mut Diagnostics,
    ) -> Resolved {
        let mut resolved = Resolved::default();

        let residue = matcher::residue(command, &tokens.positional);
        let declared = command.arguments();
        let mut i = 0;
        while let Some(argument) = declared.get(i) {
            let outcome = argument.validate(&residue, i);
            diagnostics.extend(outcome.stats.fail);
            if let Some(data) = outcome.stats.data {
                resolved.arguments.insert(argument.name().to_string(), data);
            }
            i += outcome.consumed + 1;
        }
        if !command.ends_variadic() && residue.len() > declared.len() {
            diagnostics.push(Failure::ArgumentOverflow {
                expected: declared.len(),
                received: residue.len(),
            });
        }

        let siblings: Vec<&OptionDef> = command.options().iter().chain(&self.options).collect();
        let mut flags: ValueMap = tokens
            .flags
            .iter()
            .map(|(k, v)| (k.clone(), value::from_flag(v)))
            .collect();
        for option in &siblings {
            option.apply_implies(&mut flags, &siblings);
        }

        for option in &siblings {
            let stats = option.validate(&flags, &siblings, &*self.env);
            diagnostics.extend(stats.fail);
            if let Some(data) = stats.data {
                resolved.options.insert(option.key().to_string(), data);
            }
        }

        for (key, raw) in &tokens.flags {
            if siblings.iter().any(|o| o.answers_to(key)) || self.is_help_flag(key) {
                continue;
            }
            if command.allows_unknown_options() {
                resolved.unknown.insert(key.clone(), value::from_flag(raw));
                continue;
            }
            diagnostics.push(Failure::UnknownOption { key: key.clone() });
            if self.config.suggest_after_error
                && let Some(candidate) = suggest::option(key, &siblings)
            {
                diagnostics.push(Failure::Suggestion {
                    candidate: candidate.to_string(),
                });
            }
        }

        tracing::debug!(
            command = command.name(),
            failures = diagnostics.len(),
            "resolved"
        );
        resolved
    }

    /// `-v`/`--version`, unless a declared option owns that key.
    fn wants_version(&self, tokens: &Tokens) -> bool {
        VERSION_FLAGS.iter().any(|key| {
            tokens.flags.contains_key(*key)
                && !self
                    .commands
                    .iter()
                    .flat_map(|c| c.options())
                    .chain(&self.options)
                    .any(|o| o.answers_to(key))
        })
    }

    fn wants_help(&self, tokens: &Tokens) -> bool {
        tokens.flags.keys().any(|k| self.is_help_flag(k))
    }

    fn is_help_flag(&self, key: &str) -> bool {
        self.help.as_ref().is_some_and(|h| h.answers_to(key))
    }

    fn run_hooks(&self, kind: HookKind, command: Option<&Command>, errors: &[String]) {
        self.hooks.run(&HookContext {
            kind,
            command,
            errors,
        });
    }

    /// Send messages to the sink, with error hooks around it when asked.
    fn fail(&self, command: Option<&Command>, diagnostics: Diagnostics, hooks: bool) -> Response {
        let messages = diagnostics.into_messages();
        if hooks {
            self.run_hooks(HookKind::PreError, command, &messages);
        }
        (self.sink)(&messages);
        if hooks {
            self.run_hooks(HookKind::PostError, command, &messages);
        }
        Response::failure(messages)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use serde_json::json;

    fn quiet(program: &mut Program) -> Rc<RefCell<Vec<String>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        program.stderr(move |messages| sink.borrow_mut().extend(messages.iter().cloned()));
        seen
    }

    #[test]
    fn version_flag_without_positionals() {
        let mut program = Program::new("app", "", ProgramConfig::default());
        program.command("run", "").action(|_| Ok(json!("ran")));
        program.command("stop", "").action(|_| Ok(json!("stopped")));
        let response = program.exec("--version").unwrap();
        assert_eq!(response.stdout, Some(json!("1.0.0")));

        let mut program = Program::new(
            "app",
            "",
            ProgramConfig {
                version: Some("2.3.4".into()),
                ..Default::default()
            },
        );
        assert_eq!(program.exec("-v").unwrap().stdout, Some(json!("2.3.4")));
    }

    #[test]
    fn declared_short_v_is_not_the_version_flag() {
        let mut program = Program::new("app", "", ProgramConfig::default());
        program
            .command("run", "")
            .option("-v, --verbose", "")
            .action(|inv| Ok(json!(inv.flag("verbose"))));
        assert_eq!(program.exec("run -v").unwrap().stdout, Some(json!(true)));
        assert_eq!(program.exec("run --version").unwrap().stdout, Some(json!("1.0.0")));
    }

    #[test]
    fn help_flag_prints_help() {
        let mut program = Program::new("app", "Does things", ProgramConfig::default());
        program.command("run", "Run it");
        let response = program.exec("-h").unwrap();
        let text = response.stdout.unwrap();
        assert!(text.as_str().unwrap().contains("Usage: app"));

        let response = program.exec("run --help").unwrap();
        assert!(response.stdout.unwrap().as_str().unwrap().contains("Run it"));
    }

    #[test]
    fn not_found_goes_to_sink_without_hooks() {
        let mut program = Program::new(
            "pizza",
            "",
            ProgramConfig {
                suggest_after_error: true,
                ..Default::default()
            },
        );
        program.command("order", "").action(|_| Ok(Value::Null));
        program.command("pay", "").action(|_| Ok(Value::Null));
        let seen = quiet(&mut program);
        let fired = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&fired);
        program.hook(HookKind::PreError, move |_| *counter.borrow_mut() += 1);

        let response = program.exec("ordr").unwrap();
        assert_eq!(
            response.stderr,
            Some(vec![
                "Command 'ordr' not found.".to_string(),
                "Did you mean 'order'?".to_string(),
            ])
        );
        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(*fired.borrow(), 0);
        assert_eq!(program.errors().len(), 2);
    }

    #[test]
    fn error_hooks_wrap_the_sink() {
        let mut program = Program::new("db", "", ProgramConfig::default());
        program
            .command("get", "")
            .argument("<id>", "")
            .action(|_| Ok(Value::Null));
        let order = Rc::new(RefCell::new(Vec::new()));
        for kind in [HookKind::PreError, HookKind::PostError] {
            let order = Rc::clone(&order);
            program.hook(kind, move |ctx| {
                order.borrow_mut().push(format!("{:?}:{}", ctx.kind, ctx.errors.len()))
            });
        }
        let sink_order = Rc::clone(&order);
        program.stderr(move |_| sink_order.borrow_mut().push("sink".to_string()));

        let response = program.exec("get").unwrap();
        assert_eq!(response.stderr, Some(vec!["Arguments 'id' is required".to_string()]));
        assert_eq!(*order.borrow(), vec!["PreError:1", "sink", "PostError:1"]);
    }

    #[test]
    fn action_hooks_run_around_action() {
        let mut program = Program::new("app", "", ProgramConfig::default());
        let order = Rc::new(RefCell::new(Vec::new()));
        let in_action = Rc::clone(&order);
        program.command("run", "").action(move |_| {
            in_action.borrow_mut().push("action");
            Ok(json!(1))
        });
        for (kind, tag) in [(HookKind::PreAction, "pre"), (HookKind::PostAction, "post")] {
            let order = Rc::clone(&order);
            program.hook(kind, move |_| order.borrow_mut().push(tag));
        }
        assert_eq!(program.exec("run").unwrap().stdout, Some(json!(1)));
        assert_eq!(*order.borrow(), vec!["pre", "action", "post"]);
    }

    #[test]
    fn missing_action_is_reported() {
        let mut program = Program::new("app", "", ProgramConfig::default());
        program.command("run", "");
        let seen = quiet(&mut program);
        let response = program.exec("run").unwrap();
        assert_eq!(
            response.stderr,
            Some(vec!["Action not defined for command 'run'".to_string()])
        );
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn too_many_arguments() {
        let mut program = Program::new("app", "", ProgramConfig::default());
        program
            .command("run", "")
            .argument("<a>", "")
            .action(|_| Ok(Value::Null));
        quiet(&mut program);
        let response = program.exec("run x y").unwrap();
        assert_eq!(
            response.stderr,
            Some(vec!["Too many arguments: expected 1, received 2".to_string()])
        );
    }

    #[test]
    fn unknown_options_allowed_into_bag() {
        let mut program = Program::new("app", "", ProgramConfig::default());
        program
            .command("run", "")
            .allow_unknown_option(true)
            .action(|inv| Ok(json!(inv.unknown)));
        let response = program.exec("run --extra 1").unwrap();
        assert_eq!(response.stdout, Some(json!({ "extra": "1" })));
    }

    #[test]
    fn global_options_are_validated_and_known() {
        let mut program = Program::new("app", "", ProgramConfig::default());
        program.option("--verbose", "Chatty output");
        program
            .command("run", "")
            .action(|inv| Ok(json!(inv.options)));
        let response = program.exec("run --verbose").unwrap();
        assert_eq!(response.stdout, Some(json!({ "verbose": true })));
    }

    #[test]
    fn definition_errors_stop_exec() {
        let mut program = Program::new("app", "", ProgramConfig::default());
        program
            .command("run", "")
            .option_with("--size <s>", "", |o| o.include(Vec::<String>::new()))
            .action(|_| Ok(Value::Null));
        let err = program.exec("run").unwrap_err();
        assert!(matches!(
            err,
            ExecError::Definition(DefinitionError::EmptyCollection { .. })
        ));
        assert_eq!(
            err.to_string(),
            "Options 'size' must be have minimum 1 length (include)"
        );
    }

    #[test]
    fn missing_env_is_a_definition_error() {
        let mut program = Program::new("app", "", ProgramConfig::default());
        program.env_source(Vec::<(String, String)>::new());
        program
            .command("run", "")
            .option_with("--db <name>", "", |o| o.env("DB_NAME"));
        assert_eq!(
            program.check(),
            Err(DefinitionError::MissingEnv {
                option: "db".into(),
                var: "DB_NAME".into(),
            })
        );
    }

    #[test]
    fn duplicate_commands_are_rejected() {
        let mut program = Program::new("app", "", ProgramConfig::default());
        program.command("run", "");
        program.command("run", "");
        assert_eq!(
            program.check(),
            Err(DefinitionError::DuplicateCommand { name: "run".into() })
        );
    }

    #[test]
    fn failing_action_is_an_exec_error() {
        let mut program = Program::new("app", "", ProgramConfig::default());
        program
            .command("run", "")
            .action(|_| Err("database offline".into()));
        let err = program.exec("run").unwrap_err();
        assert_eq!(err.to_string(), "action for command 'run' failed: database offline");
    }

    #[test]
    fn errors_buffer_is_reset_per_exec() {
        let mut program = Program::new("app", "", ProgramConfig::default());
        program.command("run", "").argument("<a>", "").action(|_| Ok(Value::Null));
        quiet(&mut program);
        program.error(["queued"]);
        assert_eq!(program.errors(), ["queued"]);
        program.exec("run").unwrap();
        assert_eq!(program.errors(), ["Arguments 'a' is required", "queued"]);
        program.exec("run x").unwrap();
        assert!(program.errors().is_empty());
    }

    #[test]
    fn validator_can_fail_the_run_through_the_reporter() {
        let mut program = Program::new("words", "", ProgramConfig::default());
        let reporter = program.reporter();
        program
            .command("say", "")
            .argument_with("<word>", "", move |a| {
                a.validator(move |value| {
                    if let Some(Value::String(word)) = value
                        && word.starts_with("xxx")
                    {
                        reporter.error(["Word not allowed"]);
                    }
                    Ok(value.cloned().unwrap_or_default())
                })
            })
            .action(|inv| Ok(json!(inv.argument("word"))));
        let seen = quiet(&mut program);

        let response = program.exec("say xxxhello").unwrap();
        assert_eq!(response.stderr, Some(vec!["Word not allowed".to_string()]));
        assert_eq!(*seen.borrow(), ["Word not allowed"]);

        let response = program.exec("say hello").unwrap();
        assert_eq!(response.stdout, Some(json!("hello")));
        assert!(program.errors().is_empty());
    }

    #[test]
    fn pre_action_hook_can_stop_the_action() {
        let mut program = Program::new("app", "", ProgramConfig::default());
        let ran = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&ran);
        program.command("run", "").action(move |_| {
            *flag.borrow_mut() = true;
            Ok(json!("ran"))
        });
        let reporter = program.reporter();
        program.hook(HookKind::PreAction, move |_| {
            reporter.error(["maintenance window", "try later"]);
        });
        quiet(&mut program);

        let response = program.exec("run").unwrap();
        assert_eq!(
            response.stderr,
            Some(vec!["maintenance window".to_string(), "try later".to_string()])
        );
        assert!(!*ran.borrow());
    }

    #[test]
    fn config_loads_from_camel_case_json() {
        let config: ProgramConfig =
            serde_json::from_str(r#"{ "version": "0.9.0", "suggestAfterError": true }"#).unwrap();
        assert_eq!(config.version.as_deref(), Some("0.9.0"));
        assert!(config.suggest_after_error);
        let config: ProgramConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ProgramConfig::default());
    }
}
