//! Declarative command-line programs.
//!
//! A [`Program`] holds commands. Each command declares positional arguments
//! and named options with synopsis strings (`<table>`, `[name]`,
//! `-c, --cheese <type>`) plus validation rules, and carries an action.
//! [`Program::exec`] takes raw input, picks the best-matching command,
//! validates everything in one pass and either runs the action or reports
//! every failure at once.
//!
//! ```
//! use decli::{Program, ProgramConfig};
//! use serde_json::json;
//!
//! let mut program = Program::new("drink", "Buy drinks", ProgramConfig::default());
//! program
//!     .command("buy", "Buy a drink")
//!     .option_with("-f, --free", "Free drink", |o| o.implies([("size", "small")]))
//!     .option_with("-s, --size <size>", "Drink size", |o| {
//!         o.include(["small", "medium", "big"])
//!     })
//!     .action(|inv| Ok(json!(inv.options)));
//!
//! let response = program.exec("buy --free").unwrap();
//! assert_eq!(response.stdout, Some(json!({ "free": true, "size": "small" })));
//! ```

mod argument;
mod command;
mod env;
pub mod error;
mod help;
mod hooks;
pub mod matcher;
mod option;
mod program;
mod schema;
mod sink;
pub mod suggest;
pub mod validation;
pub mod value;

pub use argument::{ArgumentDef, ArgumentOutcome};
pub use command::{Action, Command, CommandBuilder, Invocation};
pub use decli_argparse::{FlagValue, IntoTokens, Tokens, tokenize};
pub use env::{EnvSource, ProcessEnv};
pub use error::{ActionError, DefinitionError, Diagnostics, ExecError, Failure, FieldKind};
pub use hooks::{Hook, HookContext, HookKind};
pub use option::OptionDef;
pub use program::{DEFAULT_VERSION, Program, ProgramConfig, Response};
pub use schema::{CommandSchema, FieldSchema, ProgramSchema};
pub use sink::{ErrorSink, Reporter, stderr_sink, write_errors};
pub use validation::{FieldRules, ValidationStats, Validator};
pub use value::{Value, ValueMap, ValueType};
