//! Failure messages, definition errors and the per-exec accumulator.
//!
//! User-input problems never become `Err`: they are rendered to strings,
//! collected in [`Diagnostics`] and handed to the error sink as one batch.
//! Only wiring mistakes ([`DefinitionError`]) and failing actions surface as
//! [`ExecError`].

use std::fmt;

use thiserror::Error;

/// Error type returned by actions.
///
/// `anyhow::Error` and any `std::error::Error` convert into it with `?`.
pub type ActionError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Which kind of field a message is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Arguments,
    Options,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arguments => f.write_str("Arguments"),
            Self::Options => f.write_str("Options"),
        }
    }
}

/// A single user-facing failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    #[error("{kind} '{name}' is required")]
    RequiredMissing { kind: FieldKind, name: String },

    #[error("{kind} '{name}' is not a {type_name}")]
    TypeMismatch {
        kind: FieldKind,
        name: String,
        type_name: &'static str,
    },

    #[error("{kind} '{name}' is not in: {set}")]
    NotInAllowList {
        kind: FieldKind,
        name: String,
        set: String,
    },

    #[error("{kind} '{name}' is in the exclude list: {set}")]
    InExcludeList {
        kind: FieldKind,
        name: String,
        set: String,
    },

    #[error("Option '{this}' cannot be used with option '{other}'")]
    OptionConflict { this: String, other: String },

    #[error("Command '{input}' not found.")]
    CommandNotFound { input: String },

    #[error("Unknown options '{key}'")]
    UnknownOption { key: String },

    #[error("Action not defined for command '{command}'")]
    ActionMissing { command: String },

    #[error("Too many arguments: expected {expected}, received {received}")]
    ArgumentOverflow { expected: usize, received: usize },

    #[error("Did you mean '{candidate}'?")]
    Suggestion { candidate: String },

    #[error("{0}")]
    Custom(String),
}

/// Structural misuse found while wiring a program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("{kind} '{name}' must be have minimum 1 length ({rule})")]
    EmptyCollection {
        kind: FieldKind,
        name: String,
        rule: &'static str,
    },

    #[error("option '{option}' reads environment variable '{var}', which is not set")]
    MissingEnv { option: String, var: String },

    #[error("command '{name}' is registered more than once")]
    DuplicateCommand { name: String },
}

/// Errors returned by [`crate::Program::exec`].
#[derive(Debug, Error)]
pub enum ExecError {
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    #[error("action for command '{command}' failed: {source}")]
    Action {
        command: String,
        source: ActionError,
    },
}

/// Ordered failure messages collected during one exec.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    messages: Vec<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, failure: Failure) {
        self.messages.push(failure.to_string());
    }

    pub fn extend<I>(&mut self, messages: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.messages.extend(messages);
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}
