//! Low-level pieces of decli's argument handling.
//!
//! This crate is intentionally small so it can be reused by:
//! - `decli` (command matching, validation and dispatch are built on top)
//! - external help renderers that only need the layout helpers
//!
//! It knows nothing about commands or validation rules: it turns raw input into
//! tokens, reads declarative synopsis strings, and lays out help text.

pub mod args;
pub mod help;
pub mod synopsis;

pub use args::{FlagValue, IntoTokens, Tokens, tokenize};
pub use synopsis::{ArgumentSynopsis, OptionSynopsis};
