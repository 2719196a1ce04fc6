//! Whitespace tokenizer and flag collector.
//!
//! There is no quoting and no escaping: a token is whatever whitespace
//! splitting produced. Short-flag clustering (`-abc`) is not supported,
//! `-abc` is the single key `abc`.

use indexmap::IndexMap;

/// Raw input accepted by [`tokenize`].
///
/// Accepts a shell-like string (split on whitespace) or an already split
/// token collection.
pub trait IntoTokens {
    fn into_tokens(self) -> Vec<String>;
}

impl IntoTokens for &str {
    fn into_tokens(self) -> Vec<String> {
        self.split_whitespace().map(str::to_string).collect()
    }
}

impl IntoTokens for String {
    fn into_tokens(self) -> Vec<String> {
        self.as_str().into_tokens()
    }
}

impl IntoTokens for &String {
    fn into_tokens(self) -> Vec<String> {
        self.as_str().into_tokens()
    }
}

impl IntoTokens for Vec<String> {
    fn into_tokens(self) -> Vec<String> {
        self
    }
}

impl IntoTokens for &[String] {
    fn into_tokens(self) -> Vec<String> {
        self.to_vec()
    }
}

impl IntoTokens for &[&str] {
    fn into_tokens(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl<const N: usize> IntoTokens for [&str; N] {
    fn into_tokens(self) -> Vec<String> {
        self.into_iter().map(str::to_string).collect()
    }
}

/// Value collected for a flag key.
///
/// Arity is inferred from how many tokens followed the flag, not from any
/// declaration: none keeps `Present`, one gives `Single`, more give `Multiple`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Present,
    Single(String),
    Multiple(Vec<String>),
}

impl FlagValue {
    fn push(&mut self, token: String) {
        *self = match std::mem::replace(self, FlagValue::Present) {
            FlagValue::Present => FlagValue::Single(token),
            FlagValue::Single(first) => FlagValue::Multiple(vec![first, token]),
            FlagValue::Multiple(mut all) => {
                all.push(token);
                FlagValue::Multiple(all)
            }
        };
    }

    /// All string values (empty for a bare flag).
    pub fn values(&self) -> Vec<&str> {
        match self {
            FlagValue::Present => Vec::new(),
            FlagValue::Single(v) => vec![v.as_str()],
            FlagValue::Multiple(all) => all.iter().map(String::as_str).collect(),
        }
    }
}

/// Tokenizer output: positional tokens plus flags in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    pub positional: Vec<String>,
    pub flags: IndexMap<String, FlagValue>,
}

impl Tokens {
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.flags.is_empty()
    }

    /// Whether any of `keys` was supplied as a flag.
    pub fn has_flag(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.flags.contains_key(*k))
    }
}

/// Tokenize raw input and collect positional tokens and flags.
pub fn tokenize(input: impl IntoTokens) -> Tokens {
    parse(input.into_tokens())
}

/// Collect flags from already split tokens.
///
/// A token starting with `-` or `--` opens a new current key (dashes
/// stripped) set to [`FlagValue::Present`]. Following plain tokens are
/// appended to the current key. Plain tokens seen before any key are
/// positional.
pub fn parse(tokens: Vec<String>) -> Tokens {
    let mut out = Tokens::default();
    let mut current: Option<String> = None;

    for token in tokens {
        if let Some(key) = flag_key(&token) {
            let key = key.to_string();
            out.flags.insert(key.clone(), FlagValue::Present);
            current = Some(key);
            continue;
        }

        match current.as_ref().and_then(|k| out.flags.get_mut(k)) {
            Some(value) => value.push(token),
            None => out.positional.push(token),
        }
    }

    out
}

fn flag_key(token: &str) -> Option<&str> {
    token
        .strip_prefix("--")
        .or_else(|| token.strip_prefix('-'))
}
