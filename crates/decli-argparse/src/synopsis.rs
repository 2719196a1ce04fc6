//! Declarative synopsis strings.
//!
//! A single string carries a field's name and its markers:
//! - `<name>` required, `[name]` optional, bare `name` is just the name
//! - `...` anywhere, or the square-bracket form, marks the field variadic
//! - options add `-x, ` for the short form and `--long` for the long form

const VARIADIC_MARK: &str = "...";

/// Structural metadata of a positional argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSynopsis {
    pub name: String,
    pub required: bool,
    pub variadic: bool,
}

impl ArgumentSynopsis {
    pub fn parse(synopsis: &str) -> Self {
        let (name, required) = if let Some(inner) = bracketed(synopsis, '<', '>') {
            (inner, true)
        } else if let Some(inner) = bracketed(synopsis, '[', ']') {
            (inner, false)
        } else {
            (synopsis, false)
        };

        Self {
            name: strip_variadic(name),
            required,
            variadic: is_variadic(synopsis),
        }
    }
}

/// Structural metadata of a named option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSynopsis {
    /// Normalized synopsis (always starts with a dash).
    pub synopsis: String,
    pub short: Option<String>,
    pub long: Option<String>,
    pub required: bool,
    pub variadic: bool,
}

impl OptionSynopsis {
    pub fn parse(raw: &str) -> Self {
        let synopsis = normalize(raw);

        let short = short_form(&synopsis).map(str::to_string);
        let long = long_form(&synopsis).map(strip_variadic);

        // `[...]` wins over `<...>` when both appear.
        let required = if bracketed(&synopsis, '[', ']').is_some() {
            false
        } else {
            bracketed(&synopsis, '<', '>').is_some()
        };
        let variadic = is_variadic(&synopsis);

        Self {
            synopsis,
            short,
            long,
            required,
            variadic,
        }
    }

    /// Key used for the resolved value: the long name, else the short char.
    pub fn key(&self) -> &str {
        self.long
            .as_deref()
            .or(self.short.as_deref())
            .unwrap_or_default()
    }

    /// Flag keys (dashes stripped) that address this option.
    pub fn flag_keys(&self) -> impl Iterator<Item = &str> {
        self.long.as_deref().into_iter().chain(self.short.as_deref())
    }

    /// Whether `id` names this option by synopsis, long name or short char.
    pub fn is_named(&self, id: &str) -> bool {
        self.synopsis == id
            || self.long.as_deref() == Some(id)
            || self.short.as_deref() == Some(id)
    }
}

fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('-') {
        trimmed.to_string()
    } else {
        format!("--{trimmed}")
    }
}

/// `-x, ...` (or a lone `-x`) at the very start.
fn short_form(synopsis: &str) -> Option<&str> {
    let rest = synopsis.strip_prefix('-')?;
    let c = rest.chars().next()?;
    if !c.is_ascii_alphabetic() {
        return None;
    }
    let after = &rest[c.len_utf8()..];
    if after.starts_with(", ") || after.is_empty() || after.starts_with(' ') {
        Some(&rest[..c.len_utf8()])
    } else {
        None
    }
}

/// First `--name` run of ASCII alphanumerics and hyphens.
fn long_form(synopsis: &str) -> Option<&str> {
    let start = synopsis.find("--")? + 2;
    let rest = &synopsis[start..];
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
        .unwrap_or(rest.len());
    if end == 0 { None } else { Some(&rest[..end]) }
}

/// Text between the first `open` and the last `close`, at least one char long.
fn bracketed(s: &str, open: char, close: char) -> Option<&str> {
    let start = s.find(open)?;
    let end = s.rfind(close)?;
    if end > start + open.len_utf8() {
        Some(&s[start + open.len_utf8()..end])
    } else {
        None
    }
}

fn is_variadic(synopsis: &str) -> bool {
    bracketed(synopsis, '[', ']').is_some() || synopsis.contains(VARIADIC_MARK)
}

fn strip_variadic(name: &str) -> String {
    name.replacen(VARIADIC_MARK, "", 1)
}
