//! "Did you mean" candidates for mistyped commands and options.

use crate::command::Command;
use crate::option::OptionDef;

/// Maximum edit distance for a suggestion.
const MAX_DISTANCE: usize = 2;

/// Closest candidate within [`MAX_DISTANCE`], first one wins ties.
pub fn closest<'a, I>(input: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&str, usize)> = None;
    for candidate in candidates {
        let distance = strsim::levenshtein(input, candidate);
        if distance == 0 || distance > MAX_DISTANCE {
            continue;
        }
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((candidate, distance));
        }
    }
    best.map(|(c, _)| c)
}

/// Suggest a command name (or alias) for the leading positional tokens.
pub fn command(positional: &[String], commands: &[Command]) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for cmd in commands {
        let width = cmd.path().count().min(positional.len());
        let typed = positional[..width].join(" ");
        let names = std::iter::once(cmd.name()).chain(cmd.aliases().iter().map(String::as_str));
        for name in names {
            let distance = strsim::levenshtein(&typed, name);
            if distance == 0 || distance > MAX_DISTANCE {
                continue;
            }
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((name, distance));
            }
        }
    }
    best.map(|(name, _)| name.to_string())
}

/// Suggest a declared option key for an unknown one.
pub fn option<'a>(key: &str, options: &[&'a OptionDef]) -> Option<&'a str> {
    closest(
        key,
        options
            .iter()
            .copied()
            .flat_map(|o| o.long().into_iter().chain(o.short())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::{Program, ProgramConfig};

    #[test]
    fn closest_within_two_edits() {
        assert_eq!(closest("ordr", ["order", "pay"]), Some("order"));
        assert_eq!(closest("xyzzy", ["order", "pay"]), None);
        assert_eq!(closest("order", ["order"]), None);
    }

    #[test]
    fn command_suggestion_uses_leading_tokens() {
        let mut p = Program::new("pizza", "", ProgramConfig::default());
        p.command("order", "");
        p.command("pay", "").alias(["checkout"]);
        let typed = vec!["ordr".to_string(), "margherita".to_string()];
        assert_eq!(command(&typed, p.commands()).as_deref(), Some("order"));
        let typed = vec!["chekout".to_string()];
        assert_eq!(command(&typed, p.commands()).as_deref(), Some("checkout"));
    }

    #[test]
    fn option_suggestion() {
        let size = OptionDef::new("-s, --size <size>", "");
        let free = OptionDef::new("-f, --free", "");
        assert_eq!(option("sise", &[&size, &free]), Some("size"));
        assert_eq!(option("bogus", &[&size, &free]), None);
    }
}
