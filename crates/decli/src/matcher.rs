//! Picking the command a token list addresses.

use crate::command::Command;

/// Outcome of command selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Matched(usize),
    NotFound,
}

/// Score of one command against the positional tokens.
///
/// Positional score counts positions where the token equals the name token
/// at the same position. Alias score counts aliases found anywhere in the
/// input; it replaces the positional score when it is at least as high.
pub fn score(command: &Command, positional: &[String]) -> usize {
    let by_position = command
        .path()
        .zip(positional)
        .filter(|(part, token)| *part == token.as_str())
        .count();
    let by_alias = command
        .aliases()
        .iter()
        .filter(|alias| positional.contains(alias))
        .count();
    if !command.aliases().is_empty() && by_alias >= by_position {
        by_alias
    } else {
        by_position
    }
}

/// First command with the highest score.
///
/// When more than one command exists and every score equals the first one,
/// nothing distinguishes them and the input is treated as not found.
pub fn select(commands: &[Command], positional: &[String]) -> Selection {
    let scores: Vec<usize> = commands.iter().map(|c| score(c, positional)).collect();
    let Some(&first) = scores.first() else {
        return Selection::NotFound;
    };
    if commands.len() > 1 && scores.iter().all(|s| *s == first) {
        tracing::debug!(?scores, "no command stands out");
        return Selection::NotFound;
    }

    let mut best = 0;
    for (i, s) in scores.iter().enumerate() {
        if *s > scores[best] {
            best = i;
        }
    }
    tracing::debug!(command = commands[best].name(), score = scores[best], "matched");
    Selection::Matched(best)
}

/// Positional tokens left for arguments once the command's name tokens and
/// aliases are removed.
///
/// Any token equal to a name token is dropped, wherever it appears, so an
/// argument value that happens to spell part of the command name is lost.
pub fn residue(command: &Command, positional: &[String]) -> Vec<String> {
    positional
        .iter()
        .filter(|token| {
            !command.path().any(|part| part == token.as_str()) && !command.aliases().contains(token)
        })
        .cloned()
        .collect()
}
