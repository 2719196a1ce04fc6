//! Environment variable lookup for option defaults.

use std::collections::HashMap;

/// Where `OptionDef::env` values come from.
pub trait EnvSource {
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EnvSource for Vec<(String, String)> {
    fn var(&self, name: &str) -> Option<String> {
        self.iter()
            .rev()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_last_wins() {
        let env = vec![
            ("DB".to_string(), "one".to_string()),
            ("DB".to_string(), "two".to_string()),
        ];
        assert_eq!(env.var("DB").as_deref(), Some("two"));
        assert_eq!(env.var("MISSING"), None);
    }

    #[test]
    fn map_lookup() {
        let env: HashMap<String, String> = [("HOME".to_string(), "/root".to_string())].into();
        assert_eq!(env.var("HOME").as_deref(), Some("/root"));
    }
}
