use anyhow::{Context, Result, bail};
use decli::ProgramConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "decli.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CliConfig {
    #[serde(flatten)]
    pub program: ProgramConfig,

    /// Usage line shown in top-level help instead of the generated one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub config: CliConfig,
}

/// Load `path`, or `decli.json` from the current directory when no path is
/// given. A missing default file is not an error.
pub fn load_config(config_path: Option<&Path>) -> Result<Option<LoadedConfig>> {
    let cwd = std::env::current_dir().context("failed to get current directory")?;

    let (path, explicit) = match config_path {
        Some(p) => (resolve_against(&cwd, p), true),
        None => (cwd.join(DEFAULT_CONFIG_NAME), false),
    };

    if !path.exists() {
        if explicit {
            bail!("config not found: {}", path.display());
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config: CliConfig = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse config JSON: {}", path.display()))?;

    Ok(Some(LoadedConfig { path, config }))
}

pub fn write_default_config(dir: &Path, overwrite: bool) -> Result<PathBuf> {
    let dest = dir.join(DEFAULT_CONFIG_NAME);
    if dest.exists() && !overwrite {
        bail!("{} already exists", dest.display());
    }

    let config = CliConfig {
        program: ProgramConfig {
            version: Some("1.0.0".to_string()),
            suggest_after_error: true,
        },
        usage: None,
    };

    let mut out = serde_json::to_string_pretty(&config).context("failed to serialize config")?;
    out.push('\n');

    let tmp = dest.with_extension("tmp");
    fs::write(&tmp, out.as_bytes())
        .with_context(|| format!("failed to write {}", tmp.display()))?;
    fs::rename(&tmp, &dest)
        .with_context(|| format!("failed to move {} into place", dest.display()))?;
    Ok(dest)
}

fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flattened_program_config() {
        let config: CliConfig = serde_json::from_str(
            r#"{ "version": "2.0.0", "suggestAfterError": true, "usage": "pizza <cmd>" }"#,
        )
        .unwrap();
        assert_eq!(config.program.version.as_deref(), Some("2.0.0"));
        assert!(config.program.suggest_after_error);
        assert_eq!(config.usage.as_deref(), Some("pizza <cmd>"));
    }

    #[test]
    fn empty_object_is_default() {
        let config: CliConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.program, ProgramConfig::default());
        assert!(config.usage.is_none());
    }

    #[test]
    fn relative_paths_resolve_against_base() {
        let base = Path::new("/work");
        assert_eq!(resolve_against(base, Path::new("a.json")), PathBuf::from("/work/a.json"));
        assert_eq!(resolve_against(base, Path::new("/etc/a.json")), PathBuf::from("/etc/a.json"));
    }
}
