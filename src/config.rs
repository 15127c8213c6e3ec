use crate::error::{PulseError, Result};
use crate::types::config::PulseConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "repopulse.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/repopulse/config.toml";

/// Loads the merged config: global file first, then the working-directory
/// file on top. Both are optional; absence yields defaults.
pub fn load_config(cwd: &Path) -> Result<PulseConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(cwd, global.as_deref())
}

pub(crate) fn load_config_with_global(
    cwd: &Path,
    global_path: Option<&Path>,
) -> Result<PulseConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &cwd.join(DEFAULT_CONFIG_FILE))?;

    let cfg: PulseConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| PulseError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Token precedence: CLI flag, then REPOPULSE_TOKEN, then GITHUB_TOKEN,
/// then the config file.
pub fn resolve_token(cli_token: Option<String>, config: &PulseConfig) -> Option<String> {
    resolve_token_from(
        cli_token,
        std::env::var("REPOPULSE_TOKEN").ok(),
        std::env::var("GITHUB_TOKEN").ok(),
        config,
    )
}

fn resolve_token_from(
    cli_token: Option<String>,
    env_repopulse: Option<String>,
    env_github: Option<String>,
    config: &PulseConfig,
) -> Option<String> {
    cli_token
        .or(env_repopulse)
        .or(env_github)
        .or_else(|| config.token().map(str::to_string))
        .filter(|token| !token.trim().is_empty())
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| PulseError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::DEFAULT_API_BASE;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_defaults_when_no_files_exist() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert_eq!(cfg.api_base(), DEFAULT_API_BASE);
        assert_eq!(cfg.thresholds().bloat_files, 1000);
    }

    #[test]
    fn local_file_overrides_global() {
        let cwd = TempDir::new().expect("cwd temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[api]
base_url = "https://github.global.example/api/v3"
token = "global-token"

[thresholds]
bloat_files = 500
"#,
        )
        .expect("global config should write");

        fs::write(
            cwd.path().join(DEFAULT_CONFIG_FILE),
            r#"
[api]
base_url = "https://github.local.example/api/v3"

[thresholds]
sparse_files = 3
"#,
        )
        .expect("local config should write");

        let cfg = load_config_with_global(cwd.path(), Some(&global_path))
            .expect("load should succeed");

        assert_eq!(cfg.api_base(), "https://github.local.example/api/v3");
        assert_eq!(cfg.token(), Some("global-token"));
        assert_eq!(cfg.thresholds().bloat_files, 500);
        assert_eq!(cfg.thresholds().sparse_files, 3);
    }

    #[test]
    fn load_config_rejects_invalid_merged_result() {
        let cwd = TempDir::new().expect("cwd temp dir should be created");
        fs::write(
            cwd.path().join(DEFAULT_CONFIG_FILE),
            r#"
[thresholds]
bloat_files = 2
sparse_files = 10
"#,
        )
        .expect("local config should write");

        assert!(load_config_with_global(cwd.path(), None).is_err());
    }

    #[test]
    fn token_precedence_prefers_cli_then_env_then_config() {
        let cfg: PulseConfig = toml::from_str(
            r#"
[api]
token = "from-config"
"#,
        )
        .expect("config should parse");

        assert_eq!(
            resolve_token_from(
                Some("from-cli".into()),
                Some("from-repopulse".into()),
                Some("from-github".into()),
                &cfg
            ),
            Some("from-cli".to_string())
        );
        assert_eq!(
            resolve_token_from(None, Some("from-repopulse".into()), None, &cfg),
            Some("from-repopulse".to_string())
        );
        assert_eq!(
            resolve_token_from(None, None, Some("from-github".into()), &cfg),
            Some("from-github".to_string())
        );
        assert_eq!(
            resolve_token_from(None, None, None, &cfg),
            Some("from-config".to_string())
        );
    }

    #[test]
    fn blank_token_resolves_to_none() {
        let cfg = PulseConfig::default();
        assert_eq!(resolve_token_from(Some("  ".into()), None, None, &cfg), None);
    }
}
