use anyhow::Context;
use heatpaint_core::{IntensityMapper, DEFAULT_MAX_COMMITS};
use heatpaint_git::DEFAULT_MESSAGE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "HEATPAINT_CONFIG";

/// Keys accepted by `heatpaint config set`.
pub const KNOWN_KEYS: &[&str] = &[
    "max_commits",
    "message",
    "remote",
    "branch",
    "font_path",
    "push",
    "purge",
];

/// Effective settings: defaults, overlaid with the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub max_commits: u32,
    pub message: String,
    pub remote: String,
    /// Branch to push; the checked-out branch when unset.
    pub branch: Option<String>,
    pub font_path: Option<PathBuf>,
    pub push: bool,
    pub purge: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_commits: DEFAULT_MAX_COMMITS,
            message: DEFAULT_MESSAGE.to_string(),
            remote: "origin".to_string(),
            branch: None,
            font_path: None,
            push: true,
            purge: true,
        }
    }
}

/// `$HEATPAINT_CONFIG`, else `<config dir>/heatpaint/config.json`.
/// Falls back to `~/.heatpaint/config.json` where no config dir is known.
pub fn config_path() -> PathBuf {
    if let Some(p) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(p);
    }
    if let Some(dir) = dirs::config_dir() {
        dir.join("heatpaint").join("config.json")
    } else if let Some(home) = dirs::home_dir() {
        home.join(".heatpaint").join("config.json")
    } else {
        PathBuf::from(".heatpaint-config.json")
    }
}

/// Read the raw config object. Returns an empty map if the file doesn't exist.
pub fn read_config(path: &Path) -> anyhow::Result<serde_json::Map<String, serde_json::Value>> {
    if !path.exists() {
        return Ok(serde_json::Map::new());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let val: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("parsing config {}", path.display()))?;
    match val {
        serde_json::Value::Object(map) => Ok(map),
        _ => anyhow::bail!("config {} is not a JSON object", path.display()),
    }
}

pub fn write_config(
    path: &Path,
    config: &serde_json::Map<String, serde_json::Value>,
) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&config)?;
    write_atomic(path, json.as_bytes())
}

/// Typed settings from a raw config map; unknown keys are dropped with a warning.
pub fn settings_from_map(
    mut map: serde_json::Map<String, serde_json::Value>,
) -> anyhow::Result<Settings> {
    map.retain(|key, _| {
        let known = KNOWN_KEYS.contains(&key.as_str());
        if !known {
            tracing::warn!(key, "ignoring unknown config key");
        }
        known
    });
    let settings: Settings =
        serde_json::from_value(serde_json::Value::Object(map)).context("invalid config value")?;
    IntensityMapper::new(settings.max_commits).context("invalid config value")?;
    Ok(settings)
}

pub fn load(path: &Path) -> anyhow::Result<Settings> {
    let settings = settings_from_map(read_config(path)?)?;
    tracing::debug!(path = %path.display(), ?settings, "settings loaded");
    Ok(settings)
}

/// Atomic write: write to temp file in same dir, then rename.
pub fn write_atomic(path: &Path, data: &[u8]) -> anyhow::Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;
    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(data)?;
    tmp.flush()?;
    tmp.persist(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = load(&tmp.path().join("config.json")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.max_commits, 5);
        assert_eq!(settings.message, "Contribution art");
    }

    #[test]
    fn file_values_override_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(
            &path,
            r#"{"max_commits": 9, "push": false, "branch": "art", "color": "red"}"#,
        )
        .unwrap();
        let settings = load(&path).unwrap();
        assert_eq!(settings.max_commits, 9);
        assert!(!settings.push);
        assert!(settings.purge);
        assert_eq!(settings.branch.as_deref(), Some("art"));
        assert_eq!(settings.remote, "origin");
    }

    #[test]
    fn wrong_type_is_an_error() {
        let mut map = serde_json::Map::new();
        map.insert("max_commits".into(), serde_json::json!("lots"));
        assert!(settings_from_map(map).is_err());
    }

    #[test]
    fn zero_max_commits_is_an_error() {
        let mut map = serde_json::Map::new();
        map.insert("max_commits".into(), serde_json::json!(0));
        assert!(settings_from_map(map).is_err());
    }

    #[test]
    fn non_object_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(&path, "[1, 2]").unwrap();
        assert!(load(&path).is_err());
    }

    #[test]
    fn write_atomic_creates_parent_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("config.json");
        write_atomic(&path, b"{}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }
}
