use crate::config::{read_config, settings_from_map, write_config, KNOWN_KEYS};
use clap::Subcommand;
use std::path::Path;

// ── CLI Schema ──

#[derive(Subcommand)]
pub enum ConfigCmd {
    /// Set a config value
    Set {
        /// Config key (max_commits, message, remote, branch, font_path, push, purge)
        key: String,
        /// Config value (true/false/number/string)
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// Remove a config value, restoring its default
    Unset {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
}

// ── Dispatch ──

pub fn run(cmd: ConfigCmd, config_path: &Path) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Set { key, value } => set(config_path, &key, &value),
        ConfigCmd::Get { key } => get(config_path, &key),
        ConfigCmd::Unset { key } => unset(config_path, &key),
        ConfigCmd::List => list(config_path),
    }
}

// ── Command Implementations ──

/// Parse a string value into the JSON type the key expects.
fn parse_value(key: &str, s: &str) -> anyhow::Result<serde_json::Value> {
    match key {
        "push" | "purge" => match s {
            "true" => Ok(serde_json::Value::Bool(true)),
            "false" => Ok(serde_json::Value::Bool(false)),
            _ => anyhow::bail!("{key} expects true or false, got '{s}'"),
        },
        "max_commits" => {
            let n: u32 = s
                .parse()
                .map_err(|_| anyhow::anyhow!("{key} expects a whole number, got '{s}'"))?;
            Ok(serde_json::Value::Number(n.into()))
        }
        _ => Ok(serde_json::Value::String(s.to_string())),
    }
}

fn check_key(key: &str) -> anyhow::Result<()> {
    if !KNOWN_KEYS.contains(&key) {
        anyhow::bail!("unknown config key '{key}' (known: {})", KNOWN_KEYS.join(", "));
    }
    Ok(())
}

/// `heatpaint config set <key> <value>`
pub fn set(config_path: &Path, key: &str, value: &str) -> anyhow::Result<()> {
    check_key(key)?;
    let mut config = read_config(config_path)?;
    config.insert(key.to_string(), parse_value(key, value)?);
    // Reject values the typed settings would not accept.
    settings_from_map(config.clone())?;
    write_config(config_path, &config)?;
    println!("{key} = {value}");
    Ok(())
}

/// `heatpaint config get <key>`
pub fn get(config_path: &Path, key: &str) -> anyhow::Result<()> {
    check_key(key)?;
    let config = read_config(config_path)?;
    match config.get(key) {
        Some(val) => println!("{val}"),
        None => println!("(not set)"),
    }
    Ok(())
}

/// `heatpaint config unset <key>`
pub fn unset(config_path: &Path, key: &str) -> anyhow::Result<()> {
    check_key(key)?;
    let mut config = read_config(config_path)?;
    if config.remove(key).is_some() {
        write_config(config_path, &config)?;
        println!("{key} unset");
    } else {
        println!("{key} was not set");
    }
    Ok(())
}

/// `heatpaint config list`
pub fn list(config_path: &Path) -> anyhow::Result<()> {
    let config = read_config(config_path)?;
    println!("# {}", config_path.display());
    if config.is_empty() {
        println!("(no config set)");
    } else {
        for (k, v) in &config {
            println!("{k} = {v}");
        }
    }
    Ok(())
}
