use crate::error::{GolfError, Result};
use crate::types::config::GameSettings;
use crate::types::round::Round;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "golfscore.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".golfscore/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/golfscore/config.toml";

/// Settings layers that apply to every round in `dir`, before any per-round
/// overrides: global config, then `golfscore.toml`, then the local override.
pub fn load_layers(dir: &Path, global_override: Option<&Path>) -> Result<Value> {
    let global = match global_override {
        Some(path) => Some(path.to_path_buf()),
        None => std::env::var_os("HOME")
            .map(PathBuf::from)
            .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE)),
    };
    load_layers_with_global(dir, global.as_deref())
}

pub(crate) fn load_layers_with_global(dir: &Path, global_path: Option<&Path>) -> Result<Value> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &dir.join(DEFAULT_CONFIG_FILE))?;
    merge_file_if_exists(&mut merged, &dir.join(DEFAULT_LOCAL_FILE))?;
    Ok(merged)
}

/// Final settings for one round: the shared layers plus the round's own
/// `[settings]` table, validated.
pub fn settings_for_round(layers: &Value, round: &Round) -> Result<GameSettings> {
    let mut merged = layers.clone();
    if let Some(overrides) = &round.settings {
        merge_toml(&mut merged, overrides.clone());
    }

    let settings: GameSettings = merged
        .try_into()
        .map_err(|e: toml::de::Error| GolfError::ConfigParse(e.to_string()))?;
    settings.validate()?;
    tracing::debug!(round = %round.name, ?settings, "resolved game settings");
    Ok(settings)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    tracing::debug!(path = %path.display(), "merging settings layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| GolfError::ConfigParse(format!("{}: {}", path.display(), e)))
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
