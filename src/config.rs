use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::infra::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};

const CONFIG_DIR_NAME: &str = "jigit";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variables checked for the Gemini API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];
pub const MODEL_VAR: &str = "JIGIT_MODEL";
pub const BASE_URL_VAR: &str = "JIGIT_GEMINI_BASE_URL";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub workspace_root: PathBuf,
}

impl AppConfig {
    pub fn load(workspace_hint: &Path) -> AppResult<Self> {
        let stored = StoredConfig::load()?;
        Ok(Self::resolve(stored, workspace_hint, |name| {
            std::env::var(name).ok()
        }))
    }

    /// Environment values win over the stored file, which wins over defaults.
    pub fn resolve(
        stored: StoredConfig,
        workspace_hint: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let env_value = |name: &str| env(name).filter(|value| !value.trim().is_empty());

        let gemini_api_key = API_KEY_VARS
            .iter()
            .find_map(|name| env_value(*name))
            .or(stored.gemini_api_key);
        let gemini_model = env_value(MODEL_VAR)
            .or(stored.gemini_model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let gemini_base_url = env_value(BASE_URL_VAR)
            .or(stored.gemini_base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            gemini_api_key,
            gemini_model,
            gemini_base_url,
            workspace_root: workspace_hint.to_path_buf(),
        }
    }
}

/// Values persisted by `jigit config init`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: Option<String>,
    pub gemini_base_url: Option<String>,
}

impl StoredConfig {
    pub fn load() -> AppResult<Self> {
        Self::load_from(&config_file_path()?)
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&config_file_path()?)
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).map_err(|err| {
                AppError::Configuration(format!("invalid config file {}: {err}", path.display()))
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(AppError::Io(err)),
        }
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = toml::to_string_pretty(self)
            .map_err(|err| AppError::Configuration(format!("failed to write config: {err}")))?;
        fs::write(path, data)?;
        Ok(())
    }
}

pub fn config_directory() -> AppResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .ok_or_else(|| {
            AppError::Configuration("unable to determine the user config directory".to_string())
        })
}

pub fn config_file_path() -> AppResult<PathBuf> {
    Ok(config_directory()?.join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn defaults_apply_without_file_or_env() {
        let config = AppConfig::resolve(StoredConfig::default(), Path::new("."), env_from(&[]));
        assert_eq!(config.gemini_api_key, None);
        assert_eq!(config.gemini_model, DEFAULT_MODEL);
        assert_eq!(config.gemini_base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn environment_overrides_stored_values() {
        let stored = StoredConfig {
            gemini_api_key: Some("from-file".to_string()),
            gemini_model: Some("gemini-file-model".to_string()),
            gemini_base_url: None,
        };
        let config = AppConfig::resolve(
            stored,
            Path::new("."),
            env_from(&[
                ("API_KEY", "legacy-key"),
                ("GEMINI_API_KEY", "gemini-key"),
                (MODEL_VAR, "gemini-env-model"),
                (BASE_URL_VAR, "http://localhost:8080"),
            ]),
        );
        assert_eq!(config.gemini_api_key.as_deref(), Some("gemini-key"));
        assert_eq!(config.gemini_model, "gemini-env-model");
        assert_eq!(config.gemini_base_url, "http://localhost:8080");
    }

    #[test]
    fn blank_environment_values_fall_through() {
        let stored = StoredConfig {
            gemini_api_key: Some("from-file".to_string()),
            ..StoredConfig::default()
        };
        let config = AppConfig::resolve(
            stored,
            Path::new("."),
            env_from(&[("GEMINI_API_KEY", " "), (MODEL_VAR, "")]),
        );
        assert_eq!(config.gemini_api_key.as_deref(), Some("from-file"));
        assert_eq!(config.gemini_model, DEFAULT_MODEL);
    }

    #[test]
    fn legacy_api_key_variable_is_honoured() {
        let config = AppConfig::resolve(
            StoredConfig::default(),
            Path::new("."),
            env_from(&[("API_KEY", "legacy-key")]),
        );
        assert_eq!(config.gemini_api_key.as_deref(), Some("legacy-key"));
    }

    #[test]
    fn stored_config_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        assert_eq!(StoredConfig::load_from(&path).unwrap(), StoredConfig::default());

        let stored = StoredConfig {
            gemini_api_key: Some("abc123secret".to_string()),
            gemini_model: Some("gemini-2.5-flash".to_string()),
            gemini_base_url: None,
        };
        stored.save_to(&path).unwrap();
        assert_eq!(StoredConfig::load_from(&path).unwrap(), stored);
    }

    #[test]
    fn invalid_config_file_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "gemini_model = [").unwrap();
        let err = StoredConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }
}
