use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Settings stored on disk: the OpenWeatherMap credential and an optional
/// default postal code used when the caller supplies none.
///
/// Example TOML:
/// ```toml
/// default_postal_code = "1000001"
/// api_key = "your_api_key_here"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub default_postal_code: Option<String>,
    pub api_key: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("設定ファイルの読み取りに失敗しました: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("設定ファイルの解析に失敗しました: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("設定ディレクトリの作成に失敗しました: {}", parent.display())
            })?;
        }

        let toml = toml::to_string_pretty(self).context("設定のシリアライズに失敗しました")?;

        fs::write(&path, toml)
            .with_context(|| format!("設定ファイルの書き込みに失敗しました: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "zipweather", "zipweather")
            .ok_or_else(|| anyhow!("プラットフォームの設定ディレクトリを特定できませんでした"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// The stored credential, if any. Whitespace-only values count as absent.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// The stored default postal code, if any.
    pub fn default_postal_code(&self) -> Option<&str> {
        self.default_postal_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }
}
