//! 送信先設定
//!
//! エンドポイントは起動時に注入する設定値。環境変数 → 設定ファイル →
//! 既定値の順で解決し、CLIとデスクトップアプリの両方が同じ解決を使う

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 既定のBFHLエンドポイント
pub const DEFAULT_ENDPOINT: &str = "https://task-backend-e3wq.onrender.com/bfhl";

/// エンドポイント上書き用の環境変数
pub const ENDPOINT_ENV: &str = "BFHL_ENDPOINT";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| Error::Config(format!("設定ファイルが不正です: {}", e)))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("bfhl-client").join("config.json"))
    }

    /// 送信先エンドポイントを解決
    ///
    /// 環境変数を優先し、なければ設定値を使う。
    pub fn resolve_endpoint(&self) -> String {
        if let Ok(url) = std::env::var(ENDPOINT_ENV) {
            if !url.trim().is_empty() {
                return url;
            }
        }

        self.endpoint.clone()
    }

    pub fn set_endpoint(&mut self, url: String) -> Result<()> {
        self.endpoint = url;
        self.save()
    }

    pub fn reset_endpoint(&mut self) -> Result<()> {
        self.endpoint = DEFAULT_ENDPOINT.to_string();
        self.save()
    }
}
