use crate::error::{DashError, Result};
use serde::{Deserialize, Serialize};
use statement_dash_common::{DEFAULT_TIMEOUT_SECS, FILE_FIELD};
use std::path::PathBuf;
use std::time::Duration;

/// 環境変数で保存済みエンドポイントを上書きする
pub const ENDPOINT_ENV: &str = "STATEMENT_DASH_ENDPOINT";

pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/analyze";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub timeout_seconds: u64,
    pub field_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            field_name: FILE_FIELD.into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
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

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| DashError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("statement-dash").join("config.json"))
    }

    /// 接続先（環境変数を優先）
    pub fn endpoint(&self) -> String {
        match std::env::var(ENDPOINT_ENV) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => self.endpoint.clone(),
        }
    }

    /// コマンドラインの指定を反映する
    pub fn with_overrides(mut self, endpoint: Option<String>, timeout: Option<u64>) -> Self {
        self.endpoint = endpoint.unwrap_or_else(|| self.endpoint());
        if let Some(secs) = timeout {
            self.timeout_seconds = secs;
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(DashError::Config(format!(
                "エンドポイントはhttp(s)のURLで指定してください: {}",
                endpoint
            )));
        }
        self.endpoint = endpoint;
        self.save()
    }

    pub fn set_timeout(&mut self, secs: u64) -> Result<()> {
        if secs == 0 {
            return Err(DashError::Config("タイムアウトは1秒以上にしてください".into()));
        }
        self.timeout_seconds = secs;
        self.save()
    }
}
