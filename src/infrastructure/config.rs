//! 配置文件加载
//!
//! 配置为 TOML 格式，文件不存在时使用默认值；
//! `DATABASE_URL` 和 `PORT` 环境变量优先于文件中的值。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config/catfood.toml";
/// 指定配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "CATFOOD_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    FileRead(String),
    #[error("failed to parse config: {0}")]
    Parse(String),
    #[error("invalid config value: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub logging: LoggingConfig,
    pub database: DatabaseConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 请求超时时间（秒），0 表示不限制
    pub timeout_seconds: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
    /// 设置后额外按日期写入文件
    pub log_dir: Option<PathBuf>,
    pub file_prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            timeout_seconds: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
            file_prefix: "catfood".to_string(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 10,
        }
    }
}

impl HttpConfig {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout_seconds {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

impl AppConfig {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 按 `CATFOOD_CONFIG` 或默认路径加载，文件缺失时使用默认值，然后应用环境变量覆盖
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        let mut config = if path.exists() {
            Self::load_from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// 应用环境变量覆盖，`lookup` 便于测试时注入
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL").filter(|url| !url.is_empty()) {
            self.database.url = Some(url);
        }

        if let Some(port) = lookup("PORT") {
            self.http.port = port
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("PORT={}", port)))?;
        }

        self.validate()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.database.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "database.max_connections must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults_when_sections_missing() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.http.socket_addr(), "0.0.0.0:8080");
        assert_eq!(config.http.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.logging.level, "info");
        assert!(config.database.url.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[http]
bind_address = "127.0.0.1"
port = 3001
timeout_seconds = 0

[logging]
level = "debug"
log_dir = "logs"

[database]
url = "postgres://localhost/catfood"
max_connections = 4
"#
        )
        .unwrap();

        let config = AppConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.http.socket_addr(), "127.0.0.1:3001");
        assert_eq!(config.http.timeout(), None);
        assert_eq!(config.logging.log_dir, Some(PathBuf::from("logs")));
        assert_eq!(config.logging.file_prefix, "catfood");
        assert_eq!(
            config.database.url.as_deref(),
            Some("postgres://localhost/catfood")
        );
        assert_eq!(config.database.max_connections, 4);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = AppConfig::load_from_file("/nonexistent/catfood.toml").unwrap_err();
        assert!(matches!(err, ConfigError::FileRead(_)));
    }

    #[test]
    fn test_parse_error() {
        let err = AppConfig::from_toml("[http]\nport = \"eighty\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_zero_pool_size_rejected() {
        let err = AppConfig::from_toml("[database]\nmax_connections = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("DATABASE_URL", "postgres://db/catfood"),
            ("PORT", "9090"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.http.port, 9090);
        assert_eq!(config.database.url.as_deref(), Some("postgres://db/catfood"));
    }

    #[test]
    fn test_invalid_port_override() {
        let mut config = AppConfig::default();
        let err = config
            .apply_overrides(|key| (key == "PORT").then(|| "http".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
