//! 配置管理
//!
//! 默认值 < 配置文件 < PORTAL_ 前缀环境变量，三层合并。

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// 门户完整配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortalConfig {
    /// 应用配置
    #[serde(default)]
    pub app: AppConfig,
    /// 模拟延迟配置
    #[serde(default)]
    pub latency: LatencyConfig,
    /// 状态持久化配置
    #[serde(default)]
    pub storage: StorageConfig,
    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 应用名称
    pub name: String,
    /// 管理员登录邮箱
    pub admin_email: String,
    /// 管理员登录密码
    pub admin_password: String,
}

/// 模拟延迟配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyConfig {
    /// 是否启用模拟延迟
    pub enabled: bool,
    /// 每次模拟调用的延迟毫秒数
    pub delay_ms: u64,
}

/// 状态持久化配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// 状态快照文件路径；为空时只在内存中运行
    pub state_file: Option<String>,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别（EnvFilter语法）
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "Hospital Portal".to_string(),
            admin_email: "admin@admin.com".to_string(),
            admin_password: "admin123".to_string(),
        }
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            delay_ms: 500,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl PortalConfig {
    /// 加载配置；config_path为None或文件不存在时使用默认值
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&PortalConfig::default())?);

        if let Some(path) = config_path {
            if Path::new(path).exists() {
                builder = builder.add_source(File::with_name(path));
                info!("Loading configuration from {}", path);
            } else {
                info!("Config file {} not found, using defaults", path);
            }
        }

        let settings = builder
            .add_source(Environment::with_prefix("PORTAL").separator("__"))
            .build()?;

        settings
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// 保存当前配置到toml文件
    pub fn save(&self, path: &str) -> Result<()> {
        let config_str = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        std::fs::write(path, config_str).context("Failed to write configuration file")?;
        info!("Configuration saved to {}", path);
        Ok(())
    }

    /// 延迟毫秒数；未启用时为零
    pub fn effective_delay_ms(&self) -> u64 {
        if self.latency.enabled {
            self.latency.delay_ms
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PortalConfig::default();
        assert_eq!(config.app.admin_email, "admin@admin.com");
        assert!(config.latency.enabled);
        assert_eq!(config.effective_delay_ms(), 500);
        assert!(config.storage.state_file.is_none());
    }

    #[test]
    fn test_disabled_latency_is_zero_delay() {
        let mut config = PortalConfig::default();
        config.latency.enabled = false;
        assert_eq!(config.effective_delay_ms(), 0);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = PortalConfig::load(Some("/nonexistent/portal.toml")).unwrap();
        assert_eq!(config.app.name, "Hospital Portal");
    }

    #[test]
    fn test_save_and_reload() {
        let path = std::env::temp_dir().join(format!("portal-config-{}.toml", std::process::id()));
        let path_str = path.to_str().unwrap();

        let mut config = PortalConfig::default();
        config.latency.delay_ms = 250;
        config.save(path_str).unwrap();

        let reloaded = PortalConfig::load(Some(path_str)).unwrap();
        assert_eq!(reloaded.latency.delay_ms, 250);

        let _ = std::fs::remove_file(&path);
    }
}
