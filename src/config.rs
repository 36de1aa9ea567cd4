//! 配置文件 (config.toml)
//!
//! 文件不存在时使用默认值

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::Deserialize;

use crate::error::{AppError, ConfigError};

const APP_DIR: &str = "leaselens";

/// 默认的示例租约
pub const DEFAULT_SAMPLE_TEXT: &str = "This Rental Agreement is made between the Landlord and the Tenant. \
The monthly rent is due on the 5th of every month. \
The Tenant shall pay a security deposit equal to two months of rent. \
The agreement has a lock-in period of 6 months. \
Rent shall increase by 8% every year. \
Either party may terminate the agreement with one month of notice.";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub document: DocumentConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// 启动时填入文档输入框的文本
    pub sample_text: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            sample_text: DEFAULT_SAMPLE_TEXT.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.level
            .trim()
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::InvalidLogLevel(self.level.clone()))
    }
}

/// 从 TOML 文件加载配置
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let config: AppConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.logging.level_filter()?;
    Ok(config)
}

/// 配置文件路径 (~/.config/leaselens/config.toml)
pub fn default_config_path() -> Result<PathBuf, AppError> {
    let dir = dirs::config_dir().ok_or(AppError::DataDir("config"))?;
    Ok(dir.join(APP_DIR).join("config.toml"))
}

/// 数据目录 (~/.local/share/leaselens/)，不存在则创建
pub fn data_dir() -> Result<PathBuf, AppError> {
    let dir = dirs::data_dir()
        .ok_or(AppError::DataDir("data"))?
        .join(APP_DIR);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}
