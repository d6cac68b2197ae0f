// ==========================================
// 电气服务后台 - 配置管理器
// ==========================================
// 职责: 配置加载、校验、覆写管理
// 层级: 默认值 → JSON 配置文件 → 环境变量
// 红线: 非法配置值直接报错, 不静默退回默认值
// ==========================================

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::pricing_profile::PricingProfile;
use crate::domain::types::EngineMode;
use crate::i18n::is_supported_locale;

/// 环境变量前缀 (ELEKTRIK_<KEY>)
pub const ENV_PREFIX: &str = "ELEKTRIK_";

/// 配置目录名 (<config_dir>/elektrik-backend/config.json)
pub const CONFIG_DIR_NAME: &str = "elektrik-backend";

/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "config.json";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

// ==========================================
// ConfigError - 配置错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("invalid config value: {key}={value} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(key: &str, value: impl ToString, reason: &str) -> Self {
        ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

// ==========================================
// AppConfig - 应用配置
// ==========================================
// 配置文件中缺省的字段取默认值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 电价 (每 kWh)
    pub electricity_price_per_kwh: f64,

    /// 计算引擎模式
    pub engine_mode: EngineMode,

    /// 消息语言 (en / tr)
    pub locale: String,

    /// 人工单价 (每小时)
    pub base_labor_rate: f64,

    pub urgent_multiplier: f64,

    pub emergency_multiplier: f64,

    pub currency: String,

    pub quote_validity_days: u32,

    /// 日志级别 (RUST_LOG 优先)
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            electricity_price_per_kwh: 2.5,
            engine_mode: EngineMode::Auto,
            locale: "en".to_string(),
            base_labor_rate: 500.0,
            urgent_multiplier: 1.5,
            emergency_multiplier: 2.0,
            currency: "TRY".to_string(),
            quote_validity_days: 7,
            log_level: "info".to_string(),
        }
    }
}

fn parse_f64(key: &str, raw: &str) -> Result<f64, ConfigError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::invalid(key, raw, "expected a number"))
}

impl AppConfig {
    /// 按配置键设置值（字符串形式，供环境变量层使用）
    ///
    /// # 返回
    /// - Ok(true): 已设置
    /// - Ok(false): 未知配置键
    /// - Err: 值无法解析
    pub fn set_value(&mut self, key: &str, raw: &str) -> Result<bool, ConfigError> {
        match key {
            config_keys::ELECTRICITY_PRICE_PER_KWH => {
                self.electricity_price_per_kwh = parse_f64(key, raw)?;
            }
            config_keys::ENGINE_MODE => {
                self.engine_mode = raw
                    .parse::<EngineMode>()
                    .map_err(|e| ConfigError::invalid(key, raw, &e))?;
            }
            config_keys::LOCALE => self.locale = raw.trim().to_lowercase(),
            config_keys::BASE_LABOR_RATE => self.base_labor_rate = parse_f64(key, raw)?,
            config_keys::URGENT_MULTIPLIER => self.urgent_multiplier = parse_f64(key, raw)?,
            config_keys::EMERGENCY_MULTIPLIER => self.emergency_multiplier = parse_f64(key, raw)?,
            config_keys::CURRENCY => self.currency = raw.trim().to_uppercase(),
            config_keys::QUOTE_VALIDITY_DAYS => {
                self.quote_validity_days = raw
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| ConfigError::invalid(key, raw, "expected a whole number of days"))?;
            }
            config_keys::LOG_LEVEL => self.log_level = raw.trim().to_lowercase(),
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// 校验配置值
    pub fn validate(&self) -> Result<(), ConfigError> {
        use config_keys::*;

        let rate = self.electricity_price_per_kwh;
        if !rate.is_finite() || rate < 0.0 {
            return Err(ConfigError::invalid(
                ELECTRICITY_PRICE_PER_KWH,
                rate,
                "must be a finite number >= 0",
            ));
        }

        if !self.base_labor_rate.is_finite() || self.base_labor_rate < 0.0 {
            return Err(ConfigError::invalid(
                BASE_LABOR_RATE,
                self.base_labor_rate,
                "must be a finite number >= 0",
            ));
        }

        for (key, value) in [
            (URGENT_MULTIPLIER, self.urgent_multiplier),
            (EMERGENCY_MULTIPLIER, self.emergency_multiplier),
        ] {
            if !value.is_finite() || value < 1.0 {
                return Err(ConfigError::invalid(key, value, "must be >= 1.0"));
            }
        }

        if !is_supported_locale(&self.locale) {
            return Err(ConfigError::invalid(LOCALE, &self.locale, "supported: en, tr"));
        }

        if self.currency.trim().is_empty() {
            return Err(ConfigError::invalid(CURRENCY, &self.currency, "must not be empty"));
        }

        if self.quote_validity_days == 0 {
            return Err(ConfigError::invalid(
                QUOTE_VALIDITY_DAYS,
                self.quote_validity_days,
                "must be at least 1 day",
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::invalid(
                LOG_LEVEL,
                &self.log_level,
                "supported: trace, debug, info, warn, error",
            ));
        }

        Ok(())
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: AppConfig,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 加载配置（默认配置文件 + 进程环境变量）
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(None, |key| std::env::var(key).ok())
    }

    /// 加载配置
    ///
    /// # 参数
    /// - path: 显式配置文件路径；None 时使用默认路径（存在才读取）
    /// - env: 环境变量读取函数（测试中可注入）
    pub fn load_with<F>(path: Option<&Path>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let source = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::default_config_path().filter(|p| p.is_file()),
        };

        let mut config = match &source {
            Some(p) => Self::read_file(p)?,
            None => AppConfig::default(),
        };

        let overrides = Self::apply_env(&mut config, env)?;
        config.validate()?;

        tracing::debug!(
            source = ?source,
            env_overrides = overrides,
            engine_mode = %config.engine_mode,
            locale = %config.locale,
            "config loaded"
        );

        Ok(Self { config, source })
    }

    /// 从已有配置创建（会校验）
    pub fn from_config(config: AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            source: None,
        })
    }

    /// 默认配置文件路径: <config_dir>/elektrik-backend/config.json
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    fn read_file(path: &Path) -> Result<AppConfig, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str::<AppConfig>(&raw)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))
    }

    /// 应用环境变量覆写，返回覆写项数量
    fn apply_env<F>(config: &mut AppConfig, env: F) -> Result<usize, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut count = 0;
        for key in config_keys::ALL {
            let var = format!("{}{}", ENV_PREFIX, key.to_uppercase());
            if let Some(raw) = env(&var) {
                if config.set_value(key, &raw)? {
                    count += 1;
                }
            }
        }
        Ok(count)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// 实际读取的配置文件（未读取文件时为 None）
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// 报价参数
    pub fn pricing_profile(&self) -> PricingProfile {
        PricingProfile::from(&self.config)
    }

    /// 获取配置快照（JSON）
    pub fn get_config_snapshot(&self) -> Result<String, ConfigError> {
        serde_json::to_string(&self.config).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 负载计算
    pub const ELECTRICITY_PRICE_PER_KWH: &str = "electricity_price_per_kwh";
    pub const ENGINE_MODE: &str = "engine_mode";
    pub const LOCALE: &str = "locale";

    // 报价
    pub const BASE_LABOR_RATE: &str = "base_labor_rate";
    pub const URGENT_MULTIPLIER: &str = "urgent_multiplier";
    pub const EMERGENCY_MULTIPLIER: &str = "emergency_multiplier";
    pub const CURRENCY: &str = "currency";
    pub const QUOTE_VALIDITY_DAYS: &str = "quote_validity_days";

    // 日志
    pub const LOG_LEVEL: &str = "log_level";

    pub const ALL: &[&str] = &[
        ELECTRICITY_PRICE_PER_KWH,
        ENGINE_MODE,
        LOCALE,
        BASE_LABOR_RATE,
        URGENT_MULTIPLIER,
        EMERGENCY_MULTIPLIER,
        CURRENCY,
        QUOTE_VALIDITY_DAYS,
        LOG_LEVEL,
    ];
}
