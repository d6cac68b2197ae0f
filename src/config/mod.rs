// ==========================================
// 电气服务后台 - 配置层
// ==========================================
// 职责: 系统配置管理, 支持多级覆写
// 层级: 默认值 → JSON 配置文件 → 环境变量 (ELEKTRIK_*)
// ==========================================

pub mod config_manager;
pub mod pricing_profile;

// 重导出核心配置管理器
pub use config_manager::{config_keys, AppConfig, ConfigError, ConfigManager, ENV_PREFIX};
pub use pricing_profile::PricingProfile;
