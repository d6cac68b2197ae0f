// ==========================================
// 电气服务后台 - 核心库
// ==========================================
// 功能: 电气负载计算 + 服务目录报价
// 技术栈: Rust + serde + tracing (+ rayon 并行引擎)
// 系统定位: 计算核心 + 边界层 (校验 / 配置 / 日志)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 值对象与类型
pub mod domain;

// 引擎层 - 负载计算 / 安全评估 / 报价
pub mod engine;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// 性能统计
pub mod perf;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    CircuitType, DistrictZone, EngineMode, SafetyStatus, ServiceCategory, UrgencyLevel,
};

// 领域对象
pub use domain::{
    CalculationRequest, CalculationResult, Device, PriceQuote, QuoteRequest, QuoteResponse,
    ServiceOffering,
};

// 引擎
pub use engine::{select_engine, EngineInfo, LoadEngine, PricingEngine, ReferenceEngine};
#[cfg(feature = "parallel")]
pub use engine::ParallelEngine;

// 配置
pub use config::{AppConfig, ConfigError, ConfigManager};

// API
pub use api::{ApiError, ApiResult, CalculationApi, CatalogApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "elektrik-backend";
