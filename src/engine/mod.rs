// ==========================================
// 电气服务后台 - 引擎层
// ==========================================
// 职责: 负载计算 / 安全评估 / 选型表 / 报价
// 红线: 引擎为纯计算, 不做 I/O, 不读全局配置
// ==========================================

pub mod backend;
pub mod load_calc;
pub mod pricing;
pub mod safety;
pub mod tables;

// 重导出核心引擎
pub use backend::{accelerated_available, select_engine, EngineInfo, LoadEngine, ReferenceEngine};
#[cfg(feature = "parallel")]
pub use backend::ParallelEngine;
pub use load_calc::{compute, compute_localized, round2};
pub use pricing::{
    district_zone, find_service, service_catalog, services_by_category, testimonials,
    PricingEngine,
};
pub use safety::{assess, SafetyAssessment};
pub use tables::{recommend_breaker, recommend_cable_section};
