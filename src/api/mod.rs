// ==========================================
// 电气服务后台 - API 层
// ==========================================
// 职责: 提供业务 API 接口, 供 CLI / 上层服务调用
// ==========================================

pub mod calculation_api;
pub mod catalog_api;
pub mod error;
pub mod validator;

// 重导出核心类型
pub use calculation_api::CalculationApi;
pub use catalog_api::{generate_quote_code, CatalogApi};
pub use error::{ApiError, ApiResult, ValidationViolation};
pub use validator::{parse_circuit_type, parse_urgency, LoadRequestValidator};
