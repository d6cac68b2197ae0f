// ==========================================
// 电气服务后台 - 领域模型层
// ==========================================
// 职责: 定义领域值对象与类型
// 红线: 不含计算逻辑, 不含 I/O
// ==========================================

pub mod load;
pub mod service;
pub mod types;

// 重导出核心类型
pub use load::{CalculationRequest, CalculationResult, Device};
pub use service::{
    ContactRequest, ContactResponse, PriceQuote, QuoteRequest, QuoteResponse, ServiceOffering,
    Testimonial,
};
pub use types::{
    CircuitType, DistrictZone, EngineMode, SafetyStatus, ServiceCategory, UrgencyLevel,
};
