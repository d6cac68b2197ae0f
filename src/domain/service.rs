// ==========================================
// 电气服务后台 - 服务目录与报价领域对象
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{DistrictZone, ServiceCategory, UrgencyLevel};

/// 服务目录条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: ServiceCategory,
    /// 基础价格
    pub base_price: f64,
    /// 预计工期 (展示用文本)
    pub estimated_duration: String,
    pub icon: String,
    #[serde(default)]
    pub features: Vec<String>,
}

/// 报价请求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    #[serde(alias = "serviceId")]
    pub service_id: String,
    /// 伊斯坦布尔行政区
    pub district: String,
    #[serde(default)]
    pub urgency: UrgencyLevel,
}

/// 报价明细
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub service_id: String,
    pub base_price: f64,
    pub labor_cost: f64,
    pub materials_cost: f64,
    pub urgency_multiplier: f64,
    pub distance_multiplier: f64,
    pub district_zone: DistrictZone,
    pub total_price: f64,
    pub currency: String,
    pub valid_until: NaiveDate,
}

/// 报价响应 (报价单号 + 明细)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub quote_code: String,
    #[serde(flatten)]
    pub quote: PriceQuote,
}

/// 联系表单
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

/// 联系表单回执
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

/// 客户评价
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    #[serde(alias = "customerName")]
    pub customer_name: String,
    #[serde(alias = "customerLocation")]
    pub customer_location: String,
    /// 评分 1..=5
    pub rating: u8,
    pub comment: String,
    #[serde(alias = "serviceType")]
    pub service_type: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
