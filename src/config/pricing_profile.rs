use serde::{Deserialize, Serialize};

use crate::config::config_manager::AppConfig;

/// 报价参数（由 AppConfig 派生，传入 PricingEngine）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingProfile {
    /// 人工单价（每小时）
    pub base_labor_rate: f64,

    /// 加急倍率
    pub urgent_multiplier: f64,

    /// 紧急倍率
    pub emergency_multiplier: f64,

    /// 币种
    pub currency: String,

    /// 报价有效天数
    pub quote_validity_days: u32,
}

impl Default for PricingProfile {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for PricingProfile {
    fn from(config: &AppConfig) -> Self {
        Self {
            base_labor_rate: config.base_labor_rate,
            urgent_multiplier: config.urgent_multiplier,
            emergency_multiplier: config.emergency_multiplier,
            currency: config.currency.clone(),
            quote_validity_days: config.quote_validity_days,
        }
    }
}
