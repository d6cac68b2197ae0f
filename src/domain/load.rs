// ==========================================
// 电气服务后台 - 负载计算领域对象
// ==========================================
// 职责: 定义用电设备 / 计算请求 / 计算结果
// 红线: 纯值对象, 不含计算逻辑, 不持久化
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::{CircuitType, SafetyStatus};

/// 默认功率因数
pub const DEFAULT_POWER_FACTOR: f64 = 0.9;

/// 默认系统电压 (V)
pub const DEFAULT_VOLTAGE_LEVEL: f64 = 220.0;

/// 默认安全系数
pub const DEFAULT_SAFETY_FACTOR: f64 = 1.25;

fn default_power_factor() -> f64 {
    DEFAULT_POWER_FACTOR
}

fn default_voltage_level() -> f64 {
    DEFAULT_VOLTAGE_LEVEL
}

fn default_safety_factor() -> f64 {
    DEFAULT_SAFETY_FACTOR
}

// ==========================================
// Device - 用电设备
// ==========================================
// 兼容前端 camelCase 字段 (powerWatts 等)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// 设备名称 (非空)
    pub name: String,

    /// 单台功率 (W, >0)
    #[serde(alias = "powerWatts")]
    pub power_watts: f64,

    /// 数量 (>=1)
    pub quantity: u32,

    /// 日使用小时数 (0..=24)
    #[serde(alias = "usageHoursPerDay")]
    pub usage_hours_per_day: f64,

    /// 功率因数 (0.1..=1.0)
    #[serde(default = "default_power_factor", alias = "powerFactor")]
    pub power_factor: f64,
}

impl Device {
    /// 创建设备 (功率因数取默认值 0.9)
    pub fn new(name: &str, power_watts: f64, quantity: u32, usage_hours_per_day: f64) -> Self {
        Self {
            name: name.to_string(),
            power_watts,
            quantity,
            usage_hours_per_day,
            power_factor: DEFAULT_POWER_FACTOR,
        }
    }

    pub fn with_power_factor(mut self, power_factor: f64) -> Self {
        self.power_factor = power_factor;
        self
    }

    /// 设备总接入功率 (W) = 单台功率 × 数量
    pub fn connected_watts(&self) -> f64 {
        self.power_watts * self.quantity as f64
    }
}

// ==========================================
// CalculationRequest - 负载计算请求
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// 设备列表 (至少 1 台, 由边界层校验)
    pub devices: Vec<Device>,

    /// 线路类型
    #[serde(alias = "circuitType")]
    pub circuit_type: CircuitType,

    /// 系统电压 (V)
    #[serde(default = "default_voltage_level", alias = "voltageLevel")]
    pub voltage_level: f64,

    /// 安全系数 (1.0..=2.0)
    #[serde(default = "default_safety_factor", alias = "safetyFactor")]
    pub safety_factor: f64,
}

impl CalculationRequest {
    /// 创建请求 (电压 220V, 安全系数 1.25)
    pub fn new(devices: Vec<Device>, circuit_type: CircuitType) -> Self {
        Self {
            devices,
            circuit_type,
            voltage_level: DEFAULT_VOLTAGE_LEVEL,
            safety_factor: DEFAULT_SAFETY_FACTOR,
        }
    }

    pub fn with_voltage(mut self, voltage_level: f64) -> Self {
        self.voltage_level = voltage_level;
        self
    }

    pub fn with_safety_factor(mut self, safety_factor: f64) -> Self {
        self.safety_factor = safety_factor;
        self
    }
}

// ==========================================
// CalculationResult - 负载计算结果
// ==========================================
// 数值字段保留两位小数; warnings / recommendations 顺序有意义
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub total_load_kw: f64,
    pub total_current_amps: f64,
    pub recommended_breaker_amps: u32,
    /// 推荐电缆截面 (mm²)
    pub recommended_cable_section: f64,
    pub monthly_consumption_kwh: f64,
    pub estimated_monthly_cost: f64,
    pub safety_status: SafetyStatus,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
}
