// ==========================================
// 电气服务后台 - 领域类型定义
// ==========================================
// 职责: 线路类型 / 安全等级 / 紧急程度 / 服务类别 / 引擎模式
// 序列化格式: snake_case / lowercase (与前端 JSON 一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 线路类型 (Circuit Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CircuitType {
    #[default]
    SinglePhase, // 单相
    ThreePhase,  // 三相
}

impl fmt::Display for CircuitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CircuitType::SinglePhase => write!(f, "single_phase"),
            CircuitType::ThreePhase => write!(f, "three_phase"),
        }
    }
}

impl FromStr for CircuitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "single_phase" => Ok(CircuitType::SinglePhase),
            "three_phase" => Ok(CircuitType::ThreePhase),
            other => Err(format!("unsupported circuit type: {}", other)),
        }
    }
}

// ==========================================
// 安全等级 (Safety Status)
// ==========================================
// 由负载率决定: >0.95 danger, >0.8 warning, 其余 safe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyStatus {
    Safe,
    Warning,
    Danger,
}

impl fmt::Display for SafetyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SafetyStatus::Safe => write!(f, "safe"),
            SafetyStatus::Warning => write!(f, "warning"),
            SafetyStatus::Danger => write!(f, "danger"),
        }
    }
}

// ==========================================
// 紧急程度 (Urgency Level)
// ==========================================
// 影响报价倍率: normal=1.0, urgent/emergency 由配置决定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    #[default]
    Normal,
    Urgent,
    Emergency,
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrgencyLevel::Normal => write!(f, "normal"),
            UrgencyLevel::Urgent => write!(f, "urgent"),
            UrgencyLevel::Emergency => write!(f, "emergency"),
        }
    }
}

impl FromStr for UrgencyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "normal" => Ok(UrgencyLevel::Normal),
            "urgent" => Ok(UrgencyLevel::Urgent),
            "emergency" => Ok(UrgencyLevel::Emergency),
            other => Err(format!("unsupported urgency level: {}", other)),
        }
    }
}

// ==========================================
// 服务类别 (Service Category)
// ==========================================
// 取值与服务目录 id 保持一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Tesisat,     // 电气安装
    Proje,       // 项目设计
    Bakim,       // 定期维护
    Ariza,       // 故障检修
    Danismanlik, // 技术咨询
    Guvenlik,    // 安全系统
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceCategory::Tesisat => write!(f, "tesisat"),
            ServiceCategory::Proje => write!(f, "proje"),
            ServiceCategory::Bakim => write!(f, "bakim"),
            ServiceCategory::Ariza => write!(f, "ariza"),
            ServiceCategory::Danismanlik => write!(f, "danismanlik"),
            ServiceCategory::Guvenlik => write!(f, "guvenlik"),
        }
    }
}

impl FromStr for ServiceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "tesisat" => Ok(ServiceCategory::Tesisat),
            "proje" => Ok(ServiceCategory::Proje),
            "bakim" => Ok(ServiceCategory::Bakim),
            "ariza" => Ok(ServiceCategory::Ariza),
            "danismanlik" => Ok(ServiceCategory::Danismanlik),
            "guvenlik" => Ok(ServiceCategory::Guvenlik),
            other => Err(format!("unknown service category: {}", other)),
        }
    }
}

// ==========================================
// 区域分级 (District Zone)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistrictZone {
    Central,  // 中心区 x1.0
    Standard, // 普通区 x1.2
    Far,      // 远郊区 x1.5
}

impl DistrictZone {
    /// 距离倍率
    pub fn multiplier(&self) -> f64 {
        match self {
            DistrictZone::Central => 1.0,
            DistrictZone::Standard => 1.2,
            DistrictZone::Far => 1.5,
        }
    }
}

impl fmt::Display for DistrictZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistrictZone::Central => write!(f, "central"),
            DistrictZone::Standard => write!(f, "standard"),
            DistrictZone::Far => write!(f, "far"),
        }
    }
}

// ==========================================
// 计算引擎模式 (Engine Mode)
// ==========================================
// auto: 编译了加速引擎则使用, 否则退回参考实现
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineMode {
    Reference,
    Accelerated,
    #[default]
    Auto,
}

impl fmt::Display for EngineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineMode::Reference => write!(f, "reference"),
            EngineMode::Accelerated => write!(f, "accelerated"),
            EngineMode::Auto => write!(f, "auto"),
        }
    }
}

impl FromStr for EngineMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reference" => Ok(EngineMode::Reference),
            "accelerated" => Ok(EngineMode::Accelerated),
            "auto" => Ok(EngineMode::Auto),
            other => Err(format!("unknown engine mode: {}", other)),
        }
    }
}
