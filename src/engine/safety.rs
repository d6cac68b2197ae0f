// ==========================================
// 电气服务后台 - 安全评估
// ==========================================
// 职责: 按负载率划分安全等级, 生成警告与建议
// 输入: 计算电流 / 推荐断路器 / 总负载 (kW)
// 输出: SafetyAssessment
// 红线: 警告与建议只追加, 顺序固定
// ==========================================

use crate::domain::types::SafetyStatus;
use crate::i18n::t_in;

/// 负载率告警阈值
pub const LOAD_WARNING_THRESHOLD: f64 = 0.8;

/// 负载率危险阈值
pub const LOAD_DANGER_THRESHOLD: f64 = 0.95;

/// 建议评估三相系统的负载阈值 (kW)
pub const THREE_PHASE_SUGGESTION_KW: f64 = 10.0;

/// 建议负载均衡的负载阈值 (kW)
pub const LOAD_BALANCING_SUGGESTION_KW: f64 = 5.0;

/// 消息键 (locales/*.yml)
pub mod message_keys {
    pub const CRITICAL_OVERLOAD: &str = "safety.critical_overload";
    pub const FIRE_RISK: &str = "safety.fire_risk";
    pub const RESIZE_URGENTLY: &str = "safety.resize_urgently";
    pub const HIGH_UTILIZATION: &str = "safety.high_utilization";
    pub const UPGRADE_PROTECTION: &str = "safety.upgrade_protection";
    pub const THREE_PHASE_EVALUATION: &str = "safety.three_phase_evaluation";
    pub const LOAD_BALANCING: &str = "safety.load_balancing";
    pub const WITHIN_SAFE_PARAMETERS: &str = "safety.within_safe_parameters";
    pub const ANNUAL_INSPECTION: &str = "safety.annual_inspection";
}

/// 安全评估结果
#[derive(Debug, Clone, PartialEq)]
pub struct SafetyAssessment {
    pub status: SafetyStatus,
    pub load_factor: f64,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
}

/// 安全评估
///
/// 规则:
/// - load_factor > 0.95: danger, 2 条警告 + 1 条建议
/// - load_factor > 0.8: warning, 1 条警告 + 1 条建议
/// - 其余: safe
///
/// 之后依次追加:
/// - 总负载 > 10kW: 建议评估三相系统
/// - 总负载 > 5kW 且仍为 safe: 建议增加回路做负载均衡
/// - 无任何警告: 追加两条默认建议
///
/// # 参数
/// - `current_amps`: 计算电流 (未取整)
/// - `breaker_amps`: 推荐断路器规格
/// - `total_load_kw`: 总负载 (含安全系数, 未取整)
/// - `locale`: 消息语言
pub fn assess(
    current_amps: f64,
    breaker_amps: u32,
    total_load_kw: f64,
    locale: &str,
) -> SafetyAssessment {
    use message_keys::*;

    let mut warnings = Vec::new();
    let mut recommendations = Vec::new();
    let mut status = SafetyStatus::Safe;

    let load_factor = current_amps / breaker_amps as f64;

    if load_factor > LOAD_DANGER_THRESHOLD {
        status = SafetyStatus::Danger;
        warnings.push(t_in(locale, CRITICAL_OVERLOAD));
        warnings.push(t_in(locale, FIRE_RISK));
        recommendations.push(t_in(locale, RESIZE_URGENTLY));
    } else if load_factor > LOAD_WARNING_THRESHOLD {
        status = SafetyStatus::Warning;
        warnings.push(t_in(locale, HIGH_UTILIZATION));
        recommendations.push(t_in(locale, UPGRADE_PROTECTION));
    }

    if total_load_kw > THREE_PHASE_SUGGESTION_KW {
        recommendations.push(t_in(locale, THREE_PHASE_EVALUATION));
    }

    if total_load_kw > LOAD_BALANCING_SUGGESTION_KW && status == SafetyStatus::Safe {
        recommendations.push(t_in(locale, LOAD_BALANCING));
    }

    if warnings.is_empty() {
        recommendations.push(t_in(locale, WITHIN_SAFE_PARAMETERS));
        recommendations.push(t_in(locale, ANNUAL_INSPECTION));
    }

    tracing::debug!(
        load_factor,
        status = %status,
        warnings = warnings.len(),
        recommendations = recommendations.len(),
        "safety assessed"
    );

    SafetyAssessment {
        status,
        load_factor,
        warnings,
        recommendations,
    }
}
