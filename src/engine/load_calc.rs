// ==========================================
// 电气服务后台 - 负载计算流水线 (参考实现)
// ==========================================
// 职责: 设备功率 → 电流 → 断路器/电缆选型 → 安全评估
// 输入: CalculationRequest + 电价 (每 kWh)
// 输出: CalculationResult
// 红线: 纯函数, 无 I/O, 无共享可变状态; 仅在输出时取整
// ==========================================

use crate::domain::load::{CalculationRequest, CalculationResult, Device, DEFAULT_POWER_FACTOR};
use crate::domain::types::CircuitType;
use crate::engine::safety;
use crate::engine::tables::{recommend_breaker, recommend_cable_section};
use crate::i18n::DEFAULT_LOCALE;

/// √3 (三相电流公式常数)
pub const SQRT_3: f64 = 1.732;

/// 月度天数
pub const DAYS_PER_MONTH: f64 = 30.0;

// ==========================================
// DeviceTerms - 单设备分项
// ==========================================
// 参考引擎与并行引擎共用; 求和顺序固定为设备输入顺序
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceTerms {
    /// 接入功率 P × q (W)
    pub connected_watts: f64,
    /// 功率因数加权项 P × q × pf
    pub weighted_power_factor: f64,
    /// 月用电量 (kWh)
    pub monthly_kwh: f64,
}

/// 计算单设备分项
pub fn device_terms(device: &Device) -> DeviceTerms {
    let connected_watts = device.connected_watts();
    let daily_kwh = (connected_watts * device.usage_hours_per_day) / 1000.0;

    DeviceTerms {
        connected_watts,
        weighted_power_factor: connected_watts * device.power_factor,
        monthly_kwh: daily_kwh * DAYS_PER_MONTH,
    }
}

/// 加权平均功率因数, 总功率为 0 时取默认 0.9
pub fn weighted_power_factor(terms: &[DeviceTerms]) -> f64 {
    let total_weighted: f64 = terms.iter().map(|t| t.weighted_power_factor).sum();
    let total_power: f64 = terms.iter().map(|t| t.connected_watts).sum();

    if total_power > 0.0 {
        total_weighted / total_power
    } else {
        DEFAULT_POWER_FACTOR
    }
}

/// 线电流
///
/// - 单相: I = P / (V × PF)
/// - 三相: I = P / (√3 × V × PF)
pub fn line_current(
    power_watts: f64,
    voltage: f64,
    circuit_type: CircuitType,
    power_factor: f64,
) -> f64 {
    match circuit_type {
        CircuitType::SinglePhase => power_watts / (voltage * power_factor),
        CircuitType::ThreePhase => power_watts / (SQRT_3 * voltage * power_factor),
    }
}

/// 保留两位小数
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 负载计算 (英文消息)
pub fn compute(request: &CalculationRequest, electricity_rate_per_kwh: f64) -> CalculationResult {
    compute_localized(request, electricity_rate_per_kwh, DEFAULT_LOCALE)
}

/// 负载计算 (指定消息语言)
pub fn compute_localized(
    request: &CalculationRequest,
    electricity_rate_per_kwh: f64,
    locale: &str,
) -> CalculationResult {
    let terms: Vec<DeviceTerms> = request.devices.iter().map(device_terms).collect();
    finish(&terms, request, electricity_rate_per_kwh, locale)
}

/// 由设备分项汇总出最终结果
///
/// 步骤:
/// 1. 加权功率因数
/// 2. 总负载 (× 安全系数)
/// 3. 月用电量 (不乘安全系数)
/// 4. 电流
/// 5-6. 断路器 / 电缆选型
/// 7. 月电费
/// 8. 安全评估
/// 9. 输出取整
pub fn finish(
    terms: &[DeviceTerms],
    request: &CalculationRequest,
    electricity_rate_per_kwh: f64,
    locale: &str,
) -> CalculationResult {
    // 1. 加权功率因数
    let power_factor = weighted_power_factor(terms);

    // 2. 总负载
    let connected_watts: f64 = terms.iter().map(|t| t.connected_watts).sum();
    let total_power_watts = connected_watts * request.safety_factor;
    let total_load_kw = total_power_watts / 1000.0;

    // 3. 月用电量
    let monthly_kwh: f64 = terms.iter().map(|t| t.monthly_kwh).sum();

    // 4. 电流
    let total_current = line_current(
        total_power_watts,
        request.voltage_level,
        request.circuit_type,
        power_factor,
    );

    // 5-6. 选型
    let breaker_amps = recommend_breaker(total_current);
    let cable_section = recommend_cable_section(total_current);

    // 7. 电费
    let monthly_cost = monthly_kwh * electricity_rate_per_kwh;

    tracing::debug!(
        devices = terms.len(),
        power_factor,
        total_power_watts,
        total_current,
        breaker_amps,
        cable_section,
        monthly_kwh,
        "load pipeline computed"
    );

    // 8. 安全评估
    let assessment = safety::assess(total_current, breaker_amps, total_load_kw, locale);

    // 9. 取整
    CalculationResult {
        total_load_kw: round2(total_load_kw),
        total_current_amps: round2(total_current),
        recommended_breaker_amps: breaker_amps,
        recommended_cable_section: cable_section,
        monthly_consumption_kwh: round2(monthly_kwh),
        estimated_monthly_cost: round2(monthly_cost),
        safety_status: assessment.status,
        warnings: assessment.warnings,
        recommendations: assessment.recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::SafetyStatus;

    fn klima() -> Device {
        Device::new("Klima", 2500.0, 2, 8.0).with_power_factor(0.85)
    }

    fn buzdolabi() -> Device {
        Device::new("Buzdolabı", 150.0, 1, 24.0).with_power_factor(0.9)
    }

    #[test]
    fn test_device_terms() {
        let terms = device_terms(&klima());
        assert_eq!(terms.connected_watts, 5000.0);
        assert!((terms.weighted_power_factor - 4250.0).abs() < 1e-9);
        // 5000W × 8h / 1000 × 30
        assert!((terms.monthly_kwh - 1200.0).abs() < 1e-9);
    }

    #[test]
    fn test_total_connected_power() {
        let terms: Vec<_> = [klima(), buzdolabi()].iter().map(device_terms).collect();
        let total: f64 = terms.iter().map(|t| t.connected_watts).sum();
        assert!((total - 5150.0).abs() < 0.1);
    }

    #[test]
    fn test_weighted_power_factor() {
        let terms: Vec<_> = [klima(), buzdolabi()].iter().map(device_terms).collect();
        let pf = weighted_power_factor(&terms);
        let expected = (5000.0 * 0.85 + 150.0 * 0.9) / 5150.0;
        assert!((pf - expected).abs() < 1e-12);
    }

    #[test]
    fn test_weighted_power_factor_zero_power_fallback() {
        let terms = vec![device_terms(&Device::new("Off", 0.0, 1, 1.0).with_power_factor(0.5))];
        assert_eq!(weighted_power_factor(&terms), DEFAULT_POWER_FACTOR);
        assert_eq!(weighted_power_factor(&[]), DEFAULT_POWER_FACTOR);
    }

    #[test]
    fn test_line_current_single_phase() {
        let current = line_current(2200.0, 220.0, CircuitType::SinglePhase, 1.0);
        assert!((current - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_line_current_three_phase() {
        let current = line_current(11000.0, 380.0, CircuitType::ThreePhase, 0.9);
        // 11000 / (1.732 × 380 × 0.9) ≈ 18.57 A
        assert!((current - 18.57).abs() < 0.01);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(4.545454), 4.55);
        assert_eq!(round2(300.0), 300.0);
        assert_eq!(round2(1.004), 1.0);
    }

    #[test]
    fn test_full_calculation() {
        let request = CalculationRequest::new(vec![klima()], CircuitType::SinglePhase)
            .with_safety_factor(1.2);
        let result = compute(&request, 2.5);

        // 5000W × 1.2 = 6kW
        assert_eq!(result.total_load_kw, 6.0);
        // 6000 / (220 × 0.85) ≈ 32.09A → 目标 40.11A → 50A / 10mm²
        assert_eq!(result.total_current_amps, 32.09);
        assert_eq!(result.recommended_breaker_amps, 50);
        assert_eq!(result.recommended_cable_section, 10.0);
        assert_eq!(result.monthly_consumption_kwh, 1200.0);
        assert_eq!(result.estimated_monthly_cost, 3000.0);
        assert_eq!(result.safety_status, SafetyStatus::Safe);
    }

    #[test]
    fn test_empty_device_list_does_not_panic() {
        let request = CalculationRequest::new(vec![], CircuitType::SinglePhase);
        let result = compute(&request, 2.5);
        assert_eq!(result.total_load_kw, 0.0);
        assert_eq!(result.total_current_amps, 0.0);
        assert_eq!(result.recommended_breaker_amps, 6);
        assert_eq!(result.recommended_cable_section, 1.5);
        assert_eq!(result.safety_status, SafetyStatus::Safe);
    }
}
