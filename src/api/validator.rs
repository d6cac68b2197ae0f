// ==========================================
// 电气服务后台 - 请求校验器
// ==========================================
// 职责: 负载计算请求 / 报价请求的边界校验
// 红线: 收集全部违规后一次性返回, 不在第一个错误处中断
// ==========================================

use std::ops::RangeInclusive;

use serde_json::json;

use crate::api::error::{ApiError, ApiResult, ValidationViolation};
use crate::domain::load::{CalculationRequest, Device};
use crate::domain::service::{ContactRequest, QuoteRequest};
use crate::domain::types::{CircuitType, UrgencyLevel};

/// 日使用小时数范围
pub const USAGE_HOURS_RANGE: RangeInclusive<f64> = 0.0..=24.0;

/// 功率因数范围
pub const POWER_FACTOR_RANGE: RangeInclusive<f64> = 0.1..=1.0;

/// 安全系数范围
pub const SAFETY_FACTOR_RANGE: RangeInclusive<f64> = 1.0..=2.0;

/// 联系表单字段长度 (字符数)
pub const CONTACT_NAME_CHARS: RangeInclusive<usize> = 3..=100;
pub const CONTACT_SUBJECT_CHARS: RangeInclusive<usize> = 3..=200;
pub const CONTACT_MESSAGE_CHARS: RangeInclusive<usize> = 10..=2000;

// ==========================================
// LoadRequestValidator - 负载计算请求校验器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct LoadRequestValidator;

impl LoadRequestValidator {
    pub fn new() -> Self {
        Self
    }

    /// 校验负载计算请求
    ///
    /// # 返回
    /// - Ok(()): 校验通过
    /// - Err(ApiError::ValidationFailed): 含全部违规明细
    pub fn validate(&self, request: &CalculationRequest) -> ApiResult<()> {
        let mut violations = Vec::new();

        if request.devices.is_empty() {
            violations.push(ValidationViolation::new(
                "devices",
                "at least one device is required",
            ));
        }

        for (index, device) in request.devices.iter().enumerate() {
            Self::check_device(index, device, &mut violations);
        }

        let voltage = request.voltage_level;
        if !voltage.is_finite() || voltage <= 0.0 {
            violations.push(
                ValidationViolation::new("voltage_level", "must be a positive number")
                    .with_details(json!({ "value": voltage })),
            );
        }

        if !SAFETY_FACTOR_RANGE.contains(&request.safety_factor) {
            violations.push(
                ValidationViolation::new("safety_factor", "must be between 1.0 and 2.0")
                    .with_details(json!({ "value": request.safety_factor })),
            );
        }

        // 单项已违规时汇总量无意义
        if violations.is_empty() {
            Self::check_totals(request, &mut violations);
        }

        Self::into_result(violations)
    }

    fn check_device(index: usize, device: &Device, violations: &mut Vec<ValidationViolation>) {
        let field = |name: &str| format!("devices[{}].{}", index, name);

        if device.name.trim().is_empty() {
            violations.push(ValidationViolation::new(field("name"), "must not be blank"));
        }

        if !device.power_watts.is_finite() || device.power_watts <= 0.0 {
            violations.push(
                ValidationViolation::new(field("power_watts"), "must be a positive number")
                    .with_details(json!({ "value": device.power_watts })),
            );
        }

        if device.quantity < 1 {
            violations.push(ValidationViolation::new(
                field("quantity"),
                "must be at least 1",
            ));
        }

        if !USAGE_HOURS_RANGE.contains(&device.usage_hours_per_day) {
            violations.push(
                ValidationViolation::new(field("usage_hours_per_day"), "must be between 0 and 24")
                    .with_details(json!({ "value": device.usage_hours_per_day })),
            );
        }

        if !POWER_FACTOR_RANGE.contains(&device.power_factor) {
            violations.push(
                ValidationViolation::new(field("power_factor"), "must be between 0.1 and 1.0")
                    .with_details(json!({ "value": device.power_factor })),
            );
        }
    }

    /// 汇总量溢出检查 (单项有限但乘积 / 求和可能溢出为 inf)
    fn check_totals(request: &CalculationRequest, violations: &mut Vec<ValidationViolation>) {
        let connected: f64 = request
            .devices
            .iter()
            .map(|d| d.power_watts * d.quantity as f64)
            .sum();
        let daily_energy: f64 = request
            .devices
            .iter()
            .map(|d| d.power_watts * d.quantity as f64 * d.usage_hours_per_day)
            .sum();
        let design_load = connected * request.safety_factor;

        if !design_load.is_finite() || !daily_energy.is_finite() {
            violations.push(
                ValidationViolation::new("devices", "total load is out of range")
                    .with_details(json!({
                        "design_load_finite": design_load.is_finite(),
                        "daily_energy_finite": daily_energy.is_finite(),
                    })),
            );
        }
    }

    /// 校验报价请求 (服务是否存在由调用方查目录)
    pub fn validate_quote(&self, request: &QuoteRequest) -> ApiResult<()> {
        let mut violations = Vec::new();

        if request.service_id.trim().is_empty() {
            violations.push(ValidationViolation::new("service_id", "must not be blank"));
        }
        if request.district.trim().is_empty() {
            violations.push(ValidationViolation::new("district", "must not be blank"));
        }

        Self::into_result(violations)
    }

    /// 校验联系表单
    ///
    /// # 返回
    /// - Err(ApiError::ValidationFailed): 含全部违规明细 (长度按字符计, 忽略首尾空白)
    pub fn validate_contact(&self, request: &ContactRequest) -> ApiResult<()> {
        let mut violations = Vec::new();

        Self::check_length("name", &request.name, CONTACT_NAME_CHARS, &mut violations);
        if request.email.trim().is_empty() {
            violations.push(ValidationViolation::new("email", "must not be blank"));
        }
        if request.phone.trim().is_empty() {
            violations.push(ValidationViolation::new("phone", "must not be blank"));
        }
        Self::check_length("subject", &request.subject, CONTACT_SUBJECT_CHARS, &mut violations);
        Self::check_length("message", &request.message, CONTACT_MESSAGE_CHARS, &mut violations);

        Self::into_result(violations)
    }

    fn check_length(
        field: &str,
        value: &str,
        range: RangeInclusive<usize>,
        violations: &mut Vec<ValidationViolation>,
    ) {
        let chars = value.trim().chars().count();
        if !range.contains(&chars) {
            violations.push(
                ValidationViolation::new(
                    field,
                    format!("length must be between {} and {}", range.start(), range.end()),
                )
                .with_details(json!({ "length": chars })),
            );
        }
    }

    fn into_result(violations: Vec<ValidationViolation>) -> ApiResult<()> {
        if violations.is_empty() {
            return Ok(());
        }

        tracing::warn!(
            count = violations.len(),
            first_field = %violations[0].field,
            "request validation failed"
        );

        Err(ApiError::ValidationFailed {
            reason: format!("{} invalid field(s)", violations.len()),
            violations,
        })
    }
}

/// 解析线路类型 (single_phase / three_phase)
pub fn parse_circuit_type(value: &str) -> ApiResult<CircuitType> {
    value.parse::<CircuitType>().map_err(ApiError::InvalidInput)
}

/// 解析紧急程度 (normal / urgent / emergency)
pub fn parse_urgency(value: &str) -> ApiResult<UrgencyLevel> {
    value.parse::<UrgencyLevel>().map_err(ApiError::InvalidInput)
}
