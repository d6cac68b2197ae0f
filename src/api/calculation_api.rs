// ==========================================
// 电气服务后台 - 负载计算 API
// ==========================================
// 职责: 请求校验 → 调用选定引擎 → 记录结果
// 红线: 未通过校验的请求不得进入引擎
// ==========================================

use std::sync::Arc;

use tracing::{debug, info};

use crate::api::error::{ApiError, ApiResult, ValidationViolation};
use crate::api::validator::LoadRequestValidator;
use crate::config::AppConfig;
use crate::domain::load::{CalculationRequest, CalculationResult};
use crate::domain::types::EngineMode;
use crate::engine::backend::{accelerated_available, select_engine, EngineInfo, LoadEngine};
use crate::perf::PerfGuard;

// ==========================================
// CalculationApi - 负载计算 API
// ==========================================
pub struct CalculationApi {
    engine: Arc<dyn LoadEngine>,
    validator: LoadRequestValidator,
    electricity_rate: f64,
    requested_mode: EngineMode,
}

impl CalculationApi {
    /// 创建新的CalculationApi实例
    ///
    /// # 参数
    /// - engine: 负载计算引擎
    /// - electricity_rate: 电价 (每 kWh)
    /// - requested_mode: 配置中请求的引擎模式 (仅用于引擎信息展示)
    pub fn new(engine: Arc<dyn LoadEngine>, electricity_rate: f64, requested_mode: EngineMode) -> Self {
        Self {
            engine,
            validator: LoadRequestValidator::new(),
            electricity_rate,
            requested_mode,
        }
    }

    /// 按配置选择引擎并创建
    pub fn from_config(config: &AppConfig) -> Self {
        let engine = select_engine(config.engine_mode, &config.locale);
        Self::new(engine, config.electricity_price_per_kwh, config.engine_mode)
    }

    /// 负载计算
    ///
    /// # 返回
    /// - Ok(CalculationResult): 计算结果
    /// - Err(ApiError::ValidationFailed): 请求不合法
    pub fn calculate(&self, request: &CalculationRequest) -> ApiResult<CalculationResult> {
        let _perf = PerfGuard::new("calculate");

        self.validator.validate(request)?;

        let result = self.engine.compute(request, self.electricity_rate);

        info!(
            engine = self.engine.name(),
            devices = request.devices.len(),
            circuit_type = %request.circuit_type,
            total_load_kw = result.total_load_kw,
            safety_status = %result.safety_status,
            "load calculated"
        );

        Ok(result)
    }

    /// 批量负载计算
    ///
    /// 任一请求不合法则整批拒绝, 违规字段带请求下标前缀 (requests[i].)
    pub fn calculate_batch(
        &self,
        requests: &[CalculationRequest],
    ) -> ApiResult<Vec<CalculationResult>> {
        let _perf = PerfGuard::new("calculate_batch");

        let mut violations: Vec<ValidationViolation> = Vec::new();
        for (index, request) in requests.iter().enumerate() {
            if let Err(err) = self.validator.validate(request) {
                violations.extend(err.violations().iter().map(|v| ValidationViolation {
                    field: format!("requests[{}].{}", index, v.field),
                    ..v.clone()
                }));
            }
        }

        if !violations.is_empty() {
            return Err(ApiError::ValidationFailed {
                reason: format!("{} invalid field(s) in batch", violations.len()),
                violations,
            });
        }

        let results = self.engine.compute_batch(requests, self.electricity_rate);

        info!(
            engine = self.engine.name(),
            requests = requests.len(),
            "batch calculated"
        );

        Ok(results)
    }

    /// JSON 入口 (CLI 使用): 请求 JSON → 结果 JSON
    pub fn calculate_json(&self, request_json: &str) -> ApiResult<String> {
        let request: CalculationRequest = serde_json::from_str(request_json)
            .map_err(|e| ApiError::InvalidInput(format!("malformed calculation request: {}", e)))?;

        debug!(devices = request.devices.len(), "calculation request parsed");

        let result = self.calculate(&request)?;
        Ok(serde_json::to_string_pretty(&result)?)
    }

    /// 引擎信息
    pub fn engine_info(&self) -> EngineInfo {
        EngineInfo {
            engine: self.engine.name().to_string(),
            accelerated_available: accelerated_available(),
            requested_mode: self.requested_mode,
            electricity_rate: self.electricity_rate,
            version: crate::VERSION.to_string(),
        }
    }
}
