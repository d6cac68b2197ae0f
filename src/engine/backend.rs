// ==========================================
// 电气服务后台 - 计算引擎选择
// ==========================================
// 职责: 统一计算接口, 参考实现 + 并行加速实现
// 选择: 启动时按 EngineMode 选定一次
// 红线: 两种实现的输出必须逐位一致
// ==========================================

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::load::{CalculationRequest, CalculationResult};
use crate::domain::types::EngineMode;
use crate::engine::load_calc;
use crate::i18n::{t_in, DEFAULT_LOCALE};

// ==========================================
// LoadEngine - 负载计算引擎接口
// ==========================================
pub trait LoadEngine: Send + Sync {
    /// 引擎名称 (reference / parallel)
    fn name(&self) -> &'static str;

    /// 单次计算
    fn compute(
        &self,
        request: &CalculationRequest,
        electricity_rate_per_kwh: f64,
    ) -> CalculationResult;

    /// 批量计算, 结果顺序与输入一致
    fn compute_batch(
        &self,
        requests: &[CalculationRequest],
        electricity_rate_per_kwh: f64,
    ) -> Vec<CalculationResult> {
        requests
            .iter()
            .map(|r| self.compute(r, electricity_rate_per_kwh))
            .collect()
    }
}

// ==========================================
// ReferenceEngine - 参考实现 (顺序执行)
// ==========================================
#[derive(Debug, Clone)]
pub struct ReferenceEngine {
    locale: String,
}

impl ReferenceEngine {
    pub fn new() -> Self {
        Self::with_locale(DEFAULT_LOCALE)
    }

    pub fn with_locale(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
        }
    }
}

impl Default for ReferenceEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadEngine for ReferenceEngine {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn compute(
        &self,
        request: &CalculationRequest,
        electricity_rate_per_kwh: f64,
    ) -> CalculationResult {
        load_calc::compute_localized(request, electricity_rate_per_kwh, &self.locale)
    }
}

// ==========================================
// ParallelEngine - 并行实现 (rayon)
// ==========================================
// 设备分项与批量请求并行计算; 汇总仍按输入顺序进行,
// 因此浮点结果与参考实现完全一致
#[cfg(feature = "parallel")]
#[derive(Debug, Clone)]
pub struct ParallelEngine {
    locale: String,
}

#[cfg(feature = "parallel")]
impl ParallelEngine {
    pub fn new() -> Self {
        Self::with_locale(DEFAULT_LOCALE)
    }

    pub fn with_locale(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
        }
    }
}

#[cfg(feature = "parallel")]
impl Default for ParallelEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "parallel")]
impl LoadEngine for ParallelEngine {
    fn name(&self) -> &'static str {
        "parallel"
    }

    fn compute(
        &self,
        request: &CalculationRequest,
        electricity_rate_per_kwh: f64,
    ) -> CalculationResult {
        use rayon::prelude::*;

        let terms: Vec<load_calc::DeviceTerms> = request
            .devices
            .par_iter()
            .map(load_calc::device_terms)
            .collect();

        load_calc::finish(&terms, request, electricity_rate_per_kwh, &self.locale)
    }

    fn compute_batch(
        &self,
        requests: &[CalculationRequest],
        electricity_rate_per_kwh: f64,
    ) -> Vec<CalculationResult> {
        use rayon::prelude::*;

        requests
            .par_iter()
            .map(|r| self.compute(r, electricity_rate_per_kwh))
            .collect()
    }
}

/// 是否编译了加速引擎
pub const fn accelerated_available() -> bool {
    cfg!(feature = "parallel")
}

/// 按模式选择引擎
///
/// - reference: 参考实现
/// - accelerated: 加速实现; 未编译时记录警告并退回参考实现
/// - auto: 有加速实现则使用
pub fn select_engine(mode: EngineMode, locale: &str) -> Arc<dyn LoadEngine> {
    let use_accelerated = match mode {
        EngineMode::Reference => false,
        EngineMode::Auto => accelerated_available(),
        EngineMode::Accelerated => {
            if !accelerated_available() {
                tracing::warn!(
                    requested = %mode,
                    "{}",
                    t_in(DEFAULT_LOCALE, "engine.fallback_to_reference")
                );
            }
            accelerated_available()
        }
    };

    let engine = build_engine(use_accelerated, locale);
    tracing::info!(mode = %mode, engine = engine.name(), locale, "load engine selected");
    engine
}

#[cfg(feature = "parallel")]
fn build_engine(accelerated: bool, locale: &str) -> Arc<dyn LoadEngine> {
    if accelerated {
        Arc::new(ParallelEngine::with_locale(locale))
    } else {
        Arc::new(ReferenceEngine::with_locale(locale))
    }
}

#[cfg(not(feature = "parallel"))]
fn build_engine(_accelerated: bool, locale: &str) -> Arc<dyn LoadEngine> {
    Arc::new(ReferenceEngine::with_locale(locale))
}

// ==========================================
// EngineInfo - 引擎信息 (健康检查 / 系统信息)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineInfo {
    pub engine: String,
    pub accelerated_available: bool,
    pub requested_mode: EngineMode,
    pub electricity_rate: f64,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::load::Device;
    use crate::domain::types::CircuitType;

    fn sample_request() -> CalculationRequest {
        CalculationRequest::new(
            vec![
                Device::new("Klima", 2500.0, 2, 8.0).with_power_factor(0.85),
                Device::new("Aydınlatma", 60.0, 10, 6.0).with_power_factor(0.95),
            ],
            CircuitType::SinglePhase,
        )
    }

    #[test]
    fn test_reference_engine_matches_pipeline() {
        let engine = ReferenceEngine::new();
        let request = sample_request();
        assert_eq!(engine.compute(&request, 2.5), load_calc::compute(&request, 2.5));
    }

    #[test]
    fn test_select_reference() {
        let engine = select_engine(EngineMode::Reference, "en");
        assert_eq!(engine.name(), "reference");
    }

    #[test]
    fn test_select_auto_follows_feature() {
        let engine = select_engine(EngineMode::Auto, "en");
        let expected = if accelerated_available() { "parallel" } else { "reference" };
        assert_eq!(engine.name(), expected);
    }

    #[test]
    fn test_select_accelerated_falls_back() {
        let engine = select_engine(EngineMode::Accelerated, "en");
        if accelerated_available() {
            assert_eq!(engine.name(), "parallel");
        } else {
            assert_eq!(engine.name(), "reference");
        }
    }

    #[test]
    fn test_batch_preserves_order() {
        let engine = select_engine(EngineMode::Auto, "en");
        let light = sample_request();
        let heavy = CalculationRequest::new(
            vec![Device::new("Fırın", 52_800.0, 1, 2.0).with_power_factor(1.0)],
            CircuitType::SinglePhase,
        )
        .with_safety_factor(1.0);

        let results = engine.compute_batch(&[light.clone(), heavy.clone(), light.clone()], 2.5);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0], engine.compute(&light, 2.5));
        assert_eq!(results[1], engine.compute(&heavy, 2.5));
        assert_eq!(results[0], results[2]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_reference() {
        let request = sample_request();
        let reference = ReferenceEngine::with_locale("tr").compute(&request, 3.5);
        let parallel = ParallelEngine::with_locale("tr").compute(&request, 3.5);
        assert_eq!(reference, parallel);
    }
}
