// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的请求构造、临时配置文件等功能
// ==========================================
#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;

use elektrik_backend::domain::{CalculationRequest, CircuitType, Device};
use tempfile::TempDir;

/// 测试日志 (debug 级别, 输出到测试捕获; 重复调用无副作用)
pub fn init_logging() {
    elektrik_backend::logging::init_test();
}

/// 单设备请求 (功率因数 1.0, 安全系数 1.0, 220V)
pub fn single_device_request(power_watts: f64, circuit_type: CircuitType) -> CalculationRequest {
    CalculationRequest::new(
        vec![Device::new("Test", power_watts, 1, 10.0).with_power_factor(1.0)],
        circuit_type,
    )
    .with_safety_factor(1.0)
}

/// 典型住宅设备组合
pub fn household_devices() -> Vec<Device> {
    vec![
        Device::new("Klima", 2500.0, 2, 8.0).with_power_factor(0.85),
        Device::new("Buzdolabı", 150.0, 1, 24.0).with_power_factor(0.9),
        Device::new("Aydınlatma", 60.0, 12, 6.0).with_power_factor(0.95),
        Device::new("Çamaşır Makinesi", 2000.0, 1, 1.5).with_power_factor(0.8),
    ]
}

/// 典型住宅请求 (单相, 默认电压和安全系数)
pub fn household_request() -> CalculationRequest {
    CalculationRequest::new(household_devices(), CircuitType::SinglePhase)
}

/// 在临时目录写入配置文件
///
/// # 返回
/// - TempDir: 临时目录（需要保持存活）
/// - PathBuf: 配置文件路径
pub fn write_temp_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, contents).expect("Failed to write config file");
    (dir, path)
}

/// 构造可注入的环境变量读取函数
pub fn fake_env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

/// 空环境
pub fn no_env() -> impl Fn(&str) -> Option<String> {
    |_: &str| None
}
