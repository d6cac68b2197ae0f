// ==========================================
// 电气服务后台 - 标准规格表
// ==========================================
// 职责: 断路器额定电流 / 电缆截面载流量 (只读常量)
// 红线: 查表饱和, 不失败 (超出范围返回最大规格)
// ==========================================

/// 选型裕量 (25%)
pub const SIZING_MARGIN: f64 = 1.25;

/// 标准断路器额定电流 (A), 升序
pub const BREAKER_SIZES: [u32; 15] = [
    6, 10, 16, 20, 25, 32, 40, 50, 63, 80, 100, 125, 160, 200, 250,
];

/// 电缆截面 (mm²) → 最大载流量 (A), 按截面升序
pub const CABLE_SECTIONS: [(f64, f64); 12] = [
    (1.5, 16.0),
    (2.5, 21.0),
    (4.0, 28.0),
    (6.0, 36.0),
    (10.0, 50.0),
    (16.0, 68.0),
    (25.0, 89.0),
    (35.0, 111.0),
    (50.0, 133.0),
    (70.0, 171.0),
    (95.0, 207.0),
    (120.0, 240.0),
];

/// 最大断路器规格
pub const MAX_BREAKER_AMPS: u32 = BREAKER_SIZES[BREAKER_SIZES.len() - 1];

/// 最大电缆截面
pub const MAX_CABLE_SECTION: f64 = CABLE_SECTIONS[CABLE_SECTIONS.len() - 1].0;

/// 推荐断路器: 第一个 >= 电流 × 1.25 的规格, 否则 250A
pub fn recommend_breaker(current_amps: f64) -> u32 {
    let target = current_amps * SIZING_MARGIN;

    BREAKER_SIZES
        .iter()
        .copied()
        .find(|&size| size as f64 >= target)
        .unwrap_or(MAX_BREAKER_AMPS)
}

/// 推荐电缆截面: 第一个载流量 >= 电流 × 1.25 的截面, 否则 120mm²
pub fn recommend_cable_section(current_amps: f64) -> f64 {
    let target = current_amps * SIZING_MARGIN;

    CABLE_SECTIONS
        .iter()
        .find(|(_, max_current)| *max_current >= target)
        .map(|(section, _)| *section)
        .unwrap_or(MAX_CABLE_SECTION)
}

/// 截面对应的载流量 (不在表中返回 None)
pub fn cable_rating(section_mm2: f64) -> Option<f64> {
    CABLE_SECTIONS
        .iter()
        .find(|(section, _)| *section == section_mm2)
        .map(|(_, rating)| *rating)
}
