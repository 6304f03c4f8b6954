//! 동압 보정식 (ASME PTC 10-1997, 비압축성 근사).
//! 입력: 압력[Pa], 속도[m/s], 밀도[kg/m³]

/// 동압 0.5·ρ·V² [Pa].
pub fn dynamic_pressure(velocity_m_per_s: f64, density_kg_per_m3: f64) -> f64 {
    0.5 * density_kg_per_m3 * velocity_m_per_s * velocity_m_per_s
}

/// 정압에서 전압을 구한다. P_total = P_static + 0.5·ρ·V².
/// 입력 검증은 하지 않는다. ρ ≤ 0이어도 대수적 결과를 그대로 돌려준다.
pub fn static_to_total_pressure(
    p_static_pa: f64,
    velocity_m_per_s: f64,
    density_kg_per_m3: f64,
) -> f64 {
    p_static_pa + dynamic_pressure(velocity_m_per_s, density_kg_per_m3)
}

/// 전압에서 정압을 구한다. 위 식의 정확한 역산이다.
pub fn total_to_static_pressure(
    p_total_pa: f64,
    velocity_m_per_s: f64,
    density_kg_per_m3: f64,
) -> f64 {
    p_total_pa - dynamic_pressure(velocity_m_per_s, density_kg_per_m3)
}

/// 전압-정압 상대차를 백분율로 구한다. 100·(P_total − P_static)/P_static.
pub fn relative_pressure_difference_percent(p_total_pa: f64, p_static_pa: f64) -> f64 {
    100.0 * (p_total_pa - p_static_pa) / p_static_pa
}
