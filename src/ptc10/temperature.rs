//! 운동 온도 상승 보정식 (ASME PTC 10-1997).
//! 입력: 온도[K], 속도[m/s], 정압비열[J/(kg·K)], 회복계수[-]

/// 회복계수 기본값. PTC 10-1997이 공기용 대표값으로 제시하는 0.65.
pub const DEFAULT_RECOVERY_FACTOR: f64 = 0.65;

/// 정온에서 전온을 구한다. T_total = T_static + 0.5·V²/Cp.
/// Cp = 0이면 0으로 나누어 IEEE 결과(inf/NaN)가 그대로 전파된다.
pub fn static_to_total_temperature(t_static_k: f64, velocity_m_per_s: f64, cp_j_per_kg_k: f64) -> f64 {
    t_static_k + 0.5 * velocity_m_per_s * velocity_m_per_s / cp_j_per_kg_k
}

/// 전온에서 정온을 구한다. 위 식의 정확한 역산이다.
pub fn total_to_static_temperature(t_total_k: f64, velocity_m_per_s: f64, cp_j_per_kg_k: f64) -> f64 {
    t_total_k - 0.5 * velocity_m_per_s * velocity_m_per_s / cp_j_per_kg_k
}

/// 측정 온도에서 전온을 구한다 (PTC 10-1997 Eq 5.4.7).
/// T_total = T_measured − (1 − rf)·0.5·V²/Cp.
pub fn measured_to_total_temperature(
    t_measured_k: f64,
    velocity_m_per_s: f64,
    cp_j_per_kg_k: f64,
    recovery_factor: f64,
) -> f64 {
    t_measured_k - (1.0 - recovery_factor) * 0.5 * velocity_m_per_s * velocity_m_per_s / cp_j_per_kg_k
}

/// 정온에서 프로브가 실제로 읽는 측정 온도를 재구성한다.
/// T_measured = T_static + (1 − rf)·0.5·V²/Cp.
pub fn static_to_measured_temperature(
    t_static_k: f64,
    velocity_m_per_s: f64,
    cp_j_per_kg_k: f64,
    recovery_factor: f64,
) -> f64 {
    t_static_k + (1.0 - recovery_factor) * 0.5 * velocity_m_per_s * velocity_m_per_s / cp_j_per_kg_k
}
