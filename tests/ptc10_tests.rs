//! PTC 10 보정식 회귀 테스트. 표준 문서의 수치 예제와 대수 항등식을 확인한다.
use gas_measurement_toolbox::ptc10::{
    dynamic_pressure, measured_to_total_temperature, static_to_measured_temperature,
    static_to_total_pressure, static_to_total_temperature, total_to_static_pressure,
    total_to_static_temperature, DEFAULT_RECOVERY_FACTOR,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.12} got {actual:.12} (diff {diff:.3e}, tol {rel_tol})"
    );
}

#[test]
fn pressure_round_trip() {
    let p_static = 1.0e5;
    for &v in &[0.0, 12.5, 50.0, 150.0, 300.0] {
        for &rho in &[0.5, 0.8, 1.2, 75.0] {
            let p_total = static_to_total_pressure(p_static, v, rho);
            let back = total_to_static_pressure(p_total, v, rho);
            assert_close(&format!("V={v} rho={rho}"), back, p_static, 1e-12);
        }
    }
}

#[test]
fn temperature_round_trip() {
    let t_total = 293.15;
    for &v in &[0.0, 25.0, 100.0, 300.0] {
        for &cp in &[1005.0, 2080.0, 5193.0] {
            let t_static = total_to_static_temperature(t_total, v, cp);
            let back = static_to_total_temperature(t_static, v, cp);
            assert_close(&format!("V={v} Cp={cp}"), back, t_total, 1e-12);
        }
    }
}

#[test]
fn zero_velocity_is_identity() {
    assert_eq!(static_to_total_pressure(1.0e5, 0.0, 0.8), 1.0e5);
    assert_eq!(total_to_static_pressure(1.0e5, 0.0, 0.8), 1.0e5);
    assert_eq!(static_to_total_temperature(293.15, 0.0, 2080.0), 293.15);
    assert_eq!(total_to_static_temperature(293.15, 0.0, 2080.0), 293.15);
}

#[test]
fn measured_probe_at_rest_reads_total() {
    for &cp in &[1005.0, 2080.0] {
        for &rf in &[0.0, 0.5, DEFAULT_RECOVERY_FACTOR, 1.0] {
            assert_eq!(measured_to_total_temperature(300.0, 0.0, cp, rf), 300.0);
        }
    }
}

#[test]
fn recovery_factor_one_passes_measurement_through() {
    // rf = 1이면 프로브가 전온을 그대로 읽는다
    for &v in &[0.0, 50.0, 300.0] {
        for &cp in &[1005.0, 2080.0] {
            assert_eq!(measured_to_total_temperature(310.0, v, cp, 1.0), 310.0);
            assert_eq!(static_to_measured_temperature(310.0, v, cp, 1.0), 310.0);
        }
    }
}

#[test]
fn dynamic_pressure_reference_point() {
    // 1e5 Pa, 100 m/s, 0.8 kg/m3 → 정확히 104000 Pa
    assert_eq!(dynamic_pressure(100.0, 0.8), 4000.0);
    assert_eq!(static_to_total_pressure(1.0e5, 100.0, 0.8), 104_000.0);
}

#[test]
fn static_temperature_reference_point() {
    // 293.15 K, 50 m/s, Cp 2080 → 293.15 − 1250/2080
    let t_static = total_to_static_temperature(293.15, 50.0, 2080.0);
    assert_close("T_static", t_static, 292.549_423_076_923, 1e-12);
}

#[test]
fn measured_minus_static_matches_recovery_deficit() {
    let cp = 2080.0;
    let rf = DEFAULT_RECOVERY_FACTOR;
    let v = 300.0;
    let t_static = total_to_static_temperature(293.15, v, cp);
    let t_measured = static_to_measured_temperature(t_static, v, cp, rf);
    assert_close(
        "measured-static",
        t_measured - t_static,
        (1.0 - rf) * 0.5 * v * v / cp,
        1e-12,
    );
    assert_close("deficit", t_measured - t_static, 7.572_115_384_615, 1e-12);
}
