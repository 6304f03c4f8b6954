//! 속도 스윕 드라이버 테스트. 물성 엔진은 스텁으로 대체한다.
use std::cell::Cell;

use gas_measurement_toolbox::gas::{
    GasComposition, GasPropertyError, GasState, PropertySource,
};
use gas_measurement_toolbox::sensitivity::{
    linspace, run_pressure_study, run_temperature_study, PressureStudyInput,
    TemperatureStudyInput,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.12} got {actual:.12} (diff {diff:.3e}, tol {rel_tol})"
    );
}

/// 고정 밀도를 돌려주는 물성 스텁. 호출 횟수를 센다.
struct FixedDensity {
    density_kg_per_m3: f64,
    calls: Cell<u32>,
}

impl FixedDensity {
    fn new(density_kg_per_m3: f64) -> Self {
        Self {
            density_kg_per_m3,
            calls: Cell::new(0),
        }
    }
}

impl PropertySource for FixedDensity {
    fn evaluate(
        &self,
        _composition: &GasComposition,
        _pressure_bara: f64,
        _temperature_c: f64,
    ) -> Result<GasState, GasPropertyError> {
        self.calls.set(self.calls.get() + 1);
        Ok(GasState {
            density_kg_per_m3: self.density_kg_per_m3,
            molar_density_mol_per_l: self.density_kg_per_m3 / 18.0,
            molar_mass_g_per_mol: 18.0,
            z: 1.0,
            cp_j_per_kg_k: 2080.0,
            speed_of_sound_m_per_s: 430.0,
        })
    }
}

#[test]
fn linspace_matches_sweep_contract() {
    let v = linspace(0.0, 300.0, 100);
    assert_eq!(v.len(), 100);
    assert_eq!(v[0], 0.0);
    assert_eq!(v[99], 300.0);
    let step = 300.0 / 99.0;
    for i in 1..v.len() {
        assert!(v[i] > v[i - 1]);
        assert_close(&format!("step {i}"), v[i] - v[i - 1], step, 1e-9);
    }
}

#[test]
fn linspace_degenerate_sample_counts() {
    assert!(linspace(0.0, 300.0, 0).is_empty());
    assert_eq!(linspace(5.0, 300.0, 1), vec![5.0]);
    assert_eq!(linspace(0.0, 300.0, 2), vec![0.0, 300.0]);
}

#[test]
fn pressure_study_relative_difference_series() {
    let source = FixedDensity::new(0.8);
    let input = PressureStudyInput {
        static_pressure_bara: 1.0,
        temperature_c: 20.0,
        velocity_start_m_per_s: 0.0,
        velocity_end_m_per_s: 300.0,
        samples: 100,
    };
    let composition = GasComposition::default_natural_gas();
    let result = run_pressure_study(&composition, &input, &source).expect("pressure study");

    assert_eq!(result.velocities_m_per_s.len(), 100);
    assert_eq!(result.relative_diff_percent.len(), 100);
    // V=0에서는 전압=정압
    assert_eq!(result.relative_diff_percent[0], 0.0);
    // V=300: 0.5·0.8·300² = 36000 Pa → 36 %
    assert_close("last", result.relative_diff_percent[99], 36.0, 1e-12);
    // 단조 증가
    for i in 1..100 {
        assert!(result.relative_diff_percent[i] > result.relative_diff_percent[i - 1]);
    }
}

#[test]
fn pressure_study_evaluates_density_once() {
    // 밀도는 정지 조건에서 1회만 조회해 스윕 전체에 재사용한다
    let source = FixedDensity::new(0.8);
    let input = PressureStudyInput {
        static_pressure_bara: 1.0,
        temperature_c: 20.0,
        velocity_start_m_per_s: 0.0,
        velocity_end_m_per_s: 300.0,
        samples: 100,
    };
    let composition = GasComposition::default_natural_gas();
    let result = run_pressure_study(&composition, &input, &source).expect("pressure study");
    assert_eq!(source.calls.get(), 1);
    assert_eq!(result.gas.density_kg_per_m3, 0.8);
}

#[test]
fn temperature_study_default_scenario() {
    let input = TemperatureStudyInput {
        total_temperature_k: 293.15,
        cp_j_per_kg_k: 2080.0,
        recovery_factor: 0.65,
        velocity_start_m_per_s: 0.0,
        velocity_end_m_per_s: 300.0,
        samples: 100,
    };
    let result = run_temperature_study(&input);

    assert_eq!(result.velocities_m_per_s.len(), 100);
    assert_eq!(result.error_k.len(), 100);
    assert_eq!(result.error_k[0], 0.0);
    assert_eq!(result.static_temperature_k[0], 293.15);
    // V=300: 정온 = 293.15 − 0.5·300²/2080
    assert_close(
        "static @300",
        result.static_temperature_k[99],
        293.15 - 21.634_615_384_615,
        1e-12,
    );
    // V=300: 편차 = (1−0.65)·0.5·300²/2080
    assert_close("error @300", result.error_k[99], 7.572_115_384_615, 1e-12);
}

#[test]
fn temperature_study_series_are_consistent() {
    let input = TemperatureStudyInput {
        total_temperature_k: 320.0,
        cp_j_per_kg_k: 1005.0,
        recovery_factor: 0.8,
        velocity_start_m_per_s: 0.0,
        velocity_end_m_per_s: 250.0,
        samples: 50,
    };
    let result = run_temperature_study(&input);
    for i in 0..50 {
        assert_close(
            &format!("row {i}"),
            result.measured_temperature_k[i] - result.static_temperature_k[i],
            result.error_k[i],
            1e-12,
        );
    }
}
