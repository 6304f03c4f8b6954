//! 설정 직렬화 테스트. 기본값이 고정 시나리오 상수를 그대로 담는지 확인한다.
use gas_measurement_toolbox::config::Config;

#[test]
fn defaults_reproduce_fixed_scenario() {
    let cfg = Config::default();
    assert_eq!(cfg.study.static_pressure_bara, 1.0);
    assert_eq!(cfg.study.temperature_c, 20.0);
    assert_eq!(cfg.study.total_temperature_k, 293.15);
    assert_eq!(cfg.study.cp_j_per_kg_k, 2080.0);
    assert_eq!(cfg.study.recovery_factor, 0.65);
    assert_eq!(cfg.study.velocity_start_m_per_s, 0.0);
    assert_eq!(cfg.study.velocity_end_m_per_s, 300.0);
    assert_eq!(cfg.study.velocity_samples, 100);
    assert_eq!(cfg.study.chart_dir, ".");
    assert_eq!(cfg.composition.shares.len(), 7);
    assert!((cfg.composition.mole_percent_total() - 100.0).abs() < 1e-9);
}

#[test]
fn config_toml_round_trip() {
    let cfg = Config::default();
    let text = toml::to_string_pretty(&cfg).expect("serialize");
    let back: Config = toml::from_str(&text).expect("deserialize");
    assert_eq!(back.language, cfg.language);
    assert_eq!(back.study.cp_j_per_kg_k, cfg.study.cp_j_per_kg_k);
    assert_eq!(back.study.recovery_factor, cfg.study.recovery_factor);
    assert_eq!(back.composition.shares.len(), cfg.composition.shares.len());
    assert_eq!(back.composition.shares[2].symbol, "C1");
    assert_eq!(back.composition.shares[2].mole_percent, 90.0);
}
