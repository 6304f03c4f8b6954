//! GERG-2008 래퍼 테스트. 엔진 결과는 물리적으로 타당한 범위로만 확인한다.
use gas_measurement_toolbox::gas::{
    calculate_from_pt, GasComposition, GasPropertyError,
};

#[test]
fn default_composition_maps_to_engine_fractions() {
    let comp = GasComposition::default_natural_gas();
    assert!((comp.mole_percent_total() - 100.0).abs() < 1e-9);
    let engine = comp.to_engine().expect("engine composition");
    assert!((engine.methane - 0.90).abs() < 1e-12);
    assert!((engine.nitrogen - 0.01).abs() < 1e-12);
    assert!((engine.isobutane - 0.005).abs() < 1e-12);
}

#[test]
fn natural_gas_properties_at_one_bara_20c() {
    let comp = GasComposition::default_natural_gas();
    let state = calculate_from_pt(&comp, 1.0, 20.0).expect("gerg state");

    // 1 bara/20 °C 천연가스: 이상기체 근사 ≈ 0.74 kg/m³ 부근
    assert!(
        state.density_kg_per_m3 > 0.65 && state.density_kg_per_m3 < 0.85,
        "density={}",
        state.density_kg_per_m3
    );
    assert!(
        state.molar_mass_g_per_mol > 17.5 && state.molar_mass_g_per_mol < 19.0,
        "molar mass={}",
        state.molar_mass_g_per_mol
    );
    // 저압이므로 Z는 1에 가깝다
    assert!(state.z > 0.95 && state.z < 1.001, "z={}", state.z);
    assert!(
        state.cp_j_per_kg_k > 1500.0 && state.cp_j_per_kg_k < 3000.0,
        "cp={}",
        state.cp_j_per_kg_k
    );
    assert!(
        state.speed_of_sound_m_per_s > 300.0 && state.speed_of_sound_m_per_s < 500.0,
        "w={}",
        state.speed_of_sound_m_per_s
    );
}

#[test]
fn same_inputs_give_same_outputs() {
    let comp = GasComposition::default_natural_gas();
    let a = calculate_from_pt(&comp, 1.0, 20.0).expect("first");
    let b = calculate_from_pt(&comp, 1.0, 20.0).expect("second");
    assert_eq!(a.density_kg_per_m3, b.density_kg_per_m3);
    assert_eq!(a.z, b.z);
}

#[test]
fn unknown_component_symbol_is_rejected() {
    let comp = GasComposition::from_pairs(&[("C1", 90.0), ("XYZ", 10.0)]);
    match calculate_from_pt(&comp, 1.0, 20.0) {
        Err(GasPropertyError::Composition(e)) => {
            assert!(e.to_string().contains("XYZ"));
        }
        other => panic!("expected composition error, got {other:?}"),
    }
}

#[test]
fn empty_composition_is_rejected_by_engine() {
    let comp = GasComposition::default();
    assert!(calculate_from_pt(&comp, 1.0, 20.0).is_err());
}
