//! 단위 변환 회귀 테스트. mmHg 게이지 규약과 새 물리량(밀도/비열)을 확인한다.
use gas_measurement_toolbox::conversion::{convert, convert_pressure_mode, PressureMode};
use gas_measurement_toolbox::quantity::QuantityKind;
use gas_measurement_toolbox::units::PressureUnit;

#[test]
fn mmhg_gauge_to_abs_bar() {
    // 0 mmHg(g) => 1 atm abs ≈ 1.01325 barA
    let bar_abs = convert_pressure_mode(
        0.0,
        PressureUnit::MmHg,
        PressureMode::Gauge,
        PressureUnit::Bar,
        PressureMode::Absolute,
    );
    assert!((bar_abs - 1.01325).abs() < 1e-4);
}

#[test]
fn mmhg_full_vacuum_to_abs_bar() {
    // -760 mmHg(g) => 0 bar abs
    let bar_abs = convert_pressure_mode(
        -760.0,
        PressureUnit::MmHg,
        PressureMode::Gauge,
        PressureUnit::Bar,
        PressureMode::Absolute,
    );
    assert!(bar_abs.abs() < 1e-5);
}

#[test]
fn one_bara_is_100_kpa_abs() {
    let kpa_abs = convert_pressure_mode(
        1.0,
        PressureUnit::BarA,
        PressureMode::Absolute,
        PressureUnit::KiloPascal,
        PressureMode::Absolute,
    );
    assert!((kpa_abs - 100.0).abs() < 1e-9);
}

#[test]
fn convert_temperature_celsius_to_kelvin() {
    let out = convert(QuantityKind::Temperature, 20.0, "C", "K").expect("temperature");
    assert!((out - 293.15).abs() < 1e-12);
}

#[test]
fn convert_velocity_mps_to_kph() {
    let out = convert(QuantityKind::Velocity, 1.0, "m/s", "km/h").expect("velocity");
    assert!((out - 3.6).abs() < 1e-12);
}

#[test]
fn convert_density_lb_ft3_roundtrip() {
    let kg = convert(QuantityKind::Density, 1.0, "lb/ft3", "kg/m3").expect("density");
    assert!((kg - 16.018_463).abs() < 1e-6);
    let back = convert(QuantityKind::Density, kg, "kg/m3", "lb/ft3").expect("density back");
    assert!((back - 1.0).abs() < 1e-12);
}

#[test]
fn convert_specific_heat_kcal_to_joule() {
    let out = convert(QuantityKind::SpecificHeat, 1.0, "kcal/kgC", "J/kgK").expect("cp");
    assert!((out - 4184.0).abs() < 1e-9);
}

#[test]
fn unknown_unit_is_rejected() {
    let err = convert(QuantityKind::Pressure, 1.0, "furlong", "bar").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("furlong"), "unexpected error message: {msg}");
}
