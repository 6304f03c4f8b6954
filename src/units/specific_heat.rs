use serde::{Deserialize, Serialize};

/// 정압비열 단위. 내부 기준은 J/(kg·K)이다. 온도 보정식의 Cp 입력 기준과 같다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecificHeatUnit {
    JoulePerKilogramKelvin,
    KilojoulePerKilogramKelvin,
    KcalPerKilogramCelsius,
    BtuPerPoundFahrenheit,
}

fn to_j_per_kg_k(value: f64, unit: SpecificHeatUnit) -> f64 {
    match unit {
        SpecificHeatUnit::JoulePerKilogramKelvin => value,
        SpecificHeatUnit::KilojoulePerKilogramKelvin => value * 1000.0,
        SpecificHeatUnit::KcalPerKilogramCelsius => value * 4184.0,
        SpecificHeatUnit::BtuPerPoundFahrenheit => value * 4186.8,
    }
}

fn from_j_per_kg_k(value: f64, unit: SpecificHeatUnit) -> f64 {
    match unit {
        SpecificHeatUnit::JoulePerKilogramKelvin => value,
        SpecificHeatUnit::KilojoulePerKilogramKelvin => value / 1000.0,
        SpecificHeatUnit::KcalPerKilogramCelsius => value / 4184.0,
        SpecificHeatUnit::BtuPerPoundFahrenheit => value / 4186.8,
    }
}

/// 비열을 변환한다.
pub fn convert_specific_heat(value: f64, from: SpecificHeatUnit, to: SpecificHeatUnit) -> f64 {
    let base = to_j_per_kg_k(value, from);
    from_j_per_kg_k(base, to)
}
