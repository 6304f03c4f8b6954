use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
    /// 지원하지 않는 물리량
    UnsupportedQuantity(&'static str),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
            ConversionError::UnsupportedQuantity(q) => write!(f, "지원하지 않는 물리량: {q}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 게이지/절대 모드를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressureMode {
    Gauge,
    Absolute,
}

/// 압력 변환 (모드 포함). 내부 기준은 bar(abs)로 처리한 뒤 요청 모드로 반환한다.
pub fn convert_pressure_mode(
    value: f64,
    from_unit: PressureUnit,
    from_mode: PressureMode,
    to_unit: PressureUnit,
    to_mode: PressureMode,
) -> f64 {
    const ATM_BAR: f64 = 1.01325;
    const MMHG_PER_BAR: f64 = 750.062;

    // 입력을 bar(abs)로 환산
    let base = match from_unit {
        PressureUnit::Bar | PressureUnit::BarA => value,
        PressureUnit::Pascal => value / PA_PER_BAR,
        PressureUnit::KiloPascal => value / 100.0,
        PressureUnit::MegaPascal => value * 10.0,
        PressureUnit::Psi => value * 0.0689476,
        PressureUnit::Atm => value * ATM_BAR,
        PressureUnit::MmHg => value / MMHG_PER_BAR,
    };
    let bar_abs = match from_mode {
        PressureMode::Gauge => base + ATM_BAR,
        PressureMode::Absolute => base,
    };

    // 모드에 따라 게이지/절대 환산한 뒤 목표 단위로 변환
    let bar_target = match to_mode {
        PressureMode::Absolute => bar_abs,
        PressureMode::Gauge => bar_abs - ATM_BAR,
    };

    match to_unit {
        PressureUnit::Bar | PressureUnit::BarA => bar_target,
        PressureUnit::Pascal => bar_target * PA_PER_BAR,
        PressureUnit::KiloPascal => bar_target * 100.0,
        PressureUnit::MegaPascal => bar_target / 10.0,
        PressureUnit::Psi => bar_target / 0.0689476,
        PressureUnit::Atm => bar_target / ATM_BAR,
        PressureUnit::MmHg => bar_target * MMHG_PER_BAR,
    }
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from: &str,
    to: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Temperature => Ok(convert_temperature(
            value,
            parse_temperature_unit(from)?,
            parse_temperature_unit(to)?,
        )),
        QuantityKind::TemperatureDifference => Ok(convert_temperature_diff(
            value,
            parse_temperature_diff_unit(from)?,
            parse_temperature_diff_unit(to)?,
        )),
        QuantityKind::Pressure => Ok(convert_pressure(
            value,
            parse_pressure_unit(from)?,
            parse_pressure_unit(to)?,
        )),
        QuantityKind::Velocity => Ok(convert_velocity(
            value,
            parse_velocity_unit(from)?,
            parse_velocity_unit(to)?,
        )),
        QuantityKind::Density => Ok(convert_density(
            value,
            parse_density_unit(from)?,
            parse_density_unit(to)?,
        )),
        QuantityKind::SpecificHeat => Ok(convert_specific_heat(
            value,
            parse_specific_heat_unit(from)?,
            parse_specific_heat_unit(to)?,
        )),
    }
}

/// 압력 단위 문자열을 파싱한다. "bara"/"bar(a)"는 절대압 표기로 받아들인다.
pub fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "bar" | "barg" | "bar(g)" => Ok(PressureUnit::Bar),
        "bara" | "bar(a)" => Ok(PressureUnit::BarA),
        "pa" => Ok(PressureUnit::Pascal),
        "kpa" => Ok(PressureUnit::KiloPascal),
        "mpa" => Ok(PressureUnit::MegaPascal),
        "psi" => Ok(PressureUnit::Psi),
        "atm" => Ok(PressureUnit::Atm),
        "mmhg" => Ok(PressureUnit::MmHg),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

/// 온도 단위 문자열을 파싱한다.
pub fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "c" | "°c" | "celsius" => Ok(TemperatureUnit::Celsius),
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        "f" | "°f" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
        "r" | "rankine" => Ok(TemperatureUnit::Rankine),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_temperature_diff_unit(s: &str) -> Result<TemperatureDiffUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "c" | "°c" | "dc" => Ok(TemperatureDiffUnit::Celsius),
        "k" | "dk" => Ok(TemperatureDiffUnit::Kelvin),
        "f" | "°f" | "df" => Ok(TemperatureDiffUnit::Fahrenheit),
        "r" | "dr" => Ok(TemperatureDiffUnit::Rankine),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_velocity_unit(s: &str) -> Result<VelocityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m/s" | "mps" => Ok(VelocityUnit::MeterPerSecond),
        "ft/s" | "fps" => Ok(VelocityUnit::FootPerSecond),
        "ft/min" | "fpm" => Ok(VelocityUnit::FootPerMinute),
        "km/h" | "kph" => Ok(VelocityUnit::KilometerPerHour),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_density_unit(s: &str) -> Result<DensityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kg/m3" | "kg/m^3" | "kg/m³" => Ok(DensityUnit::KilogramPerCubicMeter),
        "g/l" => Ok(DensityUnit::GramPerLiter),
        "g/cm3" | "g/cm^3" | "g/cm³" => Ok(DensityUnit::GramPerCubicCentimeter),
        "lb/ft3" | "lb/ft^3" | "lb/ft³" => Ok(DensityUnit::PoundPerCubicFoot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_specific_heat_unit(s: &str) -> Result<SpecificHeatUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "j/kgk" | "j/(kg·k)" | "j/kg-k" => Ok(SpecificHeatUnit::JoulePerKilogramKelvin),
        "kj/kgk" | "kj/(kg·k)" | "kj/kg-k" => Ok(SpecificHeatUnit::KilojoulePerKilogramKelvin),
        "kcal/kgc" | "kcal/(kg·°c)" => Ok(SpecificHeatUnit::KcalPerKilogramCelsius),
        "btu/lbf" | "btu/(lb·°f)" => Ok(SpecificHeatUnit::BtuPerPoundFahrenheit),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
