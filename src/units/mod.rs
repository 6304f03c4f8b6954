//! 단위 정의 및 변환 모듈 모음.

pub mod density;
pub mod pressure;
pub mod specific_heat;
pub mod temperature;
pub mod velocity;

pub use density::{convert_density, DensityUnit};
pub use pressure::{convert_pressure, PressureKind, PressureUnit, PA_PER_BAR};
pub use specific_heat::{convert_specific_heat, SpecificHeatUnit};
pub use temperature::{
    convert_temperature, convert_temperature_diff, TemperatureDiffUnit, TemperatureUnit,
};
pub use velocity::{convert_velocity, VelocityUnit};
