use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::gas::composition::GasComposition;
use crate::ptc10::DEFAULT_RECOVERY_FACTOR;
use crate::sensitivity::{PressureStudyInput, TemperatureStudyInput};
use crate::units::*;

/// 각 물리량별 기본 표시 단위 설정을 담는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub temperature: TemperatureUnit,
    pub temperature_diff: TemperatureDiffUnit,
    pub pressure: PressureUnit,
    pub velocity: VelocityUnit,
    pub density: DensityUnit,
    pub specific_heat: SpecificHeatUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            temperature: TemperatureUnit::Celsius,
            temperature_diff: TemperatureDiffUnit::Kelvin,
            pressure: PressureUnit::BarA,
            velocity: VelocityUnit::MeterPerSecond,
            density: DensityUnit::KilogramPerCubicMeter,
            specific_heat: SpecificHeatUnit::JoulePerKilogramKelvin,
        }
    }
}

/// 민감도 스터디의 시나리오 상수.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyConfig {
    /// 정압 [bar abs]
    pub static_pressure_bara: f64,
    /// 가스 온도 [°C] (압력 스터디용)
    pub temperature_c: f64,
    /// 전온 [K] (온도 스터디용)
    pub total_temperature_k: f64,
    /// 정압비열 [J/(kg·K)]
    pub cp_j_per_kg_k: f64,
    /// 회복계수 [-], 기본 0.65
    pub recovery_factor: f64,
    /// 스윕 시작 속도 [m/s]
    pub velocity_start_m_per_s: f64,
    /// 스윕 끝 속도 [m/s]
    pub velocity_end_m_per_s: f64,
    /// 스윕 샘플 수
    pub velocity_samples: usize,
    /// 차트 PNG 출력 디렉터리
    pub chart_dir: String,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            static_pressure_bara: 1.0,
            temperature_c: 20.0,
            total_temperature_k: 293.15,
            cp_j_per_kg_k: 2080.0,
            recovery_factor: DEFAULT_RECOVERY_FACTOR,
            velocity_start_m_per_s: 0.0,
            velocity_end_m_per_s: 300.0,
            velocity_samples: 100,
            chart_dir: ".".to_string(),
        }
    }
}

impl StudyConfig {
    /// 압력 스터디 입력으로 변환한다.
    pub fn pressure_input(&self) -> PressureStudyInput {
        PressureStudyInput {
            static_pressure_bara: self.static_pressure_bara,
            temperature_c: self.temperature_c,
            velocity_start_m_per_s: self.velocity_start_m_per_s,
            velocity_end_m_per_s: self.velocity_end_m_per_s,
            samples: self.velocity_samples,
        }
    }

    /// 온도 스터디 입력으로 변환한다.
    pub fn temperature_input(&self) -> TemperatureStudyInput {
        TemperatureStudyInput {
            total_temperature_k: self.total_temperature_k,
            cp_j_per_kg_k: self.cp_j_per_kg_k,
            recovery_factor: self.recovery_factor,
            velocity_start_m_per_s: self.velocity_start_m_per_s,
            velocity_end_m_per_s: self.velocity_end_m_per_s,
            samples: self.velocity_samples,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// UI 언어 코드 (auto/ko/en-us)
    pub language: String,
    pub default_units: DefaultUnits,
    pub study: StudyConfig,
    /// 천연가스 조성 (몰 퍼센트)
    pub composition: GasComposition,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            default_units: DefaultUnits::default(),
            study: StudyConfig::default(),
            composition: GasComposition::default_natural_gas(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
