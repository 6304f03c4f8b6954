//! GERG-2008 계산을 aga8 크레이트로 위임한 래퍼.
//! 입력: 압력(bar, 절대), 온도(°C)
//! 출력: 질량밀도[kg/m³], 몰질량[g/mol], Z, 질량 Cp[J/(kg·K)], 음속[m/s]

use aga8::gerg2008::Gerg2008;

use crate::gas::composition::{CompositionError, GasComposition};

/// 한 번의 엔진 호출로 얻은 물성 묶음. 생성 이후 불변이다.
#[derive(Debug, Clone, Copy)]
pub struct GasState {
    pub density_kg_per_m3: f64,
    pub molar_density_mol_per_l: f64,
    pub molar_mass_g_per_mol: f64,
    pub z: f64,
    pub cp_j_per_kg_k: f64,
    pub speed_of_sound_m_per_s: f64,
}

/// 물성 계산 시 발생 가능한 오류.
#[derive(Debug)]
pub enum GasPropertyError {
    /// 성분 기호 대응 실패
    Composition(CompositionError),
    /// 엔진이 조성을 거부함 (빈 조성, 몰분율 합 이상 등)
    Engine(String),
    /// 유효 범위 밖이거나 수렴 실패
    OutOfRange(&'static str),
}

impl std::fmt::Display for GasPropertyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GasPropertyError::Composition(e) => write!(f, "조성 오류: {e}"),
            GasPropertyError::Engine(msg) => write!(f, "GERG-2008 엔진 오류: {msg}"),
            GasPropertyError::OutOfRange(msg) => write!(f, "GERG-2008 계산 실패: {msg}"),
        }
    }
}

impl std::error::Error for GasPropertyError {}

impl From<CompositionError> for GasPropertyError {
    fn from(value: CompositionError) -> Self {
        GasPropertyError::Composition(value)
    }
}

/// 물성 조회를 좁은 인터페이스 뒤로 숨긴다. 스윕 드라이버는 이 trait만 본다.
pub trait PropertySource {
    fn evaluate(
        &self,
        composition: &GasComposition,
        pressure_bara: f64,
        temperature_c: f64,
    ) -> Result<GasState, GasPropertyError>;
}

/// GERG-2008 실제 구현. 같은 입력이면 같은 출력을 돌려준다.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gerg2008Source;

impl PropertySource for Gerg2008Source {
    fn evaluate(
        &self,
        composition: &GasComposition,
        pressure_bara: f64,
        temperature_c: f64,
    ) -> Result<GasState, GasPropertyError> {
        calculate_from_pt(composition, pressure_bara, temperature_c)
    }
}

/// 압력(bar abs)·온도(°C)에서 가스 물성을 계산한다.
pub fn calculate_from_pt(
    composition: &GasComposition,
    pressure_bara: f64,
    temperature_c: f64,
) -> Result<GasState, GasPropertyError> {
    let engine_composition = composition.to_engine()?;

    let mut gerg = Gerg2008::new();
    gerg.set_composition(&engine_composition)
        .map_err(|e| GasPropertyError::Engine(format!("{e:?}")))?;
    gerg.molar_mass();
    gerg.t = temperature_c + 273.15;
    gerg.p = pressure_bara * 100.0; // bar(a) → kPa
    let _ = gerg.density(0);
    gerg.properties();

    let molar_density = gerg.d; // mol/l
    let molar_mass = gerg.mm; // g/mol
    if !molar_density.is_finite() || molar_density <= 0.0 {
        return Err(GasPropertyError::OutOfRange(
            "밀도 반복 계산이 수렴하지 않았습니다",
        ));
    }
    if !molar_mass.is_finite() || molar_mass <= 0.0 {
        return Err(GasPropertyError::OutOfRange("몰질량 계산 결과가 유효하지 않습니다"));
    }

    Ok(GasState {
        // (mol/l)·(g/mol) = g/l = kg/m³
        density_kg_per_m3: molar_density * molar_mass,
        molar_density_mol_per_l: molar_density,
        molar_mass_g_per_mol: molar_mass,
        z: gerg.z,
        // 몰 기준 Cp[J/(mol·K)] → 질량 기준 [J/(kg·K)]
        cp_j_per_kg_k: gerg.cp / molar_mass * 1000.0,
        speed_of_sound_m_per_s: gerg.w,
    })
}
