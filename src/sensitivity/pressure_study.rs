use crate::chart::LineChartSpec;
use crate::gas::{GasComposition, GasPropertyError, GasState, PropertySource};
use crate::ptc10;
use crate::sensitivity::sweep::linspace;
use crate::units::PA_PER_BAR;

/// 압력 민감도 차트의 고정 출력 파일명.
pub const CHART_FILE_NAME: &str = "relative_pressure_difference_vs_velocity.png";

/// 압력 민감도 스터디 입력.
#[derive(Debug, Clone)]
pub struct PressureStudyInput {
    /// 정압 [bar abs]
    pub static_pressure_bara: f64,
    /// 가스 온도 [°C]
    pub temperature_c: f64,
    /// 스윕 시작 속도 [m/s]
    pub velocity_start_m_per_s: f64,
    /// 스윕 끝 속도 [m/s]
    pub velocity_end_m_per_s: f64,
    /// 스윕 샘플 수
    pub samples: usize,
}

/// 압력 민감도 스터디 결과. 두 수열은 길이와 인덱스가 정렬되어 있다.
#[derive(Debug, Clone)]
pub struct PressureStudyResult {
    pub velocities_m_per_s: Vec<f64>,
    pub relative_diff_percent: Vec<f64>,
    /// 스윕 전체에 재사용한 정지 조건 물성
    pub gas: GasState,
}

/// 고정 조성·정압·온도에서 속도 스윕을 돌려 전압-정압 상대차 수열을 만든다.
///
/// 밀도는 정지(속도 0) 조건에서 한 번만 계산해 스윕 전체에 재사용한다.
/// 전압 조건마다 재계산하지 않는 것이 이 민감도 모델의 가정이다.
pub fn run_pressure_study(
    composition: &GasComposition,
    input: &PressureStudyInput,
    source: &dyn PropertySource,
) -> Result<PressureStudyResult, GasPropertyError> {
    let gas = source.evaluate(composition, input.static_pressure_bara, input.temperature_c)?;

    let velocities = linspace(
        input.velocity_start_m_per_s,
        input.velocity_end_m_per_s,
        input.samples,
    );
    let p_static_pa = input.static_pressure_bara * PA_PER_BAR;

    let mut relative_diff = Vec::with_capacity(velocities.len());
    for &velocity in &velocities {
        let p_total_pa =
            ptc10::static_to_total_pressure(p_static_pa, velocity, gas.density_kg_per_m3);
        relative_diff.push(ptc10::relative_pressure_difference_percent(
            p_total_pa, p_static_pa,
        ));
    }

    Ok(PressureStudyResult {
        velocities_m_per_s: velocities,
        relative_diff_percent: relative_diff,
        gas,
    })
}

/// 압력 민감도 차트 정의. 문구는 원 차트와 같은 영문 고정이다.
pub fn chart_spec(static_pressure_bara: f64) -> LineChartSpec {
    LineChartSpec {
        title: format!(
            "Effect of dynamic pressure for natural gas at {static_pressure_bara} bara static pressure"
        ),
        x_label: "Velocity [m/s]".to_string(),
        y_label: "(P_tot - P_stat) / P_stat [%]".to_string(),
        series_label: "Relative Difference (%)".to_string(),
        color: plotters::style::BLUE,
    }
}
